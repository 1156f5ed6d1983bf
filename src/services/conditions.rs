use crate::models::{WeatherCondition, WeatherObservation};

/// Below this a clear day reads as cold
pub const COLD_THRESHOLD_C: f64 = 5.0;
/// Above this a clear day reads as hot
pub const HOT_THRESHOLD_C: f64 = 30.0;

/// WMO codes with a configured condition, for table-driven callers and tests
pub const MAPPED_WEATHER_CODES: [i32; 24] = [
    0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73, 75, 77, 80, 81, 82, 85, 86, 95, 96, 99,
];

/// Condition for a raw WMO code. Unknown codes read as cloudy.
pub fn condition_for_code(code: i32) -> WeatherCondition {
    match code {
        0 | 1 => WeatherCondition::Clear,
        2 | 3 | 45 | 48 => WeatherCondition::Cloudy,
        51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 => WeatherCondition::Rainy,
        71 | 73 | 75 | 77 | 85 | 86 => WeatherCondition::Snowy,
        82 | 95 | 96 | 99 => WeatherCondition::Stormy,
        _ => WeatherCondition::Cloudy,
    }
}

/// Resolves an observation to the label used for genre selection.
///
/// Only `Clear` is refined by temperature; every other condition is taken
/// from the code table as-is.
pub fn resolve_condition(observation: &WeatherObservation) -> WeatherCondition {
    match condition_for_code(observation.weather_code) {
        WeatherCondition::Clear if observation.temperature_c < COLD_THRESHOLD_C => {
            WeatherCondition::Cold
        }
        WeatherCondition::Clear if observation.temperature_c > HOT_THRESHOLD_C => {
            WeatherCondition::Hot
        }
        condition => condition,
    }
}
