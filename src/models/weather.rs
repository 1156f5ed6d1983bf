use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Current conditions for one resolved city, produced once per search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub city_name: String,
    pub country_name: String,
    pub temperature_c: f64,
    /// WMO weather interpretation code
    pub weather_code: i32,
    pub wind_speed: f64,
}

/// Discrete weather label driving genre selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Clear,
    Rainy,
    Cloudy,
    Snowy,
    Stormy,
    Cold,
    Hot,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 7] = [
        WeatherCondition::Clear,
        WeatherCondition::Rainy,
        WeatherCondition::Cloudy,
        WeatherCondition::Snowy,
        WeatherCondition::Stormy,
        WeatherCondition::Cold,
        WeatherCondition::Hot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Snowy => "snowy",
            WeatherCondition::Stormy => "stormy",
            WeatherCondition::Cold => "cold",
            WeatherCondition::Hot => "hot",
        }
    }
}

impl Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a city lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
}

/// Raw current-weather reading for a coordinate pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature_c: f64,
    pub weather_code: i32,
    pub wind_speed: f64,
}

impl WeatherObservation {
    pub fn new(location: &GeoLocation, current: &CurrentWeather) -> Self {
        Self {
            city_name: location.name.clone(),
            country_name: location.country.clone(),
            temperature_c: current.temperature_c,
            weather_code: current.weather_code,
            wind_speed: current.wind_speed,
        }
    }
}
