use serde::{Deserialize, Serialize};

use super::{ScoredMovie, WeatherCondition, WeatherObservation};

/// Weather block shown next to the ranked list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub city: String,
    pub country: String,
    /// Whole degrees Celsius, halves rounded up (-2.5 → -2)
    pub temperature_c: i64,
    pub wind_speed: f64,
    pub condition: WeatherCondition,
    pub description: String,
    pub subtitle: String,
}

impl WeatherSummary {
    pub fn new(
        observation: &WeatherObservation,
        condition: WeatherCondition,
        description: &str,
    ) -> Self {
        Self {
            city: observation.city_name.clone(),
            country: observation.country_name.clone(),
            temperature_c: (observation.temperature_c + 0.5).floor() as i64,
            wind_speed: observation.wind_speed,
            condition,
            description: description.to_string(),
            subtitle: format!("Perfect {} weather picks for you", description),
        }
    }
}

/// Terminal state of a successful search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// At least one movie survived aggregation
    Results {
        observation: WeatherObservation,
        weather: WeatherSummary,
        movies: Vec<ScoredMovie>,
    },
    /// Every search succeeded or failed softly but nothing matched
    Empty {
        observation: WeatherObservation,
        weather: WeatherSummary,
    },
}

impl SearchOutcome {
    pub fn weather(&self) -> &WeatherSummary {
        match self {
            SearchOutcome::Results { weather, .. } | SearchOutcome::Empty { weather, .. } => weather,
        }
    }

    pub fn observation(&self) -> &WeatherObservation {
        match self {
            SearchOutcome::Results { observation, .. }
            | SearchOutcome::Empty { observation, .. } => observation,
        }
    }

    pub fn movies(&self) -> &[ScoredMovie] {
        match self {
            SearchOutcome::Results { movies, .. } => movies,
            SearchOutcome::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rounds_temperature() {
        let observation = WeatherObservation {
            city_name: "Paris".to_string(),
            country_name: "France".to_string(),
            temperature_c: 21.6,
            weather_code: 1,
            wind_speed: 3.0,
        };
        let summary = WeatherSummary::new(&observation, WeatherCondition::Clear, "sunny");
        assert_eq!(summary.temperature_c, 22);
        assert_eq!(summary.subtitle, "Perfect sunny weather picks for you");
    }

    #[test]
    fn test_summary_rounds_halves_up() {
        let mut observation = WeatherObservation {
            city_name: "Oslo".to_string(),
            country_name: "Norway".to_string(),
            temperature_c: -2.5,
            weather_code: 71,
            wind_speed: 3.0,
        };
        let cases = [(-2.5, -2), (-2.6, -3), (2.5, 3), (-0.4, 0), (0.0, 0)];
        for (reading, expected) in cases {
            observation.temperature_c = reading;
            let summary = WeatherSummary::new(&observation, WeatherCondition::Snowy, "snowy");
            assert_eq!(summary.temperature_c, expected, "reading {}", reading);
        }
    }
}
