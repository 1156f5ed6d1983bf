use serde::{Deserialize, Serialize};

use super::WeatherCondition;

/// Sentinel the catalog uses for a missing poster
pub const NO_POSTER: &str = "N/A";

/// Shown in place of a missing poster
pub const PLACEHOLDER_POSTER_URL: &str =
    "https://via.placeholder.com/300x450/434343/ffffff?text=No+Poster";

/// One catalog hit; identity is `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCandidate {
    pub id: String,
    pub title: String,
    /// Kept verbatim; ranges like "2010–2015" are valid
    pub year: String,
    pub poster_url: String,
}

impl MovieCandidate {
    pub fn has_poster(&self) -> bool {
        !self.poster_url.is_empty() && self.poster_url != NO_POSTER
    }

    /// Release year from the leading digits of `year`
    pub fn release_year(&self) -> Option<i32> {
        let digits: String = self
            .year
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}

/// A candidate joined with its weather relevance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMovie {
    #[serde(flatten)]
    pub movie: MovieCandidate,
    pub weather_match_score: u8,
    pub weather_condition: WeatherCondition,
    pub temperature_c: f64,
}

impl ScoredMovie {
    pub fn display_poster(&self) -> &str {
        if self.movie.has_poster() {
            &self.movie.poster_url
        } else {
            PLACEHOLDER_POSTER_URL
        }
    }
}
