//! Static genre tables
//!
//! Maps each weather condition to the genres worth watching in it, and each
//! genre to the catalog search terms and title keywords associated with it.
//! All tables are immutable; every `WeatherCondition` has exactly one entry.

use serde::Serialize;
use std::fmt::Display;

use crate::models::WeatherCondition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Horror,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    Fantasy,
    Animation,
    Family,
    Crime,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Adventure => "adventure",
            Genre::Comedy => "comedy",
            Genre::Drama => "drama",
            Genre::Horror => "horror",
            Genre::Mystery => "mystery",
            Genre::Romance => "romance",
            Genre::SciFi => "sci-fi",
            Genre::Thriller => "thriller",
            Genre::Fantasy => "fantasy",
            Genre::Animation => "animation",
            Genre::Family => "family",
            Genre::Crime => "crime",
        }
    }

    /// Catalog queries issued for this genre, in priority order
    pub fn search_terms(&self) -> &'static [&'static str] {
        match self {
            Genre::Action => &["avengers", "mission", "fast", "john wick", "transformers"],
            Genre::Adventure => &["indiana jones", "jurassic", "journey", "pirates", "avatar"],
            Genre::Comedy => &["hangover", "wedding", "home alone", "deadpool", "austin powers"],
            Genre::Drama => &["godfather", "shawshank", "forrest gump", "beautiful mind", "prestige"],
            Genre::Horror => &["conjuring", "exorcist", "halloween", "scream", "shining"],
            Genre::Mystery => &["inception", "shutter island", "gone girl", "memento", "usual suspects"],
            Genre::Romance => &["notebook", "titanic", "love actually", "eternal sunshine", "proposal"],
            Genre::SciFi => &["matrix", "blade runner", "interstellar", "arrival", "star wars"],
            Genre::Thriller => &["dark knight", "silence lambs", "seven", "prisoners", "departed"],
            Genre::Fantasy => &["lord rings", "harry potter", "hobbit", "chronicles narnia", "alice wonderland"],
            Genre::Animation => &["toy story", "finding nemo", "frozen", "lion king", "up"],
            Genre::Family => &["incredibles", "moana", "despicable", "shrek", "minions"],
            Genre::Crime => &["goodfellas", "casino", "heat", "reservoir dogs", "pulp fiction"],
        }
    }

    /// Lower-case title fragments that suggest a movie belongs to this genre.
    /// Genres without a list never match.
    pub fn title_keywords(&self) -> &'static [&'static str] {
        match self {
            Genre::Action => &["mission", "fast", "avengers", "war", "fight", "battle"],
            Genre::Adventure => &["journey", "quest", "world", "lost", "island"],
            Genre::Comedy => &["wedding", "hangover", "funny", "crazy", "stupid"],
            Genre::Drama => &["beautiful", "life", "story", "love", "king"],
            Genre::Horror => &["dark", "dead", "evil", "night", "fear"],
            Genre::Mystery => &["gone", "secret", "unknown", "hidden", "truth"],
            Genre::Thriller => &["silence", "prisoner", "dark", "seven", "departed"],
            Genre::Fantasy => &["lord", "magic", "wizard", "dragon", "kingdom"],
            Genre::SciFi => &["star", "space", "future", "matrix", "alien"],
            Genre::Romance | Genre::Animation | Genre::Family | Genre::Crime => &[],
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered genres plus a human-readable description for one condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreSet {
    pub genres: &'static [Genre],
    pub description: &'static str,
}

pub fn genre_set(condition: WeatherCondition) -> GenreSet {
    use Genre::*;

    let (genres, description): (&'static [Genre], &'static str) = match condition {
        WeatherCondition::Clear => (&[Action, Adventure, Family], "sunny"),
        WeatherCondition::Rainy => (&[Drama, Romance, Comedy], "rainy"),
        WeatherCondition::Cloudy => (&[Mystery, Thriller, Crime], "cloudy"),
        WeatherCondition::Snowy => (&[Fantasy, Animation, Family], "snowy"),
        WeatherCondition::Stormy => (&[Horror, Thriller, SciFi], "stormy"),
        WeatherCondition::Cold => (&[Horror, Thriller, Mystery], "cold"),
        WeatherCondition::Hot => (&[Action, Adventure, Comedy], "hot"),
    };

    GenreSet {
        genres,
        description,
    }
}
