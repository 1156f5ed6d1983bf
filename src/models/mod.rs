mod movie;
mod outcome;
mod weather;

pub use movie::{MovieCandidate, ScoredMovie, NO_POSTER, PLACEHOLDER_POSTER_URL};
pub use outcome::{SearchOutcome, WeatherSummary};
pub use weather::{CurrentWeather, GeoLocation, WeatherCondition, WeatherObservation};
