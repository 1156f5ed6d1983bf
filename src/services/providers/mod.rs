/// Upstream data providers
///
/// The recommendation pipeline talks to three remote services through the
/// traits below: a city geocoder, a current-weather source and a movie
/// catalog. Concrete implementations live in the submodules; tests swap in
/// mocks.
use crate::{
    error::AppResult,
    models::{CurrentWeather, GeoLocation, MovieCandidate},
};

pub mod omdb;
pub mod open_meteo;

/// Why a single catalog search produced nothing
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Credentials rejected (HTTP 401)
    #[error("catalog rejected the API key")]
    Unauthorized,

    /// Quota exhausted (HTTP 429)
    #[error("catalog rate limit reached")]
    RateLimited,

    /// Network hiccup, unexpected status or unreadable body
    #[error("catalog request failed: {0}")]
    Transient(String),

    /// The catalog answered but had nothing for the term
    #[error("no match: {0}")]
    NoMatch(String),
}

impl CatalogError {
    /// Hard failures abort the whole aggregation; the rest are absorbed
    pub fn is_hard(&self) -> bool {
        matches!(self, CatalogError::Unauthorized | CatalogError::RateLimited)
    }
}

/// Movie catalog searched by free-text term
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search movies matching one term, in catalog order
    async fn search_movies(&self, term: &str) -> Result<Vec<MovieCandidate>, CatalogError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// City name lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Best match for `city`, or `None` when nothing matches
    async fn geocode(&self, city: &str) -> AppResult<Option<GeoLocation>>;
}

/// Current conditions by coordinates
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current_weather(&self, latitude: f64, longitude: f64) -> AppResult<CurrentWeather>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_failures() {
        assert!(CatalogError::Unauthorized.is_hard());
        assert!(CatalogError::RateLimited.is_hard());
        assert!(!CatalogError::Transient("timeout".into()).is_hard());
        assert!(!CatalogError::NoMatch("Movie not found!".into()).is_hard());
    }
}
