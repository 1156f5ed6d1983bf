/// OMDb catalog provider
///
/// Uses the `s=` search endpoint restricted to movies. Each call is one term;
/// the status code and the `Response` flag in the body decide how failures
/// are classified:
///
/// - 401 → `Unauthorized`
/// - 429 → `RateLimited`
/// - other non-success, transport or decode errors → `Transient`
/// - `"Response": "False"` (e.g. "Movie not found!") → `NoMatch`
use crate::{
    error::AppResult,
    models::MovieCandidate,
    services::providers::{CatalogError, MovieCatalog},
};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use std::time::Duration;

const SEARCH_TYPE: &str = "movie";

/// One entry of an OMDb search page
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

impl From<OmdbSearchItem> for MovieCandidate {
    fn from(item: OmdbSearchItem) -> Self {
        MovieCandidate {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster_url: item
                .poster
                .unwrap_or_else(|| crate::models::NO_POSTER.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<OmdbSearchItem>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    fn classify_status(status: StatusCode) -> Option<CatalogError> {
        match status {
            StatusCode::UNAUTHORIZED => Some(CatalogError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Some(CatalogError::RateLimited),
            s if !s.is_success() => Some(CatalogError::Transient(format!(
                "OMDb returned status {}",
                s
            ))),
            _ => None,
        }
    }

    fn parse_body(body: &str) -> Result<Vec<MovieCandidate>, CatalogError> {
        let parsed: OmdbSearchResponse = serde_json::from_str(body).map_err(|e| {
            tracing::debug!(error = %e, response = %body, "Unreadable OMDb response");
            CatalogError::Transient(format!("Failed to parse OMDb response: {}", e))
        })?;

        if parsed.response.eq_ignore_ascii_case("false") {
            return Err(CatalogError::NoMatch(
                parsed.error.unwrap_or_else(|| "no results".to_string()),
            ));
        }

        Ok(parsed.search.into_iter().map(MovieCandidate::from).collect())
    }
}

#[async_trait::async_trait]
impl MovieCatalog for OmdbProvider {
    async fn search_movies(&self, term: &str) -> Result<Vec<MovieCandidate>, CatalogError> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", term),
                ("type", SEARCH_TYPE),
            ])
            .send()
            .await
            .map_err(|e| CatalogError::Transient(e.to_string()))?;

        if let Some(error) = Self::classify_status(response.status()) {
            return Err(error);
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transient(e.to_string()))?;

        let movies = Self::parse_body(&body)?;

        tracing::debug!(
            term = %term,
            results = movies.len(),
            provider = "omdb",
            "Catalog search completed"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
