use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{MovieCandidate, WeatherCondition},
    services::{
        genres::{genre_set, Genre},
        providers::{CatalogError, MovieCatalog},
        session::SearchSession,
    },
};

/// Upper bound on concurrent catalog calls per aggregation
pub const MAX_SEARCH_TERMS: usize = 10;
/// Upper bound on merged candidates handed to scoring
pub const MAX_CANDIDATES: usize = 12;

/// Search terms for `genres`, first-seen order, deduplicated and capped
pub fn search_terms(genres: &[Genre]) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    genres
        .iter()
        .flat_map(|genre| genre.search_terms().iter().copied())
        .filter(|term| seen.insert(*term))
        .take(MAX_SEARCH_TERMS)
        .collect()
}

/// Drops repeated ids, keeping the first occurrence
pub fn dedup_by_id(movies: impl IntoIterator<Item = MovieCandidate>) -> Vec<MovieCandidate> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.id.clone()))
        .collect()
}

/// Fans one catalog search out per term and merges what comes back
pub struct SearchAggregator {
    catalog: Arc<dyn MovieCatalog>,
    session: Arc<SearchSession>,
}

impl SearchAggregator {
    pub fn new(catalog: Arc<dyn MovieCatalog>, session: Arc<SearchSession>) -> Self {
        Self { catalog, session }
    }

    /// Candidates for a weather condition, capped at [`MAX_CANDIDATES`]
    pub async fn aggregate(&self, condition: WeatherCondition) -> AppResult<Vec<MovieCandidate>> {
        let terms = search_terms(genre_set(condition).genres);
        self.search_all(&terms).await
    }

    /// Runs one search per term concurrently.
    ///
    /// Results are folded in submission order, not completion order, so the
    /// first occurrence of an id is always the one from the earliest term.
    /// Soft failures contribute nothing. An unauthorized or rate-limited
    /// response aborts the searches still in flight and fails the whole call.
    pub async fn search_all(&self, terms: &[&str]) -> AppResult<Vec<MovieCandidate>> {
        if self.session.is_rate_limited() {
            return Err(AppError::rate_limited());
        }

        let terms = &terms[..terms.len().min(MAX_SEARCH_TERMS)];
        let mut tasks = Vec::with_capacity(terms.len());

        for term in terms {
            let catalog = self.catalog.clone();
            let session = self.session.clone();
            let term = term.to_string();
            let task = tokio::spawn(async move {
                let result = catalog.search_movies(&term).await;
                if let Err(CatalogError::RateLimited) = result {
                    session.mark_rate_limited();
                }
                (term, result)
            });
            tasks.push(task);
        }

        let mut merged = Vec::new();
        let mut soft_failures = 0usize;
        let mut pending = tasks.into_iter();

        while let Some(task) = pending.next() {
            match task.await {
                Ok((_, Ok(movies))) => merged.extend(movies),
                Ok((term, Err(error))) if error.is_hard() => {
                    pending.by_ref().for_each(|t| t.abort());
                    tracing::error!(
                        term = %term,
                        provider = self.catalog.name(),
                        error = %error,
                        "Catalog search failed hard; aborting aggregation"
                    );
                    return Err(match error {
                        CatalogError::RateLimited => AppError::rate_limited(),
                        _ => AppError::invalid_credentials(),
                    });
                }
                Ok((term, Err(error))) => {
                    tracing::warn!(term = %term, error = %error, "Search term produced nothing");
                    soft_failures += 1;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Search task join error");
                    soft_failures += 1;
                }
            }
        }

        let mut movies = dedup_by_id(merged);
        movies.truncate(MAX_CANDIDATES);

        tracing::info!(
            terms = terms.len(),
            soft_failures,
            candidates = movies.len(),
            provider = self.catalog.name(),
            "Catalog aggregation completed"
        );

        Ok(movies)
    }
}
