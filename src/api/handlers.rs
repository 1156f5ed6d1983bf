use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::AppState;
use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{ScoredMovie, SearchOutcome, WeatherSummary},
    services::SessionView,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Results,
    Empty,
}

/// One ranked movie as rendered by clients
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    #[serde(flatten)]
    pub movie: ScoredMovie,
    /// `poster_url`, or a placeholder image when the catalog has none
    pub display_poster: String,
}

impl From<ScoredMovie> for MovieResponse {
    fn from(movie: ScoredMovie) -> Self {
        Self {
            display_poster: movie.display_poster().to_string(),
            movie,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub status: ResultStatus,
    pub weather: WeatherSummary,
    pub movies: Vec<MovieResponse>,
}

impl From<SearchOutcome> for RecommendationResponse {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Results {
                weather, movies, ..
            } => Self {
                status: ResultStatus::Results,
                weather,
                movies: movies.into_iter().map(MovieResponse::from).collect(),
            },
            SearchOutcome::Empty { weather, .. } => Self {
                status: ResultStatus::Empty,
                weather,
                movies: Vec::new(),
            },
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Ranked, weather-matched movies for `?city=`
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        city = %params.city,
        "Processing recommendation request"
    );

    let outcome = state.recommender.run_search(&params.city).await?;

    tracing::info!(
        request_id = %request_id,
        movies = outcome.movies().len(),
        "Recommendation request completed"
    );

    Ok(Json(outcome.into()))
}

/// Current session phase and the sticky rate-limit flag
pub async fn session_status(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.recommender.session().snapshot().await)
}

/// Clears the rate-limit flag
pub async fn reset_session(State(state): State<AppState>) -> Json<SessionView> {
    state.recommender.session().reset_rate_limit();
    Json(state.recommender.session().snapshot().await)
}
