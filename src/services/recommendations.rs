use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{SearchOutcome, WeatherObservation, WeatherSummary},
    services::{
        aggregator::SearchAggregator,
        conditions::resolve_condition,
        genres::genre_set,
        providers::{Geocoder, MovieCatalog, WeatherSource},
        ranking::rank_movies,
        scoring::{MatchScorer, RandomJitter},
        session::{SearchPhase, SearchSession},
    },
};

/// Weather-matched movie recommendations for a city
///
/// One instance lives for the whole process and owns the session, so the
/// rate-limit flag persists across searches until explicitly reset.
pub struct RecommendationService {
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherSource>,
    aggregator: SearchAggregator,
    scorer: MatchScorer,
    session: Arc<SearchSession>,
    credentials_configured: bool,
}

impl RecommendationService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        weather: Arc<dyn WeatherSource>,
        catalog: Arc<dyn MovieCatalog>,
        credentials_configured: bool,
    ) -> Self {
        let session = Arc::new(SearchSession::new());
        Self {
            geocoder,
            weather,
            aggregator: SearchAggregator::new(catalog, session.clone()),
            scorer: MatchScorer::new(Arc::new(RandomJitter)),
            session,
            credentials_configured,
        }
    }

    /// Replaces the default randomly-jittered scorer
    pub fn with_scorer(mut self, scorer: MatchScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn is_rate_limited(&self) -> bool {
        self.session.is_rate_limited()
    }

    /// Runs the full pipeline for `city`.
    ///
    /// Blank input, missing credentials and a tripped rate limit are refused
    /// before any network call. Zero surviving candidates is
    /// [`SearchOutcome::Empty`], not an error.
    pub async fn run_search(&self, city: &str) -> AppResult<SearchOutcome> {
        let city = city.trim();

        if city.is_empty() {
            return Err(AppError::Validation("Please enter a city name".to_string()));
        }

        if !self.credentials_configured {
            return Err(AppError::Validation(
                "Please set OMDB_API_KEY. Get a free key at https://www.omdbapi.com/apikey.aspx"
                    .to_string(),
            ));
        }

        if self.session.is_rate_limited() {
            return Err(AppError::rate_limited());
        }

        self.session.begin_search(city).await;

        let result = self.search(city).await;

        let phase = match &result {
            Ok(SearchOutcome::Results { .. }) => SearchPhase::Results,
            Ok(SearchOutcome::Empty { .. }) => SearchPhase::Empty,
            Err(e) => {
                tracing::error!(city = %city, error = %e, "Search failed");
                SearchPhase::Error
            }
        };
        self.session.finish_search(phase).await;

        result
    }

    async fn search(&self, city: &str) -> AppResult<SearchOutcome> {
        let observation = self.fetch_observation(city).await?;
        let condition = resolve_condition(&observation);
        let weather = WeatherSummary::new(&observation, condition, genre_set(condition).description);

        tracing::info!(
            city = %observation.city_name,
            country = %observation.country_name,
            temperature_c = observation.temperature_c,
            weather_code = observation.weather_code,
            condition = %condition,
            "Resolved weather condition"
        );

        let candidates = self.aggregator.aggregate(condition).await?;

        if candidates.is_empty() {
            tracing::info!(city = %city, "No candidates survived aggregation");
            return Ok(SearchOutcome::Empty {
                observation,
                weather,
            });
        }

        let movies = rank_movies(candidates, &observation, condition, &self.scorer);

        tracing::info!(city = %city, movies = movies.len(), "Recommendations ranked");

        Ok(SearchOutcome::Results {
            observation,
            weather,
            movies,
        })
    }

    async fn fetch_observation(&self, city: &str) -> AppResult<WeatherObservation> {
        let location = self.geocoder.geocode(city).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "City \"{}\" not found. Please try a different city name.",
                city
            ))
        })?;

        let current = self
            .weather
            .current_weather(location.latitude, location.longitude)
            .await?;

        Ok(WeatherObservation::new(&location, &current))
    }
}
