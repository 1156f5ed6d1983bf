use crate::{
    models::{MovieCandidate, ScoredMovie, WeatherCondition, WeatherObservation},
    services::{genres::genre_set, scoring::MatchScorer},
};

/// Scores every candidate and orders them best-first.
///
/// The sort is stable, so equal scores keep the merge order they arrived in.
pub fn rank_movies(
    candidates: Vec<MovieCandidate>,
    observation: &WeatherObservation,
    condition: WeatherCondition,
    scorer: &MatchScorer,
) -> Vec<ScoredMovie> {
    let genres = genre_set(condition).genres;

    let mut ranked: Vec<ScoredMovie> = candidates
        .into_iter()
        .map(|movie| {
            let weather_match_score = scorer.score(&movie, genres);
            ScoredMovie {
                movie,
                weather_match_score,
                weather_condition: condition,
                temperature_c: observation.temperature_c,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.weather_match_score.cmp(&a.weather_match_score));
    ranked
}
