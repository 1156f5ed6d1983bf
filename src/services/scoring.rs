//! Weather-match scoring
//!
//! A candidate starts at [`BASE_SCORE`] and collects bonuses for a genre
//! keyword in its title, for recency and for having a poster. The total is
//! clamped to 0..=100, then nudged by a bounded random jitter so equally
//! attributed candidates do not always tie.

use chrono::{Datelike, Utc};
use rand::Rng;
use std::sync::Arc;

use crate::{models::MovieCandidate, services::genres::Genre};

pub const BASE_SCORE: i32 = 50;
pub const GENRE_MATCH_BONUS: i32 = 30;
pub const UNMATCHED_BONUS: i32 = 10;
pub const POSTER_BONUS: i32 = 5;
pub const MAX_SCORE: i32 = 100;
/// Jitter is drawn from `-MAX_JITTER..=MAX_JITTER`
pub const MAX_JITTER: f64 = 5.0;

/// Source of the per-candidate score jitter
pub trait JitterSource: Send + Sync {
    /// A value in `-MAX_JITTER..=MAX_JITTER`
    fn jitter(&self) -> f64;
}

/// Uniform jitter from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn jitter(&self) -> f64 {
        rand::rng().random_range(-MAX_JITTER..=MAX_JITTER)
    }
}

/// Constant jitter, clamped into range. `FixedJitter(0.0)` disables it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn jitter(&self) -> f64 {
        self.0.clamp(-MAX_JITTER, MAX_JITTER)
    }
}

fn recency_bonus(age: i32) -> i32 {
    match age {
        a if a < 5 => 20,
        a if a < 15 => 10,
        a if a < 30 => 5,
        _ => 0,
    }
}

pub struct MatchScorer {
    jitter: Arc<dyn JitterSource>,
    /// Pinned year for reproducible scoring; `None` reads the clock
    current_year: Option<i32>,
}

impl MatchScorer {
    pub fn new(jitter: Arc<dyn JitterSource>) -> Self {
        Self {
            jitter,
            current_year: None,
        }
    }

    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Utc::now().year())
    }

    /// Deterministic part of the score, already clamped to 0..=100.
    ///
    /// The keyword bonus is awarded for the first genre in `genres` order
    /// whose keyword appears in the title; later genres are not checked.
    pub fn base_score(&self, movie: &MovieCandidate, genres: &[Genre]) -> i32 {
        let title = movie.title.to_lowercase();

        let genre_match = genres.iter().find(|genre| {
            genre
                .title_keywords()
                .iter()
                .any(|keyword| title.contains(keyword))
        });

        let mut score = BASE_SCORE;
        score += if genre_match.is_some() {
            GENRE_MATCH_BONUS
        } else {
            UNMATCHED_BONUS
        };

        if let Some(year) = movie.release_year() {
            score += recency_bonus(self.current_year() - year);
        }

        if movie.has_poster() {
            score += POSTER_BONUS;
        }

        score.clamp(0, MAX_SCORE)
    }

    /// Final 0..=100 score including jitter
    pub fn score(&self, movie: &MovieCandidate, genres: &[Genre]) -> u8 {
        let base = f64::from(self.base_score(movie, genres));
        let jittered = (base + self.jitter.jitter()).round();
        jittered.clamp(0.0, f64::from(MAX_SCORE)) as u8
    }
}
