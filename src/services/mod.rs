pub mod aggregator;
pub mod conditions;
pub mod genres;
pub mod providers;
pub mod ranking;
pub mod recommendations;
pub mod scoring;
pub mod session;

pub use aggregator::SearchAggregator;
pub use recommendations::RecommendationService;
pub use scoring::MatchScorer;
pub use session::{SearchPhase, SearchSession, SessionView};
