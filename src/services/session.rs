use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Where the most recent search stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPhase {
    Idle,
    Searching,
    Results,
    Empty,
    Error,
}

/// Point-in-time view of the session, safe to hand to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub phase: SearchPhase,
    pub current_city: Option<String>,
    pub rate_limited: bool,
}

struct SessionInner {
    phase: SearchPhase,
    current_city: Option<String>,
}

/// State carried across searches for one running instance.
///
/// `rate_limited` is write-once: any concurrent catalog call may set it and
/// nothing clears it except an explicit [`SearchSession::reset_rate_limit`].
pub struct SearchSession {
    rate_limited: AtomicBool,
    inner: RwLock<SessionInner>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            rate_limited: AtomicBool::new(false),
            inner: RwLock::new(SessionInner {
                phase: SearchPhase::Idle,
                current_city: None,
            }),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.rate_limited.load(Ordering::SeqCst)
    }

    pub fn mark_rate_limited(&self) {
        if !self.rate_limited.swap(true, Ordering::SeqCst) {
            tracing::warn!("Catalog rate limit hit; further searches disabled for this session");
        }
    }

    pub fn reset_rate_limit(&self) {
        self.rate_limited.store(false, Ordering::SeqCst);
        tracing::info!("Rate limit flag cleared");
    }

    pub async fn begin_search(&self, city: &str) {
        let mut inner = self.inner.write().await;
        inner.current_city = Some(city.to_string());
        inner.phase = SearchPhase::Searching;
    }

    pub async fn finish_search(&self, phase: SearchPhase) {
        self.inner.write().await.phase = phase;
    }

    pub async fn snapshot(&self) -> SessionView {
        let inner = self.inner.read().await;
        SessionView {
            phase: inner.phase,
            current_city: inner.current_city.clone(),
            rate_limited: self.is_rate_limited(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_new_session_is_idle() {
        let session = SearchSession::new();
        let view = session.snapshot().await;
        assert_eq!(view.phase, SearchPhase::Idle);
        assert_eq!(view.current_city, None);
        assert!(!view.rate_limited);
    }

    #[tokio::test]
    async fn test_phase_transitions() {
        let session = SearchSession::new();
        session.begin_search("Paris").await;
        assert_eq!(session.snapshot().await.phase, SearchPhase::Searching);

        session.finish_search(SearchPhase::Results).await;
        let view = session.snapshot().await;
        assert_eq!(view.phase, SearchPhase::Results);
        assert_eq!(view.current_city.as_deref(), Some("Paris"));
    }

    #[tokio::test]
    async fn test_rate_limit_is_sticky_under_concurrent_writers() {
        let session = Arc::new(SearchSession::new());
        let mut tasks = Vec::new();
        for _ in 0..8 {
            let session = session.clone();
            tasks.push(tokio::spawn(async move { session.mark_rate_limited() }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert!(session.is_rate_limited());
        session.begin_search("Oslo").await;
        session.finish_search(SearchPhase::Error).await;
        assert!(session.is_rate_limited());

        session.reset_rate_limit();
        assert!(!session.is_rate_limited());
    }
}
