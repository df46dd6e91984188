//! Search session. Per-search lifecycle shown by the UI.
//!
//! `Idle -> Searching -> Finished(Found | Empty | Degraded)`. Overlapping searches
//! are neither serialized nor cancelled: whichever response arrives last owns the
//! displayed result.

use crate::usecases::resolver_service::{SearchOutcome, SpecialistResolver};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Searching {
        industry: String,
    },
    Finished {
        industry: String,
        outcome: SearchOutcome,
    },
}

#[derive(Debug)]
struct Slot {
    state: SearchState,
    search_performed: bool,
}

/// Holds the displayed search result and the "search performed" flag.
pub struct SearchSession {
    resolver: Arc<SpecialistResolver>,
    slot: RwLock<Slot>,
}

impl SearchSession {
    pub fn new(resolver: Arc<SpecialistResolver>) -> Self {
        Self {
            resolver,
            slot: RwLock::new(Slot {
                state: SearchState::Idle,
                search_performed: false,
            }),
        }
    }

    /// Search `industry`. A blank selection is ignored (returns `None`); otherwise the
    /// outcome is stored as the displayed result and returned.
    pub async fn search(&self, industry: &str) -> Option<SearchOutcome> {
        if industry.trim().is_empty() {
            return None;
        }

        {
            let mut slot = self.slot.write().await;
            slot.search_performed = true;
            slot.state = SearchState::Searching {
                industry: industry.to_string(),
            };
        }

        let outcome = self.resolver.resolve(industry).await;

        let mut slot = self.slot.write().await;
        debug!(industry, results = outcome.len(), "search finished");
        slot.state = SearchState::Finished {
            industry: industry.to_string(),
            outcome: outcome.clone(),
        };
        Some(outcome)
    }

    pub async fn state(&self) -> SearchState {
        self.slot.read().await.state.clone()
    }

    /// True once any search has started. Never cleared.
    pub async fn search_performed(&self) -> bool {
        self.slot.read().await.search_performed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDirectory;
    use crate::adapters::memory::fixtures::{firm, vc};
    use crate::domain::ExpertiseLevel;
    use std::time::Duration;

    fn session(dir: InMemoryDirectory) -> Arc<SearchSession> {
        let resolver = Arc::new(SpecialistResolver::new(Arc::new(dir)));
        Arc::new(SearchSession::new(resolver))
    }

    fn directory() -> InMemoryDirectory {
        InMemoryDirectory::new()
            .with_industry(1, "FinTech")
            .with_industry(2, "HealthTech")
            .with_firm(firm(10, "Acme Capital"))
            .with_professional(vc(1, "Ada Park", 10))
            .with_specialization(1, 1, ExpertiseLevel::High)
    }

    #[tokio::test]
    async fn starts_idle() {
        let session = session(directory());

        assert_eq!(session.state().await, SearchState::Idle);
        assert!(!session.search_performed().await);
    }

    #[tokio::test]
    async fn blank_selection_is_ignored() {
        let session = session(directory());

        assert!(session.search("").await.is_none());
        assert!(session.search("   ").await.is_none());
        assert!(!session.search_performed().await);
        assert_eq!(session.state().await, SearchState::Idle);
    }

    #[tokio::test]
    async fn empty_result_still_marks_search_performed() {
        let session = session(directory());

        let outcome = session.search("HealthTech").await;

        assert_eq!(outcome, Some(SearchOutcome::Empty));
        assert!(session.search_performed().await);
        assert_eq!(
            session.state().await,
            SearchState::Finished {
                industry: "HealthTech".to_string(),
                outcome: SearchOutcome::Empty,
            }
        );
    }

    #[tokio::test]
    async fn failure_finishes_degraded() {
        let session = session(directory().unreachable());

        let outcome = session.search("FinTech").await;

        assert_eq!(outcome, Some(SearchOutcome::Degraded));
        assert!(session.search_performed().await);
        assert!(matches!(
            session.state().await,
            SearchState::Finished {
                outcome: SearchOutcome::Degraded,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn searching_state_visible_while_in_flight() {
        let session = session(directory().with_delay("FinTech", Duration::from_millis(200)));

        let task = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.search("FinTech").await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(session.search_performed().await);
        assert_eq!(
            session.state().await,
            SearchState::Searching {
                industry: "FinTech".to_string()
            }
        );

        let outcome = task.await.unwrap().unwrap();
        assert_eq!(outcome.len(), 1);
        assert!(matches!(session.state().await, SearchState::Finished { .. }));
    }

    #[tokio::test]
    async fn last_response_to_arrive_wins() {
        // FinTech is requested first but answers last.
        let session = session(directory().with_delay("FinTech", Duration::from_millis(200)));

        let slow = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.search("FinTech").await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        let fast = session.search("HealthTech").await;
        slow.await.unwrap();

        assert_eq!(fast, Some(SearchOutcome::Empty));
        match session.state().await {
            SearchState::Finished { industry, outcome } => {
                assert_eq!(industry, "FinTech");
                assert_eq!(outcome.len(), 1);
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }
}
