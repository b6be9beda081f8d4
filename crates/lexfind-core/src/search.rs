//! Search orchestration state machine.
//!
//! ```text
//! Idle ──submit──► Querying ──resolve──► Matched | NoResults | Failed
//!   ▲                                         │
//!   └──────────────── cancel ◄────────────────┘
//! ```
//!
//! [`SearchMachine`] is synchronous and owns no I/O: the caller performs the
//! tagging call licensed by a [`Submission`] and feeds its outcome back
//! through [`SearchMachine::resolve`]. Each submission carries a generation
//! number; outcomes for anything but the latest generation are discarded.

use crate::catalog::Catalog;
use crate::error::TagError;
use crate::extract::extract;
use crate::types::{Product, SearchTermSet, Token};
use std::sync::Arc;

/// Fixed user-visible message for every no-results outcome.
pub const NO_RESULTS_MESSAGE: &str =
    "No results obtained from your search. Please try a different search.";

/// Why a query ended without products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoResultsReason {
    /// Extraction produced an empty term set.
    NoMeaningfulTerms,
    /// Terms were found but no product shares one.
    NoMatches,
    /// The remote tagging call failed.
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Querying { generation: u64 },
    Matched { terms: SearchTermSet, products: Vec<Product> },
    NoResults { reason: NoResultsReason, diagnostic: Option<String> },
    /// Tagging is unavailable for the active locale, or the tagging task died.
    /// Not shown to the user.
    Failed { reason: String },
}

/// Licence to run exactly one tagging call for `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub generation: u64,
    pub text: String,
}

/// Outcome of feeding a tagging result back into the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The result belonged to the current submission; the state changed.
    Applied,
    /// A newer submission (or a cancel) superseded this result.
    Stale,
}

pub struct SearchMachine {
    catalog: Arc<Catalog>,
    state: SearchState,
    generation: u64,
}

impl SearchMachine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog, state: SearchState::Idle, generation: 0 }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Start a new query. Prior results are discarded and any in-flight
    /// generation becomes stale. Blank text is ignored and returns `None`.
    pub fn submit(&mut self, text: &str) -> Option<Submission> {
        if text.trim().is_empty() {
            tracing::debug!("blank submission ignored");
            return None;
        }
        self.generation += 1;
        self.state = SearchState::Querying { generation: self.generation };
        tracing::info!(generation = self.generation, query = %text, "query submitted");
        Some(Submission { generation: self.generation, text: text.to_string() })
    }

    /// Apply the tagging outcome for `generation`.
    pub fn resolve(
        &mut self,
        generation: u64,
        tagged: Result<Vec<Token>, TagError>,
    ) -> Resolution {
        match self.state {
            SearchState::Querying { generation: current } if current == generation => {}
            _ => {
                tracing::debug!(generation, current = self.generation, "stale tagging result discarded");
                return Resolution::Stale;
            }
        }

        self.state = match tagged {
            Err(TagError::Unavailable { locale }) => {
                tracing::warn!(%locale, "tagging unavailable; query dropped");
                SearchState::Failed { reason: format!("tagging unavailable for locale {locale}") }
            }
            Err(TagError::Aborted(reason)) => {
                tracing::warn!(%reason, "tagging task aborted");
                SearchState::Failed { reason }
            }
            Err(TagError::Network(err)) => {
                tracing::warn!(error = %err, "remote tagging failed");
                SearchState::NoResults {
                    reason: NoResultsReason::Network,
                    diagnostic: Some(err.to_string()),
                }
            }
            Ok(tokens) => self.classify(extract(&tokens)),
        };
        tracing::info!(generation, state = ?self.state_kind(), "query resolved");
        Resolution::Applied
    }

    /// Clear results and return to `Idle`. A pending generation becomes stale.
    pub fn cancel(&mut self) {
        self.state = SearchState::Idle;
    }

    fn classify(&self, terms: SearchTermSet) -> SearchState {
        if terms.is_empty() {
            return SearchState::NoResults {
                reason: NoResultsReason::NoMeaningfulTerms,
                diagnostic: None,
            };
        }
        let products = self.catalog.matching(&terms);
        if products.is_empty() {
            SearchState::NoResults { reason: NoResultsReason::NoMatches, diagnostic: None }
        } else {
            SearchState::Matched { terms, products }
        }
    }

    fn state_kind(&self) -> &'static str {
        match self.state {
            SearchState::Idle => "idle",
            SearchState::Querying { .. } => "querying",
            SearchState::Matched { .. } => "matched",
            SearchState::NoResults { .. } => "no_results",
            SearchState::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use crate::tagger::LocalTagger;
    use pretty_assertions::assert_eq;

    fn machine() -> SearchMachine {
        let catalog = Catalog::from_json(
            r#"[
                {"productName": "Widget", "productFeatures": "A blue widget", "keywords": ["blue", "widget"]},
                {"productName": "Gadget", "productFeatures": "A red gadget", "keywords": ["red", "gadget"]}
            ]"#,
        )
        .unwrap();
        SearchMachine::new(Arc::new(catalog))
    }

    fn local(text: &str) -> Result<Vec<Token>, TagError> {
        Ok(LocalTagger::english().tokens(text).collect())
    }

    #[test]
    fn starts_idle() {
        assert_eq!(machine().state(), &SearchState::Idle);
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut m = machine();
        assert!(m.submit("   ").is_none());
        assert_eq!(m.state(), &SearchState::Idle);
    }

    #[test]
    fn matched_scenario() {
        let mut m = machine();
        let sub = m.submit("Show me a blue widget").unwrap();
        assert_eq!(m.state(), &SearchState::Querying { generation: sub.generation });
        assert_eq!(m.resolve(sub.generation, local(&sub.text)), Resolution::Applied);
        match m.state() {
            SearchState::Matched { terms, products } => {
                assert_eq!(terms, &["blue", "widget"].into_iter().collect::<SearchTermSet>());
                assert_eq!(products.len(), 1);
                assert_eq!(products[0].name, "Widget");
            }
            other => panic!("expected Matched, got {other:?}"),
        }
    }

    #[test]
    fn no_overlap_is_no_results() {
        let mut m = machine();
        let sub = m.submit("xyz").unwrap();
        m.resolve(sub.generation, local(&sub.text));
        assert_eq!(
            m.state(),
            &SearchState::NoResults { reason: NoResultsReason::NoMatches, diagnostic: None }
        );
    }

    #[test]
    fn no_meaningful_terms_is_no_results() {
        let mut m = machine();
        let sub = m.submit("show me that").unwrap();
        m.resolve(sub.generation, local(&sub.text));
        assert_eq!(
            m.state(),
            &SearchState::NoResults { reason: NoResultsReason::NoMeaningfulTerms, diagnostic: None }
        );
    }

    #[test]
    fn network_error_is_no_results_with_diagnostic() {
        let mut m = machine();
        let sub = m.submit("blue widget").unwrap();
        let err = NetworkError::Status { status: 500, body: String::new() };
        m.resolve(sub.generation, Err(err.into()));
        match m.state() {
            SearchState::NoResults { reason: NoResultsReason::Network, diagnostic: Some(d) } => {
                assert!(d.contains("500"));
            }
            other => panic!("expected network NoResults, got {other:?}"),
        }
        assert_eq!(m.catalog().len(), 2);
    }

    #[test]
    fn unavailable_is_failed() {
        let mut m = machine();
        let sub = m.submit("blue widget").unwrap();
        m.resolve(sub.generation, Err(TagError::Unavailable { locale: "fr-FR".into() }));
        assert!(matches!(m.state(), SearchState::Failed { .. }));
    }

    #[test]
    fn aborted_tagging_is_failed() {
        let mut m = machine();
        let sub = m.submit("blue widget").unwrap();
        assert_eq!(m.resolve(sub.generation, Err(TagError::Aborted("task panicked".into()))), Resolution::Applied);
        assert_eq!(m.state(), &SearchState::Failed { reason: "task panicked".into() });
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut m = machine();
        let first = m.submit("red gadget").unwrap();
        let second = m.submit("blue widget").unwrap();
        assert!(second.generation > first.generation);

        assert_eq!(m.resolve(first.generation, local(&first.text)), Resolution::Stale);
        assert_eq!(m.state(), &SearchState::Querying { generation: second.generation });

        m.resolve(second.generation, local(&second.text));
        match m.state() {
            SearchState::Matched { products, .. } => assert_eq!(products[0].name, "Widget"),
            other => panic!("expected Matched, got {other:?}"),
        }
    }

    #[test]
    fn resolving_twice_is_stale() {
        let mut m = machine();
        let sub = m.submit("blue widget").unwrap();
        assert_eq!(m.resolve(sub.generation, local(&sub.text)), Resolution::Applied);
        assert_eq!(m.resolve(sub.generation, local(&sub.text)), Resolution::Stale);
    }

    #[test]
    fn cancel_clears_results_and_stales_pending() {
        let mut m = machine();
        let sub = m.submit("blue widget").unwrap();
        m.cancel();
        assert_eq!(m.state(), &SearchState::Idle);
        assert_eq!(m.resolve(sub.generation, local(&sub.text)), Resolution::Stale);
        assert_eq!(m.state(), &SearchState::Idle);
    }

    #[test]
    fn resubmission_discards_prior_results() {
        let mut m = machine();
        let sub = m.submit("blue widget").unwrap();
        m.resolve(sub.generation, local(&sub.text));
        let next = m.submit("red gadget").unwrap();
        assert_eq!(m.state(), &SearchState::Querying { generation: next.generation });
    }

    #[test]
    fn query_casing_does_not_change_matches() {
        let mut m = machine();
        let mut outcomes = Vec::new();
        for text in ["BLUE WIDGETS", "blue widgets", "Blue Widgets"] {
            let sub = m.submit(text).unwrap();
            m.resolve(sub.generation, local(&sub.text));
            outcomes.push(m.state().clone());
        }
        assert_eq!(outcomes[0], outcomes[1]);
        assert_eq!(outcomes[1], outcomes[2]);
    }
}
