use eventscout_core::model::Event;
use eventscout_core::storage::RecordStore;

use crate::compile::compile;
use crate::error::SearchError;
use crate::rank::{rank_scored, Ranked, RelevanceScore};
use crate::signals::analyze;

/// Runs free-text searches against a record store.
///
/// The store handle is opened once by the caller and injected here; the
/// service itself keeps no state between calls.
#[derive(Debug, Clone)]
pub struct SearchService<S> {
    store: S,
}

impl<S: RecordStore> SearchService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Events matching `query`, most relevant first.
    ///
    /// An absent or empty query lists every event, oldest first.
    pub fn search(&self, query: Option<&str>) -> Result<Vec<Event>, SearchError> {
        Ok(self
            .search_scored(query)?
            .into_iter()
            .map(|ranked| ranked.event)
            .collect())
    }

    /// Like [`search`](Self::search), keeping each event's score. Listing
    /// without a query scores every event zero.
    pub fn search_scored(&self, query: Option<&str>) -> Result<Vec<Ranked>, SearchError> {
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            let events = self.store.list_default()?;
            tracing::info!("Listing all events: {} found", events.len());
            return Ok(events
                .into_iter()
                .map(|event| Ranked {
                    event,
                    score: RelevanceScore::default(),
                })
                .collect());
        };

        let signals = analyze(query);
        tracing::debug!(?signals, "Analyzed search query");

        let filter = compile(query, &signals);
        tracing::debug!(
            clauses = filter.len(),
            filter = %serde_json::to_string(&filter).unwrap_or_default(),
            "Compiled search filter"
        );

        let candidates = self.store.query(&filter)?;
        tracing::info!("Search {query:?}: {} event(s) matched", candidates.len());

        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        Ok(rank_scored(query, &signals, candidates))
    }
}
