pub mod json_file;
pub mod memory;

use std::sync::Arc;

use crate::error::CoreError;
use crate::filter::Filter;
use crate::model::{Event, EventId};

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

/// A collection of events the search engine can query.
///
/// Both listing operations return records ascending by `date`; records
/// sharing a date keep their stored order.
pub trait RecordStore: Send + Sync {
    /// All records matching at least one clause of the filter.
    fn query(&self, filter: &Filter) -> Result<Vec<Event>, CoreError>;

    /// Every record, unfiltered.
    fn list_default(&self) -> Result<Vec<Event>, CoreError>;

    /// Look up a single record by its exact id.
    fn find_by_id(&self, id: &EventId) -> Result<Event, CoreError>;
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn query(&self, filter: &Filter) -> Result<Vec<Event>, CoreError> {
        (**self).query(filter)
    }

    fn list_default(&self) -> Result<Vec<Event>, CoreError> {
        (**self).list_default()
    }

    fn find_by_id(&self, id: &EventId) -> Result<Event, CoreError> {
        (**self).find_by_id(id)
    }
}

impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    fn query(&self, filter: &Filter) -> Result<Vec<Event>, CoreError> {
        (**self).query(filter)
    }

    fn list_default(&self) -> Result<Vec<Event>, CoreError> {
        (**self).list_default()
    }

    fn find_by_id(&self, id: &EventId) -> Result<Event, CoreError> {
        (**self).find_by_id(id)
    }
}

/// Stable sort by date, oldest first.
pub(crate) fn sort_chronologically(events: &mut [Event]) {
    events.sort_by(|a, b| a.date.cmp(&b.date));
}

/// Keep the records the filter accepts, in chronological order.
pub(crate) fn evaluate(filter: &Filter, events: impl IntoIterator<Item = Event>) -> Vec<Event> {
    let mut matched: Vec<Event> = events
        .into_iter()
        .filter(|event| filter.matches(event))
        .collect();
    sort_chronologically(&mut matched);
    matched
}

pub(crate) fn not_found(id: &EventId) -> CoreError {
    CoreError::NotFound {
        id: id.as_str().to_string(),
    }
}
