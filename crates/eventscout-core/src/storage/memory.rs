use crate::error::CoreError;
use crate::filter::Filter;
use crate::model::{Event, EventId};

use super::{evaluate, not_found, sort_chronologically, RecordStore};

/// Holds a fixed set of events in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    events: Vec<Event>,
}

impl InMemoryStore {
    pub fn new(mut events: Vec<Event>) -> Self {
        sort_chronologically(&mut events);
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<Event> for InMemoryStore {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl RecordStore for InMemoryStore {
    fn query(&self, filter: &Filter) -> Result<Vec<Event>, CoreError> {
        Ok(evaluate(filter, self.events.iter().cloned()))
    }

    fn list_default(&self) -> Result<Vec<Event>, CoreError> {
        Ok(self.events.clone())
    }

    fn find_by_id(&self, id: &EventId) -> Result<Event, CoreError> {
        self.events
            .iter()
            .find(|event| &event.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }
}
