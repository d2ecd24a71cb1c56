use std::fs;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CoreError;
use crate::filter::Filter;
use crate::model::{Event, EventId};

use super::{evaluate, not_found, sort_chronologically, RecordStore};

/// The `{ "events": [...] }` envelope that the listing API responds with.
#[derive(Deserialize)]
struct Envelope {
    events: Vec<Event>,
}

/// Parse a bare array or an envelope, picked by the first non-blank byte.
fn parse_events(data: &str) -> Result<Vec<Event>, CoreError> {
    if data.trim_start().starts_with('[') {
        Ok(serde_json::from_str(data)?)
    } else {
        Ok(serde_json::from_str::<Envelope>(data)?.events)
    }
}

/// Events stored as a JSON file.
///
/// The file is re-read on every call under a shared lock, so each search sees
/// whatever snapshot was on disk at that moment.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store and check that the file parses.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let store = Self { path: path.into() };
        let count = store.load()?.len();
        tracing::debug!("Opened event store {} ({count} events)", store.path.display());
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every event, oldest first.
    pub fn load(&self) -> Result<Vec<Event>, CoreError> {
        let file = fs::OpenOptions::new().read(true).open(&self.path)?;
        fs2::FileExt::lock_shared(&file).map_err(CoreError::Io)?;
        let mut data = String::new();
        let read = (&file).read_to_string(&mut data);
        fs2::FileExt::unlock(&file).map_err(CoreError::Io)?;
        read?;

        let mut events = if data.trim().is_empty() {
            tracing::warn!("Event store {} is empty", self.path.display());
            Vec::new()
        } else {
            parse_events(&data)?
        };

        for event in &events {
            if event.current_participants > event.max_participants {
                tracing::warn!(
                    "Event {} is overbooked ({}/{})",
                    event.id,
                    event.current_participants,
                    event.max_participants
                );
            }
        }

        sort_chronologically(&mut events);
        Ok(events)
    }
}

impl RecordStore for JsonFileStore {
    fn query(&self, filter: &Filter) -> Result<Vec<Event>, CoreError> {
        Ok(evaluate(filter, self.load()?))
    }

    fn list_default(&self) -> Result<Vec<Event>, CoreError> {
        self.load()
    }

    fn find_by_id(&self, id: &EventId) -> Result<Event, CoreError> {
        self.load()?
            .into_iter()
            .find(|event| &event.id == id)
            .ok_or_else(|| not_found(id))
    }
}
