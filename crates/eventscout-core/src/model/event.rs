use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::difficulty::Difficulty;
use crate::error::CoreError;

const DEFAULT_IMAGE_URL: &str = "/api/placeholder/400/250";

/// A unique identifier for an event.
/// Generated as UUID v4 hex (no dashes); ids loaded from a store are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_simple().to_string())
    }

    /// Parse and validate an ID string. Must be non-empty after trimming.
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidId("ID must not be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for compact listings.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How close an event is to capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupancy {
    /// Under 70% of places taken.
    Low,
    /// 70% to 89%.
    Medium,
    /// 90% or more, or no places at all.
    High,
}

/// A searchable event record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(alias = "_id")]
    pub id: EventId,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub address: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub duration: String,
    pub max_participants: u64,
    #[serde(default)]
    pub current_participants: u64,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub organizer: String,
    pub contact: String,
    #[serde(default = "default_image_url")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

impl Event {
    /// Places still open. Computed on demand, never stored.
    ///
    /// `current_participants <= max_participants` is assumed but not enforced;
    /// an overbooked record reports zero.
    pub fn spots_remaining(&self) -> u64 {
        self.max_participants
            .saturating_sub(self.current_participants)
    }

    /// Exact remaining-capacity check against the raw stored counts.
    /// An overbooked record never equals any count.
    pub fn has_spots_remaining(&self, count: u64) -> bool {
        self.current_participants <= self.max_participants
            && self.max_participants - self.current_participants == count
    }

    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }

    pub fn occupancy(&self) -> Occupancy {
        if self.max_participants == 0 {
            return Occupancy::High;
        }
        let taken = u128::from(self.current_participants) * 100;
        let max = u128::from(self.max_participants);
        if taken >= max * 90 {
            Occupancy::High
        } else if taken >= max * 70 {
            Occupancy::Medium
        } else {
            Occupancy::Low
        }
    }

    /// Calendar date as `YYYY-MM-DD` in UTC.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
