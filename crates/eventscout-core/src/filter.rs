//! Predicates a record store evaluates on behalf of the search engine.
//!
//! A [`Filter`] is a flat disjunction: a record matches when any one of its
//! [`Clause`]s holds. Stores only need to support the clause kinds defined
//! here.

use serde::Serialize;

use crate::model::{Difficulty, Event};

/// Free-text fields that take part in substring matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Name,
    Type,
    Address,
    Organizer,
    Description,
    Duration,
    Difficulty,
    Contact,
}

impl TextField {
    pub fn value<'a>(&self, event: &'a Event) -> &'a str {
        match self {
            TextField::Name => &event.name,
            TextField::Type => &event.event_type,
            TextField::Address => &event.address,
            TextField::Organizer => &event.organizer,
            TextField::Description => &event.description,
            TextField::Duration => &event.duration,
            TextField::Difficulty => event.difficulty.as_str(),
            TextField::Contact => &event.contact,
        }
    }
}

/// Stored participant counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountField {
    MaxParticipants,
    CurrentParticipants,
}

impl CountField {
    pub fn value(&self, event: &Event) -> u64 {
        match self {
            CountField::MaxParticipants => event.max_participants,
            CountField::CurrentParticipants => event.current_participants,
        }
    }
}

/// A lowercased search string for case-insensitive `contains` checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Needle(String);

impl Needle {
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}

/// One predicate of the top-level disjunction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Clause {
    /// Field contains the needle, ignoring case.
    TextContains { field: TextField, needle: Needle },
    /// At least one requirement contains the needle, ignoring case.
    AnyRequirementContains { needle: Needle },
    /// Stored count equals the value exactly.
    CountEquals { field: CountField, value: u64 },
    /// `max_participants - current_participants` equals the value.
    SpotsRemainingEquals { value: u64 },
    /// Difficulty equals the level exactly.
    DifficultyIs { level: Difficulty },
    /// The event date rendered as `YYYY-MM-DD` contains the needle.
    DateContains { needle: Needle },
}

impl Clause {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Clause::TextContains { field, needle } => needle.found_in(field.value(event)),
            Clause::AnyRequirementContains { needle } => {
                event.requirements.iter().any(|req| needle.found_in(req))
            }
            Clause::CountEquals { field, value } => field.value(event) == *value,
            Clause::SpotsRemainingEquals { value } => event.has_spots_remaining(*value),
            Clause::DifficultyIs { level } => event.difficulty == *level,
            Clause::DateContains { needle } => needle.found_in(&event.date_string()),
        }
    }
}

/// A disjunction of clauses. An empty filter matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filter {
    any_of: Vec<Clause>,
}

impl Filter {
    pub fn any_of(clauses: Vec<Clause>) -> Self {
        Self { any_of: clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.any_of
    }

    pub fn len(&self) -> usize {
        self.any_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.any_of.is_empty()
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.any_of.iter().any(|clause| clause.matches(event))
    }

    /// The clauses a given record satisfies, in filter order.
    pub fn matching_clauses<'a>(&'a self, event: &'a Event) -> impl Iterator<Item = &'a Clause> {
        self.any_of.iter().filter(move |clause| clause.matches(event))
    }
}
