use std::cmp::Reverse;

use serde::Serialize;

use eventscout_core::model::Event;

use crate::signals::SearchSignals;

pub const NAME_WEIGHT: u32 = 10;
pub const ORGANIZER_WEIGHT: u32 = 8;
pub const SPOTS_REMAINING_WEIGHT: u32 = 7;
pub const TYPE_WEIGHT: u32 = 6;
pub const ADDRESS_WEIGHT: u32 = 5;
pub const REQUIREMENTS_WEIGHT: u32 = 4;
pub const DESCRIPTION_WEIGHT: u32 = 3;

/// Which weighted signals a record earned for one query.
///
/// Only this subset of fields is rewarded; records the filter let through on
/// other fields (duration, contact, counts, difficulty, date) can score zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelevanceScore {
    pub name: bool,
    pub organizer: bool,
    pub event_type: bool,
    pub requirements: bool,
    pub spots_remaining: bool,
    pub address: bool,
    pub description: bool,
}

impl RelevanceScore {
    pub fn total(&self) -> u32 {
        [
            (self.name, NAME_WEIGHT),
            (self.organizer, ORGANIZER_WEIGHT),
            (self.event_type, TYPE_WEIGHT),
            (self.requirements, REQUIREMENTS_WEIGHT),
            (self.spots_remaining, SPOTS_REMAINING_WEIGHT),
            (self.address, ADDRESS_WEIGHT),
            (self.description, DESCRIPTION_WEIGHT),
        ]
        .into_iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, weight)| weight)
        .sum()
    }

    /// Labels of the signals that contributed, highest weight first.
    pub fn reasons(&self) -> Vec<&'static str> {
        [
            (self.name, "name"),
            (self.organizer, "organizer"),
            (self.spots_remaining, "spots remaining"),
            (self.event_type, "type"),
            (self.address, "address"),
            (self.requirements, "requirements"),
            (self.description, "description"),
        ]
        .into_iter()
        .filter_map(|(hit, label)| hit.then_some(label))
        .collect()
    }
}

/// An event together with the score that placed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    pub event: Event,
    pub score: RelevanceScore,
}

/// Score one record against a query.
pub fn score(query: &str, signals: &SearchSignals, event: &Event) -> RelevanceScore {
    let query = query.to_lowercase();
    let contains = |text: &str| text.to_lowercase().contains(&query);

    RelevanceScore {
        name: contains(&event.name),
        organizer: contains(&event.organizer),
        event_type: contains(&event.event_type),
        requirements: event.requirements.iter().any(|req| contains(req)),
        spots_remaining: signals
            .spots_remaining_target()
            .is_some_and(|count| event.has_spots_remaining(count)),
        address: contains(&event.address),
        description: contains(&event.description),
    }
}

/// Order candidates by descending score, keeping their incoming order on ties.
pub fn rank_scored(query: &str, signals: &SearchSignals, candidates: Vec<Event>) -> Vec<Ranked> {
    let mut ranked: Vec<Ranked> = candidates
        .into_iter()
        .map(|event| Ranked {
            score: score(query, signals, &event),
            event,
        })
        .collect();
    // sort_by_key is stable, so equal scores stay in store (chronological) order.
    ranked.sort_by_key(|r| Reverse(r.score.total()));
    ranked
}

/// Order candidates by descending score. Never drops a record.
pub fn rank(query: &str, signals: &SearchSignals, candidates: Vec<Event>) -> Vec<Event> {
    rank_scored(query, signals, candidates)
        .into_iter()
        .map(|r| r.event)
        .collect()
}
