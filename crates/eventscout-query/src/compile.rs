use eventscout_core::filter::{Clause, CountField, Filter, Needle, TextField};

use crate::signals::SearchSignals;

/// Text fields every non-empty query is matched against.
const TEXT_FIELDS: [TextField; 8] = [
    TextField::Name,
    TextField::Type,
    TextField::Address,
    TextField::Organizer,
    TextField::Description,
    TextField::Duration,
    TextField::Difficulty,
    TextField::Contact,
];

/// Accumulates clauses, each optionally gated on a signal, into one disjunction.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    clauses: Vec<Clause>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clause_if(self, condition: bool, clause: impl FnOnce() -> Clause) -> Self {
        if condition {
            self.clause(clause())
        } else {
            self
        }
    }

    pub fn clauses(mut self, clauses: impl IntoIterator<Item = Clause>) -> Self {
        self.clauses.extend(clauses);
        self
    }

    pub fn build(self) -> Filter {
        Filter::any_of(self.clauses)
    }
}

/// Turn a query and its signals into the filter a record store evaluates.
pub fn compile(query: &str, signals: &SearchSignals) -> Filter {
    let needle = Needle::new(query);
    let whole_number = parse_whole_number(query);

    FilterBuilder::new()
        .clauses(TEXT_FIELDS.iter().map(|&field| Clause::TextContains {
            field,
            needle: needle.clone(),
        }))
        .clause(Clause::AnyRequirementContains {
            needle: needle.clone(),
        })
        .clauses(whole_number.into_iter().flat_map(|value| {
            [
                Clause::CountEquals {
                    field: CountField::MaxParticipants,
                    value,
                },
                Clause::CountEquals {
                    field: CountField::CurrentParticipants,
                    value,
                },
            ]
        }))
        .clauses(
            signals
                .spots_remaining_target()
                .map(|value| Clause::SpotsRemainingEquals { value }),
        )
        .clauses(
            signals
                .matched_difficulty
                .map(|level| Clause::DifficultyIs { level }),
        )
        .clause_if(signals.looks_like_date, || Clause::DateContains { needle })
        .build()
}

/// The whole query read as a number, when that number could equal a stored
/// count: surrounding whitespace is allowed, and the value must be finite,
/// integral and non-negative. `"10 people"` is not a number. Neither is a
/// blank query (it is not read as zero) nor a hex literal such as `"0x10"`.
fn parse_whole_number(query: &str) -> Option<u64> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<u64>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}
