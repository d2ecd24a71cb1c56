use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use eventscout_core::model::Difficulty;

/// Substrings that suggest the user is asking how many places are left.
/// Matched anywhere in the lowercased query, so "leftover" counts too.
const CAPACITY_KEYWORDS: [&str; 4] = ["spot", "remaining", "left", "available"];

/// Month names and years that mark a query as date-like.
const DATE_KEYWORDS: [&str; 25] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec", "2024",
    "2025", "january", "february", "march", "april", "june", "july", "august", "september",
    "october", "november", "december",
];

static FIRST_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid regex"));

static US_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$").expect("valid regex"));

/// Typed facts read off a single query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSignals {
    pub raw_query: String,
    /// First run of digits in the query, if any.
    pub extracted_number: Option<u64>,
    pub mentions_capacity_intent: bool,
    /// Set only when the whole query names a difficulty level.
    pub matched_difficulty: Option<Difficulty>,
    pub looks_like_date: bool,
}

impl SearchSignals {
    /// Whether the query asks for a specific number of open places.
    pub fn spots_remaining_target(&self) -> Option<u64> {
        if self.mentions_capacity_intent {
            self.extracted_number
        } else {
            None
        }
    }
}

/// Derive every signal from `query`. Never fails; an empty query yields no signals.
pub fn analyze(query: &str) -> SearchSignals {
    let lowered = query.to_lowercase();
    SearchSignals {
        raw_query: query.to_string(),
        extracted_number: extract_number(query),
        mentions_capacity_intent: CAPACITY_KEYWORDS.iter().any(|kw| lowered.contains(kw)),
        matched_difficulty: Difficulty::from_exact(query),
        looks_like_date: looks_like_date(query, &lowered),
    }
}

/// Parse the first digit run. A run too long for `u64` cannot equal any
/// stored count, so it is treated as absent.
fn extract_number(query: &str) -> Option<u64> {
    FIRST_NUMBER_REGEX
        .find(query)
        .and_then(|m| m.as_str().parse().ok())
}

fn looks_like_date(query: &str, lowered: &str) -> bool {
    DATE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
        || ISO_DATE_REGEX.is_match(query)
        || US_DATE_REGEX.is_match(query)
}
