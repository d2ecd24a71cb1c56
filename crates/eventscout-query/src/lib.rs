pub mod compile;
pub mod error;
pub mod rank;
pub mod search;
pub mod signals;

#[cfg(test)]
mod testing;

pub use compile::{compile, FilterBuilder};
pub use error::SearchError;
pub use rank::{rank, rank_scored, score, Ranked, RelevanceScore};
pub use search::SearchService;
pub use signals::{analyze, SearchSignals};
