pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod storage;

pub use error::CoreError;
