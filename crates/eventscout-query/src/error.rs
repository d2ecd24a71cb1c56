use eventscout_core::error::CoreError;

/// The only failure a search can surface: the record store rejected or could
/// not serve the request.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search failed: {0}")]
    SearchFailed(#[from] CoreError),
}
