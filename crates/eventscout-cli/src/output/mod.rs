pub mod format;

use serde::Serialize;

use eventscout_core::model::Event;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

/// JSON body for search and list output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<'a> {
    pub events: Vec<&'a Event>,
    pub count: usize,
    pub search_term: Option<&'a str>,
    pub success: bool,
}

impl<'a> SearchResponse<'a> {
    pub fn new(events: impl IntoIterator<Item = &'a Event>, search_term: Option<&'a str>) -> Self {
        let events: Vec<_> = events.into_iter().collect();
        Self {
            count: events.len(),
            events,
            search_term: search_term.filter(|q| !q.is_empty()),
            success: true,
        }
    }
}

/// JSON body printed when a search cannot be served.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub events: [Event; 0],
    pub count: usize,
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: &anyhow::Error) -> Self {
        Self {
            error: format!("{error:#}"),
            events: [],
            count: 0,
            success: false,
        }
    }
}
