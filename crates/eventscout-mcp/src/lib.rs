use std::path::PathBuf;
use std::sync::Arc;

use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    tool, tool_handler, tool_router, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

use eventscout_core::model::{Event, EventId};
use eventscout_core::storage::{JsonFileStore, RecordStore};
use eventscout_query::{Ranked, SearchService};

const DEFAULT_LIMIT: usize = 10;

/// MCP server exposing event search to AI agents.
///
/// The store is opened once at startup and shared by every tool call.
#[derive(Debug, Clone)]
pub struct EventScoutMcpServer {
    service: Arc<SearchService<JsonFileStore>>,
    tool_router: ToolRouter<Self>,
}

impl EventScoutMcpServer {
    /// Create a new MCP server over an opened store.
    pub fn new(store: JsonFileStore) -> Self {
        Self {
            service: Arc::new(SearchService::new(store)),
            tool_router: Self::tool_router(),
        }
    }
}

// -- Tool parameter structs --

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Free-text query matched against name, type, address, organizer, description,
    /// duration, difficulty, contact, requirements, participant counts and dates.
    /// Omit to list every event.
    pub query: Option<String>,
    /// Maximum number of results (default: 10)
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ShowParams {
    /// Event ID
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListParams {
    /// Maximum number of entries (default: 10)
    pub limit: Option<usize>,
}

fn resolve_limit(limit: Option<usize>) -> Result<usize, String> {
    match limit {
        Some(0) => Err("limit must be at least 1".to_string()),
        Some(n) => Ok(n),
        None => Ok(DEFAULT_LIMIT),
    }
}

fn summary_line(event: &Event) -> String {
    let short_id = event.id.short();
    let date = event.date.format("%Y-%m-%d %H:%M");
    format!(
        "- {short_id} {} [{} / {}] {date}\n  {} | {} of {} spots left\n",
        event.name,
        event.event_type,
        event.difficulty,
        event.address,
        event.spots_remaining(),
        event.max_participants,
    )
}

fn format_results(query: &str, results: &[Ranked], limit: usize) -> String {
    let mut out = format!("Found {} result(s) for: {query}\n\n", results.len());
    for ranked in results.iter().take(limit) {
        out.push_str(&summary_line(&ranked.event));
        let reasons = ranked.score.reasons();
        if !reasons.is_empty() {
            out.push_str(&format!(
                "  score {} ({})\n",
                ranked.score.total(),
                reasons.join(", ")
            ));
        }
    }
    if results.len() > limit {
        out.push_str(&format!("\n({} more not shown)\n", results.len() - limit));
    }
    out
}

fn format_event(event: &Event) -> String {
    let mut out = String::new();
    out.push_str(&format!("Event: {}\n", event.id));
    out.push_str(&format!("Name: {}\n", event.name));
    out.push_str(&format!("Type: {}\n", event.event_type));
    out.push_str(&format!("Difficulty: {}\n", event.difficulty));
    out.push_str(&format!(
        "Date: {}\n",
        event.date.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&format!("Duration: {}\n", event.duration));
    out.push_str(&format!("Address: {}\n", event.address));
    out.push_str(&format!(
        "Participants: {}/{} ({} spots left{})\n",
        event.current_participants,
        event.max_participants,
        event.spots_remaining(),
        if event.is_full() { ", full" } else { "" }
    ));
    out.push_str(&format!("Organizer: {}\n", event.organizer));
    out.push_str(&format!("Contact: {}\n", event.contact));

    if !event.requirements.is_empty() {
        out.push_str("\nRequirements:\n");
        for req in &event.requirements {
            out.push_str(&format!("  - {req}\n"));
        }
    }

    out.push_str(&format!("\n{}\n", event.description));
    out
}

// -- Tool implementations --

#[tool_router]
impl EventScoutMcpServer {
    #[tool(
        description = "Search events by free-text query, most relevant first. Understands capacity questions like '3 spots left', difficulty levels, and dates like '2024-06-15'."
    )]
    fn event_search(&self, Parameters(params): Parameters<SearchParams>) -> Result<String, String> {
        let query = params.query.as_deref().unwrap_or("");
        let limit = resolve_limit(params.limit)?;
        let results = self
            .service
            .search_scored(Some(query))
            .map_err(|e| e.to_string())?;

        if results.is_empty() {
            return Ok(format!("No events found for: {query}"));
        }
        Ok(format_results(query, &results, limit))
    }

    #[tool(
        description = "Show full details of one event: schedule, location, capacity, requirements, organizer and contact."
    )]
    fn event_show(&self, Parameters(params): Parameters<ShowParams>) -> Result<String, String> {
        let id = EventId::parse(params.id).map_err(|e| e.to_string())?;
        let event = self
            .service
            .store()
            .find_by_id(&id)
            .map_err(|e| format!("Failed to read event: {e}"))?;
        Ok(format_event(&event))
    }

    #[tool(description = "List all events in date order.")]
    fn event_list(&self, Parameters(params): Parameters<ListParams>) -> Result<String, String> {
        let limit = resolve_limit(params.limit)?;
        let events = self
            .service
            .search(None)
            .map_err(|e| format!("Failed to list events: {e}"))?;

        if events.is_empty() {
            return Ok("No events found.".to_string());
        }

        let mut out = format!("{} event(s):\n\n", events.len());
        for event in events.iter().take(limit) {
            out.push_str(&summary_line(event));
        }
        Ok(out)
    }
}

#[tool_handler]
impl ServerHandler for EventScoutMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "EventScout MCP Server - Find events by free-text search. \
                 Search, list upcoming events, and show event details."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Start the MCP server on stdio transport.
pub async fn run_stdio(store_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    use rmcp::transport::stdio;
    use rmcp::ServiceExt;

    let store = JsonFileStore::open(store_path)?;
    tracing::info!("Serving events from {}", store.path().display());
    let server = EventScoutMcpServer::new(store);
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
