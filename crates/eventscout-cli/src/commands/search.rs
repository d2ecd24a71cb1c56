use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Args;

use eventscout_query::SearchService;

use super::StoreArgs;
use crate::output::format::format_ranked_list;
use crate::output::{ErrorResponse, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Search query (free-text; omit to list every event)
    pub query: Option<String>,

    /// Maximum number of results
    #[arg(short = 'n', long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,

    /// Show why each event ranked where it did
    #[arg(long)]
    pub explain: bool,
}

pub fn run(args: &SearchArgs, store: &StoreArgs, format: OutputFormat) -> Result<()> {
    let result = search(args, store, format);
    if let (Err(e), OutputFormat::Json) = (&result, format) {
        println!("{}", serde_json::to_string_pretty(&ErrorResponse::new(e))?);
    }
    result
}

fn search(args: &SearchArgs, store: &StoreArgs, format: OutputFormat) -> Result<()> {
    let (store, settings) = store.open()?;
    let service = SearchService::new(store);
    let query = args.query.as_deref();

    let mut results = service
        .search_scored(query)
        .with_context(|| format!("Search for {:?} failed", query.unwrap_or("")))?;
    if let Some(limit) = args.limit.or(settings.limit) {
        results.truncate(limit);
    }

    if matches!(format, OutputFormat::Json) {
        println!("{}", format_ranked_list(&results, query, args.explain, format));
        return Ok(());
    }

    if results.is_empty() {
        eprintln!("No results found for: {}", query.unwrap_or(""));
        return Ok(());
    }
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        eprintln!("Found {} result(s) for: {q}\n", results.len());
    }
    print!("{}", format_ranked_list(&results, query, args.explain, format));

    Ok(())
}
