use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Args;

use eventscout_query::SearchService;

use super::StoreArgs;
use crate::output::format::format_event_list;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ListArgs {
    /// Maximum number of entries
    #[arg(short = 'n', long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,

    /// Only events that still have open places
    #[arg(long)]
    pub available: bool,
}

pub fn run(args: &ListArgs, store: &StoreArgs, format: OutputFormat) -> Result<()> {
    let (store, settings) = store.open()?;
    let service = SearchService::new(store);

    let mut events = service.search(None).context("Failed to list events")?;
    if args.available {
        events.retain(|e| !e.is_full());
    }
    if let Some(limit) = args.limit.or(settings.limit) {
        events.truncate(limit);
    }

    print!("{}", format_event_list(&events, format));
    if matches!(format, OutputFormat::Json) {
        println!();
    }

    Ok(())
}
