use anyhow::{Context, Result};
use clap::Args;

use eventscout_core::model::EventId;
use eventscout_core::storage::RecordStore;

use super::StoreArgs;
use crate::output::format::format_event_full;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ShowArgs {
    /// Event ID
    pub id: String,
}

pub fn run(args: &ShowArgs, store: &StoreArgs, format: OutputFormat) -> Result<()> {
    let (store, _) = store.open()?;

    let id = EventId::parse(args.id.as_str())?;
    let event = store
        .find_by_id(&id)
        .with_context(|| format!("Failed to read event '{id}'"))?;

    print!("{}", format_event_full(&event, format));
    if matches!(format, OutputFormat::Json) {
        println!();
    }
    Ok(())
}
