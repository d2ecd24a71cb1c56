use std::collections::BTreeMap;

use anyhow::{Context, Result};

use eventscout_core::storage::RecordStore;

use super::StoreArgs;
use crate::output::OutputFormat;

pub fn run(store: &StoreArgs, format: OutputFormat) -> Result<()> {
    let (store, _) = store.open()?;

    let events = store.list_default().context("Failed to list events")?;

    if events.is_empty() {
        println!("No events found.");
        return Ok(());
    }

    let total = events.len();
    let mut capacity: u64 = 0;
    let mut taken: u64 = 0;
    let mut open_spots: u64 = 0;
    let mut full = 0usize;
    let mut by_difficulty: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_type: BTreeMap<String, (usize, u64)> = BTreeMap::new();

    let earliest = events.first().map(|e| e.date);
    let latest = events.last().map(|e| e.date);

    for e in &events {
        capacity = capacity.saturating_add(e.max_participants);
        taken = taken.saturating_add(e.current_participants);
        open_spots = open_spots.saturating_add(e.spots_remaining());
        if e.is_full() {
            full += 1;
        }

        *by_difficulty.entry(e.difficulty.to_string()).or_default() += 1;

        let entry = by_type.entry(e.event_type.clone()).or_default();
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(e.spots_remaining());
    }

    match format {
        OutputFormat::Json => {
            let stats = serde_json::json!({
                "total_events": total,
                "total_capacity": capacity,
                "total_participants": taken,
                "spots_remaining": open_spots,
                "full_events": full,
                "earliest": earliest,
                "latest": latest,
                "by_difficulty": by_difficulty,
                "by_type": by_type.iter().map(|(name, (count, spots))| {
                    serde_json::json!({
                        "type": name,
                        "count": count,
                        "spots_remaining": spots,
                    })
                }).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Text | OutputFormat::Markdown => {
            println!("Event Statistics");
            println!("================");
            println!("Total events:     {total}");
            println!("Participants:     {taken}/{capacity}");
            println!("Spots remaining:  {open_spots}");
            println!("Full events:      {full}");
            if let (Some(e), Some(l)) = (earliest, latest) {
                println!(
                    "Date range:       {} to {}",
                    e.format("%Y-%m-%d"),
                    l.format("%Y-%m-%d")
                );
            }
            println!();

            println!("By Difficulty:");
            for (level, count) in &by_difficulty {
                println!("  {level}: {count}");
            }
            println!();

            println!("By Type:");
            for (name, (count, spots)) in &by_type {
                println!("  {name}: {count} events, {spots} spots left");
            }
        }
    }

    Ok(())
}
