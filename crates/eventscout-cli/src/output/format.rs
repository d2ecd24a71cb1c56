use eventscout_core::model::{Event, Occupancy};
use eventscout_query::Ranked;

use super::{OutputFormat, SearchResponse};

fn occupancy_label(occupancy: Occupancy) -> &'static str {
    match occupancy {
        Occupancy::Low => "open",
        Occupancy::Medium => "filling up",
        Occupancy::High => "almost full",
    }
}

fn spots_label(event: &Event) -> String {
    if event.is_full() {
        "full".to_string()
    } else {
        format!("{}/{} left", event.spots_remaining(), event.max_participants)
    }
}

pub fn format_event_list(events: &[Event], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&SearchResponse::new(events, None)).unwrap_or_default()
        }
        OutputFormat::Text => format_event_list_text(events.iter().map(|e| (e, None))),
        OutputFormat::Markdown => format_event_table(events.iter().map(|e| (e, None))),
    }
}

/// Search results. JSON is the response envelope, or the scored results
/// themselves when `explain` is set.
pub fn format_ranked_list(
    results: &[Ranked],
    query: Option<&str>,
    explain: bool,
    fmt: OutputFormat,
) -> String {
    let rows = results.iter().map(|r| {
        let reasons = explain.then(|| {
            let labels = r.score.reasons();
            if labels.is_empty() {
                format!("score {}", r.score.total())
            } else {
                format!("score {}: {}", r.score.total(), labels.join(", "))
            }
        });
        (&r.event, reasons)
    });
    match fmt {
        OutputFormat::Json => {
            if explain {
                serde_json::to_string_pretty(results).unwrap_or_default()
            } else {
                let response = SearchResponse::new(results.iter().map(|r| &r.event), query);
                serde_json::to_string_pretty(&response).unwrap_or_default()
            }
        }
        OutputFormat::Text => format_event_list_text(rows),
        OutputFormat::Markdown => format_event_table(rows),
    }
}

fn format_event_list_text<'a>(rows: impl Iterator<Item = (&'a Event, Option<String>)>) -> String {
    let mut out = String::new();
    for (e, reasons) in rows {
        let time = e.date.format("%Y-%m-%d %H:%M");
        out.push_str(&format!(
            "\u{25c6} {} {} [{}/{}] {}  {time}\n",
            e.id.short(),
            e.name,
            e.event_type,
            e.difficulty,
            spots_label(e),
        ));
        if let Some(reasons) = reasons {
            out.push_str(&format!("    {reasons}\n"));
        }
    }
    if out.is_empty() {
        return "No events found.\n".to_string();
    }
    out
}

fn format_event_table<'a>(rows: impl Iterator<Item = (&'a Event, Option<String>)>) -> String {
    let mut body = String::new();
    let mut explained = false;
    for (e, reasons) in rows {
        body.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |",
            e.date.format("%Y-%m-%d"),
            e.name,
            e.event_type,
            e.difficulty,
            e.address,
            spots_label(e),
        ));
        if let Some(reasons) = reasons {
            explained = true;
            body.push_str(&format!(" {reasons} |"));
        }
        body.push('\n');
    }
    if body.is_empty() {
        return "_No events found._\n".to_string();
    }

    let mut out = String::from("| Date | Name | Type | Difficulty | Address | Spots |");
    if explained {
        out.push_str(" Relevance |\n|---|---|---|---|---|---|---|\n");
    } else {
        out.push_str("\n|---|---|---|---|---|---|\n");
    }
    out.push_str(&body);
    out
}

pub fn format_event_full(event: &Event, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(event).unwrap_or_default(),
        OutputFormat::Text => format_event_full_text(event),
        OutputFormat::Markdown => format_event_full_markdown(event),
    }
}

fn format_event_full_text(e: &Event) -> String {
    let mut out = String::new();

    out.push_str(&format!("Event:      {}\n", e.id));
    out.push_str(&format!("Name:       {}\n", e.name));
    out.push_str(&format!("Type:       {}\n", e.event_type));
    out.push_str(&format!("Difficulty: {}\n", e.difficulty));
    out.push_str(&format!(
        "Date:       {}\n",
        e.date.format("%A, %B %-d, %Y %H:%M UTC")
    ));
    out.push_str(&format!("Duration:   {}\n", e.duration));
    out.push_str(&format!("Address:    {}\n", e.address));
    out.push_str(&format!(
        "Capacity:   {}/{} participants, {} ({})\n",
        e.current_participants,
        e.max_participants,
        spots_label(e),
        occupancy_label(e.occupancy())
    ));
    out.push_str(&format!("Organizer:  {}\n", e.organizer));
    out.push_str(&format!("Contact:    {}\n", e.contact));

    if !e.requirements.is_empty() {
        out.push_str("\n--- Requirements ---\n");
        for req in &e.requirements {
            out.push_str(&format!("  - {req}\n"));
        }
    }

    out.push_str("\n--- About ---\n");
    out.push_str(&e.description);
    out.push('\n');
    out
}

fn format_event_full_markdown(e: &Event) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", e.name));
    md.push_str(&format!(
        "**{}** · {} level · {}\n\n",
        e.event_type,
        e.difficulty,
        e.date.format("%Y-%m-%d %H:%M UTC")
    ));
    md.push_str(&format!("- **Duration:** {}\n", e.duration));
    md.push_str(&format!("- **Address:** {}\n", e.address));
    md.push_str(&format!(
        "- **Participants:** {}/{} ({})\n",
        e.current_participants,
        e.max_participants,
        spots_label(e)
    ));
    md.push_str(&format!(
        "- **Organizer:** {} ({})\n",
        e.organizer, e.contact
    ));

    if !e.requirements.is_empty() {
        md.push_str("\n## Requirements\n\n");
        for req in &e.requirements {
            md.push_str(&format!("- {req}\n"));
        }
    }

    md.push_str("\n## About\n\n");
    md.push_str(&e.description);
    md.push('\n');
    md
}
