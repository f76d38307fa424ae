use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::EventsApi;

pub async fn run(client: &impl EventsApi) -> Result<()> {
    let spinner = super::spinner("Fetching events");
    let events = client.list_events().await;
    spinner.finish_and_clear();
    let events = events?;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let name_width = events
        .iter()
        .map(|e| e.event_name.len())
        .max()
        .unwrap_or(0)
        .max("Event".len());

    println!(
        "  {}  {}  {}  {}",
        format!("{:<name_width$}", "Event").bold(),
        format!("{:<10}", "Start").bold(),
        format!("{:<10}", "End").bold(),
        "Id".bold(),
    );
    for event in &events {
        println!(
            "  {:<name_width$}  {}  {}  {}",
            event.event_name,
            event.start_date,
            event.end_date,
            event.id.dimmed(),
        );
    }

    Ok(())
}
