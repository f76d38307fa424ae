use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use evtab_core::EventDraft;

use crate::client::EventsApi;

pub async fn run(
    client: &impl EventsApi,
    name: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Event name")
            .interact_text()?,
    };

    let start = match start {
        Some(s) => s,
        None => Input::<String>::new()
            .with_prompt("  Start date (YYYY-MM-DD)")
            .interact_text()?,
    };

    let end = match end {
        Some(e) => e,
        None => Input::<String>::new()
            .with_prompt("  End date (YYYY-MM-DD)")
            .interact_text()?,
    };

    let draft = EventDraft::parse(&name, &start, &end)?;

    let spinner = super::spinner("Creating event");
    let created = client.create_event(&draft).await;
    spinner.finish_and_clear();
    let created = created?;

    println!(
        "{}",
        format!("  Created: {} ({})", created.event_name, created.id).green()
    );
    Ok(())
}
