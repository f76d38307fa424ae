use anyhow::Result;
use owo_colors::OwoColorize;

use evtab_core::EventId;

use crate::client::EventsApi;

pub async fn run(client: &impl EventsApi, id: &str) -> Result<()> {
    let id = EventId::new(id);

    let spinner = super::spinner("Deleting event");
    let result = client.delete_event(&id).await;
    spinner.finish_and_clear();
    result?;

    println!("{}", format!("  Deleted event {}", id).red());
    Ok(())
}
