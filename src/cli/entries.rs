use clap::Subcommand;
use serde_json::json;
use tabled::Tabled;

use crate::cli::output::{print_json, print_table};
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;
use crate::resolve;
use crate::setup::store::EntryStore;

#[derive(Subcommand)]
pub enum EntriesCommand {
    /// List configured devices
    List,

    /// Remove a configured device
    Remove {
        /// Device title or entry ID
        device: String,
    },
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "ADDED")]
    created_at: String,
    #[tabled(rename = "ENTRY ID")]
    entry_id: String,
}

pub async fn handle(cmd: &EntriesCommand, config: &RuntimeConfig) -> Result<(), AppError> {
    let store = EntryStore::open_default()?;
    match cmd {
        EntriesCommand::List => handle_list(&store, config),
        EntriesCommand::Remove { device } => {
            let entry = resolve::resolve_entry(&store, Some(device))?;
            let removed = store.remove(entry.entry_id)?;
            print_json(&json!({"removed": removed.title, "entry_id": removed.entry_id}));
            Ok(())
        }
    }
}

fn handle_list(store: &EntryStore, config: &RuntimeConfig) -> Result<(), AppError> {
    let entries = store.list()?;

    if config.output_mode == OutputMode::Table {
        let rows: Vec<EntryRow> = entries
            .iter()
            .map(|e| EntryRow {
                title: e.title.clone(),
                url: e.data.url.clone(),
                created_at: e.created_at.format("%Y-%m-%d %H:%M").to_string(),
                entry_id: e.entry_id.to_string(),
            })
            .collect();
        print_table(&rows);
    } else {
        print_json(&serde_json::to_value(&entries)?);
    }
    Ok(())
}
