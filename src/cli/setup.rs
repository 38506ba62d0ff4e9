use dialoguer::Input;
use serde_json::json;

use crate::cli::output::print_json;
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::setup::flow::{ConfigFlow, FlowResult, UserInput};
use crate::setup::store::EntryStore;

fn error_message(code: &str) -> &'static str {
    match code {
        "cannot_connect" => "Failed to connect, please try again",
        _ => "Unexpected error",
    }
}

fn prompt_url() -> Result<String, AppError> {
    Input::new()
        .with_prompt("Device URL")
        .interact_text()
        .map_err(|e| AppError::InvalidInput(e.to_string()))
}

pub async fn handle(url: Option<&str>, _config: &RuntimeConfig) -> Result<(), AppError> {
    let flow = ConfigFlow::new(EntryStore::open_default()?);
    let interactive = url.is_none();
    let mut next_url = url.map(str::to_string);

    loop {
        let url = match next_url.take() {
            Some(url) => url,
            None => prompt_url()?,
        };

        match flow.step_user(Some(UserInput { url: url.clone() })).await {
            FlowResult::CreateEntry { entry } => {
                print_json(&json!({
                    "entry_id": entry.entry_id,
                    "title": entry.title,
                    "url": entry.data.url,
                }));
                return Ok(());
            }
            FlowResult::Abort { reason } => {
                return Err(AppError::AlreadyConfigured(format!("{} ({})", url, reason)));
            }
            FlowResult::ShowForm { errors, .. } => {
                let code = errors.get("base").map(String::as_str).unwrap_or("unknown");
                if !interactive {
                    return Err(match code {
                        "cannot_connect" => AppError::CannotConnect(url),
                        _ => AppError::Unknown(error_message(code).to_string()),
                    });
                }
                eprintln!("{}", error_message(code));
            }
        }
    }
}
