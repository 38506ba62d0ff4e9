use crate::api::device_client::HttpDeviceClient;
use crate::error::AppError;
use crate::light::OhmLight;
use crate::setup::store::{ConfigEntry, EntryStore};

/// Pick the base URL for `target`: a literal URL, a stored entry, or the
/// only stored entry when no target is given.
pub fn resolve_url(store: &EntryStore, target: Option<&str>) -> Result<String, AppError> {
    if let Some(t) = target {
        if t.starts_with("http://") || t.starts_with("https://") {
            return Ok(t.to_string());
        }
    }
    Ok(resolve_entry(store, target)?.data.url)
}

/// Resolve a config entry by title or entry ID.
pub fn resolve_entry(store: &EntryStore, target: Option<&str>) -> Result<ConfigEntry, AppError> {
    let entries = store.list()?;
    match_entry(entries, target)
}

fn match_entry(
    mut entries: Vec<ConfigEntry>,
    target: Option<&str>,
) -> Result<ConfigEntry, AppError> {
    let Some(name_or_id) = target else {
        return match entries.len() {
            0 => Err(AppError::EntryNotFound(
                "No devices configured. Run 'ohmled setup' first.".into(),
            )),
            1 => Ok(entries.remove(0)),
            _ => Err(AppError::InvalidInput(format!(
                "Multiple devices configured, pick one of: {}",
                titles(entries.iter())
            ))),
        };
    };

    // Resolution priority:
    // 1. Exact title match
    // 2. Exact entry_id match
    // 3. Case-insensitive title match
    // 4. Partial title match (only if exactly one result)

    let name_lower = name_or_id.to_lowercase();

    if let Some(entry) = entries.iter().find(|e| e.title == name_or_id) {
        return Ok(entry.clone());
    }

    if let Some(entry) = entries
        .iter()
        .find(|e| e.entry_id.to_string() == name_or_id)
    {
        return Ok(entry.clone());
    }

    if let Some(entry) = entries
        .iter()
        .find(|e| e.title.to_lowercase() == name_lower)
    {
        return Ok(entry.clone());
    }

    let partial_matches: Vec<_> = entries
        .iter()
        .filter(|e| e.title.to_lowercase().contains(&name_lower))
        .collect();

    match partial_matches.as_slice() {
        [entry] => Ok((*entry).clone()),
        [] => Err(AppError::EntryNotFound(name_or_id.to_string())),
        many => Err(AppError::EntryNotFound(format!(
            "Multiple devices match '{}': {}",
            name_or_id,
            titles(many.iter().copied())
        ))),
    }
}

fn titles<'a>(entries: impl Iterator<Item = &'a ConfigEntry>) -> String {
    entries
        .map(|e| e.title.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve `target` and run the light setup sequence against it.
pub async fn resolve_light(
    store: &EntryStore,
    target: Option<&str>,
) -> Result<OhmLight<HttpDeviceClient>, AppError> {
    let url = resolve_url(store, target)?;
    let client = HttpDeviceClient::new(&url)?;
    OhmLight::setup(client).await
}
