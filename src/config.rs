use std::env;
use std::path::PathBuf;

use crate::error::AppError;

const CONFIG_DIR_ENV: &str = "OHMLED_CONFIG_DIR";
const APP_DIR: &str = "ohmled";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Table,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub output_mode: OutputMode,
}

/// Directory holding persisted config entries.
pub fn config_dir() -> Result<PathBuf, AppError> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| AppError::Unknown("failed to resolve config dir".into()))
}
