use serde::{Deserialize, Serialize};

use super::effect::Effect;

pub const MODE_OFF: &str = "off";

/// Snapshot returned by the device's state endpoint.
///
/// `mode` is kept as the raw vendor string so unknown modes survive a
/// refresh; `value` is the brightness as reported, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    pub mode: String,
    pub value: i64,
}

impl DeviceState {
    pub fn from_json(data: &serde_json::Value) -> Option<Self> {
        let mode = data.get("mode").and_then(|v| v.as_str())?.to_string();
        let value = data.get("value").and_then(|v| v.as_i64())?;
        Some(Self { mode, value })
    }

    pub fn is_on(&self) -> bool {
        self.mode != MODE_OFF
    }

    pub fn effect(&self) -> Option<Effect> {
        Effect::from_mode(&self.mode)
    }
}
