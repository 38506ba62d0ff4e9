use serde::{Deserialize, Serialize};

/// Identity blob returned by the device's info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    #[serde(rename = "num-led", default)]
    pub num_led: u32,

    /// Vendor fields this client does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DeviceInfo {
    pub fn name_or_default(&self) -> &str {
        if self.name.is_empty() {
            "ohm-led"
        } else {
            &self.name
        }
    }
}
