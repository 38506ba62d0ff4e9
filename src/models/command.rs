use serde::Serialize;

use super::hsv::Hsv;

/// The one outbound device call a light request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "command", content = "hsv", rename_all = "lowercase")]
pub enum DeviceCommand {
    On(Hsv),
    Off,
    Colorloop(Hsv),
    Rainbow(Hsv),
    Pulse(Hsv),
}

impl DeviceCommand {
    pub fn name(&self) -> &'static str {
        match self {
            DeviceCommand::On(_) => "on",
            DeviceCommand::Off => "off",
            DeviceCommand::Colorloop(_) => "colorloop",
            DeviceCommand::Rainbow(_) => "rainbow",
            DeviceCommand::Pulse(_) => "pulse",
        }
    }

    pub fn hsv(&self) -> Option<Hsv> {
        match self {
            DeviceCommand::On(hsv)
            | DeviceCommand::Colorloop(hsv)
            | DeviceCommand::Rainbow(hsv)
            | DeviceCommand::Pulse(hsv) => Some(*hsv),
            DeviceCommand::Off => None,
        }
    }
}
