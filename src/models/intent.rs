use serde::Serialize;

/// A single "turn on" request as issued by the user.
///
/// `effect` is kept as the raw name: unrecognised names are not an error,
/// they simply do not change the resolved command.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LightIntent {
    /// Hue in degrees (0-360) and saturation in percent (0-100).
    pub hs_color: Option<(f64, f64)>,
    pub brightness: Option<u8>,
    pub effect: Option<String>,
}

impl LightIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hs_color(mut self, hue: f64, saturation: f64) -> Self {
        self.hs_color = Some((hue, saturation));
        self
    }

    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }
}
