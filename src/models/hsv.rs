use serde::{Serialize, Serializer};

/// HSV triple in the device's native 0-255 scale.
///
/// A `None` channel tells the device to keep its current value for that
/// channel, which is not the same as an explicit zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hsv {
    pub hue: Option<u8>,
    pub saturation: Option<u8>,
    pub value: Option<u8>,
}

impl Hsv {
    pub fn unset() -> Self {
        Self::default()
    }
}

/// Encodes as `[h, s, v]` with `null` for unset channels.
impl Serialize for Hsv {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.hue, self.saturation, self.value).serialize(serializer)
    }
}

/// Scale `value` from `0..=max` into `0..=255`, rounding to nearest.
pub fn scale_to_u8(value: f64, max: f64) -> u8 {
    let scaled = (value / max * 255.0).round();
    scaled.clamp(0.0, 255.0) as u8
}
