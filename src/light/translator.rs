use rand::Rng;

use crate::models::command::DeviceCommand;
use crate::models::effect::Effect;
use crate::models::hsv::{scale_to_u8, Hsv};
use crate::models::intent::LightIntent;

const HUE_MAX_DEGREES: f64 = 360.0;
const SATURATION_MAX_PERCENT: f64 = 100.0;

/// Saturation floor for the random effect, so picks are never washed out.
const RANDOM_SATURATION_MIN: u8 = 150;

/// Resolve a turn-on request into the single device call that serves it.
///
/// Brightness 0 always resolves to `Off`, even if an effect is requested.
/// The random effect draws hue and saturation from `rng` and becomes a
/// plain `On`; unknown effect names are ignored.
pub fn translate<R: Rng + ?Sized>(intent: &LightIntent, rng: &mut R) -> DeviceCommand {
    let mut hsv = Hsv::unset();

    if let Some((hue, saturation)) = intent.hs_color {
        hsv.hue = Some(scale_to_u8(hue, HUE_MAX_DEGREES));
        hsv.saturation = Some(scale_to_u8(saturation, SATURATION_MAX_PERCENT));
    }

    if let Some(brightness) = intent.brightness {
        if brightness == 0 {
            return DeviceCommand::Off;
        }
        hsv.value = Some(brightness);
    }

    match intent.effect.as_deref().and_then(Effect::from_name) {
        Some(Effect::Colorloop) => DeviceCommand::Colorloop(hsv),
        Some(Effect::Rainbow) => DeviceCommand::Rainbow(hsv),
        Some(Effect::Pulse) => DeviceCommand::Pulse(hsv),
        Some(Effect::Random) => {
            hsv.hue = Some(rng.gen_range(0..u8::MAX));
            hsv.saturation = Some(rng.gen_range(RANDOM_SATURATION_MIN..u8::MAX));
            DeviceCommand::On(hsv)
        }
        None => DeviceCommand::On(hsv),
    }
}

/// Turn-off requests carry no arguments.
pub fn translate_off() -> DeviceCommand {
    DeviceCommand::Off
}
