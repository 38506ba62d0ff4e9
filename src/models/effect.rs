use serde::Serialize;

/// Named effects a light can be asked to run.
///
/// `Random` has no device-side counterpart: it resolves to a plain `on`
/// call with a randomly picked color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Colorloop,
    Rainbow,
    Pulse,
    Random,
}

/// Device modes that report as a running effect.
const MODE_MAP: &[(&str, Effect)] = &[
    ("colorloop", Effect::Colorloop),
    ("rainbow", Effect::Rainbow),
    ("pulse", Effect::Pulse),
];

impl Effect {
    pub const ALL: [Effect; 4] = [
        Effect::Colorloop,
        Effect::Rainbow,
        Effect::Pulse,
        Effect::Random,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    pub fn from_mode(mode: &str) -> Option<Self> {
        MODE_MAP
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|(_, effect)| *effect)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Effect::Colorloop => "colorloop",
            Effect::Rainbow => "rainbow",
            Effect::Pulse => "pulse",
            Effect::Random => "random",
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Effect::from_name("colorloop"), Some(Effect::Colorloop));
        assert_eq!(Effect::from_name("random"), Some(Effect::Random));
        assert_eq!(Effect::from_name("Rainbow"), None);
        assert_eq!(Effect::from_name("strobe"), None);
    }

    #[test]
    fn test_display_matches_name() {
        for effect in Effect::ALL {
            assert_eq!(effect.to_string(), effect.name());
        }
    }

    #[test]
    fn test_random_is_never_a_mode() {
        assert_eq!(Effect::from_mode("random"), None);
        assert_eq!(Effect::from_mode("pulse"), Some(Effect::Pulse));
        assert_eq!(Effect::from_mode("on"), None);
    }
}
