use serde::{Deserialize, Serialize};
use std::fmt;

/// Root text size, in px, that a 100% font scale maps to.
pub const BASE_FONT_PX: f32 = 16.0;

/// Text scale as a percentage of the base size.
///
/// Always within `[MIN, MAX]` and aligned to `STEP`; the constructors refuse
/// anything else, so a `FontScale` in hand is always renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct FontScale(u16);

impl FontScale {
    pub const MIN: FontScale = FontScale(80);
    pub const MAX: FontScale = FontScale(150);
    pub const DEFAULT: FontScale = FontScale(100);
    pub const STEP: u16 = 10;

    /// Build a scale from a percentage, rejecting off-domain or off-step values.
    pub fn new(percent: u16) -> Option<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&percent) && (percent - Self::MIN.0) % Self::STEP == 0 {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Parse a persisted value. Anything that isn't a valid scale yields `None`.
    pub fn parse_persisted(raw: &str) -> Option<Self> {
        raw.trim().parse::<u16>().ok().and_then(Self::new)
    }

    pub fn percent(self) -> u16 {
        self.0
    }

    /// Next step up, or `None` at the upper bound.
    pub fn increased(self) -> Option<Self> {
        Self::new(self.0 + Self::STEP)
    }

    /// Next step down, or `None` at the lower bound.
    pub fn decreased(self) -> Option<Self> {
        self.0.checked_sub(Self::STEP).and_then(Self::new)
    }

    /// Effective root text size in px.
    pub fn root_font_px(self) -> f32 {
        BASE_FONT_PX * f32::from(self.0) / 100.0
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u16> for FontScale {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("font scale out of range: {}", value))
    }
}

impl From<FontScale> for u16 {
    fn from(scale: FontScale) -> Self {
        scale.0
    }
}

/// The user's persisted light/dark choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseTheme {
    #[default]
    Light,
    Dark,
}

impl BaseTheme {
    /// Value written to storage
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

/// What the page actually shows. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
    HighContrast,
}

impl ThemeMode {
    /// Name read out to assistive technology
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Tema Claro",
            Self::Dark => "Tema Escuro",
            Self::HighContrast => "Alto Contraste",
        }
    }

    /// Glyph shown inside the theme toggle control
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}\u{fe0f}",
            Self::Dark => "\u{1f319}",
            Self::HighContrast => "\u{25d0}",
        }
    }

    pub fn activation_message(self) -> String {
        format!("{} ativado", self.display_name())
    }
}

impl From<BaseTheme> for ThemeMode {
    fn from(base: BaseTheme) -> Self {
        match base {
            BaseTheme::Light => Self::Light,
            BaseTheme::Dark => Self::Dark,
        }
    }
}

/// The single source of truth for every preference dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferenceState {
    pub font_scale: FontScale,
    /// Base theme restored whenever high contrast is switched off.
    pub base_theme: BaseTheme,
    pub high_contrast: bool,
    pub spacing: bool,
}

impl PreferenceState {
    pub fn effective_theme(&self) -> ThemeMode {
        if self.high_contrast {
            ThemeMode::HighContrast
        } else {
            self.base_theme.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_scale_domain() {
        assert_eq!(FontScale::new(80), Some(FontScale::MIN));
        assert_eq!(FontScale::new(150), Some(FontScale::MAX));
        assert_eq!(FontScale::new(70), None);
        assert_eq!(FontScale::new(160), None);
        assert_eq!(FontScale::new(105), None);
        assert_eq!(FontScale::default().percent(), 100);
    }

    #[test]
    fn test_font_scale_steps_stop_at_bounds() {
        assert_eq!(FontScale::MAX.increased(), None);
        assert_eq!(FontScale::MIN.decreased(), None);
        assert_eq!(FontScale::DEFAULT.increased().map(FontScale::percent), Some(110));
        assert_eq!(FontScale::DEFAULT.decreased().map(FontScale::percent), Some(90));
    }

    #[test]
    fn test_increase_then_decrease_is_identity_inside_domain() {
        let mut scale = FontScale::MIN;
        while let Some(up) = scale.increased() {
            assert_eq!(up.decreased(), Some(scale));
            scale = up;
        }
        assert_eq!(scale, FontScale::MAX);
    }

    #[test]
    fn test_parse_persisted() {
        assert_eq!(FontScale::parse_persisted("130").map(FontScale::percent), Some(130));
        assert_eq!(FontScale::parse_persisted(" 90 ").map(FontScale::percent), Some(90));
        assert_eq!(FontScale::parse_persisted("abc"), None);
        assert_eq!(FontScale::parse_persisted(""), None);
        assert_eq!(FontScale::parse_persisted("300"), None);
        assert_eq!(FontScale::parse_persisted("-10"), None);
    }

    #[test]
    fn test_root_font_px() {
        assert_eq!(FontScale::DEFAULT.root_font_px(), 16.0);
        let scale = FontScale::new(130).unwrap();
        assert!((scale.root_font_px() - 20.8).abs() < 1e-4);
        assert!((FontScale::MIN.root_font_px() - 12.8).abs() < 1e-4);
    }

    #[test]
    fn test_font_scale_serde_rejects_invalid() {
        let ok: FontScale = serde_json::from_str("120").unwrap();
        assert_eq!(ok.percent(), 120);
        assert!(serde_json::from_str::<FontScale>("125").is_err());
    }

    #[test]
    fn test_base_theme_parse() {
        assert_eq!(BaseTheme::parse("light"), Some(BaseTheme::Light));
        assert_eq!(BaseTheme::parse("dark"), Some(BaseTheme::Dark));
        assert_eq!(BaseTheme::parse("high-contrast"), None);
    }

    #[test]
    fn test_effective_theme_layers_contrast_over_base() {
        let mut state = PreferenceState {
            base_theme: BaseTheme::Dark,
            ..Default::default()
        };
        assert_eq!(state.effective_theme(), ThemeMode::Dark);
        state.high_contrast = true;
        assert_eq!(state.effective_theme(), ThemeMode::HighContrast);
        state.high_contrast = false;
        assert_eq!(state.effective_theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_activation_messages() {
        assert_eq!(ThemeMode::Dark.activation_message(), "Tema Escuro ativado");
        assert_eq!(ThemeMode::Light.activation_message(), "Tema Claro ativado");
        assert_eq!(ThemeMode::HighContrast.activation_message(), "Alto Contraste ativado");
    }
}
