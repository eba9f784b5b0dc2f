/// All commands the page can dispatch.
/// Control callbacks and the shortcut handler send one of these; `AppState::dispatch`
/// routes it to the owning controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Text scale
    IncreaseFontScale,
    DecreaseFontScale,
    ResetFontScale,

    // Theme & reading aids
    ToggleTheme,
    ToggleContrast,
    ToggleSpacing,
    ToggleDyslexia,

    // Page
    SkipToMain,
    SystemColorSchemeChanged(bool),
    NavLinkClicked(usize),
    PageScrolled(f64),
    EnrollInCourse(String),
    SubmitContactForm,
}

/// Trigger controls rendered on the page, keyed by their element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlId {
    FontIncrease,
    FontDecrease,
    FontReset,
    ThemeToggle,
    ContrastToggle,
    SpacingToggle,
    DyslexiaToggle,
}

impl ControlId {
    pub const ALL: [ControlId; 7] = [
        ControlId::FontIncrease,
        ControlId::FontDecrease,
        ControlId::FontReset,
        ControlId::ThemeToggle,
        ControlId::ContrastToggle,
        ControlId::SpacingToggle,
        ControlId::DyslexiaToggle,
    ];

    /// Accessible label for the control
    pub fn label(self) -> &'static str {
        match self {
            ControlId::FontIncrease => "Aumentar fonte",
            ControlId::FontDecrease => "Diminuir fonte",
            ControlId::FontReset => "Resetar fonte",
            ControlId::ThemeToggle => "Alternar tema",
            ControlId::ContrastToggle => "Alto contraste",
            ControlId::SpacingToggle => "Espaçamento aumentado",
            ControlId::DyslexiaToggle => "Modo dislexia (fonte otimizada)",
        }
    }

    /// Command sent when the control is activated
    pub fn message(self) -> Message {
        match self {
            ControlId::FontIncrease => Message::IncreaseFontScale,
            ControlId::FontDecrease => Message::DecreaseFontScale,
            ControlId::FontReset => Message::ResetFontScale,
            ControlId::ThemeToggle => Message::ToggleTheme,
            ControlId::ContrastToggle => Message::ToggleContrast,
            ControlId::SpacingToggle => Message::ToggleSpacing,
            ControlId::DyslexiaToggle => Message::ToggleDyslexia,
        }
    }
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyChord {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub key: char,
}

impl KeyChord {
    pub fn alt(key: char) -> Self {
        Self {
            alt: true,
            key,
            ..Default::default()
        }
    }
}

/// Alt+digit bindings, in the order they are listed to the user.
const SHORTCUTS: [(char, &str); 8] = [
    ('1', "Aumentar fonte"),
    ('2', "Diminuir fonte"),
    ('3', "Resetar fonte"),
    ('4', "Alternar tema"),
    ('5', "Alto contraste"),
    ('6', "Espaçamento aumentado"),
    ('7', "Modo dislexia (fonte otimizada)"),
    ('0', "Pular para conteúdo principal"),
];

impl Message {
    /// Map a key chord to its command. Only bare Alt chords are bound.
    pub fn from_shortcut(chord: &KeyChord) -> Option<Message> {
        if !chord.alt || chord.ctrl {
            return None;
        }
        let msg = match chord.key {
            '1' => Message::IncreaseFontScale,
            '2' => Message::DecreaseFontScale,
            '3' => Message::ResetFontScale,
            '4' => Message::ToggleTheme,
            '5' => Message::ToggleContrast,
            '6' => Message::ToggleSpacing,
            '7' => Message::ToggleDyslexia,
            '0' => Message::SkipToMain,
            _ => return None,
        };
        Some(msg)
    }
}

/// Human-readable shortcut listing, e.g. `("Alt + 1", "Aumentar fonte")`.
pub fn shortcut_help() -> Vec<(String, &'static str)> {
    SHORTCUTS
        .iter()
        .map(|(key, action)| (format!("Alt + {}", key), *action))
        .collect()
}
