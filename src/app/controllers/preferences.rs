//! Preference controller: the accessibility toolbar's state machine.
//!
//! Every operation runs the same sequence: mutate `PreferenceState`, project it
//! onto the page, persist, announce. The page is never consulted to decide
//! what the current theme is.

use tracing::{debug, warn};

use crate::app::domain::messages::ControlId;
use crate::app::domain::preferences::{BaseTheme, FontScale, PreferenceState, ThemeMode};
use crate::app::infrastructure::platform::SystemSignals;
use crate::app::infrastructure::presentation::{
    BodyClass, MAIN_CONTENT_ID, Presentation, ScrollBehavior,
};
use crate::app::infrastructure::storage::{FLAG_ON, PreferenceStore, StorageKey};
use crate::app::services::announcer::Announcer;

pub struct PreferenceController<S, P> {
    state: PreferenceState,
    store: S,
    page: P,
    announcer: Announcer,
}

impl<S: PreferenceStore, P: Presentation> PreferenceController<S, P> {
    pub fn new(store: S, page: P) -> Self {
        Self {
            state: PreferenceState::default(),
            store,
            page,
            announcer: Announcer::default(),
        }
    }

    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn announce(&mut self, message: &str) {
        self.announcer.announce(&mut self.page, message);
    }

    // --- Bootstrap ---

    /// Reconcile OS signals with persisted preferences and render the result.
    pub fn bootstrap(&mut self, signals: &impl SystemSignals) {
        // Honour theme markup already on the page, then make sure exactly one theme marker shows.
        if self.page.has_class(BodyClass::HighContrastTheme) {
            self.state.high_contrast = true;
            self.set_control_active(ControlId::ContrastToggle, true);
        } else if self.page.has_class(BodyClass::DarkTheme) {
            self.state.base_theme = BaseTheme::Dark;
        }
        self.render_theme();

        // OS dark preference only counts until the user picks a theme explicitly.
        if signals.prefers_dark_scheme() && !self.has_persisted_theme() {
            self.apply_theme(ThemeMode::Dark);
        }

        if let Some(raw) = self.store.get(StorageKey::FontSize) {
            self.state.font_scale = FontScale::parse_persisted(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Ignoring malformed persisted font scale");
                FontScale::DEFAULT
            });
        }
        self.apply_font_scale();

        if let Some(raw) = self.store.get(StorageKey::Theme) {
            match BaseTheme::parse(&raw) {
                Some(base) => self.apply_theme(base.into()),
                None => warn!(value = %raw, "Ignoring unknown persisted theme"),
            }
        }

        if self.store.flag(StorageKey::Contrast) {
            self.apply_theme(ThemeMode::HighContrast);
            self.set_control_active(ControlId::ContrastToggle, true);
        }

        // The legacy dyslexia key is a synonym for spacing.
        if self.store.flag(StorageKey::Spacing) || self.store.flag(StorageKey::Dyslexia) {
            self.state.spacing = true;
            self.page.add_class(BodyClass::IncreaseSpacing);
            self.set_spacing_controls_active(true);
        }

        if signals.prefers_reduced_motion() {
            self.page.set_scroll_behavior(ScrollBehavior::Auto);
        }

        debug!(state = ?self.state, "Preferences bootstrapped");
    }

    /// OS light/dark preference changed. Applied live unless a theme is persisted.
    /// Returns true if the base theme followed the OS.
    pub fn on_color_scheme_change(&mut self, prefers_dark: bool) -> bool {
        if self.has_persisted_theme() {
            debug!("Explicit theme persisted; ignoring OS scheme change");
            return false;
        }
        let base = BaseTheme::from_dark(prefers_dark);
        if self.state.high_contrast {
            // High contrast keeps covering; the new base shows once it is switched off.
            self.state.base_theme = base;
            return true;
        }
        self.apply_theme(base.into());
        true
    }

    // --- Font scale ---

    /// Returns false at the upper bound (nothing happens, nothing is announced).
    pub fn increase_font_scale(&mut self) -> bool {
        let Some(next) = self.state.font_scale.increased() else {
            return false;
        };
        self.state.font_scale = next;
        self.apply_font_scale();
        self.save_font_scale();
        self.announce(&format!("Tamanho da fonte aumentado para {}", next));
        true
    }

    /// Returns false at the lower bound.
    pub fn decrease_font_scale(&mut self) -> bool {
        let Some(next) = self.state.font_scale.decreased() else {
            return false;
        };
        self.state.font_scale = next;
        self.apply_font_scale();
        self.save_font_scale();
        self.announce(&format!("Tamanho da fonte diminuído para {}", next));
        true
    }

    pub fn reset_font_scale(&mut self) {
        self.state.font_scale = FontScale::DEFAULT;
        self.apply_font_scale();
        self.save_font_scale();
        self.announce("Tamanho da fonte redefinido para padrão");
    }

    /// Project the font scale onto the root text size. No persistence, no announcement.
    pub fn apply_font_scale(&mut self) {
        self.page.set_root_font_px(self.state.font_scale.root_font_px());
    }

    fn save_font_scale(&mut self) {
        let value = self.state.font_scale.percent().to_string();
        self.store.set(StorageKey::FontSize, &value);
    }

    // --- Theme ---

    /// Dark <-> light. From high contrast, switches to light and leaves contrast mode.
    pub fn toggle_theme(&mut self) {
        let leaving_contrast = self.state.high_contrast;
        let next = match self.state.effective_theme() {
            ThemeMode::Dark => BaseTheme::Light,
            ThemeMode::Light => BaseTheme::Dark,
            ThemeMode::HighContrast => BaseTheme::Light,
        };

        self.state.base_theme = next;
        self.state.high_contrast = false;
        self.render_theme();
        if leaving_contrast {
            self.set_control_active(ControlId::ContrastToggle, false);
        }

        self.store.set(StorageKey::Theme, next.as_str());
        if leaving_contrast {
            self.store.remove(StorageKey::Contrast);
        }

        self.announce(&ThemeMode::from(next).activation_message());
    }

    /// Show exactly `mode` and announce it. Does not persist.
    ///
    /// `Light`/`Dark` also become the base theme and end high contrast;
    /// `HighContrast` is layered over the current base theme.
    pub fn apply_theme(&mut self, mode: ThemeMode) {
        match mode {
            ThemeMode::Light => {
                self.state.base_theme = BaseTheme::Light;
                self.state.high_contrast = false;
            }
            ThemeMode::Dark => {
                self.state.base_theme = BaseTheme::Dark;
                self.state.high_contrast = false;
            }
            ThemeMode::HighContrast => self.state.high_contrast = true,
        }
        self.render_theme();
        self.announce(&mode.activation_message());
    }

    /// Project the effective theme: one theme marker plus the toggle glyph.
    fn render_theme(&mut self) {
        let mode = self.state.effective_theme();
        for class in BodyClass::THEMES {
            self.page.remove_class(class);
        }
        let class = BodyClass::for_theme(mode);
        self.page.add_class(class);
        debug!(class = class.css_name(), "Theme rendered");
        if let Some(control) = self.page.control_mut(ControlId::ThemeToggle) {
            control.glyph = Some(mode.glyph().to_string());
        }
    }

    fn has_persisted_theme(&self) -> bool {
        self.store.get(StorageKey::Theme).is_some()
    }

    // --- Contrast ---

    /// Turning contrast off restores the base theme that was active before it.
    pub fn toggle_contrast(&mut self) {
        if self.state.high_contrast {
            self.state.high_contrast = false;
            self.render_theme();
            self.set_control_active(ControlId::ContrastToggle, false);
            self.store.remove(StorageKey::Contrast);
            self.announce("Alto contraste desativado");
        } else {
            self.state.high_contrast = true;
            self.render_theme();
            self.set_control_active(ControlId::ContrastToggle, true);
            self.store.set(StorageKey::Contrast, FLAG_ON);
            self.announce("Alto contraste ativado");
        }
    }

    // --- Spacing ---

    /// The only place the spacing marker is switched after bootstrap.
    pub fn toggle_spacing(&mut self) {
        if self.state.spacing {
            self.state.spacing = false;
            self.page.remove_class(BodyClass::IncreaseSpacing);
            self.set_spacing_controls_active(false);
            self.store.remove(StorageKey::Spacing);
            self.announce("Espaçamento aumentado desativado");
        } else {
            self.state.spacing = true;
            self.page.add_class(BodyClass::IncreaseSpacing);
            self.set_spacing_controls_active(true);
            self.store.set(StorageKey::Spacing, FLAG_ON);
            self.announce("Espaçamento aumentado ativado. Melhor para leitura com dislexia");
        }
    }

    /// Legacy dyslexia control: forwards to spacing, then mirrors the spacing control.
    pub fn toggle_dyslexia_legacy(&mut self) {
        debug!("Dyslexia control pressed; delegating to spacing");
        self.toggle_spacing();

        let spacing_active = self.page.control(ControlId::SpacingToggle).map(|c| c.active);
        if let (Some(active), Some(dyslexia)) =
            (spacing_active, self.page.control_mut(ControlId::DyslexiaToggle))
        {
            dyslexia.active = active;
        }
    }

    // --- Page ---

    /// Move focus to the main content landmark. Returns false if it is missing.
    pub fn skip_to_main(&mut self) -> bool {
        self.page.focus(MAIN_CONTENT_ID)
    }

    fn set_spacing_controls_active(&mut self, active: bool) {
        self.set_control_active(ControlId::SpacingToggle, active);
        self.set_control_active(ControlId::DyslexiaToggle, active);
    }

    fn set_control_active(&mut self, id: ControlId, active: bool) {
        if let Some(control) = self.page.control_mut(id) {
            control.active = active;
        }
    }
}
