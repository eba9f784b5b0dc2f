//! Presentation layer seam.
//!
//! Controllers never read presentation to decide state; they only project
//! `PreferenceState` onto it. `Page` is the in-memory projection used by the
//! desktop front-end and by tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::app::domain::messages::ControlId;
use crate::app::domain::preferences::ThemeMode;

/// Id of the main landmark targeted by "skip to main content".
pub const MAIN_CONTENT_ID: &str = "main-content";

/// Class-like markers on the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BodyClass {
    LightTheme,
    DarkTheme,
    HighContrastTheme,
    IncreaseSpacing,
}

impl BodyClass {
    pub const THEMES: [BodyClass; 3] = [
        BodyClass::LightTheme,
        BodyClass::DarkTheme,
        BodyClass::HighContrastTheme,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            BodyClass::LightTheme => "light-theme",
            BodyClass::DarkTheme => "dark-theme",
            BodyClass::HighContrastTheme => "high-contrast-theme",
            BodyClass::IncreaseSpacing => "increase-spacing",
        }
    }

    pub fn for_theme(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => BodyClass::LightTheme,
            ThemeMode::Dark => BodyClass::DarkTheme,
            ThemeMode::HighContrast => BodyClass::HighContrastTheme,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Auto,
}

/// A region read by assistive technology whenever its text changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRegion {
    pub id: String,
    /// Polite regions wait for the screen reader to finish speaking.
    pub polite: bool,
    pub atomic: bool,
    /// Moved off-screen: present for screen readers, invisible otherwise.
    pub visually_hidden: bool,
    pub text: String,
}

impl LiveRegion {
    pub fn hidden_polite(id: &str) -> Self {
        Self {
            id: id.to_string(),
            polite: true,
            atomic: true,
            visually_hidden: true,
            text: String::new(),
        }
    }
}

/// Visual state of a trigger control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Control {
    pub active: bool,
    /// Decorative (aria-hidden) glyph shown inside the control, if any.
    pub glyph: Option<String>,
}

pub trait Presentation {
    fn set_root_font_px(&mut self, px: f32);

    fn has_class(&self, class: BodyClass) -> bool;
    fn add_class(&mut self, class: BodyClass);
    fn remove_class(&mut self, class: BodyClass);

    /// `None` when the control is not on the page.
    fn control(&self, id: ControlId) -> Option<&Control>;
    fn control_mut(&mut self, id: ControlId) -> Option<&mut Control>;

    /// Replace the text of an existing live region. Returns false if absent.
    fn write_live_region(&mut self, id: &str, text: &str) -> bool;
    fn append_live_region(&mut self, region: LiveRegion);

    /// Move focus to the element with `id`. Returns false if absent.
    fn focus(&mut self, id: &str) -> bool;
    fn set_scroll_behavior(&mut self, behavior: ScrollBehavior);
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    root_font_px: Option<f32>,
    classes: BTreeSet<BodyClass>,
    controls: BTreeMap<ControlId, Control>,
    live_regions: Vec<LiveRegion>,
    /// Everything ever written to a live region, oldest first.
    spoken: Vec<String>,
    focusable: BTreeSet<String>,
    focused: Option<String>,
    scroll_behavior: ScrollBehavior,
}

impl Page {
    /// A page with no controls and no focus targets.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard page: all seven controls plus the main content landmark.
    pub fn with_standard_controls() -> Self {
        let mut page = Self::default();
        for id in ControlId::ALL {
            page.controls.insert(id, Control::default());
        }
        if let Some(theme) = page.controls.get_mut(&ControlId::ThemeToggle) {
            theme.glyph = Some(ThemeMode::Light.glyph().to_string());
        }
        page.focusable.insert(MAIN_CONTENT_ID.to_string());
        page
    }

    pub fn without_control(mut self, id: ControlId) -> Self {
        self.controls.remove(&id);
        self
    }

    pub fn with_class(mut self, class: BodyClass) -> Self {
        self.classes.insert(class);
        self
    }

    pub fn root_font_px(&self) -> Option<f32> {
        self.root_font_px
    }

    pub fn classes(&self) -> impl Iterator<Item = BodyClass> + '_ {
        self.classes.iter().copied()
    }

    /// Theme markers currently present
    pub fn theme_classes(&self) -> Vec<BodyClass> {
        BodyClass::THEMES
            .into_iter()
            .filter(|c| self.classes.contains(c))
            .collect()
    }

    pub fn is_control_active(&self, id: ControlId) -> Option<bool> {
        self.controls.get(&id).map(|c| c.active)
    }

    pub fn theme_glyph(&self) -> Option<&str> {
        self.controls
            .get(&ControlId::ThemeToggle)
            .and_then(|c| c.glyph.as_deref())
    }

    pub fn live_regions(&self) -> &[LiveRegion] {
        &self.live_regions
    }

    pub fn live_region(&self, id: &str) -> Option<&LiveRegion> {
        self.live_regions.iter().find(|r| r.id == id)
    }

    pub fn spoken(&self) -> &[String] {
        &self.spoken
    }

    pub fn last_spoken(&self) -> Option<&str> {
        self.spoken.last().map(String::as_str)
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn scroll_behavior(&self) -> ScrollBehavior {
        self.scroll_behavior
    }
}

impl Presentation for Page {
    fn set_root_font_px(&mut self, px: f32) {
        self.root_font_px = Some(px);
    }

    fn has_class(&self, class: BodyClass) -> bool {
        self.classes.contains(&class)
    }

    fn add_class(&mut self, class: BodyClass) {
        self.classes.insert(class);
    }

    fn remove_class(&mut self, class: BodyClass) {
        self.classes.remove(&class);
    }

    fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(&id)
    }

    fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.get_mut(&id)
    }

    fn write_live_region(&mut self, id: &str, text: &str) -> bool {
        match self.live_regions.iter_mut().find(|r| r.id == id) {
            Some(region) => {
                region.text = text.to_string();
                self.spoken.push(text.to_string());
                true
            }
            None => false,
        }
    }

    fn append_live_region(&mut self, region: LiveRegion) {
        if !region.text.is_empty() {
            self.spoken.push(region.text.clone());
        }
        self.live_regions.push(region);
    }

    fn focus(&mut self, id: &str) -> bool {
        if self.focusable.contains(id) {
            self.focused = Some(id.to_string());
            true
        } else {
            false
        }
    }

    fn set_scroll_behavior(&mut self, behavior: ScrollBehavior) {
        self.scroll_behavior = behavior;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_page_has_every_control() {
        let page = Page::with_standard_controls();
        for id in ControlId::ALL {
            assert_eq!(page.is_control_active(id), Some(false));
        }
        assert_eq!(page.theme_glyph(), Some(ThemeMode::Light.glyph()));
        assert!(page.theme_classes().is_empty());
    }

    #[test]
    fn test_missing_control_is_none() {
        let mut page = Page::with_standard_controls().without_control(ControlId::DyslexiaToggle);
        assert_eq!(page.is_control_active(ControlId::DyslexiaToggle), None);
        assert!(page.control_mut(ControlId::DyslexiaToggle).is_none());
    }

    #[test]
    fn test_live_region_write_requires_region() {
        let mut page = Page::empty();
        assert!(!page.write_live_region("status", "hello"));
        assert!(page.spoken().is_empty());

        page.append_live_region(LiveRegion::hidden_polite("status"));
        assert!(page.write_live_region("status", "hello"));
        assert_eq!(page.live_region("status").map(|r| r.text.as_str()), Some("hello"));
        assert_eq!(page.last_spoken(), Some("hello"));
    }

    #[test]
    fn test_focus_only_known_targets() {
        let mut page = Page::with_standard_controls();
        assert!(!page.focus("footer"));
        assert_eq!(page.focused(), None);
        assert!(page.focus(MAIN_CONTENT_ID));
        assert_eq!(page.focused(), Some(MAIN_CONTENT_ID));
    }

    #[test]
    fn test_css_names() {
        assert_eq!(BodyClass::for_theme(ThemeMode::HighContrast).css_name(), "high-contrast-theme");
        assert_eq!(BodyClass::IncreaseSpacing.css_name(), "increase-spacing");
    }
}
