use std::time::Instant;

use tracing::{debug, info, warn};

use super::controllers::preferences::PreferenceController;
use super::domain::config::AppConfig;
use super::domain::messages::{KeyChord, Message, shortcut_help};
use super::infrastructure::platform::SystemSignals;
use super::infrastructure::presentation::Presentation;
use super::infrastructure::storage::PreferenceStore;
use super::services::audit::{AccessibilityIssue, PageElement, add_image_descriptions, audit_page};
use super::services::contact_form::{ContactForm, FormError, PendingSubmission, SUCCESS_TEXT};
use super::services::navigation::NavMenu;

/// Page-level coordinator: owns the preference controller and the page's
/// independent collaborators, and routes every `Message` to its handler.
pub struct AppState<S, P> {
    pub prefs: PreferenceController<S, P>,
    pub nav: NavMenu,
    pub contact_form: ContactForm,
    pub outline: Vec<PageElement>,
    pending_submission: Option<PendingSubmission>,
    config: AppConfig,
}

impl<S: PreferenceStore, P: Presentation> AppState<S, P> {
    pub fn new(store: S, page: P, config: AppConfig) -> Self {
        Self {
            prefs: PreferenceController::new(store, page),
            nav: NavMenu::default(),
            contact_form: ContactForm::default(),
            outline: Vec::new(),
            pending_submission: None,
            config,
        }
    }

    pub fn with_nav(mut self, nav: NavMenu) -> Self {
        self.nav = nav;
        self
    }

    pub fn with_outline(mut self, outline: Vec<PageElement>) -> Self {
        self.outline = outline;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Startup: restore preferences, list shortcuts, optionally audit the page.
    pub fn bootstrap(&mut self, signals: &impl SystemSignals) {
        self.prefs.bootstrap(signals);

        info!("EduAcessível - Atalhos de Teclado");
        for (chord, action) in shortcut_help() {
            info!("{}: {}", chord, action);
        }

        if self.config.audit_on_start {
            self.run_accessibility_audit();
        }
    }

    /// Route a command. Returns true if it was handled.
    pub fn dispatch(&mut self, msg: Message) -> bool {
        debug!(?msg, "dispatch");
        match msg {
            Message::IncreaseFontScale => {
                self.prefs.increase_font_scale();
            }
            Message::DecreaseFontScale => {
                self.prefs.decrease_font_scale();
            }
            Message::ResetFontScale => self.prefs.reset_font_scale(),
            Message::ToggleTheme => self.prefs.toggle_theme(),
            Message::ToggleContrast => self.prefs.toggle_contrast(),
            Message::ToggleSpacing => self.prefs.toggle_spacing(),
            Message::ToggleDyslexia => self.prefs.toggle_dyslexia_legacy(),
            Message::SkipToMain => return self.prefs.skip_to_main(),
            Message::SystemColorSchemeChanged(dark) => {
                self.prefs.on_color_scheme_change(dark);
            }
            Message::NavLinkClicked(index) => return self.nav.click(index),
            Message::PageScrolled(y) => {
                self.nav.on_scroll(y);
            }
            Message::EnrollInCourse(title) => self.enroll_in_course(&title),
            Message::SubmitContactForm => return self.submit_contact_form(Instant::now()).is_ok(),
        }
        true
    }

    /// Keyboard entry point. Returns true when the chord was consumed, in which
    /// case the host should suppress its default handling.
    pub fn handle_key(&mut self, chord: &KeyChord) -> bool {
        match Message::from_shortcut(chord) {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    pub fn enroll_in_course(&mut self, course_title: &str) {
        self.prefs.announce(&format!(
            "Inscrição iniciada para {}. Por favor, complete seu cadastro para continuar.",
            course_title
        ));
    }

    // --- Contact form ---

    /// Validate and start a simulated submission. Completion happens in `poll`.
    pub fn submit_contact_form(&mut self, now: Instant) -> Result<(), FormError> {
        if let Err(error) = self.contact_form.validate() {
            self.contact_form.show_error(error);
            self.prefs.announce(&format!("Erro: {}", error));
            return Err(error);
        }

        self.contact_form.show_sending();
        self.pending_submission = Some(PendingSubmission::new(now, self.config.submit_delay()));
        Ok(())
    }

    pub fn has_pending_submission(&self) -> bool {
        self.pending_submission.is_some()
    }

    /// Complete a pending submission whose delay has elapsed. Returns true if one completed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_submission {
            Some(pending) if pending.is_ready(now) => {
                self.pending_submission = None;
                self.contact_form.show_success(SUCCESS_TEXT);
                self.contact_form.reset();
                self.prefs.announce(SUCCESS_TEXT);
                true
            }
            _ => false,
        }
    }

    // --- Audit ---

    /// Describe unlabeled images, then report remaining problems.
    pub fn run_accessibility_audit(&mut self) -> Vec<AccessibilityIssue> {
        let described = add_image_descriptions(&mut self.outline);
        if described > 0 {
            debug!(described, "Added fallback image descriptions");
        }
        let issues = audit_page(&self.outline);
        if !issues.is_empty() {
            let listed: Vec<String> = issues.iter().map(ToString::to_string).collect();
            warn!("Problemas de acessibilidade encontrados: {:?}", listed);
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::messages::ControlId;
    use crate::app::domain::preferences::{FontScale, ThemeMode};
    use crate::app::infrastructure::platform::FixedSignals;
    use crate::app::infrastructure::presentation::{MAIN_CONTENT_ID, Page};
    use crate::app::infrastructure::storage::{MemoryStore, StorageKey};
    use crate::app::services::audit::ElementKind;
    use crate::app::services::contact_form::FeedbackStatus;
    use crate::app::services::navigation::Section;
    use std::time::Duration;

    fn app() -> AppState<MemoryStore, Page> {
        let mut state = AppState::new(MemoryStore::new(), Page::with_standard_controls(), AppConfig::default());
        state.bootstrap(&FixedSignals::default());
        state
    }

    fn last_spoken(state: &AppState<MemoryStore, Page>) -> Option<&str> {
        state.prefs.page().last_spoken()
    }

    #[test]
    fn test_controls_dispatch_their_operations() {
        let mut state = app();
        for control in ControlId::ALL {
            assert!(state.dispatch(control.message()));
        }
        // +10, -10, reset, theme, contrast, spacing on, spacing off via legacy
        assert_eq!(state.prefs.state().font_scale, FontScale::DEFAULT);
        assert_eq!(state.prefs.state().effective_theme(), ThemeMode::HighContrast);
        assert!(!state.prefs.state().spacing);
    }

    #[test]
    fn test_shortcuts_consumed_only_when_bound() {
        let mut state = app();
        assert!(state.handle_key(&KeyChord::alt('1')));
        assert_eq!(state.prefs.state().font_scale.percent(), 110);

        assert!(!state.handle_key(&KeyChord::alt('9')));
        assert!(!state.handle_key(&KeyChord { key: '1', ..Default::default() }));
        assert_eq!(state.prefs.state().font_scale.percent(), 110);

        assert!(state.handle_key(&KeyChord::alt('0')));
        assert_eq!(state.prefs.page().focused(), Some(MAIN_CONTENT_ID));
    }

    #[test]
    fn test_os_scheme_message() {
        let mut state = app();
        state.dispatch(Message::SystemColorSchemeChanged(true));
        assert_eq!(state.prefs.state().effective_theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_enrollment_announcement() {
        let mut state = app();
        state.dispatch(Message::EnrollInCourse("Libras Básico".to_string()));
        assert_eq!(
            last_spoken(&state),
            Some("Inscrição iniciada para Libras Básico. Por favor, complete seu cadastro para continuar.")
        );
    }

    #[test]
    fn test_navigation_messages() {
        let mut state = app().with_nav(NavMenu::new(
            ["#inicio", "#cursos"],
            vec![Section::new("inicio", 0.0, 500.0), Section::new("cursos", 500.0, 500.0)],
        ));
        assert!(state.dispatch(Message::NavLinkClicked(1)));
        assert_eq!(state.nav.active_href(), Some("#cursos"));
        assert!(!state.dispatch(Message::NavLinkClicked(7)));

        state.dispatch(Message::PageScrolled(0.0));
        assert_eq!(state.nav.active_href(), Some("#inicio"));
    }

    #[test]
    fn test_contact_form_error_is_announced() {
        let mut state = app();
        state.contact_form = ContactForm::new("Ana", "", "Dúvida", "Olá");
        let now = Instant::now();

        assert_eq!(state.submit_contact_form(now), Err(FormError::MissingFields));
        assert_eq!(state.contact_form.feedback().status, FeedbackStatus::Error);
        assert_eq!(last_spoken(&state), Some("Erro: Por favor, preencha todos os campos"));
        assert!(!state.has_pending_submission());

        state.contact_form.email = "ana@".to_string();
        assert_eq!(state.submit_contact_form(now), Err(FormError::InvalidEmail));
        assert_eq!(last_spoken(&state), Some("Erro: Por favor, insira um e-mail válido"));
    }

    #[test]
    fn test_contact_form_completes_after_delay() {
        let mut state = app();
        state.contact_form = ContactForm::new("Ana", "ana@example.com", "Dúvida", "Olá");
        let now = Instant::now();

        assert_eq!(state.submit_contact_form(now), Ok(()));
        assert_eq!(state.contact_form.feedback().text, "Enviando mensagem...");
        assert!(state.has_pending_submission());

        assert!(!state.poll(now + Duration::from_millis(1000)));
        assert_eq!(state.contact_form.name, "Ana");

        assert!(state.poll(now + Duration::from_millis(1500)));
        assert!(!state.has_pending_submission());
        assert_eq!(state.contact_form.feedback().status, FeedbackStatus::Success);
        assert!(state.contact_form.name.is_empty());
        assert_eq!(last_spoken(&state), Some(SUCCESS_TEXT));

        assert!(!state.poll(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_submit_delay_from_config() {
        let config = AppConfig {
            submit_delay_ms: 0,
            ..Default::default()
        };
        let mut state = AppState::new(MemoryStore::new(), Page::with_standard_controls(), config);
        state.contact_form = ContactForm::new("Ana", "ana@example.com", "x", "y");
        let now = Instant::now();
        state.submit_contact_form(now).unwrap();
        assert!(state.poll(now));
    }

    #[test]
    fn test_audit_on_start() {
        let config = AppConfig {
            audit_on_start: true,
            ..Default::default()
        };
        let mut state = AppState::new(MemoryStore::new(), Page::with_standard_controls(), config)
            .with_outline(vec![
                PageElement::new(ElementKind::Image, ""),
                PageElement::new(ElementKind::Button, ""),
            ]);
        state.bootstrap(&FixedSignals::default());
        assert_eq!(state.outline[0].alt.as_deref(), Some("Imagem descritiva 1"));
        assert_eq!(state.run_accessibility_audit(), vec![AccessibilityIssue::UnlabeledButton]);
    }

    #[test]
    fn test_preferences_persist_across_sessions() {
        let mut state = app();
        state.dispatch(Message::IncreaseFontScale);
        state.dispatch(Message::ToggleTheme);
        state.dispatch(Message::ToggleSpacing);

        let store = state.prefs.store().clone();
        assert_eq!(store.get(StorageKey::FontSize).as_deref(), Some("110"));

        let mut next = AppState::new(store, Page::with_standard_controls(), AppConfig::default());
        next.bootstrap(&FixedSignals::default());
        assert_eq!(next.prefs.state().font_scale.percent(), 110);
        assert_eq!(next.prefs.state().effective_theme(), ThemeMode::Dark);
        assert!(next.prefs.state().spacing);
    }
}
