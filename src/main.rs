use fltk::{app, enums::Event, prelude::*};
use std::time::Instant;

use edu_acessivel::app::domain::config::AppConfig;
use edu_acessivel::app::domain::messages::{KeyChord, Message};
use edu_acessivel::app::infrastructure::logging::init_logging;
use edu_acessivel::app::infrastructure::platform::{OsSignals, SystemSignals};
use edu_acessivel::app::infrastructure::presentation::Page;
use edu_acessivel::app::infrastructure::storage::JsonFileStore;
use edu_acessivel::app::state::AppState;
use edu_acessivel::ui::main_window::build_main_window;
use edu_acessivel::ui::theme::apply_page;
#[cfg(target_os = "windows")]
use edu_acessivel::ui::theme::{set_windows_titlebar_theme, wants_dark_chrome};

/// How often the OS light/dark preference is re-read.
const SCHEME_POLL_SECS: f64 = 5.0;
/// Wake-up interval while a contact-form submission is pending.
const FORM_POLL_SECS: f64 = 0.25;

fn main() {
    let (config, config_error) = match AppConfig::try_load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Err(e) = init_logging(&config.log_filter) {
        eprintln!("Failed to initialise logging: {}", e);
    }
    // Reported only now that a subscriber is installed
    if let Some(e) = config_error {
        tracing::warn!(
            "Failed to parse config {}: {}. Using defaults.",
            AppConfig::get_config_path().display(),
            e
        );
    }

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();
    let mut widgets = build_main_window(&sender);

    let signals = OsSignals;
    let store = JsonFileStore::open(config.preferences_path());
    tracing::info!(path = %store.path().display(), "Using preference store");

    let mut state = AppState::new(store, Page::with_standard_controls(), config);
    state.bootstrap(&signals);
    apply_page(&mut widgets, state.prefs.page());

    widgets.wind.handle({
        let s = sender;
        move |_, ev| match ev {
            Event::KeyDown => {
                let chord = KeyChord {
                    alt: app::is_event_alt(),
                    ctrl: app::is_event_ctrl(),
                    shift: app::is_event_shift(),
                    key: app::event_key().to_char().unwrap_or('\0'),
                };
                match Message::from_shortcut(&chord) {
                    Some(msg) => {
                        s.send(msg);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    });

    widgets.wind.show();
    #[cfg(target_os = "windows")]
    set_windows_titlebar_theme(&widgets.wind, wants_dark_chrome(state.prefs.page()));

    // Push-on-change for the OS scheme: poll and emit only on transitions
    let mut last_dark = signals.prefers_dark_scheme();
    app::add_timeout3(SCHEME_POLL_SECS, {
        let s = sender;
        move |handle| {
            let dark = OsSignals.prefers_dark_scheme();
            if dark != last_dark {
                last_dark = dark;
                s.send(Message::SystemColorSchemeChanged(dark));
            }
            app::repeat_timeout3(SCHEME_POLL_SECS, handle);
        }
    });

    // Pending submissions complete on a timer, not only on the next event
    app::add_timeout3(FORM_POLL_SECS, move |handle| {
        app::awake();
        app::repeat_timeout3(FORM_POLL_SECS, handle);
    });

    while app.wait() {
        let mut changed = false;
        if let Some(msg) = receiver.recv() {
            let skip_to_main = matches!(msg, Message::SkipToMain);
            state.dispatch(msg);
            if skip_to_main {
                let _ = widgets.content.take_focus();
            }
            changed = true;
        }
        if state.has_pending_submission() && state.poll(Instant::now()) {
            changed = true;
        }
        if changed {
            apply_page(&mut widgets, state.prefs.page());
            #[cfg(target_os = "windows")]
            set_windows_titlebar_theme(&widgets.wind, wants_dark_chrome(state.prefs.page()));
        }
    }
}
