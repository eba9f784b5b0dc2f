//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (preferences, config, messages)
//! - `controllers/` - Orchestration (the preference state machine)
//! - `services/` - Page collaborators (announcer, contact form, navigation, audit)
//! - `infrastructure/` - External integrations (storage, platform, presentation, logging, error)
//! - `state.rs` - Page-level coordinator and dispatch table

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::PreferenceController;
pub use domain::{AppConfig, BaseTheme, ControlId, FontScale, KeyChord, Message, PreferenceState, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::logging::init_logging;
pub use infrastructure::platform::{FixedSignals, OsSignals, SystemSignals, detect_system_dark_mode};
pub use infrastructure::presentation::{BodyClass, Page, Presentation};
pub use infrastructure::storage::{JsonFileStore, MemoryStore, PreferenceStore, StorageKey};
pub use services::announcer::Announcer;
pub use state::AppState;
