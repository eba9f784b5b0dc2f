//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Preference state (font scale, base theme, contrast, spacing)
//! - Application config
//! - Message types for the dispatch table

pub mod config;
pub mod messages;
pub mod preferences;

pub use config::AppConfig;
pub use messages::{ControlId, KeyChord, Message, shortcut_help};
pub use preferences::{BaseTheme, FontScale, PreferenceState, ThemeMode};
