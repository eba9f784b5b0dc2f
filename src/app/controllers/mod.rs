//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the presentation:
//! - Accessibility preferences (font scale, theme, contrast, spacing)

pub mod preferences;

pub use preferences::PreferenceController;
