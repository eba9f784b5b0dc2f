//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Preference storage (memory and JSON file)
//! - Platform appearance signals
//! - The presentation seam and its in-memory page
//! - Logging setup and error types

pub mod error;
pub mod logging;
pub mod platform;
pub mod presentation;
pub mod storage;
