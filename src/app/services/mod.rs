//! Services layer - page collaborators and utilities.
//!
//! This module contains the pieces the controllers lean on:
//! - Assistive-technology announcements
//! - Contact form validation and simulated delivery
//! - Navigation highlighting
//! - Page audit helpers

pub mod announcer;
pub mod audit;
pub mod contact_form;
pub mod navigation;
