//! FLTK front-end: renders the in-memory page projection.

pub mod main_window;
pub mod theme;
