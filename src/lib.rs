//! chirp: a keyboard-driven terminal dashboard for social-media analytics
//!
//! The binary wires a crossterm event loop to the [`app::App`] root; the
//! library exposes the controllers and data model so they can be driven
//! directly in tests.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod modules;
pub mod ui;
