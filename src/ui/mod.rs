//! Terminal User Interface module.
//!
//! This module provides the TUI for the search view:
//! - Main event loop (`run`)
//! - Input handling for the form fields and the results panel
//! - Rendering for the search form, article cards, and overlays
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `render` - View rendering dispatch
//! - `form` - Search form widget
//! - `results` - Article card list widget
//! - `help` - Keybinding help overlay
//! - `status` - Status bar widget

mod form;
mod help;
mod input;
mod loop_runner;
mod render;
mod results;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
