//! newsdesk: a terminal news search form over synthetic article batches.
//!
//! The library target exposes the generator, the search state machine and
//! the TUI so integration tests and the binary share one module tree.

pub mod app;
pub mod config;
pub mod keybindings;
pub mod news;
pub mod report;
pub mod search;
pub mod theme;
pub mod ui;
pub mod util;
