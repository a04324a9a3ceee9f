//! Utility functions for common operations.
//!
//! **Text processing**: Unicode-aware truncation for card rendering, and
//! control-character stripping for text that did not come from key presses.
//!
//! # Examples
//!
//! ```
//! use newsdesk::util::{strip_control_chars, truncate_to_width};
//!
//! assert_eq!(truncate_to_width("Long article title", 10), "Long ar...");
//! assert_eq!(strip_control_chars("Rust\x07"), "Rust");
//! ```

mod text;

pub use text::{strip_control_chars, truncate_to_width};
