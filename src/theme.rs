//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette: semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Search form --
    pub form_title: Style,
    pub form_hint: Style,
    pub form_label: Style,
    pub form_input: Style,
    pub form_placeholder: Style,
    pub form_error: Style,
    pub button: Style,
    pub button_focused: Style,

    // -- Result cards --
    pub results_heading: Style,
    pub card_title: Style,
    pub card_meta: Style,
    pub card_body: Style,
    pub card_image_text: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
    pub help_heading: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            form_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            form_hint: Style::default().fg(Color::DarkGray),
            form_label: Style::default().add_modifier(Modifier::BOLD),
            form_input: Style::default().fg(Color::White),
            form_placeholder: Style::default().fg(Color::DarkGray),
            form_error: Style::default().fg(Color::Red),
            button: Style::default().bg(Color::DarkGray).fg(Color::White),
            button_focused: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            results_heading: Style::default().add_modifier(Modifier::BOLD),
            card_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            card_meta: Style::default().fg(Color::DarkGray),
            card_body: Style::default(),
            card_image_text: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
            help_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light palette, adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            form_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            form_hint: Style::default().fg(Color::DarkGray),
            form_label: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            form_input: Style::default().fg(Color::Black),
            form_placeholder: Style::default().fg(Color::Gray),
            form_error: Style::default().fg(Color::Red),
            button: Style::default().bg(Color::Gray).fg(Color::Black),
            button_focused: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            results_heading: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_meta: Style::default().fg(Color::DarkGray),
            card_body: Style::default().fg(Color::Black),
            card_image_text: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
            help_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        }
    }
}

// ============================================================================
// Style Map: string-keyed lookup
// ============================================================================

/// String-keyed style lookup.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"card_title"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 17] = [
    "form_title",
    "form_hint",
    "form_label",
    "form_input",
    "form_placeholder",
    "form_error",
    "button",
    "button_focused",
    "results_heading",
    "card_title",
    "card_meta",
    "card_body",
    "card_image_text",
    "status_bar",
    "panel_border",
    "panel_border_focused",
    "help_heading",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 17] = [
            p.form_title,
            p.form_hint,
            p.form_label,
            p.form_input,
            p.form_placeholder,
            p.form_error,
            p.button,
            p.button_focused,
            p.results_heading,
            p.card_title,
            p.card_meta,
            p.card_body,
            p.card_image_text,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
            p.help_heading,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
