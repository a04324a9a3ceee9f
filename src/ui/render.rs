//! Render functions for the TUI.
//!
//! This module handles the top-level layout and dispatches to the widget
//! renderers for the form, results, status bar and help overlay.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use super::{form, help, results, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 12;

/// Main render dispatch function.
///
/// Lays out form, results and status bar top to bottom, then draws the
/// help overlay on top when active.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    form::render(f, app, chunks[0]);
    results::render(f, app, chunks[1]);
    status::render(f, app, chunks[2]);

    if app.show_help {
        help::render(f, app);
    }
}
