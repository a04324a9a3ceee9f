//! Help overlay: scrollable keybinding table.
//!
//! Renders a centered overlay showing all keybindings grouped by context.
//! Displays actual bindings including any user overrides from config.

use crate::app::App;
use crate::keybindings::Context;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table},
    Frame,
};

/// Context display order and labels for the help screen.
const CONTEXT_ORDER: [(Context, &str); 5] = [
    (Context::Global, "General"),
    (Context::Topic, "Topic Field"),
    (Context::Count, "Article Count"),
    (Context::Submit, "Search Button"),
    (Context::Results, "Results"),
];

/// Render the help overlay on top of the current view.
pub fn render(f: &mut Frame, app: &App) {
    let overlay = centered_rect(80, 80, f.area());
    if overlay.width < 20 || overlay.height < 6 {
        return;
    }

    f.render_widget(Clear, overlay);

    let rows = binding_rows(app);
    let total_rows = rows.len();
    // Two border rows, the header row and its bottom margin
    let visible_height = overlay.height.saturating_sub(4) as usize;
    let max_scroll = total_rows.saturating_sub(visible_height);
    let scroll = app.help_scroll_offset.min(max_scroll);
    let visible_rows: Vec<Row> = rows.into_iter().skip(scroll).take(visible_height).collect();

    let title = if max_scroll > 0 {
        format!(
            " Help ({}/{}) ",
            scroll.saturating_add(1),
            max_scroll.saturating_add(1)
        )
    } else {
        " Help (Esc to close) ".to_string()
    };

    let widths = [Constraint::Length(16), Constraint::Min(20)];
    let table = Table::new(visible_rows, widths)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border_focused"))
                .title(title),
        )
        .header(
            Row::new(vec!["Key", "Action"])
                .style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .add_modifier(Modifier::UNDERLINED),
                )
                .bottom_margin(1),
        )
        .style(app.style("card_body"));

    f.render_widget(table, overlay);

    if max_scroll > 0 && scroll < max_scroll {
        let hint = Line::from(Span::styled(
            " j/k to scroll, Esc to close ",
            app.style("card_meta"),
        ));
        let hint_area = Rect {
            x: overlay.x + 1,
            y: overlay.y + overlay.height.saturating_sub(1),
            width: overlay.width.saturating_sub(2),
            height: 1,
        };
        f.render_widget(Paragraph::new(hint), hint_area);
    }
}

/// One section per context: a heading row, its bindings, then a blank row
/// between sections.
fn binding_rows(app: &App) -> Vec<Row<'static>> {
    let bindings = app.keybindings.all_bindings();
    let heading_style = app.style("help_heading").add_modifier(Modifier::BOLD);
    let mut rows = Vec::new();

    for (ctx, label) in &CONTEXT_ORDER {
        let mut section = bindings
            .iter()
            .filter(|(c, _, _, _)| c == ctx)
            .map(|(_, key, _, description)| {
                Row::new(vec![format!("  {}", key), description.to_string()])
            })
            .peekable();
        if section.peek().is_none() {
            continue;
        }

        if !rows.is_empty() {
            rows.push(Row::new(vec![String::new(), String::new()]));
        }
        rows.push(Row::new(vec![format!("-- {} --", label), String::new()]).style(heading_style));
        rows.extend(section);
    }

    rows
}

/// Create a centered rectangle with the given percentage of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
