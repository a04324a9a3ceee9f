//! Search form widget: topic field, article-count selector, submit button.

use crate::app::{App, Focus};
use crate::news::ArticleCount;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rows taken by the form, borders included.
pub(super) const HEIGHT: u16 = 9;

const PLACEHOLDER: &str = "Enter a topic";
const BUTTON_LABEL: &str = "[ Search Articles ]";

/// Render the search form
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let form_focused = app.focus != Focus::Results;
    let border_style = if form_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(" News Article Search ", app.style("form_title")));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let input_width = inner.width.saturating_sub(4) as usize;

    let lines = vec![
        Line::from(Span::styled(
            "Enter a topic and select the number of articles to display",
            app.style("form_hint"),
        )),
        label("Topic", app.focus == Focus::Topic, app),
        topic_line(app, input_width),
        error_line(app),
        label("Number of Articles", app.focus == Focus::Count, app),
        count_line(app),
        button_line(app),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

fn label<'a>(text: &'a str, focused: bool, app: &App) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    Line::from(vec![
        Span::styled(marker, app.style("panel_border_focused")),
        Span::styled(text, app.style("form_label")),
    ])
}

fn topic_line(app: &App, width: usize) -> Line<'static> {
    let topic = app.search.topic();
    let focused = app.focus == Focus::Topic;

    if topic.is_empty() && !focused {
        return Line::from(vec![
            Span::raw("  "),
            Span::styled(PLACEHOLDER, app.style("form_placeholder")),
        ]);
    }

    let cursor = if focused { "_" } else { "" };
    let visible = tail_to_width(topic, width.saturating_sub(cursor.len()));
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{}{}", visible, cursor), app.style("form_input")),
    ])
}

fn error_line(app: &App) -> Line<'static> {
    match app.search.error() {
        Some(err) => Line::from(vec![
            Span::raw("  "),
            Span::styled(err.to_string(), app.style("form_error")),
        ]),
        None => Line::from(""),
    }
}

fn count_line(app: &App) -> Line<'static> {
    let selected = app.search.count();
    let focused = app.focus == Focus::Count;

    let mut spans = vec![Span::raw("  ")];
    for count in ArticleCount::ALL {
        if count == selected {
            let style = if focused {
                app.style("button_focused")
            } else {
                app.style("button")
            };
            spans.push(Span::styled(format!("[{:>2}]", count.get()), style));
        } else {
            spans.push(Span::styled(
                format!(" {:>2} ", count.get()),
                app.style("form_input"),
            ));
        }
        spans.push(Span::raw(" "));
    }
    if focused {
        spans.push(Span::styled("←/→ to change", app.style("form_hint")));
    }
    Line::from(spans)
}

fn button_line(app: &App) -> Line<'static> {
    let style = if app.focus == Focus::Submit {
        app.style("button_focused")
    } else {
        app.style("button")
    };
    Line::from(vec![Span::raw("  "), Span::styled(BUTTON_LABEL, style)])
}

/// The longest suffix of `s` that fits in `width` columns, so the end of a
/// long topic stays next to the cursor.
fn tail_to_width(s: &str, width: usize) -> &str {
    if UnicodeWidthStr::width(s) <= width {
        return s;
    }
    let mut used = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}
