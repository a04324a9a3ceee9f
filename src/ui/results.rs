//! Article card list for the last generated batch.

use crate::app::{App, Focus};
use crate::news::{Article, PlaceholderImage};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows per card, borders included.
const CARD_HEIGHT: u16 = 6;
/// Columns of the colored image block on the left of each card.
const IMAGE_WIDTH: u16 = 18;

/// Render the results panel.
///
/// Records how many cards fit in `app.results_visible` for page scrolling.
pub(super) fn render(f: &mut Frame, app: &mut App, area: Rect) {
    let border_style = if app.focus == Focus::Results {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let Some(results) = app.search.results() else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Results ");
        let hint = Paragraph::new("No articles yet. Type a topic and press Enter.")
            .style(app.style("form_hint"))
            .block(block);
        f.render_widget(hint, area);
        return;
    };

    let inner_height = area.height.saturating_sub(2);
    let visible = (inner_height / CARD_HEIGHT).max(1) as usize;
    let total = results.articles.len();
    let start = app.scroll_offset.min(total.saturating_sub(1));
    let end = (start + visible).min(total);

    let heading = format!(
        " Search Results for \"{}\" ({}-{} of {}) ",
        truncate_to_width(&results.topic, area.width.saturating_sub(30) as usize),
        start + 1,
        end,
        total
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(heading, app.style("results_heading")));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible])
        .split(inner);

    for (article, slot) in results.articles[start..end].iter().zip(slots.iter()) {
        render_card(f, app, &results.topic, article, *slot);
    }

    app.results_visible = visible;
}

/// Render one article card: image block, title, source line, description.
fn render_card(f: &mut Frame, app: &App, topic: &str, article: &Article, area: Rect) {
    if area.height < 3 || area.width < IMAGE_WIDTH + 10 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(IMAGE_WIDTH), Constraint::Min(0)])
        .split(inner);

    // The placeholder locator is decorative; the terminal shows its color and label
    let (r, g, b) = PlaceholderImage::rgb_for(article.id);
    let label = format!("{} {}", topic, article.id);
    let image_text = vec![
        Line::from(""),
        Line::from(truncate_to_width(&label, IMAGE_WIDTH as usize - 2).into_owned()),
    ];
    let image = Paragraph::new(image_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(Color::Rgb(r, g, b))
                .patch(app.style("card_image_text")),
        );
    f.render_widget(image, columns[0]);

    let text_width = columns[1].width.saturating_sub(1) as usize;
    let text = vec![
        Line::from(Span::styled(
            truncate_to_width(&article.title, text_width).into_owned(),
            app.style("card_title"),
        )),
        Line::from(Span::styled(
            format!("{} - {}", article.source, article.date),
            app.style("card_meta"),
        )),
        Line::from(Span::styled(
            article.description.clone(),
            app.style("card_body"),
        )),
    ];
    let body = Paragraph::new(text).wrap(Wrap { trim: true });
    let body_area = Rect {
        x: columns[1].x + 1,
        width: columns[1].width.saturating_sub(1),
        ..columns[1]
    };
    f.render_widget(body, body_area);
}
