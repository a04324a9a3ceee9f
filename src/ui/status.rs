use crate::app::{App, Focus};
use crate::keybindings::Action;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// Hints shown per focus, as (action, label) pairs.
fn hints_for(focus: Focus) -> &'static [(Action, &'static str)] {
    match focus {
        Focus::Topic => &[
            (Action::Submit, "search"),
            (Action::NextField, "next field"),
            (Action::ClearTopic, "clear"),
            (Action::ShowHelp, "help"),
            (Action::Quit, "quit"),
        ],
        Focus::Count => &[
            (Action::CountPrev, "fewer"),
            (Action::CountNext, "more"),
            (Action::Submit, "search"),
            (Action::NextField, "next field"),
            (Action::ShowHelp, "help"),
            (Action::Quit, "quit"),
        ],
        Focus::Submit => &[
            (Action::Submit, "search"),
            (Action::NextField, "next field"),
            (Action::FocusTopic, "topic"),
            (Action::ShowHelp, "help"),
            (Action::Quit, "quit"),
        ],
        Focus::Results => &[
            (Action::ScrollDown, "down"),
            (Action::ScrollUp, "up"),
            (Action::PageDown, "page"),
            (Action::FocusTopic, "topic"),
            (Action::CycleTheme, "theme"),
            (Action::ShowHelp, "help"),
            (Action::Quit, "quit"),
        ],
    }
}

/// Key hints for the focused element, using the live bindings.
fn key_hints(app: &App) -> String {
    let context = app.context();
    let hints: Vec<String> = hints_for(app.focus)
        .iter()
        .filter_map(|(action, label)| {
            app.keybindings
                .key_for(*action, context)
                .map(|key| format!("[{}]{}", key, label))
        })
        .collect();

    if app.focus == Focus::Topic {
        format!("Type a topic | {}", hints.join(" "))
    } else {
        hints.join(" ")
    }
}

/// Render the status bar
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let hints;
    let text: &str = match &app.status_message {
        Some((msg, _)) => &**msg,
        None => {
            hints = key_hints(app);
            &hints
        }
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
