//! Input handling for the TUI.
//!
//! This module processes keyboard input and dispatches to the appropriate
//! handler based on the focused element.

use crate::app::{App, Focus};
use crate::keybindings::Action as KbAction;
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Main input dispatch function.
///
/// Bound keys run their action; unbound printable keys are typed into the
/// topic field when it has focus.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    // Help overlay captures all keys when visible
    if app.show_help {
        return handle_help_input(app, code, modifiers);
    }

    match app.keybindings.action_for_key(code, modifiers, app.context()) {
        Some(action) => dispatch(app, action),
        None => {
            if app.focus == Focus::Topic {
                edit_topic(app, code, modifiers);
            }
            Action::Continue
        }
    }
}

/// Run a keybinding action.
fn dispatch(app: &mut App, action: KbAction) -> Action {
    match action {
        KbAction::Quit => return Action::Quit,
        KbAction::NextField => app.focus_next(),
        KbAction::PrevField => app.focus_prev(),
        KbAction::FocusTopic => app.focus = Focus::Topic,
        KbAction::Submit => app.submit(),
        KbAction::ClearTopic => app.search.clear_topic(),
        KbAction::CountNext => app.search.next_count(),
        KbAction::CountPrev => app.search.prev_count(),
        KbAction::ScrollDown => app.scroll_down(1),
        KbAction::ScrollUp => app.scroll_up(1),
        KbAction::PageDown => app.scroll_down(app.results_visible.max(1)),
        KbAction::PageUp => app.scroll_up(app.results_visible.max(1)),
        KbAction::CycleTheme => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        KbAction::ShowHelp => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
    }
    Action::Continue
}

/// Apply a text-editing key to the topic field.
fn edit_topic(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return;
    }
    match code {
        KeyCode::Char(c) => app.type_char(c),
        KeyCode::Backspace => app.search.pop_char(),
        _ => {}
    }
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/?/F1 dismiss, Ctrl+c quits.
fn handle_help_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Action::Quit;
    }
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}
