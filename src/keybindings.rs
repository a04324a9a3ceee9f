//! Keybinding registry: maps actions to key events with config overrides.
//!
//! Bindings are data-driven so they can be listed on the help screen and
//! customized via config.toml.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NextField,
    PrevField,
    FocusTopic,
    Submit,
    ClearTopic,
    CountNext,
    CountPrev,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    CycleTheme,
    ShowHelp,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::NextField => "Focus next field",
            Self::PrevField => "Focus previous field",
            Self::FocusTopic => "Jump to topic field",
            Self::Submit => "Search articles",
            Self::ClearTopic => "Clear topic",
            Self::CountNext => "More articles",
            Self::CountPrev => "Fewer articles",
            Self::ScrollDown => "Scroll down one article",
            Self::ScrollUp => "Scroll up one article",
            Self::PageDown => "Page down",
            Self::PageUp => "Page up",
            Self::CycleTheme => "Cycle theme",
            Self::ShowHelp => "Show help",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context. The focused element determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Topic,
    Count,
    Submit,
    Results,
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Terminals report uppercase chars and BackTab with SHIFT set; the
    /// registry stores them without it.
    fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let modifiers = match code {
            KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        Self::new(code, modifiers)
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "BackTab", "Up", "Down", "Backspace"
/// - Modifier combos: "Ctrl+d", "Ctrl+u"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let rest = rest.trim();
        if rest.chars().count() == 1 {
            let c = rest.chars().next()?;
            return Some(KeySpec::ctrl(c));
        }
        return None;
    }

    // Named keys (case-insensitive)
    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "backtab" | "shift+tab" => return Some(KeySpec::plain(KeyCode::BackTab)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::plain(KeyCode::Char(' '))),
        _ => {}
    }

    if let Some(n) = s.strip_prefix(['F', 'f']) {
        if let Ok(n) = n.parse::<u8>() {
            if (1..=12).contains(&n) {
                return Some(KeySpec::plain(KeyCode::F(n)));
            }
            return None;
        }
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeySpec::plain(KeyCode::Char(c))),
        _ => None,
    }
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// The same key can map to different actions in different contexts. Lookup
/// tries the focused context first and falls back to Global.
pub struct KeybindingRegistry {
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings in registration order, for the help screen
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    fn register_defaults(&mut self) {
        // === Global ===
        self.bind(Context::Global, KeySpec::ctrl('c'), Action::Quit);
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Tab),
            Action::NextField,
        );
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::BackTab),
            Action::PrevField,
        );
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Esc),
            Action::FocusTopic,
        );
        self.bind(Context::Global, KeySpec::ctrl('t'), Action::CycleTheme);
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::F(1)),
            Action::ShowHelp,
        );

        // === Topic field ===
        // Plain characters are typed into the field, so only Enter and
        // control combos are bound here.
        self.bind(
            Context::Topic,
            KeySpec::plain(KeyCode::Enter),
            Action::Submit,
        );
        self.bind(Context::Topic, KeySpec::ctrl('u'), Action::ClearTopic);

        // === Count selector ===
        for (key, action) in [
            (KeyCode::Left, Action::CountPrev),
            (KeyCode::Char('h'), Action::CountPrev),
            (KeyCode::Right, Action::CountNext),
            (KeyCode::Char('l'), Action::CountNext),
            (KeyCode::Enter, Action::Submit),
        ] {
            self.bind(Context::Count, KeySpec::plain(key), action);
        }

        // === Submit button ===
        self.bind(
            Context::Submit,
            KeySpec::plain(KeyCode::Enter),
            Action::Submit,
        );
        self.bind(
            Context::Submit,
            KeySpec::plain(KeyCode::Char(' ')),
            Action::Submit,
        );

        // === Results ===
        for (key, action) in [
            (KeyCode::Char('j'), Action::ScrollDown),
            (KeyCode::Down, Action::ScrollDown),
            (KeyCode::Char('k'), Action::ScrollUp),
            (KeyCode::Up, Action::ScrollUp),
        ] {
            self.bind(Context::Results, KeySpec::plain(key), action);
        }
        self.bind(Context::Results, KeySpec::ctrl('d'), Action::PageDown);
        self.bind(Context::Results, KeySpec::ctrl('u'), Action::PageUp);

        // Single-letter shortcuts outside the text field
        for ctx in [Context::Count, Context::Submit, Context::Results] {
            self.bind(ctx, KeySpec::plain(KeyCode::Char('q')), Action::Quit);
            self.bind(ctx, KeySpec::plain(KeyCode::Char('?')), Action::ShowHelp);
            self.bind(ctx, KeySpec::plain(KeyCode::Char('/')), Action::FocusTopic);
            self.bind(ctx, KeySpec::plain(KeyCode::Char('T')), Action::CycleTheme);
        }
    }

    /// Apply user overrides from config keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "submit").
    /// Values are key strings (e.g., "q", "Ctrl+d", "F5").
    ///
    /// Returns a list of warnings for unrecognized action names or unparseable keys.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let Some(action) = parse_action_name(action_name) else {
                warnings.push(format!("Unknown action '{}', ignoring", action_name));
                continue;
            };

            let Some(key) = parse_key_string(key_str) else {
                warnings.push(format!(
                    "Cannot parse key '{}' for action '{}', ignoring",
                    key_str, action_name
                ));
                continue;
            };

            // Rebind in every context the action was bound in
            let mut contexts: Vec<Context> = Vec::new();
            for (ctx, _, a) in &self.bindings {
                if *a == action && !contexts.contains(ctx) {
                    contexts.push(*ctx);
                }
            }

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts {
                self.bind(ctx, key, action);
            }

            tracing::info!(
                action = %action_name,
                key = %key_str,
                "Applied keybinding override"
            );
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    ///
    /// Tries the specific context first, then falls back to Global.
    /// Printable characters in the topic field are always text, whatever
    /// the overrides say.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        if context == Context::Topic
            && matches!(code, KeyCode::Char(_))
            && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        let key = KeySpec::normalized(code, modifiers);

        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }

        if context != Context::Global {
            if let Some(&action) = self.lookup.get(&(Context::Global, key)) {
                return Some(action);
            }
        }

        None
    }

    /// Display string of the first key that triggers `action` in `context`,
    /// falling back to Global bindings.
    pub fn key_for(&self, action: Action, context: Context) -> Option<String> {
        [context, Context::Global].iter().find_map(|ctx| {
            self.bindings
                .iter()
                .find(|(c, key, a)| {
                    c == ctx
                        && *a == action
                        && self.action_for_key(key.code, key.modifiers, context) == Some(action)
                })
                .map(|(_, key, _)| format_key(key))
        })
    }

    /// Get all bindings for the help screen.
    ///
    /// Returns (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "next_field" | "nextfield" => Some(Action::NextField),
        "prev_field" | "prevfield" => Some(Action::PrevField),
        "focus_topic" | "focustopic" | "search" => Some(Action::FocusTopic),
        "submit" | "search_articles" => Some(Action::Submit),
        "clear_topic" | "cleartopic" | "clear" => Some(Action::ClearTopic),
        "count_next" | "countnext" | "more" => Some(Action::CountNext),
        "count_prev" | "countprev" | "fewer" => Some(Action::CountPrev),
        "scroll_down" | "scrolldown" => Some(Action::ScrollDown),
        "scroll_up" | "scrollup" => Some(Action::ScrollUp),
        "page_down" | "pagedown" => Some(Action::PageDown),
        "page_up" | "pageup" => Some(Action::PageUp),
        "cycle_theme" | "cycletheme" | "theme" => Some(Action::CycleTheme),
        "show_help" | "showhelp" | "help" => Some(Action::ShowHelp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
