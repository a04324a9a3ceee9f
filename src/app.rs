use crate::config::Config;
use crate::keybindings::{Context as KbContext, KeybindingRegistry};
use crate::news::{ArticleCount, ArticleGenerator};
use crate::search::SearchView;
use crate::theme::{StyleMap, ThemeVariant};
use ratatui::style::Style;
use std::borrow::Cow;
use tokio::time::Instant;

/// How long a status message stays in the status bar.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// Focus
// ============================================================================

/// Which element of the search view receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Topic,
    Count,
    Submit,
    Results,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Topic, Focus::Count, Focus::Submit, Focus::Results];

    pub fn context(self) -> KbContext {
        match self {
            Focus::Topic => KbContext::Topic,
            Focus::Count => KbContext::Count,
            Focus::Submit => KbContext::Submit,
            Focus::Results => KbContext::Results,
        }
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,
    pub keybindings: KeybindingRegistry,

    pub search: SearchView,
    generator: ArticleGenerator,

    pub focus: Focus,
    /// Index of the first article card shown in the results panel
    pub scroll_offset: usize,
    /// Cards that fit in the results panel at the last render (page size)
    pub results_visible: usize,

    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub show_help: bool,
    pub help_scroll_offset: usize,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(generator: ArticleGenerator, count: ArticleCount) -> Self {
        Self {
            theme_variant: ThemeVariant::Dark,
            theme: StyleMap::from_palette(&ThemeVariant::Dark.palette()),
            keybindings: KeybindingRegistry::new(),
            search: SearchView::new(count),
            generator,
            focus: Focus::Topic,
            scroll_offset: 0,
            results_visible: 1,
            status_message: None,
            show_help: false,
            help_scroll_offset: 0,
            needs_redraw: true,
        }
    }

    /// Apply theme and keybinding settings from config.
    ///
    /// Returns warnings for settings that could not be applied.
    pub fn apply_config(&mut self, config: &Config) -> Vec<String> {
        let mut warnings = Vec::new();

        match ThemeVariant::from_str_name(&config.theme) {
            Some(variant) => self.set_theme(variant),
            None => {
                tracing::warn!(theme = %config.theme, "Unknown theme, using dark");
                warnings.push(format!("Unknown theme '{}', using dark", config.theme));
            }
        }

        warnings.extend(self.keybindings.apply_overrides(&config.keybindings));
        warnings
    }

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
    }

    /// Switch to the next theme variant and return its display name.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        tracing::debug!(theme = next.name(), "Cycled theme");
        next.name()
    }

    /// Keybinding context for the focused element.
    pub fn context(&self) -> KbContext {
        self.focus.context()
    }

    /// Move focus forward, skipping the results panel while it is empty.
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    /// Move focus backward, skipping the results panel while it is empty.
    pub fn focus_prev(&mut self) {
        self.step_focus(Focus::ORDER.len() - 1);
    }

    fn step_focus(&mut self, step: usize) {
        let len = Focus::ORDER.len();
        let mut pos = self.focus.position();
        loop {
            pos = (pos + step) % len;
            let candidate = Focus::ORDER[pos];
            if candidate != Focus::Results || !self.search.articles().is_empty() {
                self.focus = candidate;
                return;
            }
        }
    }

    /// Submit the search form.
    ///
    /// On success the results panel scrolls back to the first card. On a
    /// blank topic focus returns to the topic field so the error sits next
    /// to the cursor.
    pub fn submit(&mut self) {
        match self.search.submit(&mut self.generator) {
            Ok(results) => {
                let count = results.articles.len();
                self.scroll_offset = 0;
                self.set_status(format!("Generated {} articles", count));
            }
            Err(_) => {
                self.focus = Focus::Topic;
            }
        }
    }

    /// Type one character into the topic field.
    pub fn type_char(&mut self, c: char) {
        if !self.search.push_char(c) {
            self.set_status(format!(
                "Topic too long (max {} chars)",
                crate::search::MAX_TOPIC_LENGTH
            ));
        }
    }

    pub fn scroll_up(&mut self, cards: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(cards);
    }

    pub fn scroll_down(&mut self, cards: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(cards);
        self.clamp_scroll();
    }

    /// Keep at least one card on screen.
    pub fn clamp_scroll(&mut self) {
        let max = self.search.articles().len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(max);
    }

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired.
    /// Returns true if a message was actually cleared
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}
