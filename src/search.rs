//! Search form state and its submit transition.
//!
//! `SearchView` holds what the user has typed, the selected article count,
//! the last validation error and the last generated batch. It knows nothing
//! about terminals; the UI layer reads it to draw and calls `submit` on the
//! user's behalf.

use crate::news::{Article, ArticleCount, ArticleGenerator};
use rand::Rng;
use thiserror::Error;

/// Maximum topic length accepted by the form.
pub const MAX_TOPIC_LENGTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter a topic")]
    BlankTopic,
}

/// Coarse state of the view, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing searched yet, no error.
    Idle,
    /// The last submission was rejected.
    Error,
    /// A batch is on display and the last submission succeeded.
    Results,
}

/// A generated batch together with the topic that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub topic: String,
    pub articles: Vec<Article>,
}

#[derive(Debug, Default)]
pub struct SearchView {
    topic: String,
    count: ArticleCount,
    error: Option<SearchError>,
    results: Option<ResultSet>,
}

impl SearchView {
    pub fn new(count: ArticleCount) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn count(&self) -> ArticleCount {
        self.count
    }

    pub fn error(&self) -> Option<SearchError> {
        self.error
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn articles(&self) -> &[Article] {
        self.results
            .as_ref()
            .map(|r| r.articles.as_slice())
            .unwrap_or(&[])
    }

    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if self.results.is_some() {
            Phase::Results
        } else {
            Phase::Idle
        }
    }

    /// Replace the topic text. Input beyond `MAX_TOPIC_LENGTH` chars is cut.
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        let mut topic = topic.into();
        if let Some((idx, _)) = topic.char_indices().nth(MAX_TOPIC_LENGTH) {
            topic.truncate(idx);
        }
        self.topic = topic;
    }

    /// Append one character. Returns false if the topic is already full.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.topic.chars().count() >= MAX_TOPIC_LENGTH {
            return false;
        }
        self.topic.push(c);
        true
    }

    /// Remove the last character, if any.
    pub fn pop_char(&mut self) {
        self.topic.pop();
    }

    pub fn clear_topic(&mut self) {
        self.topic.clear();
    }

    pub fn set_count(&mut self, count: ArticleCount) {
        self.count = count;
    }

    pub fn next_count(&mut self) {
        self.count = self.count.next();
    }

    pub fn prev_count(&mut self) {
        self.count = self.count.prev();
    }

    /// Validate the form and, if the topic is not blank, replace the result
    /// set with a fresh batch.
    ///
    /// A blank topic sets the error and leaves any existing results alone.
    pub fn submit<R: Rng>(
        &mut self,
        generator: &mut ArticleGenerator<R>,
    ) -> Result<&ResultSet, SearchError> {
        if self.topic.trim().is_empty() {
            self.error = Some(SearchError::BlankTopic);
            tracing::debug!("Rejected search with blank topic");
            return Err(SearchError::BlankTopic);
        }

        self.error = None;
        let articles = generator.generate(&self.topic, self.count);
        tracing::info!(topic = %self.topic, count = articles.len(), "Generated articles");

        Ok(self.results.insert(ResultSet {
            topic: self.topic.clone(),
            articles,
        }))
    }
}
