use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Article
// ============================================================================

/// One synthetic news item.
///
/// Articles are created in batches by `ArticleGenerator` and never mutated.
/// `id` is the 1-based position within its batch and is only unique there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub source: String,
    /// Publication date, already formatted for display.
    pub date: String,
    /// Placeholder-image locator (decorative).
    pub image: String,
}

// ============================================================================
// Article Count
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArticleCountError {
    #[error("Article count must be one of 4, 6, 8, 10, 12 (got {0})")]
    NotAllowed(u32),

    #[error("Invalid article count '{0}'")]
    Invalid(String),
}

/// Number of articles a search produces.
///
/// Only the selector values 4, 6, 8, 10 and 12 can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ArticleCount(u32);

impl ArticleCount {
    /// All selectable counts, in selector order.
    pub const ALL: [ArticleCount; 5] = [
        ArticleCount(4),
        ArticleCount(6),
        ArticleCount(8),
        ArticleCount(10),
        ArticleCount(12),
    ];

    pub fn get(self) -> u32 {
        self.0
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next selector value, wrapping from 12 back to 4.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous selector value, wrapping from 4 to 12.
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl Default for ArticleCount {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl TryFrom<u32> for ArticleCount {
    type Error = ArticleCountError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.0 == value)
            .ok_or(ArticleCountError::NotAllowed(value))
    }
}

impl From<ArticleCount> for u32 {
    fn from(count: ArticleCount) -> Self {
        count.0
    }
}

impl FromStr for ArticleCount {
    type Err = ArticleCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s
            .trim()
            .parse()
            .map_err(|_| ArticleCountError::Invalid(s.to_string()))?;
        Self::try_from(n)
    }
}

impl fmt::Display for ArticleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_counts_construct() {
        for n in [4, 6, 8, 10, 12] {
            assert_eq!(ArticleCount::try_from(n).unwrap().get(), n);
        }
    }

    #[test]
    fn test_disallowed_counts_rejected() {
        for n in [0, 1, 3, 5, 7, 11, 13, 100] {
            assert_eq!(
                ArticleCount::try_from(n),
                Err(ArticleCountError::NotAllowed(n))
            );
        }
    }

    #[test]
    fn test_default_is_four() {
        assert_eq!(ArticleCount::default().get(), 4);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut count = ArticleCount::default();
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(count.get());
            count = count.next();
        }
        assert_eq!(seen, vec![4, 6, 8, 10, 12, 4]);
    }

    #[test]
    fn test_prev_wraps_around() {
        let count = ArticleCount::default().prev();
        assert_eq!(count.get(), 12);
        assert_eq!(count.prev().get(), 10);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("8".parse::<ArticleCount>().unwrap().get(), 8);
        assert_eq!(" 10 ".parse::<ArticleCount>().unwrap().get(), 10);
        assert!(matches!(
            "9".parse::<ArticleCount>(),
            Err(ArticleCountError::NotAllowed(9))
        ));
        assert!(matches!(
            "many".parse::<ArticleCount>(),
            Err(ArticleCountError::Invalid(_))
        ));
    }

    #[test]
    fn test_serde_rejects_disallowed() {
        #[derive(Deserialize)]
        struct Wrapper {
            count: ArticleCount,
        }
        let ok: Wrapper = toml::from_str("count = 6").unwrap();
        assert_eq!(ok.count.get(), 6);
        assert!(toml::from_str::<Wrapper>("count = 7").is_err());
    }

    #[test]
    fn test_article_json_field_names() {
        let article = Article {
            id: 1,
            title: "t".to_string(),
            description: "d".to_string(),
            source: "s".to_string(),
            date: "1/2/2024".to_string(),
            image: "/img".to_string(),
        };
        let json = serde_json::to_value(&article).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["date", "description", "id", "image", "source", "title"]
        );
    }
}
