use super::{Article, ArticleCount, PlaceholderImage};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeDelta, TimeZone};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use thiserror::Error;

/// Default date format: the en-US short date, e.g. `3/9/2024`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// How far back article dates may be sampled.
const DATE_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

// ============================================================================
// Date Format
// ============================================================================

#[derive(Debug, Error)]
#[error("Invalid date format '{0}'")]
pub struct DateFormatError(pub String);

/// A strftime pattern that is known to format without error.
///
/// chrono panics when displaying an invalid pattern, so patterns are
/// checked once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn parse(pattern: &str) -> Result<Self, DateFormatError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(DateFormatError(pattern.to_string()));
        }
        Ok(Self(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Produces batches of synthetic articles.
///
/// Generation never fails. The only state consumed is the random source,
/// which is used to sample each article's date from the past week.
pub struct ArticleGenerator<R = StdRng> {
    rng: R,
    placeholder: PlaceholderImage,
    date_format: DateFormat,
}

impl ArticleGenerator<StdRng> {
    /// Generator seeded from the OS, with default placeholder and date settings.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Generator with reproducible date sampling.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ArticleGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ArticleGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            placeholder: PlaceholderImage::default(),
            date_format: DateFormat::default(),
        }
    }

    pub fn placeholder(mut self, placeholder: PlaceholderImage) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Generate `count` articles about `topic`, dated relative to the local clock.
    pub fn generate(&mut self, topic: &str, count: ArticleCount) -> Vec<Article> {
        self.generate_at(topic, count, &Local::now())
    }

    /// Generate `count` articles about `topic`, dated within the week before `now`.
    pub fn generate_at<Tz>(
        &mut self,
        topic: &str,
        count: ArticleCount,
        now: &DateTime<Tz>,
    ) -> Vec<Article>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        (1..=count.get())
            .map(|i| Article {
                id: i,
                title: format!("{} News Article {}", topic, i),
                description: format!(
                    "This is a simulated news article about {}. It contains important information and updates related to the topic.",
                    topic
                ),
                source: format!("News Source {}", i),
                date: self.sample_date(now),
                image: self.placeholder.locator(topic, i),
            })
            .collect()
    }

    fn sample_date<Tz>(&mut self, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let back = TimeDelta::milliseconds(self.rng.random_range(0..=DATE_WINDOW_MS));
        let when = now.clone() - back;
        when.format(self.date_format.as_str()).to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_weather_example() {
        let mut generator = ArticleGenerator::seeded(1);
        let articles = generator.generate_at("Weather", ArticleCount::default(), &fixed_now());

        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Weather News Article 1",
                "Weather News Article 2",
                "Weather News Article 3",
                "Weather News Article 4",
            ]
        );
        let sources: Vec<&str> = articles.iter().map(|a| a.source.as_str()).collect();
        assert_eq!(
            sources,
            vec![
                "News Source 1",
                "News Source 2",
                "News Source 3",
                "News Source 4"
            ]
        );
    }

    #[test]
    fn test_description_template() {
        let mut generator = ArticleGenerator::seeded(1);
        let articles = generator.generate_at("Space", ArticleCount::default(), &fixed_now());
        assert_eq!(
            articles[0].description,
            "This is a simulated news article about Space. It contains important information and updates related to the topic."
        );
    }

    #[test]
    fn test_images_cycle_palette() {
        let mut generator = ArticleGenerator::seeded(1);
        let count = ArticleCount::try_from(12).unwrap();
        let articles = generator.generate_at("Tech", count, &fixed_now());
        assert!(articles[0].image.ends_with("bg=4F46E5"));
        assert!(articles[8].image.ends_with("bg=4F46E5"));
        assert!(articles[11].image.contains("text=Tech+12&"));
    }

    #[test]
    fn test_dates_within_past_week() {
        let mut generator = ArticleGenerator::seeded(99);
        let count = ArticleCount::try_from(12).unwrap();
        let now = fixed_now();
        let earliest = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        let latest = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        for _ in 0..20 {
            for article in generator.generate_at("Markets", count, &now) {
                let date = NaiveDate::parse_from_str(&article.date, "%m/%d/%Y").unwrap();
                assert!(date >= earliest && date <= latest, "{}", article.date);
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let count = ArticleCount::try_from(8).unwrap();
        let a = ArticleGenerator::seeded(42).generate_at("Rust", count, &fixed_now());
        let b = ArticleGenerator::seeded(42).generate_at("Rust", count, &fixed_now());
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_date_format() {
        let format = DateFormat::parse("%Y-%m-%d").unwrap();
        let mut generator = ArticleGenerator::seeded(3).date_format(format);
        let articles = generator.generate_at("Sports", ArticleCount::default(), &fixed_now());
        for article in articles {
            assert!(NaiveDate::parse_from_str(&article.date, "%Y-%m-%d").is_ok());
        }
    }

    #[test]
    fn test_custom_placeholder_applies() {
        let placeholder = PlaceholderImage {
            base: "/img".to_string(),
            width: 10,
            height: 20,
            font_size: 8,
        };
        let mut generator = ArticleGenerator::seeded(3).placeholder(placeholder);
        let articles = generator.generate_at("X", ArticleCount::default(), &fixed_now());
        assert_eq!(articles[1].image, "/img/10/20?text=X+2&fontsize=8&bg=EF4444");
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        assert!(DateFormat::parse("%Q").is_err());
        assert!(DateFormat::parse("%-m/%-d/%Y").is_ok());
    }

    proptest! {
        #[test]
        fn prop_batch_size_and_ids(
            count in prop::sample::select(ArticleCount::ALL.to_vec()),
            topic in "[A-Za-z0-9 ]{1,24}",
            seed in any::<u64>(),
        ) {
            let articles = ArticleGenerator::seeded(seed).generate_at(&topic, count, &fixed_now());
            prop_assert_eq!(articles.len() as u32, count.get());

            let ids: HashSet<u32> = articles.iter().map(|a| a.id).collect();
            prop_assert_eq!(ids.len() as u32, count.get());
            prop_assert!(ids.iter().all(|id| (1..=count.get()).contains(id)));
        }

        #[test]
        fn prop_title_contains_topic_and_index(
            count in prop::sample::select(ArticleCount::ALL.to_vec()),
            topic in "\\PC{1,16}",
        ) {
            let articles = ArticleGenerator::seeded(0).generate_at(&topic, count, &fixed_now());
            for (i, article) in articles.iter().enumerate() {
                prop_assert!(article.title.contains(&topic));
                prop_assert!(article.title.ends_with(&(i + 1).to_string()));
                prop_assert_eq!(article.id as usize, i + 1);
            }
        }
    }
}
