//! Integration tests for the search flow: config, form validation, generation.
//!
//! Each test builds its own seeded generator so batches are reproducible.
//! These tests exercise the public library surface end-to-end, the same
//! path the binary takes for `--print`.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use newsdesk::config::Config;
use newsdesk::news::{ArticleCount, ArticleGenerator, PlaceholderImage, PALETTE};
use newsdesk::report;
use newsdesk::search::{Phase, SearchError, SearchView};
use pretty_assertions::assert_eq;

fn fixed_now() -> DateTime<Utc> {
    "2024-03-15T12:00:00Z".parse().unwrap()
}

fn twelve() -> ArticleCount {
    ArticleCount::try_from(12).unwrap()
}

// ============================================================================
// Generation Tests
// ============================================================================

#[test]
fn test_batch_shape_for_every_count() {
    let mut generator = ArticleGenerator::seeded(1);

    for count in ArticleCount::ALL {
        let batch = generator.generate_at("Tech", count, &fixed_now());

        assert_eq!(batch.len() as u32, count.get());
        for (i, article) in batch.iter().enumerate() {
            let n = i as u32 + 1;
            assert_eq!(article.id, n);
            assert_eq!(article.title, format!("Tech News Article {}", n));
            assert_eq!(article.source, format!("News Source {}", n));
            assert!(article.description.contains("about Tech."));
        }
    }
}

#[test]
fn test_dates_fall_in_the_week_before_now() {
    let mut generator = ArticleGenerator::seeded(99);
    let now = fixed_now();
    let earliest = (now - Duration::days(7)).date_naive();
    let latest = now.date_naive();

    for _ in 0..50 {
        for article in generator.generate_at("Sports", twelve(), &now) {
            let date = NaiveDate::parse_from_str(&article.date, "%m/%d/%Y").unwrap();
            assert!(date >= earliest && date <= latest, "{} out of range", article.date);
        }
    }
}

#[test]
fn test_image_locator_colors_cycle_through_palette() {
    let mut generator = ArticleGenerator::seeded(3);
    let batch = generator.generate_at("Space News", twelve(), &fixed_now());

    assert_eq!(
        batch[0].image,
        "/api/placeholder/300/200?text=Space%20News+1&fontsize=24&bg=4F46E5"
    );
    // Article 9 wraps back to the first color
    assert_eq!(PlaceholderImage::color_for(9), PALETTE[0]);
    assert!(batch[8].image.ends_with(&format!("bg={:06X}", PALETTE[0])));
}

#[test]
fn test_same_seed_same_batch() {
    let count = ArticleCount::try_from(8).unwrap();
    let a = ArticleGenerator::seeded(42).generate_at("Markets", count, &fixed_now());
    let b = ArticleGenerator::seeded(42).generate_at("Markets", count, &fixed_now());
    assert_eq!(a, b);
}

// ============================================================================
// Search Form Tests
// ============================================================================

#[test]
fn test_blank_topic_then_valid_topic() {
    let mut generator = ArticleGenerator::seeded(7);
    let mut view = SearchView::new(ArticleCount::default());

    view.set_topic("   ");
    assert_eq!(view.submit(&mut generator).unwrap_err(), SearchError::BlankTopic);
    assert_eq!(view.phase(), Phase::Error);
    assert!(view.articles().is_empty());

    view.set_topic("Climate");
    view.next_count();
    let results = view.submit(&mut generator).unwrap();
    assert_eq!(results.topic, "Climate");
    assert_eq!(results.articles.len(), 6);
    assert_eq!(view.phase(), Phase::Results);
    assert_eq!(view.error(), None);
}

#[test]
fn test_failed_resubmit_keeps_previous_results() {
    let mut generator = ArticleGenerator::seeded(7);
    let mut view = SearchView::new(ArticleCount::default());

    view.set_topic("Elections");
    view.submit(&mut generator).unwrap();
    let before = view.articles().to_vec();

    view.clear_topic();
    assert!(view.submit(&mut generator).is_err());
    assert_eq!(view.articles(), before.as_slice());
    assert_eq!(view.phase(), Phase::Error);
}

#[test]
fn test_resubmit_replaces_results() {
    let mut generator = ArticleGenerator::seeded(11);
    let mut view = SearchView::new(twelve());

    view.set_topic("Art");
    view.submit(&mut generator).unwrap();
    view.set_topic("Music");
    view.set_count(ArticleCount::try_from(4).unwrap());
    let results = view.submit(&mut generator).unwrap();

    assert_eq!(results.articles.len(), 4);
    assert!(results.articles.iter().all(|a| a.title.starts_with("Music ")));
}

// ============================================================================
// Config + Output Tests
// ============================================================================

#[test]
fn test_config_drives_generator() {
    let config = Config::parse(
        r#"
default_article_count = 10
date_format = "%Y-%m-%d"

[placeholder]
base = "https://img.example.com"
width = 640
height = 360
"#,
    )
    .unwrap();

    let mut generator = ArticleGenerator::seeded(5)
        .placeholder(config.placeholder.clone())
        .date_format(config.date_format().unwrap());
    let mut view = SearchView::new(config.default_article_count);
    view.set_topic("AI");
    let results = view.submit(&mut generator).unwrap();

    assert_eq!(results.articles.len(), 10);
    let first = &results.articles[0];
    assert!(first
        .image
        .starts_with("https://img.example.com/640/360?text=AI+1&fontsize=24"));
    assert!(NaiveDate::parse_from_str(&first.date, "%Y-%m-%d").is_ok());
}

#[test]
fn test_config_rejects_unsupported_count() {
    assert!(Config::parse("default_article_count = 5").is_err());
}

#[test]
fn test_text_report_lists_every_article() {
    let mut generator = ArticleGenerator::seeded(2);
    let mut view = SearchView::new(ArticleCount::try_from(6).unwrap());
    view.set_topic("Health");
    let results = view.submit(&mut generator).unwrap();

    let mut buf = Vec::new();
    report::write_text(&mut buf, results).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.starts_with("Search Results for \"Health\""));
    for i in 1..=6 {
        assert!(text.contains(&format!("Health News Article {}\n", i)));
    }
}
