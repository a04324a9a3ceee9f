//! Synthetic news article generation.
//!
//! Nothing in this module fetches real news. A search produces a batch of
//! mock articles derived from the topic and the requested count:
//!
//! - [`article`] - The `Article` record and the `ArticleCount` selector values
//! - [`generator`] - Batch generation with an injectable random source
//! - [`placeholder`] - Decorative placeholder-image locators and the card palette
//!
//! # Example
//!
//! ```
//! use newsdesk::news::{ArticleCount, ArticleGenerator};
//!
//! let mut generator = ArticleGenerator::seeded(7);
//! let articles = generator.generate("Weather", ArticleCount::default());
//! assert_eq!(articles.len(), 4);
//! assert_eq!(articles[0].title, "Weather News Article 1");
//! ```

mod article;
mod generator;
mod placeholder;

pub use article::{Article, ArticleCount, ArticleCountError};
pub use generator::{ArticleGenerator, DateFormat, DateFormatError, DEFAULT_DATE_FORMAT};
pub use placeholder::{PlaceholderImage, PALETTE};
