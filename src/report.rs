//! Plain-text and JSON output of a result set, for `--print` mode.

use crate::search::ResultSet;
use std::io::{self, Write};

/// Write the batch as a heading followed by one block per article.
pub fn write_text<W: Write>(out: &mut W, results: &ResultSet) -> io::Result<()> {
    writeln!(out, "Search Results for \"{}\"", results.topic)?;
    for article in &results.articles {
        writeln!(out)?;
        writeln!(out, "{}", article.title)?;
        writeln!(out, "{} - {}", article.source, article.date)?;
        writeln!(out, "{}", article.description)?;
        writeln!(out, "{}", article.image)?;
    }
    Ok(())
}

/// Write the articles as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, results: &ResultSet) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &results.articles)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::{Article, ArticleCount, ArticleGenerator};
    use crate::search::SearchView;

    fn weather_results() -> ResultSet {
        let mut view = SearchView::new(ArticleCount::default());
        view.set_topic("Weather");
        let mut generator = ArticleGenerator::seeded(8);
        view.submit(&mut generator).unwrap().clone()
    }

    #[test]
    fn test_text_output() {
        let results = weather_results();
        let mut buf = Vec::new();
        write_text(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Search Results for \"Weather\"\n"));
        assert_eq!(text.matches("News Article").count(), 4);
        assert!(text.contains("\nWeather News Article 4\nNews Source 4 - "));
    }

    #[test]
    fn test_json_output_parses_back() {
        let results = weather_results();
        let mut buf = Vec::new();
        write_json(&mut buf, &results).unwrap();

        let parsed: Vec<Article> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, results.articles);
    }
}
