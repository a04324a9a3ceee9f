use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use newsdesk::app::App;
use newsdesk::config::Config;
use newsdesk::news::{ArticleCount, ArticleGenerator};
use newsdesk::search::SearchView;
use newsdesk::theme::ThemeVariant;
use newsdesk::util::strip_control_chars;
use newsdesk::{report, ui};

/// Get the config directory path (~/.config/newsdesk/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("newsdesk"))
}

#[derive(Parser, Debug)]
#[command(
    name = "newsdesk",
    about = "Terminal news search form over generated sample articles"
)]
struct Args {
    /// Config file to use instead of ~/.config/newsdesk/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Color theme (dark or light), overrides the config file
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Pre-fill the topic field
    #[arg(long, short)]
    topic: Option<String>,

    /// Number of articles to generate (4, 6, 8, 10 or 12)
    #[arg(long, short = 'n', value_name = "N")]
    count: Option<ArticleCount>,

    /// Generate one batch for --topic, print it and exit
    #[arg(long)]
    print: bool,

    /// With --print, emit JSON instead of text
    #[arg(long, requires = "print")]
    json: bool,

    /// Seed the generator for reproducible batches
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn build_generator(config: &Config, seed: Option<u64>) -> Result<ArticleGenerator> {
    let date_format = config
        .date_format()
        .context("Invalid date_format in config")?;
    let generator = match seed {
        Some(seed) => ArticleGenerator::seeded(seed),
        None => ArticleGenerator::new(),
    };
    Ok(generator
        .placeholder(config.placeholder.clone())
        .date_format(date_format))
}

/// Run one search outside the TUI and write the batch to stdout.
fn print_batch(
    mut generator: ArticleGenerator,
    topic: &str,
    count: ArticleCount,
    json: bool,
) -> Result<()> {
    let mut view = SearchView::new(count);
    view.set_topic(topic);
    let results = view.submit(&mut generator)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        report::write_json(&mut out, results)?;
    } else {
        report::write_text(&mut out, results)?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with --print output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path).with_context(|| {
        format!("Failed to load config from '{}'", config_path.display())
    })?;

    let generator = build_generator(&config, args.seed)?;
    let count = args.count.unwrap_or(config.default_article_count);
    let topic = args.topic.as_deref().map(strip_control_chars);

    if args.print {
        return print_batch(generator, topic.as_deref().unwrap_or_default(), count, args.json);
    }

    let mut app = App::new(generator, count);
    let warnings = app.apply_config(&config);
    for warning in &warnings {
        tracing::warn!(%warning, "Config setting ignored");
    }
    if let Some(last) = warnings.into_iter().last() {
        app.set_status(last);
    }

    if let Some(name) = &args.theme {
        let variant = ThemeVariant::from_str_name(name)
            .with_context(|| format!("Unknown theme '{}': expected dark or light", name))?;
        app.set_theme(variant);
    }

    if let Some(topic) = topic {
        app.search.set_topic(topic);
    }

    ui::run(&mut app).await?;

    Ok(())
}
