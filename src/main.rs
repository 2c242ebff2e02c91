//! bark command-line entry point.
//!
//! Parses the command line, initializes the bookmark store, and prints
//! results as text or JSON.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bark::app::App;
use bark::managers::bookmark_manager::BookmarkManagerTrait;
use bark::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use bark::types::bookmark::Bookmark;
use bark::types::settings::BarkSettings;

#[derive(Parser)]
#[command(name = "bark")]
#[command(version, about = "Personal bookmark manager", long_about = None)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, env = "BARK_CONFIG")]
    config: Option<PathBuf>,

    /// Database file, overriding the configured data directory
    #[arg(long, global = true, env = "BARK_DB")]
    db: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the page title and save a bookmark
    Add {
        /// URL to bookmark
        url: String,
    },
    /// List active bookmarks
    List,
    /// List archived bookmarks, oldest archive first
    Archived,
    /// Show one bookmark
    Show { id: String },
    /// Move a bookmark to the archive
    Archive { id: String },
    /// Permanently delete a bookmark
    Delete { id: String },
    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Print the settings file location
    Path,
    /// Set a value by dotted key, e.g. `fetch.timeout_secs 30`
    Set {
        key: String,
        /// JSON value; anything that is not valid JSON is stored as a string
        value: String,
    },
    /// Restore defaults
    Reset,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--json` output stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bark=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Cli {
        config,
        db,
        json,
        command,
    } = Cli::parse();

    match command {
        Commands::Add { url } => {
            let app = open_app(config, db)?;
            let title = app
                .bookmarks
                .add(&url)
                .with_context(|| format!("failed to add {}", url))?;
            if json {
                print_json(&json!({ "url": url, "title": title }))?;
            } else {
                println!("Added: {}", title);
            }
        }
        Commands::List => {
            let app = open_app(config, db)?;
            let bookmarks = app.bookmarks.list_active()?;
            if json {
                print_json(&bookmarks)?;
            } else {
                print_table(&bookmarks, false);
                print_status(&app)?;
            }
        }
        Commands::Archived => {
            let app = open_app(config, db)?;
            let bookmarks = app.bookmarks.list_archived()?;
            if json {
                print_json(&bookmarks)?;
            } else {
                print_table(&bookmarks, true);
            }
        }
        Commands::Show { id } => {
            let app = open_app(config, db)?;
            let bookmark = app.bookmarks.get_by_id(&id)?;
            if json {
                print_json(&bookmark)?;
            } else {
                print_details(&bookmark);
            }
        }
        Commands::Archive { id } => {
            let app = open_app(config, db)?;
            app.bookmarks.archive(&id)?;
            if json {
                print_json(&json!({ "archived": id }))?;
            } else {
                println!("Archived {}", id);
            }
        }
        Commands::Delete { id } => {
            let app = open_app(config, db)?;
            app.bookmarks.delete(&id)?;
            if json {
                print_json(&json!({ "deleted": id }))?;
            } else {
                println!("Deleted {}", id);
            }
        }
        Commands::Config { action } => run_config(config, action, json)?,
    }

    Ok(())
}

fn open_app(config: Option<PathBuf>, db: Option<PathBuf>) -> anyhow::Result<App> {
    let app = App::new(config, db).context("failed to load settings")?;
    app.start().context("failed to initialize bookmark store")?;
    Ok(app)
}

fn run_config(config: Option<PathBuf>, action: ConfigAction, json: bool) -> anyhow::Result<()> {
    let mut engine = SettingsEngine::new(config);
    engine.load().context("failed to load settings")?;

    match action {
        ConfigAction::Show => {
            let settings = engine.get_settings();
            if json {
                print_json(settings)?;
            } else {
                print_settings(settings, engine.get_config_path());
            }
        }
        ConfigAction::Path => {
            let path = engine.get_config_path().display().to_string();
            if json {
                print_json(&json!({ "path": path }))?;
            } else {
                println!("{}", path);
            }
        }
        ConfigAction::Set { key, value } => {
            let parsed = serde_json::from_str(&value).unwrap_or(Value::String(value));
            engine.set_value(&key, parsed.clone())?;
            if json {
                print_json(&json!({ "updated": key, "value": parsed }))?;
            } else {
                println!("Updated {}", key);
            }
        }
        ConfigAction::Reset => {
            engine.reset()?;
            if json {
                print_json(engine.get_settings())?;
            } else {
                println!("Settings reset to defaults");
            }
        }
    }

    Ok(())
}

fn print_status(app: &App) -> anyhow::Result<()> {
    let active = app.bookmarks.count_active()?;
    let archived = app.bookmarks.count_archived()?;
    println!("{} active, {} archived", active, archived);
    Ok(())
}

fn print_settings(settings: &BarkSettings, path: &Path) {
    let data_dir = match &settings.storage.data_dir {
        Some(dir) => dir.display().to_string(),
        None => "~/.bark (default)".to_string(),
    };
    println!("file:              {}", path.display());
    println!("data_dir:          {}", data_dir);
    println!("database_filename: {}", settings.storage.database_filename);
    println!("timeout_secs:      {}", settings.fetch.timeout_secs);
    println!("user_agent:        {}", settings.fetch.user_agent);
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table(bookmarks: &[Bookmark], archived: bool) {
    if bookmarks.is_empty() {
        println!("No bookmarks.");
        return;
    }

    for bookmark in bookmarks {
        let host = truncate(&bookmark.hostname, 28);
        match (archived, bookmark.archived_at) {
            (true, Some(ts)) => println!(
                "{}  {}  {:<28}  {}",
                bookmark.id,
                format_timestamp(ts),
                host,
                bookmark.title
            ),
            _ => println!("{}  {:<28}  {}", bookmark.id, host, bookmark.title),
        }
    }
}

fn print_details(bookmark: &Bookmark) {
    println!("id:       {}", bookmark.id);
    println!("title:    {}", bookmark.title);
    println!("url:      {}", bookmark.url);
    println!("host:     {}", bookmark.hostname);
    println!("added:    {}", format_timestamp(bookmark.added_at));
    match bookmark.archived_at {
        Some(ts) => println!("archived: {}", format_timestamp(ts)),
        None => println!("archived: -"),
    }
}

fn format_timestamp(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ts.to_string())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
