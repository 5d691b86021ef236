use clap::Parser;
use moodlog::application::save_entry::parse_timestamp;
use moodlog::application::{
    init::init, ConfigService, DeleteEntryService, EntryEdit, HistoryService, InsightsService,
    InspirationService, NewEntry, ProfileService, ProfileUpdate, SaveEntryService,
};
use moodlog::cli::{self, Cli, Commands};
use moodlog::domain::calendar::{parse_day, parse_month};
use moodlog::domain::{score_sentiment, Mood, Theme, TimeRange};
use moodlog::error::{MoodlogError, Result};
use moodlog::infrastructure::{Config, FileSystemRepository, HttpQuoteProvider, JournalRepository};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Locate the journal and read its config
fn open_journal() -> Result<(FileSystemRepository, Config)> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    Ok((repo, config))
}

fn parse_mood(value: &str) -> Result<Mood> {
    Mood::from_str(value).map_err(MoodlogError::Config)
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(MoodlogError::Config(format!(
            "Invalid reminders value: '{}'. Use on or off",
            value
        ))),
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("moodlog - Mood journal for the terminal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => init(&path),
        Commands::Add {
            title,
            content,
            mood,
            at,
        } => {
            let (repo, _) = open_journal()?;
            let new = NewEntry {
                title,
                content,
                mood: Some(parse_mood(&mood)?),
                timestamp: at.as_deref().map(parse_timestamp).transpose()?,
            };
            let entry = SaveEntryService::new(repo.entry_store()).create(new)?;
            println!("{}", entry.id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            content,
            mood,
        } => {
            let (repo, _) = open_journal()?;
            let edit = EntryEdit {
                title,
                content,
                mood: mood.as_deref().map(parse_mood).transpose()?,
            };
            let entry = SaveEntryService::new(repo.entry_store()).edit(&id, edit)?;
            println!("Updated {}", entry.id);
            Ok(())
        }
        Commands::Delete { id } => {
            let (repo, _) = open_journal()?;
            DeleteEntryService::new(repo.entry_store()).execute(&id)?;
            println!("Deleted {}", id);
            Ok(())
        }
        Commands::List { date } => {
            let (repo, config) = open_journal()?;
            let zone = config.display_zone()?;
            let day = date.as_deref().map(parse_day).transpose()?;
            let entries = HistoryService::new(repo.entry_store(), zone).list(day);
            print!("{}", cli::format_entry_list(&entries, &zone));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Calendar { month } => {
            let (repo, config) = open_journal()?;
            let zone = config.display_zone()?;
            let month = month.as_deref().map(parse_month).transpose()?;
            let marks = HistoryService::new(repo.entry_store(), zone).calendar(month);
            print!("{}", cli::format_calendar(&marks));
            if marks.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Insights { range, json } => {
            let (repo, config) = open_journal()?;
            let zone = config.display_zone()?;
            let range = TimeRange::from_str(&range).map_err(MoodlogError::Config)?;
            let report = InsightsService::new(repo.entry_store(), zone).execute(range)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", cli::format_insights(&report, range.label()));
            }
            Ok(())
        }
        Commands::Sentiment { text } => {
            println!("{}", score_sentiment(&text));
            Ok(())
        }
        Commands::Quote => {
            let url = match FileSystemRepository::discover().and_then(|repo| repo.load_config()) {
                Ok(config) => config.quote_url,
                Err(_) => Config::new().quote_url,
            };
            let quote = InspirationService::new(HttpQuoteProvider::new(url)?).execute();
            println!("{}", cli::format_quote(&quote));
            Ok(())
        }
        Commands::Profile {
            name,
            email,
            bio,
            daily_quote,
            reminders,
            theme,
        } => {
            let (repo, _) = open_journal()?;
            let update = ProfileUpdate {
                name,
                email,
                bio,
                daily_quote,
                reminder_enabled: reminders.as_deref().map(parse_switch).transpose()?,
                theme: theme
                    .as_deref()
                    .map(Theme::from_str)
                    .transpose()
                    .map_err(MoodlogError::Config)?,
            };

            let service = ProfileService::new(repo.entry_store());
            let profile = if update.is_empty() {
                service.show()
            } else {
                service.update(update)?
            };
            print!("{}", cli::format_profile(&profile));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("quote_url = {}", config.quote_url);
                println!("timezone = {}", config.timezone);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: quote_url, timezone, created");
                Ok(())
            }
        }
    }
}
