//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Mood journal for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new entry
    Add {
        /// Entry title
        #[arg(short, long)]
        title: String,

        /// Entry text
        #[arg(short, long)]
        content: String,

        /// Mood (positive, neutral, negative)
        #[arg(short, long, default_value = "neutral")]
        mood: String,

        /// Timestamp in RFC 3339 (default: now)
        #[arg(long, value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Change an existing entry
    Edit {
        /// Entry id
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        #[arg(short, long)]
        mood: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },

    /// List entries, newest first
    List {
        /// Only entries written on this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show which days have entries and their mood
    Calendar {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Mood statistics and common words
    Insights {
        /// Time range (7days, 30days, 90days, all)
        #[arg(short, long, default_value = "30days")]
        range: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score the sentiment of a text from -5 to 5
    Sentiment {
        /// Text to score
        text: String,
    },

    /// Print an inspirational quote
    Quote,

    /// Show or update your profile
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        daily_quote: Option<String>,

        /// Daily reminders (on, off)
        #[arg(long, value_name = "on|off")]
        reminders: Option<String>,

        /// Theme (light, dark, system)
        #[arg(long)]
        theme: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
