//! CLI command definitions

use crate::application::EntryUpdate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lifeos")]
#[command(about = "Life pillar scores and insights from daily logs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new lifeos data directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Log or update a day's entry
    Log {
        /// Day to log (today, yesterday, a weekday, or YYYY-MM-DD)
        #[arg(default_value = "today")]
        date: String,

        #[command(flatten)]
        fields: LogFields,
    },

    /// Show the entry logged for a day
    Show {
        /// Day to show (today, yesterday, a weekday, or YYYY-MM-DD)
        #[arg(default_value = "today")]
        date: String,

        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scores across all pillars
    Dashboard {
        /// Also show scores as of 30 entries ago
        #[arg(short, long)]
        compare: bool,

        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score, history, and raw metrics for one pillar
    Pillar {
        /// Pillar id (finance, career, health, spirituality, hobbies)
        id: String,

        /// Days of score history (default: chart_days from config)
        #[arg(short, long)]
        days: Option<usize>,

        /// Print the detail view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Observations drawn from recent logs
    Insights {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
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

    /// Export all logs to a JSON file
    Export {
        /// Destination file
        file: PathBuf,
    },

    /// Import logs from a JSON export, replacing entries on matching dates
    Import {
        /// Source file
        file: PathBuf,
    },

    /// Delete all logged data
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Field flags for `log`; anything omitted keeps its current value
#[derive(Args, Debug, Default)]
pub struct LogFields {
    /// Income added
    #[arg(long, value_name = "AMOUNT", help_heading = "Finance")]
    pub income: Option<f64>,

    /// Money spent
    #[arg(long, value_name = "AMOUNT", help_heading = "Finance")]
    pub spent: Option<f64>,

    /// Savings added
    #[arg(long, value_name = "AMOUNT", help_heading = "Finance")]
    pub saved: Option<f64>,

    /// Minutes studied
    #[arg(long, value_name = "MINUTES", help_heading = "Career")]
    pub study: Option<f64>,

    /// Number of skills practiced
    #[arg(long, value_name = "COUNT", help_heading = "Career")]
    pub skills: Option<u32>,

    /// Worked on a project
    #[arg(long, overrides_with = "no_project", help_heading = "Career")]
    pub project: bool,

    #[arg(long, overrides_with = "project", hide = true)]
    pub no_project: bool,

    /// Hours slept
    #[arg(long, value_name = "HOURS", help_heading = "Health")]
    pub sleep: Option<f64>,

    /// Worked out
    #[arg(long, overrides_with = "no_workout", help_heading = "Health")]
    pub workout: bool,

    #[arg(long, overrides_with = "workout", hide = true)]
    pub no_workout: bool,

    /// Mood from 1 (low) to 5 (high)
    #[arg(long, value_name = "1-5", help_heading = "Health")]
    pub mood: Option<u8>,

    /// Prayed or meditated
    #[arg(long, overrides_with = "no_prayer", help_heading = "Spirituality")]
    pub prayer: bool,

    #[arg(long, overrides_with = "prayer", hide = true)]
    pub no_prayer: bool,

    /// Minutes of reflection
    #[arg(long, value_name = "MINUTES", help_heading = "Spirituality")]
    pub reflection: Option<f64>,

    /// Minutes of hobby practice
    #[arg(long, value_name = "MINUTES", help_heading = "Hobbies")]
    pub practice: Option<f64>,

    /// Practiced a specific technique
    #[arg(long, overrides_with = "no_technique", help_heading = "Hobbies")]
    pub technique: bool,

    #[arg(long, overrides_with = "technique", hide = true)]
    pub no_technique: bool,
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl LogFields {
    pub fn to_update(&self) -> EntryUpdate {
        EntryUpdate {
            income_added: self.income,
            money_spent: self.spent,
            savings_added: self.saved,
            minutes_studied: self.study,
            skills_practiced: self.skills,
            project_work: toggle(self.project, self.no_project),
            sleep_hours: self.sleep,
            workout_done: toggle(self.workout, self.no_workout),
            mood_scale: self.mood,
            prayer_done: toggle(self.prayer, self.no_prayer),
            reflection_minutes: self.reflection,
            practice_minutes: self.practice,
            technique_practiced: toggle(self.technique, self.no_technique),
        }
    }
}
