//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, LogFields};
pub use output::{
    format_config, format_dashboard, format_entry, format_insights, format_pillar_detail,
};
