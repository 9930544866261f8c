pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{Day, Value};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "feature-showcase")]
#[command(about = "Small, independent demos of everyday language features")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Upper-case text, or lower-case it with --lower
    Case {
        text: String,
        #[arg(long)]
        lower: bool,
    },
    /// Keep items rated 4 or higher from a CSV or JSON file
    Ratings {
        #[arg(long)]
        file: String,
    },
    /// Concatenate comma-separated lists, e.g. `concat 1,2 3`
    Concat { lists: Vec<String> },
    /// Describe a vehicle, or a car when --model is given
    Vehicle {
        #[arg(long)]
        make: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        model: Option<String>,
    },
    /// Length of text, or twice a number
    Value { input: Value },
    /// Pick the most expensive product from a CSV or JSON file
    Priciest {
        #[arg(long)]
        file: String,
    },
    /// Classify a day as weekday or weekend
    Day { day: Day },
    /// Square a number after a delay
    Square {
        #[arg(allow_negative_numbers = true)]
        number: f64,
        #[arg(long, default_value = "1000")]
        delay_ms: u64,
    },
    /// Run every demo listed in a TOML config
    Run {
        #[arg(short, long, default_value = "showcase.toml")]
        config: String,
        /// Override the report directory from the config
        #[arg(long)]
        output_path: Option<String>,
        /// Validate the config and list the demos without running them
        #[arg(long)]
        dry_run: bool,
    },
}
