use clap::{Parser, Subcommand};

/// Command-line interface definition for caltrack
/// CLI application to categorize calendar events and chart hours per category
#[derive(Parser)]
#[command(
    name = "caltrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Categorize Google Calendar events by numeric title prefix and chart total hours",
    long_about = None
)]
pub struct Cli {
    /// Override the categorized events CSV path (useful for tests or custom files)
    #[arg(global = true, long = "csv")]
    pub csv: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch events, categorize them and write the CSV (then the chart)
    Collect {
        /// Query window direction; prompts interactively when omitted
        #[arg(long, help = "Query window direction: 'past' or 'future'")]
        direction: Option<String>,

        /// Query window size in days; prompts interactively when omitted
        #[arg(long, help = "Number of days to cover (positive integer)")]
        days: Option<i64>,

        /// Skip the chart step after writing the CSV
        #[arg(long = "no-chart", help = "Write the CSV only, skip the HTML chart")]
        no_chart: bool,
    },

    /// Rebuild the HTML chart from the saved CSV
    Chart {
        /// Override the chart output path
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },

    /// Manage the configuration file (view or initialize)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}
