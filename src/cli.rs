use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ace-events - validate and build multi-day event schedules
#[derive(Debug, Parser)]
#[command(name = "ace-events")]
#[command(about = "Validate and build multi-day event schedules", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if not specified, starts the interactive wizard)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate an event payload stored as JSON
    #[command(alias = "check")]
    Validate {
        /// Path to the payload file
        #[arg(required = true)]
        file: PathBuf,

        /// Only report issues for the fields of one wizard step
        #[arg(long, value_enum)]
        step: Option<StepArg>,

        /// Print issues as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the calendar days between two dates, inclusive
    Days {
        /// Start date (YYYY-MM-DD)
        start: String,

        /// End date (YYYY-MM-DD)
        end: String,
    },

    /// Print an empty payload with one entry per day
    Template {
        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD), defaults to the start date
        #[arg(long)]
        end: Option<String>,

        /// Use one shared list of periods for every day
        #[arg(long)]
        uniform: bool,
    },

    /// Run the interactive event wizard
    Wizard {
        /// Continue from a saved draft
        #[arg(long)]
        load: Option<PathBuf>,
    },

    /// View or reset configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Print the active configuration
    Show,
    /// Print the configuration file location
    Path,
    /// Overwrite the configuration with defaults
    Reset,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StepArg {
    Info,
    Schedule,
    Review,
}

impl From<StepArg> for crate::wizard::Step {
    fn from(step: StepArg) -> Self {
        match step {
            StepArg::Info => crate::wizard::Step::Info,
            StepArg::Schedule => crate::wizard::Step::Schedule,
            StepArg::Review => crate::wizard::Step::Review,
        }
    }
}
