use clap::{Parser, Subcommand};
use cmdlet_lint::aggregate::AggregationMode;
use cmdlet_lint::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cmdlet-lint",
    version,
    about = "Design-guideline linting for verb-noun shell commands"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check commands from a descriptor snapshot file
    Check {
        /// Path to a JSON file holding an array of command descriptors
        #[arg(long, short)]
        descriptors: PathBuf,

        /// Command names to check (all descriptors in the file when omitted)
        names: Vec<String>,

        /// Report shape per command
        #[arg(long, short, default_value = "full", value_enum)]
        mode: AggregationMode,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Also evaluate Optional-severity rules
        #[arg(long)]
        include_optional: bool,

        /// Also evaluate work-in-progress rules (implies --include-optional)
        #[arg(long = "include-wip")]
        include_work_in_progress: bool,

        /// Parameter-count ceiling (0..=512)
        #[arg(long)]
        max_parameters: Option<u32>,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List every catalogue rule with its category and severity
    ListRules,

    /// Show full explanation for a rule
    Explain {
        /// Rule ID (e.g., "input/position-collision")
        rule_id: String,
    },
}
