use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "entry-score",
    version,
    about = "University exam-entry score calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./entry-score.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a score from command-line values
    Calc(CalcCommand),
    /// Enter values interactively
    Prompt,
    /// Print the effective scoring policy
    Policy(PolicyCommand),
}

// Values stay raw strings so the form layer reports every bad field at once.
#[derive(Args)]
pub struct CalcCommand {
    /// Scheduled course hours
    #[arg(long)]
    pub hours: String,
    /// The three colloquium scores
    #[arg(long, num_args = 3, allow_negative_numbers = true, required = true)]
    pub colloquium: Vec<String>,
    /// Seminar scores
    #[arg(long, num_args = 1.., allow_negative_numbers = true, required = true)]
    pub seminar: Vec<String>,
    /// Independent work score
    #[arg(long, allow_negative_numbers = true)]
    pub independent: String,
    #[arg(long, allow_negative_numbers = true)]
    pub absences: Option<String>,
    /// Result scale: 50 or 10
    #[arg(long)]
    pub scale: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct PolicyCommand {
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: PolicyFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyFormat {
    Toml,
    Json,
}
