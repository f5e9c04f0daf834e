mod calculator;
mod cli;
mod config;
mod error;
mod form;
mod prompt;
mod report;
mod types;

use crate::error::ScoreError;
use crate::types::policy::Policy;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

#[derive(Serialize)]
struct PolicyDocument<'a> {
    policy: &'a Policy,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("entry_score={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, ScoreError> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    let policy = loaded.policy();

    match cli.command {
        cli::Commands::Calc(cmd) => {
            let fields = form::FormFields {
                course_hours: Some(cmd.hours),
                colloquium: cmd.colloquium,
                seminars: cmd.seminar,
                independent_work: Some(cmd.independent),
                absences: cmd.absences,
                result_scale: cmd
                    .scale
                    .or_else(|| loaded.default_scale().map(|scale| scale.to_string())),
            };
            let input = fields.validate(&policy)?;
            let result = calculator::compute(&input, &policy);

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Text) => report::OutputFormat::Text,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                None => loaded
                    .default_format()
                    .and_then(report::OutputFormat::from_name)
                    .unwrap_or(report::OutputFormat::Text),
            };
            let rendered = report::render(&result, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Prompt => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let rounds = prompt::Session::new(stdin.lock(), stdout.lock(), &policy).run()?;
            tracing::info!(rounds, "prompt session finished");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Policy(cmd) => {
            let rendered = match cmd.format {
                cli::PolicyFormat::Toml => toml::to_string(&PolicyDocument { policy: &policy })?,
                cli::PolicyFormat::Json => serde_json::to_string_pretty(&policy)?,
            };
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(ScoreError::InvalidForm(errors)) => {
            for field in &errors {
                eprintln!("error: {}", field);
            }
            std::process::exit(exit_code::INVALID_INPUT);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
