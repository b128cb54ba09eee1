//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use roster::output::OutputMode;

/// roster - People, students and courses with sequential ids
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "People, students and courses with sequential ids",
    long_about = "Construct a school's people, students and courses with sequential ids\n\
                  and print their details.\n\n\
                  Every kind of entity draws its ids from its own counter, starting at 1.\n\
                  Students share the person counter."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Construct the built-in roster and print every entity
    Demo,

    /// Construct a roster and print its entities
    Show {
        /// Roster TOML file (defaults to the built-in roster)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Only print one section: people, students, records, courses
        #[arg(short, long)]
        only: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Show { file, only }) => {
            commands::show(file.as_deref(), only.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("roster v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        Some(Command::Demo) | None => commands::demo(output_mode),
    }
}
