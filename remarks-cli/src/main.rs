//! Remarks CLI - the annotated sample operations and marker scanning

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

use commands::{demo, discount, notify, pay, scan, tags, upper, user};

/// Remarks - comment-marker tooling and annotated sample operations
#[derive(Parser)]
#[command(name = "rmk", version, about, long_about = None)]
struct Cli {
    /// Log more detail to stderr (overridden by REMARKS_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create users and check their fields
    User {
        #[command(subcommand)]
        command: user::UserCommands,
    },

    /// Calculate the discount for an order
    Discount {
        /// Customer level label (VIP, Premium, anything else is standard)
        level: String,
        /// Order amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Take a payment
    Pay {
        /// Amount to charge
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send a notification to a user
    Notify {
        /// Recipient user ID
        user_id: i64,
        /// Message text
        message: String,
    },

    /// Upper-case each argument
    Upper {
        /// Strings to transform
        items: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the annotated walkthrough
    Demo {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find tagged comment markers in source files
    Scan {
        /// File or directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Only report these tags
        #[arg(long, value_delimiter = ',')]
        tag: Vec<String>,
        /// Exit with status 1 if a marker at or above this severity is found
        #[arg(long)]
        fail_on: Option<scan::FailOn>,
        /// Print per-tag counts only
        #[arg(long)]
        summary: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the known marker tags
    Tags {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so JSON on stdout stays parseable
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("REMARKS_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {}", e);
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::User { command } => user::run(command),
        Commands::Discount { level, amount, json } => discount::run(&level, &amount, json),
        Commands::Pay { amount, json } => pay::run(&amount, json),
        Commands::Notify { user_id, message } => notify::run(user_id, &message),
        Commands::Upper { items, json } => upper::run(&items, json),
        Commands::Demo { json } => demo::run(json),
        Commands::Scan { path, tag, fail_on, summary, json } => {
            scan::run(&path, &tag, fail_on, summary, json)
        }
        Commands::Tags { json } => tags::run(json),
    }
}
