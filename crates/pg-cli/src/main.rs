//! CLI frontend for the adventuring party generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "partygen",
    about = "Roll up a random adventuring party",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log generation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one adventuring party
    Generate {
        /// RNG seed for a reproducible party (default: random, printed)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Alignment mode: party or individual
        #[arg(short, long, default_value = "party")]
        mode: String,

        /// Directory of dataset JSON files (default: built-in dataset)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Roll a dice expression such as 2d6 or 1d4+4
    Roll {
        /// Dice expression
        spec: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of times to roll
        #[arg(short, long, default_value = "1")]
        times: u32,
    },

    /// Load and validate a dataset
    Check {
        /// Directory of dataset JSON files (default: built-in dataset)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            seed,
            mode,
            data,
            format,
        } => commands::generate::run(data.as_deref(), seed, &mode, &format),
        Commands::Roll { spec, seed, times } => commands::roll::run(&spec, seed, times),
        Commands::Check { data } => commands::check::run(data.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
