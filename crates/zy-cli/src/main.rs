//! CLI frontend for the Zhouyi coin-oracle divination engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "zy",
    about = "周易算卦 — coin-throw I-Ching divination with AI interpretation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a full six-throw reading and show both hexagrams
    Cast {
        /// Consultation category (Chinese label or alias like "career")
        #[arg(short, long, default_value = "其他")]
        category: String,

        /// The question held in mind while casting
        #[arg(short, long, default_value = "")]
        question: String,

        /// RNG seed for a reproducible reading (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Interactive consultation: category, question, six throws, interpretation
    Ask {
        /// RNG seed for a reproducible reading (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Model identifier to request from the interpretation service
        #[arg(short, long)]
        model: Option<String>,

        /// Print the assembled prompt instead of calling the service
        #[arg(long)]
        dry_run: bool,
    },

    /// List the 64 King Wen hexagrams, or look up a single key
    Hexagrams {
        /// A 6-character key over 0/1, bottom line first
        key: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cast {
            category,
            question,
            seed,
        } => commands::cast::run(&category, &question, seed),
        Commands::Ask {
            seed,
            model,
            dry_run,
        } => commands::ask::run(seed, model.as_deref(), dry_run),
        Commands::Hexagrams { key } => commands::hexagrams::run(key.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
