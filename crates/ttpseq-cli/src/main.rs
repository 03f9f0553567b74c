mod cmd;
mod corpus_dir;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ttpseq",
    about = "Tactic transition statistics over a directory of Attack Flow documents",
    version,
    propagate_version = true
)]
struct Cli {
    /// Corpus directory of .afb files (default: ./corpus)
    #[arg(long, global = true, env = "TTPSEQ_CORPUS")]
    corpus: Option<PathBuf>,

    /// Config file (default: ./ttpseq.yaml when present)
    #[arg(long, global = true, env = "TTPSEQ_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print tactic transition matrices (filtered grid first, then full)
    Matrix {
        /// Print only the filtered matrix
        #[arg(long, conflicts_with = "full")]
        filtered: bool,

        /// Print only the full matrix
        #[arg(long)]
        full: bool,
    },

    /// Print per-tactic occurrence counts
    Freq,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Matrix { filtered, full } => cmd::matrix::run(
            cli.corpus.as_deref(),
            cli.config.as_deref(),
            filtered,
            full,
            cli.json,
        ),
        Commands::Freq => cmd::freq::run(cli.corpus.as_deref(), cli.config.as_deref(), cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
