use clap::Parser;
use phraseforge::consts::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use phraseforge::{train, PhraseForgeError, TrainConfig};
use std::path::PathBuf;
use std::process;
use tracing::{error, Level};

mod reports;

/// Builds the phrase-frequency dataset used for word prediction.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = TrainConfig {
        input: cli.input,
        output: cli.output,
    };

    match train(&config) {
        Ok(report) => reports::preview(&report.records, reports::PREVIEW_ROWS),
        Err(PhraseForgeError::InputNotFound(path)) => {
            error!("❌ Error: File not found at {}", path.display());
        }
        Err(e) => {
            error!("❌ Training failed: {}", e);
            process::exit(1);
        }
    }
}
