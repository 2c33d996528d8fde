use crate::domain::constants::DEFAULT_CARDS_ROOT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardclass", version, about = "Card class normalizer")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to ~/.config/cardclass/config.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify character cards, then strip class from action cards.
    Fix {
        #[arg(default_value = DEFAULT_CARDS_ROOT)]
        root: PathBuf,
    },
    /// Classify character cards only.
    Classes {
        #[arg(default_value = DEFAULT_CARDS_ROOT)]
        root: PathBuf,
    },
    /// Strip class from action cards only.
    Strip {
        #[arg(default_value = DEFAULT_CARDS_ROOT)]
        root: PathBuf,
    },
    /// Report what `fix` would change without writing; exits 1 if anything would.
    Check {
        #[arg(default_value = DEFAULT_CARDS_ROOT)]
        root: PathBuf,
    },
    /// Show the table class for a card identifier.
    Lookup { identifier: String },
}
