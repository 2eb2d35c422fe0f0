use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::Threshold;

/// Validates that threshold is at least 2
/// A single share does not determine the polynomial's constant term
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "shamir-recon")]
#[command(about = "Reconstruct a Shamir secret from a JSON share document by exact Lagrange interpolation")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recover the secret from one or more share documents (stdin if none given)
    Recover {
        /// Share documents to read
        files: Vec<PathBuf>,

        /// Interpolate this many shares instead of the document's k (must be >= 2)
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Option<Threshold>,

        /// Check that every share beyond the first k lies on the same polynomial
        #[arg(long)]
        verify: bool,
    },
    /// Decode a single value from the given base and print it in decimal
    Decode {
        /// Numeral base of VALUE (2-62)
        #[arg(short, long)]
        base: String,

        /// Digit string to decode
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}
