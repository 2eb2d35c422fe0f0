use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use shamir_recon::cli::{Cli, Commands};
use shamir_recon::document::ShareDocument;
use shamir_recon::telemetry::{level_for, setup_tracing};
use shamir_recon::{RecoverOptions, decode_value, recover_secret};

/// Read a share document from stdin, prompting when a TTY is attached
fn read_stdin_document() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Paste the share document (JSON), then press Ctrl-D:");
    }

    let mut text = Zeroizing::new(String::new());
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .context("Failed to read share document from stdin")?;
    Ok(text)
}

fn read_file_document(path: &Path) -> Result<Zeroizing<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read share document {}", path.display()))?;
    Ok(Zeroizing::new(text))
}

fn recover_one(text: &str, options: RecoverOptions) -> Result<Zeroizing<String>> {
    let document = ShareDocument::from_json(text)?;
    let reconstruction = recover_secret(&document, options)?;

    if options.verify {
        tracing::info!(
            count = reconstruction.verified.len(),
            "extra shares verified against the reconstructed polynomial"
        );
    }

    Ok(Zeroizing::new(reconstruction.secret.to_string()))
}

fn recover(files: &[PathBuf], options: RecoverOptions) -> Result<()> {
    match files {
        [] => {
            let text = read_stdin_document()?;
            let secret = recover_one(&text, options)?;
            println!("{}", &*secret);
        }
        [path] => {
            let text = read_file_document(path)?;
            let secret = recover_one(&text, options)
                .with_context(|| format!("Failed to recover {}", path.display()))?;
            println!("{}", &*secret);
        }
        paths => {
            // Several documents: label each result with its source
            for path in paths {
                let text = read_file_document(path)?;
                let secret = recover_one(&text, options)
                    .with_context(|| format!("Failed to recover {}", path.display()))?;
                println!("{}: {}", path.display(), &*secret);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(level_for(cli.verbose, cli.quiet))?;

    match cli.command {
        Commands::Recover {
            files,
            threshold,
            verify,
        } => {
            let options = RecoverOptions { threshold, verify };
            recover(&files, options)?;
        }
        Commands::Decode { base, value } => {
            let decoded = decode_value(&base, &value)?;
            println!("{decoded}");
        }
    }

    Ok(())
}
