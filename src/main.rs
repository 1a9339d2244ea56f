//! Command-line front end for the runlen codec.
//!
//! Rewrites a text file in place, run-length encoding or decoding its
//! contents, then reports the old and new lengths and the compression
//! ratio. Only `.txt` paths with ASCII contents are accepted.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use runlen::{decode, encode};

/// Run-length encode or decode a text file in place.
#[derive(Parser)]
#[command(name = "runlen", version)]
#[command(about = "Run-length encode or decode an ASCII text file in place")]
#[command(group = ArgGroup::new("mode").required(true))]
struct Cli {
    /// Run-length encode the file
    #[arg(short = 'e', long = "encode", group = "mode")]
    encode: bool,

    /// Decode a previously encoded file
    #[arg(short = 'd', long = "decode", group = "mode")]
    decode: bool,

    /// Path to the file to transform; must end in `.txt` and contain
    /// ASCII text
    path: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let text = read_text(&cli.path)?;

    let output = if cli.decode {
        debug!(bytes = text.len(), "decoding");
        decode(&text).with_context(|| format!("failed to decode {}", cli.path.display()))?
    } else {
        debug!(bytes = text.len(), "encoding");
        encode(&text)
    };

    fs::write(&cli.path, &output)
        .with_context(|| format!("failed to write {}", cli.path.display()))?;
    debug!(path = %cli.path.display(), bytes = output.len(), "rewrote file in place");

    // Encoding reports how much smaller the file got; decoding reports
    // how much it grew back.
    let ratio = if cli.decode {
        output.len() as f64 / text.len() as f64
    } else {
        text.len() as f64 / output.len() as f64
    };
    println!("Original file length: {}", text.len());
    println!("New length: {}", output.len());
    println!("Compression ratio: {ratio:.6}");

    Ok(())
}

/// Read the file behind `path`, enforcing the `.txt` extension and ASCII
/// contents, and guarantee the returned text ends with a line terminator.
///
/// The trailing terminator matters to the codec: it is what lets a digit
/// run's separator survive at the end of an encoded file.
fn read_text(path: &Path) -> Result<String> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
        bail!(
            "invalid file path {}: path must end with the extension '.txt'",
            path.display()
        );
    }

    let mut text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if !text.is_ascii() {
        bail!(
            "{} contains non-ASCII data; only ASCII text is supported",
            path.display()
        );
    }
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }

    Ok(text)
}
