//! Zerohide - Hide text in plain sight
//!
//! A CLI tool for invisible-text steganography. Hides a secret message
//! inside ordinary cover text as zero-width characters; the result is
//! plain text that renders and copies exactly like the cover.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;

use zerohide::{decode_with_config, encode_with_config, DecoderConfig, EncoderConfig};

/// Shown when the inspected text carries no recognizable payload.
const NO_MESSAGE_PLACEHOLDER: &str = "No hidden message found.";

/// Zerohide - Hide text in plain sight
///
/// Invisible-text steganography with zero-width characters.
/// The combined output is ordinary text - paste it anywhere that
/// preserves plain text verbatim.
#[derive(Parser)]
#[command(name = "zerohide")]
#[command(version = "0.1.0")]
#[command(about = "Hide a secret message inside ordinary text with zero-width characters")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a secret message inside cover text
    ///
    /// The result looks identical to the cover text but carries the
    /// secret as invisible characters. Beware that some text pipelines
    /// (retyping, normalization) strip zero-width characters.
    Hide {
        /// Secret message to hide (reads from stdin if not provided)
        #[arg(short, long)]
        secret: Option<String>,

        /// Cover text that stays visible (mutually exclusive with --cover-file)
        #[arg(short, long, conflicts_with = "cover_file")]
        cover: Option<String>,

        /// Read the cover text from a file
        #[arg(long)]
        cover_file: Option<PathBuf>,

        /// Write the combined text to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output (payload size and placement)
        #[arg(short, long)]
        verbose: bool,
    },

    /// Reveal the message hidden in text
    ///
    /// Prints the hidden message, or "No hidden message found." when
    /// the text carries no payload. A damaged payload is still shown,
    /// with U+FFFD in place of unrecoverable characters.
    Reveal {
        /// Text to inspect (reads from stdin if not provided)
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Verbose output (collected payload size)
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hide {
            secret,
            cover,
            cover_file,
            output,
            verbose,
        } => hide_cmd(secret, cover, cover_file.as_ref(), output.as_ref(), verbose),

        Commands::Reveal {
            text,
            file,
            verbose,
        } => reveal_cmd(text, file.as_ref(), verbose),
    }
}

/// Reads from stdin until EOF, announcing the prompt on stderr.
fn read_stdin(what: &str) -> Result<String> {
    eprintln!("Reading {} from stdin (Ctrl+D to finish):", what);
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .with_context(|| format!("Failed to read {} from stdin", what))?;
    Ok(buffer)
}

/// Strips the trailing newline that text widgets, shells, and editors
/// append; a trailing control character is not part of the text.
fn strip_trailing_newline(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}

/// Hides a secret inside cover text and prints the combined result.
///
/// Both inputs must be non-empty - the codec itself encodes anything,
/// so the refusal happens here at the boundary.
fn hide_cmd(
    secret: Option<String>,
    cover: Option<String>,
    cover_file: Option<&PathBuf>,
    output: Option<&PathBuf>,
    verbose: bool,
) -> Result<()> {
    let secret = match secret {
        Some(s) => s,
        None => strip_trailing_newline(&read_stdin("secret message")?).to_string(),
    };

    if secret.is_empty() {
        anyhow::bail!("Secret message cannot be empty");
    }

    let cover = if let Some(c) = cover {
        c
    } else if let Some(path) = cover_file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read cover text from {}", path.display()))?;
        strip_trailing_newline(&raw).to_string()
    } else {
        anyhow::bail!("No cover text provided. Use --cover or --cover-file");
    };

    if cover.is_empty() {
        anyhow::bail!("Cover text cannot be empty");
    }

    let config = EncoderConfig { verbose };
    let stego = encode_with_config(&secret, &cover, &config);

    match output {
        Some(path) => {
            std::fs::write(path, &stego)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            eprintln!("Combined text written to {}", path.display());
        }
        None => println!("{stego}"),
    }

    Ok(())
}

/// Reveals the message hidden in the given text.
///
/// NOTE: This command never fails on the payload itself - absence is
/// reported with a fixed placeholder and damage degrades to U+FFFD.
fn reveal_cmd(text: Option<String>, file: Option<&PathBuf>, verbose: bool) -> Result<()> {
    let text = if let Some(t) = text {
        t
    } else if let Some(path) = file {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read text from {}", path.display()))?
    } else {
        read_stdin("text")?
    };

    let config = DecoderConfig { verbose };

    match decode_with_config(strip_trailing_newline(&text), &config) {
        Some(message) => println!("{message}"),
        None => println!("{NO_MESSAGE_PLACEHOLDER}"),
    }

    Ok(())
}
