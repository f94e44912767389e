use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use modular_cipher::analysis::{self, Language};
use modular_cipher::ShiftCipher;

/// Command-line arguments for the Caesar cipher program.
#[derive(Parser, Debug)]
#[command(name = "caesar", version, about = "Caesar cipher over the 26 letter alphabet")]
struct Cli {
    /// Path to the input file
    #[arg(short, long, conflicts_with = "text", help = "Path to the input file")]
    file: Option<PathBuf>,

    /// Literal input text, used instead of a file
    #[arg(short, long, help = "Text to process")]
    text: Option<String>,

    #[arg(short, long, default_value_t = 3, help = "Key for the cipher")]
    key: u64,

    #[arg(short, long, help = "Path to the output file")]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OperationMode::Encrypt, help = "Mode of operation")]
    mode: OperationMode,

    /// Reference language for crack mode
    #[arg(short, long, value_enum, default_value_t = LanguageArg::English)]
    language: LanguageArg,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
    /// Recover the key by frequency analysis and decrypt
    Crack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LanguageArg {
    English,
    German,
}

impl From<LanguageArg> for Language {
    fn from(language: LanguageArg) -> Self {
        match language {
            LanguageArg::English => Language::English,
            LanguageArg::German => Language::German,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let content = read_input(cli.file.as_deref(), cli.text.as_deref())?;
    let (result, key) = process(&cli, &content)?;
    if cli.mode == OperationMode::Crack {
        eprintln!("Detected cipher key: {}", key);
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, &result)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            info!("Result written to {}", path.display());
        }
        None => println!("{}", result),
    }

    Ok(())
}

fn read_input(file: Option<&Path>, text: Option<&str>) -> Result<String> {
    match (file, text) {
        (Some(path), _) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        (None, Some(text)) => Ok(text.to_string()),
        (None, None) => bail!("Either --file or --text must be given"),
    }
}

/// Runs the selected operation on `content`.
///
/// Returns the result together with the key that produced it, which in
/// crack mode is the recovered one.
fn process(cli: &Cli, content: &str) -> Result<(String, u8)> {
    let cipher = ShiftCipher::new(cli.key);
    match cli.mode {
        OperationMode::Encrypt => {
            info!("Encrypting with key {}", cipher.key());
            Ok((cipher.encrypt_str(content), cipher.key()))
        }
        OperationMode::Decrypt => {
            info!("Decrypting with key {}", cipher.key());
            Ok((cipher.decrypt_str(content), cipher.key()))
        }
        OperationMode::Crack => {
            let (key, plaintext) = analysis::crack(content, cli.language.into())
                .context("Input contains no letters to analyze")?;
            info!("Detected cipher key {}", key);
            Ok((plaintext, key))
        }
    }
}
