use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use modular_cipher::{utils, ByteShiftCipher, Modulus, SubstitutionCipher};

/// Byte shift cipher: E_k(x) = (x + k) mod n, D_k(x) = (x + n - k) mod n
#[derive(Parser, Debug)]
#[command(
    name = "caesar_bytes",
    version,
    about = "Caesar cipher over raw bytes modulo n",
    long_about = "
Shifts every byte of the input by the key modulo n.

INPUT:  --file (raw bytes, or hex with --hex) or --text
OUTPUT: --output writes raw bytes, otherwise the result is printed
        to stdout in the selected --format (hex by default).
"
)]
struct Cli {
    #[arg(short, long, conflicts_with = "text", help = "Path to the input file")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Text to process")]
    text: Option<String>,

    #[arg(short, long, default_value_t = 3, help = "Key for the cipher")]
    key: u64,

    /// Size of the symbol space, at most 256 for byte data
    #[arg(short = 'n', long, default_value_t = 256)]
    modulus: u64,

    #[arg(short, long, help = "Path to the output file")]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OperationMode::Encrypt, help = "Mode of operation")]
    mode: OperationMode,

    /// Treat the input as hex encoded
    #[arg(long)]
    hex: bool,

    /// Format of the result on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Hex)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Hex,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let input = read_input(cli.file.as_deref(), cli.text.as_deref(), cli.hex)?;
    let result = process(&cli, &input)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &result)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            info!("{} bytes written to {}", result.len(), path.display());
        }
        None => println!("{}", utils::render_bytes(&result, cli.format == OutputFormat::Hex)),
    }

    Ok(())
}

/// Reads the input bytes, decoding hex if requested.
fn read_input(file: Option<&Path>, text: Option<&str>, is_hex: bool) -> Result<Vec<u8>> {
    let raw = match (file, text) {
        (Some(path), _) => fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        (None, Some(text)) => text.as_bytes().to_vec(),
        (None, None) => bail!("Either --file or --text must be given"),
    };

    utils::decode_input(raw, is_hex).context("Invalid hex input")
}

fn process(cli: &Cli, input: &[u8]) -> Result<Vec<u8>> {
    let modulus = Modulus::new(cli.modulus)?;
    let cipher = ByteShiftCipher::new(cli.key, modulus);
    debug!("Using key {} mod {}", cipher.key(), modulus);

    let result = match cli.mode {
        OperationMode::Encrypt => cipher.encrypt(input),
        OperationMode::Decrypt => cipher.decrypt(input),
    };
    result.with_context(|| format!("{:?} failed", cli.mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("caesar_bytes").chain(args.iter().copied()))
    }

    #[test]
    fn test_encrypt_decrypt_defaults() {
        let encrypted = process(&cli(&["-t", "x"]), b"cryptography").unwrap();
        assert_eq!(encrypted, b"fu|swrjudsk|");

        let decrypted = process(&cli(&["-t", "x", "-m", "decrypt"]), &encrypted).unwrap();
        assert_eq!(decrypted, b"cryptography");
    }

    #[test]
    fn test_invalid_modulus() {
        assert!(process(&cli(&["-t", "x", "-n", "0"]), b"abc").is_err());
        assert!(process(&cli(&["-t", "x", "-n", "26"]), b"abc").is_err());
        assert!(process(&cli(&["-t", "x", "-n", "257"]), b"abc").is_err());
    }

    #[test]
    fn test_hex_input_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "66 75 7c\n73").unwrap();

        let input = read_input(Some(file.path()), None, true).unwrap();
        assert_eq!(input, b"fu|s");
        assert!(read_input(None, Some("zz"), true).is_err());
        assert_eq!(read_input(None, Some("zz"), false).unwrap(), b"zz");
    }
}
