use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use modular_cipher::{utils, AffineCipher, AffineKeyPair, Modulus, SubstitutionCipher};

/// Improved Caesar cipher with a modular inverse key pair
///
/// SECURITY NOTE: educational cipher, trivially breakable.
#[derive(Parser, Debug)]
#[command(
    name = "caesar_improved",
    version,
    about = "Multiplicative Caesar cipher: E(x) = x * ke mod n, D(x) = x * kd mod n",
    long_about = "
Multiplies every byte with one half of a key pair (ke, kd) where
ke * kd = 1 (mod n) and both keys are coprime to n.

Without --ke/--kd the first pair found by searching ke over 1..n and
kd over 2..n is used. An explicit pair is checked before use.

MODES:
- keygen:  print the generated key pair (or every pair with --all);
           with --ke/--kd the given pair is checked and echoed
- encrypt: ciphertext = plaintext * ke mod n
- decrypt: plaintext = ciphertext * kd mod n
"
)]
struct Cli {
    #[arg(short, long, value_enum, default_value_t = OperationMode::Encrypt, help = "Mode of operation")]
    mode: OperationMode,

    #[arg(short, long, conflicts_with = "text", help = "Path to the input file")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Text to process")]
    text: Option<String>,

    #[arg(short, long, help = "Path to the output file")]
    output: Option<PathBuf>,

    /// Size of the symbol space; any positive n for keygen, at most 256
    /// to encrypt or decrypt bytes
    #[arg(short = 'n', long, default_value_t = 256)]
    modulus: u64,

    /// Encryption key, must be given together with --kd
    #[arg(long, requires = "kd")]
    ke: Option<u64>,

    /// Decryption key, must be given together with --ke
    #[arg(long, requires = "ke")]
    kd: Option<u64>,

    /// List every valid key pair in keygen mode
    #[arg(long, conflicts_with = "ke")]
    all: bool,

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
    Keygen,
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

    let modulus = Modulus::new(cli.modulus)?;

    let encrypt = match cli.mode {
        OperationMode::Keygen => {
            for line in keygen_report(modulus, cli.all, cli.ke.zip(cli.kd))? {
                println!("{}", line);
            }
            return Ok(());
        }
        OperationMode::Encrypt => true,
        OperationMode::Decrypt => false,
    };

    let keys = resolve_keys(cli.ke.zip(cli.kd), modulus)?;
    info!("Using key pair {}", keys);

    let input = read_input(cli.file.as_deref(), cli.text.as_deref(), cli.hex)?;
    let cipher = AffineCipher::new(keys);
    let result = if encrypt {
        cipher.encrypt(&input)?
    } else {
        cipher.decrypt(&input)?
    };

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

/// Validates an explicit key pair or searches the first one for `modulus`.
fn resolve_keys(explicit: Option<(u64, u64)>, modulus: Modulus) -> Result<AffineKeyPair> {
    let keys = match explicit {
        Some((ke, kd)) => AffineKeyPair::new(ke, kd, modulus)?,
        None => AffineKeyPair::generate(modulus)?,
    };
    Ok(keys)
}

/// Lines printed in keygen mode: `ke kd` per pair
///
/// An explicit pair is validated and echoed instead of searched.
fn keygen_report(
    modulus: Modulus,
    all: bool,
    explicit: Option<(u64, u64)>,
) -> Result<Vec<String>> {
    let line = |keys: AffineKeyPair| format!("{} {}", keys.encrypt_key(), keys.decrypt_key());

    if !all {
        return Ok(vec![line(resolve_keys(explicit, modulus)?)]);
    }

    let lines: Vec<String> = AffineKeyPair::candidates(modulus).map(line).collect();
    if lines.is_empty() {
        bail!("No key pair exists for modulus {}", modulus);
    }
    info!("{} key pairs for modulus {}", lines.len(), modulus);
    Ok(lines)
}

fn read_input(file: Option<&Path>, text: Option<&str>, is_hex: bool) -> Result<Vec<u8>> {
    let raw = match (file, text) {
        (Some(path), _) => fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        (None, Some(text)) => text.as_bytes().to_vec(),
        (None, None) => bail!("Either --file or --text must be given"),
    };

    utils::decode_input(raw, is_hex).context("Invalid hex input")
}
