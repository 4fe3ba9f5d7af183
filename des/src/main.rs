use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the DES cipher program.
#[derive(Parser, Debug)]
#[command(author, version, about = "DES encryption and decryption in ECB or CBC mode")]
struct Cli {
    /// Path to the input file (plaintext, or hex ciphertext when decrypting).
    #[arg(short, long, help = "Path to the input file", conflicts_with = "text")]
    file: Option<String>,

    /// Input given directly on the command line.
    #[arg(short, long, help = "Input text instead of a file")]
    text: Option<String>,

    /// Key for the cipher.
    #[arg(short, long, help = "Key: 8 ASCII characters or 16 hex digits")]
    key: String,

    /// Chaining mode (ecb or cbc).
    #[arg(short, long, default_value = "ecb", help = "Chaining mode (ecb/cbc)")]
    chaining: String,

    /// Initialization vector for CBC.
    #[arg(long, help = "IV: 8 ASCII characters or 16 hex digits (required to decrypt CBC)")]
    iv: Option<String>,

    /// Path to the output file; stdout when omitted.
    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,

    /// Mode of operation (encrypt or decrypt).
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Log progress details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode.
    Encrypt,
    /// Decrypt mode.
    Decrypt,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(cli: &Cli) -> Result<String> {
    match (&cli.file, &cli.text) {
        (Some(path), _) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
        }
        (None, Some(text)) => Ok(text.clone()),
        (None, None) => bail!("either --file or --text is required"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let input = read_input(&cli)?;
    let iv = cli.iv.as_deref();

    let result = match cli.mode {
        OperationMode::Encrypt => des::encrypt(&input, &cli.key, &cli.chaining, iv)?,
        OperationMode::Decrypt => {
            // Hex files often end with a newline or carry spacing between bytes.
            let hex: String = input.chars().filter(|c| !c.is_whitespace()).collect();
            des::decrypt(&hex, &cli.key, &cli.chaining, iv)?
        }
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &result).with_context(|| format!("Failed to write {path}"))?
        }
        None => println!("{result}"),
    }

    Ok(())
}
