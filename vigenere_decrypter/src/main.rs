use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vigenere_decrypter::BreakConfig;

/// Command-line arguments for the Vigenère program.
#[derive(Parser, Debug)]
#[command(author, version, about = "Vigenère cipher with automatic key recovery")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log progress details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recover the key and plaintext. The key is printed to stderr.
    Break {
        #[command(flatten)]
        io: Io,
        /// Longest key length tried by the IC scan
        #[arg(long, default_value_t = 20)]
        max_length: usize,
    },
    /// Encrypt with a known key.
    Encrypt {
        #[command(flatten)]
        io: Io,
        /// Key string for the cipher
        #[arg(short, long)]
        key: String,
    },
    /// Decrypt with a known key.
    Decrypt {
        #[command(flatten)]
        io: Io,
        /// Key string for the cipher
        #[arg(short, long)]
        key: String,
    },
}

#[derive(Args, Debug)]
struct Io {
    /// Path to the input file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<String>,

    /// Input text instead of a file
    #[arg(short, long)]
    text: Option<String>,

    /// Path to the output file; stdout when omitted
    #[arg(short, long)]
    output: Option<String>,
}

impl Io {
    fn read(&self) -> Result<String> {
        match (&self.file, &self.text) {
            (Some(path), _) => {
                std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
            }
            (None, Some(text)) => Ok(text.clone()),
            (None, None) => bail!("either --file or --text is required"),
        }
    }

    fn write(&self, result: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                std::fs::write(path, result).with_context(|| format!("Failed to write {path}"))
            }
            None => {
                println!("{result}");
                Ok(())
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Encrypt { io, key } => {
            io.write(&vigenere_decrypter::encrypt(&io.read()?, key).context("Encryption failed")?)
        }
        Command::Decrypt { io, key } => {
            io.write(&vigenere_decrypter::decrypt(&io.read()?, key).context("Decryption failed")?)
        }
        Command::Break { io, max_length } => {
            let input = io.read()?;
            if input.chars().filter(char::is_ascii_alphabetic).count() < 50 {
                eprintln!("Warning: text may be too short for reliable analysis");
            }

            let config = BreakConfig {
                max_ic_length: *max_length,
                ..BreakConfig::default()
            };
            let result = vigenere_decrypter::break_with_config(&input, &config, |fraction| {
                tracing::debug!(progress = fraction, "key length evaluated")
            })
            .context("Key recovery failed")?;

            eprintln!("Found key: {} (length {})", result.key, result.key.len());
            io.write(&result.plaintext)
        }
    }
}
