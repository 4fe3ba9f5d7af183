use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use mono_substitution::{spawn_crack, CrackConfig, Key};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the monoalphabetic substitution program.
#[derive(Parser, Debug)]
#[command(author, version, about = "Monoalphabetic substitution cipher with a hill-climbing solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log progress details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recover plaintext without the key.
    Crack {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        tuning: Tuning,
        /// Hide the progress bar.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Encrypt with a known key.
    Encrypt {
        #[command(flatten)]
        io: Io,
        /// 26 distinct letters; position i is the plaintext for ciphertext letter i.
        #[arg(short, long)]
        key: String,
    },
    /// Decrypt with a known key.
    Decrypt {
        #[command(flatten)]
        io: Io,
        /// 26 distinct letters; position i is the plaintext for ciphertext letter i.
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

#[derive(Args, Debug)]
struct Tuning {
    /// Number of independent climbs
    #[arg(long)]
    restarts: Option<usize>,

    /// Swap proposals per climb
    #[arg(long)]
    iterations: Option<usize>,

    /// Proposals without improvement before a climb gives up
    #[arg(long)]
    patience: Option<usize>,

    /// Seed for a reproducible search
    #[arg(long)]
    seed: Option<u64>,
}

impl Tuning {
    fn config(&self) -> CrackConfig {
        let defaults = CrackConfig::default();
        CrackConfig {
            restarts: self.restarts.unwrap_or(defaults.restarts),
            iterations: self.iterations.unwrap_or(defaults.iterations),
            patience: self.patience.unwrap_or(defaults.patience),
            seed: self.seed,
            ..defaults
        }
    }
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

fn parse_key(key: &str) -> Result<Key> {
    key.parse::<Key>().with_context(|| format!("Bad key {key:?}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Encrypt { io, key } => {
            io.write(&mono_substitution::encrypt(&io.read()?, &parse_key(key)?))
        }
        Command::Decrypt { io, key } => {
            io.write(&mono_substitution::decrypt(&io.read()?, &parse_key(key)?))
        }
        Command::Crack { io, tuning, quiet } => {
            let ciphertext = io.read()?;

            let pb = if *quiet {
                ProgressBar::hidden()
            } else {
                ProgressBar::new(1000)
            };
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg}")?
                    .progress_chars("#>-"),
            );
            pb.set_message("hill climbing");

            let handle = spawn_crack(ciphertext, tuning.config());
            let result = handle
                .wait(|fraction| pb.set_position((fraction * 1000.0) as u64))
                .context("Search failed")?;
            pb.finish_with_message("done");

            eprintln!("Key:   {}", result.mapping);
            eprintln!("Score: {:.2}", result.score);
            io.write(&result.text)
        }
    }
}
