use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the Caesar cipher program.
#[derive(Parser, Debug)]
#[command(author, version, about = "Caesar shift cipher with brute-force cracking")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log progress details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shift every letter forward by the key.
    Encrypt {
        #[command(flatten)]
        io: Io,
        /// Shift amount; non-numeric keys fall back to 3.
        #[arg(short, long, allow_hyphen_values = true)]
        key: String,
    },
    /// Shift every letter back by the key.
    Decrypt {
        #[command(flatten)]
        io: Io,
        #[arg(short, long, allow_hyphen_values = true)]
        key: String,
    },
    /// Try all 26 shifts and print the most English-looking result.
    Crack {
        #[command(flatten)]
        io: Io,
        /// Also list this many ranked candidates on stderr.
        #[arg(long, default_value_t = 0)]
        top: usize,
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
        Command::Encrypt { io, key } => io.write(&caesar::encrypt(&io.read()?, key)),
        Command::Decrypt { io, key } => io.write(&caesar::decrypt(&io.read()?, key)),
        Command::Crack { io, top } => {
            let ranked = caesar::rank_shifts(&io.read()?).context("Brute force failed")?;
            for candidate in ranked.iter().take(*top) {
                let preview: String = candidate.text.chars().take(60).collect();
                eprintln!("{:>2}  {:>8.2}  {}", candidate.shift, candidate.score, preview.replace('\n', " "));
            }
            let best = &ranked[0];
            eprintln!("Detected shift: {}", best.shift);
            io.write(&best.text)
        }
    }
}
