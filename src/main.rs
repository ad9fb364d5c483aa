mod alignment;
mod compare;
mod config;
mod error;
mod inspector;
mod loader;
mod logging;
mod sampler;
mod table;
mod tokenizer;
mod types;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use colored::control;
use tracing::info;

use config::{DisplayConfig, InputSource, JsonKeys, DEFAULT_DISPLAY_WIDTH, DEFAULT_NSAMP};
use error::Result;

/// Side-by-side inspection of machine translation output.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, propagate_version = true)]
struct Cli {
    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Never colour the output, even on a terminal
    #[arg(long, global = true)]
    no_color: bool,

    /// Total table width in characters
    #[arg(long, global = true, env = "MT_INSPECT_WIDTH", default_value_t = DEFAULT_DISPLAY_WIDTH)]
    width: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show randomly chosen records as stacked source/reference/hypothesis tables
    #[command(name = "inspect_translations")]
    InspectTranslations(InspectTranslationsArgs),

    /// Show one record token by token
    #[command(name = "inspect_sentence")]
    InspectSentence(InspectSentenceArgs),

    /// Compare several hypothesis files token by token for one record
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    #[arg(long)]
    source: Option<PathBuf>,
    #[arg(long)]
    reference: Option<PathBuf>,
    #[arg(long)]
    hypothesis: Option<PathBuf>,

    /// Read records from a JSON-lines file instead of three line files
    #[arg(long)]
    json_mode: bool,
    #[arg(long)]
    json_file: Option<PathBuf>,
    #[arg(long, default_value = "source")]
    json_source_key: String,
    #[arg(long, default_value = "reference")]
    json_reference_key: String,
    #[arg(long, default_value = "hypothesis")]
    json_hypothesis_key: String,
}

impl InputArgs {
    fn into_input(self) -> Result<InputSource> {
        let keys = JsonKeys {
            source: self.json_source_key,
            reference: self.json_reference_key,
            hypothesis: self.json_hypothesis_key,
        };
        InputSource::resolve(
            self.json_mode,
            self.json_file,
            keys,
            self.source,
            self.reference,
            self.hypothesis,
        )
    }
}

#[derive(Args, Debug)]
struct InspectTranslationsArgs {
    /// Number of records to show
    #[arg(long, env = "NSAMP", default_value_t = DEFAULT_NSAMP)]
    nsamp: usize,

    /// Seed for a reproducible sample order
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args, Debug)]
struct InspectSentenceArgs {
    /// Record index; negative values count from the end
    #[arg(long, allow_negative_numbers = true)]
    index: i64,

    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Record index; negative values count from the end
    #[arg(long, allow_negative_numbers = true)]
    index: i64,
    #[arg(long)]
    source: PathBuf,
    #[arg(long)]
    reference: PathBuf,
    /// Hypothesis files, one column each
    hypothesis_files: Vec<PathBuf>,
}

fn execute<W: Write>(command: Commands, display: &DisplayConfig, out: &mut W) -> Result<()> {
    match command {
        Commands::InspectTranslations(args) => {
            let input = args.input.into_input()?;
            let records = loader::load(&input)?;
            info!(records = records.len(), "loaded records");
            let mut rng = sampler::make_rng(args.seed);
            sampler::inspect_translations(&records, args.nsamp, &mut rng, display, out)
        }
        Commands::InspectSentence(args) => {
            let input = args.input.into_input()?;
            let records = loader::load(&input)?;
            info!(records = records.len(), "loaded records");
            inspector::inspect_sentence(&records, args.index, display, out)
        }
        Commands::Compare(args) => {
            let records =
                loader::load_multi(&args.source, &args.reference, &args.hypothesis_files)?;
            info!(
                records = records.len(),
                systems = args.hypothesis_files.len(),
                "loaded records"
            );
            compare::compare(&records, args.index, &args.hypothesis_files, display, out)
        }
    }
}

fn run(cli: Cli, display: &DisplayConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    execute(cli.command, display, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if cli.no_color {
        control::set_override(false);
    }
    logging::init_logging(cli.verbose, cli.quiet);

    let color = control::SHOULD_COLORIZE.should_colorize();
    let display = DisplayConfig {
        width: cli.width,
        color,
    };
    match run(cli, &display) {
        Ok(()) => {}
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            eprintln!("{}", error::format_error(&e, color));
            process::exit(e.exit_code());
        }
    }
}
