// passforge: generate a password candidate list from seed words.
//
// Usage:
//   passforge [OPTIONS] [WORDS]...
//
// Examples:
//   passforge anna 1990-02-14 -o capitalize,leet
//   passforge -f profile.txt -o upper -o char --cap 6 --output list.txt
//   passforge rex luna --count

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::debug;

use passforge_engine::config::{DEFAULT_CAP, DEFAULT_MAX_CANDIDATES};
use passforge_cli::OutputMode;
use passforge_engine::{Engine, GeneratorConfig};

/// Generate password candidates by mutating and combining seed words.
#[derive(Parser, Debug)]
#[command(name = "passforge", version)]
#[command(about = "Generate password candidates by mutating and combining seed words")]
struct Args {
    /// Seed words (names, dates as YYYY-MM-DD, ...)
    words: Vec<String>,

    /// Read additional seed words from a file, one per line ("-" for stdin)
    #[arg(long, short = 'f')]
    file: Vec<PathBuf>,

    /// Mutation option (repeatable or comma-separated):
    /// upper, lower, capitalize, accent, leet, char, allChar
    #[arg(long = "option", short = 'o')]
    options: Vec<String>,

    /// Growth cap: candidates combine at most min(tokens, cap) - 1 tokens
    #[arg(long, default_value_t = DEFAULT_CAP)]
    cap: usize,

    /// Refuse to run when more candidates than this would be generated
    #[arg(long, default_value_t = DEFAULT_MAX_CANDIDATES, conflicts_with = "no_limit")]
    max_candidates: u64,

    /// Disable the candidate limit
    #[arg(long)]
    no_limit: bool,

    /// Drop repeated candidates, keeping the first occurrence
    /// (remembers every candidate written, so memory grows with the output)
    #[arg(long, short = 'u')]
    unique: bool,

    /// Print the exact candidate count and exit
    #[arg(long)]
    count: bool,

    /// Print the mutated token set instead of candidates
    #[arg(long)]
    show_tokens: bool,

    /// Write output to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log pipeline progress to stderr (overridden by PASSFORGE_LOG)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    passforge_cli::init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut words = args.words;
    for path in &args.file {
        words.extend(passforge_cli::read_seed_file(path)?);
    }
    if words.is_empty() {
        bail!("no seed words given (pass WORDS or --file)");
    }

    let options = passforge_cli::parse_options(&args.options)
        .with_context(|| format!("valid options are: {}", passforge_cli::option_names()))?;

    let max_candidates = (!args.no_limit).then_some(args.max_candidates);
    let config = GeneratorConfig::default()
        .with_cap(args.cap)
        .with_max_candidates(max_candidates);
    let engine = Engine::new().with_options(options).with_config(config);

    let run = engine.prepare(&words)?;
    let mode = if args.show_tokens {
        OutputMode::Tokens
    } else if args.count {
        OutputMode::Count
    } else {
        OutputMode::Candidates { unique: args.unique }
    };
    debug!(%options, ?mode, "prepared run");

    passforge_cli::emit(&run, &config, mode, || open_output(args.output.as_ref()))?;
    Ok(())
}

fn open_output(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
