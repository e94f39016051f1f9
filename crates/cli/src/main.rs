//! Seed search CLI.
//!
//! This binary runs the fixed register machine and its seed search. It provides:
//! 1. **Search:** With no arguments, find the smallest seed that makes the machine print its own program.
//! 2. **Run:** Print the output digits of one seed.
//! 3. **Disasm:** Print the fixed program.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quinesearch_core::common::{ConfigError, SearchError};
use quinesearch_core::config::{SearchConfig, Strategy};
use quinesearch_core::machine::{Machine, PROGRAM};
use quinesearch_core::search::{NullReporter, Outcome, Searcher, WriteReporter};

#[derive(Parser, Debug)]
#[command(
    name = "quinesearch",
    author,
    version,
    about = "Seed search for a fixed three-register machine",
    long_about = "Find the value of register A that makes the fixed program print a target digit sequence.\n\nWith no subcommand the digit search runs against the default target.\n\nExamples:\n  quinesearch\n  quinesearch search --strategy scan --trace\n  quinesearch run 202972175280682\n  quinesearch --config target.json search"
)]
struct Cli {
    /// JSON search configuration (target, ceiling, strategy).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print search statistics after the result.
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for a seed whose output equals the target.
    Search {
        /// Search strategy: `digits` or `scan`.
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Exclusive upper bound on the scan cursor.
        #[arg(long)]
        ceiling: Option<u64>,

        /// Print every simulated candidate.
        #[arg(long)]
        trace: bool,
    },

    /// Run the machine on one seed and print its output.
    Run {
        /// Initial value of register A.
        seed: u64,

        /// Print the final registers and iteration count.
        #[arg(long)]
        regs: bool,
    },

    /// Print the fixed program.
    Disasm,
}

/// Exit code when the search finds a seed.
const EXIT_FOUND: i32 = 0;
/// Exit code when the search finishes without a seed.
const EXIT_NOT_FOUND: i32 = 1;
/// Exit code for configuration and I/O failures.
const EXIT_ERROR: i32 = 2;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let code = match cli.command {
        Some(Commands::Run { seed, regs }) => cmd_run(seed, regs),
        Some(Commands::Disasm) => cmd_disasm(),
        Some(Commands::Search {
            strategy,
            ceiling,
            trace,
        }) => cmd_search(cli.config, strategy, ceiling, trace, cli.stats),
        None => cmd_search(cli.config, None, None, false, cli.stats),
    };
    process::exit(code);
}

/// Loads the configuration file if given, then applies flag overrides.
fn load_config(
    path: Option<PathBuf>,
    strategy: Option<Strategy>,
    ceiling: Option<u64>,
) -> Result<SearchConfig, ConfigError> {
    let mut config = match path {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };
    if let Some(strategy) = strategy {
        config.strategy = strategy;
    }
    if let Some(ceiling) = ceiling {
        config.ceiling = ceiling;
    }
    config.validate()?;
    tracing::debug!(
        strategy = %config.strategy,
        ceiling = config.ceiling,
        target = ?config.target,
        "resolved search config"
    );
    Ok(config)
}

/// Maps a search result to the process exit code.
fn exit_code(result: &Result<Outcome, SearchError>) -> i32 {
    match result {
        Ok(Outcome::Found(_)) => EXIT_FOUND,
        Ok(Outcome::NotFound | Outcome::Exhausted { .. }) => EXIT_NOT_FOUND,
        Err(_) => EXIT_ERROR,
    }
}

/// Runs the configured search and prints the seed.
fn cmd_search(
    path: Option<PathBuf>,
    strategy: Option<Strategy>,
    ceiling: Option<u64>,
    trace: bool,
    stats: bool,
) -> i32 {
    let config = match load_config(path, strategy, ceiling) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[!] {e}");
            return EXIT_ERROR;
        }
    };
    let mut searcher = match Searcher::new(&config) {
        Ok(searcher) => searcher,
        Err(e) => {
            eprintln!("[!] {e}");
            return EXIT_ERROR;
        }
    };

    let stdout = io::stdout();
    let result = if trace {
        let mut reporter = WriteReporter::new(BufWriter::new(stdout.lock()));
        let result = searcher.run(&mut reporter);
        let flushed = flush_reporter(reporter);
        result.and_then(|outcome| flushed.map(|()| outcome))
    } else {
        searcher.run(&mut NullReporter)
    };

    match &result {
        Ok(Outcome::Found(seed)) => println!("{seed}"),
        Ok(outcome) => eprintln!("[*] {outcome}"),
        Err(e) => eprintln!("[!] {e}"),
    }
    let code = exit_code(&result);
    tracing::debug!(code, "search finished");

    if stats {
        searcher.stats().print();
    }
    code
}

fn flush_reporter<W: Write>(reporter: WriteReporter<W>) -> Result<(), SearchError> {
    reporter.into_inner().flush()?;
    Ok(())
}

/// Prints the comma-joined output of one seed.
fn cmd_run(seed: u64, regs: bool) -> i32 {
    let mut machine = Machine::new(seed);
    let output = machine
        .run()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",");
    println!("{output}");
    if regs {
        println!(
            "{}  iterations={}",
            machine.registers(),
            machine.iterations()
        );
    }
    0
}

fn cmd_disasm() -> i32 {
    for (idx, op) in PROGRAM.iter().enumerate() {
        let [opcode, operand] = op.encode();
        println!("{idx:>2}:  {opcode},{operand}  {op}");
    }
    0
}
