use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wordsearch_protocol::{
    normalize_words, serialize_json, PuzzleFile, PuzzleFormat, SolveReport,
};
use wordsearch_search::Solver;

mod flags;
mod report;

use flags::{CaseFlag, OutputFormat};
pub use report::render_text_report;

const BUILTIN_DEMO: &str = include_str!("../../../puzzles/demo.toml");

#[derive(Parser)]
#[command(name = "wordsearch")]
#[command(about = "Find words in a letter grid, in all eight directions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle file (or the built-in demo) and print the report
    Solve(SolveArgs),

    /// Print the JSON schema of puzzle files and solve reports
    Schema(SchemaArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Puzzle file (.toml or .json); the built-in demo is used when omitted
    #[arg(env = "WORDSEARCH_PUZZLE")]
    puzzle: Option<PathBuf>,

    /// Word to search for (repeatable); replaces the puzzle's word list
    #[arg(short, long = "word")]
    words: Vec<String>,

    /// Case normalization for words (defaults to the puzzle's setting)
    #[arg(long, value_enum)]
    case: Option<CaseFlag>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct SchemaArgs {
    /// Pretty-print the schema
    #[arg(long)]
    pretty: bool,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON consumers.
    if let Commands::Solve(args) = &cli.command {
        if args.format == OutputFormat::Json {
            cli.quiet = true;
        }
    }
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Solve(args) => run_solve(args),
        Commands::Schema(args) => run_schema(args),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn load_puzzle(path: Option<&PathBuf>) -> Result<PuzzleFile> {
    match path {
        Some(path) => {
            log::debug!("Loading puzzle from {}", path.display());
            PuzzleFile::load(path)
        }
        None => {
            log::debug!("No puzzle given, using the built-in demo");
            PuzzleFile::parse(BUILTIN_DEMO, PuzzleFormat::Toml).context("Built-in demo puzzle")
        }
    }
}

fn run_solve(args: SolveArgs) -> Result<()> {
    let puzzle = load_puzzle(args.puzzle.as_ref())?;
    let case = args.case.map_or(puzzle.case, CaseFlag::as_domain);
    let words = if args.words.is_empty() {
        normalize_words(puzzle.words.as_slice(), case)
    } else {
        normalize_words(args.words.as_slice(), case)
    };
    if words.is_empty() {
        log::warn!("No words to search for");
    }

    let grid = puzzle.grid();
    let solution = Solver::new(&grid)
        .solve(words.as_slice())
        .context("Failed to solve puzzle")?;
    let report = SolveReport::build(words.as_slice(), &solution);

    match args.format {
        OutputFormat::Text => print!("{}", render_text_report(&report)),
        OutputFormat::Json => println!("{}", serialize_json(&report, args.pretty)?),
    }
    Ok(())
}

fn run_schema(args: SchemaArgs) -> Result<()> {
    let schema = serde_json::json!({
        "puzzle": schemars::schema_for!(PuzzleFile),
        "report": schemars::schema_for!(SolveReport),
    });
    println!("{}", serialize_json(&schema, args.pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn builtin_demo_parses() {
        let puzzle = load_puzzle(None).expect("demo");
        assert_eq!(puzzle.grid().row_count(), 12);
        assert_eq!(puzzle.normalized_words().len(), 13);
    }

    #[test]
    fn word_flag_is_repeatable() {
        let cli = Cli::try_parse_from([
            "wordsearch", "solve", "p.toml", "-w", "abc", "--word", "def", "--case", "preserve",
        ])
        .expect("parse");
        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.words, vec!["abc", "def"]);
        assert!(matches!(args.case, Some(CaseFlag::Preserve)));
        assert_eq!(args.format, OutputFormat::Text);
    }
}
