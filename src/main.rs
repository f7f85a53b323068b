use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use promise_score::config::{self, Config};
use promise_score::output;
use promise_score::ranking;
use promise_score::scoring::validate_scoring;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CardFormat {
    /// Human-readable score card
    Card,
    /// The raw score record as JSON
    Json,
    /// One tab-separated line
    Tsv,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum RankFormat {
    /// Ranked table, best score first
    Table,
    Json,
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one politician's promise data (JSON or YAML)
    Score {
        /// Data file: a list of promises or a politician record
        file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = CardFormat::Card)]
        format: CardFormat,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Score and rank several politicians, one data file each
    Rank {
        /// Data files or glob patterns (e.g. "data/*.json")
        #[arg(required = true)]
        patterns: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = RankFormat::Table)]
        format: RankFormat,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "promise-score")]
#[command(about = "Score politicians by how the community rates their promises", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/promise-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    promise_score::logging::init(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);

    let code = match cli.command {
        Commands::Init { force } => run_init(config_path, force),
        Commands::Score {
            file,
            format,
            output: output_path,
        } => match load_validated_config(config_path) {
            Ok(config) => run_score(&config, &file, format, output_path.as_deref(), cli.verbose),
            Err(code) => code,
        },
        Commands::Rank {
            patterns,
            format,
            output: output_path,
        } => match load_validated_config(config_path) {
            Ok(config) => run_rank(&config, &patterns, format, output_path.as_deref()),
            Err(code) => code,
        },
    };

    std::process::exit(code);
}

/// Load config and validate the scoring section. On failure the errors are
/// printed and the exit code is returned.
fn load_validated_config(path: Option<PathBuf>) -> Result<Config, i32> {
    let config = match config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return Err(EXIT_CONFIG);
        }
    };

    if let Err(errors) = validate_scoring(&config.effective_scoring()) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(EXIT_CONFIG);
    }

    Ok(config)
}

fn run_init(path: Option<PathBuf>, force: bool) -> i32 {
    let path = match path {
        Some(p) => p,
        None => match config::get_config_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                return EXIT_CONFIG;
            }
        },
    };

    match config::write_default_config(&path, force) {
        Ok(()) => {
            println!("Wrote default config to {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            EXIT_CONFIG
        }
    }
}

fn run_score(
    config: &Config,
    file: &Path,
    format: CardFormat,
    output_path: Option<&Path>,
    verbose: bool,
) -> i32 {
    let scored = match ranking::score_file(file, config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_INPUT;
        }
    };

    let use_colors = output_path.is_none() && output::should_use_colors();

    let rendered = match format {
        CardFormat::Card => {
            let mut card = output::format_score_card(Some(&scored.name), &scored.result, use_colors);
            if verbose && !scored.contributions.is_empty() {
                card.push_str("\n\n");
                card.push_str(&output::format_contributions(&scored.contributions));
            }
            card
        }
        CardFormat::Json => match output::format_json(&scored.result) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to render JSON: {}", e);
                return EXIT_INPUT;
            }
        },
        CardFormat::Tsv => output::format_tsv(std::slice::from_ref(&scored)),
    };

    emit(&rendered, output_path)
}

fn run_rank(
    config: &Config,
    patterns: &[String],
    format: RankFormat,
    output_path: Option<&Path>,
) -> i32 {
    let paths = match ranking::expand_patterns(patterns) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_INPUT;
        }
    };

    if paths.is_empty() {
        eprintln!("No data files matched.");
        return EXIT_INPUT;
    }

    let mut outcome = ranking::score_files(&paths, config);

    // Partial failure: report and keep going with what scored
    for (path, error) in &outcome.failures {
        eprintln!("Skipping {}: {:#}", path.display(), error);
    }

    if outcome.scored.is_empty() {
        eprintln!("No data files could be scored.");
        return EXIT_INPUT;
    }

    ranking::rank(&mut outcome.scored);

    let use_colors = output_path.is_none() && output::should_use_colors();

    let rendered = match format {
        RankFormat::Table => output::format_ranked_table(&outcome.scored, use_colors),
        RankFormat::Json => match output::format_json(&outcome.scored) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to render JSON: {}", e);
                return EXIT_INPUT;
            }
        },
        RankFormat::Tsv => output::format_tsv(&outcome.scored),
    };

    emit(&rendered, output_path)
}

fn emit(rendered: &str, output_path: Option<&Path>) -> i32 {
    match output_path {
        Some(path) => match output::write_report(path, rendered) {
            Ok(()) => {
                eprintln!("Wrote {}", path.display());
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                EXIT_INPUT
            }
        },
        None => {
            println!("{}", rendered);
            EXIT_SUCCESS
        }
    }
}
