use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use contact_rank::contact::{ContactTable, DEFAULT_INPUT_FILE};
use contact_rank::scoring::Scorer;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_SCHEMA: i32 = 2;
const EXIT_OUTPUT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank contacts and write the contact plan (default if no subcommand)
    Rank {
        /// Contact CSV file
        #[arg(default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,

        /// Output CSV file (defaults to contact_plan.csv next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the top N ranked contacts with their scores
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },
    /// Show how each contact was scored without writing anything
    Explain {
        /// Contact CSV file
        #[arg(default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,

        /// Only show the top N contacts
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the built-in scoring tables to a config file
    Init {
        /// Where to write the config (defaults to ~/.config/contact-rank/config.yaml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "contact-rank")]
#[command(about = "Rank CSV contacts by sales relevance", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/contact-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Rank {
        input: PathBuf::from(DEFAULT_INPUT_FILE),
        output: None,
        top: None,
    });
    let start_time = Instant::now();

    let command = match command {
        Commands::Init { path, force } => run_init(path, force),
        other => other,
    };

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match contact_rank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.effective_scoring();
    if let Err(errors) = contact_rank::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    if let Some(warning) = contact_rank::scoring::weight_sum_warning(&scoring) {
        log::warn!("{}", warning);
    }
    let scorer = Scorer::from_config(&scoring);

    match command {
        Commands::Rank { input, output, top } => {
            let table = load_contacts(&input);
            let output =
                output.unwrap_or_else(|| contact_rank::contact::default_output_path(&input));

            let ContactTable { headers, records } = table;
            let ranked = contact_rank::ranking::rank_scored(records, &scorer);
            report_defaults(&ranked);

            if let Some(n) = top {
                let use_colors = contact_rank::output::should_use_colors();
                let shown = &ranked[..n.min(ranked.len())];
                println!(
                    "{}",
                    contact_rank::output::format_ranked_table(shown, use_colors)
                );
            }

            let plan = ContactTable::new(headers, contact_rank::ranking::strip_scores(ranked));
            if let Err(e) = contact_rank::contact::write_contacts(&output, &plan) {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_OUTPUT);
            }

            log::info!(
                "Ranked {} contacts in {}",
                plan.records.len(),
                humantime::format_duration(start_time.elapsed())
            );
            println!(
                "Ranked {} contacts. Contact plan written to {}",
                plan.records.len(),
                output.display()
            );
        }
        Commands::Explain { input, top, json } => {
            let table = load_contacts(&input);
            let ranked = contact_rank::ranking::rank_scored(table.records, &scorer);
            report_defaults(&ranked);
            let shown = &ranked[..top.unwrap_or(ranked.len()).min(ranked.len())];

            if json {
                match contact_rank::output::format_json(shown) {
                    Ok(output) => println!("{}", output),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_OUTPUT);
                    }
                }
            } else if shown.is_empty() {
                println!("No contacts found.");
            } else {
                let use_colors = contact_rank::output::should_use_colors();
                for scored in shown {
                    println!(
                        "{}",
                        contact_rank::output::format_breakdown(
                            scored,
                            scorer.weights(),
                            use_colors,
                        )
                    );
                    println!();
                }
            }

            log::info!(
                "Explained {} of {} contacts in {}",
                shown.len(),
                ranked.len(),
                humantime::format_duration(start_time.elapsed())
            );
        }
        Commands::Init { .. } => unreachable!("init is handled before config loading"),
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Write the default config and exit; needs no config of its own.
fn run_init(path: Option<PathBuf>, force: bool) -> ! {
    match contact_rank::config::write_default_config(path, force) {
        Ok(path) => {
            println!("Config written to {}", path.display());
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

/// Initialize `env_logger`: warnings by default, debug with --verbose, RUST_LOG wins.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Read the contact file and check its columns, exiting on failure.
fn load_contacts(input: &Path) -> ContactTable {
    let table = match contact_rank::contact::read_contacts(input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if let Err(e) = table.check_schema() {
        eprintln!("Schema error in {}: {:#}", input.display(), e);
        std::process::exit(EXIT_SCHEMA);
    }

    log::debug!(
        "Loaded {} contacts with columns: {}",
        table.records.len(),
        table.headers.join(", ")
    );
    table
}

/// Log how many contacts fell back to default values or scores.
fn report_defaults(ranked: &[contact_rank::ranking::ScoredContact]) {
    let defaulted = ranked
        .iter()
        .filter(|c| !c.normalized.defaulted.is_empty())
        .count();
    let unrecognized = ranked
        .iter()
        .filter(|c| !c.result.unrecognized.is_empty())
        .count();
    log::info!(
        "{} contacts had missing values, {} had values outside the scoring tables",
        defaulted,
        unrecognized
    );
}
