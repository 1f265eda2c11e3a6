mod checker;
mod competition;
mod config;
mod display;
mod error;
mod events;
mod parser;
mod schedule;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{error, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use checker::find_conflicts;
use competition::{fetch_competition, load_competition, validate_competition_id, validate_input_path};
use config::StaffingConfig;
use display::{missing_judges, print_staffing_summary, print_warnings, write_assignments};
use error::StaffingError;
use parser::load_schedule;
use schedule::{assign_scramblers_and_judges, ExperiencedPool, ScheduleIndex};

const DEFAULT_CONFIG: &str = "config.json";

#[derive(Parser)]
#[command(name = "group-staffing")]
#[command(about = "Assign judges and scramblers to competition groups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build judging and scrambling assignments from a groups CSV
    Assign {
        /// Groups CSV: a `name` column plus one column per event
        #[arg(short, long)]
        input: PathBuf,

        /// Competition ID, e.g. PickeringC2023
        #[arg(short, long)]
        competition: String,

        /// Staffing config (defaults to ./config.json when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Read the public WCIF from a file instead of fetching it
        #[arg(long)]
        wcif: Option<PathBuf>,

        /// Seed for shuffling groups and the experienced pool
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Verify assignment files against the groups CSV
    Check {
        /// Groups CSV the assignments were made from
        #[arg(short, long)]
        input: PathBuf,

        /// Judging assignments (defaults to _judge_<input>)
        #[arg(long)]
        judge: Option<PathBuf>,

        /// Scrambling assignments (defaults to _scramble_<input>)
        #[arg(long)]
        scramble: Option<PathBuf>,
    },
}

/// `groups.csv` -> `<prefix>groups.csv` in the same directory
fn prefixed_path(input: &Path, prefix: &str) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", prefix, file_name))
}

async fn run_assign(
    input: PathBuf,
    competition_id: String,
    config_path: Option<PathBuf>,
    wcif: Option<PathBuf>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    validate_input_path(&input)?;
    validate_competition_id(&competition_id)?;

    let config = match config_path {
        Some(path) => StaffingConfig::load(path, true)?,
        None => StaffingConfig::load(DEFAULT_CONFIG, false)?,
    };

    let rows = load_schedule(&input)?;
    info!("Loaded {} competitors from {}", rows.len(), input.display());

    let seed = seed.unwrap_or_else(rand::random);
    info!("Shuffle seed: {} (pass --seed {} to reproduce this run)", seed, seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut index = ScheduleIndex::build(&rows, &mut rng);

    let competition = match wcif {
        Some(path) => load_competition(path)?,
        None => fetch_competition(&competition_id).await?,
    };
    info!("{} delegate name(s) excluded from assignments", competition.delegates.len());

    let mut experienced = ExperiencedPool::build(
        &index.competitors,
        &competition,
        config.experienced_competitor_starting_year,
        &mut rng,
    );
    if experienced.is_empty() {
        warn!("No experienced competitors available as fallback judges");
    } else {
        info!("{} experienced competitor(s) available as fallback judges", experienced.len());
    }

    let mut warnings =
        assign_scramblers_and_judges(&mut index, &config, &competition.delegates, &mut experienced);

    let events = index.events();
    let judge_path = prefixed_path(&input, "_judge_out_");
    let scramble_path = prefixed_path(&input, "_scramble_out_");
    write_assignments(&judge_path, &events, &index.judging)?;
    write_assignments(&scramble_path, &events, &index.scrambling)?;

    for warning in missing_judges(&index.judging, &competition.delegates) {
        warn!("{}", warning);
        warnings.push(warning);
    }

    print_staffing_summary(&index);
    print_warnings(&warnings);

    println!("\nAssignments saved to:");
    println!("  - {}", judge_path.display());
    println!("  - {}", scramble_path.display());
    Ok(())
}

fn run_check(input: PathBuf, judge: Option<PathBuf>, scramble: Option<PathBuf>) -> anyhow::Result<()> {
    validate_input_path(&input)?;

    let judge = judge.unwrap_or_else(|| prefixed_path(&input, "_judge_"));
    let scramble = scramble.unwrap_or_else(|| prefixed_path(&input, "_scramble_"));

    let schedule = load_schedule(&input)?;
    let judging = load_schedule(&judge)?;
    let scrambling = load_schedule(&scramble)?;

    let conflicts = find_conflicts(&schedule, &judging, &scrambling);
    for conflict in &conflicts {
        error!("{}", conflict);
    }
    let count = conflicts.len();
    match conflicts.into_iter().next() {
        Some(first) => Err(StaffingError::Conflicts { count, first }.into()),
        None => {
            println!("clean!");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Assign {
            input,
            competition,
            config,
            wcif,
            seed,
        } => run_assign(input, competition, config, wcif, seed).await,
        Commands::Check {
            input,
            judge,
            scramble,
        } => run_check(input, judge, scramble),
    }
}
