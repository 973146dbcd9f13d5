//! Weightwise CLI - calorie and weight tracking toward a goal.

mod render;

use std::path::PathBuf;
use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use weightwise_core::{FoodEntry, GoalDraft, GoalMode, WeightEntry, WeightUnit};
use weightwise_progress::{BasicProgressTracker, GoalEditor, GoalSummary, ProgressTracker};
use weightwise_storage::{JsonStorage, Storage};

#[derive(Parser)]
#[command(name = "weightwise")]
#[command(about = "Track food, weight and progress toward a weight goal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Storage path for Weightwise data
    #[arg(short, long, default_value = ".weightwise", global = true)]
    storage: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the weight goal
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Log and review weigh-ins
    Weight {
        #[command(subcommand)]
        command: WeightCommands,
    },
    /// Log and review food
    Food {
        #[command(subcommand)]
        command: FoodCommands,
    },
    /// Show or update profile settings
    Profile {
        /// Unit system (kg or lb)
        #[arg(long)]
        unit: Option<WeightUnit>,
        /// Daily calorie budget
        #[arg(long)]
        budget: Option<u32>,
    },
    /// Dashboard: goal progress, projection and today's intake
    Status,
}

#[derive(Subcommand)]
enum GoalCommands {
    /// Replace the current goal
    Set {
        /// lose, maintain or gain
        #[arg(long, value_parser = parse_mode)]
        mode: GoalMode,
        /// Starting weight
        #[arg(long)]
        start: f64,
        /// Target weight (defaults to the start weight for maintenance)
        #[arg(long)]
        target: Option<f64>,
        /// Daily calorie deficit or surplus, in kcal
        #[arg(long, default_value = "0")]
        rate: u32,
        /// Only show the projection, do not save
        #[arg(long)]
        preview: bool,
    },
    /// Show the current goal
    Show,
    /// List every goal that has been set
    History,
}

#[derive(Subcommand)]
enum WeightCommands {
    /// Log a weigh-in (replaces any entry for the same day)
    Log {
        /// Weight in the profile's unit
        weight: f64,
        /// Day of the weigh-in (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List weigh-ins, newest first
    List {
        /// Maximum number of entries
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Remove the weigh-in for a day
    Remove {
        /// Day to remove (YYYY-MM-DD)
        date: NaiveDate,
    },
}

#[derive(Subcommand)]
enum FoodCommands {
    /// Log a food item
    Add {
        /// What was eaten
        name: String,
        /// Energy in kcal
        calories: u32,
        /// Day (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List food logged on a day
    List {
        /// Day (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let today = Local::now().date_naive();
    let mut storage = JsonStorage::new(&cli.storage).await?;

    match cli.command {
        Commands::Goal { command } => match command {
            GoalCommands::Set { mode, start, target, rate, preview } => {
                let draft = goal_draft(mode, start, target, rate)?;

                let mut editor = GoalEditor::new(storage);
                let projection = editor.preview(&draft, today).await?;
                if preview {
                    println!("Projection: {}", render::projection(&projection));
                    return Ok(());
                }

                let goal = editor.replace_goal(draft, today).await?;
                println!("Goal set: {} ({})", goal.id, goal.mode());
                println!("Projection: {}", render::projection(&projection));
            }
            GoalCommands::Show => {
                let tracker = BasicProgressTracker::new(storage);
                match tracker.current_summary().await? {
                    Some(summary) => print_summary(&summary),
                    None => println!("No goal set"),
                }
            }
            GoalCommands::History => {
                let unit = storage.load_profile().await?.unit;
                let tracker = BasicProgressTracker::new(storage);
                let goals = tracker.goal_history().await?;

                println!("Goals ({})", goals.len());
                for goal in goals.iter().rev() {
                    println!(
                        "  {} | {} | {:<8} | {} -> {} {} | {:+} kcal/day",
                        goal.created_on,
                        goal.id,
                        goal.mode(),
                        goal.start_weight,
                        goal.target_weight,
                        unit,
                        -i64::from(goal.daily_calorie_delta),
                    );
                }
            }
        },
        Commands::Weight { command } => match command {
            WeightCommands::Log { weight, date } => {
                if !(weight.is_finite() && weight > 0.0) {
                    bail!("weight must be a positive number");
                }
                let entry = WeightEntry::new(date.unwrap_or(today), weight);
                storage.save_weight(&entry).await?;
                let unit = storage.load_profile().await?.unit;
                println!("Logged {} {} on {}", entry.weight, unit, entry.date);
            }
            WeightCommands::List { limit } => {
                let unit = storage.load_profile().await?.unit;
                let history = storage.list_weights().await?;
                println!("Weigh-ins ({})", history.len());
                for entry in history.iter().take(limit) {
                    println!("  {} | {} {}", entry.date, entry.weight, unit);
                }
            }
            WeightCommands::Remove { date } => {
                if storage.delete_weight(date).await? {
                    println!("Removed weigh-in for {}", date);
                } else {
                    println!("No weigh-in on {}", date);
                }
            }
        },
        Commands::Food { command } => match command {
            FoodCommands::Add { name, calories, date } => {
                let entry = FoodEntry::new(date.unwrap_or(today), name, calories);
                storage.save_food(&entry).await?;
                println!("Logged {} ({} kcal) on {}", entry.name, entry.calories, entry.date);
            }
            FoodCommands::List { date } => {
                let tracker = BasicProgressTracker::new(storage);
                let intake = tracker.daily_intake(date.unwrap_or(today)).await?;

                println!("Food on {} ({} kcal)", intake.date, intake.eaten);
                for entry in &intake.entries {
                    println!("  {} | {:>5} kcal | {}", entry.id, entry.calories, entry.name);
                }
                if let Some(remaining) = intake.remaining {
                    println!("Remaining budget: {} kcal", remaining);
                }
            }
        },
        Commands::Profile { unit, budget } => {
            let mut profile = storage.load_profile().await?;
            if unit.is_some() || budget.is_some() {
                if let Some(unit) = unit {
                    profile.unit = unit;
                }
                if budget.is_some() {
                    profile.daily_calorie_budget = budget;
                }
                storage.save_profile(&profile).await?;
                info!("profile updated");
            }

            println!("Unit: {}", profile.unit);
            match profile.daily_calorie_budget {
                Some(budget) => println!("Daily budget: {} kcal", budget),
                None => println!("Daily budget: not set"),
            }
        }
        Commands::Status => {
            let tracker = BasicProgressTracker::new(storage);

            println!("Weightwise Status");
            match tracker.current_summary().await? {
                Some(summary) => print_summary(&summary),
                None => println!("  No goal set"),
            }

            let intake = tracker.daily_intake(today).await?;
            match (intake.budget, intake.remaining) {
                (Some(budget), Some(remaining)) => println!(
                    "  Today: {} / {} kcal ({} remaining)",
                    intake.eaten, budget, remaining
                ),
                _ => println!("  Today: {} kcal", intake.eaten),
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &GoalSummary) {
    let unit = summary.unit;
    println!("  Goal: {} {} -> {} {}", summary.mode, summary.start_weight, summary.target_weight, unit);

    match &summary.current {
        Some(entry) => println!("  Current: {} {} ({})", entry.weight, unit, entry.date),
        None => println!("  Current: —"),
    }

    if let Some(band) = &summary.maintenance {
        println!("  Band: {}", render::band_gauge(band));
        println!("  Delta: {}", render::band_delta(band, unit));
    } else {
        println!("  Progress: {}", render::progress_bar(summary.progress.as_ref()));
    }

    println!("  Projection: {}", render::projection(&summary.projection));
}

/// Build the goal editor's draft from `goal set` arguments.
fn goal_draft(mode: GoalMode, start: f64, target: Option<f64>, rate: u32) -> Result<GoalDraft> {
    match mode {
        GoalMode::Maintain if rate != 0 => bail!("--rate is not used for a maintain goal; leave it out or pass 0"),
        GoalMode::Lose | GoalMode::Gain if rate == 0 => bail!("--rate must be above zero for a {} goal", mode),
        _ => {}
    }

    Ok(GoalDraft {
        start_weight: start,
        target_weight: target.unwrap_or(start),
        daily_calorie_delta: mode.signed_delta(rate),
    })
}

fn parse_mode(s: &str) -> Result<GoalMode, String> {
    match s.to_lowercase().as_str() {
        "lose" => Ok(GoalMode::Lose),
        "maintain" => Ok(GoalMode::Maintain),
        "gain" => Ok(GoalMode::Gain),
        other => Err(format!("unknown goal mode: {other} (expected lose, maintain or gain)")),
    }
}
