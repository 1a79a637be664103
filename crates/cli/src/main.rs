#![warn(clippy::pedantic)]

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use ::log::{LevelFilter, info, warn};
use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use fitplan_domain::{
    ArtifactSink, Catalog, ExportFormat, GeneratedPlan, Mode, Muscle, PlanID, PlanRepository,
    StaticCatalog,
};
use fitplan_storage::{catalog::load_catalog_file, export::export, file_system::FileStorage};
use uuid::Uuid;

use crate::{
    goals::GoalArgs,
    log::Repository,
    settings::{Settings, read_settings, write_settings},
};

mod goals;
mod log;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "fitplan")]
#[command(author, version, about = "Generate weekly training plans")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory for saved plans, settings and log
    #[arg(long, global = true, env = "FITPLAN_DATA_DIR", default_value = ".fitplan")]
    data_dir: PathBuf,

    /// JSON exercise catalog used instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a plan from questionnaire answers
    Generate {
        #[command(flatten)]
        goals: GoalArgs,

        /// Save the plan
        #[arg(long)]
        save: bool,

        /// Export the plan in the given format (json, csv, txt)
        #[arg(long, value_name = "FORMAT")]
        export: Option<ExportFormat>,
    },

    /// List saved plans
    List,

    /// Show a saved plan
    Show { id: Uuid },

    /// Export a saved plan
    Export {
        id: Uuid,

        /// Export format, the configured default format if omitted
        #[arg(long)]
        format: Option<ExportFormat>,
    },

    /// Delete a saved plan
    Delete { id: Uuid },

    /// List the exercises of a muscle
    Exercises {
        /// Muscle key (e.g., "chest", "lower_back")
        muscle: Muscle,

        /// Only exercises available in this mode
        #[arg(long)]
        mode: Option<Mode>,
    },

    /// Show or change settings
    Settings {
        /// Default export format
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Directory for exported plans
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Log level (off, error, warn, info, debug, trace)
        #[arg(long)]
        log_level: Option<LevelFilter>,
    },

    /// Show recent log messages
    Log,
}

#[allow(clippy::too_many_lines)]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let storage = FileStorage::new(&cli.data_dir);
    let settings = read_settings(&storage)
        .with_context(|| format!("failed to read settings from {}", cli.data_dir.display()))?;

    log::init(
        Arc::new(Mutex::new(storage.clone())),
        log_level(settings.log_level, cli.verbose),
    )
    .context("failed to initialize logger")?;

    let storage = match &settings.output_dir {
        Some(output_dir) => storage.with_export_dir(output_dir),
        None => storage,
    };

    match cli.command {
        Command::Generate {
            goals,
            save,
            export: format,
        } => {
            let catalog = catalog(cli.catalog.as_deref())?;
            let (profile, goals) = goals.resolve()?;
            let plan = fitplan_domain::generate_plan(catalog.as_ref(), &profile, &goals);
            print!("{}", fitplan_domain::export_text(&plan));

            if plan.stats.total_exercises == 0 {
                warn!("no exercise matches the given goals");
            }
            if save {
                let saved_plan = storage
                    .create_plan(plan.clone())
                    .context("failed to save plan")?;
                println!("\nSaved plan {}", saved_plan.id);
            }
            if let Some(format) = format {
                export_plan(&storage, &plan, format)?;
            }
        }

        Command::List => {
            let plans = storage.read_plans().context("failed to read plans")?;
            if plans.is_empty() {
                println!("No saved plans");
            }
            for saved_plan in plans {
                let plan = &saved_plan.plan;
                println!(
                    "{} | {} | {:30} | {} days | {} exercises",
                    saved_plan.id,
                    plan.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
                    plan.name,
                    plan.stats.days_per_week,
                    plan.stats.total_exercises
                );
            }
        }

        Command::Show { id } => {
            let saved_plan = read_plan(&storage, id)?;
            print!("{}", fitplan_domain::export_text(&saved_plan.plan));
        }

        Command::Export { id, format } => {
            let saved_plan = read_plan(&storage, id)?;
            export_plan(
                &storage,
                &saved_plan.plan,
                format.unwrap_or(settings.default_format),
            )?;
        }

        Command::Delete { id } => {
            match storage.delete_plan(PlanID::from(id)) {
                Ok(id) => println!("Deleted plan {id}"),
                Err(fitplan_domain::DeleteError::NotFound) => bail!("plan {id} not found"),
                Err(err) => return Err(err).context("failed to delete plan"),
            }
        }

        Command::Exercises { muscle, mode } => {
            let catalog = catalog(cli.catalog.as_deref())?;
            let exercises = match mode {
                Some(mode) => fitplan_domain::browse(catalog.as_ref(), muscle, mode),
                None => catalog.lookup(muscle).iter().collect(),
            };
            println!("{} ({} exercises)", muscle.name(), exercises.len());
            for exercise in exercises {
                println!(
                    "{:40} | {:16} | {:16} | {}",
                    exercise.name,
                    exercise.difficulty.name(),
                    exercise.equipment.map_or("-", |e| e.name()),
                    exercise
                        .modes
                        .iter()
                        .map(|m| m.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }

        Command::Settings {
            format,
            output_dir,
            log_level,
        } => {
            let mut settings = settings;
            let changed = format.is_some() || output_dir.is_some() || log_level.is_some();
            if let Some(format) = format {
                settings.default_format = format;
            }
            if let Some(output_dir) = output_dir {
                settings.output_dir = Some(output_dir);
            }
            if let Some(log_level) = log_level {
                settings.log_level = log_level;
            }
            if changed {
                write_settings(&storage, &settings).context("failed to write settings")?;
                info!("settings updated");
            }
            print_settings(&settings, &cli.data_dir);
        }

        Command::Log => {
            let entries = storage.read_entries().context("failed to read log")?;
            for entry in entries.iter().rev() {
                println!("{} {:<5} {}", entry.time, entry.level, entry.message);
            }
        }
    }

    Ok(())
}

/// Each `-v` raises the configured level by one step.
fn log_level(configured: LevelFilter, verbose: u8) -> LevelFilter {
    let levels = LevelFilter::iter().collect::<Vec<_>>();
    let index = levels
        .iter()
        .position(|level| *level == configured)
        .unwrap_or_default()
        + usize::from(verbose);
    levels
        .get(index)
        .or(levels.last())
        .copied()
        .unwrap_or(LevelFilter::Trace)
}

fn catalog(path: Option<&Path>) -> Result<Box<dyn Catalog>> {
    match path {
        Some(path) => {
            let catalog = load_catalog_file(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?;
            info!("using catalog {}", path.display());
            Ok(Box::new(catalog))
        }
        None => Ok(Box::new(StaticCatalog)),
    }
}

fn read_plan(storage: &FileStorage, id: Uuid) -> Result<fitplan_domain::SavedPlan> {
    match storage.read_plan(PlanID::from(id)) {
        Ok(saved_plan) => Ok(saved_plan),
        Err(fitplan_domain::ReadError::NotFound) => bail!("plan {id} not found"),
        Err(err) => Err(err).context("failed to read plan"),
    }
}

fn export_plan(storage: &FileStorage, plan: &GeneratedPlan, format: ExportFormat) -> Result<()> {
    let artifact =
        export(plan, format, Local::now().date_naive()).context("failed to export plan")?;
    storage
        .write_artifact(&artifact)
        .context("failed to write export")?;
    println!("Exported {}", storage.export_path(&artifact).display());
    Ok(())
}

fn print_settings(settings: &Settings, data_dir: &Path) {
    println!("default format: {}", settings.default_format);
    println!(
        "output dir:     {}",
        settings
            .output_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("exports"))
            .display()
    );
    println!("log level:      {}", settings.log_level);
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(LevelFilter::Warn, 0, LevelFilter::Warn)]
    #[case(LevelFilter::Warn, 1, LevelFilter::Info)]
    #[case(LevelFilter::Warn, 2, LevelFilter::Debug)]
    #[case(LevelFilter::Warn, 5, LevelFilter::Trace)]
    #[case(LevelFilter::Off, 1, LevelFilter::Error)]
    #[case(LevelFilter::Trace, 1, LevelFilter::Trace)]
    fn test_log_level(
        #[case] configured: LevelFilter,
        #[case] verbose: u8,
        #[case] expected: LevelFilter,
    ) {
        assert_eq!(log_level(configured, verbose), expected);
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "fitplan",
            "generate",
            "--style",
            "bodybuilding",
            "--frequency",
            "6-7",
            "--save",
            "--export",
            "csv",
            "--data-dir",
            "/tmp/fitplan",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, PathBuf::from("/tmp/fitplan"));
        let Command::Generate {
            goals,
            save,
            export,
        } = cli.command
        else {
            panic!("unexpected command");
        };
        assert_eq!(goals.style, Some(String::from("bodybuilding")));
        assert_eq!(goals.frequency, Some(String::from("6-7")));
        assert!(save);
        assert_eq!(export, Some(ExportFormat::Csv));
    }

    #[test]
    fn test_parse_exercises() {
        let cli =
            Cli::try_parse_from(["fitplan", "exercises", "lower_back", "--mode", "pilates"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Command::Exercises {
                muscle: Muscle::LowerBack,
                mode: Some(Mode::Pilates)
            }
        ));
    }

    #[test]
    fn test_parse_settings() {
        let cli = Cli::try_parse_from(["fitplan", "settings", "--log-level", "debug"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Settings {
                format: None,
                output_dir: None,
                log_level: Some(LevelFilter::Debug)
            }
        ));
    }

    #[rstest]
    #[case(&["fitplan", "exercises", "neck"])]
    #[case(&["fitplan", "export", "not-a-uuid"])]
    #[case(&["fitplan", "settings", "--format", "pdf"])]
    #[case(&["fitplan", "settings", "--log-level", "loud"])]
    fn test_parse_invalid(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_catalog_default() {
        let catalog = catalog(None).unwrap();
        assert!(!catalog.lookup(Muscle::Chest).is_empty());
    }
}
