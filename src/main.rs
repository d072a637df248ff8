/// Main entry point for the headache diary CLI
///
/// This file sets up logging, parses command line arguments, and forwards
/// the chosen command to the diary operations. The CLI is a thin
/// presentation layer: date validation, storage and report formatting all
/// live in the library.

use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use headache_diary::{
    edit_entry, export_report, run_report, save_entry, DiarySession, EditEntryParams, ExportParams,
    FilterKind, ReportParams, SaveEntryParams, REPORT_WINDOW_DAYS,
};

/// Get the default database path with a fallback strategy
fn default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let potential_dirs = [
        dirs::home_dir().map(|p| p.join(".headache_diary")),
        dirs::data_dir().map(|p| p.join("headache_diary")),
        std::env::current_dir().ok(),
    ];

    for dir in potential_dirs.iter().flatten() {
        if std::fs::create_dir_all(dir).is_ok() {
            return Ok(dir.join("headache_diary.db"));
        }
    }

    Err("could not find a writable location for the diary database".into())
}

/// Report filter selection, matching the stock filter list
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    /// Last 31 days
    #[value(name = "last31")]
    Last31,
    /// This month
    Month,
    /// Everything
    All,
}

impl FilterArg {
    fn kind(self) -> FilterKind {
        match self {
            FilterArg::Last31 => FilterKind::LastDays(REPORT_WINDOW_DAYS),
            FilterArg::Month => FilterKind::ThisMonth,
            FilterArg::All => FilterKind::Everything,
        }
    }
}

impl std::fmt::Display for FilterArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

/// Command line arguments for the headache diary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a headache entry for a day
    Log {
        /// Date of the entry (YYYY-MM-DD); defaults to yesterday
        #[arg(long)]
        date: Option<String>,
        /// Headache intensity: 0 none, 1 weak, 2 medium, 3 strong
        #[arg(short, long, default_value_t = 1)]
        intensity: i64,
        /// Mark the headache as connected to migraine
        #[arg(long)]
        migraine: bool,
        /// Mark that medicine was taken
        #[arg(long)]
        medicine: bool,
        /// Free-text comment for the day
        #[arg(short, long)]
        comment: Option<String>,
    },
    /// Overwrite the recorded values of an existing entry
    Edit {
        /// Date of the entry to edit (YYYY-MM-DD)
        date: String,
        /// Headache intensity: 0 none, 1 weak, 2 medium, 3 strong
        #[arg(short, long)]
        intensity: i64,
        /// Mark the headache as connected to migraine
        #[arg(long)]
        migraine: bool,
        /// Mark that medicine was taken
        #[arg(long)]
        medicine: bool,
        /// Free-text comment for the day
        #[arg(short, long)]
        comment: Option<String>,
    },
    /// List recorded entries for a chosen filter
    Report {
        #[arg(short, long, value_enum, default_value_t = FilterArg::Last31)]
        filter: FilterArg,
        /// Show the most recent entries first
        #[arg(long)]
        newest_first: bool,
        /// Emit the report as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Write the filtered report to a text file
    Export {
        #[arg(short, long, value_enum, default_value_t = FilterArg::Last31)]
        filter: FilterArg,
        /// Show the most recent entries first
        #[arg(long)]
        newest_first: bool,
        /// Destination file path
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("headache_diary={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let session = DiarySession::open(db_path)?;
    let today = Local::now().date_naive();

    match args.command {
        Command::Log {
            date,
            intensity,
            migraine,
            medicine,
            comment,
        } => {
            let params = SaveEntryParams {
                date,
                intensity,
                migraine,
                medicine,
                comment,
            };
            let response = save_entry(session.storage(), params, today)?;
            println!("{}", response.message);
        }
        Command::Edit {
            date,
            intensity,
            migraine,
            medicine,
            comment,
        } => {
            let params = EditEntryParams {
                date,
                intensity,
                migraine,
                medicine,
                comment,
            };
            let response = edit_entry(session.storage(), params)?;
            println!("{}", response.message);
        }
        Command::Report {
            filter,
            newest_first,
            json,
        } => {
            let params = ReportParams {
                filter: filter.kind(),
                newest_first,
            };
            let response = run_report(session.storage(), params, today)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                for record in &response.records {
                    println!("{}", record.date_key());
                    println!("  Intensity: {}", record.intensity.label());
                    println!("  Migraine:  {}", if record.migraine { "yes" } else { "no" });
                    println!("  Medicine:  {}", if record.medicine { "yes" } else { "no" });
                    if let Some(comment) = &record.comment {
                        println!("  Comment:   {}", comment);
                    }
                }
                println!("{}", response.message);
            }
        }
        Command::Export {
            filter,
            newest_first,
            output,
        } => {
            let params = ExportParams {
                filter: filter.kind(),
                newest_first,
                path: output,
            };
            let response = export_report(
                session.storage(),
                params,
                today,
                Local::now().naive_local(),
            )?;
            println!("{}", response.message);
        }
    }

    Ok(())
}
