use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendex::cli::{
    handle_add_command, handle_chart_command, handle_export_command, handle_history_command,
    handle_import_command, handle_list_command, handle_stats_command, AddArgs, FilterArgs,
};
use spendex::config::{paths::SpendexPaths, settings::Settings};
use spendex::export::DEFAULT_EXPORT_FILE;
use spendex::services::SystemClock;
use spendex::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendex",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Spendex records your spending, shows this month's total, a 30-day \
                  daily average and a naive forecast, and moves data in and out as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense
    Add(AddArgs),

    /// List expenses (newest first) followed by the stats panel
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the statistics panel
    Stats,

    /// Show monthly totals as a bar chart
    Chart,

    /// Export all expenses to CSV
    Export {
        /// Output file path
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },

    /// Import expenses from a CSV export
    ///
    /// Amounts must be whole positive numbers; rows with decimals such as
    /// `12.50` are skipped and reported.
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Initialize configuration and data directories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendexPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let clock = SystemClock;

    let mut storage = Storage::open(&paths, &settings)?;
    if let Some(cause) = storage.expenses.recovered_from() {
        eprintln!("warning: stored expenses could not be read, starting empty ({})", cause);
    }

    match cli.command {
        Some(Commands::Add(args)) => {
            handle_add_command(&mut storage, &settings, &clock, args)?;
        }
        Some(Commands::List { filter, limit }) => {
            handle_list_command(&mut storage, &settings, &clock, &filter, limit)?;
        }
        Some(Commands::Stats) => {
            handle_stats_command(&mut storage, &settings, &clock)?;
        }
        Some(Commands::Chart) => {
            handle_chart_command(&mut storage, &settings, &clock)?;
        }
        Some(Commands::Export { output }) => {
            handle_export_command(&storage, &output)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&mut storage, &settings, &clock, &file)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&storage, count)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Spendex at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Spendex Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Default description: {}", settings.default_description);
            println!("  Default category:    {}", settings.default_category);
            println!("  Storage key:         {}", settings.storage_key);
        }
        None => {
            println!("Spendex - terminal personal expense tracker");
            println!();
            println!("Run 'spendex --help' for usage information.");
        }
    }

    Ok(())
}
