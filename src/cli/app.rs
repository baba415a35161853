//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use quotebook::config::Config;
use quotebook::output::OutputMode;
use quotebook::paths;

/// quotebook - Browse, filter and sync a collection of quotes
#[derive(Parser, Debug)]
#[command(
    name = "quotebook",
    version,
    about = "Browse, filter and sync a collection of quotes",
    long_about = "Keep a list of quotes filed by category.\n\n\
                  Show a random quote, filter by category, add your own,\n\
                  import/export JSON, and sync with a mock quote server."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// quotebook home directory (default: ~/.quotebook)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Never contact the quote server
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the demonstration quotes and a default config
    Init {
        /// Replace existing quotes with the demonstration set
        #[arg(short, long)]
        force: bool,
    },

    /// Show a random quote
    Random {
        /// Pick from this category instead of the active filter ("all" for any)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the last quote displayed in this session
    Last,

    /// List the quotes passing the active filter
    List,

    /// Set the active category filter and list matching quotes
    Filter {
        /// Category name, or "all"
        category: String,
    },

    /// List categories, marking the active filter
    Categories,

    /// Add a quote
    Add {
        /// The quote text
        text: String,

        /// The quote category
        #[arg(short, long)]
        category: String,
    },

    /// Import quotes from a JSON file
    Import {
        /// Path to a JSON array of {text, category} objects
        file: PathBuf,
    },

    /// Export quotes to a JSON file
    Export {
        /// Destination file ("-" for stdout)
        #[arg(default_value = paths::DEFAULT_EXPORT_FILE)]
        file: String,
    },

    /// Fetch quotes from the server once
    Sync,

    /// Keep syncing with the server until interrupted
    Watch {
        /// Seconds between polls (default from config)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let home = paths::home_dir(cli.home.as_deref());
    let config = Config::load(&home);
    let ctx = Context::new(home, config, output_mode, cli.offline);

    match cli.command {
        Some(Command::Init { force }) => commands::init(&ctx, force),
        Some(Command::Random { category }) => commands::random(&ctx, category.as_deref()),
        Some(Command::Last) => commands::last(&ctx),
        Some(Command::List) => commands::list(&ctx),
        Some(Command::Filter { category }) => commands::filter(&ctx, &category),
        Some(Command::Categories) => commands::categories(&ctx),
        Some(Command::Add { text, category }) => commands::add(&ctx, &text, &category),
        Some(Command::Import { file }) => commands::import(&ctx, &file),
        Some(Command::Export { file }) => commands::export(&ctx, &file),
        Some(Command::Sync) => commands::sync(&ctx),
        Some(Command::Watch { interval }) => commands::watch(&ctx, interval),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("quotebook v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("quotebook v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'quotebook --help' for usage");
                println!("Run 'quotebook init' to get started");
            }
            Ok(())
        },
    }
}
