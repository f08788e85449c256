use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "setlist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory with artists.json, dates.json, locations.json and relations.json
    /// (default: ~/.local/share/setlist)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Search artists by free text
    ///
    /// Matches, case-insensitively, against the artist name, member names,
    /// the first-album field and its year, the formation year, and the cities,
    /// countries and dates of the artist's concerts. An empty query lists
    /// every artist.
    Search {
        /// Text to look for
        #[arg(default_value = "")]
        query: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Filter artists by year, member count and concert location
    ///
    /// All given filters must hold. Results keep catalog order.
    Filter(commands::FilterArgs),
    /// Suggest completions for a partial query
    Suggest {
        /// Partial query text
        query: String,

        /// Maximum suggestions to print (default from config)
        #[arg(long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one artist with concert locations and dates
    Show {
        /// Artist id
        id: u32,

        /// Print the artist as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if missing
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?.with_data_dir(cli.data_dir);
    logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::Search { query, json } => {
            commands::run_search(&config.data_dir, &query, json)?;
        }
        Commands::Filter(args) => {
            commands::run_filter(&config.data_dir, &args)?;
        }
        Commands::Suggest { query, limit, json } => {
            let limit = limit.unwrap_or(config.suggestion_limit);
            commands::run_suggest(&config.data_dir, &query, limit, json)?;
        }
        Commands::Show { id, json } => {
            commands::show_artist(&config.data_dir, id, json)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
