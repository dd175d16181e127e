//! Offline probe for sift engines.
//!
//! Prints the provider URL an engine would fetch, or parses a saved provider
//! response into JSON results. Never performs network I/O.

use clap::{Parser, Subcommand};
use sift::SiftConfig;
use sift_engines::{Category, SearchContext, SearchOptions, TimeRange};
use std::path::PathBuf;

/// Inspect search-provider adapters without a network.
#[derive(Parser)]
#[command(name = "sift-probe", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, env = "SIFT_CONFIG")]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// List registered engines per category.
    Engines,

    /// Print the URL an engine would fetch for a search.
    Url {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Parse a saved provider response and print the results as JSON.
    Parse {
        #[command(flatten)]
        search: SearchArgs,

        /// Saved response body.
        file: PathBuf,
    },
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Engine to use.
    #[arg(short, long, default_value = "bing_videos")]
    engine: String,

    /// Query text.
    #[arg(short, long)]
    query: String,

    /// 1-based result page.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Recency filter: day, week, month or year.
    #[arg(short, long, default_value = "")]
    time_range: String,
}

impl SearchArgs {
    fn options(&self) -> SearchOptions {
        SearchOptions::new(self.query.clone(), self.page)
            .with_time_range(TimeRange::from_token(&self.time_range))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => SiftConfig::from_file(path)?,
        None => {
            let path = SiftConfig::default_config_path();
            if path.exists() {
                SiftConfig::from_file(&path)?
            } else {
                SiftConfig::default()
            }
        }
    };

    sift::logging::init_tracing(&config.logging.filter)?;
    let registry = sift::host::build_registry(&config)?;

    match cli.command {
        Command::Engines => {
            for &category in Category::all() {
                let names: Vec<_> = registry
                    .in_category(category)
                    .iter()
                    .map(|e| e.name())
                    .collect();
                println!("{category}: {}", names.join(", "));
            }
        }
        Command::Url { search } => {
            let mut opts = search.options();
            let url = sift::host::prepare_request(
                &registry,
                &search.engine,
                &SearchContext::new(),
                &mut opts,
            )?;
            println!("{url}");
        }
        Command::Parse { search, file } => {
            let body = std::fs::read(&file)?;
            let opts = search.options();
            let results = sift::host::parse_response(
                &registry,
                &search.engine,
                &SearchContext::new(),
                &opts,
                &body,
            )?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}
