//! GHDB Scraper - retrieve the Google Hacking Database dorks from
//! https://www.exploit-db.com/google-hacking-database and write them as JSON.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use chrono::Local;
use clap::{ArgAction, Parser};
use ghdb_scraper::{scrape, Options};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CATEGORIES_EPILOG: &str = "Dork categories:
   1: Footholds
   2: File Containing Usernames
   3: Sensitive Directories
   4: Web Server Detection
   5: Vulnerable Files
   6: Vulnerable Servers
   7: Error Messages
   8: File Containing Juicy Info
   9: File Containing Passwords
  10: Sensitive Online Shopping Info
  11: Network or Vulnerability Data
  12: Pages Containing Login Portals
  13: Various Online devices
  14: Advisories and Vulnerabilities";

#[derive(Parser)]
#[command(name = "ghdb-scraper")]
#[command(about = "GHDB Scraper - Retrieve the Google Hacking Database dorks")]
#[command(version, after_help = CATEGORIES_EPILOG)]
struct Cli {
    /// Path to the .json file to save the dorks to
    #[arg(short = 'o', value_name = "JSON_PATH")]
    json_path: PathBuf,

    /// Also write the individual dork category files (`-i false` to skip)
    #[arg(
        short = 'i',
        long = "individual",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    save_individual_categories: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Threads fetching descriptions concurrently
    #[arg(short, long, default_value_t = 1)]
    workers: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Upstream host to scrape
    #[arg(long, default_value = ghdb_scraper::DEFAULT_BASE_URL)]
    base_url: String,

    /// Store normalized dorks instead of the listing text
    #[arg(long)]
    store_normalized: bool,

    /// Verbosity level
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = match Options::with_base_url(&cli.base_url) {
        Ok(base) => Options {
            timeout: Some(Duration::from_secs(cli.timeout)),
            fetch_workers: cli.workers,
            store_normalized_dork: cli.store_normalized,
            pretty: cli.pretty,
            split_categories: cli.save_individual_categories,
            ..base
        },
        Err(err) => {
            error!("Invalid base URL {}: {err}", cli.base_url);
            return ExitCode::FAILURE;
        }
    };

    info!("Initiation timestamp: {}", timestamp());

    match scrape(&cli.json_path, &options) {
        Ok(catalog) => {
            let stats = catalog.stats();
            info!(
                entries = stats.entries_emitted,
                discarded = stats.discarded_short,
                malformed = stats.skipped_malformed,
                failed_descriptions = stats.descriptions_failed,
                "Wrote {}",
                cli.json_path.display()
            );
            info!("Completion timestamp: {}", timestamp());
            info!("Done!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Error retrieving google dorks: {err}");
            info!("Completion timestamp: {}", timestamp());
            ExitCode::FAILURE
        }
    }
}
