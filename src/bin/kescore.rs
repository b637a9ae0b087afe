use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use chrono::Local;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use kescore::enrich::{RankingStats, rank_players};
use kescore::export::export_results;
use kescore::render::{DocumentRenderer, WkhtmltopdfRenderer};
use kescore::scraper::DashboardScraper;
use kescore::storage::{LocalDirSink, StorageSink};
use kescore::types::Credentials;
use kescore::{FABILOUS_DASHBOARD_URL, KICKLY_DASHBOARD_URL};

#[derive(Parser)]
#[command(name = "kescore")]
#[command(about = "Scrape Kickbase dashboards and rank players by KES", long_about = None)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "info",
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[arg(
        long = "out",
        default_value = ".",
        help = "Output directory; repeat for multiple destinations"
    )]
    out: Vec<PathBuf>,

    #[arg(
        long,
        value_name = "EMAIL:PASSWORD",
        value_parser = parse_credentials,
        help = "Login credentials for the fabilous dashboard"
    )]
    credentials: Option<Credentials>,

    #[arg(long, default_value = KICKLY_DASHBOARD_URL, help = "Kickly dashboard URL")]
    kickly_url: String,

    #[arg(long, default_value = FABILOUS_DASHBOARD_URL, help = "Fabilous dashboard URL")]
    fabilous_url: String,

    #[arg(long, help = "Skip rendering and writing the PDF report")]
    no_pdf: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn parse_credentials(s: &str) -> Result<Credentials, String> {
    Credentials::from_str(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    let scraper = DashboardScraper::new().unwrap_or_else(|e| {
        log::error!("Error creating scraper: {}", e);
        process::exit(1);
    });

    log::info!(
        "Fetching player tables from {} and {}...",
        cli.kickly_url,
        cli.fabilous_url
    );

    // The two dashboards are independent, so both fetches run concurrently.
    let (kickly, fabilous) = tokio::join!(
        scraper.fetch_player_table(&cli.kickly_url, None),
        scraper.fetch_player_table(&cli.fabilous_url, cli.credentials.as_ref()),
    );

    let kickly = kickly.unwrap_or_else(|e| {
        log::warn!("Fetching {} failed, continuing without it: {}", cli.kickly_url, e);
        Vec::new()
    });
    let fabilous = fabilous.unwrap_or_else(|e| {
        log::warn!(
            "Fetching {} failed, continuing without it: {}",
            cli.fabilous_url,
            e
        );
        Vec::new()
    });

    log::info!(
        "Scraped {} + {} player rows",
        kickly.len(),
        fabilous.len()
    );

    let players = rank_players(kickly, fabilous);
    if players.is_empty() {
        log::warn!("No players scraped from either dashboard");
    }

    let sinks: Vec<LocalDirSink> = cli.out.into_iter().map(LocalDirSink::new).collect();
    let sink_refs: Vec<&dyn StorageSink> = sinks.iter().map(|s| s as &dyn StorageSink).collect();

    let renderer = WkhtmltopdfRenderer;
    let renderer_ref: Option<&dyn DocumentRenderer> =
        if cli.no_pdf { None } else { Some(&renderer) };

    let summary = export_results(
        &players,
        &sink_refs,
        renderer_ref,
        Local::now().date_naive(),
    )
    .unwrap_or_else(|e| {
        log::error!("Export failed: {}", e);
        process::exit(1);
    });

    print!("{}", RankingStats::from_players(&players));
    print!("{}", summary);

    if !summary.all_succeeded() {
        process::exit(1);
    }
}
