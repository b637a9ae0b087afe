pub mod enrich;
pub mod export;
mod normalize;
mod parser;
pub mod render;
pub mod report;
pub mod scoring;
pub mod scraper;
pub mod storage;
pub mod types;

pub use scraper::DashboardScraper;

pub const KICKLY_DASHBOARD_URL: &str = "https://kickly.de/dashboard";
pub const FABILOUS_DASHBOARD_URL: &str = "https://kickbase.fabilous.tech/dashboard";
