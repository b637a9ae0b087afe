use crate::parser::{ParseError, parse_player_table};
use crate::types::{Credentials, RawPlayerRow};

use reqwest::Client;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
}

/// Fetches player tables from the community dashboards. The client keeps a
/// cookie store so a login session survives into the table request.
#[derive(Debug, Clone)]
pub struct DashboardScraper {
    client: Client,
}

impl DashboardScraper {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .cookie_store(true)
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { client })
    }

    /// Fetches one dashboard and returns its player rows.
    ///
    /// When credentials are given, a login is attempted first. Login
    /// failures are logged and swallowed: whatever table the page serves
    /// without a session is still scraped.
    pub async fn fetch_player_table(
        &self,
        url: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Vec<RawPlayerRow>, ScraperError> {
        if let Some(creds) = credentials
            && let Err(e) = self.login(url, creds).await
        {
            log::warn!("Login at {} failed, scraping without session: {}", url, e);
        }

        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let rows = parse_player_table(&html)?;
        log::debug!("Scraped {} player rows from {}", rows.len(), url);
        Ok(rows)
    }

    /// Posts the credential form to the origin's /login endpoint. The
    /// session cookie, if any, lands in the shared cookie store.
    async fn login(&self, dashboard_url: &str, creds: &Credentials) -> Result<(), ScraperError> {
        let login_url = login_url_for(dashboard_url);
        self.client
            .post(&login_url)
            .form(&[("email", creds.email.as_str()), ("password", creds.password.as_str())])
            .send()
            .await?
            .error_for_status()?;
        log::info!("Logged in at {}", login_url);
        Ok(())
    }
}

fn login_url_for(dashboard_url: &str) -> String {
    let origin = dashboard_url
        .find("://")
        .and_then(|scheme_end| {
            dashboard_url[scheme_end + 3..]
                .find('/')
                .map(|path_start| &dashboard_url[..scheme_end + 3 + path_start])
        })
        .unwrap_or(dashboard_url);
    format!("{}/login", origin)
}
