//! HTTP client for the Bottlenose course site.
//!
//! Bottlenose uses a cookie session: the login form carries a Rails CSRF
//! token scraped from the login page, and the session cookie set by the
//! login POST authorizes the teamset export download.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Default Bottlenose deployment
pub const DEFAULT_BASE_URL: &str = "https://handins.ccs.neu.edu";

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Leading bytes of a zip container, which every xlsx file is
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

const CSRF_PARAM_META: &str = "csrf-param";
const CSRF_TOKEN_META: &str = "csrf-token";

/// CSRF form field name and value from the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    pub param: String,
    pub token: String,
}

/// Session-holding client for one Bottlenose site.
pub struct BottlenoseClient {
    client: Client,
    base_url: String,
}

impl BottlenoseClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    fn export_url(&self, course_id: u64) -> String {
        format!("{}/courses/{}/teamsets/export.xlsx", self.base_url, course_id)
    }

    /// Log in, storing the session cookie for later requests.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let login_url = self.login_url();

        let response = self
            .client
            .get(&login_url)
            .send()
            .await
            .context("Failed to load login page")?;
        let page = Self::check_response(response)
            .await?
            .text()
            .await
            .context("Failed to read login page")?;
        let csrf = extract_csrf_token(&page)?;
        debug!(param = %csrf.param, "Found CSRF token");

        let form = [
            ("user[username]", username),
            ("user[password]", password),
            (csrf.param.as_str(), csrf.token.as_str()),
        ];
        let response = self
            .client
            .post(&login_url)
            .form(&form)
            .send()
            .await
            .context("Failed to send login request")?;
        let response = Self::check_response(response).await?;

        // A rejected login re-renders the form instead of redirecting away
        if response.url().path().trim_end_matches('/').ends_with("/login") {
            return Err(ApiError::Unauthorized.into());
        }

        info!(username, "Logged in to Bottlenose");
        Ok(())
    }

    /// Download the teamset export workbook for a course.
    pub async fn fetch_teamset_export(&self, course_id: u64) -> Result<Vec<u8>> {
        let url = self.export_url(course_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;
        let bytes = Self::check_response(response)
            .await?
            .bytes()
            .await
            .context("Failed to read teamset export body")?;

        if !bytes.starts_with(ZIP_MAGIC) {
            return Err(ApiError::InvalidResponse(
                "teamset export is not a spreadsheet - is the account staff on this course?".to_string(),
            )
            .into());
        }

        debug!(course_id, bytes = bytes.len(), "Downloaded teamset export");
        Ok(bytes.to_vec())
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }
}

/// Pull the CSRF field name and token out of the login page's `<meta>` tags.
pub fn extract_csrf_token(html: &str) -> Result<CsrfToken, ApiError> {
    let document = Html::parse_document(html);

    let meta_content = |name: &'static str| -> Result<String, ApiError> {
        let selector = Selector::parse(&format!("meta[name=\"{}\"]", name))
            .map_err(|e| ApiError::InvalidResponse(format!("bad selector for {}: {:?}", name, e)))?;
        document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr("content"))
            .map(str::to_string)
            .ok_or(ApiError::MissingCsrfToken(name))
    };

    Ok(CsrfToken {
        param: meta_content(CSRF_PARAM_META)?,
        token: meta_content(CSRF_TOKEN_META)?,
    })
}
