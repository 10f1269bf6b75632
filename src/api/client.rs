use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::StatusCode;
use yansi::Paint;

use crate::error::FetchError;
use crate::utils::build_query_string;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// HTTP client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` (already sanitized, no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("TopK/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, base_url: base_url.into() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET against `endpoint` and return the status and raw body.
    /// Both directions are echoed to stdout unless silenced.
    pub async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<(StatusCode, Vec<u8>), FetchError> {
        let url = format!("{}{}", self.base_url, endpoint);
        log_request("GET", &url, params);

        let resp = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        log_response(status, &body);
        Ok((status, body.to_vec()))
    }
}

fn log_request(method: &str, url: &str, params: &[(String, String)]) {
    let query = build_query_string(params);
    let url_for_log = if query.is_empty() { url.to_string() } else { format!("{}?{}", url, query) };

    let parts = [
        Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
        format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()),
        format!("'{}'", Paint::new(&url_for_log).fg(yansi::Color::Cyan)),
    ];
    log_output(format!("Request:\n{}", parts.join(" ")));
}

fn log_response(status: StatusCode, body: &[u8]) {
    let text = String::from_utf8_lossy(body);
    // Grayed out so the payload doesn't compete with the rendered table
    let response_str = Paint::new(text.as_ref()).rgb(100, 100, 100).to_string();
    log_output(format!("Response ({}):\n{}", status.as_u16(), response_str));
}
