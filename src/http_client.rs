use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::RemoteError;

// The provider rejects reqwest's default identifier.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Anything that can answer a provider path with a JSON document.
pub trait FplSource: Sync {
    fn fetch_json(&self, path: &str) -> Result<Value, RemoteError>;
}

pub fn bootstrap_path() -> String {
    "/bootstrap-static/".to_string()
}

pub fn fixtures_path() -> String {
    "/fixtures/".to_string()
}

pub fn entry_path(entry_id: &str) -> String {
    format!("/entry/{entry_id}/")
}

pub fn picks_path(entry_id: &str, gw: u32) -> String {
    format!("/entry/{entry_id}/event/{gw}/picks/")
}

/// Single-attempt JSON client for the provider API.
pub struct RemoteClient {
    base_url: String,
    timeout: Duration,
    client: OnceCell<Client>,
}

impl RemoteClient {
    pub fn new(cfg: &Config) -> Self {
        Self {
            base_url: cfg.base_url.clone(),
            timeout: cfg.request_timeout(),
            client: OnceCell::new(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn http_client(&self, url: &str) -> Result<&Client, RemoteError> {
        self.client.get_or_try_init(|| {
            Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|err| RemoteError::Transport {
                    url: url.to_string(),
                    message: format!("failed to build http client: {err}"),
                })
        })
    }
}

impl FplSource for RemoteClient {
    fn fetch_json(&self, path: &str) -> Result<Value, RemoteError> {
        let url = self.url_for(path);
        let client = self.http_client(&url)?;
        debug!(%url, "GET");

        let resp = client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|err| RemoteError::from_reqwest(&url, err))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RemoteError::Status { status, url });
        }
        resp.json::<Value>()
            .map_err(|err| RemoteError::from_reqwest(&url, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_provider_layout() {
        assert_eq!(bootstrap_path(), "/bootstrap-static/");
        assert_eq!(fixtures_path(), "/fixtures/");
        assert_eq!(entry_path("77"), "/entry/77/");
        assert_eq!(picks_path("77", 12), "/entry/77/event/12/picks/");
    }

    #[test]
    fn url_joins_base_and_path() {
        let cfg = Config {
            base_url: "https://example.test/api".to_string(),
            ..Config::default()
        };
        let client = RemoteClient::new(&cfg);
        assert_eq!(
            client.url_for(&fixtures_path()),
            "https://example.test/api/fixtures/"
        );
    }

    #[test]
    fn unreachable_host_is_a_remote_error_with_url() {
        let cfg = Config {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_ms: 500,
            ..Config::default()
        };
        let client = RemoteClient::new(&cfg);
        let err = client
            .fetch_json(&bootstrap_path())
            .expect_err("nothing listens on the discard port");
        assert_eq!(err.url(), "http://127.0.0.1:9/bootstrap-static/");
        assert!(err.status().is_none());
    }
}
