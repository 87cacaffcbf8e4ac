use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com/api";
pub const DEFAULT_OUTPUT_PATH: &str = "data/cache.json";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

const ENV_BASE_URL: &str = "FPL_BASE_URL";
const ENV_TEAM_ID: &str = "FPL_TEAM_ID";
const ENV_OUT_FILE: &str = "FPL_OUT_FILE";
const ENV_TIMEOUT_MS: &str = "FPL_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// Entry id whose squad is projected. `None` skips the squad step.
    pub user_id: Option<String>,
    pub output_path: PathBuf,
    pub request_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).as_deref().and_then(non_empty) {
            cfg.base_url = normalize_base_url(url);
        }
        cfg.user_id = lookup(ENV_TEAM_ID)
            .as_deref()
            .and_then(non_empty)
            .map(str::to_string);
        if let Some(path) = lookup(ENV_OUT_FILE).as_deref().and_then(non_empty) {
            cfg.output_path = PathBuf::from(path);
        }
        cfg.request_timeout_ms = lookup(ENV_TIMEOUT_MS)
            .and_then(|val| val.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        cfg
    }

    /// Applies `--out`, `--team-id` and `--base-url` overrides, in either
    /// `--flag=value` or `--flag value` form.
    pub fn apply_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let args = args.into_iter().collect::<Vec<_>>();
        if let Some(out) = flag_value(&args, "--out") {
            self.output_path = PathBuf::from(out);
        }
        if let Some(id) = flag_value(&args, "--team-id") {
            self.user_id = Some(id);
        }
        if let Some(url) = flag_value(&args, "--base-url") {
            self.base_url = normalize_base_url(&url);
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            if let Some(value) = non_empty(value) {
                return Some(value.to_string());
            }
        }
        if arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if let Some(value) = non_empty(next) {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
