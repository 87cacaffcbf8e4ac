use std::process::ExitCode;

use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fpl_snapshot::{Config, RemoteClient};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let started = Utc::now();
    info!(at = %started.to_rfc2822(), "fpl fetch started");

    let cfg = Config::from_env().apply_args(std::env::args().skip(1));
    let client = RemoteClient::new(&cfg);

    match fpl_snapshot::run(&cfg, &client, started) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("fatal: {err:#}");
            ExitCode::FAILURE
        }
    }
}
