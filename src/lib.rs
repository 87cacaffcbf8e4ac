//! Fantasy football snapshot builder.
//!
//! Pulls the provider's bootstrap, fixtures and (optionally) one entry's
//! picks, joins them, and writes a single JSON artifact for a static site.

pub mod config;
pub mod derive;
pub mod error;
pub mod http_client;
pub mod index;
pub mod persist;
pub mod pipeline;
pub mod raw;
pub mod snapshot;
pub mod squad;
pub mod team_fixtures;
pub mod top_players;

pub use config::Config;
pub use error::RemoteError;
pub use http_client::{FplSource, RemoteClient};
pub use pipeline::{RunSummary, build_snapshot, run};
pub use snapshot::Snapshot;
