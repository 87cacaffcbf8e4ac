use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::Config;
use crate::http_client::{FplSource, bootstrap_path, fixtures_path};
use crate::index::{CurrentWindow, ReferenceIndex};
use crate::persist::write_snapshot;
use crate::raw::{parse_bootstrap, parse_fixtures};
use crate::snapshot::{Snapshot, TeamSnapshot};
use crate::squad::fetch_team;
use crate::team_fixtures::project_fixtures;
use crate::top_players::{annotate_next_fixtures, build_top_player, select_top_players};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub current_gw: Option<u32>,
    pub top_players: usize,
    pub fixtures: usize,
    pub team_name: Option<String>,
}

/// Fetches everything and assembles the snapshot without touching disk.
///
/// Bootstrap and fixtures failures are returned; a squad failure only leaves
/// `team` empty.
pub fn build_snapshot<S>(cfg: &Config, source: &S, fetched_at: DateTime<Utc>) -> Result<Snapshot>
where
    S: FplSource + ?Sized,
{
    info!("fetching bootstrap-static");
    let bootstrap = source
        .fetch_json(&bootstrap_path())
        .context("bootstrap-static request failed")?;
    let bootstrap = parse_bootstrap(bootstrap)?;
    let index = ReferenceIndex::from_bootstrap(&bootstrap);
    let window = CurrentWindow::from_events(&bootstrap.events);
    info!(
        current_gw = ?window.current_gw,
        players = index.player_count(),
        teams = index.team_count(),
        "bootstrap loaded"
    );

    let (fixtures, leaders) = rayon::join(
        || source.fetch_json(&fixtures_path()),
        || select_top_players(&bootstrap.elements),
    );
    let fixtures = parse_fixtures(fixtures.context("fixtures request failed")?)?;

    let mut top_players = leaders
        .into_iter()
        .map(|p| build_top_player(p, &index))
        .collect::<Vec<_>>();
    annotate_next_fixtures(&mut top_players, &fixtures, window.next_gw(), &index);
    let fixture_records = project_fixtures(&fixtures, &index);

    let team = match cfg.user_id.as_deref() {
        Some(entry_id) => load_team(source, &index, entry_id, window.current_gw),
        None => {
            info!("no team id configured, skipping squad");
            None
        }
    };

    Ok(Snapshot::assemble(
        fetched_at,
        window,
        team,
        top_players,
        fixture_records,
    ))
}

fn load_team<S>(
    source: &S,
    index: &ReferenceIndex,
    entry_id: &str,
    current_gw: Option<u32>,
) -> Option<TeamSnapshot>
where
    S: FplSource + ?Sized,
{
    info!(entry_id, "fetching team");
    match fetch_team(source, index, entry_id, current_gw) {
        Ok(team) => {
            info!(
                name = team.summary.name.as_deref().unwrap_or_default(),
                gw = team.summary.gw,
                points = team.summary.gw_points,
                "team loaded"
            );
            Some(team)
        }
        Err(err) => {
            warn!(entry_id, "team fetch failed: {err:#}");
            None
        }
    }
}

/// Builds the snapshot and writes it to `cfg.output_path`. Nothing is written
/// unless every fatal step succeeded.
pub fn run<S>(cfg: &Config, source: &S, fetched_at: DateTime<Utc>) -> Result<RunSummary>
where
    S: FplSource + ?Sized,
{
    let snapshot = build_snapshot(cfg, source, fetched_at)?;
    write_snapshot(&cfg.output_path, &snapshot)
        .with_context(|| format!("failed writing {}", cfg.output_path.display()))?;

    let summary = RunSummary {
        output_path: cfg.output_path.clone(),
        current_gw: snapshot.current_gw,
        top_players: snapshot.top_players.len(),
        fixtures: snapshot.fixtures.len(),
        team_name: snapshot.team.as_ref().and_then(|t| t.summary.name.clone()),
    };
    info!(
        path = %summary.output_path.display(),
        top_players = summary.top_players,
        fixtures = summary.fixtures,
        team = summary.team_name.as_deref().unwrap_or("N/A"),
        "snapshot written"
    );
    Ok(summary)
}
