use anyhow::{Context, Result, anyhow};

use crate::derive::{position_label, position_order, round1, tenths};
use crate::http_client::{FplSource, entry_path, picks_path};
use crate::index::ReferenceIndex;
use crate::raw::{RawEntry, RawPick, RawPicks, parse_entry, parse_picks};
use crate::snapshot::{EntrySummary, SquadPlayer, SquadRecord, TeamSnapshot};

const STARTING_SLOTS: u32 = 11;

/// Fetches one entry and its picks for `current_gw` and projects the squad.
/// Both requests go out together; either failing fails the whole projection.
pub fn fetch_team<S>(
    source: &S,
    index: &ReferenceIndex,
    entry_id: &str,
    current_gw: Option<u32>,
) -> Result<TeamSnapshot>
where
    S: FplSource + ?Sized,
{
    let gw = current_gw.ok_or_else(|| anyhow!("no current gameweek to load picks for"))?;

    let (entry, picks) = rayon::join(
        || source.fetch_json(&entry_path(entry_id)),
        || source.fetch_json(&picks_path(entry_id, gw)),
    );
    let entry = parse_entry(entry.context("entry request failed")?)?;
    let picks = parse_picks(picks.context("picks request failed")?)?;

    Ok(build_team(entry_id, gw, &entry, &picks, index))
}

pub fn build_team(
    entry_id: &str,
    gw: u32,
    entry: &RawEntry,
    picks: &RawPicks,
    index: &ReferenceIndex,
) -> TeamSnapshot {
    let history = picks.entry_history.clone().unwrap_or_default();
    let summary = EntrySummary {
        id: entry_id.to_string(),
        name: entry.name.clone(),
        manager_name: entry.manager_name(),
        gw,
        gw_points: history.points,
        total_points: entry.summary_overall_points,
        overall_rank: entry.summary_overall_rank.filter(|r| *r != 0),
        gw_rank: entry.summary_event_rank.filter(|r| *r != 0),
        team_value: tenths(history.value),
        bank: tenths(history.bank),
        transfers: history.event_transfers,
        transfer_cost: history.event_transfers_cost,
    };

    TeamSnapshot {
        summary,
        squad: build_squad(&picks.picks, index),
    }
}

/// Picks whose player id is unknown are dropped.
pub fn build_squad(picks: &[RawPick], index: &ReferenceIndex) -> SquadRecord {
    let (mut starters, mut bench): (Vec<SquadPlayer>, Vec<SquadPlayer>) = picks
        .iter()
        .filter_map(|pick| build_squad_player(pick, index))
        .partition(|p| p.is_starter);

    starters.sort_by_key(|p| position_order(p.pos));
    bench.sort_by_key(|p| p.bench_order);

    SquadRecord { starters, bench }
}

fn build_squad_player(pick: &RawPick, index: &ReferenceIndex) -> Option<SquadPlayer> {
    let player = index.player(pick.element)?;
    // The provider marks benched players with multiplier 0; they still show raw points.
    let multiplier = pick.multiplier.filter(|m| *m != 0).unwrap_or(1);
    let is_starter = pick.position <= STARTING_SLOTS;

    Some(SquadPlayer {
        id: player.id,
        name: player.web_name.clone(),
        full_name: player.full_name(),
        pos: position_label(player.element_type),
        team: index.team_short(player.team),
        team_full: index.team_name(player.team),
        price: tenths(player.now_cost),
        gw_pts: player.event_points,
        total_pts: player.total_points,
        form: round1(player.form),
        own: round1(player.selected_by_percent),
        is_captain: pick.is_captain,
        is_vc: pick.is_vice_captain,
        is_starter,
        bench_order: (!is_starter).then(|| pick.position - STARTING_SLOTS),
        multiplier,
        display_pts: player.event_points * multiplier,
    })
}
