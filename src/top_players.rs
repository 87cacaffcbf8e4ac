use crate::derive::{DEFAULT_FDR, fdr_label, position_label, round1, tenths};
use crate::index::{MISSING, ReferenceIndex};
use crate::raw::{RawFixture, RawPlayer};
use crate::snapshot::TopPlayerRecord;

pub const TOP_PLAYER_LIMIT: usize = 20;
const MIN_MINUTES: i64 = 90;

/// Next-round fixture from one team's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextFixture {
    pub difficulty: Option<i64>,
    /// Opponent short name, prefixed with `@` for away games.
    pub opponent: String,
}

/// Form leaders with real minutes, best first. Equal form keeps list order.
pub fn select_top_players(players: &[RawPlayer]) -> Vec<&RawPlayer> {
    let mut picked: Vec<&RawPlayer> = players
        .iter()
        .filter(|p| p.minutes > MIN_MINUTES && p.form > 0.0)
        .collect();
    // sort_by is stable
    picked.sort_by(|a, b| b.form.total_cmp(&a.form));
    picked.truncate(TOP_PLAYER_LIMIT);
    picked
}

pub fn build_top_player(player: &RawPlayer, index: &ReferenceIndex) -> TopPlayerRecord {
    TopPlayerRecord {
        id: player.id,
        name: player.web_name.clone(),
        full_name: player.full_name(),
        pos: position_label(player.element_type),
        team: index.team_short(player.team),
        team_full: index.team_name(player.team),
        team_id: player.team,
        form: round1(player.form),
        price: tenths(player.now_cost),
        price_change: tenths(player.cost_change_event),
        own: round1(player.selected_by_percent),
        gw_pts: player.event_points,
        total_pts: player.total_points,
        bonus: player.bonus,
        goals: player.goals_scored,
        assists: player.assists,
        clean_sheets: player.clean_sheets,
        minutes: player.minutes,
        next_fdr: Some(DEFAULT_FDR),
        next_fdr_label: fdr_label(Some(DEFAULT_FDR)),
        next_opp: MISSING.to_string(),
    }
}

/// First unfinished fixture in `next_gw` involving `team_id`, in list order.
pub fn find_next_fixture(
    fixtures: &[RawFixture],
    team_id: u32,
    next_gw: u32,
    index: &ReferenceIndex,
) -> Option<NextFixture> {
    let fixture = fixtures.iter().find(|f| {
        f.event == Some(next_gw) && (f.team_h == team_id || f.team_a == team_id) && !f.finished
    })?;

    let is_home = fixture.team_h == team_id;
    let (difficulty, opponent_id, prefix) = if is_home {
        (fixture.team_h_difficulty, fixture.team_a, "")
    } else {
        (fixture.team_a_difficulty, fixture.team_h, "@")
    };

    Some(NextFixture {
        difficulty,
        opponent: format!("{prefix}{}", index.team_short(opponent_id)),
    })
}

pub fn annotate_next_fixtures(
    records: &mut [TopPlayerRecord],
    fixtures: &[RawFixture],
    next_gw: u32,
    index: &ReferenceIndex,
) {
    for record in records.iter_mut() {
        let Some(next) = find_next_fixture(fixtures, record.team_id, next_gw, index) else {
            continue;
        };
        record.next_fdr = next.difficulty;
        record.next_fdr_label = fdr_label(next.difficulty);
        record.next_opp = next.opponent;
    }
}

pub fn project_top_players(
    players: &[RawPlayer],
    fixtures: &[RawFixture],
    next_gw: u32,
    index: &ReferenceIndex,
) -> Vec<TopPlayerRecord> {
    let mut records = select_top_players(players)
        .into_iter()
        .map(|p| build_top_player(p, index))
        .collect::<Vec<_>>();
    annotate_next_fixtures(&mut records, fixtures, next_gw, index);
    records
}
