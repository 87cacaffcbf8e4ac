//! Output records and the artifact that bundles them.
//!
//! Field names follow the JSON layout the presentation layer reads.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::index::CurrentWindow;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPlayerRecord {
    pub id: u32,
    pub name: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<&'static str>,
    pub team: String,
    pub team_full: String,
    pub team_id: u32,
    pub form: f64,
    pub price: f64,
    pub price_change: f64,
    pub own: f64,
    pub gw_pts: i64,
    pub total_pts: i64,
    pub bonus: i64,
    pub goals: i64,
    pub assists: i64,
    pub clean_sheets: i64,
    pub minutes: i64,
    #[serde(rename = "nextFDR")]
    pub next_fdr: Option<i64>,
    #[serde(rename = "nextFDRLabel")]
    pub next_fdr_label: &'static str,
    pub next_opp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRecord {
    pub id: u32,
    pub gw: u32,
    pub kickoff: Option<String>,
    pub finished: bool,
    pub home_team: String,
    pub home_short: String,
    pub home_id: u32,
    pub away_team: String,
    pub away_short: String,
    pub away_id: u32,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub home_diff: Option<i64>,
    pub away_diff: Option<i64>,
    pub home_diff_label: &'static str,
    pub away_diff_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadPlayer {
    pub id: u32,
    pub name: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<&'static str>,
    pub team: String,
    pub team_full: String,
    pub price: f64,
    pub gw_pts: i64,
    pub total_pts: i64,
    pub form: f64,
    pub own: f64,
    pub is_captain: bool,
    #[serde(rename = "isVC")]
    pub is_vc: bool,
    pub is_starter: bool,
    pub bench_order: Option<u32>,
    pub multiplier: i64,
    pub display_pts: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
    pub id: String,
    pub name: Option<String>,
    pub manager_name: String,
    pub gw: u32,
    pub gw_points: i64,
    pub total_points: i64,
    pub overall_rank: Option<u64>,
    pub gw_rank: Option<u64>,
    pub team_value: f64,
    pub bank: f64,
    pub transfers: i64,
    pub transfer_cost: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SquadRecord {
    pub starters: Vec<SquadPlayer>,
    pub bench: Vec<SquadPlayer>,
}

/// The `team` object: entry summary with the squad split alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSnapshot {
    #[serde(flatten)]
    pub summary: EntrySummary,
    #[serde(flatten)]
    pub squad: SquadRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub fetched_at: String,
    #[serde(rename = "currentGW")]
    pub current_gw: Option<u32>,
    pub next_deadline: Option<String>,
    pub team: Option<TeamSnapshot>,
    pub top_players: Vec<TopPlayerRecord>,
    pub fixtures: Vec<FixtureRecord>,
    /// Reserved for league tables; never filled in.
    pub standings: Option<Value>,
}

impl Snapshot {
    pub fn assemble(
        fetched_at: DateTime<Utc>,
        window: CurrentWindow,
        team: Option<TeamSnapshot>,
        top_players: Vec<TopPlayerRecord>,
        fixtures: Vec<FixtureRecord>,
    ) -> Self {
        Self {
            fetched_at: format_timestamp(fetched_at),
            current_gw: window.current_gw,
            next_deadline: window.next_deadline,
            team,
            top_players,
            fixtures,
            standings: None,
        }
    }
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
