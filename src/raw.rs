//! Permissive provider schemas.
//!
//! Every field tolerates being absent or `null`; numeric values the provider
//! ships as strings (`form`, `selected_by_percent`) are parsed leniently and
//! fall back to zero.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBootstrap {
    #[serde(default, deserialize_with = "or_default")]
    pub elements: Vec<RawPlayer>,
    #[serde(default, deserialize_with = "or_default")]
    pub teams: Vec<RawTeam>,
    #[serde(default, deserialize_with = "or_default")]
    pub events: Vec<RawEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayer {
    #[serde(default, deserialize_with = "or_default")]
    pub id: u32,
    #[serde(default, deserialize_with = "or_default")]
    pub web_name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub second_name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub element_type: u8,
    #[serde(default, deserialize_with = "or_default")]
    pub team: u32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub form: f64,
    #[serde(default, deserialize_with = "or_default")]
    pub now_cost: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub cost_change_event: i64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub selected_by_percent: f64,
    #[serde(default, deserialize_with = "or_default")]
    pub event_points: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub total_points: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub bonus: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub goals_scored: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub assists: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub clean_sheets: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub minutes: i64,
}

impl RawPlayer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.second_name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTeam {
    #[serde(default, deserialize_with = "or_default")]
    pub id: u32,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub short_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "or_default")]
    pub id: u32,
    #[serde(default, deserialize_with = "or_default")]
    pub is_current: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub is_next: bool,
    #[serde(default)]
    pub deadline_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFixture {
    #[serde(default, deserialize_with = "or_default")]
    pub id: u32,
    /// Round the fixture is scheduled into; `None` while unscheduled.
    #[serde(default)]
    pub event: Option<u32>,
    #[serde(default)]
    pub kickoff_time: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub finished: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub team_h: u32,
    #[serde(default, deserialize_with = "or_default")]
    pub team_a: u32,
    #[serde(default)]
    pub team_h_score: Option<i64>,
    #[serde(default)]
    pub team_a_score: Option<i64>,
    #[serde(default)]
    pub team_h_difficulty: Option<i64>,
    #[serde(default)]
    pub team_a_difficulty: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub player_first_name: Option<String>,
    #[serde(default)]
    pub player_last_name: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub summary_overall_points: i64,
    #[serde(default)]
    pub summary_overall_rank: Option<u64>,
    #[serde(default)]
    pub summary_event_rank: Option<u64>,
}

impl RawEntry {
    pub fn manager_name(&self) -> String {
        [
            self.player_first_name.as_deref(),
            self.player_last_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPicks {
    #[serde(default, deserialize_with = "or_default")]
    pub picks: Vec<RawPick>,
    #[serde(default)]
    pub entry_history: Option<RawEntryHistory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPick {
    #[serde(default, deserialize_with = "or_default")]
    pub element: u32,
    /// Squad slot, 1..=15. Slots above 11 are the bench.
    #[serde(default, deserialize_with = "or_default")]
    pub position: u32,
    #[serde(default)]
    pub multiplier: Option<i64>,
    #[serde(default, deserialize_with = "or_default")]
    pub is_captain: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub is_vice_captain: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntryHistory {
    #[serde(default, deserialize_with = "or_default")]
    pub points: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub value: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub bank: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub event_transfers: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub event_transfers_cost: i64,
}

pub fn parse_bootstrap(value: Value) -> Result<RawBootstrap> {
    serde_json::from_value(value).context("invalid bootstrap-static json")
}

pub fn parse_fixtures(value: Value) -> Result<Vec<RawFixture>> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).context("invalid fixtures json")
}

pub fn parse_entry(value: Value) -> Result<RawEntry> {
    serde_json::from_value(value).context("invalid entry json")
}

pub fn parse_picks(value: Value) -> Result<RawPicks> {
    serde_json::from_value(value).context("invalid picks json")
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64).unwrap_or(0.0))
}

fn value_as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}
