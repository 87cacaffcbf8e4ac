use std::collections::HashMap;

use crate::raw::{RawBootstrap, RawEvent, RawPlayer, RawTeam};

/// Placeholder written wherever an id lookup misses.
pub const MISSING: &str = "?";

/// Id-keyed views over the bootstrap lists. Built once per run, read-only after.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    players: HashMap<u32, RawPlayer>,
    teams: HashMap<u32, RawTeam>,
}

impl ReferenceIndex {
    pub fn build(players: &[RawPlayer], teams: &[RawTeam]) -> Self {
        Self {
            players: players.iter().map(|p| (p.id, p.clone())).collect(),
            teams: teams.iter().map(|t| (t.id, t.clone())).collect(),
        }
    }

    pub fn from_bootstrap(bootstrap: &RawBootstrap) -> Self {
        Self::build(&bootstrap.elements, &bootstrap.teams)
    }

    pub fn player(&self, id: u32) -> Option<&RawPlayer> {
        self.players.get(&id)
    }

    pub fn team(&self, id: u32) -> Option<&RawTeam> {
        self.teams.get(&id)
    }

    pub fn team_short(&self, id: u32) -> String {
        self.team(id)
            .map(|t| t.short_name.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(MISSING)
            .to_string()
    }

    pub fn team_name(&self, id: u32) -> String {
        self.team(id)
            .map(|t| t.name.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(MISSING)
            .to_string()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}

/// Active round and the upcoming deadline, read off the event list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentWindow {
    pub current_gw: Option<u32>,
    pub next_deadline: Option<String>,
}

impl CurrentWindow {
    pub fn from_events(events: &[RawEvent]) -> Self {
        let current = events.iter().find(|e| e.is_current);
        let next = events.iter().find(|e| e.is_next);

        let current_gw = current.or(next).map(|e| e.id);
        let next_deadline = next
            .and_then(|e| e.deadline_time.clone())
            .or_else(|| current.and_then(|e| e.deadline_time.clone()));

        Self {
            current_gw,
            next_deadline,
        }
    }

    /// Round whose fixtures count as "next". An unknown current round reads as 0.
    pub fn next_gw(&self) -> u32 {
        self.current_gw.unwrap_or(0).saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: u32, name: &str, short: &str) -> RawTeam {
        RawTeam {
            id,
            name: name.to_string(),
            short_name: short.to_string(),
        }
    }

    fn event(id: u32, current: bool, next: bool, deadline: Option<&str>) -> RawEvent {
        RawEvent {
            id,
            is_current: current,
            is_next: next,
            deadline_time: deadline.map(str::to_string),
        }
    }

    #[test]
    fn every_record_is_indexed() {
        let players = vec![
            RawPlayer {
                id: 1,
                ..RawPlayer::default()
            },
            RawPlayer {
                id: 2,
                ..RawPlayer::default()
            },
        ];
        let teams = vec![team(10, "Arsenal", "ARS")];
        let index = ReferenceIndex::build(&players, &teams);
        assert_eq!(index.player_count(), 2);
        assert_eq!(index.team_count(), 1);
        assert!(index.player(2).is_some());
        assert_eq!(index.team_short(10), "ARS");
        assert_eq!(index.team_name(10), "Arsenal");
    }

    #[test]
    fn missing_team_degrades_to_placeholder() {
        let index = ReferenceIndex::build(&[], &[]);
        assert!(index.player(99).is_none());
        assert_eq!(index.team_short(99), "?");
        assert_eq!(index.team_name(99), "?");
    }

    #[test]
    fn current_round_preferred_next_deadline_preferred() {
        let events = vec![
            event(9, false, false, Some("2026-10-01T10:00:00Z")),
            event(10, true, false, Some("2026-10-08T10:00:00Z")),
            event(11, false, true, Some("2026-10-15T10:00:00Z")),
        ];
        let window = CurrentWindow::from_events(&events);
        assert_eq!(window.current_gw, Some(10));
        assert_eq!(window.next_deadline.as_deref(), Some("2026-10-15T10:00:00Z"));
        assert_eq!(window.next_gw(), 11);
    }

    #[test]
    fn falls_back_to_next_round_before_season() {
        let events = vec![event(1, false, true, Some("2026-08-15T10:00:00Z"))];
        let window = CurrentWindow::from_events(&events);
        assert_eq!(window.current_gw, Some(1));
        assert_eq!(window.next_deadline.as_deref(), Some("2026-08-15T10:00:00Z"));
    }

    #[test]
    fn last_round_uses_current_deadline() {
        let events = vec![event(38, true, false, Some("2027-05-23T13:30:00Z"))];
        let window = CurrentWindow::from_events(&events);
        assert_eq!(window.current_gw, Some(38));
        assert_eq!(window.next_deadline.as_deref(), Some("2027-05-23T13:30:00Z"));
    }

    #[test]
    fn no_flags_means_absent() {
        let window = CurrentWindow::from_events(&[event(3, false, false, None)]);
        assert_eq!(window, CurrentWindow::default());
        assert_eq!(window.next_gw(), 1);
    }
}
