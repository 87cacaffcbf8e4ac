//! Presentation-ready values computed from raw provider fields.

/// Difficulty assumed when a player's team has no upcoming fixture.
pub const DEFAULT_FDR: i64 = 3;

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Provider prices are integer tenths of a currency unit.
pub fn tenths(raw: i64) -> f64 {
    round1(raw as f64 / 10.0)
}

pub fn fdr_label(difficulty: Option<i64>) -> &'static str {
    match difficulty {
        Some(1) => "Very Easy",
        Some(2) => "Easy",
        Some(3) => "Medium",
        Some(4) => "Hard",
        Some(5) => "Very Hard",
        _ => "Unknown",
    }
}

/// Unmapped codes yield `None`, which is left out of the written record.
pub fn position_label(element_type: u8) -> Option<&'static str> {
    match element_type {
        1 => Some("GKP"),
        2 => Some("DEF"),
        3 => Some("MID"),
        4 => Some("FWD"),
        _ => None,
    }
}

/// Line-up order: GKP, DEF, MID, FWD, then anything unmapped.
pub fn position_order(label: Option<&str>) -> u8 {
    match label {
        Some("GKP") => 0,
        Some("DEF") => 1,
        Some("MID") => 2,
        Some("FWD") => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_are_tenths() {
        assert_eq!(tenths(37), 3.7);
        assert_eq!(tenths(0), 0.0);
        assert_eq!(tenths(-1), -0.1);
        assert_eq!(tenths(1005), 100.5);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round1(2.25), 2.3);
        assert_eq!(round1(-2.25), -2.3);
        assert_eq!(round_to(1.005, 0), 1.0);
        assert_eq!(round_to(12.3456, 2), 12.35);
    }

    #[test]
    fn fdr_table_is_fixed() {
        let expected = ["Very Easy", "Easy", "Medium", "Hard", "Very Hard"];
        for (d, label) in (1..=5).zip(expected) {
            assert_eq!(fdr_label(Some(d)), label);
        }
        assert_eq!(fdr_label(Some(0)), "Unknown");
        assert_eq!(fdr_label(Some(6)), "Unknown");
        assert_eq!(fdr_label(None), "Unknown");
    }

    #[test]
    fn positions_map_and_pass_through() {
        assert_eq!(position_label(1), Some("GKP"));
        assert_eq!(position_label(4), Some("FWD"));
        assert_eq!(position_label(5), None);
        assert_eq!(position_label(0), None);
    }

    #[test]
    fn unknown_position_orders_last() {
        assert!(position_order(Some("GKP")) < position_order(Some("DEF")));
        assert!(position_order(Some("MID")) < position_order(Some("FWD")));
        assert!(position_order(Some("FWD")) < position_order(None));
    }
}
