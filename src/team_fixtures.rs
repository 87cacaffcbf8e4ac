use crate::derive::fdr_label;
use crate::index::ReferenceIndex;
use crate::raw::RawFixture;
use crate::snapshot::FixtureRecord;

/// One record per fixture that has been scheduled into a round, in provider order.
pub fn project_fixtures(fixtures: &[RawFixture], index: &ReferenceIndex) -> Vec<FixtureRecord> {
    fixtures
        .iter()
        .filter_map(|f| build_fixture(f, index))
        .collect()
}

fn build_fixture(fixture: &RawFixture, index: &ReferenceIndex) -> Option<FixtureRecord> {
    let gw = fixture.event?;
    Some(FixtureRecord {
        id: fixture.id,
        gw,
        kickoff: fixture.kickoff_time.clone(),
        finished: fixture.finished,
        home_team: index.team_name(fixture.team_h),
        home_short: index.team_short(fixture.team_h),
        home_id: fixture.team_h,
        away_team: index.team_name(fixture.team_a),
        away_short: index.team_short(fixture.team_a),
        away_id: fixture.team_a,
        home_score: fixture.team_h_score,
        away_score: fixture.team_a_score,
        home_diff: fixture.team_h_difficulty,
        away_diff: fixture.team_a_difficulty,
        home_diff_label: fdr_label(fixture.team_h_difficulty),
        away_diff_label: fdr_label(fixture.team_a_difficulty),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawTeam;

    fn index() -> ReferenceIndex {
        ReferenceIndex::build(
            &[],
            &[RawTeam {
                id: 1,
                name: "Liverpool".to_string(),
                short_name: "LIV".to_string(),
            }],
        )
    }

    #[test]
    fn unscheduled_fixtures_are_dropped_and_order_kept() {
        let fixtures = vec![
            RawFixture {
                id: 30,
                event: Some(9),
                ..RawFixture::default()
            },
            RawFixture {
                id: 10,
                event: None,
                ..RawFixture::default()
            },
            RawFixture {
                id: 20,
                event: Some(2),
                ..RawFixture::default()
            },
        ];
        let ids: Vec<u32> = project_fixtures(&fixtures, &index())
            .iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec![30, 20]);
    }

    #[test]
    fn names_labels_and_scores() {
        let fixture = RawFixture {
            id: 1,
            event: Some(3),
            kickoff_time: Some("2026-09-01T14:00:00Z".to_string()),
            finished: true,
            team_h: 1,
            team_a: 5,
            team_h_score: Some(2),
            team_a_score: Some(0),
            team_h_difficulty: Some(2),
            team_a_difficulty: Some(5),
        };
        let rec = &project_fixtures(&[fixture], &index())[0];
        assert_eq!(rec.home_team, "Liverpool");
        assert_eq!(rec.home_short, "LIV");
        assert_eq!(rec.away_team, "?");
        assert_eq!(rec.away_short, "?");
        assert_eq!(rec.home_score, Some(2));
        assert_eq!(rec.home_diff_label, "Easy");
        assert_eq!(rec.away_diff_label, "Very Hard");
    }

    #[test]
    fn upcoming_fixture_has_null_scores() {
        let fixture = RawFixture {
            id: 2,
            event: Some(4),
            team_h: 1,
            team_a: 1,
            ..RawFixture::default()
        };
        let rec = &project_fixtures(&[fixture], &index())[0];
        assert!(!rec.finished);
        assert_eq!(rec.home_score, None);
        assert_eq!(rec.away_score, None);
        assert_eq!(rec.kickoff, None);
        assert_eq!(rec.home_diff_label, "Unknown");
    }
}
