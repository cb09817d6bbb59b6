use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{ClubId, ClubRef};
use crate::policy::StandingsPolicy;

/// The result of one match from a single club's point of view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
pub enum Outcome {
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    Win,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    Draw,
    #[serde(rename = "L")]
    #[strum(serialize = "L")]
    Loss,
}

impl Outcome {
    pub fn from_score(scored: u16, conceded: u16) -> Self {
        match scored.cmp(&conceded) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Loss,
        }
    }
}

/// One club's row in the league table.
///
/// Standings are derived values: they are rebuilt from zero on every
/// computation and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubStanding {
    pub club_id: ClubId,
    pub club_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    /// Most recent results, oldest first.
    pub form: Vec<Outcome>,
}

impl ClubStanding {
    pub fn new(club: &ClubRef) -> Self {
        Self {
            club_id: club.id,
            club_name: club.name.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: Vec::new(),
        }
    }

    /// Fold one finished match into the row.
    pub(crate) fn record(&mut self, scored: u16, conceded: u16, policy: &StandingsPolicy) {
        let outcome = Outcome::from_score(scored, conceded);

        self.played += 1;
        self.goals_for += u32::from(scored);
        self.goals_against += u32::from(conceded);
        self.goal_difference += i32::from(scored) - i32::from(conceded);

        match outcome {
            Outcome::Win => {
                self.won += 1;
                self.points = self.points.saturating_add(policy.points_for_win);
            }
            Outcome::Draw => {
                self.drawn += 1;
                self.points = self.points.saturating_add(policy.points_for_draw);
            }
            Outcome::Loss => {
                self.lost += 1;
                self.points = self.points.saturating_add(policy.points_for_loss);
            }
        }

        self.form.push(outcome);
        if self.form.len() > policy.form_window {
            let excess = self.form.len() - policy.form_window;
            self.form.drain(..excess);
        }
    }
}

/// A standing together with its place in the table, as handed to a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct RankedStanding<'a> {
    /// 1-based table position.
    pub position: usize,
    pub is_podium: bool,
    pub standing: &'a ClubStanding,
}

/// Render a form sequence as glyphs, e.g. `"WDLWW"`.
pub fn form_string(form: &[Outcome]) -> String {
    form.iter().map(Outcome::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_row_consistent() {
        let policy = StandingsPolicy::default();
        let mut row = ClubStanding::new(&ClubRef::new(1, "Porto Alegre FC"));
        row.record(2, 1, &policy);
        row.record(0, 0, &policy);
        row.record(1, 3, &policy);

        assert_eq!(row.played, row.won + row.drawn + row.lost);
        assert_eq!((row.won, row.drawn, row.lost), (1, 1, 1));
        assert_eq!(row.points, 4);
        assert_eq!(row.goals_for, 3);
        assert_eq!(row.goals_against, 4);
        assert_eq!(row.goal_difference, -1);
        assert_eq!(form_string(&row.form), "WDL");
    }

    #[test]
    fn test_form_drops_oldest_beyond_window() {
        let policy = StandingsPolicy {
            form_window: 2,
            ..Default::default()
        };
        let mut row = ClubStanding::new(&ClubRef::new(1, "Atletico"));
        row.record(1, 0, &policy);
        row.record(0, 1, &policy);
        row.record(2, 2, &policy);

        assert_eq!(row.form, vec![Outcome::Loss, Outcome::Draw]);
    }

    #[test]
    fn test_points_saturate_with_huge_policy_values() {
        let policy = StandingsPolicy {
            points_for_win: u32::MAX,
            ..Default::default()
        };
        let mut row = ClubStanding::new(&ClubRef::new(1, "Atletico"));
        row.record(1, 0, &policy);
        row.record(1, 0, &policy);
        row.record(0, 0, &policy);

        assert_eq!(row.won, 2);
        assert_eq!(row.points, u32::MAX);
    }

    #[test]
    fn test_outcome_serializes_as_glyph() {
        let json = serde_json::to_string(&[Outcome::Win, Outcome::Draw, Outcome::Loss]).unwrap();
        assert_eq!(json, r#"["W","D","L"]"#);
    }
}
