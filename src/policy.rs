use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::error::Result;
use crate::model::ClubStanding;

/// A single ranking criterion used to order the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RankCriterion {
    Points,
    GoalDifference,
    GoalsFor,
    /// Lower is better.
    GoalsAgainst,
    Won,
    /// Lower is better.
    Lost,
    /// Lower is better.
    Played,
}

impl RankCriterion {
    /// Compare two rows so that the better row sorts first.
    pub fn compare(self, a: &ClubStanding, b: &ClubStanding) -> Ordering {
        match self {
            RankCriterion::Points => b.points.cmp(&a.points),
            RankCriterion::GoalDifference => b.goal_difference.cmp(&a.goal_difference),
            RankCriterion::GoalsFor => b.goals_for.cmp(&a.goals_for),
            RankCriterion::GoalsAgainst => a.goals_against.cmp(&b.goals_against),
            RankCriterion::Won => b.won.cmp(&a.won),
            RankCriterion::Lost => a.lost.cmp(&b.lost),
            RankCriterion::Played => a.played.cmp(&b.played),
        }
    }
}

/// What to do with a finished match whose club is not enrolled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownClubPolicy {
    /// Fail the whole computation with [`StandingsError::UnknownClub`](crate::StandingsError::UnknownClub).
    #[default]
    Reject,
    /// Add a row for the club, labelled `Club {id}`.
    Synthesize,
}

/// Rules for turning results into a table.
///
/// Defaults follow the usual football league conventions: three points for a
/// win, one for a draw, a five-match form window, and ties broken by goal
/// difference and then goals scored. Club name and id always break the last
/// tie; names compare case-insensitively first, so `"ajax"` ranks before
/// `"Zenit"`.
///
/// ```
/// use league_standings::{RankCriterion, StandingsPolicy};
///
/// let policy = StandingsPolicy::from_toml_str(
///     r#"
///     points_for_win = 2
///     tie_breakers = ["points", "goals_for"]
///     "#,
/// )
/// .unwrap();
/// assert_eq!(policy.points_for_win, 2);
/// assert_eq!(policy.form_window, 5);
/// assert_eq!(policy.tie_breakers, vec![RankCriterion::Points, RankCriterion::GoalsFor]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsPolicy {
    pub points_for_win: u32,
    pub points_for_draw: u32,
    pub points_for_loss: u32,
    pub form_window: usize,
    pub tie_breakers: Vec<RankCriterion>,
    pub unknown_clubs: UnknownClubPolicy,
}

impl StandingsPolicy {
    /// Parse a policy from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        Ok(toml::from_str(document)?)
    }

    /// Full ordering of two rows: configured criteria, then name ignoring
    /// case, then exact name, then id.
    pub(crate) fn compare(&self, a: &ClubStanding, b: &ClubStanding) -> Ordering {
        self.tie_breakers
            .iter()
            .map(|criterion| criterion.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| {
                folded(&a.club_name)
                    .cmp(folded(&b.club_name))
                    .then_with(|| a.club_name.cmp(&b.club_name))
                    .then_with(|| a.club_id.cmp(&b.club_id))
            })
    }
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

impl Default for StandingsPolicy {
    fn default() -> Self {
        Self {
            points_for_win: 3,
            points_for_draw: 1,
            points_for_loss: 0,
            form_window: 5,
            tie_breakers: vec![
                RankCriterion::Points,
                RankCriterion::GoalDifference,
                RankCriterion::GoalsFor,
            ],
            unknown_clubs: UnknownClubPolicy::Reject,
        }
    }
}
