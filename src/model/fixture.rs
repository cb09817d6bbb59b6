use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::model::ClubId;

/// Identifier of a match, as assigned by the league backend.
pub type MatchId = u32;

/// Identifier of a championship.
pub type ChampionshipId = u32;

/// A single match of a championship.
///
/// Goal counts are only meaningful once the match is [`MatchStatus::Finished`];
/// a finished match with a missing count is treated as "result not entered yet".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home_club_id: ClubId,
    pub away_club_id: ClubId,
    pub status: MatchStatus,
    pub home_goals: Option<u16>,
    pub away_goals: Option<u16>,
    pub date: Option<NaiveDateTime>,
}

impl Match {
    /// Whether this match feeds into the league table.
    pub fn counts_for_standings(&self) -> bool {
        self.final_score().is_some()
    }

    /// The `(home, away)` score of a finished match with both counts entered.
    pub fn final_score(&self) -> Option<(u16, u16)> {
        if self.status != MatchStatus::Finished {
            return None;
        }
        self.home_goals.zip(self.away_goals)
    }
}

/// Lifecycle state of a match.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
    Suspended,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn fixture(status: MatchStatus, home: Option<u16>, away: Option<u16>) -> Match {
        Match {
            id: 1,
            home_club_id: 10,
            away_club_id: 20,
            status,
            home_goals: home,
            away_goals: away,
            date: None,
        }
    }

    #[test]
    fn test_only_finished_with_both_scores_counts() {
        assert!(fixture(MatchStatus::Finished, Some(2), Some(1)).counts_for_standings());
        assert!(!fixture(MatchStatus::Finished, Some(2), None).counts_for_standings());
        assert!(!fixture(MatchStatus::InProgress, Some(2), Some(1)).counts_for_standings());
        assert!(!fixture(MatchStatus::Scheduled, None, None).counts_for_standings());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            MatchStatus::from_str("in_progress").unwrap(),
            MatchStatus::InProgress
        );
        assert_eq!(MatchStatus::from_str("FINISHED").unwrap(), MatchStatus::Finished);
        assert_eq!(MatchStatus::Cancelled.to_string(), "cancelled");

        let status: MatchStatus = serde_json::from_str("\"postponed\"").unwrap();
        assert_eq!(status, MatchStatus::Unknown);
    }
}
