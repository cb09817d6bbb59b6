use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{ClubId, MatchStatus};

/// Headline numbers for a championship dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionshipSummary {
    pub status_counts: BTreeMap<MatchStatus, usize>,
    /// Matches that count towards the table.
    pub finished: usize,
    pub total_goals: u32,
    pub goals_per_match: Option<f64>,
    pub leader: Option<ClubId>,
    /// Club with the most goals scored.
    pub best_attack: Option<ClubId>,
    /// Club with the fewest goals conceded, among clubs that have played.
    pub best_defense: Option<ClubId>,
}
