use std::cmp::Reverse;

use itertools::Itertools;

use crate::model::{ChampionshipSummary, ClubStanding, Match};

impl ChampionshipSummary {
    /// Aggregate dashboard figures from a championship's matches and its
    /// ranked table. Ties for best attack or defense go to the higher-ranked club.
    pub fn build(matches: &[Match], standings: &[ClubStanding]) -> Self {
        let status_counts = matches.iter().map(|m| m.status).counts().into_iter().collect();

        let scores = matches.iter().filter_map(Match::final_score).collect_vec();
        let finished = scores.len();
        let total_goals: u32 = scores
            .iter()
            .map(|&(home, away)| u32::from(home) + u32::from(away))
            .sum();
        let goals_per_match = (finished > 0).then(|| f64::from(total_goals) / finished as f64);

        let played = || standings.iter().filter(|s| s.played > 0);

        Self {
            status_counts,
            finished,
            total_goals,
            goals_per_match,
            leader: standings.first().map(|s| s.club_id),
            best_attack: played().min_by_key(|s| Reverse(s.goals_for)).map(|s| s.club_id),
            best_defense: played().min_by_key(|s| s.goals_against).map(|s| s.club_id),
        }
    }
}
