use std::collections::hash_map::Entry;
use std::collections::HashMap;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::error::{Result, StandingsError};
use crate::model::{ClubId, ClubRef, ClubStanding, Match, MatchId, MatchStatus};
use crate::policy::{StandingsPolicy, UnknownClubPolicy};

/// Compute the league table for one championship using the default policy.
///
/// Every enrolled club gets a row, including clubs that have not played yet.
/// Only finished matches with both scores entered are counted.
///
/// ```
/// use league_standings::{compute_standings, ClubRef, Match, MatchStatus};
///
/// let clubs = [ClubRef::new(1, "Aurora"), ClubRef::new(2, "Boreal")];
/// let matches = [Match {
///     id: 1,
///     home_club_id: 1,
///     away_club_id: 2,
///     status: MatchStatus::Finished,
///     home_goals: Some(2),
///     away_goals: Some(1),
///     date: None,
/// }];
///
/// let table = compute_standings(&matches, &clubs).unwrap();
/// assert_eq!(table[0].club_name, "Aurora");
/// assert_eq!(table[0].points, 3);
/// ```
pub fn compute_standings(matches: &[Match], clubs: &[ClubRef]) -> Result<Vec<ClubStanding>> {
    StandingsCalculator::default().compute(matches, clubs)
}

/// Builds league tables under a fixed [`StandingsPolicy`].
#[derive(Debug, Clone, Default)]
pub struct StandingsCalculator {
    policy: StandingsPolicy,
}

impl StandingsCalculator {
    pub fn new(policy: StandingsPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &StandingsPolicy {
        &self.policy
    }

    /// Fold every counted match into per-club rows and rank them.
    ///
    /// Matches are folded in `(date, id)` order so that form reflects when the
    /// games were played rather than the order they were supplied in. Neither
    /// input is modified.
    pub fn compute(&self, matches: &[Match], clubs: &[ClubRef]) -> Result<Vec<ClubStanding>> {
        let mut table = Table::new(clubs);

        let results = matches
            .iter()
            .filter_map(|m| match m.final_score() {
                Some(score) => Some((m, score)),
                None => {
                    if m.status == MatchStatus::Finished {
                        debug!(match_id = m.id, "skipping finished match without a full score");
                    }
                    None
                }
            })
            .sorted_by_key(|(m, _)| (m.date, m.id))
            .collect_vec();

        for &(m, (home_goals, away_goals)) in &results {
            if m.home_club_id == m.away_club_id {
                warn!(match_id = m.id, club_id = m.home_club_id, "club plays itself");
                return Err(StandingsError::SelfMatch {
                    match_id: m.id,
                    club_id: m.home_club_id,
                });
            }

            let home = table.row_for(m.id, m.home_club_id, self.policy.unknown_clubs)?;
            table.rows[home].record(home_goals, away_goals, &self.policy);
            let away = table.row_for(m.id, m.away_club_id, self.policy.unknown_clubs)?;
            table.rows[away].record(away_goals, home_goals, &self.policy);
        }

        let mut rows = table.rows;
        rows.sort_by(|a, b| self.policy.compare(a, b));
        debug!(
            clubs = rows.len(),
            counted = results.len(),
            "computed standings"
        );
        Ok(rows)
    }
}

/// Accumulators indexed by club id, in enrolment order.
struct Table {
    rows: Vec<ClubStanding>,
    index: HashMap<ClubId, usize>,
}

impl Table {
    fn new(clubs: &[ClubRef]) -> Self {
        let mut rows = Vec::with_capacity(clubs.len());
        let mut index = HashMap::with_capacity(clubs.len());
        for club in clubs {
            // first enrolment wins
            if let Entry::Vacant(slot) = index.entry(club.id) {
                slot.insert(rows.len());
                rows.push(ClubStanding::new(club));
            }
        }
        Self { rows, index }
    }

    fn row_for(
        &mut self,
        match_id: MatchId,
        club_id: ClubId,
        policy: UnknownClubPolicy,
    ) -> Result<usize> {
        if let Some(&i) = self.index.get(&club_id) {
            return Ok(i);
        }
        match policy {
            UnknownClubPolicy::Reject => {
                warn!(match_id, club_id, "finished match references a club that is not enrolled");
                Err(StandingsError::UnknownClub { match_id, club_id })
            }
            UnknownClubPolicy::Synthesize => {
                debug!(match_id, club_id, "adding row for club that is not enrolled");
                let i = self.rows.len();
                self.rows
                    .push(ClubStanding::new(&ClubRef::new(club_id, format!("Club {club_id}"))));
                self.index.insert(club_id, i);
                Ok(i)
            }
        }
    }
}
