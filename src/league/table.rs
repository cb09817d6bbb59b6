use std::fmt::{Display, Formatter};

use crate::model::{form_string, ClubStanding, RankedStanding};

const PODIUM_SIZE: usize = 3;

/// Attach 1-based positions to an already ranked table.
pub fn rank(standings: &[ClubStanding]) -> Vec<RankedStanding<'_>> {
    standings
        .iter()
        .enumerate()
        .map(|(i, standing)| RankedStanding {
            position: i + 1,
            is_podium: i < PODIUM_SIZE,
            standing,
        })
        .collect()
}

/// Plain-text rendering of a ranked table.
pub struct StandingsTable<'a>(pub &'a [ClubStanding]);

impl Display for StandingsTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name_width = self
            .0
            .iter()
            .map(|s| s.club_name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Club".len());

        writeln!(
            f,
            "{:>3}  {:<name_width$}  {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>4} {:>4}  Form",
            "#", "Club", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
        )?;
        for row in rank(self.0) {
            let s = row.standing;
            let marker = if row.is_podium { '*' } else { ' ' };
            writeln!(
                f,
                "{:>2}{marker}  {:<name_width$}  {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>+4} {:>4}  {}",
                row.position,
                s.club_name,
                s.played,
                s.won,
                s.drawn,
                s.lost,
                s.goals_for,
                s.goals_against,
                s.goal_difference,
                s.points,
                form_string(&s.form),
            )?;
        }
        Ok(())
    }
}
