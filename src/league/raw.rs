use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, StandingsError};
use crate::model::{ClubId, Match, MatchId, MatchStatus};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A match exactly as the backend sends it, before any validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawMatch {
    pub id: MatchId,
    pub home_club_id: ClubId,
    pub away_club_id: ClubId,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub home_goals: Option<Value>,
    #[serde(default)]
    pub away_goals: Option<Value>,
    #[serde(default)]
    pub date: Option<String>,
}

impl TryFrom<RawMatch> for Match {
    type Error = StandingsError;

    fn try_from(raw: RawMatch) -> Result<Self> {
        let status = raw.status.as_deref().map(parse_status).unwrap_or_default();
        let home_goals = raw.home_goals.as_ref().and_then(parse_goals);
        let away_goals = raw.away_goals.as_ref().and_then(parse_goals);

        let m = Match {
            id: raw.id,
            home_club_id: raw.home_club_id,
            away_club_id: raw.away_club_id,
            status,
            home_goals,
            away_goals,
            date: raw.date.as_deref().and_then(parse_date),
        };

        if m.home_club_id == m.away_club_id {
            // only a counted result can corrupt the table
            if m.counts_for_standings() {
                return Err(StandingsError::InvalidMatch {
                    match_id: m.id,
                    reason: "home and away club are the same",
                });
            }
            debug!(match_id = m.id, "uncounted match lists the same club twice");
        }
        if m.status == MatchStatus::Finished && !m.counts_for_standings() {
            debug!(match_id = m.id, "finished match has no usable score");
        }

        Ok(m)
    }
}

/// Parse a status string, accepting `in-progress` as well as `in_progress`.
fn parse_status(status: &str) -> MatchStatus {
    status.trim().replace('-', "_").parse().unwrap_or_default()
}

/// Accept goal counts sent as numbers or numeric strings.
fn parse_goals(value: &Value) -> Option<u16> {
    let goals = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    u16::try_from(goals).ok()
}

fn parse_date(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.naive_utc());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(date, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(date, DATE_FORMAT)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn decode(value: Value) -> Result<Match> {
        let raw: RawMatch = serde_json::from_value(value).unwrap();
        Match::try_from(raw)
    }

    #[test]
    fn test_finished_match() {
        let m = decode(json!({
            "id": 7,
            "homeClubId": 1,
            "awayClubId": 2,
            "status": "finished",
            "homeGoals": 2,
            "awayGoals": "1",
            "date": "2024-03-10T16:00:00Z"
        }))
        .unwrap();

        assert_eq!(m.status, MatchStatus::Finished);
        assert_eq!(m.final_score(), Some((2, 1)));
        assert_eq!(
            m.date,
            NaiveDate::from_ymd_opt(2024, 3, 10)
                .and_then(|d| d.and_hms_opt(16, 0, 0))
        );
    }

    #[test]
    fn test_bad_goals_become_missing() {
        let m = decode(json!({
            "id": 8,
            "homeClubId": 1,
            "awayClubId": 2,
            "status": "finished",
            "homeGoals": -1,
            "awayGoals": null
        }))
        .unwrap();
        assert_eq!(m.home_goals, None);
        assert_eq!(m.away_goals, None);
        assert!(!m.counts_for_standings());

        let m = decode(json!({
            "id": 9,
            "homeClubId": 1,
            "awayClubId": 2,
            "status": "finished",
            "homeGoals": "two",
            "awayGoals": 70000
        }))
        .unwrap();
        assert_eq!(m.home_goals, None);
        assert_eq!(m.away_goals, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let m = decode(json!({ "id": 3, "homeClubId": 1, "awayClubId": 2 })).unwrap();
        assert_eq!(m.status, MatchStatus::Unknown);
        assert_eq!(m.date, None);
        assert_eq!(m.home_goals, None);
    }

    #[test]
    fn test_status_variants() {
        assert_eq!(parse_status("in-progress"), MatchStatus::InProgress);
        assert_eq!(parse_status(" Scheduled "), MatchStatus::Scheduled);
        assert_eq!(parse_status("abandoned"), MatchStatus::Unknown);
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(18, 30, 0));
        assert_eq!(parse_date("2024-05-01T18:30:00"), expected);
        assert_eq!(parse_date("2024-05-01 18:30:00"), expected);
        assert_eq!(parse_date("2024-05-01T20:30:00+02:00"), expected);
        assert_eq!(
            parse_date("2024-05-01"),
            NaiveDate::from_ymd_opt(2024, 5, 1).map(|d| d.and_time(NaiveTime::MIN))
        );
        assert_eq!(parse_date("next tuesday"), None);
    }

    #[test]
    fn test_same_club_rejected_when_counted() {
        let result = decode(json!({
            "id": 4,
            "homeClubId": 5,
            "awayClubId": 5,
            "status": "finished",
            "homeGoals": 1,
            "awayGoals": 0
        }));
        assert!(matches!(
            result,
            Err(StandingsError::InvalidMatch { match_id: 4, .. })
        ));
    }

    #[test]
    fn test_same_club_kept_when_not_counted() {
        let scheduled = decode(json!({
            "id": 5,
            "homeClubId": 3,
            "awayClubId": 3,
            "status": "scheduled"
        }))
        .unwrap();
        assert_eq!(scheduled.status, MatchStatus::Scheduled);
        assert!(!scheduled.counts_for_standings());

        let unscored = decode(json!({
            "id": 6,
            "homeClubId": 3,
            "awayClubId": 3,
            "status": "finished",
            "homeGoals": null,
            "awayGoals": 2
        }))
        .unwrap();
        assert!(!unscored.counts_for_standings());
    }

    #[test]
    fn test_batch_with_bad_fixture_still_decodes() {
        let batch: Vec<RawMatch> = serde_json::from_value(json!([
            { "id": 1, "homeClubId": 1, "awayClubId": 2, "status": "finished", "homeGoals": 2, "awayGoals": 1 },
            { "id": 2, "homeClubId": 3, "awayClubId": 3, "status": "scheduled" }
        ]))
        .unwrap();
        let matches = batch
            .into_iter()
            .map(Match::try_from)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(matches.len(), 2);
    }
}
