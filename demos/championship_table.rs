use league_standings::{
    compute_standings, ChampionshipSummary, ClubRef, LeagueClient, Match, MatchStatus,
    StandingsTable,
};

fn sample() -> (Vec<Match>, Vec<ClubRef>) {
    let clubs = vec![
        ClubRef::new(1, "Atletico Serrano"),
        ClubRef::new(2, "Clube do Porto"),
        ClubRef::new(3, "Esporte Vale"),
        ClubRef::new(4, "Uniao Litoral"),
    ];
    let results = [
        (1, 2, Some((2, 1))),
        (3, 4, Some((0, 0))),
        (2, 3, Some((1, 3))),
        (4, 1, Some((2, 2))),
        (1, 3, None),
        (2, 4, None),
    ];
    let matches = results
        .iter()
        .zip(1..)
        .map(|(&(home, away, score), id)| Match {
            id,
            home_club_id: home,
            away_club_id: away,
            status: if score.is_some() {
                MatchStatus::Finished
            } else {
                MatchStatus::Scheduled
            },
            home_goals: score.map(|(h, _)| h),
            away_goals: score.map(|(_, a)| a),
            date: None,
        })
        .collect();
    (matches, clubs)
}

/// Prints a league table. With `LEAGUE_API_URL` set, the table for the
/// championship given as first argument is fetched from that API; otherwise a
/// built-in sample is used.
#[tokio::main]
async fn main() {
    if let Ok(base_url) = std::env::var("LEAGUE_API_URL") {
        let championship_id = std::env::args()
            .nth(1)
            .and_then(|id| id.parse().ok())
            .unwrap_or(1);
        let client = LeagueClient::new(base_url);
        let standings = client.get_standings(championship_id).await.unwrap();
        println!("{}", StandingsTable(&standings));
        return;
    }

    let (matches, clubs) = sample();
    let standings = compute_standings(&matches, &clubs).unwrap();
    println!("{}", StandingsTable(&standings));

    let summary = ChampionshipSummary::build(&matches, &standings);
    println!("{}", serde_json::to_string_pretty(&summary).unwrap());
}
