use tracing::{debug, instrument};

use crate::error::Result;
use crate::league::{self, raw::RawMatch};
use crate::model::{ChampionshipId, ClubRef, Match};

#[instrument(skip(client))]
pub(crate) async fn get_matches(
    client: &reqwest::Client,
    base_url: &str,
    championship_id: ChampionshipId,
) -> Result<Vec<Match>> {
    let url = format!("{base_url}/championships/{championship_id}/matches");
    let raw: Vec<RawMatch> = league::get_json(client, &url).await?;
    let matches = raw
        .into_iter()
        .map(Match::try_from)
        .collect::<Result<Vec<_>>>()?;
    debug!(
        count = matches.len(),
        championship_id, "parsed championship matches"
    );
    Ok(matches)
}

#[instrument(skip(client))]
pub(crate) async fn get_clubs(
    client: &reqwest::Client,
    base_url: &str,
    championship_id: ChampionshipId,
) -> Result<Vec<ClubRef>> {
    let url = format!("{base_url}/championships/{championship_id}/clubs");
    let clubs: Vec<ClubRef> = league::get_json(client, &url).await?;
    debug!(
        count = clubs.len(),
        championship_id, "parsed enrolled clubs"
    );
    Ok(clubs)
}
