use tracing::{debug, instrument};

use crate::error::Result;
use crate::league::{championship, standings::StandingsCalculator};
use crate::model::*;
use crate::policy::StandingsPolicy;

/// The main entry point for reading a championship from the league API.
///
/// `LeagueClient` wraps a [`reqwest::Client`] and a base URL, fetches match
/// results and enrolled clubs, and turns them into a league table.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> league_standings::Result<()> {
/// use league_standings::{LeagueClient, StandingsTable};
///
/// let client = LeagueClient::new("https://league.example.com/api");
/// let standings = client.get_standings(12).await?;
/// println!("{}", StandingsTable(&standings));
/// # Ok(())
/// # }
/// ```
pub struct LeagueClient {
    http: reqwest::Client,
    base_url: String,
    calculator: StandingsCalculator,
}

impl LeagueClient {
    /// Create a new client with default HTTP settings and the default policy.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, auth headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: client,
            base_url,
            calculator: StandingsCalculator::default(),
        }
    }

    /// Replace the ranking rules used by [`get_standings`](Self::get_standings).
    pub fn with_policy(mut self, policy: StandingsPolicy) -> Self {
        self.calculator = StandingsCalculator::new(policy);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and validate every match of a championship.
    #[instrument(skip(self))]
    pub async fn get_matches(&self, championship_id: ChampionshipId) -> Result<Vec<Match>> {
        championship::get_matches(&self.http, &self.base_url, championship_id).await
    }

    /// Fetch the clubs enrolled in a championship.
    #[instrument(skip(self))]
    pub async fn get_clubs(&self, championship_id: ChampionshipId) -> Result<Vec<ClubRef>> {
        championship::get_clubs(&self.http, &self.base_url, championship_id).await
    }

    /// Fetch a championship's results and compute its league table.
    #[instrument(skip(self))]
    pub async fn get_standings(&self, championship_id: ChampionshipId) -> Result<Vec<ClubStanding>> {
        let matches = self.get_matches(championship_id).await?;
        let clubs = self.get_clubs(championship_id).await?;
        let standings = self.calculator.compute(&matches, &clubs)?;
        debug!(championship_id, clubs = standings.len(), "built standings");
        Ok(standings)
    }

    /// Fetch a championship and aggregate its dashboard figures.
    #[instrument(skip(self))]
    pub async fn get_summary(&self, championship_id: ChampionshipId) -> Result<ChampionshipSummary> {
        let matches = self.get_matches(championship_id).await?;
        let clubs = self.get_clubs(championship_id).await?;
        let standings = self.calculator.compute(&matches, &clubs)?;
        Ok(ChampionshipSummary::build(&matches, &standings))
    }
}
