use crate::model::{ClubId, MatchId};

/// All errors that can occur while fetching results or computing standings.
#[derive(thiserror::Error, Debug)]
pub enum StandingsError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A match record could not be turned into a [`Match`](crate::Match).
    #[error("invalid match {match_id}: {reason}")]
    InvalidMatch {
        match_id: MatchId,
        reason: &'static str,
    },

    /// A finished match references a club that is not enrolled in the championship.
    #[error("match {match_id} references club {club_id}, which is not enrolled")]
    UnknownClub { match_id: MatchId, club_id: ClubId },

    /// A finished match lists the same club on both sides.
    #[error("match {match_id} lists club {club_id} as both home and away")]
    SelfMatch { match_id: MatchId, club_id: ClubId },

    /// The standings policy document could not be parsed.
    #[error("invalid standings policy: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, StandingsError>;
