pub use client::LeagueClient;
pub use error::{Result, StandingsError};
pub use league::standings::{compute_standings, StandingsCalculator};
pub use league::table::{rank, StandingsTable};
pub use model::*;
pub use policy::{RankCriterion, StandingsPolicy, UnknownClubPolicy};

pub mod client;
pub mod error;
pub mod model;
pub mod policy;
pub(crate) mod league;
