pub mod json;
pub mod sheet;
pub mod standings;

mod errors;

pub use errors::ReportError;
pub use json::JsonReporter;
pub use sheet::{HandRow, ScoreSheet};
pub use standings::{PlayerRow, TeamStandings};

use async_trait::async_trait;

use crate::record::Match;
use crate::stats::PlayerTable;

/// Output side of the ledger. Implementations own layout, storage and any
/// rate limiting; they receive finished records and must not modify them.
#[async_trait]
pub trait Reporter: Send + Sync {
    /// `number` is the 1-based position of the match within its bracket.
    async fn publish_match(&self, number: usize, record: &Match) -> Result<(), ReportError>;

    async fn publish_standings(
        &self,
        matches: &[Match],
        table: &PlayerTable,
    ) -> Result<(), ReportError>;

    async fn publish_players(&self, table: &PlayerTable) -> Result<(), ReportError>;
}
