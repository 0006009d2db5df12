// Library crate for the paifu ledger
// Replays platform game logs into per-hand ledgers and per-player tournament summaries

pub mod config;
pub mod lookup;
pub mod paifu;
pub mod pipeline;
pub mod record;
pub mod replay;
pub mod report;
pub mod shared;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use config::Config;
pub use lookup::{FanCatalog, MemberDirectory, NoDirectory, Roster};
pub use paifu::RawPaifu;
pub use pipeline::{process_directory, BracketRun};
pub use record::{
    FanClassifier, FanCount, Hand, Match, PlayerAggregate, PlayerMatchAggregate, WinEvent, WinKind,
};
pub use replay::{reconstruct_match, Reconstruction, ReplayEngine, ReplayError, ReplayWarning};
pub use report::{JsonReporter, Reporter, ScoreSheet, TeamStandings};
pub use shared::AppError;
pub use stats::{Aggregator, PlayerTable};
