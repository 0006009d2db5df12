pub mod aggregator;
pub mod collectors;
pub mod models;

pub use aggregator::{Aggregator, AggregatorBuilder};
pub use collectors::{DeltaCollector, FanCollector};
pub use models::PlayerTable;

use crate::record::{Hand, PlayerMatchAggregate};

/// Folds one hand into the per-seat summaries of the match being aggregated.
///
/// `records` is indexed by seat and has one entry per player.
pub trait HandCollector: Send + Sync {
    fn collect(&self, hand: &Hand, records: &mut [PlayerMatchAggregate]);
}
