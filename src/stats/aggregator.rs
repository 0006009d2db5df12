use std::sync::Arc;
use tracing::{debug, instrument};

use crate::record::{FanClassifier, Match, PlayerMatchAggregate};

use super::{DeltaCollector, FanCollector, HandCollector, PlayerTable};

/// Folds replayed matches into per-player summaries.
pub struct Aggregator {
    collectors: Vec<Arc<dyn HandCollector>>,
}

impl Aggregator {
    pub fn builder(classifier: FanClassifier) -> AggregatorBuilder {
        AggregatorBuilder::new(classifier)
    }

    pub fn new(classifier: FanClassifier) -> Self {
        Self::builder(classifier).build()
    }

    /// Adds one summary per seat of `record` to `table`.
    #[instrument(skip(self, record, table), fields(uuid = %record.uuid))]
    pub fn fold_match(&self, record: &Match, table: &mut PlayerTable) {
        let mut summaries: Vec<PlayerMatchAggregate> = record
            .scores
            .iter()
            .map(|&points| PlayerMatchAggregate::new(points))
            .collect();

        for hand in &record.hands {
            for collector in &self.collectors {
                collector.collect(hand, &mut summaries);
            }
        }

        for (name, summary) in record.names.iter().zip(summaries) {
            debug!(
                player = %name,
                score = summary.score,
                max_gain = summary.max_gain,
                pay_sum = summary.pay_sum,
                "Folded match summary"
            );
            table.record(name, summary);
        }
    }

    /// Folds `matches` in order into a fresh table.
    pub fn fold_all<'a>(&self, matches: impl IntoIterator<Item = &'a Match>) -> PlayerTable {
        let mut table = PlayerTable::new();
        for record in matches {
            self.fold_match(record, &mut table);
        }
        table
    }
}

pub struct AggregatorBuilder {
    collectors: Vec<Arc<dyn HandCollector>>,
}

impl AggregatorBuilder {
    fn new(classifier: FanClassifier) -> Self {
        Self {
            collectors: vec![
                Arc::new(DeltaCollector::new()),
                Arc::new(FanCollector::new(classifier)),
            ],
        }
    }

    pub fn with_collector(mut self, collector: Arc<dyn HandCollector>) -> Self {
        self.collectors.push(collector);
        self
    }

    pub fn build(self) -> Aggregator {
        Aggregator {
            collectors: self.collectors,
        }
    }
}
