use crate::record::{FanClassifier, Hand, PlayerMatchAggregate};

use super::super::HandCollector;

/// Credits bonus-tile counts and rare fans to the seat that won with them.
pub struct FanCollector {
    classifier: FanClassifier,
}

impl FanCollector {
    pub fn new(classifier: FanClassifier) -> Self {
        Self { classifier }
    }
}

impl HandCollector for FanCollector {
    fn collect(&self, hand: &Hand, records: &mut [PlayerMatchAggregate]) {
        for win in &hand.wins {
            if let Some(record) = records.get_mut(win.seat) {
                record.reflect_fans(&win.fans, &self.classifier);
            }
        }
    }
}
