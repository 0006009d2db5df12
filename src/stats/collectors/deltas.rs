use crate::record::{Hand, PlayerMatchAggregate};

use super::super::HandCollector;

/// Tracks the best single-hand gain and the total paid out, from main deltas only.
pub struct DeltaCollector;

impl Default for DeltaCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl DeltaCollector {
    pub fn new() -> Self {
        Self
    }
}

impl HandCollector for DeltaCollector {
    fn collect(&self, hand: &Hand, records: &mut [PlayerMatchAggregate]) {
        for (record, &delta) in records.iter_mut().zip(&hand.main_deltas) {
            record.max_gain = record.max_gain.max(delta);
            record.pay_sum += (-delta).max(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(main_deltas: Vec<i32>) -> Hand {
        Hand {
            main_deltas,
            ..Hand::new(4, "東一局\n0本場".into())
        }
    }

    fn records() -> Vec<PlayerMatchAggregate> {
        vec![PlayerMatchAggregate::default(); 4]
    }

    #[test]
    fn tracks_running_maximum() {
        let collector = DeltaCollector::new();
        let mut records = records();

        collector.collect(&hand(vec![8000, -8000, 0, 0]), &mut records);
        collector.collect(&hand(vec![3900, 0, -3900, 0]), &mut records);

        assert_eq!(records[0].max_gain, 8000);
        assert_eq!(records[1].max_gain, 0);
    }

    #[test]
    fn sums_only_payments() {
        let collector = DeltaCollector::new();
        let mut records = records();

        collector.collect(&hand(vec![-1000, -500, 2000, -500]), &mut records);
        collector.collect(&hand(vec![-2600, 2600, 0, 0]), &mut records);

        assert_eq!(records[0].pay_sum, 3600);
        assert_eq!(records[1].pay_sum, 500);
        assert_eq!(records[2].pay_sum, 0);
    }

    #[test]
    fn losing_every_hand_keeps_max_gain_at_zero() {
        let collector = DeltaCollector::new();
        let mut records = records();

        collector.collect(&hand(vec![-1000, 1000, 0, 0]), &mut records);
        collector.collect(&hand(vec![-2000, 0, 2000, 0]), &mut records);

        assert_eq!(records[0].max_gain, 0);
    }
}
