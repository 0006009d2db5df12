//! Ledger assertion helpers
#![allow(dead_code)] // Test utilities may not all be used in every test

use paifu_ledger::{Hand, Match};

/// Every seat's main + sub delta must equal what the log's own snapshot moved,
/// measured from the scores at the start of the hand.
pub fn assert_conserves_snapshot(hand: &Hand, start: &[i32], old: &[i32], delta: &[i32]) {
    for seat in 0..hand.player_count() {
        let expected = old[seat] - start[seat] + delta[seat];
        assert_eq!(
            hand.main_deltas[seat] + hand.sub_deltas[seat],
            expected,
            "seat {} of {:?} does not match the log snapshot",
            seat,
            hand.round_label
        );
    }

    let expected_total: i32 = (0..hand.player_count())
        .map(|seat| old[seat] - start[seat] + delta[seat])
        .sum();
    let total: i32 = hand.main_deltas.iter().chain(&hand.sub_deltas).sum();
    assert_eq!(total, expected_total, "net movement differs for {:?}", hand.round_label);
}

/// Seat scores after folding every hand's deltas onto `origin`.
pub fn running_totals(record: &Match, origin: i32) -> Vec<i32> {
    let mut scores = vec![origin; record.player_count()];
    for hand in &record.hands {
        for (seat, score) in scores.iter_mut().enumerate() {
            *score += hand.net_delta(seat).unwrap_or(0);
        }
    }
    scores
}
