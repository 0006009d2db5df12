use crate::paifu::Action;

/// How many actions before a ron are searched for the deal-in discard.
///
/// The export places the discard within a few actions of the win (player input
/// and call records may sit in between). The bound is empirical: a ron whose
/// discard lies further back is treated as unresolved.
pub const DISCARD_LOOKBACK: usize = 6;

/// Seat of the most recent discard among the last `window` actions of `history`.
pub fn find_discarder(history: &[Action], window: usize) -> Option<usize> {
    history.iter().rev().take(window).find_map(Action::discard_seat)
}
