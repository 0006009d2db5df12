pub mod fans;
pub mod models;
pub mod round;

pub use fans::{FanClassifier, FanCount, NAGASHI_FAN_ID};
pub use models::*;
pub use round::{round_label, Wind};

/// Seat counts a match can be played with.
pub const SUPPORTED_PLAYER_COUNTS: [usize; 2] = [3, 4];
