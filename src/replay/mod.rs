pub mod engine;
pub mod lookback;

mod errors;

pub use engine::{reconstruct_match, Reconstruction, ReplayEngine};
pub use errors::{ReplayError, ReplayWarning};
pub use lookback::DISCARD_LOOKBACK;
