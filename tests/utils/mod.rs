pub mod assertions;
pub mod paifu_builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::{assert_conserves_snapshot, running_totals};
#[allow(unused_imports)]
pub use paifu_builders::{ron, tsumo, PaifuBuilder};
