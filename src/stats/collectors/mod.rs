mod deltas;
mod fans;

pub use deltas::DeltaCollector;
pub use fans::FanCollector;
