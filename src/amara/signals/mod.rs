pub mod collector;
pub mod sampler;

pub use collector::{SignalCollector, SignalEvent};
pub use sampler::SignalSampler;
