pub mod checkin;
pub mod choices;
pub mod clock;
pub mod composer;
pub mod config;
pub mod engine;
pub mod error;
pub mod inference;
pub mod metrics;
pub mod policy;
pub mod replay;
pub mod signals;
pub mod types;

pub use config::AmaraConfig;
pub use engine::{Assessment, CompanionSession};
pub use error::AmaraError;
pub use types::*;
