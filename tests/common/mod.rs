#![allow(dead_code)]

use std::sync::Arc;

use amara_engine::amara::clock::ManualClock;
use amara_engine::amara::{AmaraConfig, CompanionSession};

pub const FIXED_START_MS: i64 = 1_700_000_000_000;

pub fn manual_session() -> (CompanionSession, ManualClock) {
    let clock = ManualClock::new(FIXED_START_MS);
    let session = CompanionSession::new(AmaraConfig::default(), Arc::new(clock.clone()))
        .expect("default config is valid");
    (session, clock)
}
