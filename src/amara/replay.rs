use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::amara::clock::ManualClock;
use crate::amara::config::AmaraConfig;
use crate::amara::engine::{Assessment, CompanionSession};
use crate::amara::error::AmaraError;
use crate::amara::signals::SignalEvent;
use crate::amara::types::{DockState, PageContext};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedEvent {
    pub at_ms: i64,
    pub event: SignalEvent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplayScript {
    pub config: AmaraConfig,
    pub context: PageContext,
    pub dock: DockState,
    pub start_ms: i64,
    pub end_ms: Option<i64>,
    pub events: Vec<TimedEvent>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self, AmaraError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AmaraError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Replays interval sampling on a manual clock so results match a live sampler.
///
/// Between two script events nothing but the clock changes, so only the last boundary of each
/// interval before the target time needs to be sampled.
struct VirtualSampler {
    clock: ManualClock,
    tick: Boundary,
    depth: Boundary,
}

struct Boundary {
    every: i64,
    next: Option<i64>,
}

impl Boundary {
    fn new(start_ms: i64, every_ms: u64) -> Result<Self, AmaraError> {
        let every = i64::try_from(every_ms.max(1))
            .map_err(|_| AmaraError::InvalidConfig(format!("interval {every_ms}ms too large")))?;
        let next = start_ms
            .checked_add(every)
            .ok_or(AmaraError::TimeOutOfRange { at_ms: start_ms })?;
        Ok(Self {
            every,
            next: Some(next),
        })
    }

    /// Last boundary at or before `at_ms`, moving `next` past it.
    fn take_last(&mut self, at_ms: i64) -> Option<i64> {
        let next = self.next.filter(|&n| n <= at_ms)?;
        let steps = (i128::from(at_ms) - i128::from(next)) / i128::from(self.every);
        let last = i64::try_from(i128::from(next) + steps * i128::from(self.every)).ok()?;
        self.next = last.checked_add(self.every);
        Some(last)
    }
}

impl VirtualSampler {
    fn new(clock: ManualClock, start_ms: i64, config: &AmaraConfig) -> Result<Self, AmaraError> {
        Ok(Self {
            clock,
            tick: Boundary::new(start_ms, config.sampling.tick_interval_ms)?,
            depth: Boundary::new(start_ms, config.sampling.read_depth_interval_ms)?,
        })
    }

    fn advance_to(&mut self, session: &CompanionSession, at_ms: i64) {
        if let Some(last) = self.tick.take_last(at_ms) {
            self.clock.set(last);
            session.tick();
        }
        if let Some(last) = self.depth.take_last(at_ms) {
            self.clock.set(last);
            session.sample_read_depth();
        }
        self.clock.set(at_ms);
    }
}

pub fn run(script: &ReplayScript) -> Result<Assessment, AmaraError> {
    let clock = ManualClock::new(script.start_ms);
    let mut session = CompanionSession::new(script.config.clone(), Arc::new(clock.clone()))?;
    session.set_dock_state(script.dock);
    let mut sampler = VirtualSampler::new(clock, script.start_ms, &script.config)?;

    let mut previous = script.start_ms;
    for (index, timed) in script.events.iter().enumerate() {
        if timed.at_ms < previous {
            return Err(AmaraError::EventOutOfOrder {
                index,
                at_ms: timed.at_ms,
                previous_ms: previous,
            });
        }
        sampler.advance_to(&session, timed.at_ms);
        session.record(timed.event.clone());
        previous = timed.at_ms;
    }

    let end = script.end_ms.unwrap_or(previous).max(previous);
    sampler.advance_to(&session, end);

    let assessment = session.assess(&script.context);
    tracing::info!(
        session_id = %session.id(),
        events = script.events.len(),
        state = %assessment.inference.state,
        "replay finished"
    );
    Ok(assessment)
}
