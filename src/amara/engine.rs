use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

use crate::amara::checkin::should_soft_check_in;
use crate::amara::clock::{Clock, SystemClock};
use crate::amara::composer::{compose, ComposedResponse};
use crate::amara::config::AmaraConfig;
use crate::amara::error::AmaraError;
use crate::amara::inference::{infer, InferenceResult};
use crate::amara::metrics::{SessionMetrics, SessionMetricsSnapshot};
use crate::amara::policy::{resolve_adjustments, resolve_ui_policy, AdjustmentBundle, UiPolicy};
use crate::amara::signals::{SignalCollector, SignalEvent, SignalSampler};
use crate::amara::types::{DockState, PageContext, SignalSnapshot};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub session_id: Uuid,
    pub snapshot: SignalSnapshot,
    pub inference: InferenceResult,
    pub adjustments: AdjustmentBundle,
    pub policy: UiPolicy,
    pub response: ComposedResponse,
    pub dock: DockState,
    pub should_check_in: bool,
}

/// One companion session: a single signal collector plus dock state and metrics.
pub struct CompanionSession {
    id: Uuid,
    config: AmaraConfig,
    collector: Arc<Mutex<SignalCollector>>,
    sampler: Option<SignalSampler>,
    dock: DockState,
    metrics: SessionMetrics,
}

impl CompanionSession {
    pub fn new(config: AmaraConfig, clock: Arc<dyn Clock>) -> Result<Self, AmaraError> {
        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "rejected companion config");
            return Err(err);
        }
        let collector = SignalCollector::new(config.signals.clone(), clock);
        let id = Uuid::new_v4();
        tracing::info!(session_id = %id, "companion session started");

        Ok(Self {
            id,
            config,
            collector: Arc::new(Mutex::new(collector)),
            sampler: None,
            dock: DockState::default(),
            metrics: SessionMetrics::default(),
        })
    }

    pub fn with_system_clock(config: AmaraConfig) -> Result<Self, AmaraError> {
        Self::new(config, Arc::new(SystemClock))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Starts interval sampling on the current tokio runtime. Returns false when unavailable.
    pub fn start_sampling(&mut self) -> bool {
        if self.sampler.is_none() {
            self.sampler = SignalSampler::start(Arc::clone(&self.collector), &self.config.sampling);
        }
        self.sampler.is_some()
    }

    pub fn is_sampling(&self) -> bool {
        self.sampler.as_ref().is_some_and(SignalSampler::is_running)
    }

    pub fn record(&self, event: SignalEvent) {
        match event {
            SignalEvent::GuidanceShown => self.guidance_shown(),
            event => self.collector.lock().record(event),
        }
    }

    pub fn guidance_shown(&self) {
        self.collector.lock().mark_guidance_shown();
        self.metrics.record_guidance_shown();
    }

    pub fn tick(&self) {
        self.collector.lock().tick();
    }

    pub fn sample_read_depth(&self) {
        self.collector.lock().sample_read_depth();
    }

    pub fn reset(&self) {
        self.collector.lock().reset();
    }

    pub fn snapshot(&self) -> SignalSnapshot {
        self.collector.lock().snapshot().clone()
    }

    pub fn dock_state(&self) -> DockState {
        self.dock
    }

    pub fn set_dock_state(&mut self, dock: DockState) {
        if self.dock != dock {
            tracing::debug!(session_id = %self.id, ?dock, "dock state changed");
        }
        self.dock = dock;
    }

    pub fn metrics(&self) -> SessionMetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn assess(&self, context: &PageContext) -> Assessment {
        let start = Instant::now();
        let snapshot = self.snapshot();
        let inference = infer(&snapshot);
        let adjustments = *resolve_adjustments(inference.state);
        let policy = resolve_ui_policy(inference.state);
        let should_check_in =
            should_soft_check_in(&policy, snapshot.silence_after_guidance_ms, self.dock);
        let response = compose(&inference, context);
        let latency_us = start.elapsed().as_micros() as u64;

        self.metrics
            .record_assessment(inference.state, inference.confidence, should_check_in, latency_us);
        tracing::debug!(
            session_id = %self.id,
            state = %inference.state,
            confidence = inference.confidence,
            should_check_in,
            "companion assessment"
        );

        Assessment {
            session_id: self.id,
            snapshot,
            inference,
            adjustments,
            policy,
            response,
            dock: self.dock,
            should_check_in,
        }
    }

    pub async fn teardown(mut self) {
        if let Some(sampler) = self.sampler.take() {
            sampler.stop().await;
        }
        tracing::info!(session_id = %self.id, "companion session ended");
    }
}
