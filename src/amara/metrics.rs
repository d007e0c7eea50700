use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::amara::types::EmotionalState;

pub const LOW_CONFIDENCE: f64 = 0.2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetricsSnapshot {
    pub assessments: u64,
    pub state_counts: [u64; 5],
    pub check_ins_recommended: u64,
    pub guidance_shown: u64,
    pub low_confidence: u64,
    pub total_latency_us: u64,
}

impl SessionMetricsSnapshot {
    pub fn count_for(&self, state: EmotionalState) -> u64 {
        self.state_counts[state.index()]
    }

    pub fn avg_latency_ms(&self) -> f64 {
        if self.assessments == 0 {
            return 0.0;
        }
        let avg = (self.total_latency_us as f64 / self.assessments as f64) / 1000.0;
        (avg * 10000.0).round() / 10000.0
    }
}

#[derive(Debug, Default)]
pub struct SessionMetrics {
    assessments: AtomicU64,
    state_counts: [AtomicU64; 5],
    check_ins_recommended: AtomicU64,
    guidance_shown: AtomicU64,
    low_confidence: AtomicU64,
    total_latency_us: AtomicU64,
}

impl SessionMetrics {
    pub fn record_assessment(
        &self,
        state: EmotionalState,
        confidence: f64,
        check_in: bool,
        latency_us: u64,
    ) {
        self.assessments.fetch_add(1, Ordering::Relaxed);
        self.state_counts[state.index()].fetch_add(1, Ordering::Relaxed);
        self.total_latency_us.fetch_add(latency_us, Ordering::Relaxed);
        if check_in {
            self.check_ins_recommended.fetch_add(1, Ordering::Relaxed);
        }
        if confidence < LOW_CONFIDENCE {
            self.low_confidence.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_guidance_shown(&self) {
        self.guidance_shown.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SessionMetricsSnapshot {
        SessionMetricsSnapshot {
            assessments: self.assessments.load(Ordering::Relaxed),
            state_counts: std::array::from_fn(|i| self.state_counts[i].load(Ordering::Relaxed)),
            check_ins_recommended: self.check_ins_recommended.load(Ordering::Relaxed),
            guidance_shown: self.guidance_shown.load(Ordering::Relaxed),
            low_confidence: self.low_confidence.load(Ordering::Relaxed),
            total_latency_us: self.total_latency_us.load(Ordering::Relaxed),
        }
    }
}
