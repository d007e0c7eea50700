use serde::{Deserialize, Serialize};

use crate::amara::error::AmaraError;

/// Longest window or interval accepted for any millisecond setting (one day).
pub const MAX_WINDOW_MS: u64 = 86_400_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignalConfig {
    pub rapid_click_window_ms: u64,
    pub rapid_click_threshold: usize,
    pub long_pause_ms: u64,
    pub track_hover: bool,
    pub slow_scroll_px_per_ms: f64,
    pub fast_scroll_px_per_ms: f64,
    pub read_depth_low: f64,
    pub read_depth_high: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            rapid_click_window_ms: 1200,
            rapid_click_threshold: 5,
            long_pause_ms: 2500,
            track_hover: true,
            slow_scroll_px_per_ms: 0.25,
            fast_scroll_px_per_ms: 1.2,
            read_depth_low: 0.2,
            read_depth_high: 0.65,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SamplingConfig {
    pub tick_interval_ms: u64,
    pub read_depth_interval_ms: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            read_depth_interval_ms: 1200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AmaraConfig {
    pub signals: SignalConfig,
    pub sampling: SamplingConfig,
}

impl AmaraConfig {
    pub fn validate(&self) -> Result<(), AmaraError> {
        let s = &self.signals;
        if s.rapid_click_window_ms == 0 {
            return Err(AmaraError::InvalidConfig("rapidClickWindowMs must be > 0".into()));
        }
        if s.rapid_click_threshold == 0 {
            return Err(AmaraError::InvalidConfig("rapidClickThreshold must be > 0".into()));
        }
        if !s.slow_scroll_px_per_ms.is_finite()
            || !s.fast_scroll_px_per_ms.is_finite()
            || s.slow_scroll_px_per_ms < 0.0
            || s.slow_scroll_px_per_ms > s.fast_scroll_px_per_ms
        {
            return Err(AmaraError::InvalidConfig(format!(
                "scroll cutoffs must satisfy 0 <= slow ({}) <= fast ({})",
                s.slow_scroll_px_per_ms, s.fast_scroll_px_per_ms
            )));
        }
        if !(0.0..=1.0).contains(&s.read_depth_low)
            || !(0.0..=1.0).contains(&s.read_depth_high)
            || s.read_depth_low > s.read_depth_high
        {
            return Err(AmaraError::InvalidConfig(format!(
                "read depth cutoffs must satisfy 0 <= low ({}) <= high ({}) <= 1",
                s.read_depth_low, s.read_depth_high
            )));
        }
        if self.sampling.tick_interval_ms == 0 || self.sampling.read_depth_interval_ms == 0 {
            return Err(AmaraError::InvalidConfig("sampling intervals must be > 0".into()));
        }
        let windows = [
            ("rapidClickWindowMs", s.rapid_click_window_ms),
            ("longPauseMs", s.long_pause_ms),
            ("tickIntervalMs", self.sampling.tick_interval_ms),
            ("readDepthIntervalMs", self.sampling.read_depth_interval_ms),
        ];
        if let Some((name, ms)) = windows.iter().find(|(_, ms)| *ms > MAX_WINDOW_MS) {
            return Err(AmaraError::InvalidConfig(format!(
                "{name} ({ms}) exceeds {MAX_WINDOW_MS}ms"
            )));
        }
        Ok(())
    }
}
