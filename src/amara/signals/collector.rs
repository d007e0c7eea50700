use std::collections::VecDeque;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::amara::clock::{Clock, SystemClock};
use crate::amara::config::SignalConfig;
use crate::amara::types::{ReadDepth, ScrollSpeed, SignalSnapshot};

/// Raw UI events and explicit application markers accepted by the collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SignalEvent {
    Click,
    PointerMove,
    KeyPress,
    #[serde(rename_all = "camelCase")]
    Scroll {
        offset_y: f64,
        max_offset_y: f64,
    },
    Navigation,
    HoverStart {
        sensitive: bool,
    },
    HoverEnd {
        sensitive: bool,
    },
    GuidanceShown,
    PrimaryActionAttempt,
    PrimaryActionAvoided,
    StepAbandoned,
    ProgressStep,
    QuickDecision,
    HelpRequest,
}

fn ms_to_i64(ms: u64) -> i64 {
    i64::try_from(ms).unwrap_or(i64::MAX)
}

#[derive(Debug, Clone, Copy)]
struct ScrollSample {
    at_ms: i64,
    offset_y: f64,
}

pub struct SignalCollector {
    config: SignalConfig,
    clock: Arc<dyn Clock>,
    snapshot: SignalSnapshot,
    started_at: i64,
    last_activity_at: i64,
    click_times: VecDeque<i64>,
    last_scroll: Option<ScrollSample>,
    scroll_ratio: Option<f64>,
    hover_started_at: Option<i64>,
    guidance_shown_at: Option<i64>,
}

impl SignalCollector {
    pub fn new(config: SignalConfig, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now_ms();
        Self {
            config,
            clock,
            snapshot: SignalSnapshot::default(),
            started_at: now,
            last_activity_at: now,
            click_times: VecDeque::new(),
            last_scroll: None,
            scroll_ratio: None,
            hover_started_at: None,
            guidance_shown_at: None,
        }
    }

    pub fn snapshot(&self) -> &SignalSnapshot {
        &self.snapshot
    }

    pub fn record(&mut self, event: SignalEvent) {
        match event {
            SignalEvent::Click => self.on_click(),
            SignalEvent::PointerMove | SignalEvent::KeyPress => self.touch_activity(),
            SignalEvent::Scroll {
                offset_y,
                max_offset_y,
            } => self.on_scroll(offset_y, max_offset_y),
            SignalEvent::Navigation => {
                self.snapshot.back_and_forth_nav_count =
                    self.snapshot.back_and_forth_nav_count.saturating_add(1);
            }
            SignalEvent::HoverStart { sensitive } => self.on_hover_start(sensitive),
            SignalEvent::HoverEnd { sensitive } => self.on_hover_end(sensitive),
            SignalEvent::GuidanceShown => self.mark_guidance_shown(),
            SignalEvent::PrimaryActionAttempt => self.mark_primary_action_attempt(),
            SignalEvent::PrimaryActionAvoided => self.snapshot.avoids_primary_action = true,
            SignalEvent::StepAbandoned => {
                self.snapshot.abandoned_steps_count =
                    self.snapshot.abandoned_steps_count.saturating_add(1);
            }
            SignalEvent::ProgressStep => {
                self.snapshot.clear_progression_count =
                    self.snapshot.clear_progression_count.saturating_add(1);
            }
            SignalEvent::QuickDecision => {
                self.snapshot.quick_decision_count =
                    self.snapshot.quick_decision_count.saturating_add(1);
            }
            SignalEvent::HelpRequest => {
                self.snapshot.help_requests_count =
                    self.snapshot.help_requests_count.saturating_add(1);
            }
        }
    }

    pub fn mark_guidance_shown(&mut self) {
        self.guidance_shown_at = Some(self.clock.now_ms());
        self.snapshot.silence_after_guidance_ms = 0;
    }

    pub fn mark_primary_action_attempt(&mut self) {
        let now = self.clock.now_ms();
        let gap = now.saturating_sub(self.last_activity_at);
        if gap > ms_to_i64(self.config.long_pause_ms) {
            self.snapshot.pauses_before_action_count =
                self.snapshot.pauses_before_action_count.saturating_add(1);
            tracing::debug!(gap_ms = gap, "pause before primary action");
        }
        self.last_activity_at = now;
    }

    /// Interval sample for elapsed time on page and silence since the last guidance.
    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        let elapsed = now.saturating_sub(self.started_at).max(0) as u64;
        self.snapshot.time_on_page_ms = self.snapshot.time_on_page_ms.max(elapsed);

        if let Some(shown_at) = self.guidance_shown_at {
            let silence = now.saturating_sub(shown_at).max(0) as u64;
            self.snapshot.silence_after_guidance_ms =
                self.snapshot.silence_after_guidance_ms.max(silence);
        }
    }

    /// Interval sample classifying read depth from the latest scroll position.
    pub fn sample_read_depth(&mut self) {
        let Some(ratio) = self.scroll_ratio else {
            return;
        };
        self.snapshot.read_depth = if ratio < self.config.read_depth_low {
            ReadDepth::Low
        } else if ratio > self.config.read_depth_high {
            ReadDepth::High
        } else {
            ReadDepth::Medium
        };
    }

    pub fn reset(&mut self) {
        let now = self.clock.now_ms();
        self.snapshot = SignalSnapshot::default();
        self.started_at = now;
        self.last_activity_at = now;
        self.click_times.clear();
        self.last_scroll = None;
        self.scroll_ratio = None;
        self.hover_started_at = None;
        self.guidance_shown_at = None;
        tracing::debug!("signal collector reset");
    }

    fn touch_activity(&mut self) {
        self.last_activity_at = self.clock.now_ms();
    }

    fn on_click(&mut self) {
        let now = self.clock.now_ms();
        self.last_activity_at = now;
        self.snapshot.click_count = self.snapshot.click_count.saturating_add(1);

        let cutoff = now.saturating_sub(ms_to_i64(self.config.rapid_click_window_ms));
        self.click_times.push_back(now);
        while self.click_times.front().is_some_and(|&t| t < cutoff) {
            self.click_times.pop_front();
        }

        if self.click_times.len() >= self.config.rapid_click_threshold {
            self.snapshot.rapid_click_burst_count =
                self.snapshot.rapid_click_burst_count.saturating_add(1);
            self.click_times.clear();
            tracing::debug!(
                bursts = self.snapshot.rapid_click_burst_count,
                "rapid click burst detected"
            );
        }
    }

    fn on_scroll(&mut self, offset_y: f64, max_offset_y: f64) {
        if !offset_y.is_finite() {
            return;
        }
        let now = self.clock.now_ms();

        if let Some(prev) = self.last_scroll {
            let dt = (now - prev.at_ms).max(1) as f64;
            let speed = (offset_y - prev.offset_y).abs() / dt;
            self.snapshot.scroll_speed = if speed < self.config.slow_scroll_px_per_ms {
                ScrollSpeed::Slow
            } else if speed > self.config.fast_scroll_px_per_ms {
                ScrollSpeed::Fast
            } else {
                ScrollSpeed::Normal
            };
        }
        self.last_scroll = Some(ScrollSample {
            at_ms: now,
            offset_y,
        });

        // Pages without a scrollable range keep their read depth untouched.
        if max_offset_y.is_finite() && max_offset_y > 0.0 {
            self.scroll_ratio = Some((offset_y / max_offset_y).clamp(0.0, 1.0));
        }
    }

    fn on_hover_start(&mut self, sensitive: bool) {
        if !self.config.track_hover || !sensitive {
            return;
        }
        self.hover_started_at = Some(self.clock.now_ms());
    }

    // Ends from non-sensitive elements nested inside a sensitive region leave its span open.
    fn on_hover_end(&mut self, sensitive: bool) {
        if !sensitive {
            return;
        }
        let Some(started) = self.hover_started_at.take() else {
            return;
        };
        let delta = self.clock.now_ms().saturating_sub(started).max(0) as u64;
        self.snapshot.hover_sensitive_ms = self.snapshot.hover_sensitive_ms.saturating_add(delta);
    }
}

impl Default for SignalCollector {
    fn default() -> Self {
        Self::new(SignalConfig::default(), Arc::new(SystemClock))
    }
}
