use serde::{Deserialize, Serialize};

use crate::amara::types::{EmotionalState, ReadDepth, ScrollSpeed, SignalSnapshot};

const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreVector {
    #[serde(rename = "OVERWHELMED")]
    pub overwhelmed: f64,
    #[serde(rename = "CAUTIOUS_DISTRUSTFUL")]
    pub cautious_distrustful: f64,
    #[serde(rename = "CURIOUS_ENGAGED")]
    pub curious_engaged: f64,
    #[serde(rename = "CONFIDENT_READY")]
    pub confident_ready: f64,
    #[serde(rename = "DISENGAGED_FATIGUED")]
    pub disengaged_fatigued: f64,
}

impl ScoreVector {
    pub fn get(&self, state: EmotionalState) -> f64 {
        match state {
            EmotionalState::Overwhelmed => self.overwhelmed,
            EmotionalState::CautiousDistrustful => self.cautious_distrustful,
            EmotionalState::CuriousEngaged => self.curious_engaged,
            EmotionalState::ConfidentReady => self.confident_ready,
            EmotionalState::DisengagedFatigued => self.disengaged_fatigued,
        }
    }

    /// States ordered by score, highest first. Equal scores keep declaration order.
    pub fn ranked(&self) -> [(EmotionalState, f64); 5] {
        let mut ranked = EmotionalState::ALL.map(|s| (s, self.get(s)));
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    pub state: EmotionalState,
    pub confidence: f64,
    pub scores: ScoreVector,
}

fn flag(cond: bool) -> f64 {
    if cond {
        1.0
    } else {
        0.0
    }
}

pub fn score(s: &SignalSnapshot) -> ScoreVector {
    let bursts = s.rapid_click_burst_count as f64;
    let nav = s.back_and_forth_nav_count as f64;
    let pauses = s.pauses_before_action_count as f64;
    let abandoned = s.abandoned_steps_count as f64;
    let help = s.help_requests_count as f64;
    let quick = s.quick_decision_count as f64;
    let progress = s.clear_progression_count as f64;
    let clicks = s.click_count.min(40) as f64;
    let avoids = flag(s.avoids_primary_action);
    let deep_read = flag(s.read_depth == ReadDepth::High);

    let overwhelmed = 1.6 * bursts
        + 0.9 * nav
        + 0.8 * pauses
        + 1.0 * abandoned
        + 1.2 * avoids
        + 0.03 * clicks
        + 0.5 * flag(s.time_on_page_ms > 180_000);

    let cautious_distrustful = 1.2 * deep_read
        + 1.0 * flag(s.hover_sensitive_ms >= 4_000)
        + 1.0 * flag(s.hover_sensitive_ms >= 10_000)
        + 1.0 * avoids
        + 0.5 * pauses
        + 0.4 * nav;

    let curious_engaged = 1.2 * help
        + 1.0 * flag(s.scroll_speed == ScrollSpeed::Slow)
        + 0.02 * clicks
        + 0.6 * deep_read;

    // A zero dwell time means the page was never sampled, not that it was short.
    let confident_ready = 1.5 * quick
        + 1.3 * progress
        + 0.6 * flag(s.time_on_page_ms > 0 && s.time_on_page_ms < 45_000)
        + 0.3 * flag(s.help_requests_count == 0);

    let disengaged_fatigued = 1.0 * flag(s.silence_after_guidance_ms >= 12_000)
        + 1.2 * flag(s.silence_after_guidance_ms >= 20_000)
        + 1.2 * flag(s.time_on_page_ms >= 120_000 && s.clear_progression_count == 0)
        + 0.8 * flag(s.abandoned_steps_count > 0 && s.help_requests_count == 0)
        + 1.0 * flag(s.scroll_speed == ScrollSpeed::Fast && s.read_depth == ReadDepth::Low);

    ScoreVector {
        overwhelmed,
        cautious_distrustful,
        curious_engaged,
        confident_ready,
        disengaged_fatigued,
    }
}

pub fn select(scores: ScoreVector) -> InferenceResult {
    let ranked = scores.ranked();
    let (state, top) = ranked[0];
    let second = ranked[1].1;
    let confidence = ((top - second) / (top + EPSILON)).clamp(0.0, 1.0);
    let confidence = if confidence.is_nan() { 0.0 } else { confidence };

    InferenceResult {
        state,
        confidence,
        scores,
    }
}

pub fn infer(snapshot: &SignalSnapshot) -> InferenceResult {
    select(score(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_scores_pick_first_declared_state() {
        let result = select(ScoreVector::default());
        assert_eq!(result.state, EmotionalState::Overwhelmed);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn tie_resolves_by_declaration_order() {
        let scores = ScoreVector {
            curious_engaged: 2.0,
            disengaged_fatigued: 2.0,
            confident_ready: 1.0,
            ..Default::default()
        };
        let result = select(scores);
        assert_eq!(result.state, EmotionalState::CuriousEngaged);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn dominant_winner_approaches_full_confidence() {
        let scores = ScoreVector {
            confident_ready: 10.0,
            ..Default::default()
        };
        let result = select(scores);
        assert_eq!(result.state, EmotionalState::ConfidentReady);
        assert!(result.confidence > 0.99 && result.confidence <= 1.0);
    }

    #[test]
    fn neutral_snapshot_only_earns_zero_help_bonus() {
        let scores = score(&SignalSnapshot::default());
        assert_eq!(scores.confident_ready, 0.3);
        assert_eq!(scores.overwhelmed, 0.0);
        assert_eq!(scores.cautious_distrustful, 0.0);
        assert_eq!(scores.curious_engaged, 0.0);
        assert_eq!(scores.disengaged_fatigued, 0.0);
    }

    #[test]
    fn hover_tiers_raise_caution() {
        let mut snapshot = SignalSnapshot {
            hover_sensitive_ms: 4_000,
            ..Default::default()
        };
        let one_tier = score(&snapshot).cautious_distrustful;
        snapshot.hover_sensitive_ms = 12_000;
        let two_tiers = score(&snapshot).cautious_distrustful;
        assert_eq!(one_tier, 1.0);
        assert_eq!(two_tiers, 2.0);
    }

    #[test]
    fn help_requests_favor_curiosity() {
        let snapshot = SignalSnapshot {
            help_requests_count: 2,
            scroll_speed: ScrollSpeed::Slow,
            ..Default::default()
        };
        assert_eq!(infer(&snapshot).state, EmotionalState::CuriousEngaged);
    }

    #[test]
    fn skimming_signals_fatigue() {
        let snapshot = SignalSnapshot {
            scroll_speed: ScrollSpeed::Fast,
            read_depth: ReadDepth::Low,
            ..Default::default()
        };
        assert_eq!(infer(&snapshot).state, EmotionalState::DisengagedFatigued);
    }
}
