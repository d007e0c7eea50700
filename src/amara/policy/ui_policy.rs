use serde::Serialize;

use crate::amara::types::{EmotionalState, UiMode, VisualIntensity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPolicy {
    pub mode: UiMode,
    pub max_choices: usize,
    pub auto_open_on_help: bool,
    pub allow_auto_check_in: bool,
    pub silence_before_check_in_ms: u64,
    pub prefer_step_by_step: bool,
    pub disable_urgency_language: bool,
    pub never_upsell: bool,
    pub visual_intensity: VisualIntensity,
}

pub fn resolve_ui_policy(state: EmotionalState) -> UiPolicy {
    match state {
        EmotionalState::Overwhelmed => UiPolicy {
            mode: UiMode::Calm,
            max_choices: 2,
            auto_open_on_help: true,
            allow_auto_check_in: true,
            silence_before_check_in_ms: 15_000,
            prefer_step_by_step: true,
            disable_urgency_language: true,
            never_upsell: true,
            visual_intensity: VisualIntensity::Low,
        },
        EmotionalState::CautiousDistrustful => UiPolicy {
            mode: UiMode::Transparent,
            max_choices: 3,
            auto_open_on_help: false,
            allow_auto_check_in: true,
            silence_before_check_in_ms: 20_000,
            prefer_step_by_step: false,
            disable_urgency_language: true,
            never_upsell: true,
            visual_intensity: VisualIntensity::Low,
        },
        EmotionalState::CuriousEngaged => UiPolicy {
            mode: UiMode::Energize,
            max_choices: 4,
            auto_open_on_help: true,
            allow_auto_check_in: false,
            silence_before_check_in_ms: 30_000,
            prefer_step_by_step: true,
            disable_urgency_language: false,
            never_upsell: true,
            visual_intensity: VisualIntensity::Medium,
        },
        EmotionalState::ConfidentReady => UiPolicy {
            mode: UiMode::Steady,
            max_choices: 3,
            auto_open_on_help: false,
            allow_auto_check_in: false,
            silence_before_check_in_ms: 45_000,
            prefer_step_by_step: false,
            disable_urgency_language: false,
            never_upsell: true,
            visual_intensity: VisualIntensity::Medium,
        },
        EmotionalState::DisengagedFatigued => UiPolicy {
            mode: UiMode::SoftExit,
            max_choices: 2,
            auto_open_on_help: false,
            allow_auto_check_in: true,
            silence_before_check_in_ms: 25_000,
            prefer_step_by_step: false,
            disable_urgency_language: true,
            never_upsell: true,
            visual_intensity: VisualIntensity::Low,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amara::policy::resolve_adjustments;

    #[test]
    fn never_upsell_for_every_state() {
        for state in EmotionalState::ALL {
            assert!(resolve_ui_policy(state).never_upsell);
        }
    }

    #[test]
    fn agrees_with_adjustment_bundles() {
        for state in EmotionalState::ALL {
            let policy = resolve_ui_policy(state);
            let bundle = resolve_adjustments(state);
            assert_eq!(policy.max_choices, bundle.max_choices_to_show, "{state}");
            assert_eq!(policy.allow_auto_check_in, bundle.should_proactively_check_in, "{state}");
            assert_eq!(policy.prefer_step_by_step, bundle.offer_step_by_step, "{state}");
        }
    }

    #[test]
    fn modes_and_intensity() {
        let expected = [
            (UiMode::Calm, VisualIntensity::Low),
            (UiMode::Transparent, VisualIntensity::Low),
            (UiMode::Energize, VisualIntensity::Medium),
            (UiMode::Steady, VisualIntensity::Medium),
            (UiMode::SoftExit, VisualIntensity::Low),
        ];
        for (state, (mode, intensity)) in EmotionalState::ALL.into_iter().zip(expected) {
            let policy = resolve_ui_policy(state);
            assert_eq!(policy.mode, mode);
            assert_eq!(policy.visual_intensity, intensity);
        }
    }
}
