use serde::Serialize;

use crate::amara::types::{Depth, EmotionalState, GuidanceStyle, Pace, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentBundle {
    pub tone: Tone,
    pub pace: Pace,
    pub depth: Depth,
    pub guidance_style: GuidanceStyle,
    pub max_choices_to_show: usize,
    pub should_proactively_check_in: bool,
    pub offer_step_by_step: bool,
    pub step_back_on_silence: bool,
    pub opening_line: &'static str,
    pub support_line: &'static str,
    pub choice_prompts: &'static [&'static str],
}

const OVERWHELMED: AdjustmentBundle = AdjustmentBundle {
    tone: Tone::WarmAuthority,
    pace: Pace::Slow,
    depth: Depth::Light,
    guidance_style: GuidanceStyle::OneActionOnly,
    max_choices_to_show: 2,
    should_proactively_check_in: true,
    offer_step_by_step: true,
    step_back_on_silence: true,
    opening_line: "Let's slow this down. There's only one thing to do right now.",
    support_line: "Credit repair is a lot at once. You don't have to hold all of it today.",
    choice_prompts: &[
        "Want me to show you just the next step?",
        "We can pause here and pick it up later.",
    ],
};

const CAUTIOUS_DISTRUSTFUL: AdjustmentBundle = AdjustmentBundle {
    tone: Tone::Transparent,
    pace: Pace::Normal,
    depth: Depth::Standard,
    guidance_style: GuidanceStyle::PermissionBased,
    max_choices_to_show: 3,
    should_proactively_check_in: true,
    offer_step_by_step: false,
    step_back_on_silence: true,
    opening_line: "Here's exactly what this step does, and what it doesn't.",
    support_line: "Nothing here is sent to a bureau or charged without you saying so.",
    choice_prompts: &[
        "Would you like to see how this works before deciding?",
        "Do you want the plain-language version of the fine print?",
        "Happy to leave this with you for now.",
    ],
};

const CURIOUS_ENGAGED: AdjustmentBundle = AdjustmentBundle {
    tone: Tone::Energetic,
    pace: Pace::Normal,
    depth: Depth::Deep,
    guidance_style: GuidanceStyle::InsightRich,
    max_choices_to_show: 4,
    should_proactively_check_in: false,
    offer_step_by_step: true,
    step_back_on_silence: false,
    opening_line: "Good question to be asking. There's more underneath this one.",
    support_line: "Knowing why a score moves makes every later step easier.",
    choice_prompts: &[
        "Want to see how utilization actually changes your score?",
        "Should we walk through a real dispute example together?",
        "Curious which items age off your report first?",
    ],
};

const CONFIDENT_READY: AdjustmentBundle = AdjustmentBundle {
    tone: Tone::Efficient,
    pace: Pace::Fast,
    depth: Depth::Standard,
    guidance_style: GuidanceStyle::ExecutionFast,
    max_choices_to_show: 3,
    should_proactively_check_in: false,
    offer_step_by_step: false,
    step_back_on_silence: false,
    opening_line: "You're moving well. Here's what's next.",
    support_line: "Everything you need for this step is already on the page.",
    choice_prompts: &["Ready to send your next dispute letter?"],
};

const DISENGAGED_FATIGUED: AdjustmentBundle = AdjustmentBundle {
    tone: Tone::Gentle,
    pace: Pace::Slow,
    depth: Depth::Light,
    guidance_style: GuidanceStyle::SoftPresence,
    max_choices_to_show: 2,
    should_proactively_check_in: true,
    offer_step_by_step: false,
    step_back_on_silence: true,
    opening_line: "No rush. Your progress is saved right where you left it.",
    support_line: "Short sessions count. Coming back tomorrow is a real plan.",
    choice_prompts: &["Want a one-minute recap before you go?"],
};

pub fn resolve_adjustments(state: EmotionalState) -> &'static AdjustmentBundle {
    match state {
        EmotionalState::Overwhelmed => &OVERWHELMED,
        EmotionalState::CautiousDistrustful => &CAUTIOUS_DISTRUSTFUL,
        EmotionalState::CuriousEngaged => &CURIOUS_ENGAGED,
        EmotionalState::ConfidentReady => &CONFIDENT_READY,
        EmotionalState::DisengagedFatigued => &DISENGAGED_FATIGUED,
    }
}
