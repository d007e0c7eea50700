use serde::Serialize;

use crate::amara::choices::filter_choices;
use crate::amara::inference::InferenceResult;
use crate::amara::policy::{resolve_adjustments, resolve_ui_policy, AdjustmentBundle};
use crate::amara::types::{
    Choice, ChoiceKind, Depth, EmotionalState, EthicsInvariants, GuidanceStyle, Pace, PageContext,
    Tone, ETHICS,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedResponse {
    pub state: EmotionalState,
    pub confidence: f64,
    pub opening_line: String,
    pub support_line: String,
    pub rationale_line: String,
    pub prompt: Option<String>,
    pub footer: Option<String>,
    pub display_text: String,
    pub tone: Tone,
    pub pace: Pace,
    pub depth: Depth,
    pub guidance_style: GuidanceStyle,
    pub max_choices_to_show: usize,
    pub should_proactively_check_in: bool,
    pub offer_step_by_step: bool,
    pub step_back_on_silence: bool,
    pub choices: Vec<Choice>,
    pub ethics: EthicsInvariants,
}

pub fn rationale(state: EmotionalState) -> &'static str {
    match state {
        EmotionalState::Overwhelmed => {
            "I'm keeping this short because a lot seemed to be happening at once."
        }
        EmotionalState::CautiousDistrustful => {
            "I'm showing the details up front because you were taking a careful look."
        }
        EmotionalState::CuriousEngaged => {
            "I'm adding more background because you've been exploring and asking questions."
        }
        EmotionalState::ConfidentReady => {
            "I'm staying out of your way because you're moving through the steps quickly."
        }
        EmotionalState::DisengagedFatigued => {
            "I'm keeping things light because it's been a while since the last step."
        }
    }
}

pub fn default_choices(style: GuidanceStyle) -> Vec<Choice> {
    let decline = Choice::new("Not right now", "decline").with_kind(ChoiceKind::Secondary);
    let mut choices = match style {
        GuidanceStyle::OneActionOnly => vec![
            Choice::new("Show me the next step", "next_step").with_kind(ChoiceKind::Primary),
        ],
        GuidanceStyle::PermissionBased => vec![
            Choice::new("Explain how this works", "explain").with_kind(ChoiceKind::Primary),
            Choice::new("Show me what gets shared", "show_data").with_kind(ChoiceKind::Secondary),
        ],
        GuidanceStyle::InsightRich => vec![
            Choice::new("Dig into the details", "deep_dive").with_kind(ChoiceKind::Primary),
            Choice::new("Walk me through an example", "walkthrough")
                .with_kind(ChoiceKind::Secondary),
            Choice::new("Show related lessons", "related").with_kind(ChoiceKind::Secondary),
            Choice::new("Quiz me on this", "quiz").with_kind(ChoiceKind::Secondary),
        ],
        GuidanceStyle::ExecutionFast => vec![
            Choice::new("Continue", "continue").with_kind(ChoiceKind::Primary),
            Choice::new("Jump to letter templates", "letters").with_kind(ChoiceKind::Secondary),
        ],
        GuidanceStyle::SoftPresence => vec![
            Choice::new("Give me a quick recap", "recap").with_kind(ChoiceKind::Primary),
            Choice::new("Save and come back later", "save_exit").with_kind(ChoiceKind::Secondary),
        ],
    };
    choices.push(decline);
    choices
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn compose(inference: &InferenceResult, context: &PageContext) -> ComposedResponse {
    let state = inference.state;
    let bundle: &AdjustmentBundle = resolve_adjustments(state);
    let policy = resolve_ui_policy(state);

    let opening_line = match non_empty(context.user_name.as_deref()) {
        Some(name) => format!("Hi {name}. {}", bundle.opening_line),
        None => bundle.opening_line.to_string(),
    };
    let support_line = bundle.support_line.to_string();
    let rationale_line = rationale(state).to_string();
    let prompt = bundle.choice_prompts.first().map(|p| p.to_string());
    let footer = non_empty(context.page_label.as_deref())
        .map(|page| format!("You're on {page}. I'll keep my suggestions to this page."));

    let display_text = [
        Some(opening_line.as_str()),
        Some(support_line.as_str()),
        Some(rationale_line.as_str()),
        prompt.as_deref(),
        footer.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join("\n");

    let choices = filter_choices(&default_choices(bundle.guidance_style), &policy);

    ComposedResponse {
        state,
        confidence: inference.confidence,
        opening_line,
        support_line,
        rationale_line,
        prompt,
        footer,
        display_text,
        tone: bundle.tone,
        pace: bundle.pace,
        depth: bundle.depth,
        guidance_style: bundle.guidance_style,
        max_choices_to_show: bundle.max_choices_to_show,
        should_proactively_check_in: bundle.should_proactively_check_in,
        offer_step_by_step: bundle.offer_step_by_step,
        step_back_on_silence: bundle.step_back_on_silence,
        choices,
        ethics: ETHICS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amara::choices::is_decline;
    use crate::amara::inference::ScoreVector;

    fn inference_for(state: EmotionalState) -> InferenceResult {
        InferenceResult {
            state,
            confidence: 0.5,
            scores: ScoreVector::default(),
        }
    }

    #[test]
    fn every_style_default_set_has_decline() {
        for state in EmotionalState::ALL {
            let style = resolve_adjustments(state).guidance_style;
            assert!(default_choices(style).iter().any(is_decline), "{}", style.as_str());
        }
    }

    #[test]
    fn composed_choices_respect_cap_and_keep_decline() {
        for state in EmotionalState::ALL {
            let response = compose(&inference_for(state), &PageContext::default());
            assert!(response.choices.len() <= response.max_choices_to_show + 1);
            assert!(response.choices.iter().any(is_decline), "{state}");
        }
    }

    #[test]
    fn curious_walkthrough_is_offered_first() {
        let response = compose(&inference_for(EmotionalState::CuriousEngaged), &PageContext::default());
        assert_eq!(response.choices[0].action, "walkthrough");
        assert_eq!(response.choices.len(), 5);
    }

    #[test]
    fn context_personalizes_opening_and_footer() {
        let context = PageContext {
            user_name: Some("Dana".into()),
            page_label: Some("Dispute Letters".into()),
        };
        let response = compose(&inference_for(EmotionalState::ConfidentReady), &context);
        assert!(response.opening_line.starts_with("Hi Dana. "));
        assert!(response.footer.as_deref().unwrap().contains("Dispute Letters"));
        assert!(response.display_text.contains(&response.rationale_line));
        assert_eq!(response.prompt.as_deref(), Some("Ready to send your next dispute letter?"));
    }

    #[test]
    fn blank_context_adds_nothing() {
        let context = PageContext {
            user_name: Some("  ".into()),
            page_label: None,
        };
        let response = compose(&inference_for(EmotionalState::Overwhelmed), &context);
        assert!(!response.opening_line.starts_with("Hi"));
        assert!(response.footer.is_none());
        assert_eq!(response.display_text.lines().count(), 4);
    }

    #[test]
    fn ethics_always_true() {
        let response = compose(&inference_for(EmotionalState::DisengagedFatigued), &PageContext::default());
        let e = response.ethics;
        assert!(e.never_pressure && e.never_guilt && e.never_upsell_emotionally);
        assert!(e.always_offer_choice && e.always_explain_why && e.always_respect_silence);
    }
}
