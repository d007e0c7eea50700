use crate::amara::policy::UiPolicy;
use crate::amara::types::Choice;

const DECLINE_ACTIONS: &[&str] = &["decline", "notnow", "dismiss"];
const DECLINE_PHRASES: &[&str] = &["not right now", "not now", "decline", "no thanks", "maybe later"];
const MINIMIZE_ACTIONS: &[&str] = &["minimize", "minimise"];
const MINIMIZE_PHRASES: &[&str] = &["minimize", "minimise", "hide"];
const UPSELL_STEMS: &[&str] = &[
    "upgrad", "buy", "purchas", "pric", "plan", "premium", "subscri", "checkout",
];
const STEP_WORDS: &[&str] = &["step", "steps", "guide", "guided", "walk", "walkthrough"];

fn normalized_action(choice: &Choice) -> String {
    choice
        .action
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn words(label: &str) -> impl Iterator<Item = String> + '_ {
    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

fn has_word(label: &str, vocabulary: &[&str]) -> bool {
    words(label).any(|w| vocabulary.contains(&w.as_str()))
}

// Stems match at the start of each word, so "explanation" is not mistaken for "plan".
fn has_stem(label: &str, stems: &[&str]) -> bool {
    words(label).any(|w| stems.iter().any(|stem| w.starts_with(stem)))
}

fn has_phrase(label: &str, phrases: &[&str]) -> bool {
    let lower = label.to_lowercase();
    phrases.iter().any(|p| lower.contains(p))
}

pub fn is_decline(choice: &Choice) -> bool {
    DECLINE_ACTIONS.contains(&normalized_action(choice).as_str())
        || has_phrase(&choice.label, DECLINE_PHRASES)
}

pub fn is_minimize(choice: &Choice) -> bool {
    MINIMIZE_ACTIONS.contains(&normalized_action(choice).as_str())
        || has_phrase(&choice.label, MINIMIZE_PHRASES)
}

pub fn is_upsell(choice: &Choice) -> bool {
    has_stem(&choice.label, UPSELL_STEMS)
}

pub fn is_step_guided(choice: &Choice) -> bool {
    has_word(&choice.label, STEP_WORDS)
}

/// Upper bound on the filtered list, leaving room for the decline/minimize safety entry.
pub fn hard_cap(policy: &UiPolicy) -> usize {
    policy.max_choices.max(2) + 1
}

/// Filter, prefer step-by-step, truncate, restore the exit choice, then hard-cap.
pub fn filter_choices(candidates: &[Choice], policy: &UiPolicy) -> Vec<Choice> {
    let decline = candidates.iter().find(|c| is_decline(c)).cloned();
    let minimize = candidates.iter().find(|c| is_minimize(c)).cloned();

    let mut shown: Vec<Choice> = candidates
        .iter()
        .filter(|c| !(policy.never_upsell && is_upsell(c)))
        .cloned()
        .collect();

    if policy.prefer_step_by_step {
        shown.sort_by_key(|c| !is_step_guided(c));
    }

    shown.truncate(policy.max_choices);

    if let Some(decline) = decline {
        if !shown.contains(&decline) {
            shown.push(decline);
        }
    } else if let Some(minimize) = minimize {
        if !shown.contains(&minimize) {
            shown.push(minimize);
        }
    }

    shown.truncate(hard_cap(policy));
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amara::policy::resolve_ui_policy;
    use crate::amara::types::EmotionalState;

    fn labels(choices: &[Choice]) -> Vec<&str> {
        choices.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn strips_upsell_and_keeps_decline() {
        let policy = resolve_ui_policy(EmotionalState::Overwhelmed);
        let candidates = vec![
            Choice::new("Upgrade to Pro", "upgrade"),
            Choice::new("Review my report", "review"),
            Choice::new("See pricing", "pricing"),
            Choice::new("Read the explanation", "explain"),
            Choice::new("Not right now", "decline"),
        ];
        let out = filter_choices(&candidates, &policy);
        assert_eq!(labels(&out), vec!["Review my report", "Read the explanation", "Not right now"]);
    }

    #[test]
    fn strips_inflected_upsell_labels() {
        let policy = resolve_ui_policy(EmotionalState::CuriousEngaged);
        let candidates = vec![
            Choice::new("Upgrading unlocks coaching", "upgrade"),
            Choice::new("Buying guide", "buy"),
            Choice::new("Purchase options", "purchase"),
            Choice::new("Start your subscription", "subscribe"),
            Choice::new("Review the explanation", "explain"),
            Choice::new("Not right now", "decline"),
        ];
        let out = filter_choices(&candidates, &policy);
        assert_eq!(labels(&out), vec!["Review the explanation", "Not right now"]);
    }

    #[test]
    fn step_choices_move_first_stably() {
        let policy = resolve_ui_policy(EmotionalState::CuriousEngaged);
        let candidates = vec![
            Choice::new("Read the article", "read"),
            Choice::new("Walk me through it", "walk"),
            Choice::new("Watch the video", "watch"),
            Choice::new("Show the next step", "next"),
            Choice::new("Ask a question", "ask"),
        ];
        let out = filter_choices(&candidates, &policy);
        assert_eq!(
            labels(&out),
            vec!["Walk me through it", "Show the next step", "Read the article", "Watch the video"]
        );
    }

    #[test]
    fn no_reordering_without_step_preference() {
        let policy = resolve_ui_policy(EmotionalState::ConfidentReady);
        let candidates = vec![
            Choice::new("Send letter", "send"),
            Choice::new("Guide me", "guide"),
        ];
        assert_eq!(labels(&filter_choices(&candidates, &policy)), vec!["Send letter", "Guide me"]);
    }

    #[test]
    fn minimize_restored_when_no_decline() {
        let policy = resolve_ui_policy(EmotionalState::DisengagedFatigued);
        let candidates = vec![
            Choice::new("Recap", "recap"),
            Choice::new("Next lesson", "next"),
            Choice::new("Bookmark", "bookmark"),
            Choice::new("Hide assistant", "minimize"),
        ];
        let out = filter_choices(&candidates, &policy);
        assert_eq!(labels(&out), vec!["Recap", "Next lesson", "Hide assistant"]);
    }

    #[test]
    fn decline_preferred_over_minimize() {
        let policy = resolve_ui_policy(EmotionalState::Overwhelmed);
        let candidates = vec![
            Choice::new("A", "a"),
            Choice::new("B", "b"),
            Choice::new("Minimize", "minimize"),
            Choice::new("Maybe later", "later"),
        ];
        let out = filter_choices(&candidates, &policy);
        assert_eq!(labels(&out), vec!["A", "B", "Maybe later"]);
    }

    #[test]
    fn decline_already_visible_is_not_duplicated() {
        let policy = resolve_ui_policy(EmotionalState::Overwhelmed);
        let candidates = vec![Choice::new("Not now", "not_now"), Choice::new("Continue", "go")];
        let out = filter_choices(&candidates, &policy);
        assert_eq!(labels(&out), vec!["Not now", "Continue"]);
    }

    #[test]
    fn hard_cap_with_zero_max() {
        let mut policy = resolve_ui_policy(EmotionalState::Overwhelmed);
        policy.max_choices = 0;
        let candidates = vec![Choice::new("Go", "go"), Choice::new("Decline", "decline")];
        let out = filter_choices(&candidates, &policy);
        assert_eq!(labels(&out), vec!["Decline"]);
        assert_eq!(hard_cap(&policy), 3);
    }
}
