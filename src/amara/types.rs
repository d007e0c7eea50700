use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmotionalState {
    Overwhelmed,
    CautiousDistrustful,
    CuriousEngaged,
    ConfidentReady,
    DisengagedFatigued,
}

impl EmotionalState {
    /// Declaration order. Ties in inference resolve to the earlier entry.
    pub const ALL: [EmotionalState; 5] = [
        Self::Overwhelmed,
        Self::CautiousDistrustful,
        Self::CuriousEngaged,
        Self::ConfidentReady,
        Self::DisengagedFatigued,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overwhelmed => "OVERWHELMED",
            Self::CautiousDistrustful => "CAUTIOUS_DISTRUSTFUL",
            Self::CuriousEngaged => "CURIOUS_ENGAGED",
            Self::ConfidentReady => "CONFIDENT_READY",
            Self::DisengagedFatigued => "DISENGAGED_FATIGUED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "OVERWHELMED" => Some(Self::Overwhelmed),
            "CAUTIOUS_DISTRUSTFUL" => Some(Self::CautiousDistrustful),
            "CURIOUS_ENGAGED" => Some(Self::CuriousEngaged),
            "CONFIDENT_READY" => Some(Self::ConfidentReady),
            "DISENGAGED_FATIGUED" => Some(Self::DisengagedFatigued),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Overwhelmed => 0,
            Self::CautiousDistrustful => 1,
            Self::CuriousEngaged => 2,
            Self::ConfidentReady => 3,
            Self::DisengagedFatigued => 4,
        }
    }
}

impl std::fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScrollSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadDepth {
    Low,
    #[default]
    Medium,
    High,
}

/// Passive interaction signals for one session. Counters only grow until `reset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SignalSnapshot {
    pub time_on_page_ms: u64,
    pub click_count: u32,
    pub back_and_forth_nav_count: u32,
    pub pauses_before_action_count: u32,
    pub abandoned_steps_count: u32,
    pub rapid_click_burst_count: u32,
    pub scroll_speed: ScrollSpeed,
    pub help_requests_count: u32,
    pub silence_after_guidance_ms: u64,
    pub hover_sensitive_ms: u64,
    pub read_depth: ReadDepth,
    pub avoids_primary_action: bool,
    pub quick_decision_count: u32,
    pub clear_progression_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tone {
    Gentle,
    WarmAuthority,
    Transparent,
    Energetic,
    Efficient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Pace {
    Slow,
    Normal,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Depth {
    Light,
    Standard,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuidanceStyle {
    OneActionOnly,
    PermissionBased,
    InsightRich,
    ExecutionFast,
    SoftPresence,
}

impl GuidanceStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneActionOnly => "ONE_ACTION_ONLY",
            Self::PermissionBased => "PERMISSION_BASED",
            Self::InsightRich => "INSIGHT_RICH",
            Self::ExecutionFast => "EXECUTION_FAST",
            Self::SoftPresence => "SOFT_PRESENCE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UiMode {
    Calm,
    Transparent,
    Energize,
    Steady,
    SoftExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisualIntensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DockState {
    #[default]
    Open,
    Minimized,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChoiceKind {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub label: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChoiceKind>,
}

impl Choice {
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: ChoiceKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub page_label: Option<String>,
}

/// Fixed ethical guarantees echoed with every composed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthicsInvariants {
    pub never_pressure: bool,
    pub never_guilt: bool,
    pub never_upsell_emotionally: bool,
    pub always_offer_choice: bool,
    pub always_explain_why: bool,
    pub always_respect_silence: bool,
}

pub const ETHICS: EthicsInvariants = EthicsInvariants {
    never_pressure: true,
    never_guilt: true,
    never_upsell_emotionally: true,
    always_offer_choice: true,
    always_explain_why: true,
    always_respect_silence: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_names_round_trip() {
        for state in EmotionalState::ALL {
            assert_eq!(EmotionalState::parse(state.as_str()), Some(state));
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
        }
        assert_eq!(EmotionalState::parse("calm"), None);
    }

    #[test]
    fn state_index_matches_declaration_order() {
        for (i, state) in EmotionalState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn snapshot_missing_fields_take_neutral_defaults() {
        let snapshot: SignalSnapshot =
            serde_json::from_str(r#"{"rapidClickBurstCount": 2}"#).unwrap();
        assert_eq!(snapshot.rapid_click_burst_count, 2);
        assert_eq!(snapshot.scroll_speed, ScrollSpeed::Normal);
        assert_eq!(snapshot.read_depth, ReadDepth::Medium);
        assert!(!snapshot.avoids_primary_action);
        assert_eq!(snapshot.time_on_page_ms, 0);
    }
}
