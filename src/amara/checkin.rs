use crate::amara::policy::UiPolicy;
use crate::amara::types::DockState;

/// Proactive check-ins only happen while the dock is open; a minimized or closed dock is never interrupted.
pub fn should_soft_check_in(policy: &UiPolicy, silence_ms: u64, dock: DockState) -> bool {
    policy.allow_auto_check_in
        && dock == DockState::Open
        && silence_ms >= policy.silence_before_check_in_ms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amara::policy::resolve_ui_policy;
    use crate::amara::types::EmotionalState;

    #[test]
    fn fires_at_threshold_when_open() {
        let policy = resolve_ui_policy(EmotionalState::Overwhelmed);
        let threshold = policy.silence_before_check_in_ms;
        assert!(!should_soft_check_in(&policy, threshold - 1, DockState::Open));
        assert!(should_soft_check_in(&policy, threshold, DockState::Open));
    }

    #[test]
    fn never_fires_when_minimized_or_closed() {
        let policy = resolve_ui_policy(EmotionalState::DisengagedFatigued);
        for dock in [DockState::Minimized, DockState::Closed] {
            assert!(!should_soft_check_in(&policy, u64::MAX, dock));
        }
    }

    #[test]
    fn respects_policy_opt_out() {
        let policy = resolve_ui_policy(EmotionalState::ConfidentReady);
        assert!(!should_soft_check_in(&policy, u64::MAX, DockState::Open));
    }
}
