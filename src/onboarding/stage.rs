//! Onboarding state machine — tracks which stage a session is in.

use serde::{Deserialize, Serialize};

/// The stages of a seller onboarding session.
///
/// Progresses `CollectingProfile → CollectingIdentity → Submitting →
/// Complete`. The only backward edge is `CollectingIdentity →
/// CollectingProfile` (user-triggered, discards nothing); once submission
/// starts there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStage {
    CollectingProfile,
    CollectingIdentity,
    Submitting,
    Complete,
}

impl OnboardingStage {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: OnboardingStage) -> bool {
        use OnboardingStage::*;
        matches!(
            (self, target),
            (CollectingProfile, CollectingIdentity)
                | (CollectingIdentity, CollectingProfile)
                | (CollectingIdentity, Submitting)
                | (Submitting, Complete)
        )
    }

    /// Whether this stage is terminal (onboarding is done).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for OnboardingStage {
    fn default() -> Self {
        Self::CollectingProfile
    }
}

impl std::fmt::Display for OnboardingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::CollectingProfile => "collecting_profile",
            Self::CollectingIdentity => "collecting_identity",
            Self::Submitting => "submitting",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transitions() {
        use OnboardingStage::*;
        let transitions = [
            (CollectingProfile, CollectingIdentity),
            (CollectingIdentity, CollectingProfile),
            (CollectingIdentity, Submitting),
            (Submitting, Complete),
        ];
        for (from, to) in transitions {
            assert!(
                from.can_transition_to(to),
                "{from} should transition to {to}"
            );
        }
    }

    #[test]
    fn invalid_transitions() {
        use OnboardingStage::*;
        // Skip stages
        assert!(!CollectingProfile.can_transition_to(Submitting));
        assert!(!CollectingProfile.can_transition_to(Complete));
        // No way back once submission begins
        assert!(!Submitting.can_transition_to(CollectingIdentity));
        assert!(!Submitting.can_transition_to(CollectingProfile));
        // Terminal
        assert!(!Complete.can_transition_to(CollectingProfile));
        assert!(!Complete.can_transition_to(Submitting));
        // Self-transition
        assert!(!CollectingIdentity.can_transition_to(CollectingIdentity));
    }

    #[test]
    fn only_complete_is_terminal() {
        use OnboardingStage::*;
        assert!(Complete.is_terminal());
        assert!(!CollectingProfile.is_terminal());
        assert!(!CollectingIdentity.is_terminal());
        assert!(!Submitting.is_terminal());
    }

    #[test]
    fn display_matches_serde() {
        use OnboardingStage::*;
        for stage in [CollectingProfile, CollectingIdentity, Submitting, Complete] {
            let display = format!("{stage}");
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }
}
