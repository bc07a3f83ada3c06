//! Two-stage seller onboarding: profile + first product capture, then
//! identity capture, then one guarded submission producing a finished
//! SellerProfile and Product.

pub mod form;
pub mod stage;
pub mod workflow;

pub use form::OnboardingForm;
pub use stage::OnboardingStage;
pub use workflow::{CompletedOnboarding, OnboardingWorkflow};
