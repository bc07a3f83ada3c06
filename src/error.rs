//! Error types for Shakti Bridge.

use crate::model::IdScheme;
use crate::onboarding::OnboardingStage;

/// Top-level error type for the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Onboarding error: {0}")]
    Onboarding(#[from] OnboardingError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Recoverable input problems. These block a stage transition and are
/// surfaced as inline signals, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Phone number must be exactly {expected} digits")]
    InvalidPhone { expected: usize },

    #[error("At least one product photo is required")]
    MissingProductImage,

    #[error("{scheme} number is not in a valid format")]
    InvalidIdNumber { scheme: IdScheme },

    #[error("{scheme} number has not been entered")]
    IdNumberMissing { scheme: IdScheme },
}

/// Content-generation failures: credential missing, transport error,
/// non-success status, malformed body, schema mismatch. One uniform class,
/// absorbed inside `ContentGenerationClient` and resolved by the fallback
/// generator — never surfaced to the workflow or the user.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("No content-service credential configured")]
    MissingCredential,

    #[error("Content service request failed: {0}")]
    Transport(String),

    #[error("Content service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid content-service response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Workflow-level errors.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error("Cannot {action} while in stage {stage}")]
    WrongStage {
        stage: OnboardingStage,
        action: &'static str,
    },

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Onboarding is already complete")]
    AlreadyComplete,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Persistence collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Insert failed: {0}")]
    Insert(String),
}

/// Result type alias for the engine.
pub type Result<T> = std::result::Result<T, Error>;
