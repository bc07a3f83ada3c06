//! Portfolio content generation.
//!
//! `ContentGenerationClient` composes a multimodal request to a generative
//! backend and always returns a complete `PortfolioContent`: every failure
//! (missing credential, transport, malformed response, schema mismatch) is
//! absorbed internally and resolved by the deterministic fallback. A
//! marketplace listing must never be blocked by a content-service outage.

pub mod fallback;
pub mod gemini;
pub mod prompt;

pub use gemini::GeminiBackend;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ContentConfig;
use crate::error::ContentError;
use crate::model::{AppLanguage, ExperienceBand, ImagePayload, PortfolioContent};

/// The seller fields interpolated into prompts and fallback templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerContext {
    pub name: String,
    pub village: String,
    pub craft_type: String,
    pub experience: ExperienceBand,
}

/// One request to the generative service: an instruction plus an optional
/// image part with a declared media type.
#[derive(Debug, Clone)]
pub struct PortfolioRequest {
    pub prompt: String,
    pub image: Option<ImagePayload>,
}

/// Transport seam for the generative service. Returns the model's raw JSON
/// text; the client owns parsing and validation.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, request: &PortfolioRequest) -> Result<String, ContentError>;
}

/// Client for the content-generation boundary.
///
/// Single best-effort attempt per onboarding submission — no retry loop,
/// since generation gates a foreground user action.
pub struct ContentGenerationClient {
    backend: Option<Arc<dyn GenerativeBackend>>,
}

impl ContentGenerationClient {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Client with no backend — every generation takes the fallback path.
    pub fn offline() -> Self {
        Self { backend: None }
    }

    /// Build from config. Without a credential there is no backend.
    pub fn from_config(config: &ContentConfig) -> Self {
        match config.api_key.clone() {
            Some(key) => Self::new(Arc::new(GeminiBackend::new(
                key,
                &config.model,
                &config.endpoint,
            ))),
            None => {
                tracing::warn!(
                    "content-service credential missing; portfolios will use the local template"
                );
                Self::offline()
            }
        }
    }

    /// Generate a bilingual portfolio for a seller.
    ///
    /// Always succeeds from the caller's point of view: on any failure the
    /// fallback result is substituted and the cause only logged.
    pub async fn generate(
        &self,
        ctx: &SellerContext,
        image: Option<&ImagePayload>,
        target: AppLanguage,
    ) -> PortfolioContent {
        match self.try_generate(ctx, image, target).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    seller = %ctx.name,
                    "portfolio generation failed; using local fallback"
                );
                fallback::generate(ctx)
            }
        }
    }

    async fn try_generate(
        &self,
        ctx: &SellerContext,
        image: Option<&ImagePayload>,
        target: AppLanguage,
    ) -> Result<PortfolioContent, ContentError> {
        let backend = self.backend.as_ref().ok_or(ContentError::MissingCredential)?;
        let request = PortfolioRequest {
            prompt: prompt::portfolio_prompt(ctx, image.is_some(), target),
            image: image.cloned(),
        };
        let raw = backend.generate(&request).await?;
        parse_content(&raw)
    }
}

/// Parse and validate the service's JSON payload. All three fields are
/// required and must be non-empty; anything less is a schema mismatch.
fn parse_content(raw: &str) -> Result<PortfolioContent, ContentError> {
    let content: PortfolioContent = serde_json::from_str(raw)?;
    if content.portfolio_en.trim().is_empty() {
        return Err(ContentError::InvalidResponse("empty portfolioEn".into()));
    }
    if content.portfolio_native.trim().is_empty() {
        return Err(ContentError::InvalidResponse("empty portfolioNative".into()));
    }
    if content.tags.is_empty() {
        return Err(ContentError::InvalidResponse("empty tags".into()));
    }
    Ok(content)
}
