//! OnboardingWorkflow — drives the two-stage onboarding to a completed
//! SellerProfile and first Product.
//!
//! One workflow instance per onboarding session. The content-generation
//! call is the only suspension point; while it is outstanding the session
//! sits in `Submitting` and re-submission is rejected. There is no
//! cancellation path once submission begins.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::content::{ContentGenerationClient, SellerContext};
use crate::error::{OnboardingError, ValidationError};
use crate::identity::Validity;
use crate::model::{
    AppLanguage, ExperienceBand, PortfolioContent, Product, ProductStatus, SellerProfile,
    VerificationStatus,
};
use crate::pricing::{DEFAULT_BASE_PRICE, PriceQuote, PricingEngine};

use super::form::OnboardingForm;
use super::stage::OnboardingStage;

/// The finished records emitted when a session completes — handed to the
/// catalog in one batch, never partially. The first product always exists:
/// stage 1 cannot be left without one.
#[derive(Debug, Clone)]
pub struct CompletedOnboarding {
    pub seller: SellerProfile,
    pub product: Product,
}

/// One onboarding session: an owned form, a stage, and the collaborators
/// needed at submission.
pub struct OnboardingWorkflow {
    stage: OnboardingStage,
    form: OnboardingForm,
    language: AppLanguage,
    content: ContentGenerationClient,
    pricing: PricingEngine,
    catalog: Arc<dyn Catalog>,
}

impl OnboardingWorkflow {
    pub fn new(
        language: AppLanguage,
        content: ContentGenerationClient,
        pricing: PricingEngine,
        catalog: Arc<dyn Catalog>,
    ) -> Self {
        Self {
            stage: OnboardingStage::default(),
            form: OnboardingForm::default(),
            language,
            content,
            pricing,
            catalog,
        }
    }

    pub fn stage(&self) -> OnboardingStage {
        self.stage
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    /// Mutate the form. Allowed only while collecting — a submitting or
    /// completed session is immutable.
    pub fn edit_form(
        &mut self,
        edit: impl FnOnce(&mut OnboardingForm),
    ) -> Result<(), OnboardingError> {
        match self.stage {
            OnboardingStage::CollectingProfile | OnboardingStage::CollectingIdentity => {
                edit(&mut self.form);
                Ok(())
            }
            OnboardingStage::Submitting => Err(OnboardingError::SubmissionInFlight),
            OnboardingStage::Complete => Err(OnboardingError::AlreadyComplete),
        }
    }

    /// Stage 1 → stage 2, guarded by stage-1 completeness including the
    /// mandatory product photo.
    pub fn advance_to_identity(&mut self) -> Result<(), OnboardingError> {
        if !self.stage.can_transition_to(OnboardingStage::CollectingIdentity) {
            return Err(OnboardingError::WrongStage {
                stage: self.stage,
                action: "advance to identity",
            });
        }
        self.form.check_profile_complete()?;
        self.stage = OnboardingStage::CollectingIdentity;
        Ok(())
    }

    /// The one backward edge. Discards nothing already entered.
    pub fn back_to_profile(&mut self) -> Result<(), OnboardingError> {
        if !self.stage.can_transition_to(OnboardingStage::CollectingProfile) {
            return Err(OnboardingError::WrongStage {
                stage: self.stage,
                action: "go back to profile",
            });
        }
        self.stage = OnboardingStage::CollectingProfile;
        Ok(())
    }

    /// Tri-state verdict for the presentation layer.
    pub fn identity_validity(&self) -> Validity {
        self.form.identity_validity()
    }

    /// Final submission: one pricing quote, one content generation, then
    /// the assembled SellerProfile + Product published as a batch.
    ///
    /// Rejected unless the session is in `CollectingIdentity` with an
    /// explicitly valid ID — at most one submission per workflow instance.
    pub async fn submit(&mut self) -> Result<CompletedOnboarding, OnboardingError> {
        if !self.stage.can_transition_to(OnboardingStage::Submitting) {
            return Err(match self.stage {
                OnboardingStage::Submitting => OnboardingError::SubmissionInFlight,
                OnboardingStage::Complete => OnboardingError::AlreadyComplete,
                stage => OnboardingError::WrongStage {
                    stage,
                    action: "submit",
                },
            });
        }

        match self.form.identity_validity() {
            Validity::Valid => {}
            Validity::Invalid => {
                return Err(ValidationError::InvalidIdNumber {
                    scheme: self.form.id_scheme,
                }
                .into());
            }
            Validity::Unknown => {
                return Err(ValidationError::IdNumberMissing {
                    scheme: self.form.id_scheme,
                }
                .into());
            }
        }

        self.stage = OnboardingStage::Submitting;
        tracing::info!(seller = %self.form.name, "onboarding submission started");

        let ctx = self.form.seller_context();
        let image = self.form.product_images.first().cloned();
        let portfolio = self
            .content
            .generate(&ctx, image.as_ref(), self.language)
            .await;

        // Default substitution happens before the markup is applied.
        let base_price = self.form.base_price.unwrap_or(DEFAULT_BASE_PRICE);
        let quote = self.pricing.quote(base_price);

        let seller = self.assemble_seller(&ctx, &portfolio);
        let product = self.assemble_product(&seller, &portfolio, base_price, quote);

        self.catalog
            .publish(seller.clone(), product.clone())
            .await?;

        self.stage = OnboardingStage::Complete;
        tracing::info!(
            seller = %seller.id,
            markup = quote.markup_percent,
            price = quote.buyer_price,
            "onboarding complete"
        );
        Ok(CompletedOnboarding { seller, product })
    }

    fn assemble_seller(&self, ctx: &SellerContext, portfolio: &PortfolioContent) -> SellerProfile {
        let form = &self.form;
        SellerProfile {
            id: Uuid::new_v4(),
            name: ctx.name.clone(),
            email: form.email.clone(),
            village: ctx.village.clone(),
            district: form.district.clone(),
            craft_type: ctx.craft_type.clone(),
            experience: form.experience.unwrap_or(ExperienceBand::New),
            phone: form.phone.clone(),
            profile_image_url: form.profile_image.clone(),
            id_scheme: form.id_scheme,
            id_number: form.id_number.clone(),
            is_verified: false,
            verification_status: VerificationStatus::Pending,
            portfolio_en: portfolio.portfolio_en.clone(),
            portfolio_native: portfolio.portfolio_native.clone(),
            language: self.language,
            image_urls: form.product_images.iter().map(|i| i.to_data_url()).collect(),
            tags: Some(portfolio.tags.clone()),
            created_at: Utc::now(),
        }
    }

    fn assemble_product(
        &self,
        seller: &SellerProfile,
        portfolio: &PortfolioContent,
        base_price: u32,
        quote: PriceQuote,
    ) -> Product {
        let craft = &self.form.craft_type;
        Product {
            id: Uuid::new_v4(),
            seller_id: seller.id,
            name_en: self
                .form
                .product_name
                .clone()
                .unwrap_or_else(|| format!("{craft} Signature Piece")),
            name_native: self
                .form
                .product_name
                .clone()
                .unwrap_or_else(|| format!("{craft} की कलाकृति")),
            description_en: portfolio.portfolio_en.clone(),
            description_native: portfolio.portfolio_native.clone(),
            base_price,
            markup_percent: quote.markup_percent,
            price: quote.buyer_price,
            image_url: seller.image_urls.first().cloned().unwrap_or_default(),
            category: craft.clone(),
            status: ProductStatus::Available,
            rating: Some(5.0),
            created_at: Utc::now(),
        }
    }
}
