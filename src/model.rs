//! Core marketplace records and the enums shared across the engine.
//!
//! Wire form is camelCase JSON throughout, matching what the mobile client
//! and the content service exchange.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Languages the app runs in. `En` doubles as the portfolio's buyer-facing
/// language; the others are targets for `portfolio_native`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppLanguage {
    En,
    Hi,
    Ta,
    Te,
    Ml,
}

impl AppLanguage {
    /// English name of the language, as interpolated into prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
            Self::Ta => "Tamil",
            Self::Te => "Telugu",
            Self::Ml => "Malayalam",
        }
    }
}

/// Self-declared experience bands, coarse on purpose — sellers pick one
/// from a list rather than typing a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceBand {
    New,
    Experienced,
    Expert,
    MasterArtisan,
}

impl ExperienceBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New (1-2 years)",
            Self::Experienced => "Experienced (3-7 years)",
            Self::Expert => "Expert (8-15 years)",
            Self::MasterArtisan => "Master Artisan (15+ years)",
        }
    }
}

/// The two identity document schemes accepted at onboarding. Closed set:
/// everything else is unrepresentable by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdScheme {
    #[default]
    Pan,
    Aadhar,
}

impl std::fmt::Display for IdScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pan => "PAN",
            Self::Aadhar => "AADHAR",
        };
        write!(f, "{s}")
    }
}

/// Administrative verification state. Onboarding always produces `Pending`;
/// the transitions out of it belong to a back-office flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Available,
    Pending,
    Sold,
}

/// An image carried as base64 with its declared media type — the shape the
/// generation API's inline data part wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    /// Split a `data:<mime>;base64,<payload>` URL into its two halves.
    /// Returns `None` for anything that is not a base64 data URL.
    pub fn from_data_url(url: &str) -> Option<Self> {
        let rest = url.strip_prefix("data:")?;
        let (mime_type, data) = rest.split_once(";base64,")?;
        if mime_type.is_empty() || data.is_empty() {
            return None;
        }
        Some(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// The bilingual marketing copy produced for a seller — the exact shape the
/// content service is asked to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub portfolio_en: String,
    pub portfolio_native: String,
    pub tags: Vec<String>,
}

/// A fully onboarded seller as published to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfile {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub village: String,
    pub district: String,
    pub craft_type: String,
    pub experience: ExperienceBand,
    pub phone: String,
    pub profile_image_url: Option<String>,
    pub id_scheme: IdScheme,
    /// Stored unmasked; masking is a display concern only.
    pub id_number: String,
    pub is_verified: bool,
    pub verification_status: VerificationStatus,
    pub portfolio_en: String,
    pub portfolio_native: String,
    pub language: AppLanguage,
    pub image_urls: Vec<String>,
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// A catalog listing. `price` is derived from `(base_price, markup_percent)`
/// once at creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub name_en: String,
    pub name_native: String,
    pub description_en: String,
    pub description_native: String,
    /// Seller take in whole rupees.
    pub base_price: u32,
    pub markup_percent: u8,
    /// Buyer-facing price in whole rupees.
    pub price: u32,
    pub image_url: String,
    pub category: String,
    pub status: ProductStatus,
    pub rating: Option<f32>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether the stored price re-derives from its base and markup.
    pub fn price_is_consistent(&self) -> bool {
        self.price == crate::pricing::buyer_price(self.base_price, self.markup_percent)
    }
}
