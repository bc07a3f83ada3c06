//! Per-session onboarding form — a single owned mutable record.
//!
//! All session-mutable state lives here, mutated only through the setters
//! below; nothing is shared across concurrent onboarding sessions.

use serde::{Deserialize, Serialize};

use crate::content::SellerContext;
use crate::error::ValidationError;
use crate::identity::{self, Validity};
use crate::model::{ExperienceBand, IdScheme, ImagePayload};

/// Digits a phone number must carry.
pub const PHONE_LEN: usize = 10;

/// Everything a seller enters across both onboarding stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingForm {
    pub name: String,
    pub email: Option<String>,
    pub village: String,
    pub district: String,
    pub craft_type: String,
    pub experience: Option<ExperienceBand>,
    pub phone: String,
    pub product_name: Option<String>,
    /// Seller-declared price in whole rupees; defaulted at submission.
    pub base_price: Option<u32>,
    pub profile_image: Option<String>,
    /// Product photos; the first one feeds the vision part of generation.
    pub product_images: Vec<ImagePayload>,
    pub id_scheme: IdScheme,
    pub id_number: String,
}

impl OnboardingForm {
    /// Name input accepts letters and spaces only.
    pub fn set_name(&mut self, raw: &str) {
        self.name = filter_alphabetic(raw);
    }

    /// District input accepts letters and spaces only.
    pub fn set_district(&mut self, raw: &str) {
        self.district = filter_alphabetic(raw);
    }

    /// Phone input accepts digits only, capped at the fixed length.
    pub fn set_phone(&mut self, raw: &str) {
        self.phone = filter_digits(raw).chars().take(PHONE_LEN).collect();
    }

    /// ID input is normalized as it is entered (whitespace stripped,
    /// uppercased); the stored value is never masked.
    pub fn set_id_number(&mut self, raw: &str) {
        self.id_number = identity::normalize(raw);
    }

    /// Switching schemes clears the entered value — the formats are
    /// mutually exclusive.
    pub fn select_id_scheme(&mut self, scheme: IdScheme) {
        if scheme != self.id_scheme {
            self.id_scheme = scheme;
            self.id_number.clear();
        }
    }

    pub fn add_product_image(&mut self, image: ImagePayload) {
        self.product_images.push(image);
    }

    /// Tri-state verdict for the currently entered ID value.
    pub fn identity_validity(&self) -> Validity {
        identity::validate(self.id_scheme, &self.id_number)
    }

    /// All stage-1 requirements: every required field present and at least
    /// one product photo — the vision-dependent generator cannot run
    /// without one.
    pub fn check_profile_complete(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.village.trim().is_empty() {
            return Err(ValidationError::MissingField("village"));
        }
        if self.district.trim().is_empty() {
            return Err(ValidationError::MissingField("district"));
        }
        if self.craft_type.trim().is_empty() {
            return Err(ValidationError::MissingField("craft_type"));
        }
        if self.experience.is_none() {
            return Err(ValidationError::MissingField("experience"));
        }
        if self.phone.len() != PHONE_LEN {
            return Err(ValidationError::InvalidPhone {
                expected: PHONE_LEN,
            });
        }
        if self.product_images.is_empty() {
            return Err(ValidationError::MissingProductImage);
        }
        Ok(())
    }

    /// The fields interpolated into generation prompts and fallback text.
    /// Only meaningful once stage 1 is complete.
    pub fn seller_context(&self) -> SellerContext {
        SellerContext {
            name: self.name.clone(),
            village: self.village.clone(),
            craft_type: self.craft_type.clone(),
            experience: self.experience.unwrap_or(ExperienceBand::New),
        }
    }
}

fn filter_alphabetic(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}

fn filter_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> OnboardingForm {
        let mut form = OnboardingForm::default();
        form.set_name("Asha");
        form.village = "Raghurajpur".to_string();
        form.set_district("Puri");
        form.craft_type = "Pottery".to_string();
        form.experience = Some(ExperienceBand::Expert);
        form.set_phone("9876543210");
        form.add_product_image(ImagePayload {
            mime_type: "image/png".to_string(),
            data: "iVBORw0KGgo=".to_string(),
        });
        form
    }

    #[test]
    fn name_filter_strips_non_letters() {
        let mut form = OnboardingForm::default();
        form.set_name("Asha2 Devi!");
        assert_eq!(form.name, "Asha Devi");
    }

    #[test]
    fn phone_filter_keeps_digits_and_caps_length() {
        let mut form = OnboardingForm::default();
        form.set_phone("+91 98765-43210-99");
        assert_eq!(form.phone, "9198765432");
    }

    #[test]
    fn id_number_is_normalized_on_entry() {
        let mut form = OnboardingForm::default();
        form.set_id_number(" abcde 1234f ");
        assert_eq!(form.id_number, "ABCDE1234F");
    }

    #[test]
    fn switching_scheme_clears_value() {
        let mut form = OnboardingForm::default();
        form.set_id_number("ABCDE1234F");
        form.select_id_scheme(IdScheme::Aadhar);
        assert_eq!(form.id_scheme, IdScheme::Aadhar);
        assert!(form.id_number.is_empty());

        // Re-selecting the same scheme keeps the value
        form.set_id_number("123456789012");
        form.select_id_scheme(IdScheme::Aadhar);
        assert_eq!(form.id_number, "123456789012");
    }

    #[test]
    fn complete_form_passes_stage1_check() {
        assert!(filled_form().check_profile_complete().is_ok());
    }

    #[test]
    fn missing_fields_reported_individually() {
        let mut form = filled_form();
        form.name.clear();
        assert_eq!(
            form.check_profile_complete(),
            Err(ValidationError::MissingField("name"))
        );

        let mut form = filled_form();
        form.experience = None;
        assert_eq!(
            form.check_profile_complete(),
            Err(ValidationError::MissingField("experience"))
        );

        let mut form = filled_form();
        form.set_phone("12345");
        assert_eq!(
            form.check_profile_complete(),
            Err(ValidationError::InvalidPhone { expected: 10 })
        );
    }

    #[test]
    fn product_photo_is_mandatory() {
        let mut form = filled_form();
        form.product_images.clear();
        assert_eq!(
            form.check_profile_complete(),
            Err(ValidationError::MissingProductImage)
        );
    }

    #[test]
    fn identity_validity_tracks_scheme_and_value() {
        let mut form = OnboardingForm::default();
        assert_eq!(form.identity_validity(), Validity::Unknown);
        form.set_id_number("ABCDE1234F");
        assert_eq!(form.identity_validity(), Validity::Valid);
        form.select_id_scheme(IdScheme::Aadhar);
        assert_eq!(form.identity_validity(), Validity::Unknown);
        form.set_id_number("12345");
        assert_eq!(form.identity_validity(), Validity::Invalid);
    }
}
