//! Prompt construction and the declared response schema for portfolio
//! generation.

use serde_json::{Value, json};

use super::SellerContext;
use crate::model::AppLanguage;

/// Build the curator instruction for one portfolio request.
///
/// Asks for a ~100-word English narrative stressing human authorship and
/// heritage, a parallel narrative in the target language for the artisan's
/// own community, and exactly 4 descriptive tags. When an image part is
/// attached, instructs the service to factor the visual attributes in.
pub fn portfolio_prompt(ctx: &SellerContext, has_image: bool, target: AppLanguage) -> String {
    let mut prompt = format!(
        "Act as an elite curator for \"Shakti Bridge\".\n\
         Create a luxury-grade artisan portfolio.\n\
         \n\
         Artisan Context:\n\
         - Name: {}\n\
         - Village: {}\n\
         - Craft Type: {}\n\
         - Experience: {}\n\
         \n\
         Instructions:\n",
        ctx.name,
        ctx.village,
        ctx.craft_type,
        ctx.experience.label(),
    );

    if has_image {
        prompt.push_str(
            "1. Analyze the visual details of the attached product photo \
             (patterns, colors, complexity) and incorporate them into the description.\n",
        );
    }

    prompt.push_str(&format!(
        "2. \"portfolioEn\": A 100-word evocative story in English for high-end \
         international buyers. Highlight the \"human touch\" and \"heritage\".\n\
         3. \"portfolioNative\": A 100-word warm, empowering story in {} for the \
         artisan's family and community.\n\
         4. \"tags\": 4 SEO-friendly keywords based on the craft and visual style.\n\
         \n\
         Tone: Sophisticated, heart-warming, and premium.\n\
         Response must be JSON.\n",
        target.display_name(),
    ));

    prompt
}

/// Response schema declared to the service — all three fields required.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "portfolioEn": { "type": "STRING" },
            "portfolioNative": { "type": "STRING" },
            "tags": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["portfolioEn", "portfolioNative", "tags"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExperienceBand;

    fn ctx() -> SellerContext {
        SellerContext {
            name: "Asha".to_string(),
            village: "Raghurajpur".to_string(),
            craft_type: "Pottery".to_string(),
            experience: ExperienceBand::MasterArtisan,
        }
    }

    #[test]
    fn prompt_interpolates_seller_context() {
        let prompt = portfolio_prompt(&ctx(), false, AppLanguage::Hi);
        assert!(prompt.contains("Asha"));
        assert!(prompt.contains("Raghurajpur"));
        assert!(prompt.contains("Pottery"));
        assert!(prompt.contains("Master Artisan (15+ years)"));
        assert!(prompt.contains("Hindi"));
    }

    #[test]
    fn image_instruction_only_when_attached() {
        let without = portfolio_prompt(&ctx(), false, AppLanguage::Ta);
        let with = portfolio_prompt(&ctx(), true, AppLanguage::Ta);
        assert!(!without.contains("product photo"));
        assert!(with.contains("patterns, colors, complexity"));
    }

    #[test]
    fn schema_requires_all_three_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required, ["portfolioEn", "portfolioNative", "tags"]);
        assert_eq!(schema["properties"]["tags"]["type"], "ARRAY");
    }
}
