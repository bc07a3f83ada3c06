//! Deterministic local portfolio templating — the degrade-gracefully path.
//!
//! Intentionally simpler than the service-composed copy: a fixed narrative
//! frame, a shorter native sentence, and the craft plus three fixed
//! heritage descriptors as tags. Same input, byte-identical output.

use super::SellerContext;
use crate::model::PortfolioContent;

/// Generate fallback content for a seller. Pure — no I/O, never fails.
pub fn generate(ctx: &SellerContext) -> PortfolioContent {
    PortfolioContent {
        portfolio_en: format!(
            "Introducing {name}, a master of {craft} from {village}. With {experience} of \
             dedication, her work preserves the ancient soul of her community, bringing \
             timeless Indian traditions to the modern home.",
            name = ctx.name,
            craft = ctx.craft_type,
            village = ctx.village,
            experience = ctx.experience.label(),
        ),
        portfolio_native: format!(
            "{name}, {village} की एक कुशल कलाकार हैं।",
            name = ctx.name,
            village = ctx.village,
        ),
        tags: vec![
            ctx.craft_type.clone(),
            "Artisan Made".to_string(),
            "Indian Heritage".to_string(),
            "Sustainable".to_string(),
        ],
    }
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
            experience: ExperienceBand::Expert,
        }
    }

    #[test]
    fn identical_context_yields_identical_output() {
        assert_eq!(generate(&ctx()), generate(&ctx()));
    }

    #[test]
    fn narrative_references_seller_fields() {
        let content = generate(&ctx());
        assert!(content.portfolio_en.contains("Asha"));
        assert!(content.portfolio_en.contains("Pottery"));
        assert!(content.portfolio_en.contains("Raghurajpur"));
        assert!(content.portfolio_en.contains("Expert (8-15 years)"));
        assert!(content.portfolio_native.contains("Asha"));
        assert!(content.portfolio_native.contains("Raghurajpur"));
    }

    #[test]
    fn tags_are_craft_plus_three_descriptors() {
        let tags = generate(&ctx()).tags;
        assert_eq!(
            tags,
            ["Pottery", "Artisan Made", "Indian Heritage", "Sustainable"]
        );
    }
}
