use std::io::{self, Write};
use std::sync::Arc;

use shakti_bridge::catalog::InMemoryCatalog;
use shakti_bridge::config::ContentConfig;
use shakti_bridge::content::ContentGenerationClient;
use shakti_bridge::identity::{self, Validity};
use shakti_bridge::model::{AppLanguage, ExperienceBand, IdScheme, ImagePayload};
use shakti_bridge::onboarding::OnboardingWorkflow;
use shakti_bridge::pricing::PricingEngine;

/// Placeholder product photo used when no data URL is pasted (1x1 PNG).
const SAMPLE_IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ContentConfig::from_env()?;

    eprintln!("🪔 Shakti Bridge v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!(
        "   Content service: {}",
        if config.api_key.is_some() {
            "enabled"
        } else {
            "offline — portfolios use the local template"
        }
    );
    eprintln!("   Seller onboarding demo. Answer the prompts below.\n");

    let catalog = Arc::new(InMemoryCatalog::new());
    let mut workflow = OnboardingWorkflow::new(
        AppLanguage::Hi,
        ContentGenerationClient::from_config(&config),
        PricingEngine::new(),
        Arc::clone(&catalog) as Arc<dyn shakti_bridge::catalog::Catalog>,
    );

    // ── Stage 1: profile + first product ────────────────────────────────
    loop {
        workflow.edit_form(|f| {
            f.set_name(&ask("Full name"));
            f.village = ask("Village");
            f.set_district(&ask("District"));
            f.craft_type = ask("Craft type (e.g. Traditional Pottery)");
            f.experience =
                parse_experience(&ask("Experience [1=New 2=Experienced 3=Expert 4=Master]"));
            f.set_phone(&ask("Phone (10 digits)"));

            let product_name = ask("Product name (blank for default)");
            if !product_name.is_empty() {
                f.product_name = Some(product_name);
            }
            if let Ok(price) = ask("Expected price in ₹ (blank for default)").parse() {
                f.base_price = Some(price);
            }

            let url = ask("Product photo data URL (blank for sample)");
            let image = ImagePayload::from_data_url(&url).unwrap_or_else(|| {
                ImagePayload::from_data_url(SAMPLE_IMAGE).expect("sample image is a valid data URL")
            });
            f.product_images.clear();
            f.add_product_image(image);
        })?;

        match workflow.advance_to_identity() {
            Ok(()) => break,
            Err(e) => eprintln!("   ✗ {e}\n"),
        }
    }

    // ── Stage 2: identity ────────────────────────────────────────────────
    loop {
        let scheme = if ask("ID type [1=PAN 2=AADHAR]") == "2" {
            IdScheme::Aadhar
        } else {
            IdScheme::Pan
        };
        let value = ask(&format!("{scheme} number"));
        workflow.edit_form(|f| {
            f.select_id_scheme(scheme);
            f.set_id_number(&value);
        })?;

        match workflow.identity_validity() {
            Validity::Valid => {
                eprintln!(
                    "   ✓ {scheme} format valid ({})",
                    identity::mask_for_display(&workflow.form().id_number, false)
                );
                break;
            }
            _ => eprintln!("   ✗ {}\n", identity::format_hint(scheme)),
        }
    }

    eprintln!("\n   Creating portfolio…");
    let done = workflow.submit().await?;

    let seller = &done.seller;
    eprintln!("\n── Portfolio ─────────────────────────────────────");
    eprintln!("{}\n", seller.portfolio_en);
    eprintln!("{}", seller.portfolio_native);
    eprintln!(
        "   Tags: {}",
        seller.tags.clone().unwrap_or_default().join(", ")
    );

    let product = &done.product;
    eprintln!("\n── First listing ─────────────────────────────────");
    eprintln!(
        "   {} — ₹{} (base ₹{}, +{}%)",
        product.name_en, product.price, product.base_price, product.markup_percent
    );

    eprintln!(
        "\n   Catalog now holds {} seller(s), {} product(s)",
        catalog.sellers().await.len(),
        catalog.products().await.len()
    );

    Ok(())
}

fn ask(label: &str) -> String {
    eprint!("{label}: ");
    io::stderr().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
    line.trim().to_string()
}

fn parse_experience(raw: &str) -> Option<ExperienceBand> {
    match raw.trim() {
        "1" => Some(ExperienceBand::New),
        "2" => Some(ExperienceBand::Experienced),
        "3" => Some(ExperienceBand::Expert),
        "4" => Some(ExperienceBand::MasterArtisan),
        _ => None,
    }
}
