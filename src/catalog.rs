//! Persistence collaborator — append-only insertion of completed records.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CatalogError;
use crate::model::{Product, SellerProfile};

/// Consumes completed sellers and products keyed by id. Append-only: this
/// core has no update or delete path.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Insert a finished seller and their first product — one batch, never
    /// partially.
    async fn publish(&self, seller: SellerProfile, product: Product) -> Result<(), CatalogError>;
}

/// In-memory catalog for the demo binary and tests.
#[derive(Default)]
pub struct InMemoryCatalog {
    sellers: RwLock<Vec<SellerProfile>>,
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sellers(&self) -> Vec<SellerProfile> {
        self.sellers.read().await.clone()
    }

    pub async fn products(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    pub async fn products_for(&self, seller_id: Uuid) -> Vec<Product> {
        self.products
            .read()
            .await
            .iter()
            .filter(|p| p.seller_id == seller_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn publish(&self, seller: SellerProfile, product: Product) -> Result<(), CatalogError> {
        // Hold both locks for the batch so a reader never sees the seller
        // without its product.
        let mut sellers = self.sellers.write().await;
        let mut products = self.products.write().await;
        sellers.push(seller);
        products.push(product);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AppLanguage, ExperienceBand, IdScheme, ProductStatus, VerificationStatus,
    };
    use chrono::Utc;

    fn seller() -> SellerProfile {
        SellerProfile {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            email: None,
            village: "Raghurajpur".to_string(),
            district: "Puri".to_string(),
            craft_type: "Pottery".to_string(),
            experience: ExperienceBand::Expert,
            phone: "9876543210".to_string(),
            profile_image_url: None,
            id_scheme: IdScheme::Pan,
            id_number: "ABCDE1234F".to_string(),
            is_verified: false,
            verification_status: VerificationStatus::Pending,
            portfolio_en: String::new(),
            portfolio_native: String::new(),
            language: AppLanguage::Hi,
            image_urls: vec![],
            tags: None,
            created_at: Utc::now(),
        }
    }

    fn product(seller_id: Uuid) -> Product {
        Product {
            id: Uuid::new_v4(),
            seller_id,
            name_en: "Vase".to_string(),
            name_native: "फूलदान".to_string(),
            description_en: String::new(),
            description_native: String::new(),
            base_price: 1500,
            markup_percent: 6,
            price: 1590,
            image_url: String::new(),
            category: "Pottery".to_string(),
            status: ProductStatus::Available,
            rating: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn publish_inserts_batch() {
        let catalog = InMemoryCatalog::new();
        let s = seller();
        let p = product(s.id);
        catalog.publish(s.clone(), p).await.unwrap();

        assert_eq!(catalog.sellers().await.len(), 1);
        assert_eq!(catalog.products_for(s.id).await.len(), 1);
    }

    #[tokio::test]
    async fn inserts_are_append_only() {
        let catalog = InMemoryCatalog::new();
        let first = seller();
        let second = seller();
        catalog.publish(first.clone(), product(first.id)).await.unwrap();
        catalog.publish(second.clone(), product(second.id)).await.unwrap();

        let sellers = catalog.sellers().await;
        assert_eq!(sellers.len(), 2);
        assert_eq!(sellers[0].id, first.id);
        assert_eq!(sellers[1].id, second.id);
        assert_eq!(catalog.products().await.len(), 2);
        assert_eq!(catalog.products_for(first.id).await.len(), 1);
    }
}
