//! Render state for the detail screen.
//!
//! The product is looked up in the current snapshot; the screen never
//! triggers a fetch of its own.

use crate::catalog::{CatalogSnapshot, Product};
use crate::ui::navigation::Navigator;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    pub product_id: u64,
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
    /// e.g. `3.9 (120 reviews)`.
    pub rating: String,
}

impl DetailCard {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.display_price(),
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            rating: format!("{:.1} ({} reviews)", product.rating.rate, product.rating.count),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetailView {
    Loading,
    Error { message: String },
    /// No item with this id in the snapshot. Also covers "not loaded yet".
    NotFound { product_id: u64 },
    Found(DetailCard),
}

impl ProductDetailView {
    pub fn derive(snapshot: &CatalogSnapshot, product_id: u64) -> Self {
        if snapshot.is_loading {
            return ProductDetailView::Loading;
        }
        if let Some(message) = &snapshot.error_message {
            return ProductDetailView::Error {
                message: message.clone(),
            };
        }
        match snapshot.items.find(product_id) {
            Some(product) => ProductDetailView::Found(DetailCard::from_product(product)),
            None => ProductDetailView::NotFound { product_id },
        }
    }
}

/// Detail screen bound to the `product_id` it was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailViewModel {
    product_id: u64,
}

impl DetailViewModel {
    pub fn new(product_id: u64) -> Self {
        Self { product_id }
    }

    pub fn product_id(&self) -> u64 {
        self.product_id
    }

    pub fn view(&self, snapshot: &CatalogSnapshot) -> ProductDetailView {
        ProductDetailView::derive(snapshot, self.product_id)
    }

    /// Available in every state, including loading and error.
    pub fn go_back(&self, navigator: &dyn Navigator) {
        navigator.go_back();
    }
}
