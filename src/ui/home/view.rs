//! Render state for the product grid.

use crate::catalog::{CatalogSnapshot, Product};
use crate::ui::navigation::{Navigator, Route};

/// One card in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridEntry {
    pub product_id: u64,
    pub title: String,
    /// Already formatted, e.g. `$109.95`.
    pub price: String,
    pub image: String,
}

impl GridEntry {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.display_price(),
            image: product.image.clone(),
        }
    }

    /// Open the detail screen for this entry.
    pub fn select(&self, navigator: &dyn Navigator) {
        navigator.go_to(Route::Detail {
            product_id: self.product_id,
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductListView {
    Loading,
    Error { message: String },
    /// Entries in catalog order. Empty when nothing has been loaded.
    Grid { entries: Vec<GridEntry> },
}

impl ProductListView {
    /// Loading wins over error, error wins over items.
    pub fn derive(snapshot: &CatalogSnapshot) -> Self {
        if snapshot.is_loading {
            return ProductListView::Loading;
        }
        if let Some(message) = &snapshot.error_message {
            return ProductListView::Error {
                message: message.clone(),
            };
        }
        ProductListView::Grid {
            entries: snapshot
                .items
                .as_slice()
                .iter()
                .map(GridEntry::from_product)
                .collect(),
        }
    }

    pub fn entries(&self) -> &[GridEntry] {
        match self {
            ProductListView::Grid { entries } => entries,
            _ => &[],
        }
    }
}
