//! Catalog snapshot and its load-phase transitions.
//!
//! The snapshot is the only externally visible state of the product store.
//! It changes exclusively through [`CatalogReducer`], one intent per phase of
//! a load: start, success, failure.

use crate::catalog::product::Product;
use crate::ui::mvi::{Intent, Reducer, UiState};

/// Items held by the store.
///
/// `NotLoaded` and `Loaded(vec![])` are different states: the first means no
/// load has succeeded yet, the second that the endpoint returned no products.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogItems {
    #[default]
    NotLoaded,
    Loaded(Vec<Product>),
}

impl CatalogItems {
    /// Products in catalog order; empty when nothing has been loaded.
    pub fn as_slice(&self) -> &[Product] {
        match self {
            CatalogItems::NotLoaded => &[],
            CatalogItems::Loaded(products) => products,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogItems::Loaded(_))
    }

    /// Linear lookup by product id.
    pub fn find(&self, product_id: u64) -> Option<&Product> {
        self.as_slice().iter().find(|p| p.id == product_id)
    }
}

/// Read-only view of the catalog: items, loading flag and last error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogSnapshot {
    pub items: CatalogItems,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl UiState for CatalogSnapshot {}

/// Phase transitions of a load operation.
#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// A load was started.
    LoadStarted,
    /// The endpoint returned a decodable product list.
    LoadSucceeded { products: Vec<Product> },
    /// The load failed, was aborted, or returned a non-2xx status.
    LoadFailed { message: String },
}

impl Intent for CatalogIntent {}

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogSnapshot;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::LoadStarted => CatalogSnapshot {
                items: state.items,
                is_loading: true,
                error_message: None,
            },
            CatalogIntent::LoadSucceeded { products } => CatalogSnapshot {
                items: CatalogItems::Loaded(products),
                is_loading: false,
                error_message: None,
            },
            CatalogIntent::LoadFailed { message } => CatalogSnapshot {
                items: state.items,
                is_loading: false,
                error_message: Some(message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::Rating;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: 10.0,
            description: String::new(),
            category: "misc".into(),
            image: format!("https://example.com/{}.png", id),
            rating: Rating { rate: 4.0, count: 1 },
        }
    }

    #[test]
    fn initial_snapshot_is_idle_and_not_loaded() {
        let snapshot = CatalogSnapshot::default();
        assert_eq!(snapshot.items, CatalogItems::NotLoaded);
        assert!(!snapshot.is_loading);
        assert!(snapshot.error_message.is_none());
    }

    #[test]
    fn start_sets_loading_and_clears_error() {
        let state = CatalogSnapshot {
            items: CatalogItems::NotLoaded,
            is_loading: false,
            error_message: Some("An error occurred".into()),
        };
        let state = CatalogReducer::reduce(state, CatalogIntent::LoadStarted);
        assert!(state.is_loading);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn start_keeps_previous_items() {
        let state = CatalogSnapshot {
            items: CatalogItems::Loaded(vec![product(1)]),
            ..Default::default()
        };
        let state = CatalogReducer::reduce(state, CatalogIntent::LoadStarted);
        assert_eq!(state.items.as_slice().len(), 1);
    }

    #[test]
    fn success_replaces_items_wholesale() {
        let state = CatalogSnapshot {
            items: CatalogItems::Loaded(vec![product(1), product(2)]),
            is_loading: true,
            error_message: None,
        };
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::LoadSucceeded {
                products: vec![product(7)],
            },
        );
        assert_eq!(state.items, CatalogItems::Loaded(vec![product(7)]));
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn success_clears_error_left_by_overlapping_failure() {
        let state = CatalogSnapshot {
            items: CatalogItems::NotLoaded,
            is_loading: false,
            error_message: Some("Request failed with status 500".into()),
        };
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::LoadSucceeded {
                products: vec![product(1)],
            },
        );
        assert!(state.error_message.is_none());
        assert_eq!(state.items.as_slice().len(), 1);
    }

    #[test]
    fn empty_success_is_loaded_not_absent() {
        let state = CatalogReducer::reduce(
            CatalogSnapshot::default(),
            CatalogIntent::LoadSucceeded { products: vec![] },
        );
        assert!(state.items.is_loaded());
        assert!(state.items.as_slice().is_empty());
    }

    #[test]
    fn failure_keeps_items_and_sets_message() {
        let state = CatalogSnapshot {
            items: CatalogItems::Loaded(vec![product(3)]),
            is_loading: true,
            error_message: None,
        };
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::LoadFailed {
                message: "Request Aborted".into(),
            },
        );
        assert!(!state.is_loading);
        assert_eq!(state.error_message.as_deref(), Some("Request Aborted"));
        assert_eq!(state.items, CatalogItems::Loaded(vec![product(3)]));
    }

    #[test]
    fn find_returns_none_before_first_load() {
        assert!(CatalogItems::NotLoaded.find(1).is_none());
        let items = CatalogItems::Loaded(vec![product(1), product(2)]);
        assert_eq!(items.find(2).map(|p| p.id), Some(2));
        assert!(items.find(9).is_none());
    }
}
