//! Single-product screen.

mod view;

pub use view::{DetailCard, DetailViewModel, ProductDetailView};
