//! Storefront demo: a mock login gate, a product grid loaded from a public
//! REST endpoint, and a product detail view, rendered in the terminal.

pub mod abort;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
