//! Catalog records as returned by the catalog endpoint.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Field names follow the JSON shape of the catalog endpoint, so the whole
/// response body decodes straight into `Vec<Product>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Lookup key; unique within one load.
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URL. Opaque to the core; the shell only displays it.
    pub image: String,
    pub rating: Rating,
}

/// Aggregate review score carried alongside a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl Product {
    /// Price as shown on every screen: `$` followed by two fraction digits.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Format a price with a `$` prefix and exactly two fraction digits.
///
/// Exact midpoints such as `0.125` round away from zero. Everything else
/// rounds to the nearest representable cent.
pub fn format_price(price: f64) -> String {
    format!("${}", fixed_two_digits(price))
}

fn fixed_two_digits(value: f64) -> String {
    // A double sits exactly halfway between two cents only when it is an odd
    // multiple of 1/8.
    let eighths = value * 8.0;
    let is_midpoint = eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if !is_midpoint {
        return format!("{:.2}", value);
    }

    let cents = (value.abs() * 100.0).round();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.2}", sign, cents / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_price_keeps_two_digits() {
        assert_eq!(format_price(109.95), "$109.95");
        assert_eq!(format_price(22.3), "$22.30");
    }

    #[test]
    fn format_price_pads_whole_numbers() {
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn format_price_rounds_midpoints_up() {
        assert_eq!(format_price(0.125), "$0.13");
        assert_eq!(format_price(10.125), "$10.13");
        assert_eq!(format_price(2.625), "$2.63");
        assert_eq!(format_price(0.375), "$0.38");
        assert_eq!(format_price(-0.125), "$-0.13");
    }

    #[test]
    fn format_price_near_midpoint_uses_stored_value() {
        // 1.005 is stored just below the midpoint.
        assert_eq!(format_price(1.005), "$1.00");
        assert_eq!(format_price(0.115), "$0.12");
    }

    #[test]
    fn format_price_is_stable_for_repeated_calls() {
        let first = format_price(55.99);
        assert_eq!(first, format_price(55.99));
        assert_eq!(first, "$55.99");
    }

    #[test]
    fn decodes_endpoint_record() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.count, 120);
        assert_eq!(product.display_price(), "$109.95");
    }
}
