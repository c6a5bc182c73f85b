//! Value objects for the order domain.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of the user who placed an order.
///
/// Opaque: it is never checked against the user registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OwnerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Product identifier (SKU).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A line of an order: which product, how many, at what unit price.
///
/// Quantity and price are taken as given; zero and negative values are
/// accepted and simply contribute their arithmetic product to the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The product identifier.
    pub product_id: ProductId,

    /// Quantity ordered.
    pub quantity: i64,

    /// Price per unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(product_id: impl Into<ProductId>, quantity: i64, price: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            price,
        }
    }

    /// Returns `price * quantity`, or None if it overflows.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_id_string_conversion() {
        let id = OwnerId::from("u1");
        assert_eq!(id.to_string(), "u1");

        let id2: OwnerId = "u2".into();
        assert_eq!(id2.to_string(), "u2");
    }

    #[test]
    fn test_product_id_string_conversion() {
        let id = ProductId::from("SKU-001");
        assert_eq!(id.to_string(), "SKU-001");

        let id2: ProductId = "SKU-002".into();
        assert_eq!(id2.to_string(), "SKU-002");
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new("p1", 2, Decimal::new(999, 2));
        assert_eq!(item.line_total(), Some(Decimal::new(1998, 2)));
    }

    #[test]
    fn test_degenerate_line_totals() {
        assert_eq!(
            LineItem::new("p1", 0, Decimal::new(500, 2)).line_total(),
            Some(Decimal::ZERO)
        );
        assert_eq!(
            LineItem::new("p1", -3, Decimal::new(200, 2)).line_total(),
            Some(Decimal::new(-600, 2))
        );
    }

    #[test]
    fn test_line_total_overflow() {
        let item = LineItem::new("p1", i64::MAX, Decimal::MAX);
        assert_eq!(item.line_total(), None);
    }

    #[test]
    fn test_line_item_wire_format() {
        let item: LineItem =
            serde_json::from_str(r#"{"product_id":"p1","quantity":2,"price":9.99}"#).unwrap();
        assert_eq!(item, LineItem::new("p1", 2, Decimal::new(999, 2)));

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["product_id"], "p1");
        assert_eq!(json["quantity"], 2);
        let price = json["price"].as_f64().unwrap();
        assert!((price - 9.99).abs() < 1e-9);
    }

    #[test]
    fn test_integer_price_is_accepted() {
        let item: LineItem =
            serde_json::from_str(r#"{"product_id":"p1","quantity":1,"price":10}"#).unwrap();
        assert_eq!(item.price, Decimal::from(10));
    }
}
