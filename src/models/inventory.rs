use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::analytics::LOW_STOCK_THRESHOLD;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventoryItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub sku: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub ebay_listing_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

// Write payload for inventory rows. The owner and id never travel through
// this struct; they come from the session and the route respectively.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPayload {
    pub name: String,
    pub sku: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub ebay_listing_url: Option<String>,
}

impl ItemPayload {
    /// Optional fields submitted as empty strings become `None`, so a field
    /// the user cleared is stored identically to one never filled in.
    pub fn normalized(mut self) -> Self {
        self.sku = none_if_empty(self.sku);
        self.category = none_if_empty(self.category);
        self.description = none_if_empty(self.description);
        self.image_url = none_if_empty(self.image_url);
        self.ebay_listing_url = none_if_empty(self.ebay_listing_url);
        self
    }
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ItemPayload {
        ItemPayload {
            name: "Widget".to_string(),
            sku: Some("".to_string()),
            quantity: 3,
            price: "9.99".parse().unwrap(),
            category: Some("Tools".to_string()),
            description: None,
            image_url: Some("".to_string()),
            ebay_listing_url: Some("https://ebay.com/itm/1".to_string()),
        }
    }

    #[test]
    fn normalized_turns_empty_strings_into_none() {
        let normalized = payload().normalized();
        assert_eq!(normalized.sku, None);
        assert_eq!(normalized.image_url, None);
    }

    #[test]
    fn normalized_keeps_populated_fields() {
        let normalized = payload().normalized();
        assert_eq!(normalized.category.as_deref(), Some("Tools"));
        assert_eq!(
            normalized.ebay_listing_url.as_deref(),
            Some("https://ebay.com/itm/1")
        );
        assert_eq!(normalized.name, "Widget");
        assert_eq!(normalized.quantity, 3);
    }

    #[test]
    fn normalized_leaves_absent_fields_absent() {
        assert_eq!(payload().normalized().description, None);
    }
}
