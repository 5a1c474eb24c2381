use rust_decimal::Decimal;

use crate::models::{InventoryItem, SaleDisplay};

/// Items with fewer units than this show a low-stock badge and count toward
/// the low-stock card on the dashboard.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    pub total_items: usize,
    pub total_value: Decimal,
    pub items_sold: i64,
    pub low_stock: usize,
}

/// Case-insensitive substring search over name, SKU and category. An empty
/// term returns the full list in its original order; optional fields that
/// are absent never match.
pub fn filter_items<'a>(items: &'a [InventoryItem], term: &str) -> Vec<&'a InventoryItem> {
    if term.is_empty() {
        return items.iter().collect();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || matches_opt(item.sku.as_deref(), &needle)
                || matches_opt(item.category.as_deref(), &needle)
        })
        .collect()
}

fn matches_opt(field: Option<&str>, needle: &str) -> bool {
    field.map_or(false, |value| value.to_lowercase().contains(needle))
}

/// Summary figures come from the full unfiltered list; the search term only
/// narrows the table, not the cards above it.
pub fn summarize(items: &[InventoryItem], items_sold: i64) -> InventorySummary {
    InventorySummary {
        total_items: items.len(),
        total_value: items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum(),
        items_sold,
        low_stock: items
            .iter()
            .filter(|item| item.quantity < LOW_STOCK_THRESHOLD)
            .count(),
    }
}

pub fn sales_revenue(sales: &[SaleDisplay]) -> Decimal {
    sales.iter().map(SaleDisplay::line_total).sum()
}

pub fn total_units(sales: &[SaleDisplay]) -> i64 {
    sales.iter().map(|sale| i64::from(sale.quantity_sold)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn item(name: &str, sku: Option<&str>, category: Option<&str>, quantity: i32, price: &str) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: name.to_string(),
            sku: sku.map(str::to_string),
            quantity,
            price: price.parse().unwrap(),
            category: category.map(str::to_string),
            description: None,
            image_url: None,
            ebay_listing_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sale(price: &str, quantity: i32) -> SaleDisplay {
        SaleDisplay {
            id: Uuid::new_v4(),
            sold_at: Utc::now(),
            sale_price: price.parse().unwrap(),
            quantity_sold: quantity,
            platform: "ebay".to_string(),
            transaction_id: None,
            item_name: None,
        }
    }

    #[test]
    fn filter_matches_name_sku_and_category_case_insensitively() {
        let items = vec![
            item("Camera Lens", Some("CL-01"), Some("Photo"), 2, "49.99"),
            item("Tripod", Some("TR-77"), Some("Photo"), 8, "19.99"),
            item("USB Cable", None, Some("Electronics"), 30, "3.50"),
        ];

        let by_name = filter_items(&items, "camera");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Camera Lens");

        let by_sku = filter_items(&items, "tr-77");
        assert_eq!(by_sku.len(), 1);
        assert_eq!(by_sku[0].name, "Tripod");

        let by_category = filter_items(&items, "PHOTO");
        assert_eq!(by_category.len(), 2);
    }

    #[test]
    fn empty_term_returns_everything_in_original_order() {
        let items = vec![
            item("B", None, None, 1, "1.00"),
            item("A", None, None, 1, "1.00"),
        ];
        let filtered = filter_items(&items, "");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "B");
        assert_eq!(filtered[1].name, "A");
    }

    #[test]
    fn absent_optional_fields_never_match() {
        let items = vec![item("Cable", None, None, 1, "1.00")];
        // Would match "" as a substring if None were treated as empty string.
        assert_eq!(filter_items(&items, "none").len(), 0);
        assert_eq!(filter_items(&items, "cab").len(), 1);
    }

    #[test]
    fn total_value_sums_price_times_quantity() {
        let items = vec![
            item("A", None, None, 3, "9.99"),
            item("B", None, None, 10, "1.25"),
        ];
        let summary = summarize(&items, 0);
        assert_eq!(summary.total_value, "42.47".parse().unwrap());
        assert_eq!(summary.total_items, 2);
    }

    #[test]
    fn empty_inventory_summarizes_to_zero() {
        let summary = summarize(&[], 0);
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.low_stock, 0);
    }

    #[test]
    fn low_stock_boundary_sits_below_five() {
        let items = vec![
            item("Four", None, None, 4, "1.00"),
            item("Five", None, None, 5, "1.00"),
            item("Zero", None, None, 0, "1.00"),
        ];
        assert_eq!(summarize(&items, 0).low_stock, 2);
        assert!(items[0].is_low_stock());
        assert!(!items[1].is_low_stock());
    }

    #[test]
    fn widget_scenario() {
        let items = vec![item("Widget", Some("W1"), None, 3, "9.99")];
        let summary = summarize(&items, 0);
        assert_eq!(summary.total_value, "29.97".parse().unwrap());
        assert_eq!(summary.low_stock, 1);
        assert!(items[0].is_low_stock());
        assert_eq!(filter_items(&items, "w1").len(), 1);
    }

    #[test]
    fn sales_totals() {
        let sales = vec![sale("12.50", 2), sale("5.00", 3)];
        assert_eq!(sales_revenue(&sales), "40.00".parse().unwrap());
        assert_eq!(total_units(&sales), 5);
        assert_eq!(sales_revenue(&[]), Decimal::ZERO);
        assert_eq!(total_units(&[]), 0);
    }
}
