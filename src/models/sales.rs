use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Sale row joined with the name of the inventory item it references.
/// Sales are read-only here; rows are written by the marketplace import,
/// not by anything in this app. `item_name` is `None` when the item has
/// since been deleted.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct SaleDisplay {
    pub id: Uuid,
    pub sold_at: DateTime<Utc>,
    pub sale_price: Decimal,
    pub quantity_sold: i32,
    pub platform: String,
    pub transaction_id: Option<String>,
    pub item_name: Option<String>,
}

impl SaleDisplay {
    pub fn item_label(&self) -> &str {
        self.item_name.as_deref().unwrap_or("Unknown Item")
    }

    pub fn line_total(&self) -> Decimal {
        self.sale_price * Decimal::from(self.quantity_sold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(item_name: Option<&str>) -> SaleDisplay {
        SaleDisplay {
            id: Uuid::new_v4(),
            sold_at: Utc::now(),
            sale_price: "12.50".parse().unwrap(),
            quantity_sold: 2,
            platform: "ebay".to_string(),
            transaction_id: None,
            item_name: item_name.map(str::to_string),
        }
    }

    #[test]
    fn item_label_falls_back_when_reference_is_gone() {
        assert_eq!(sale(Some("Widget")).item_label(), "Widget");
        assert_eq!(sale(None).item_label(), "Unknown Item");
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        assert_eq!(sale(None).line_total(), "25.00".parse().unwrap());
    }
}
