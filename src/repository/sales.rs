use uuid::Uuid;

use crate::{database::Database, models::SaleDisplay};

/// The owner's sale history, newest first, with each row's item name
/// resolved. LEFT JOIN keeps sales whose item has been deleted.
pub async fn list_sales(db: &Database, user_id: Uuid) -> Result<Vec<SaleDisplay>, sqlx::Error> {
    sqlx::query_as::<_, SaleDisplay>(
        r#"
        SELECT s.id, s.sold_at, s.sale_price, s.quantity_sold, s.platform,
               s.transaction_id, i.name AS item_name
        FROM sales_log s
        LEFT JOIN inventory i ON s.inventory_id = i.id
        WHERE s.user_id = $1
        ORDER BY s.sold_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

/// Total units the owner has sold, for the dashboard's items-sold card.
pub async fn units_sold(db: &Database, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(quantity_sold), 0) FROM sales_log WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(db)
    .await
}
