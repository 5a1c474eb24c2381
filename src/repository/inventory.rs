use uuid::Uuid;

use crate::{
    database::Database,
    models::{InventoryItem, ItemPayload},
};

/// All of the owner's items, newest first. An empty vec is a normal result.
pub async fn list_items(db: &Database, user_id: Uuid) -> Result<Vec<InventoryItem>, sqlx::Error> {
    sqlx::query_as::<_, InventoryItem>(
        "SELECT * FROM inventory WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

/// Single row for prefilling the edit form, scoped to the owner.
pub async fn get_item(
    db: &Database,
    user_id: Uuid,
    item_id: Uuid,
) -> Result<Option<InventoryItem>, sqlx::Error> {
    sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory WHERE id = $1 AND user_id = $2")
        .bind(item_id)
        .bind(user_id)
        .fetch_optional(db)
        .await
}

pub async fn create_item(
    db: &Database,
    user_id: Uuid,
    payload: &ItemPayload,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO inventory (
            user_id, name, sku, quantity, price, category, description,
            image_url, ebay_listing_url
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(user_id)
    .bind(&payload.name)
    .bind(&payload.sku)
    .bind(payload.quantity)
    .bind(payload.price)
    .bind(&payload.category)
    .bind(&payload.description)
    .bind(&payload.image_url)
    .bind(&payload.ebay_listing_url)
    .execute(db)
    .await?;

    Ok(())
}

/// Overwrites every mutable field on the row. The id and owner never change;
/// a row that does not exist (or belongs to someone else) is a write failure.
pub async fn update_item(
    db: &Database,
    user_id: Uuid,
    item_id: Uuid,
    payload: &ItemPayload,
) -> Result<(), sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE inventory
        SET name = $1, sku = $2, quantity = $3, price = $4, category = $5,
            description = $6, image_url = $7, ebay_listing_url = $8,
            updated_at = NOW()
        WHERE id = $9 AND user_id = $10
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.sku)
    .bind(payload.quantity)
    .bind(payload.price)
    .bind(&payload.category)
    .bind(&payload.description)
    .bind(&payload.image_url)
    .bind(&payload.ebay_listing_url)
    .bind(item_id)
    .bind(user_id)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }

    Ok(())
}

pub async fn delete_item(db: &Database, user_id: Uuid, item_id: Uuid) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM inventory WHERE id = $1 AND user_id = $2")
        .bind(item_id)
        .bind(user_id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }

    Ok(())
}
