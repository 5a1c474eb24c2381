use axum::{extract::State, http::StatusCode, response::Json};
use rust_decimal::Decimal;
use serde::Serialize;
use tower_cookies::Cookies;
use uuid::Uuid;

use crate::{database::Database, middleware::session_user, models::InventoryItem, repository};

#[derive(Serialize)]
pub struct ItemResponse {
    pub id: Uuid,
    pub name: String,
    pub sku: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub ebay_listing_url: Option<String>,
    pub low_stock: bool,
}

impl From<InventoryItem> for ItemResponse {
    fn from(item: InventoryItem) -> Self {
        let low_stock = item.is_low_stock();
        Self {
            id: item.id,
            name: item.name,
            sku: item.sku,
            quantity: item.quantity,
            price: item.price,
            category: item.category,
            image_url: item.image_url,
            ebay_listing_url: item.ebay_listing_url,
            low_stock,
        }
    }
}

pub async fn list_inventory(
    State(db): State<Database>,
    cookies: Cookies,
) -> Result<Json<Vec<ItemResponse>>, StatusCode> {
    let user = session_user(&cookies, &db)
        .await
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let items = repository::inventory::list_items(&db, user.id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .into_iter()
        .map(ItemResponse::from)
        .collect();

    Ok(Json(items))
}
