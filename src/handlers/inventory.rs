use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;

use crate::{
    analytics::{self, InventorySummary},
    database::Database,
    filters,
    handlers::redirect_with,
    middleware::CurrentUser,
    models::{InventoryItem, ItemPayload},
    repository,
};

#[derive(Template)]
#[template(path = "inventory/items.html")]
struct ItemsTemplate<'a> {
    items: Vec<&'a InventoryItem>,
    summary: InventorySummary,
    search: &'a str,
    notice: String,
    error: String,
    current_user: &'a CurrentUser,
}

#[derive(Template)]
#[template(path = "inventory/item_form.html")]
struct ItemFormTemplate<'a> {
    item: Option<&'a InventoryItem>,
    current_user: &'a CurrentUser,
}

impl ItemFormTemplate<'_> {
    fn action(&self) -> String {
        match self.item {
            Some(item) => format!("/inventory/{}", item.id),
            None => "/inventory".to_string(),
        }
    }

    fn name(&self) -> &str {
        self.item.map(|i| i.name.as_str()).unwrap_or("")
    }

    fn sku(&self) -> &str {
        self.item.and_then(|i| i.sku.as_deref()).unwrap_or("")
    }

    fn quantity(&self) -> i32 {
        self.item.map(|i| i.quantity).unwrap_or(0)
    }

    fn price(&self) -> String {
        self.item
            .map(|i| i.price.to_string())
            .unwrap_or_else(|| "0".to_string())
    }

    fn category(&self) -> &str {
        self.item.and_then(|i| i.category.as_deref()).unwrap_or("")
    }

    fn description(&self) -> &str {
        self.item
            .and_then(|i| i.description.as_deref())
            .unwrap_or("")
    }

    fn image_url(&self) -> &str {
        self.item.and_then(|i| i.image_url.as_deref()).unwrap_or("")
    }

    fn ebay_listing_url(&self) -> &str {
        self.item
            .and_then(|i| i.ebay_listing_url.as_deref())
            .unwrap_or("")
    }
}

#[derive(Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    q: String,
    notice: Option<String>,
    error: Option<String>,
}

// Number inputs arrive as strings so an empty value deserializes cleanly.
#[derive(Deserialize)]
pub struct ItemForm {
    name: String,
    sku: Option<String>,
    quantity: Option<String>,
    price: Option<String>,
    category: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    ebay_listing_url: Option<String>,
}

impl ItemForm {
    /// The input widgets enforce presence and minimums; anything that still
    /// fails to parse falls back to zero rather than rejecting the submit.
    fn into_payload(self) -> ItemPayload {
        let quantity = self
            .quantity
            .as_deref()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(0);
        let price = self
            .price
            .as_deref()
            .and_then(|v| Decimal::from_str(v).ok())
            .unwrap_or(Decimal::ZERO);

        ItemPayload {
            name: self.name,
            sku: self.sku,
            quantity,
            price,
            category: self.category,
            description: self.description,
            image_url: self.image_url,
            ebay_listing_url: self.ebay_listing_url,
        }
        .normalized()
    }
}

// The inventory dashboard: analytics cards over the full list, table over
// the searched subset.
pub async fn dashboard(
    State(db): State<Database>,
    current_user: CurrentUser,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, StatusCode> {
    let items = match repository::inventory::list_items(&db, current_user.id).await {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Failed to fetch inventory: {}", e);
            Vec::new()
        }
    };

    let items_sold = repository::sales::units_sold(&db, current_user.id)
        .await
        .unwrap_or(0);

    let summary = analytics::summarize(&items, items_sold);
    let filtered = analytics::filter_items(&items, &query.q);

    let template = ItemsTemplate {
        items: filtered,
        summary,
        search: &query.q,
        notice: query.notice.clone().unwrap_or_default(),
        error: query.error.clone().unwrap_or_default(),
        current_user: &current_user,
    };
    Ok(Html(template.render().unwrap()))
}

pub async fn item_form(current_user: CurrentUser) -> Result<Html<String>, StatusCode> {
    let template = ItemFormTemplate {
        item: None,
        current_user: &current_user,
    };
    Ok(Html(template.render().unwrap()))
}

pub async fn item_edit_form(
    State(db): State<Database>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> Result<Html<String>, StatusCode> {
    let item = repository::inventory::get_item(&db, current_user.id, item_id)
        .await
        .map_err(|e| {
            eprintln!("Failed to fetch item {}: {}", item_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    let template = ItemFormTemplate {
        item: Some(&item),
        current_user: &current_user,
    };
    Ok(Html(template.render().unwrap()))
}

pub async fn create_item(
    State(db): State<Database>,
    current_user: CurrentUser,
    Form(form): Form<ItemForm>,
) -> Redirect {
    let payload = form.into_payload();

    match repository::inventory::create_item(&db, current_user.id, &payload).await {
        Ok(()) => redirect_with("/dashboard", "notice", "Item added"),
        Err(e) => {
            eprintln!("Failed to create item: {}", e);
            redirect_with("/dashboard", "error", &format!("Add failed: {}", e))
        }
    }
}

pub async fn update_item(
    State(db): State<Database>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
    Form(form): Form<ItemForm>,
) -> Redirect {
    let payload = form.into_payload();

    match repository::inventory::update_item(&db, current_user.id, item_id, &payload).await {
        Ok(()) => redirect_with("/dashboard", "notice", "Item updated"),
        Err(e) => {
            eprintln!("Failed to update item {}: {}", item_id, e);
            redirect_with("/dashboard", "error", &format!("Update failed: {}", e))
        }
    }
}

pub async fn delete_item(
    State(db): State<Database>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> Redirect {
    match repository::inventory::delete_item(&db, current_user.id, item_id).await {
        Ok(()) => redirect_with("/dashboard", "notice", "Item deleted"),
        Err(e) => {
            eprintln!("Failed to delete item {}: {}", item_id, e);
            redirect_with("/dashboard", "error", &format!("Delete failed: {}", e))
        }
    }
}
