use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use rust_decimal::Decimal;

use crate::{
    analytics, database::Database, filters, middleware::CurrentUser, models::SaleDisplay,
    repository,
};

#[derive(Template)]
#[template(path = "sales/sales.html")]
struct SalesTemplate<'a> {
    sales: Vec<SaleDisplay>,
    total_revenue: Decimal,
    total_units: i64,
    current_user: &'a CurrentUser,
}

pub async fn sales_log(
    State(db): State<Database>,
    current_user: CurrentUser,
) -> Result<Html<String>, StatusCode> {
    let sales = match repository::sales::list_sales(&db, current_user.id).await {
        Ok(sales) => sales,
        Err(e) => {
            eprintln!("Failed to fetch sales: {}", e);
            Vec::new()
        }
    };

    let template = SalesTemplate {
        total_revenue: analytics::sales_revenue(&sales),
        total_units: analytics::total_units(&sales),
        sales,
        current_user: &current_user,
    };
    Ok(Html(template.render().unwrap()))
}
