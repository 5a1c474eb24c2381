pub mod api;
pub mod auth;
pub mod inventory;
pub mod sales;
pub mod settings;

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
};
use tower_cookies::Cookies;

use crate::{database::Database, middleware::session_user};

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate;

pub async fn landing(State(db): State<Database>, cookies: Cookies) -> impl IntoResponse {
    // Already signed in? Straight to the dashboard.
    if session_user(&cookies, &db).await.is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    let template = LandingTemplate;
    Html(template.render().unwrap()).into_response()
}

/// Carries a one-shot banner message back to a page via the query string.
pub(crate) fn redirect_with(path: &str, kind: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{}?{}={}", path, kind, urlencoding::encode(message)))
}
