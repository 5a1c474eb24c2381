use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    database::Database,
    filters,
    handlers::redirect_with,
    middleware::CurrentUser,
    models::{account_name_is_valid, EbayAccount, Profile},
    repository,
};

#[derive(Template)]
#[template(path = "settings/settings.html")]
struct SettingsTemplate<'a> {
    profile: Option<Profile>,
    accounts: Vec<EbayAccount>,
    notice: String,
    error: String,
    current_user: &'a CurrentUser,
}

impl SettingsTemplate<'_> {
    fn full_name(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|p| p.full_name.as_deref())
            .unwrap_or("")
    }

    fn avatar_url(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|p| p.avatar_url.as_deref())
            .unwrap_or("")
    }
}

#[derive(Deserialize)]
pub struct SettingsQuery {
    notice: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
pub struct ProfileForm {
    full_name: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Deserialize)]
pub struct EbayAccountForm {
    account_name: String,
}

pub async fn settings_page(
    State(db): State<Database>,
    current_user: CurrentUser,
    Query(query): Query<SettingsQuery>,
) -> Result<Html<String>, StatusCode> {
    let profile = match repository::profile::get_profile(&db, current_user.id).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            eprintln!("Failed to fetch profile: {}", e);
            None
        }
    };

    let accounts = match repository::profile::list_ebay_accounts(&db, current_user.id).await {
        Ok(accounts) => accounts,
        Err(e) => {
            eprintln!("Failed to fetch eBay accounts: {}", e);
            Vec::new()
        }
    };

    let template = SettingsTemplate {
        profile,
        accounts,
        notice: query.notice.unwrap_or_default(),
        error: query.error.unwrap_or_default(),
        current_user: &current_user,
    };
    Ok(Html(template.render().unwrap()))
}

pub async fn update_profile(
    State(db): State<Database>,
    current_user: CurrentUser,
    Form(form): Form<ProfileForm>,
) -> Redirect {
    let full_name = form.full_name.as_deref().filter(|s| !s.is_empty());
    let avatar_url = form.avatar_url.as_deref().filter(|s| !s.is_empty());

    match repository::profile::update_profile(&db, current_user.id, full_name, avatar_url).await {
        Ok(()) => redirect_with("/settings", "notice", "Profile updated"),
        Err(e) => {
            eprintln!("Failed to update profile: {}", e);
            redirect_with(
                "/settings",
                "error",
                &format!("Failed to update profile: {}", e),
            )
        }
    }
}

pub async fn add_ebay_account(
    State(db): State<Database>,
    current_user: CurrentUser,
    Form(form): Form<EbayAccountForm>,
) -> Redirect {
    // Rejected before any request reaches the store.
    if !account_name_is_valid(&form.account_name) {
        return redirect_with("/settings", "error", "Please enter an account name");
    }

    match repository::profile::add_ebay_account(&db, current_user.id, &form.account_name).await {
        Ok(()) => redirect_with("/settings", "notice", "eBay account added"),
        Err(e) => {
            eprintln!("Failed to add eBay account: {}", e);
            redirect_with(
                "/settings",
                "error",
                &format!("Failed to add eBay account: {}", e),
            )
        }
    }
}

pub async fn delete_ebay_account(
    State(db): State<Database>,
    _current_user: CurrentUser,
    Path(account_id): Path<Uuid>,
) -> Redirect {
    match repository::profile::delete_ebay_account(&db, account_id).await {
        Ok(()) => redirect_with("/settings", "notice", "eBay account removed"),
        Err(e) => {
            eprintln!("Failed to delete eBay account {}: {}", account_id, e);
            redirect_with(
                "/settings",
                "error",
                &format!("Failed to remove eBay account: {}", e),
            )
        }
    }
}
