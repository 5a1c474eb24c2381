use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;
use uuid::Uuid;

use crate::{database::Database, models::User, utils::verify_token};

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
}

/// Resolves the session from the auth cookie. Any failure along the way
/// (missing cookie, bad token, user row gone) reads as "no session".
pub async fn session_user(cookies: &Cookies, db: &Database) -> Option<CurrentUser> {
    let token = cookies.get(AUTH_COOKIE)?.value().to_string();
    let claims = verify_token(&token).ok()?;
    let user_id = Uuid::parse_str(&claims.sub).ok()?;

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await
        .ok()??;

    Some(CurrentUser {
        id: user.id,
        email: user.email,
    })
}

// Session gate for protected pages. Handlers declare a `CurrentUser`
// argument and the session is resolved once per request; unauthenticated
// visitors are bounced to the landing page before the handler body runs.
#[async_trait]
impl FromRequestParts<Database> for CurrentUser {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, db: &Database) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, db)
            .await
            .map_err(|_| Redirect::to("/"))?;

        session_user(&cookies, db).await.ok_or(Redirect::to("/"))
    }
}
