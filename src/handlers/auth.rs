use askama::Template;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use chrono::{Duration, Utc};
use serde::Deserialize;
use tower_cookies::{Cookie, Cookies};
use uuid::Uuid;

use crate::{
    database::Database,
    middleware::AUTH_COOKIE,
    models::{CreateUser, User},
    utils::{create_token, hash_password, verify_password},
};

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: String,
}

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate {
    error: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    email: String,
    password: String,
    full_name: Option<String>,
}

pub async fn login_page() -> Html<String> {
    let template = LoginTemplate {
        error: String::new(),
    };
    Html(template.render().unwrap())
}

pub async fn register_page() -> Html<String> {
    let template = RegisterTemplate {
        error: String::new(),
    };
    Html(template.render().unwrap())
}

pub async fn login(
    State(db): State<Database>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, (StatusCode, Html<String>)> {
    match authenticate_user(&db, &form.email, &form.password).await {
        Ok(user) => {
            let token = create_token(user.id, user.email.clone()).map_err(|_| {
                let template = LoginTemplate {
                    error: "Authentication failed".to_string(),
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(template.render().unwrap()),
                )
            })?;

            // Session record for tracking; the cookie is the actual gate.
            let session_id = Uuid::new_v4();
            let expires_at = Utc::now() + Duration::hours(24);

            let _ = sqlx::query("INSERT INTO sessions (id, user_id, expires_at) VALUES ($1, $2, $3)")
                .bind(session_id)
                .bind(user.id)
                .bind(expires_at)
                .execute(&db)
                .await;

            let cookie = Cookie::build((AUTH_COOKIE, token))
                .path("/")
                .http_only(true)
                .max_age(time::Duration::hours(24))
                .build();

            cookies.add(cookie);

            Ok(Redirect::to("/dashboard"))
        }
        Err(_) => {
            let template = LoginTemplate {
                error: "Invalid email or password".to_string(),
            };
            Err((StatusCode::UNAUTHORIZED, Html(template.render().unwrap())))
        }
    }
}

pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    let mut cookie = Cookie::from(AUTH_COOKIE);
    cookie.set_path("/");
    cookies.remove(cookie);
    Redirect::to("/")
}

pub async fn register(
    State(db): State<Database>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, (StatusCode, Html<String>)> {
    let password_hash = hash_password(&form.password).map_err(|_| {
        let template = RegisterTemplate {
            error: "Failed to process password".to_string(),
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(template.render().unwrap()),
        )
    })?;

    let create_user = CreateUser {
        email: form.email,
        password: form.password,
        full_name: form.full_name.filter(|name| !name.is_empty()),
    };

    match create_user_in_db(&db, &create_user, &password_hash).await {
        Ok(_) => Ok(Redirect::to("/login")),
        Err(_) => {
            let template = RegisterTemplate {
                error: "Email already exists or registration failed".to_string(),
            };
            Err((StatusCode::BAD_REQUEST, Html(template.render().unwrap())))
        }
    }
}

async fn authenticate_user(
    db: &Database,
    email: &str,
    password: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(db)
        .await?;

    if verify_password(password, &user.password_hash).unwrap_or(false) {
        Ok(user)
    } else {
        Err(sqlx::Error::RowNotFound)
    }
}

// Registration also seeds the user's profile row; everything after signup
// only ever reads or updates it.
async fn create_user_in_db(
    db: &Database,
    user_data: &CreateUser,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(&user_data.email)
    .bind(password_hash)
    .fetch_one(db)
    .await?;

    sqlx::query("INSERT INTO profiles (id, email, full_name) VALUES ($1, $2, $3)")
        .bind(user.id)
        .bind(&user.email)
        .bind(&user_data.full_name)
        .execute(db)
        .await?;

    Ok(user)
}
