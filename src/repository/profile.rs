use uuid::Uuid;

use crate::{
    database::Database,
    models::{EbayAccount, Profile},
};

/// The caller's profile row. A missing row is an error, not a default;
/// registration creates the profile, so its absence means something is off.
pub async fn get_profile(db: &Database, user_id: Uuid) -> Result<Profile, sqlx::Error> {
    sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
        .bind(user_id)
        .fetch_one(db)
        .await
}

/// Overwrites exactly full_name and avatar_url; email stays whatever the
/// identity provider set. Empty strings are stored as NULL.
pub async fn update_profile(
    db: &Database,
    user_id: Uuid,
    full_name: Option<&str>,
    avatar_url: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE profiles SET full_name = $1, avatar_url = $2, updated_at = NOW() WHERE id = $3",
    )
    .bind(full_name)
    .bind(avatar_url)
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(())
}

pub async fn list_ebay_accounts(
    db: &Database,
    user_id: Uuid,
) -> Result<Vec<EbayAccount>, sqlx::Error> {
    sqlx::query_as::<_, EbayAccount>(
        "SELECT * FROM ebay_accounts WHERE user_id = $1 ORDER BY connected_at DESC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

/// Inserts the label as given; is_active defaults in the store and
/// ebay_user_id stays unset until OAuth linking exists. Name validation
/// happens before this is ever called.
pub async fn add_ebay_account(
    db: &Database,
    user_id: Uuid,
    account_name: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO ebay_accounts (user_id, account_name) VALUES ($1, $2)")
        .bind(user_id)
        .bind(account_name)
        .execute(db)
        .await?;

    Ok(())
}

/// Removes the row by id alone; ownership is whatever the store enforces.
pub async fn delete_ebay_account(db: &Database, account_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM ebay_accounts WHERE id = $1")
        .bind(account_id)
        .execute(db)
        .await?;

    Ok(())
}
