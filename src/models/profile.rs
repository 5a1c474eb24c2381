use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct EbayAccount {
    pub id: Uuid,
    pub user_id: Uuid,
    pub account_name: String,
    // Placeholder until OAuth linking exists; never populated by this app.
    pub ebay_user_id: Option<String>,
    pub is_active: bool,
    pub connected_at: DateTime<Utc>,
}

/// An account label has to contain something other than whitespace. Checked
/// before any request is dispatched to the store.
pub fn account_name_is_valid(name: &str) -> bool {
    !name.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_account_names_are_rejected() {
        assert!(!account_name_is_valid(""));
        assert!(!account_name_is_valid("   "));
        assert!(!account_name_is_valid("\t\n"));
    }

    #[test]
    fn populated_account_names_pass() {
        assert!(account_name_is_valid("My Store"));
        assert!(account_name_is_valid(" padded "));
    }
}
