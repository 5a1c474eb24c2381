pub mod inventory;
pub mod profile;
pub mod sales;
pub mod user;

// Re-export only the types we actually use
pub use inventory::{InventoryItem, ItemPayload};
pub use profile::{account_name_is_valid, EbayAccount, Profile};
pub use sales::SaleDisplay;
pub use user::{CreateUser, User};
