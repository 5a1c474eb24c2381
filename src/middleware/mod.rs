pub mod session;

pub use session::{session_user, CurrentUser, AUTH_COOKIE};
