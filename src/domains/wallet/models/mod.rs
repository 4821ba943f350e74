// Wallet domain models
pub mod user;
pub mod transaction;

pub use user::*;
pub use transaction::*;
