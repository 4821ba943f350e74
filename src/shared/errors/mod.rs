// Shared errors
pub mod store_error;
pub mod wallet_error;

pub use store_error::*;
pub use wallet_error::*;
