// Wallet domain handlers
pub mod user_handler;
pub mod transaction_handler;
