// All repositories module
pub mod user_repository;
pub mod transaction_repository;
pub mod daily_total_repository;

// Re-export all repositories for convenience
pub use user_repository::*;
pub use transaction_repository::*;
pub use daily_total_repository::*;
