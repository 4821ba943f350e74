// Database module
pub mod connection;
pub mod store;
pub mod postgres_store;
pub mod memory_store;
pub mod repositories;

pub use connection::*;
pub use store::*;
pub use postgres_store::*;
pub use memory_store::*;
pub use repositories::*;
