// Shared module
pub mod settings;
pub mod database;
pub mod errors;
pub mod services;
pub mod utils;

pub use settings::*;
pub use database::*;
pub use errors::*;
pub use services::*;
pub use utils::*;
