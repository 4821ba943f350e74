// Shared utilities
pub mod clock;
pub mod pagination;

pub use clock::*;
pub use pagination::*;
