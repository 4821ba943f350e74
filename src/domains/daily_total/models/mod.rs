// Daily total domain models
pub mod daily_total;

pub use daily_total::*;
