// Domain modules
pub mod wallet;
pub mod daily_total;
