// Daily total handlers
pub mod daily_total_handler;
