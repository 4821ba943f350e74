// Daily total services
pub mod daily_total_service;
pub mod daily_total_scheduler;

pub use daily_total_service::*;
pub use daily_total_scheduler::*;
