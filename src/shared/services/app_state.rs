use std::sync::Arc;
use crate::domains::wallet::services::WalletState;
use crate::domains::daily_total::services::{
    DailyTotalSchedule, DailyTotalScheduler, DailyTotalService,
};
use crate::shared::database::LedgerStore;
use crate::shared::utils::{Clock, SystemClock};

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 저장소는 trait 객체로 주입 (PostgreSQL 또는 메모리)
#[derive(Clone)]
pub struct AppState {
    pub wallet_state: WalletState,
    pub daily_total_service: DailyTotalService,
    /// 일일 합계 스케줄러 (start()는 main에서 호출)
    /// Daily total scheduler (started by main)
    pub daily_total_scheduler: DailyTotalScheduler,
}

impl AppState {
    /// Create AppState with the system clock
    pub fn new(store: Arc<dyn LedgerStore>, schedule: DailyTotalSchedule) -> Self {
        Self::with_clock(store, Arc::new(SystemClock), schedule)
    }

    /// 모든 도메인 State를 초기화하고 조합
    pub fn with_clock(
        store: Arc<dyn LedgerStore>,
        clock: Arc<dyn Clock>,
        schedule: DailyTotalSchedule,
    ) -> Self {
        let wallet_state = WalletState::new(store.clone());
        let daily_total_service = DailyTotalService::new(store, clock);
        let daily_total_scheduler =
            DailyTotalScheduler::new(daily_total_service.clone(), schedule);

        Self {
            wallet_state,
            daily_total_service,
            daily_total_scheduler,
        }
    }
}
