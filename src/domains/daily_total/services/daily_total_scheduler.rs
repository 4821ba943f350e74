use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use crate::domains::daily_total::services::DailyTotalService;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// 실행 주기
/// How often the aggregation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyTotalSchedule {
    /// 매일 00:00 UTC
    DailyAtMidnightUtc,
    /// 고정 주기
    Every(Duration),
}

impl DailyTotalSchedule {
    /// interval_secs가 있으면 고정 주기, 없으면 자정
    pub fn from_interval_secs(interval_secs: Option<u64>) -> Self {
        match interval_secs {
            Some(secs) if secs > 0 => DailyTotalSchedule::Every(Duration::from_secs(secs)),
            _ => DailyTotalSchedule::DailyAtMidnightUtc,
        }
    }

    /// (첫 실행까지 대기 시간, 주기)
    /// Delay before the first tick and the period after it
    pub fn plan(&self, now: DateTime<Utc>) -> (Duration, Duration) {
        match self {
            DailyTotalSchedule::DailyAtMidnightUtc => {
                (until_next_midnight(now), Duration::from_secs(SECONDS_PER_DAY))
            }
            DailyTotalSchedule::Every(period) => (*period, *period),
        }
    }
}

fn until_next_midnight(now: DateTime<Utc>) -> Duration {
    let next_midnight = (now.date_naive() + ChronoDuration::days(1))
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc());

    match next_midnight {
        Some(at) => (at - now).to_std().unwrap_or(Duration::ZERO),
        None => Duration::from_secs(SECONDS_PER_DAY),
    }
}

/// 일일 합계 스케줄러
/// Daily Total Scheduler
///
/// 역할:
/// - 요청 처리와 독립된 백그라운드 태스크에서 DailyTotalService 실행
/// - 실패는 로그만 남기고 다음 주기에 계속 (프로세스 종료 없음)
/// - enable/disable로 실행 여부 제어
#[derive(Clone)]
pub struct DailyTotalScheduler {
    service: DailyTotalService,
    schedule: DailyTotalSchedule,
    enabled: Arc<AtomicBool>,
}

impl DailyTotalScheduler {
    pub fn new(service: DailyTotalService, schedule: DailyTotalSchedule) -> Self {
        Self {
            service,
            schedule,
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// 스케줄러 시작
    /// Start scheduler on its own task
    pub fn start(&self) -> JoinHandle<()> {
        let service = self.service.clone();
        let enabled = self.enabled.clone();
        let (delay, period) = self.schedule.plan(Utc::now());

        tracing::info!(
            schedule = ?self.schedule,
            first_run_in_secs = delay.as_secs(),
            "daily total scheduler started"
        );

        tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + delay, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;

                if !enabled.load(Ordering::Relaxed) {
                    continue;
                }

                if let Err(e) = service.calculate_daily_totals().await {
                    tracing::error!(error = %e, "daily total calculation failed");
                }
            }
        })
    }

    /// 스케줄러 활성화
    /// Enable scheduler
    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    /// 스케줄러 비활성화
    /// Disable scheduler
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn midnight_plan_waits_until_next_utc_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 23, 30, 0).unwrap();
        let (delay, period) = DailyTotalSchedule::DailyAtMidnightUtc.plan(now);
        assert_eq!(delay, Duration::from_secs(30 * 60));
        assert_eq!(period, Duration::from_secs(SECONDS_PER_DAY));
    }

    #[test]
    fn interval_plan_uses_fixed_period() {
        let schedule = DailyTotalSchedule::from_interval_secs(Some(5));
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(schedule.plan(now), (Duration::from_secs(5), Duration::from_secs(5)));
    }

    #[test]
    fn zero_interval_falls_back_to_midnight() {
        assert_eq!(
            DailyTotalSchedule::from_interval_secs(Some(0)),
            DailyTotalSchedule::DailyAtMidnightUtc
        );
        assert_eq!(
            DailyTotalSchedule::from_interval_secs(None),
            DailyTotalSchedule::DailyAtMidnightUtc
        );
    }
}
