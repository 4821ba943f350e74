use anyhow::{Context, Result};
use serde::Deserialize;

/// 설정 파일 기본 경로 (없어도 됨)
/// Default config file path (optional)
pub const DEFAULT_CONFIG_PATH: &str = "wallet";

/// 저장소 종류
/// Which ledger store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Postgres,
    Memory,
}

/// 애플리케이션 설정
/// Application settings
///
/// 우선순위: 기본값 < wallet.toml < 환경 변수
/// Precedence: defaults < wallet.toml < environment variables
///
/// 환경 변수 이름은 필드 이름의 대문자 형태 (예: DATABASE_HOST, APP_PORT)
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_host: String,
    pub database_port: u16,
    pub database_user: String,
    pub database_password: String,
    pub database_name: String,
    pub database_max_connections: u32,

    /// HTTP 리스닝 포트
    pub app_port: u16,

    /// tracing 레벨 (RUST_LOG가 있으면 그쪽이 우선)
    pub log_level: String,

    pub store: StoreKind,

    /// 허용할 CORS origin (없으면 모든 origin 허용)
    pub cors_origin: Option<String>,

    /// 일일 합계 스케줄러 실행 여부
    pub daily_total_enabled: bool,

    /// 설정 시 고정 주기(초)로 실행, 없으면 매일 00:00 UTC
    /// Fixed period in seconds; when absent the job runs daily at 00:00 UTC
    pub daily_total_interval_secs: Option<u64>,
}

impl Settings {
    /// 기본 설정 파일 + 환경 변수에서 로드
    /// Load from the default config file and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(config_path: &str) -> Result<Self> {
        let builder = ::config::Config::builder()
            .set_default("database_host", "localhost")?
            .set_default("database_port", 5432)?
            .set_default("database_user", "postgres")?
            .set_default("database_password", "")?
            .set_default("database_name", "wallet")?
            .set_default("database_max_connections", 10)?
            .set_default("app_port", 3000)?
            .set_default("log_level", "info")?
            .set_default("store", "postgres")?
            .set_default("daily_total_enabled", true)?
            .add_source(::config::File::with_name(config_path).required(false))
            .add_source(::config::Environment::default().try_parsing(true));

        builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// 리스닝 주소
    /// Listen address
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.app_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from("does-not-exist/wallet").unwrap();
        assert_eq!(settings.database_max_connections, 10);
        assert!(settings.daily_total_interval_secs.is_none());
    }

    #[test]
    fn listen_addr_binds_all_interfaces() {
        let mut settings = Settings::load_from("does-not-exist/wallet").unwrap();
        settings.app_port = 8080;
        assert_eq!(settings.listen_addr(), "0.0.0.0:8080");
    }
}
