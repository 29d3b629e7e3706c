//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 요청 제한 설정을 환경 변수에서 읽어옵니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());
        Self::from_name(&name)
    }

    /// 환경 이름(대소문자 무관)에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    const DEFAULT_PER_SECOND: u64 = 100;
    const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱할 수 없는 값은 에러 로그를 남기고 기본값을 사용합니다.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        )
    }

    fn from_values(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let per_second = per_second
            .map(|raw| {
                raw.parse::<u64>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 {} 사용", e, Self::DEFAULT_PER_SECOND);
                    Self::DEFAULT_PER_SECOND
                })
            })
            .unwrap_or(Self::DEFAULT_PER_SECOND);

        let burst_size = burst_size
            .map(|raw| {
                raw.parse::<u32>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 {} 사용", e, Self::DEFAULT_BURST_SIZE);
                    Self::DEFAULT_BURST_SIZE
                })
            })
            .unwrap_or(Self::DEFAULT_BURST_SIZE);

        Self {
            per_second,
            burst_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("stage"), Environment::Staging);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_is_production() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Staging.is_production());
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_rate_limit_values() {
        assert_eq!(
            RateLimitConfig::from_values(None, None),
            RateLimitConfig { per_second: 100, burst_size: 200 }
        );
        assert_eq!(
            RateLimitConfig::from_values(Some("20"), Some("40")),
            RateLimitConfig { per_second: 20, burst_size: 40 }
        );
        assert_eq!(
            RateLimitConfig::from_values(Some("fast"), Some("-1")),
            RateLimitConfig { per_second: 100, burst_size: 200 }
        );
    }
}
