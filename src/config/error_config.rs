//! 에러 응답 설정
//!
//! 에러 응답에 개발 정보(원인 장애 종류, 개발자 메시지)를 포함할지 결정합니다.

use std::env;

use super::data_config::Environment;

/// 에러 응답 설정
pub struct ErrorConfig;

impl ErrorConfig {
    /// 개발 정보 포함 여부를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `ERROR_INCLUDE_DEV_INFO`: `true/false`, `1/0`, `yes/no`로 명시적 지정
    /// - 미지정 시 프로덕션을 제외한 모든 환경에서 `true`
    ///
    /// ```bash
    /// # 스테이징에서 개발 정보 숨기기
    /// export ENVIRONMENT="staging"
    /// export ERROR_INCLUDE_DEV_INFO="false"
    /// ```
    pub fn include_dev_info() -> bool {
        Self::include_dev_info_for(
            &Environment::current(),
            env::var("ERROR_INCLUDE_DEV_INFO").ok().as_deref(),
        )
    }

    /// 특정 환경과 재정의 값에 대한 개발 정보 포함 여부
    pub fn include_dev_info_for(environment: &Environment, override_value: Option<&str>) -> bool {
        match override_value.and_then(parse_flag) {
            Some(flag) => flag,
            None => !environment.is_production(),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        other => {
            log::warn!("ERROR_INCLUDE_DEV_INFO 값을 해석할 수 없습니다: {}", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_info_defaults_per_environment() {
        assert!(ErrorConfig::include_dev_info_for(&Environment::Development, None));
        assert!(ErrorConfig::include_dev_info_for(&Environment::Test, None));
        assert!(ErrorConfig::include_dev_info_for(&Environment::Staging, None));
        assert!(!ErrorConfig::include_dev_info_for(&Environment::Production, None));
    }

    #[test]
    fn test_dev_info_override() {
        assert!(ErrorConfig::include_dev_info_for(&Environment::Production, Some("true")));
        assert!(ErrorConfig::include_dev_info_for(&Environment::Production, Some(" YES ")));
        assert!(!ErrorConfig::include_dev_info_for(&Environment::Development, Some("0")));
    }

    #[test]
    fn test_unparseable_override_falls_back() {
        assert!(!ErrorConfig::include_dev_info_for(&Environment::Production, Some("maybe")));
        assert!(ErrorConfig::include_dev_info_for(&Environment::Development, Some("")));
    }
}
