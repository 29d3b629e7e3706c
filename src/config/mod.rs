//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 요청 제한 설정
//! - [`error_config`] - 에러 응답의 개발 정보 노출 정책
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 환경 설정 (development, test, staging, production)
//! export ENVIRONMENT="production"
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 요청 제한
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # 에러 응답 개발 정보 (미지정 시 프로덕션에서만 숨김)
//! export ERROR_INCLUDE_DEV_INFO="false"
//! ```

pub mod data_config;
pub mod error_config;

pub use data_config::*;
pub use error_config::*;
