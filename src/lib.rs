//! 이력서 관리 서비스 백엔드
//!
//! 경력 프로필(이력서) 관리 서비스의 공통 기반입니다.
//! 요청 처리 중 발생한 실패를 구조화된 `AppError`로 표현하고,
//! 클라이언트에는 내부 정보를 숨긴 `AppErrorDto`로 응답합니다.
//!
//! # Features
//!
//! - **에러 모델**: 상태 코드 분류, 필드 단위 하위 에러, 원인 장애 보관
//! - **DTO 투영**: 값이 없는 필드를 생략하는 camelCase JSON 응답
//! - **검증 통합**: `validator` 검증 결과를 하위 에러로 변환
//! - **추적 ID**: 요청마다 추적 ID를 부여하고 에러 응답에 포함
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 헬스체크, 404 기본 핸들러
//! └─────────────────┘
//!          │ Result<_, AppError>
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← 추적 ID 부여, AppError → AppErrorDto
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Config      │ ← 환경별 개발 정보 노출 정책
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use resume_service_backend::errors::{AppError, AppResult};
//!
//! fn rename_job(name: &str) -> AppResult<String> {
//!     if name.trim().is_empty() {
//!         return AppError::builder(400).sub_error("companyName", "Company name is required").into_err();
//!     }
//!     Ok(name.trim().to_string())
//! }
//! ```

pub mod config;
pub mod errors;
pub mod middlewares;
pub mod routes;
