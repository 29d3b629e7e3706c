//! # Application Error Model
//!
//! 요청 처리 중 발생한 실패를 표현하고 클라이언트용 DTO로 투영하는 에러 시스템입니다.
//!
//! ## 흐름
//!
//! ```text
//! 서비스 코드 ── Err(AppError) ──▶ 핸들러 ──▶ TraceIdMiddleware ──▶ AppErrorDto(JSON)
//! ```
//!
//! - 400-499: 사용자 에러 (검증 실패, 누락된 데이터, 인증 실패)
//! - 500-599: 시스템 에러 (예상하지 못한 내부 장애)
//!
//! 원인 장애의 종류와 개발자 메시지는 개발 정보 노출이 허용된 환경에서만 응답에 포함되고,
//! 클라이언트는 항상 최소한 `userMessage`와 `traceId`를 받습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult, ErrorContext, OptionExt};
//!
//! async fn attach_image(profile_id: &str, url: &str) -> AppResult<ImageRef> {
//!     let profile = repo.find_profile(profile_id).await
//!         .context("Failed to load profile")?
//!         .ok_or_not_found("Profile not found")?;
//!
//!     if url.is_empty() {
//!         return AppError::builder(400).sub_error("location", "Image URL is required").into_err();
//!     }
//!     // ...
//! }
//! ```

pub mod app_error;
pub mod builder;
pub mod context;
pub mod dto;
pub mod fault;
pub mod response;
pub mod validation;

pub use app_error::*;
pub use builder::AppErrorBuilder;
pub use context::{ErrorContext, OptionExt};
pub use dto::*;
pub use fault::Fault;
pub use response::{FRAMEWORK_FAULT_KIND, INVALID_REQUEST_MESSAGE};
pub use validation::{required_text, SubErrors};
