//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 추적 ID 미들웨어 (TraceIdMiddleware)
//! - `X-Trace-Id` 헤더 수용 또는 새 추적 ID 발급
//! - 추적 ID를 request extension에 저장하고 응답 헤더로 반환
//! - 핸들러의 `AppError`를 추적 ID가 담긴 `AppErrorDto` 응답으로 변환
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::config::ErrorConfig;
//! use crate::middlewares::TraceIdMiddleware;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(TraceIdMiddleware::new(ErrorConfig::include_dev_info()))
//!         .service(/* 라우트들 */)
//! })
//! ```

pub mod trace_id;
pub mod trace_middleware;
mod trace_inner;

// 미들웨어 재export
pub use trace_id::{TraceId, TRACE_ID_HEADER};
pub use trace_middleware::TraceIdMiddleware;
