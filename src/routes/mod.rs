//! API 라우트 설정 모듈
//!
//! 헬스체크 엔드포인트와 등록되지 않은 경로에 대한 JSON 404 응답을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::routes::{configure_all_routes, not_found};
//!
//! let app = App::new()
//!     .configure(configure_all_routes)
//!     .default_service(web::route().to(not_found));
//! ```

use actix_web::{get, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::AppError;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}

/// 헬스체크 엔드포인트
///
/// # Endpoint
/// `GET /health`
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// 등록되지 않은 경로에 대한 기본 핸들러
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    AppError::builder(404)
        .user_message("The requested resource was not found")
        .developer_message(format!("No route for {} {}", req.method(), req.path()))
        .into_err()
}
