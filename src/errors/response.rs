//! Actix-Web 응답 변환
//!
//! `AppError`를 HTTP 응답으로 바꾸는 요청 경계 코드입니다.
//! 추적 ID 미들웨어가 설치된 경우 미들웨어가 요청의 추적 ID로 본문을 다시 만들고,
//! 그렇지 않은 경우 `ResponseError::error_response`가 새 추적 ID를 발급합니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use super::app_error::AppError;
use super::fault::Fault;
use crate::config::ErrorConfig;
use crate::middlewares::TraceId;

/// 프레임워크 에러를 감싼 장애의 종류 이름
pub const FRAMEWORK_FAULT_KIND: &str = "ActixError";

/// 프레임워크가 거부한 4xx 요청의 사용자 메시지
pub const INVALID_REQUEST_MESSAGE: &str = "The request could not be processed";

impl AppError {
    /// HTTP 상태 코드로 변환합니다.
    ///
    /// 4xx/5xx 범위가 아닌 코드(유효하지 않은 코드, 1xx-3xx 포함)는 500으로 처리됩니다.
    pub fn http_status(&self) -> StatusCode {
        StatusCode::from_u16(AppError::status_code(self))
            .ok()
            .filter(|status| status.is_client_error() || status.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// `AppError`가 아닌 actix 에러(추출기, 페이로드 오류 등)를 `AppError`로 변환합니다.
    ///
    /// 원본 에러 메시지는 개발자 메시지로만 남고, 4xx인 경우 일반적인 사용자 메시지를 사용합니다.
    pub fn from_framework_error(error: &actix_web::Error) -> Self {
        let status = error.as_response_error().status_code();
        let builder = AppError::builder(status.as_u16())
            .caused_by_fault(Fault::new(FRAMEWORK_FAULT_KIND, error.to_string()));
        if status.is_client_error() {
            builder.user_message(INVALID_REQUEST_MESSAGE).build()
        } else {
            builder.build()
        }
    }

    /// DTO 본문을 가진 HTTP 응답을 생성합니다.
    pub fn to_http_response(&self, trace_id: &TraceId, include_dev_info: bool) -> HttpResponse {
        HttpResponse::build(self.http_status()).json(self.to_dto(trace_id.as_str(), include_dev_info))
    }

    /// 사용자 에러는 warn, 시스템 에러는 error 레벨로 기록합니다.
    pub(crate) fn log(&self, trace_id: &TraceId) {
        let fault_kind = self.caused_by().map(|fault| fault.kind()).unwrap_or("-");
        if self.is_user_error() {
            log::warn!(
                "[{}] 사용자 에러 {}: {} (하위 에러 {}개)",
                trace_id,
                AppError::status_code(self),
                self.user_message().unwrap_or("-"),
                self.sub_errors().len()
            );
        } else {
            log::error!(
                "[{}] 시스템 에러 {}: {} (원인: {})",
                trace_id,
                AppError::status_code(self),
                self.developer_message().unwrap_or("-"),
                fault_kind
            );
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 요청의 추적 ID를 알 수 없으므로 새로 발급합니다.
    /// 로그는 `TraceIdMiddleware`가 요청의 추적 ID와 함께 남깁니다.
    fn error_response(&self) -> HttpResponse {
        self.to_http_response(&TraceId::generate(), ErrorConfig::include_dev_info())
    }
}
