//! 에러 응답 DTO
//!
//! `AppError`를 클라이언트에 전달하는 직렬화 전용 구조체입니다.
//! 값이 없는 필드는 `null`로 내보내지 않고 JSON 키 자체를 생략합니다.
//!
//! ```json
//! {
//!   "errorType": "ValidationFailed",
//!   "userMessage": "Multiple errors occurred",
//!   "subErrors": [{ "path": "email", "message": "This field is required" }],
//!   "traceId": "2f1c9a7e4b0d4c55a3f1e0b9d8c7a6f5"
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::app_error::{AppError, SubError};

/// 하위 에러가 있고 사용자 메시지가 없을 때의 대체 메시지
pub const MULTIPLE_ERRORS_MESSAGE: &str = "Multiple errors occurred";

/// 시스템 에러의 대체 메시지
pub const SYSTEM_ERROR_MESSAGE: &str =
    "A system error has occurred. Please contact support@resumetech.io for Technical Support";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubErrorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&SubError> for SubErrorDto {
    fn from(sub_error: &SubError) -> Self {
        Self {
            path: Some(sub_error.path().to_string()),
            message: Some(sub_error.message().to_string()),
        }
    }
}

/// 클라이언트에 전달되는 에러 응답 본문
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppErrorDto {
    /// 원인 장애 종류 이름 (개발 정보 허용 시에만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
    /// 개발자 메시지 (개발 정보 허용 시에만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_errors: Option<Vec<SubErrorDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl AppError {
    /// 에러를 응답 DTO로 투영합니다.
    ///
    /// 부수 효과가 없는 순수 변환입니다.
    ///
    /// # Arguments
    ///
    /// * `trace_id` - 요청 파이프라인이 부여한 추적 ID (그대로 포함됨)
    /// * `include_dev_info` - 원인 장애 종류와 개발자 메시지 포함 여부
    ///
    /// # 사용자 메시지 결정
    ///
    /// 1. 명시적으로 지정된 메시지
    /// 2. 하위 에러가 있으면 [`MULTIPLE_ERRORS_MESSAGE`]
    /// 3. 그 외 [`SYSTEM_ERROR_MESSAGE`]
    pub fn to_dto(&self, trace_id: &str, include_dev_info: bool) -> AppErrorDto {
        let user_message = match self.user_message() {
            Some(message) => message,
            None if !self.sub_errors().is_empty() => MULTIPLE_ERRORS_MESSAGE,
            None => SYSTEM_ERROR_MESSAGE,
        };

        let sub_errors = if self.sub_errors().is_empty() {
            None
        } else {
            Some(self.sub_errors().iter().map(SubErrorDto::from).collect())
        };

        AppErrorDto {
            caused_by: self
                .caused_by()
                .filter(|_| include_dev_info)
                .map(|fault| fault.kind().to_string()),
            error_type: self.error_type().map(|t| t.as_str().to_string()),
            user_message: Some(user_message.to_string()),
            developer_message: self
                .developer_message()
                .filter(|_| include_dev_info)
                .map(str::to_string),
            sub_errors,
            trace_id: Some(trace_id.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppErrorBuilder, ErrorType, Fault};
    use serde_json::json;
    use std::io;

    #[test]
    fn test_user_message_and_trace_id_only() {
        let dto = AppError::builder(404)
            .user_message("Not found")
            .build()
            .to_dto("abc123", false);

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({ "userMessage": "Not found", "traceId": "abc123" })
        );
    }

    #[test]
    fn test_dev_info_hidden_when_disabled() {
        let error = AppError::builder(500)
            .caused_by(io::Error::new(io::ErrorKind::Other, "password=hunter2 leaked"))
            .developer_message("Database write failed")
            .build();

        let dto = error.to_dto("t-1", false);

        assert!(dto.caused_by.is_none());
        assert!(dto.developer_message.is_none());
        let body = serde_json::to_string(&dto).unwrap();
        assert!(!body.contains("causedBy"));
        assert!(!body.contains("developerMessage"));
        assert!(!body.contains("hunter2"));
    }

    #[test]
    fn test_dev_info_exposes_only_fault_kind() {
        let error = AppError::internal(io::Error::new(io::ErrorKind::Other, "secret detail"));

        let dto = error.to_dto("t-2", true);

        assert_eq!(dto.caused_by.as_deref(), Some("Error"));
        assert_eq!(dto.developer_message.as_deref(), Some("secret detail"));
        assert_eq!(dto.user_message.as_deref(), Some(SYSTEM_ERROR_MESSAGE));
    }

    #[test]
    fn test_empty_sub_errors_omitted() {
        let dto = AppError::builder(400).user_message("Bad").build().to_dto("t", true);
        let value = serde_json::to_value(&dto).unwrap();

        assert!(dto.sub_errors.is_none());
        assert!(value.get("subErrors").is_none());
    }

    #[test]
    fn test_sub_errors_use_multiple_errors_message() {
        let dto = AppErrorBuilder::new()
            .error_type(ErrorType::ValidationFailed)
            .sub_error("email", "required")
            .build()
            .to_dto("trace-9", false);

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "errorType": "ValidationFailed",
                "userMessage": MULTIPLE_ERRORS_MESSAGE,
                "subErrors": [{ "path": "email", "message": "required" }],
                "traceId": "trace-9"
            })
        );
    }

    #[test]
    fn test_system_error_message_without_sub_errors() {
        let dto = AppErrorBuilder::new().build().to_dto("t", false);

        assert_eq!(dto.user_message.as_deref(), Some(SYSTEM_ERROR_MESSAGE));
    }

    #[test]
    fn test_trace_id_is_verbatim() {
        let trace_id = "  Ünïcode / spaced id  ";
        let dto = AppError::not_found("x").to_dto(trace_id, false);

        assert_eq!(dto.trace_id.as_deref(), Some(trace_id));
    }

    #[test]
    fn test_fault_without_inner_error() {
        let dto = AppError::builder(503)
            .caused_by_fault(Fault::new("CircuitOpen", "media service unavailable"))
            .build()
            .to_dto("t", true);

        assert_eq!(dto.caused_by.as_deref(), Some("CircuitOpen"));
        assert_eq!(dto.developer_message.as_deref(), Some("media service unavailable"));
    }

    #[test]
    fn test_dto_deserializes_with_missing_fields() {
        let dto: AppErrorDto = serde_json::from_str(r#"{"userMessage":"Not found","traceId":"abc"}"#).unwrap();

        assert_eq!(dto.user_message.as_deref(), Some("Not found"));
        assert_eq!(dto.trace_id.as_deref(), Some("abc"));
        assert!(dto.sub_errors.is_none());
    }
}
