//! 애플리케이션 에러 값
//!
//! 요청 처리 중 발생한 실패 하나를 표현하는 불변 값입니다.
//! HTTP 상태 코드로 분류되며, 필드 단위의 하위 에러(`SubError`)와
//! 원인 장애(`Fault`)를 함께 담을 수 있습니다.
//!
//! ## 상태 코드 기본값
//!
//! | 조건 | 상태 코드 |
//! |------|-----------|
//! | 명시적으로 지정 | 지정한 값 |
//! | 사용자 메시지 또는 하위 에러 존재 | 400 Bad Request |
//! | 그 외 | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppErrorParams, AppResult};
//!
//! fn find_profile(id: &str) -> AppResult<Profile> {
//!     repo.find(id).ok_or_else(|| AppError::not_found(format!("Profile {} not found", id)))
//! }
//!
//! let error = AppError::new(AppErrorParams {
//!     user_message: Some("Email is already taken".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(error.status_code(), 400);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::builder::AppErrorBuilder;
use super::fault::Fault;

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 에러 분류
///
/// 상태 코드와 독립적인 닫힌 분류이며, DTO에는 이름 문자열로 전달됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    General,
    AuthenticationFailed,
    ValidationFailed,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::General => "General",
            ErrorType::AuthenticationFailed => "AuthenticationFailed",
            ErrorType::ValidationFailed => "ValidationFailed",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 알 수 없는 에러 분류 이름
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown error type: {0}")]
pub struct UnknownErrorType(pub String);

impl FromStr for ErrorType {
    type Err = UnknownErrorType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General" => Ok(ErrorType::General),
            "AuthenticationFailed" => Ok(ErrorType::AuthenticationFailed),
            "ValidationFailed" => Ok(ErrorType::ValidationFailed),
            other => Err(UnknownErrorType(other.to_string())),
        }
    }
}

/// 하위 에러 종류
///
/// 호출 측에서 하위 에러를 만들 때 쓰는 분류이며 `SubError` 자체에는 저장되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubErrorKind {
    /// 필수 값 누락
    DataMissing,
    /// 값 형식 또는 범위 오류
    DataInvalid,
}

impl SubErrorKind {
    pub fn default_message(&self) -> &'static str {
        match self {
            SubErrorKind::DataMissing => "This field is required",
            SubErrorKind::DataInvalid => "This field is invalid",
        }
    }
}

/// 필드 단위 하위 에러
///
/// `path`와 `message`가 모두 같으면 같은 에러로 취급되어 집합에서 하나로 합쳐집니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubError {
    path: String,
    message: String,
}

impl SubError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// 종류의 기본 메시지로 하위 에러를 생성합니다.
    pub fn of_kind(kind: SubErrorKind, path: impl Into<String>) -> Self {
        Self::new(path, kind.default_message())
    }

    /// 필수 값 누락 하위 에러
    pub fn missing(path: impl Into<String>) -> Self {
        Self::of_kind(SubErrorKind::DataMissing, path)
    }

    /// 잘못된 값 하위 에러
    pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(path, message)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// `AppError` 생성 파라미터
///
/// 모든 필드가 선택 사항이며, 비어 있는 필드는 `AppError::new`에서 기본값이 채워집니다.
#[derive(Debug, Clone, Default)]
pub struct AppErrorParams {
    pub caused_by: Option<Fault>,
    pub error_type: Option<ErrorType>,
    pub status_code: Option<u16>,
    pub user_message: Option<String>,
    pub developer_message: Option<String>,
    pub sub_errors: Vec<SubError>,
}

/// 애플리케이션 전역 에러 타입
///
/// 한 번 생성되면 변경되지 않으며, 요청 경계에서 `to_dto`로 한 번 투영된 뒤 버려집니다.
/// 원인 장애와 개발자 메시지는 개발 정보 노출이 허용된 경우에만 응답에 포함됩니다.
#[derive(Debug, Clone, Error)]
#[error("{}", describe(.status_code, .user_message, .developer_message))]
pub struct AppError {
    #[source]
    caused_by: Option<Fault>,
    error_type: Option<ErrorType>,
    status_code: u16,
    user_message: Option<String>,
    developer_message: Option<String>,
    sub_errors: Vec<SubError>,
}

fn describe(
    status_code: &u16,
    user_message: &Option<String>,
    developer_message: &Option<String>,
) -> String {
    let detail = developer_message
        .as_deref()
        .or(user_message.as_deref())
        .unwrap_or("unspecified failure");
    format!("Application error ({}): {}", status_code, detail)
}

impl AppError {
    /// 파라미터에서 에러를 생성하고 기본값 규칙을 적용합니다.
    ///
    /// 1. 중복된 하위 에러는 처음 등장한 것만 남깁니다.
    /// 2. 상태 코드가 없으면 사용자 메시지나 하위 에러가 있을 때 400, 아니면 500입니다.
    /// 3. 개발자 메시지가 없으면 원인 장애의 메시지를 사용합니다.
    /// 4. 빈 문자열 사용자 메시지는 없는 것으로 취급합니다.
    pub fn new(params: AppErrorParams) -> Self {
        let AppErrorParams {
            caused_by,
            error_type,
            status_code,
            user_message,
            developer_message,
            sub_errors,
        } = params;

        let user_message = user_message.filter(|message| !message.is_empty());

        let mut seen = HashSet::with_capacity(sub_errors.len());
        let sub_errors: Vec<SubError> = sub_errors
            .into_iter()
            .filter(|sub_error| seen.insert(sub_error.clone()))
            .collect();

        let status_code = status_code.unwrap_or(
            if user_message.is_some() || !sub_errors.is_empty() {
                400
            } else {
                500
            },
        );

        let developer_message = developer_message
            .or_else(|| caused_by.as_ref().map(|fault| fault.message().to_string()));

        Self {
            caused_by,
            error_type,
            status_code,
            user_message,
            developer_message,
            sub_errors,
        }
    }

    /// 상태 코드가 지정된 빌더를 생성합니다.
    pub fn builder(status_code: u16) -> AppErrorBuilder {
        AppErrorBuilder::new().status_code(status_code)
    }

    /// 에러 분류가 지정된 빌더를 생성합니다.
    pub fn builder_for(error_type: ErrorType) -> AppErrorBuilder {
        AppErrorBuilder::new().error_type(error_type)
    }

    /// 404 Not Found
    pub fn not_found(user_message: impl Into<String>) -> Self {
        Self::builder(404).user_message(user_message).build()
    }

    /// 409 Conflict
    pub fn conflict(user_message: impl Into<String>) -> Self {
        Self::builder(409).user_message(user_message).build()
    }

    /// 401 Unauthorized, `AuthenticationFailed` 분류
    pub fn unauthorized(user_message: impl Into<String>) -> Self {
        Self::builder(401)
            .error_type(ErrorType::AuthenticationFailed)
            .user_message(user_message)
            .build()
    }

    /// 403 Forbidden
    pub fn forbidden(user_message: impl Into<String>) -> Self {
        Self::builder(403).user_message(user_message).build()
    }

    /// 입력값 검증 실패 (400, `ValidationFailed` 분류)
    pub fn validation(sub_errors: impl IntoIterator<Item = SubError>) -> Self {
        Self::builder_for(ErrorType::ValidationFailed)
            .sub_errors(sub_errors)
            .build()
    }

    /// 예상하지 못한 하위 장애를 500 에러로 감쌉니다.
    ///
    /// ```rust,ignore
    /// let bytes = std::fs::read(path).map_err(AppError::internal)?;
    /// ```
    pub fn internal<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(AppErrorParams {
            caused_by: Some(Fault::from_error(error)),
            ..Default::default()
        })
    }

    pub fn caused_by(&self) -> Option<&Fault> {
        self.caused_by.as_ref()
    }

    pub fn error_type(&self) -> Option<ErrorType> {
        self.error_type
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn user_message(&self) -> Option<&str> {
        self.user_message.as_deref()
    }

    pub fn developer_message(&self) -> Option<&str> {
        self.developer_message.as_deref()
    }

    pub fn sub_errors(&self) -> &[SubError] {
        &self.sub_errors
    }

    /// 상태 코드가 400-499 범위인 사용자 에러인지 확인합니다.
    pub fn is_user_error(&self) -> bool {
        (400..=499).contains(&self.status_code)
    }

    /// `Err(self)`를 반환합니다.
    pub fn into_err<T>(self) -> AppResult<T> {
        Err(self)
    }
}
