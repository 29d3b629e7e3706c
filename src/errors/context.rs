//! `Result`/`Option`을 `AppError`로 변환하는 확장 trait

use std::error::Error;

use super::app_error::{AppError, AppErrorParams, AppResult, SubError};
use super::fault::Fault;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// 변환된 에러는 원인 장애를 보관하는 500 시스템 에러가 됩니다.
///
/// ```rust,ignore
/// let raw = std::fs::read_to_string(&path).context("Failed to read resume template")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.with_context(|| msg.to_string())
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let developer_message = format!("{}: {}", f(), e);
            AppError::new(AppErrorParams {
                caused_by: Some(Fault::from_error(e)),
                developer_message: Some(developer_message),
                ..Default::default()
            })
        })
    }
}

/// `Option`의 부재를 AppError로 변환하는 확장 trait
pub trait OptionExt<T> {
    /// 값이 없으면 404 에러를 반환합니다.
    fn ok_or_not_found(self, user_message: impl Into<String>) -> AppResult<T>;

    /// 값이 없으면 `path`에 대한 필수 값 누락 하위 에러(400)를 반환합니다.
    fn required(self, path: &str) -> AppResult<T>;

    fn ok_or_app_error<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> AppError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, user_message: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(user_message))
    }

    fn required(self, path: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::validation([SubError::missing(path)]))
    }

    fn ok_or_app_error<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> AppError,
    {
        self.ok_or_else(f)
    }
}
