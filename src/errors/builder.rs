//! `AppError` 빌더
//!
//! 검증 로직처럼 하위 에러를 여러 번에 걸쳐 모아야 하는 경우에 사용합니다.
//! 하위 에러는 집합에 쌓이므로 같은 경로와 메시지는 한 번만 기록됩니다.

use std::collections::HashSet;

use super::app_error::{AppError, AppErrorParams, AppResult, ErrorType, SubError};
use super::fault::Fault;

/// `AppError` 누적 빌더
///
/// # 예제
///
/// ```rust,ignore
/// let error = AppError::builder(400)
///     .sub_error("email", "required")
///     .sub_error("email", "required")
///     .build();
/// assert_eq!(error.sub_errors().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AppErrorBuilder {
    caused_by: Option<Fault>,
    error_type: Option<ErrorType>,
    status_code: Option<u16>,
    user_message: Option<String>,
    developer_message: Option<String>,
    sub_errors: HashSet<SubError>,
}

impl AppErrorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 원인 에러를 `Fault`로 감싸 설정합니다.
    pub fn caused_by<E>(mut self, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.caused_by = Some(Fault::from_error(error));
        self
    }

    pub fn caused_by_fault(mut self, fault: Fault) -> Self {
        self.caused_by = Some(fault);
        self
    }

    pub fn error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn user_message(mut self, user_message: impl Into<String>) -> Self {
        self.user_message = Some(user_message.into());
        self
    }

    pub fn developer_message(mut self, developer_message: impl Into<String>) -> Self {
        self.developer_message = Some(developer_message.into());
        self
    }

    /// 경로와 메시지로 하위 에러를 추가합니다.
    pub fn sub_error(self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.add_sub_error(SubError::new(path, message))
    }

    pub fn add_sub_error(mut self, sub_error: SubError) -> Self {
        self.sub_errors.insert(sub_error);
        self
    }

    /// 하위 에러 묶음을 합칩니다.
    pub fn sub_errors(mut self, sub_errors: impl IntoIterator<Item = SubError>) -> Self {
        self.sub_errors.extend(sub_errors);
        self
    }

    pub fn has_sub_errors(&self) -> bool {
        !self.sub_errors.is_empty()
    }

    /// 누적된 상태로 불변 `AppError`를 생성합니다.
    ///
    /// 하위 에러의 순서는 보장되지 않습니다.
    pub fn build(self) -> AppError {
        AppError::new(AppErrorParams {
            caused_by: self.caused_by,
            error_type: self.error_type,
            status_code: self.status_code,
            user_message: self.user_message,
            developer_message: self.developer_message,
            sub_errors: self.sub_errors.into_iter().collect(),
        })
    }

    /// 빌드 후 곧바로 `Err`로 반환합니다.
    ///
    /// ```rust,ignore
    /// if profile.owner_id != user.id {
    ///     return AppError::builder(403).user_message("Not your profile").into_err();
    /// }
    /// ```
    pub fn into_err<T>(self) -> AppResult<T> {
        Err(self.build())
    }

    /// 하위 에러가 하나라도 있으면 `Err`, 없으면 `Ok(())`를 반환합니다.
    pub fn into_result(self) -> AppResult<()> {
        if self.has_sub_errors() {
            self.into_err()
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sorted(error: &AppError) -> Vec<SubError> {
        let mut sub_errors = error.sub_errors().to_vec();
        sub_errors.sort();
        sub_errors
    }

    #[test]
    fn test_duplicate_pairs_collapse() {
        let error = AppError::builder(400)
            .sub_error("email", "required")
            .sub_error("email", "required")
            .build();

        assert_eq!(error.sub_errors(), &[SubError::new("email", "required")]);
    }

    #[test]
    fn test_all_accumulation_forms_share_one_set() {
        let error = AppErrorBuilder::new()
            .sub_error("email", "required")
            .add_sub_error(SubError::new("email", "required"))
            .sub_errors(vec![
                SubError::new("email", "required"),
                SubError::new("password", "too short"),
            ])
            .build();

        assert_eq!(
            sorted(&error),
            vec![SubError::new("email", "required"), SubError::new("password", "too short")]
        );
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn test_same_path_different_message_are_kept() {
        let error = AppErrorBuilder::new()
            .sub_error("password", "too short")
            .sub_error("password", "needs a digit")
            .build();

        assert_eq!(error.sub_errors().len(), 2);
    }

    #[test]
    fn test_builder_without_status_applies_defaults() {
        let system = AppErrorBuilder::new().build();
        assert_eq!(system.status_code(), 500);

        let user = AppErrorBuilder::new().user_message("Bad input").build();
        assert_eq!(user.status_code(), 400);
    }

    #[test]
    fn test_builder_for_error_type() {
        let error = AppError::builder_for(ErrorType::AuthenticationFailed)
            .user_message("Incorrect password")
            .build();

        assert_eq!(error.error_type(), Some(ErrorType::AuthenticationFailed));
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn test_caused_by_sets_developer_message() {
        let error = AppError::builder(502)
            .caused_by(io::Error::new(io::ErrorKind::TimedOut, "upstream timed out"))
            .build();

        assert_eq!(error.status_code(), 502);
        assert_eq!(error.developer_message(), Some("upstream timed out"));
        assert_eq!(error.caused_by().map(|f| f.kind()), Some("Error"));
    }

    #[test]
    fn test_into_err_and_into_result() {
        let failed: AppResult<()> = AppError::builder(404).user_message("Not found").into_err();
        assert_eq!(failed.err().map(|e| e.status_code()), Some(404));

        assert!(AppErrorBuilder::new().into_result().is_ok());
        assert!(AppErrorBuilder::new().sub_error("name", "required").into_result().is_err());
    }
}
