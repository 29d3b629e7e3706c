//! 입력값 검증 에러 변환
//!
//! `validator` 크레이트의 검증 결과를 `ValidationFailed` 분류의 `AppError`로 바꿉니다.
//! 중첩 구조체와 목록의 에러는 `contact.email`, `jobs[1].company_name` 형태의
//! 경로를 가진 하위 에러로 평탄화됩니다.
//!
//! ```rust,ignore
//! #[post("/profiles")]
//! pub async fn create_profile(payload: web::Json<CreateProfileRequest>) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     // ...
//! }
//! ```

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::app_error::{AppError, AppResult, ErrorType, SubError, SubErrorKind};
use super::builder::AppErrorBuilder;

/// 구조체 단위(schema) 검증 에러 키
const SCHEMA_ERRORS_KEY: &str = "__all__";

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut sub_errors = Vec::new();
        collect_sub_errors(&errors, "", &mut sub_errors);

        let developer_message = format!(
            "Request validation failed with {} violation(s)",
            sub_errors.len()
        );

        AppError::builder_for(ErrorType::ValidationFailed)
            .developer_message(developer_message)
            .sub_errors(sub_errors)
            .build()
    }
}

fn collect_sub_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<SubError>) {
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        let path = if field == SCHEMA_ERRORS_KEY {
            prefix.to_string()
        } else {
            join_path(prefix, &field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| to_sub_error(&path, error)));
            }
            ValidationErrorsKind::Struct(nested) => collect_sub_errors(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_sub_errors(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn to_sub_error(path: &str, error: &ValidationError) -> SubError {
    match &error.message {
        Some(message) => SubError::new(path, message.to_string()),
        None => SubError::of_kind(kind_for_code(&error.code), path),
    }
}

fn kind_for_code(code: &str) -> SubErrorKind {
    match code {
        "required" => SubErrorKind::DataMissing,
        _ => SubErrorKind::DataInvalid,
    }
}

/// 필수 문자열 필드를 검증하고 앞뒤 공백을 제거합니다.
///
/// 빈 문자열이나 공백만 있는 경우 `path`에 대한 필수 값 누락 에러를 반환합니다.
///
/// ```rust,ignore
/// let company_name = required_text("  Acme  ", "companyName")?; // "Acme"
/// ```
pub fn required_text(value: &str, path: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return AppError::validation([SubError::missing(path)]).into_err();
    }
    Ok(trimmed.to_string())
}

/// 수동 검증용 하위 에러 수집기
///
/// 검사를 모두 수행한 뒤 `finish`에서 한 번에 실패를 보고합니다.
///
/// ```rust,ignore
/// let mut checks = SubErrors::new();
/// checks
///     .check(!job.company_name.trim().is_empty(), "companyName", "Company name is required")
///     .check(job.start <= job.end, "endDate", "End date must not precede start date");
/// checks.finish()?;
/// ```
#[derive(Debug)]
pub struct SubErrors {
    builder: AppErrorBuilder,
}

impl SubErrors {
    pub fn new() -> Self {
        Self {
            builder: AppError::builder_for(ErrorType::ValidationFailed),
        }
    }

    /// `valid`가 거짓이면 하위 에러를 기록합니다.
    pub fn check(&mut self, valid: bool, path: &str, message: &str) -> &mut Self {
        if !valid {
            self.push(SubError::new(path, message));
        }
        self
    }

    pub fn push(&mut self, sub_error: SubError) -> &mut Self {
        let builder = std::mem::take(&mut self.builder);
        self.builder = builder.add_sub_error(sub_error);
        self
    }

    pub fn is_empty(&self) -> bool {
        !self.builder.has_sub_errors()
    }

    pub fn finish(self) -> AppResult<()> {
        self.builder.into_result()
    }
}

impl Default for SubErrors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct ContactInfoRequest {
        #[validate(email(message = "Invalid email address"))]
        email: String,
    }

    #[derive(Debug, Validate)]
    struct JobRequest {
        #[validate(length(min = 1))]
        company_name: String,
    }

    #[derive(Debug, Validate)]
    struct CreateProfileRequest {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(required)]
        summary: Option<String>,
        #[validate(nested)]
        contact: ContactInfoRequest,
        #[validate(nested)]
        jobs: Vec<JobRequest>,
    }

    fn sorted(error: &AppError) -> Vec<SubError> {
        let mut sub_errors = error.sub_errors().to_vec();
        sub_errors.sort();
        sub_errors
    }

    #[test]
    fn test_validation_errors_are_flattened() {
        let request = CreateProfileRequest {
            name: String::new(),
            summary: None,
            contact: ContactInfoRequest {
                email: "not-an-email".to_string(),
            },
            jobs: vec![
                JobRequest {
                    company_name: "Acme".to_string(),
                },
                JobRequest {
                    company_name: String::new(),
                },
            ],
        };

        let error: AppError = request.validate().unwrap_err().into();

        assert_eq!(error.status_code(), 400);
        assert_eq!(error.error_type(), Some(ErrorType::ValidationFailed));
        assert_eq!(
            error.developer_message(),
            Some("Request validation failed with 4 violation(s)")
        );
        assert_eq!(
            sorted(&error),
            vec![
                SubError::new("contact.email", "Invalid email address"),
                SubError::new("jobs[1].company_name", "This field is invalid"),
                SubError::new("name", "Name is required"),
                SubError::new("summary", "This field is required"),
            ]
        );
    }

    #[test]
    fn test_question_mark_converts_validation_errors() {
        fn validate(request: &JobRequest) -> AppResult<()> {
            request.validate()?;
            Ok(())
        }

        let error = validate(&JobRequest {
            company_name: String::new(),
        })
        .unwrap_err();

        assert_eq!(error.sub_errors(), &[SubError::new("company_name", "This field is invalid")]);
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "email"), "email");
        assert_eq!(join_path("contact", "email"), "contact.email");
    }

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("  Acme  ", "companyName").unwrap(), "Acme");

        let error = required_text(" \t\n", "companyName").unwrap_err();
        assert_eq!(error.sub_errors(), &[SubError::missing("companyName")]);
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn test_sub_errors_collector() {
        let mut checks = SubErrors::new();
        checks
            .check(true, "name", "Name is required")
            .check(false, "endDate", "End date must not precede start date")
            .check(false, "endDate", "End date must not precede start date");

        assert!(!checks.is_empty());
        let error = checks.finish().unwrap_err();
        assert_eq!(error.error_type(), Some(ErrorType::ValidationFailed));
        assert_eq!(
            error.sub_errors(),
            &[SubError::new("endDate", "End date must not precede start date")]
        );

        assert!(SubErrors::new().finish().is_ok());
    }
}
