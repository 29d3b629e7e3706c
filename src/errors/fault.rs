//! 하위 계층 장애(Fault) 래퍼
//!
//! `AppError`가 원인으로 보관하는 저수준 에러입니다. 종류(kind)와 메시지를
//! 분리해 두어, 개발용 응답에는 종류 이름만 노출하고 메시지는 로그와
//! 개발자 메시지 기본값으로만 사용합니다.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// 에러를 일으킨 하위 장애
///
/// 원본 에러는 `Arc`로 공유되므로 `Fault`와 이를 담은 `AppError`는
/// 복제가 저렴하고 `Send + Sync`를 만족합니다.
#[derive(Clone)]
pub struct Fault {
    kind: String,
    message: String,
    inner: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl Fault {
    /// 종류 이름과 메시지로 장애를 생성합니다.
    ///
    /// 감싸야 할 원본 에러가 없을 때 사용합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let fault = Fault::new("QuotaExceeded", "media quota exceeded for owner");
    /// assert_eq!(fault.kind(), "QuotaExceeded");
    /// ```
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            inner: None,
        }
    }

    /// 원본 에러를 감싸 장애를 생성합니다.
    ///
    /// `kind`에는 원본 에러 타입의 짧은 이름(모듈 경로와 제네릭 인자 제외)이 기록됩니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    /// let fault = Fault::from_error(io);
    /// assert_eq!(fault.kind(), "Error");
    /// assert_eq!(fault.message(), "disk full");
    /// ```
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind: short_type_name(std::any::type_name::<E>()).to_string(),
            message: error.to_string(),
            inner: Some(Arc::new(error)),
        }
    }

    /// 장애 종류 이름
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// 장애 메시지
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// `a::b::Type<c::D>` 형태의 타입 이름에서 `Type`만 남깁니다.
fn short_type_name(full: &str) -> &str {
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner
            .as_deref()
            .map(|inner| inner as &(dyn Error + 'static))
    }
}
