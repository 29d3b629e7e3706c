//! 요청 추적 ID
//!
//! 요청마다 부여되는 불투명 식별자입니다. 모든 에러 응답에 그대로 포함되어
//! 클라이언트와 운영자가 같은 요청을 찾을 수 있게 합니다.

use std::fmt;
use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;

/// 추적 ID 요청/응답 헤더 이름
pub const TRACE_ID_HEADER: &str = "x-trace-id";

const MAX_TRACE_ID_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceId(String);

impl TraceId {
    /// 새 추적 ID를 발급합니다 (하이픈 없는 UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// 클라이언트가 보낸 헤더 값을 검증합니다.
    ///
    /// 1-128자의 공백 없는 ASCII 문자열만 허용하며, 그 외에는 `None`을 반환합니다.
    pub fn from_header_value(value: &str) -> Option<Self> {
        let value = value.trim();
        let acceptable = !value.is_empty()
            && value.len() <= MAX_TRACE_ID_LEN
            && value.chars().all(|c| c.is_ascii_graphic());
        acceptable.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TraceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// 핸들러에서 현재 요청의 추적 ID를 꺼냅니다.
///
/// `TraceIdMiddleware`가 설치되지 않은 경우 새 ID를 발급합니다.
impl FromRequest for TraceId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .cloned()
            .unwrap_or_else(TraceId::generate);
        ready(Ok(trace_id))
    }
}
