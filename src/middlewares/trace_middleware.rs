//! 요청 추적 ID 미들웨어
//!
//! 요청마다 추적 ID를 부여하고, 요청이 실패하면 `AppError`든 추출기 같은
//! 프레임워크 에러든 그 추적 ID를 담은 `AppErrorDto`로 응답 본문을 만듭니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::trace_inner::TraceIdMiddlewareService;

/// 요청 추적 ID 미들웨어
pub struct TraceIdMiddleware {
    /// 에러 응답에 개발 정보 포함 여부
    include_dev_info: bool,
}

impl TraceIdMiddleware {
    pub fn new(include_dev_info: bool) -> Self {
        Self { include_dev_info }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for TraceIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = TraceIdMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceIdMiddlewareService {
            service: Rc::new(service),
            include_dev_info: self.include_dev_info,
        }))
    }
}
