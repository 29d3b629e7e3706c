//! TraceIdMiddleware 요청 처리 로직
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::errors::AppError;
use crate::middlewares::trace_id::{TraceId, TRACE_ID_HEADER};

/// 실제 추적 ID 처리를 수행하는 서비스
pub struct TraceIdMiddlewareService<S> {
    pub service: Rc<S>,
    pub include_dev_info: bool,
}

impl<S, B> Service<ServiceRequest> for TraceIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let include_dev_info = self.include_dev_info;

        Box::pin(async move {
            let trace_id = req
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .and_then(TraceId::from_header_value)
                .unwrap_or_else(TraceId::generate);
            req.extensions_mut().insert(trace_id.clone());

            let res = service.call(req).await?;

            // 실패한 응답은 모두 요청의 추적 ID를 담은 AppErrorDto 본문으로 다시 만든다
            let rewritten = res.response().error().map(|error| {
                let respond = |app_error: &AppError| {
                    app_error.log(&trace_id);
                    app_error.to_http_response(&trace_id, include_dev_info)
                };
                match error.as_error::<AppError>() {
                    Some(app_error) => respond(app_error),
                    None => respond(&AppError::from_framework_error(error)),
                }
            });

            let mut res = match rewritten {
                Some(response) => {
                    let (req, _) = res.into_parts();
                    ServiceResponse::new(req, response).map_into_right_body()
                }
                None => res.map_into_left_body(),
            };

            if let Ok(value) = HeaderValue::from_str(trace_id.as_str()) {
                res.headers_mut()
                    .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
            }

            Ok(res)
        })
    }
}
