//! Request outcome logging.
//!
//! Logs one line per request with method, path and status. Failures keep
//! the method and URL next to the error so the translator's own log line
//! (which has no request context) can be correlated.

use std::future::{ready, Ready};
use std::pin::Pin;
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures_util::Future;

pub struct RequestLog;

impl<S, B> Transform<S, ServiceRequest> for RequestLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLogMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestLogMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let method = req.method().to_string();
        let path = req.path().to_string();

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    let status = res.status();
                    if status.is_server_error() {
                        tracing::error!(%method, %path, status = status.as_u16(), "request failed");
                    } else if status.is_client_error() {
                        tracing::warn!(%method, %path, status = status.as_u16(), "request rejected");
                    } else {
                        tracing::info!(%method, %path, status = status.as_u16(), "request completed");
                    }
                    Ok(res)
                }
                Err(err) => {
                    tracing::error!(%method, %path, error = %err, "request failed");
                    Err(err)
                }
            }
        })
    }
}
