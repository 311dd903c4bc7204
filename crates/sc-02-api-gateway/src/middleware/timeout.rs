//! Timeout middleware.
//!
//! Bounds how long a client waits. Work already handed to the blocking pool
//! (key generation, signing) is not cancelled and still completes.

use crate::domain::error::ApiError;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tower::{Layer, Service};
use tracing::warn;

/// Answers 408 when the inner service takes longer than `limit`.
#[derive(Clone, Copy, Debug)]
pub struct TimeoutLayer {
    limit: Duration,
}

impl TimeoutLayer {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }
}

impl<S> Layer<S> for TimeoutLayer {
    type Service = Timeout<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Timeout {
            inner,
            limit: self.limit,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Timeout<S> {
    inner: S,
    limit: Duration,
}

impl<S, B> Service<Request<B>> for Timeout<S>
where
    S: Service<Request<B>, Response = Response>,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let limit = self.limit;
        let path = req.uri().path().to_owned();
        let fut = self.inner.call(req);

        Box::pin(async move {
            tokio::time::timeout(limit, fut).await.unwrap_or_else(|_| {
                let limit_ms = limit.as_millis() as u64;
                warn!(%path, limit_ms, "Request timed out");
                Ok(ApiError::timeout(format!("Request exceeded {limit_ms}ms timeout")).into_response())
            })
        })
    }
}
