use std::time::Instant;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::app::{Middleware, Next};
use crate::http::request::Request;
use crate::http::response::Response;

/// Logs every request and how long the rest of the pipeline took.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogger;

#[async_trait]
impl Middleware for RequestLogger {
    async fn call(&self, req: Request, res: Response, next: Next) -> anyhow::Result<()> {
        let method = req.method.clone();
        let target = req.target.clone();
        let started = Instant::now();

        let result = next.run(req, res).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(()) => info!(%method, %target, elapsed_ms, "Request handled"),
            Err(e) => warn!(%method, %target, elapsed_ms, error = %e, "Request failed"),
        }
        result
    }
}
