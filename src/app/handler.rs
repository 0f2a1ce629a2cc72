use std::future::Future;

use async_trait::async_trait;

use crate::app::Next;
use crate::http::request::Request;
use crate::http::response::Response;

/// Produces the response for a matched route.
///
/// Implemented for any `Fn(Request, Response) -> impl Future<Output = anyhow::Result<()>>`,
/// so plain async closures can be registered directly.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    async fn call(&self, req: Request, res: Response) -> anyhow::Result<()>;
}

#[async_trait]
impl<F, Fut> Handler for F
where
    F: Fn(Request, Response) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn call(&self, req: Request, res: Response) -> anyhow::Result<()> {
        (self)(req, res).await
    }
}

/// Intercepts a request before routing.
///
/// A middleware either answers the request itself through the `Response`,
/// or hands both on with [`Next::run`]. Not calling `next` ends processing.
#[async_trait]
pub trait Middleware: Send + Sync + 'static {
    async fn call(&self, req: Request, res: Response, next: Next) -> anyhow::Result<()>;
}

#[async_trait]
impl<F, Fut> Middleware for F
where
    F: Fn(Request, Response, Next) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn call(&self, req: Request, res: Response, next: Next) -> anyhow::Result<()> {
        (self)(req, res, next).await
    }
}
