//! Route table, middleware chain and dispatcher.
//!
//! An [`App`] is configured once (routes, middleware) and then moved behind
//! an `Arc` by [`App::serve`]. From then on it is only read, so every
//! connection task can share it without locking.
//!
//! # Example
//!
//! ```no_run
//! use webby::app::App;
//! use webby::middleware::serve_static;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut app = App::new();
//!     app.use_middleware(serve_static("public"));
//!     app.get("/", |_req, mut res| async move {
//!         res.status(200).send("<h1>hello</h1>").await
//!     });
//!     app.listen(3000, Some("127.0.0.1")).await
//! }
//! ```

pub mod handler;

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::http::parser::normalize_path;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::server::listener;

pub use handler::{Handler, Middleware};

/// Body sent when no route matches.
pub const NOT_FOUND_BODY: &str = "Page not found.";

/// Host used by [`App::listen`] when none is given.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Builds the key a route is stored under: uppercased method, a space, and
/// the normalized path.
///
/// ```
/// # use webby::app::route_key;
/// assert_eq!(route_key("get", "/Gallery"), "GET /gallery");
/// ```
pub fn route_key(method: &str, path: &str) -> String {
    format!("{} {}", method.to_uppercase(), normalize_path(path))
}

/// A web application: routes plus an ordered middleware chain.
#[derive(Default)]
pub struct App {
    routes: HashMap<String, Arc<dyn Handler>>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `method` and `path`. Registering the same
    /// key again replaces the earlier handler.
    pub fn route<H: Handler>(&mut self, method: &str, path: &str, handler: H) -> &mut Self {
        let key = route_key(method, path);
        if self.routes.insert(key.clone(), Arc::new(handler)).is_some() {
            debug!(route = %key, "Replaced existing route");
        }
        self
    }

    /// Registers an async closure for `GET path`.
    pub fn get<F, Fut>(&mut self, path: &str, f: F) -> &mut Self
    where
        F: Fn(Request, Response) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.route("GET", path, f)
    }

    /// Appends a middleware to the chain. Middleware runs in registration
    /// order before routing.
    pub fn use_middleware<M: Middleware>(&mut self, middleware: M) -> &mut Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Replaces the whole chain with `middleware`, or clears it with `None`.
    pub fn set_middleware<M: Middleware>(&mut self, middleware: Option<M>) -> &mut Self {
        self.middleware.clear();
        if let Some(m) = middleware {
            self.middleware.push(Arc::new(m));
        }
        self
    }

    pub fn has_route(&self, method: &str, path: &str) -> bool {
        self.routes.contains_key(&route_key(method, path))
    }

    /// Runs the middleware chain, ending in [`dispatch`](App::dispatch).
    pub async fn handle(self: &Arc<Self>, req: Request, res: Response) -> anyhow::Result<()> {
        Next::new(Arc::clone(self)).run(req, res).await
    }

    /// Looks the request up in the route table and invokes its handler, or
    /// answers `404 Page not found.` when there is none.
    pub async fn dispatch(&self, req: Request, mut res: Response) -> anyhow::Result<()> {
        let key = route_key(&req.method, &req.path);

        match self.routes.get(&key) {
            Some(handler) => {
                debug!(route = %key, "Dispatching to handler");
                handler.call(req, res).await
            }
            None => {
                debug!(route = %key, "No route matched");
                res.set("Content-Type", "text/plain");
                res.status(404).send(NOT_FOUND_BODY).await
            }
        }
    }

    /// Binds `host:port` (default host `0.0.0.0`) and serves forever.
    pub async fn listen(self, port: u16, host: Option<&str>) -> anyhow::Result<()> {
        let addr = format!("{}:{}", host.unwrap_or(DEFAULT_HOST), port);
        self.listen_on(&addr).await
    }

    pub async fn listen_on(self, addr: &str) -> anyhow::Result<()> {
        let listener = TcpListener::bind(addr).await?;
        info!("Listening on {}", listener.local_addr()?);
        self.serve(listener).await
    }

    /// Accepts connections from an already bound listener.
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        listener::run(Arc::new(self), listener).await
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut routes: Vec<_> = self.routes.keys().collect();
        routes.sort();
        f.debug_struct("App")
            .field("routes", &routes)
            .field("middleware", &self.middleware.len())
            .finish()
    }
}

/// The rest of the request pipeline, handed to each middleware.
///
/// Running it passes the request to the next middleware, or to route
/// dispatch once the chain is exhausted.
#[derive(Clone)]
pub struct Next {
    app: Arc<App>,
    index: usize,
}

impl Next {
    fn new(app: Arc<App>) -> Self {
        Self { app, index: 0 }
    }

    pub async fn run(self, req: Request, res: Response) -> anyhow::Result<()> {
        match self.app.middleware.get(self.index).cloned() {
            Some(middleware) => {
                let next = Next {
                    app: Arc::clone(&self.app),
                    index: self.index + 1,
                };
                middleware.call(req, res, next).await
            }
            None => self.app.dispatch(req, res).await,
        }
    }
}

impl fmt::Debug for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("index", &self.index)
            .field("remaining", &self.app.middleware.len().saturating_sub(self.index))
            .finish()
    }
}
