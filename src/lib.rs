//! Webby - a tiny web framework over raw TCP
//!
//! Request parsing, routing, middleware and static file serving written
//! directly against tokio sockets.

pub mod app;
pub mod config;
pub mod http;
pub mod middleware;
pub mod server;

pub use app::{App, Handler, Middleware, Next};
pub use http::request::Request;
pub use http::response::Response;
