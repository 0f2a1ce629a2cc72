//! Middleware shipped with the crate.
//!
//! Both units follow the same contract as user middleware: answer the
//! request, or pass it on with [`Next::run`](crate::app::Next::run).

pub mod logger;
pub mod static_files;

pub use logger::RequestLogger;
pub use static_files::{ServeStatic, serve_static};
