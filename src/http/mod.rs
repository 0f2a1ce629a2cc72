//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 layer written directly against tokio's
//! byte streams: one request per connection, no keep-alive.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection state machine that reads, dispatches and closes
//! - **`parser`**: request-line tokenizing and route path normalization
//! - **`request`**: the parsed request
//! - **`response`**: response bound to its connection, with status phrases
//! - **`writer`**: serializes and writes a response to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read one chunk of request data
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Middleware chain, then route handler
//!        └──────┬───────────┘
//!               │ Response sent (connection shut down)
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! A client that closes before sending anything goes straight from
//! `Reading` to `Closed`.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
