use crate::http::parser::{normalize_path, parse_http_request};

/// Represents a parsed HTTP request from a client.
///
/// Only the request line is kept. Any headers or body that arrive with it
/// are ignored, which is a known limitation of this server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method as sent by the client (e.g. "GET")
    pub method: String,
    /// The request target exactly as received (e.g. "/img/Animal1.jpg?size=2")
    pub target: String,
    /// Normalized path used for routing (e.g. "/img")
    pub path: String,
}

impl Request {
    /// Builds a request from a method token and a raw request target.
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Self {
        let target = target.into();
        let path = normalize_path(&target);
        Self {
            method: method.into(),
            target,
            path,
        }
    }

    /// Parses a request from the raw bytes of one inbound message.
    ///
    /// # Example
    ///
    /// ```
    /// # use webby::http::request::Request;
    /// let req = Request::from_bytes(b"GET /Gallery?x=1 HTTP/1.1\r\n\r\n");
    /// assert_eq!(req.method, "GET");
    /// assert_eq!(req.path, "/gallery");
    /// ```
    pub fn from_bytes(buf: &[u8]) -> Self {
        parse_http_request(buf)
    }

    /// The request target with any query string or fragment removed.
    pub fn target_path(&self) -> &str {
        self.target
            .split(['?', '#'])
            .next()
            .unwrap_or("")
    }
}
