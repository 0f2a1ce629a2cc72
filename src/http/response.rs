use std::collections::HashMap;
use std::fmt;

use anyhow::Context;
use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::writer::{ResponseWriter, serialize_response};

/// Version written on every status line.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Content type applied by [`Response::send`] when none was set.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

type Conn = Box<dyn AsyncWrite + Send + Unpin>;

/// Returns the standard reason phrase for `code`.
///
/// Codes outside the table yield an empty phrase, so the status line reads
/// e.g. `HTTP/1.1 299 \r\n`.
///
/// # Example
///
/// ```
/// # use webby::http::response::reason_phrase;
/// assert_eq!(reason_phrase(200), "OK");
/// assert_eq!(reason_phrase(404), "Not Found");
/// assert_eq!(reason_phrase(299), "");
/// ```
pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "",
    }
}

/// An HTTP response bound to the connection it will be written to.
///
/// A handler receives exactly one `Response` per connection. Headers and
/// status accumulate until [`send`](Response::send), which writes the whole
/// response and closes the connection. Any later `send` fails.
pub struct Response {
    status_code: u16,
    version: String,
    headers: HashMap<String, String>,
    body: Bytes,
    conn: Option<Conn>,
}

impl Response {
    /// Creates a `200 OK` response that will be written to `conn`.
    pub fn new<W>(conn: W) -> Self
    where
        W: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            status_code: 200,
            version: HTTP_VERSION.to_string(),
            headers: HashMap::new(),
            body: Bytes::new(),
            conn: Some(Box::new(conn)),
        }
    }

    /// Adds or replaces a header. Names are stored exactly as given.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Sets the status code and returns the same response for chaining.
    ///
    /// ```ignore
    /// res.status(404).send("Page not found.").await?;
    /// ```
    pub fn status(&mut self, code: u16) -> &mut Self {
        self.status_code = code;
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Whether the response has been written and the connection closed.
    pub fn is_finished(&self) -> bool {
        self.conn.is_none()
    }

    /// Status line including the trailing CRLF, e.g. `HTTP/1.1 200 OK\r\n`.
    pub fn status_line(&self) -> String {
        format!(
            "{} {} {}\r\n",
            self.version,
            self.status_code,
            reason_phrase(self.status_code)
        )
    }

    /// Writes the response and closes the connection.
    ///
    /// `Content-Type` defaults to `text/html` when unset. The body is written
    /// verbatim; no `Content-Length` is added.
    pub async fn send(&mut self, body: impl Into<Bytes>) -> anyhow::Result<()> {
        let mut conn = self
            .conn
            .take()
            .context("response already sent")?;

        self.body = body.into();
        self.headers
            .entry("Content-Type".to_string())
            .or_insert_with(|| DEFAULT_CONTENT_TYPE.to_string());

        let buffer = serialize_response(
            &self.version,
            self.status_code,
            reason_phrase(self.status_code),
            &self.headers,
            &self.body,
        );
        let mut writer = ResponseWriter::new(buffer);
        writer.write_to_stream(&mut conn).await?;

        conn.shutdown().await?;
        Ok(())
    }

    /// Sends a redirect to `location` with the given status (301, 302, ...).
    pub async fn redirect(&mut self, code: u16, location: &str) -> anyhow::Result<()> {
        self.set("Location", location);
        self.status(code)
            .send(format!("Redirecting to {location}"))
            .await
    }

    /// Closes the connection without writing anything. Calling it again, or
    /// after [`send`](Response::send), does nothing.
    pub async fn close(&mut self) -> anyhow::Result<()> {
        if let Some(mut conn) = self.conn.take() {
            conn.shutdown().await?;
        }
        Ok(())
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status_code", &self.status_code)
            .field("version", &self.version)
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .field("finished", &self.is_finished())
            .finish()
    }
}
