use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, ReadHalf, WriteHalf};
use tracing::debug;

use crate::app::App;
use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::response::Response;

const READ_BUFFER_SIZE: usize = 4096;

/// One accepted client connection.
///
/// Serves exactly one request: the first chunk read is taken as the whole
/// request, a single response is written, and the connection is closed.
/// Requests split across several reads are not reassembled.
pub struct Connection<S> {
    reader: ReadHalf<S>,
    writer: Option<WriteHalf<S>>,
    app: Arc<App>,
    buffer: BytesMut,
    state: ConnectionState,
}

#[derive(Debug)]
pub enum ConnectionState {
    Reading,
    Dispatching(Request),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    pub fn new(stream: S, app: Arc<App>) -> Self {
        let (reader, writer) = tokio::io::split(stream);
        Self {
            reader,
            writer: Some(writer),
            app,
            buffer: BytesMut::with_capacity(READ_BUFFER_SIZE),
            state: ConnectionState::Reading,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    if let Some(req) = self.read_request().await? {
                        self.state = ConnectionState::Dispatching(req);
                    }
                }

                ConnectionState::Dispatching(req) => {
                    let Some(writer) = self.writer.take() else {
                        anyhow::bail!("connection already answered");
                    };
                    debug!(method = %req.method, target = %req.target, "Handling request");

                    let res = Response::new(writer);
                    self.app.handle(req, res).await?;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads one chunk and parses it. `None` means the client closed the
    /// connection without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let n = self.reader.read_buf(&mut self.buffer).await?;

        if n == 0 {
            return Ok(None);
        }

        let request = parse_http_request(&self.buffer);
        self.buffer.clear();
        Ok(Some(request))
    }
}
