use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::http::parser::parse_request_line;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::routes::Router;

/// Size of the single read that must hold the request line.
pub const READ_BUFFER_SIZE: usize = 4096;

pub struct Connection<S> {
    stream: S,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            stream,
            router,
            state: ConnectionState::Reading,
        }
    }

    /// Runs exactly one request/response exchange and closes the stream.
    ///
    /// Socket failures end the exchange quietly; they are not application errors.
    pub async fn run(mut self) {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    if let Some(req) = self.read_request().await {
                        self.state = ConnectionState::Processing(req);
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = self.router.handle(&req).await;
                    debug!(
                        method = req.method.as_str(),
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Handled request"
                    );

                    let writer = ResponseWriter::new(&response, req.method.is_head());
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    if let Err(e) = writer.write_to_stream(&mut self.stream).await {
                        debug!("Failed to send response: {}", e);
                    }
                }

                ConnectionState::Closed => break,
            }
        }

        // No keep-alive: the peer sees EOF after one response.
        if let Err(e) = self.stream.shutdown().await {
            debug!("Failed to shut down connection: {}", e);
        }
    }

    /// Performs the single read a request gets. `None` means the peer sent
    /// nothing or the read failed.
    pub async fn read_request(&mut self) -> Option<Request> {
        let mut buf = [0u8; READ_BUFFER_SIZE];

        match self.stream.read(&mut buf).await {
            Ok(0) => None,
            Ok(n) => Some(parse_request_line(&buf[..n])),
            Err(e) => {
                debug!("Failed to read request: {}", e);
                None
            }
        }
    }
}
