use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes the status line and the three headers, up to and including the
/// blank line that ends the header block.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    format!(
        "{} {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase(),
        resp.content_type,
        resp.content_length(),
    )
    .into_bytes()
}

pub struct ResponseWriter {
    head: Vec<u8>,
    body: Option<Bytes>,
}

impl ResponseWriter {
    /// Prepares a response for writing. With `head_only` the body is dropped
    /// while Content-Length keeps the real size.
    pub fn new(response: &Response, head_only: bool) -> Self {
        Self {
            head: serialize_head(response),
            body: (!head_only).then(|| response.body.clone()),
        }
    }

    /// Writes the header block, then the body.
    ///
    /// Stops at the first failed or zero-length write; nothing is retried.
    pub async fn write_to_stream<W>(&self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        send_all(stream, &self.head).await?;

        if let Some(body) = &self.body {
            send_all(stream, body).await?;
        }

        stream.flush().await?;
        Ok(())
    }
}

async fn send_all<W>(stream: &mut W, buf: &[u8]) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;

    while written < buf.len() {
        let n = stream.write(&buf[written..]).await?;

        if n == 0 {
            return Err(anyhow::anyhow!("connection closed while writing"));
        }

        written += n;
    }

    Ok(())
}
