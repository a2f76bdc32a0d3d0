use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::fs::StaticFiles;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// One accepted client: exactly one request, one response, then close.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    read_limit: usize,
    files: Arc<StaticFiles>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Result<Request, ParseError>),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, files: Arc<StaticFiles>, read_limit: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(read_limit),
            read_limit,
            files,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(parsed) => ConnectionState::Processing(parsed),
                        None => {
                            tracing::debug!("Client closed without sending a request");
                            ConnectionState::Closed
                        }
                    };
                }

                ConnectionState::Processing(parsed) => {
                    let response = match parsed {
                        Ok(req) => self.files.respond(req).await,
                        Err(e) => {
                            tracing::warn!(error = %e, "Rejecting unparseable request");
                            Response::bad_request()
                        }
                    };

                    tracing::info!("Outgoing response:\n{}", response);
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.discard_pending();
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until a non-blank request line is complete, the peer stops
    /// sending, or `read_limit` bytes have arrived. Anything past the limit
    /// is never parsed.
    ///
    /// Returns `None` only if the client closed without sending a byte.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Result<Request, ParseError>>> {
        let mut temp = [0u8; 1024];

        while self.buffer.len() < self.read_limit && !has_request_line(&self.buffer) {
            let want = (self.read_limit - self.buffer.len()).min(temp.len());
            let n = self.stream.read(&mut temp[..want]).await?;

            if n == 0 {
                break;
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }

        if self.buffer.is_empty() {
            return Ok(None);
        }

        tracing::info!(
            "Incoming request:\n{}",
            String::from_utf8_lossy(&self.buffer).trim()
        );

        Ok(Some(parse_request(&self.buffer)))
    }

    /// Throws away input that has already arrived but was never read, so
    /// closing the socket sends FIN rather than RST.
    fn discard_pending(&mut self) {
        let mut sink = [0u8; 1024];
        while let Ok(n) = self.stream.try_read(&mut sink) {
            if n == 0 {
                break;
            }
        }
    }
}

/// True once the buffer holds a line terminator after some non-blank byte.
fn has_request_line(buf: &[u8]) -> bool {
    buf.iter()
        .position(|b| !b.is_ascii_whitespace())
        .is_some_and(|start| buf[start..].contains(&b'\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_do_not_complete_a_request() {
        assert!(!has_request_line(b""));
        assert!(!has_request_line(b"\r\n\r\n"));
        assert!(!has_request_line(b"\r\nGET / HTTP/1.1"));
        assert!(has_request_line(b"\r\nGET / HTTP/1.1\r\n"));
    }
}
