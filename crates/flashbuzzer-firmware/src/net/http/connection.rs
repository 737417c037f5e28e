use embassy_net::tcp::TcpSocket;
use embedded_io_async::Write as _;
use flashbuzzer_portal::request::find_head_end;
use flashbuzzer_portal::{Request, RequestHead, Response, TargetWriter as _};
use heapless::Vec;

use super::{Error, HttpResult};

const HEADER_BUFFER_SIZE: usize = 1024;
const BODY_BUFFER_SIZE: usize = 1024;
const BODY_RX_CHUNK_SIZE: usize = 256;
const STREAM_CHUNK_SIZE: usize = 1024;

/// HTTP connection context
///
/// Holds one request: the head is read eagerly, the body on demand.
pub(crate) struct HttpConnection<'a> {
    socket: TcpSocket<'a>,
    content_length: u32,
    header_end: usize,
    header_buf: Vec<u8, HEADER_BUFFER_SIZE>,
    body_buf: Vec<u8, BODY_BUFFER_SIZE>,
}

impl<'a> HttpConnection<'a> {
    /// Create a new HTTP connection from a socket.
    pub(crate) async fn from_socket(mut socket: TcpSocket<'a>) -> Result<Self, Error> {
        let mut header_buf = Vec::<u8, HEADER_BUFFER_SIZE>::new();
        header_buf
            .resize_default(HEADER_BUFFER_SIZE)
            .map_err(|()| Error::TooLarge)?;
        let (header_end, header_len) =
            read_heading(header_buf.as_mut_slice(), &mut socket).await?;
        header_buf.truncate(header_len);

        let content_length = parse_head(&header_buf[..header_end])?.content_length;

        Ok(Self {
            socket,
            content_length,
            header_end,
            header_buf,
            body_buf: Vec::new(),
        })
    }

    /// Receive the request body announced by `Content-Length`
    pub(crate) async fn read_body(&mut self) -> HttpResult {
        let length = self.content_length as usize;
        if length > BODY_BUFFER_SIZE {
            return Err(Error::TooLarge);
        }

        self.body_buf.clear();
        let trailer = &self.header_buf[self.header_end..];
        let take = trailer.len().min(length);
        self.body_buf
            .extend_from_slice(&trailer[..take])
            .map_err(|()| Error::TooLarge)?;

        while self.body_buf.len() < length {
            let mut chunk = [0u8; BODY_RX_CHUNK_SIZE];
            let wanted = (length - self.body_buf.len()).min(BODY_RX_CHUNK_SIZE);
            let n = self.socket.read(&mut chunk[..wanted]).await?;
            if n == 0 {
                return Err(Error::Closed);
            }
            self.body_buf
                .extend_from_slice(&chunk[..n])
                .map_err(|()| Error::TooLarge)?;
        }
        Ok(())
    }

    /// The received request, body included once [`Self::read_body`] is done
    pub(crate) fn request(&self) -> Result<Request<'_>, Error> {
        Ok(Request {
            head: parse_head(&self.header_buf[..self.header_end])?,
            body: self.body_buf.as_slice(),
        })
    }

    /// Write a complete response and close the connection
    pub(crate) async fn respond(mut self, response: &Response) -> HttpResult {
        self.header_buf.clear();
        response.headers().write_to(&mut self.header_buf)?;
        self.socket.write_all(self.header_buf.as_slice()).await?;

        for chunk in response.body.as_bytes().chunks(STREAM_CHUNK_SIZE) {
            self.socket.write_all(chunk).await?;
        }
        self.socket.flush().await?;

        self.socket.close();
        self.socket.flush().await?;
        Ok(())
    }
}

fn parse_head(raw: &[u8]) -> Result<RequestHead<'_>, Error> {
    let text = core::str::from_utf8(raw).map_err(|_| Error::Parse)?;
    RequestHead::parse(text).ok_or(Error::Parse)
}

/// Read from the socket until the blank line ending the head.
///
/// Returns the head length and the number of bytes received, which may
/// include the beginning of the body.
async fn read_heading(
    buf: &mut [u8],
    socket: &mut TcpSocket<'_>,
) -> Result<(usize, usize), Error> {
    let mut header_len = 0;
    loop {
        if header_len >= buf.len() {
            return Err(Error::TooLarge);
        }
        let n = socket.read(&mut buf[header_len..]).await?;
        if n == 0 {
            return Err(Error::Closed);
        }
        // the terminator may straddle two reads
        let scan_from = header_len.saturating_sub(3);
        header_len += n;
        if let Some(end) = find_head_end(&buf[scan_from..header_len]) {
            return Ok((scan_from + end, header_len));
        }
    }
}
