pub(crate) mod connection;
pub(crate) mod server;

pub(crate) use connection::HttpConnection;
pub(crate) use server::{HttpHandler, HttpServer};

#[derive(Debug)]
pub(crate) enum Error {
    Closed,
    Parse,
    /// Request head or body does not fit the connection buffers
    TooLarge,
    FormatHeaders,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let message = match self {
            Error::Closed => "connection closed",
            Error::Parse => "malformed request",
            Error::TooLarge => "request too large",
            Error::FormatHeaders => "failed to format headers",
        };
        f.write_str(message)
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_error: core::fmt::Error) -> Self {
        Error::FormatHeaders
    }
}

impl From<embassy_net::tcp::Error> for Error {
    fn from(err: embassy_net::tcp::Error) -> Self {
        match err {
            embassy_net::tcp::Error::ConnectionReset => Error::Closed,
        }
    }
}

pub(crate) type HttpResult = Result<(), Error>;
