use core::fmt::Write;

pub type StatusCode = u16;

fn reason_phrase(code: StatusCode) -> &'static str {
    match code {
        200 => "OK",
        302 => "Found",
        303 => "See Other",
        404 => "Not Found",
        413 => "Request Entity Too Large",
        _ => "Unknown",
    }
}

/// HTTP Content Type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    TextHtml,
    TextPlain,
}

impl ContentType {
    /// Convert the content type to a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::TextHtml => "text/html",
            ContentType::TextPlain => "text/plain",
        }
    }
}

/// Text Encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
}

impl TextEncoding {
    /// Convert the text encoding to a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
        }
    }
}

/// HTTP socket connection policy.
#[derive(Debug, Clone, Copy)]
enum ConnectionPolicy {
    Close,
}

impl ConnectionPolicy {
    fn as_str(self) -> &'static str {
        match self {
            ConnectionPolicy::Close => "close",
        }
    }
}

/// Serializes a header block into a formatter.
pub trait TargetWriter {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error>;
}

/// HTTP Content Headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentHeaders {
    content_type: ContentType,
    content_length: Option<usize>,
    text_encoding: Option<TextEncoding>,
}

impl ContentHeaders {
    /// Create a new content headers with a content type.
    pub const fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            content_length: None,
            text_encoding: None,
        }
    }

    /// Set the content length.
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.content_length = Some(length);
        self
    }

    /// Set the text encoding.
    #[must_use]
    pub const fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.text_encoding = Some(text_encoding);
        self
    }
}

impl TargetWriter for ContentHeaders {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        write!(writer, "Content-Type: {}", self.content_type.as_str())?;
        if let Some(text_encoding) = &self.text_encoding {
            write!(writer, "; charset={}", text_encoding.as_str())?;
        }
        write!(writer, "\r\n")?;
        if let Some(content_length) = self.content_length {
            write!(writer, "Content-Length: {}\r\n", content_length)?;
        }
        Ok(())
    }
}

/// Response Headers.
#[derive(Debug, Clone, Copy)]
pub struct ResponseHeaders<'a> {
    status: StatusCode,
    connection: ConnectionPolicy,
    location: Option<&'a str>,
    no_cache: bool,
    content: Option<ContentHeaders>,
}

impl<'a> ResponseHeaders<'a> {
    /// Create empty response headers.
    pub const fn empty() -> Self {
        Self {
            status: 0,
            connection: ConnectionPolicy::Close,
            location: None,
            no_cache: false,
            content: None,
        }
    }

    /// Create empty response headers with a status code.
    pub const fn from_code(code: StatusCode) -> Self {
        Self::empty().with_code(code)
    }

    /// Set the success status code.
    pub const fn success() -> Self {
        Self::from_code(200)
    }

    /// Redirect to `location` with the given 3xx status code.
    pub const fn redirect(code: StatusCode, location: &'a str) -> Self {
        Self::from_code(code).with_location(location)
    }

    /// Set the content headers.
    #[must_use]
    pub const fn with_content(mut self, content: ContentHeaders) -> Self {
        self.content = Some(content);
        self
    }

    /// Set the status code.
    #[must_use]
    pub const fn with_code(mut self, code: StatusCode) -> Self {
        self.status = code;
        self
    }

    /// Set the `Location` header.
    #[must_use]
    pub const fn with_location(mut self, location: &'a str) -> Self {
        self.location = Some(location);
        self
    }

    /// Forbid caching by the client.
    #[must_use]
    pub const fn with_no_cache(mut self) -> Self {
        self.no_cache = true;
        self
    }
}

impl TargetWriter for ResponseHeaders<'_> {
    /// Write the response headers to a writer.
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        let reason = reason_phrase(self.status);
        write!(writer, "HTTP/1.1 {} {}\r\n", self.status, reason)?;
        if let Some(location) = self.location {
            write!(writer, "Location: {}\r\n", location)?;
        }
        if self.no_cache {
            write!(writer, "Cache-Control: no-cache, no-store, must-revalidate\r\n")?;
            write!(writer, "Pragma: no-cache\r\n")?;
            write!(writer, "Expires: -1\r\n")?;
        }
        if let Some(content) = &self.content {
            content.write_to(writer)?;
        }

        write!(writer, "Connection: {}\r\n", self.connection.as_str())?;
        write!(writer, "\r\n")?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            "OPTIONS" => HttpMethod::Options,
            "HEAD" => HttpMethod::Head,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }
}
