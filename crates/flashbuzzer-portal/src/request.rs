//! Request head parsing.
//!
//! The firmware reads the head off the socket; everything here works on the
//! received bytes so it can be exercised on the host.

use crate::headers::HttpMethod;

/// Parsed request line and the headers the portal cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHead<'a> {
    pub method: HttpMethod,
    /// Path without the query string
    pub path: &'a str,
    /// Raw query string, without the leading `?`
    pub query: Option<&'a str>,
    /// `Host` header value, if sent
    pub host: Option<&'a str>,
    pub content_length: u32,
}

impl<'a> RequestHead<'a> {
    /// Parse a request head (request line plus header lines).
    pub fn parse(head: &'a str) -> Option<Self> {
        let (method, target, headers) = parse_request_line(head)?;
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };

        Some(Self {
            method,
            path,
            query,
            host: find_header(headers, "host"),
            content_length: find_content_length(headers).unwrap_or(0),
        })
    }
}

/// Parse the request line from the header string.
///
/// Returns the method, request target, and rest of the header string.
pub fn parse_request_line(header_str: &str) -> Option<(HttpMethod, &str, &str)> {
    let line_end = header_str.find("\r\n").unwrap_or(header_str.len());
    let first_line = &header_str[..line_end];
    let mut parts: core::str::SplitWhitespace<'_> = first_line.split_whitespace();
    let method = parts.next().and_then(HttpMethod::parse)?;
    let target = parts.next()?;

    let rest = header_str.get(line_end + 2..).unwrap_or("");
    Some((method, target, rest))
}

/// Find the position right after the blank line ending the head.
pub fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|pos| pos + 4)
}

/// Find a header value by case-insensitive name.
pub fn find_header<'a>(headers: &'a str, name: &str) -> Option<&'a str> {
    headers.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim()
            .eq_ignore_ascii_case(name)
            .then_some(value.trim())
    })
}

/// Find the content length in the header string.
///
/// Returns the content length if found, otherwise None.
pub fn find_content_length(headers: &str) -> Option<u32> {
    find_header(headers, "content-length")?.parse::<u32>().ok()
}
