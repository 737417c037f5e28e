//! Request routing.
//!
//! Routes are matched on the path only, any method is accepted:
//! - `/`, `/generate_204` - configuration page
//! - `/submit` - apply query and body arguments, then back to `/`
//! - anything else - captive redirect or a plain text 404 listing

use alloc::format;
use alloc::string::String;
use core::net::Ipv4Addr;

use flashbuzzer_core::{KeyValueStore, ParameterRegistry};

use crate::captive::{is_ip_literal, portal_location};
use crate::form::{self, FormArgs};
use crate::headers::{
    ContentHeaders, ContentType, HttpMethod, ResponseHeaders, StatusCode, TextEncoding,
};
use crate::page::render_page;
use crate::request::RequestHead;
use crate::submission::{SubmissionReport, apply_submission};

/// Name of the text parameter shown as the page title.
pub const TITLE_PARAM: &str = "Title";
const DEFAULT_TITLE: &str = "Device Configuration";

/// A request with its body fully received.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub head: RequestHead<'a>,
    pub body: &'a [u8],
}

impl Request<'_> {
    /// Query arguments followed by urlencoded body arguments
    pub fn args(&self) -> FormArgs {
        let mut args = FormArgs::new();
        if let Some(query) = self.head.query {
            form::parse_into(query, &mut args);
        }
        match core::str::from_utf8(self.body) {
            Ok(body) => form::parse_into(body, &mut args),
            Err(_) => log::warn!("portal: request body is not UTF-8, ignoring"),
        }
        args
    }
}

/// A complete response, ready to be written to the socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: ContentType,
    pub location: Option<String>,
    pub no_cache: bool,
    pub body: String,
}

impl Response {
    fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: ContentType::TextHtml,
            location: None,
            no_cache: true,
            body,
        }
    }

    fn redirect(status: StatusCode, location: String) -> Self {
        Self {
            status,
            content_type: ContentType::TextPlain,
            location: Some(location),
            no_cache: false,
            body: String::new(),
        }
    }

    /// Plain text response
    pub fn text(status: StatusCode, body: String) -> Self {
        Self {
            status,
            content_type: ContentType::TextPlain,
            location: None,
            no_cache: false,
            body,
        }
    }

    /// Header block matching the body
    pub fn headers(&self) -> ResponseHeaders<'_> {
        let mut headers = ResponseHeaders::from_code(self.status).with_content(
            ContentHeaders::new(self.content_type)
                .with_text_encoding(TextEncoding::Utf8)
                .with_length(self.body.len()),
        );
        if let Some(location) = &self.location {
            headers = headers.with_location(location);
        }
        if self.no_cache {
            headers = headers.with_no_cache();
        }
        headers
    }
}

/// Captive configuration portal.
#[derive(Debug, Clone, Copy)]
pub struct Portal {
    address: Ipv4Addr,
}

impl Portal {
    /// Create a portal served at the access point `address`
    pub const fn new(address: Ipv4Addr) -> Self {
        Self { address }
    }

    pub const fn address(&self) -> Ipv4Addr {
        self.address
    }

    /// Answer one request.
    pub fn handle<S: KeyValueStore>(
        &self,
        request: &Request<'_>,
        registry: &mut ParameterRegistry<S>,
    ) -> Response {
        match request.head.path {
            "/" | "/generate_204" => self
                .captive_redirect(request)
                .unwrap_or_else(|| Self::page(registry)),
            "/submit" => {
                let report = Self::submit(request, registry);
                log::info!(
                    "portal: {} updated, {} ignored, {} rejected, {} unsaved",
                    report.updated.len(),
                    report.ignored.len(),
                    report.rejected.len(),
                    report.unsaved.len()
                );
                Response::redirect(303, String::from("/"))
            }
            _ => self
                .captive_redirect(request)
                .unwrap_or_else(|| Self::not_found(request)),
        }
    }

    fn captive_redirect(&self, request: &Request<'_>) -> Option<Response> {
        if is_ip_literal(request.head.host) {
            return None;
        }
        log::info!(
            "portal: redirecting request for {:?} to the portal",
            request.head.host
        );
        Some(Response::redirect(302, portal_location(self.address)))
    }

    fn page<S: KeyValueStore>(registry: &ParameterRegistry<S>) -> Response {
        let title = registry.get_text(TITLE_PARAM).unwrap_or(DEFAULT_TITLE);
        Response::html(render_page(title, &registry.group_view()))
    }

    fn submit<S: KeyValueStore>(
        request: &Request<'_>,
        registry: &mut ParameterRegistry<S>,
    ) -> SubmissionReport {
        let args = request.args();
        apply_submission(
            registry,
            args.iter().map(|(name, value)| (name.as_str(), value.as_str())),
        )
    }

    fn not_found(request: &Request<'_>) -> Response {
        let args = request.args();
        let body = not_found_listing(request.head.method, request.head.path, &args);
        Response::text(404, body)
    }
}

fn not_found_listing(method: HttpMethod, path: &str, args: &FormArgs) -> String {
    let mut out = format!(
        "404 Not Found\n\nURI: {}\nMethod: {}\nArguments: {}\n",
        path,
        method.as_str(),
        args.len()
    );
    for (name, value) in args {
        out.push_str(&format!(" {}: {}\n", name, value));
    }
    out
}
