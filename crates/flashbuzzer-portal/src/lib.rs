#![no_std]

//! Captive configuration portal
//!
//! Presents the parameter registry as a web page and applies submitted
//! forms back to it. Socket handling lives in the firmware; this crate turns
//! a received request into a complete response.
//!
//! Architecture layers:
//! - `request` - Request line and header parsing
//! - `headers` - Response header formatting
//! - `form` - Urlencoded argument decoding
//! - `captive` - Captive portal redirect rule
//! - `submission` - Applying arguments to the registry
//! - `page` - HTML page rendering
//! - `router` - Route dispatch producing a [`Response`]

extern crate alloc;

pub mod captive;
pub mod form;
pub mod headers;
pub mod page;
pub mod request;
pub mod router;
pub mod submission;

pub use headers::{
    ContentHeaders, ContentType, HttpMethod, ResponseHeaders, StatusCode, TargetWriter,
    TextEncoding,
};
pub use request::RequestHead;
pub use router::{Portal, Request, Response, TITLE_PARAM};
pub use submission::{SubmissionReport, apply_submission};
