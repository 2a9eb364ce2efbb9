//! Session security token handling.
//!
//! The original read the CSRF cookie from ambient document state inside an
//! AJAX prefilter. Here the token is sourced once when the form session
//! starts and passed explicitly to anything that builds an outbound request;
//! no code path reads it ad hoc.

use serde::{Deserialize, Serialize};

/// Header the backend expects the token under.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// An anti-forgery token obtained at session start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityToken(String);

impl SecurityToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A request the host transport should send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// Builds a request for `url`, attaching the security token only for
/// same-origin (relative) URLs. Absolute URLs go elsewhere and must never
/// carry the token.
pub fn authorized_request(
    url: &str,
    token: &SecurityToken,
) -> OutboundRequest {
    let cross_origin = url.starts_with("http:") || url.starts_with("https:");
    let headers = if cross_origin {
        Vec::new()
    } else {
        vec![(CSRF_HEADER.to_string(), token.as_str().to_string())]
    };

    OutboundRequest {
        url: url.to_string(),
        headers,
    }
}
