//! The fixed response returned for every request

use bytes::Bytes;
use http::header::{self, HeaderValue};
use http::StatusCode;
use http_body_util::Full;

/// The response body, byte for byte
pub const BODY: &str = "Hello aws cloud demos!!ver26";

/// The response content type
pub const CONTENT_TYPE: &str = "text/plain";

/// Pre-rendered response shared by every connection
///
/// Built once at startup and cloned per request; the body is a static
/// `Bytes` so clones never copy the payload.
#[derive(Debug, Clone)]
pub struct FixedResponse {
    status: StatusCode,
    content_type: HeaderValue,
    body: Bytes,
}

impl FixedResponse {
    /// The constant 200 text/plain response
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            content_type: HeaderValue::from_static(CONTENT_TYPE),
            body: Bytes::from_static(BODY.as_bytes()),
        }
    }

    /// Status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Content type header value
    pub fn content_type(&self) -> &HeaderValue {
        &self.content_type
    }

    /// Body as a string
    pub fn body_str(&self) -> &str {
        // body is always built from a str constant
        std::str::from_utf8(&self.body).unwrap_or_default()
    }

    /// Render as a hyper response
    pub fn to_hyper(&self) -> hyper::Response<Full<Bytes>> {
        let mut res = hyper::Response::new(Full::new(self.body.clone()));
        *res.status_mut() = self.status;
        res.headers_mut()
            .insert(header::CONTENT_TYPE, self.content_type.clone());
        res
    }
}

impl Default for FixedResponse {
    fn default() -> Self {
        Self::new()
    }
}
