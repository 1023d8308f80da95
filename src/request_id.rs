use axum::http::HeaderValue;
use std::fmt;
use uuid::Uuid;

/// Response header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Identifier attached to a single prime-check request.
///
/// Generated when the request enters the handler, logged with every event of
/// that request and returned to the caller in [`REQUEST_ID_HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new unique request id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the request id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Header value form of the id.
    ///
    /// UUID text is plain ASCII, so conversion only fails for ids built
    /// from arbitrary strings.
    pub fn header_value(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.0).ok()
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
