//! The normalized outcome of a single peer call.

use std::fmt::Display;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;

use super::error::Fault;

/// Sentinel status meaning "no valid HTTP response was obtained".
///
/// Covers both transport faults and deadline expiry. Peer-scoring logic can
/// compare against this constant without caring which of the two happened.
pub const NO_RESPONSE: &str = "599";

/// What a peer call produced, whatever happened on the wire.
///
/// Always structurally complete: `code` is either the literal remote status
/// or [`NO_RESPONSE`], `body` and headers are always present. The value is
/// immutable once returned and owns no sockets or background tasks.
#[derive(Debug, Clone)]
pub struct Response {
    code: String,
    body: String,
    header: HeaderMap,
}

impl Response {
    /// The peer answered; any status, 4xx/5xx included, is a valid outcome.
    pub(super) fn completed(status: StatusCode, header: HeaderMap, body: String) -> Self {
        Self {
            code: status.as_str().to_string(),
            body,
            header,
        }
    }

    /// No valid HTTP response was obtained; the fault text becomes the body.
    pub(super) fn no_response(fault: &Fault) -> Self {
        Self {
            code: NO_RESPONSE.to_string(),
            body: fault.to_string(),
            header: HeaderMap::new(),
        }
    }

    /// Three-digit status string: the remote status or [`NO_RESPONSE`].
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Response payload, or a human-readable failure description on
    /// [`NO_RESPONSE`] outcomes.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Case-insensitive header lookup. Absent keys answer `None`; on
    /// [`NO_RESPONSE`] outcomes every key is absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header.get(name).and_then(|value| value.to_str().ok())
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let preview: String = self.body.chars().take(120).collect();
        write!(f, "{}: {}", self.code, preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use std::time::Duration;

    #[test]
    fn looks_headers_up_case_insensitively() {
        let mut headers = HeaderMap::new();
        headers.insert("x-zold-score", HeaderValue::from_static("3/12"));
        let res = Response::completed(StatusCode::OK, headers, String::new());
        assert_eq!(Some("3/12"), res.header("X-Zold-Score"));
        assert_eq!(Some("3/12"), res.header("x-zold-score"));
        assert_eq!(None, res.header("nothing"));
    }

    #[test]
    fn renders_fault_text_into_body() {
        let res = Response::no_response(&Fault::Transport("Intentionally".to_string()));
        assert_eq!(NO_RESPONSE, res.code());
        assert!(res.body().contains("Intentionally"));
        assert_eq!(None, res.header("nothing"));
    }

    #[test]
    fn displays_code_and_body_preview() {
        let res = Response::no_response(&Fault::TimedOut {
            after: Duration::from_secs(1),
        });
        let text = res.to_string();
        assert!(text.starts_with("599: "));
        assert!(text.contains("no response within"));
    }
}
