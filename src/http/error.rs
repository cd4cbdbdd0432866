//! Internal fault taxonomy for calls that obtained no valid HTTP response.
//!
//! A peer answering with a non-2xx status is not a fault; that status passes
//! through to the caller unchanged. Faults cover only the cases where no HTTP
//! response exists at all. They never cross the public `get` boundary as
//! errors; the client renders them into the `"599"` sentinel [`Response`]
//! before returning.
//!
//! [`Response`]: super::response::Response

use std::error::Error;
use std::time::Duration;

use thiserror::Error;

/// Why a call produced no valid HTTP response.
#[derive(Debug, Error)]
pub(super) enum Fault {
    /// The transport failed before a valid response arrived: DNS failure,
    /// connection refused, malformed reply, broken body read.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The deadline elapsed and the in-flight request was abandoned.
    #[error("no response within {}ms", after.as_millis())]
    TimedOut { after: Duration },
}

impl Fault {
    /// Builds a transport fault keeping the full `source()` chain in the
    /// message, so the triggering error's own text survives into the
    /// response body.
    pub(super) fn transport(err: &(dyn Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Fault::Transport(message)
    }
}
