//! Node identity advertised to peers on every outgoing request.

/// Revision of the wire protocol this node speaks.
pub const PROTOCOL: &str = "2";

/// Software build identity, taken from the crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The protocol/version pair stamped onto every outgoing request.
///
/// Injected at client construction rather than read from ambient globals,
/// so tests can pin their own values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Value of the `X-Zold-Protocol` request header.
    pub protocol: String,
    /// Value of the `X-Zold-Version` request header.
    pub version: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            protocol: PROTOCOL.to_string(),
            version: VERSION.to_string(),
        }
    }
}
