//! HTTP client for Zold peer-to-peer communication.
//!
//! This module performs single GET requests against remote nodes. Every call
//! carries the mandatory identity headers, runs under a hard wall-clock
//! deadline, and produces a [`Response`] no matter what the peer or the
//! transport does — success, HTTP error status, transport fault and deadline
//! expiry all come back as the same value type.
//!
//! # Architecture
//!
//! - [`HttpClient`] - the client itself: construction, header injection,
//!   dispatch and deadline enforcement
//! - [`Response`] - the normalized outcome of a call
//! - [`Identity`] - the protocol/version identity advertised to peers
//!
//! # Outcome normalization
//!
//! `HttpClient::get` has no error return. A peer that answers with any HTTP
//! status, including 4xx/5xx, produces a `Response` carrying that literal
//! status. When no valid HTTP response is obtained at all — DNS failure,
//! connection refused, malformed reply, or deadline expiry — the `Response`
//! carries the sentinel code [`NO_RESPONSE`] (`"599"`) and a description of
//! the failure in its body. Downstream peer-scoring logic can treat `"599"`
//! uniformly as "unreachable" while keeping the diagnostic text for logs.
//!
//! # Example
//!
//! ```rust,no_run
//! use zold_http::http::{HttpClient, NO_RESPONSE};
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = HttpClient::new("http://b1.zold.io/")?;
//!
//! let res = client.get().await;
//! if res.code() == NO_RESPONSE {
//!     println!("Peer unreachable: {}", res.body());
//! } else {
//!     println!("Peer answered {}", res.code());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod identity;
mod response;

pub use client::{HttpClient, NETWORK_HEADER, PROTOCOL_HEADER, VERSION_HEADER};
pub use identity::{Identity, PROTOCOL, VERSION};
pub use response::{NO_RESPONSE, Response};
