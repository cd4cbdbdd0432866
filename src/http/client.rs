//! Single-request client for talking to one peer.

use std::time::Duration;

use anyhow::Context;
use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use tokio::time::timeout;
use url::Url;

use crate::config::NodeConfig;

use super::error::Fault;
use super::identity::Identity;
use super::response::Response;

const DEFAULT_TIMEOUT_SECS: u64 = 16;

/// Name of the protocol identity request header. Sent lowercase; HTTP/1.1
/// peers match header names case-insensitively.
pub const PROTOCOL_HEADER: &str = "x-zold-protocol";

/// Name of the software version request header.
pub const VERSION_HEADER: &str = "x-zold-version";

/// Name of the network tag request header, sent only when a network is
/// configured.
pub const NETWORK_HEADER: &str = "x-zold-network";

/// HTTP client bound to a single peer URI.
///
/// Each [`get`](HttpClient::get) call performs exactly one GET request under
/// a hard deadline and returns a [`Response`], never an error. The identity
/// headers are stamped onto every request unconditionally.
///
/// All state is immutable after construction, so a client can be shared
/// across tasks; concurrent calls share nothing but the configuration.
pub struct HttpClient {
    uri: Url,
    timeout: Duration,
    headers: HeaderMap,
    client: reqwest::Client,
}

impl HttpClient {
    /// Creates a client for `uri` with no network tag and the default
    /// 16-second deadline.
    ///
    /// # Errors
    ///
    /// Returns an error if `uri` is not a valid absolute http(s) URI or the
    /// underlying transport cannot be initialized.
    pub fn new(uri: &str) -> Result<Self, anyhow::Error> {
        Self::with_config(uri, "", Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with an explicit network tag and default deadline.
    ///
    /// An empty `network` means the `X-Zold-Network` header is omitted; the
    /// protocol and version headers are always sent. The `timeout` bounds
    /// every call unless overridden per call, and must be strictly positive.
    pub fn with_config(uri: &str, network: &str, timeout: Duration) -> Result<Self, anyhow::Error> {
        Self::with_identity(uri, network, timeout, Identity::default())
    }

    /// Creates a client wired to node-level configuration.
    pub fn from_config(uri: &str, config: &NodeConfig) -> Result<Self, anyhow::Error> {
        Self::with_config(uri, &config.network, config.timeout())
    }

    /// Full constructor with an explicit [`Identity`] instead of the crate
    /// constants.
    pub fn with_identity(
        uri: &str,
        network: &str,
        timeout: Duration,
        identity: Identity,
    ) -> Result<Self, anyhow::Error> {
        let uri = Url::parse(uri).context("Invalid peer URI")?;
        anyhow::ensure!(
            matches!(uri.scheme(), "http" | "https"),
            "Peer URI must be http(s), got '{}'",
            uri.scheme()
        );
        anyhow::ensure!(timeout > Duration::ZERO, "Timeout must be strictly positive");

        let headers = identity_headers(&identity, network)?;

        // No native timeout and no idle pool: the deadline is enforced by
        // the caller-side race, and each call makes one connection attempt.
        let client = reqwest::Client::builder().pool_max_idle_per_host(0).build()?;

        Ok(Self {
            uri,
            timeout,
            headers,
            client,
        })
    }

    /// The peer URI this client talks to.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Performs one GET request under the configured deadline.
    pub async fn get(&self) -> Response {
        self.get_with_timeout(self.timeout).await
    }

    /// Performs one GET request under an explicit deadline.
    ///
    /// Total: every outcome comes back as a [`Response`]. The remote status
    /// passes through unchanged, 4xx/5xx included. A transport fault or the
    /// deadline expiring yields the `"599"` sentinel with the failure text
    /// in the body. The caller-visible latency is bounded by `deadline`
    /// regardless of what the transport or the peer does; an in-flight
    /// request still running at the deadline is aborted and never observed
    /// again.
    pub async fn get_with_timeout(&self, deadline: Duration) -> Response {
        debug!(uri:% = self.uri; "HTTP: dispatching GET");

        let request = self.client.get(self.uri.clone()).headers(self.headers.clone());
        let mut handle = tokio::spawn(async move {
            let reply = request.send().await?;
            let status = reply.status();
            let header = reply.headers().clone();
            let body = reply.text().await?;
            Ok::<(StatusCode, HeaderMap, String), reqwest::Error>((status, header, body))
        });

        match timeout(deadline, &mut handle).await {
            Ok(Ok(Ok((status, header, body)))) => {
                debug!(uri:% = self.uri, code = status.as_str(); "HTTP: GET completed");
                Response::completed(status, header, body)
            },
            Ok(Ok(Err(e))) => self.no_response(Fault::transport(&e)),
            // The spawned task itself died (panic or forced cancellation).
            Ok(Err(e)) => self.no_response(Fault::transport(&e)),
            Err(_) => {
                handle.abort();
                self.no_response(Fault::TimedOut { after: deadline })
            },
        }
    }

    fn no_response(&self, fault: Fault) -> Response {
        warn!(
            uri:% = self.uri,
            reason:% = fault;
            "HTTP: no valid response obtained"
        );
        Response::no_response(&fault)
    }
}

fn identity_headers(identity: &Identity, network: &str) -> Result<HeaderMap, anyhow::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        PROTOCOL_HEADER,
        HeaderValue::from_str(&identity.protocol).context("Invalid protocol identity")?,
    );
    headers.insert(
        VERSION_HEADER,
        HeaderValue::from_str(&identity.version).context("Invalid version identity")?,
    );
    if !network.is_empty() {
        headers.insert(
            NETWORK_HEADER,
            HeaderValue::from_str(network).context("Invalid network tag")?,
        );
    }
    Ok(headers)
}
