//! Resilient single-request HTTP client for Zold node-to-node communication.
//!
//! A Zold node talks to its peers over plain HTTP. This crate performs one GET
//! request per call, stamps the mandatory identity headers onto it, enforces a
//! hard wall-clock deadline, and collapses every possible outcome into a single
//! [`Response`](http::Response) value that callers inspect without branching on
//! failure class.

pub mod config;
pub mod http;

pub use crate::config::{NodeConfig, load_configuration};
pub use crate::http::{HttpClient, Identity, NO_RESPONSE, PROTOCOL, Response, VERSION};
