//! Contains implementations of FCM clients.
//!
//! [`request_builder`] holds the functions used to build and consume the
//! gateway http messages. This module can be used to build custom clients.

pub mod request_builder;

#[cfg(feature = "hyper-client")]
pub mod hyper_client;

#[cfg(feature = "hyper-rustls-client")]
pub mod hyper_rustls_client;

#[cfg(feature = "isahc-client")]
pub mod isahc_client;

use std::time::Duration;

use async_trait::async_trait;

use crate::{error::FcmError, message::Message, response::FcmResponse};

/// The largest response body read from the gateway. Real gateway responses
/// are a few kilobytes at most; anything past this is not a response the
/// crate can use, and draining it would only tie up the connection.
pub(crate) const MAX_RESPONSE_SIZE: usize = 64 * 1024;

/// How long a send may wait to establish a connection, TLS handshake
/// included where the backend exposes the knob. Without the bound, network
/// trouble grows an unbounded set of pending connections. A request that is
/// already in flight has no overall timeout.
pub(crate) const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// An async client for sending messages to the FCM gateway.
#[async_trait]
pub trait FcmClient {
    /// Sends one message, blocking the calling task until the gateway
    /// responds or the connection attempt times out. Concurrent sends on the
    /// same client are safe and share the connection pool; each call is an
    /// independent request.
    async fn send(&self, message: Message) -> Result<FcmResponse, FcmError>;

    /// Seconds the gateway last advised waiting before sending again, `0`
    /// when no hint is stored or the stored value does not parse. The hint is
    /// advisory data for the caller; the client never re-sends on its own.
    ///
    /// The slot holds the `Retry-After` value of the last send to *complete*,
    /// so under concurrent sends a reader may observe the hint of an
    /// unrelated request.
    fn retry_after(&self) -> u64;
}
