//! # fcm-http
//!
//! An async client for the FCM legacy HTTP gateway
//! (`https://fcm.googleapis.com/fcm/send`). The crate serializes a message,
//! posts it over a pooled connection with the server API key in the
//! `Authorization` header, decodes the JSON response and keeps the gateway's
//! last `Retry-After` hint available for the caller.
//!
//! The clients keep their connections alive between sends and always drain
//! response bodies, so a long-lived client reuses connections instead of
//! paying the TLS handshake on every request. Retrying, backoff and delivery
//! tracking are left to the caller: a failed send reports one error and
//! nothing is re-sent internally.
//!
//! # Example
//!
//! ```no_run
//! # use fcm_http::*;
//! # #[tokio::main]
//! # async fn main() -> Result<(), FcmError> {
//! let client = IsahcFcmClient::new("AIzaSy...server-key")?;
//!
//! let mut notification = NotificationBuilder::new();
//! notification.set_title("Portugal vs. Denmark");
//! notification.set_body("5 to 1");
//!
//! let mut message = MessageBuilder::new();
//! message.set_to("registration-token");
//! message.set_priority(Priority::High);
//! message.set_notification(notification.build());
//!
//! let response = client.send(message.build()).await?;
//! println!("sent {} / failed {}", response.success, response.failure);
//!
//! if response.failure > 0 {
//!     println!("gateway says wait {}s", client.retry_after());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Feature flags
//!
//! - `isahc-client` (default): [`IsahcFcmClient`], works on any executor.
//! - `hyper-client`: [`HyperFcmClient`], Tokio only, native TLS.
//! - `hyper-rustls-client`: [`HyperRustlsFcmClient`], Tokio only, pure-Rust
//!   TLS for docker/musl builds.
//!
//! Custom clients can be built on [`request_builder`], which exposes the
//! request construction and response parsing the bundled clients share.

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

mod clients;
mod error;
mod message;
mod notification;
mod response;

pub use crate::clients::request_builder;

#[cfg(feature = "hyper-client")]
pub use crate::clients::hyper_client::HyperFcmClient;

#[cfg(feature = "hyper-rustls-client")]
pub use crate::clients::hyper_rustls_client::HyperRustlsFcmClient;

#[cfg(feature = "isahc-client")]
pub use crate::clients::isahc_client::IsahcFcmClient;

pub use crate::clients::FcmClient;
pub use crate::error::{FcmError, RetryAfter};
pub use crate::message::{Message, MessageBuilder, Priority};
pub use crate::notification::{Notification, NotificationBuilder};
pub use crate::response::{ErrorReason, FcmResponse, MessageResult};
