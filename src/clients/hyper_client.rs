use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use http::header::RETRY_AFTER;
use hyper::{body::HttpBody, client::HttpConnector, Body, Client, Request as HttpRequest};
use hyper_tls::HttpsConnector;
use tokio_native_tls::native_tls::TlsConnector;

use crate::clients::{request_builder, FcmClient, CONNECT_TIMEOUT, MAX_RESPONSE_SIZE};
use crate::error::{FcmError, RetryAfter};
use crate::message::Message;
use crate::response::FcmResponse;

/// An async client for sending messages to the gateway.
///
/// This client is thread-safe. Clones of this client will share the same
/// underlying resources, the connection pool and the stored retry-after hint
/// included, so cloning is a cheap and effective method to provide access to
/// the client.
///
/// This client is [`hyper`](https://crates.io/crates/hyper) based, and will only work in Tokio contexts.
#[derive(Clone)]
pub struct HyperFcmClient {
    client: Client<HttpsConnector<HttpConnector>>,
    api_key: String,
    retry_after: Arc<Mutex<Option<String>>>,
}

impl HyperFcmClient {
    /// Creates a new client for the given server API key. Performs no I/O;
    /// fails only if the native TLS backend cannot be initialized.
    pub fn new(api_key: &str) -> Result<Self, FcmError> {
        let mut http = HttpConnector::new();
        http.enforce_http(false);
        http.set_connect_timeout(Some(CONNECT_TIMEOUT));

        let tls = TlsConnector::new().map_err(|err| FcmError::Transport(err.to_string()))?;
        let https = HttpsConnector::from((http, tls.into()));

        Ok(Self {
            client: Client::builder().build(https),
            api_key: api_key.to_owned(),
            retry_after: Arc::new(Mutex::new(None)),
        })
    }

    /// Creates a new client from a custom hyper HTTP client. Connection
    /// bounds are then the caller's responsibility.
    pub fn with_client(api_key: &str, client: Client<HttpsConnector<HttpConnector>>) -> Self {
        Self {
            client,
            api_key: api_key.to_owned(),
            retry_after: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl FcmClient for HyperFcmClient {
    /// Sends a message. Waits on an in-flight response without a timeout;
    /// only connection establishment is bounded.
    async fn send(&self, message: Message) -> Result<FcmResponse, FcmError> {
        trace!("Message: {:?}", message);

        let request: HttpRequest<Body> = request_builder::build_request(&self.api_key, &message)?;

        debug!("Request: {:?}", request);

        let response = self.client.request(request).await?;

        trace!("Response: {:?}", response);

        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|ra| ra.to_str().ok())
            .map(|ra| ra.to_owned());

        let response_status = response.status();
        trace!("Response status: {}", response_status);

        // The body is read to the end even when the status already tells us
        // the call failed. A connection goes back to the pool only once its
        // body is drained.
        let mut chunks = response.into_body();
        let mut body = Vec::new();
        while let Some(chunk) = chunks.data().await {
            body.extend(&chunk?);
            if body.len() > MAX_RESPONSE_SIZE {
                return Err(FcmError::ResponseTooLarge);
            }
        }
        trace!("Body text: {:?}", std::str::from_utf8(&body));

        let response = request_builder::parse_response(response_status, body)?;

        debug!("Response: {:?}", response);

        // Overwrite, not merge: the hint of the last completed send wins.
        *self.retry_after.lock().unwrap() = retry_after;

        Ok(response)
    }

    fn retry_after(&self) -> u64 {
        self.retry_after
            .lock()
            .unwrap()
            .as_deref()
            .and_then(RetryAfter::from_str)
            .map(|wait| wait.as_secs())
            .unwrap_or(0)
    }
}
