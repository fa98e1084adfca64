use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_lite::AsyncReadExt;
use http::header::RETRY_AFTER;
use isahc::{config::Configurable, HttpClient};

use crate::clients::{request_builder, FcmClient, CONNECT_TIMEOUT, MAX_RESPONSE_SIZE};
use crate::error::{FcmError, RetryAfter};
use crate::message::Message;
use crate::response::FcmResponse;

/// An async client for sending messages to the gateway. This client is
/// expensive to create, and should be reused for the process lifetime.
///
/// This client is thread-safe. Clones of this client will share the same
/// underlying resources, the connection pool and the stored retry-after hint
/// included, so cloning is a cheap and effective method to provide access to
/// the client.
///
/// This client is built on [`isahc`](https://crates.io/crates/isahc), and will therefore work on any async executor.
#[derive(Clone)]
pub struct IsahcFcmClient {
    client: HttpClient,
    api_key: String,
    retry_after: Arc<Mutex<Option<String>>>,
}

impl IsahcFcmClient {
    /// Creates a new client for the given server API key. Performs no I/O;
    /// can fail under resource depletion.
    pub fn new(api_key: &str) -> Result<Self, FcmError> {
        let client = HttpClient::builder().connect_timeout(CONNECT_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            retry_after: Arc::new(Mutex::new(None)),
        })
    }

    /// Creates a new client from a custom Isahc HTTP client. Connection
    /// bounds are then the caller's responsibility.
    pub fn with_client(api_key: &str, client: HttpClient) -> Self {
        Self {
            client,
            api_key: api_key.to_owned(),
            retry_after: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl FcmClient for IsahcFcmClient {
    /// Sends a message. Waits on an in-flight response without a timeout;
    /// only connection establishment is bounded.
    async fn send(&self, message: Message) -> Result<FcmResponse, FcmError> {
        trace!("Message: {:?}", message);

        let request = request_builder::build_request::<isahc::AsyncBody>(&self.api_key, &message)?;

        trace!("Request: {:?}", request);

        let response = self.client.send_async(request).await?;

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
        let mut body = Vec::new();
        if response
            .into_body()
            .take(MAX_RESPONSE_SIZE as u64 + 1)
            .read_to_end(&mut body)
            .await?
            > MAX_RESPONSE_SIZE
        {
            return Err(FcmError::ResponseTooLarge);
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

#[cfg(test)]
mod tests {
    use crate::clients::isahc_client::IsahcFcmClient;
    use crate::clients::FcmClient;

    #[test]
    fn retry_after_is_zero_before_any_send() {
        let client = IsahcFcmClient::new("key").unwrap();

        assert_eq!(0, client.retry_after());
    }

    #[test]
    fn retry_after_reads_the_stored_hint_as_seconds() {
        let client = IsahcFcmClient::new("key").unwrap();
        *client.retry_after.lock().unwrap() = Some("120".to_owned());

        assert_eq!(120, client.retry_after());
    }

    #[test]
    fn retry_after_counts_down_a_stored_http_date() {
        let client = IsahcFcmClient::new("key").unwrap();
        let date = (chrono::Utc::now() + chrono::Duration::seconds(30)).to_rfc2822();
        *client.retry_after.lock().unwrap() = Some(date);

        let wait = client.retry_after();
        assert!(wait <= 30 && wait >= 25, "got {}", wait);
    }

    #[test]
    fn retry_after_degrades_to_zero_on_an_unparseable_hint() {
        let client = IsahcFcmClient::new("key").unwrap();
        *client.retry_after.lock().unwrap() = Some("soon".to_owned());

        assert_eq!(0, client.retry_after());
    }

    #[test]
    fn clones_share_the_retry_after_slot() {
        let client = IsahcFcmClient::new("key").unwrap();
        let clone = client.clone();
        *client.retry_after.lock().unwrap() = Some("60".to_owned());

        assert_eq!(60, clone.retry_after());
    }
}
