//! Functions used to build and consume the gateway http messages.
//! This module can be used to build custom clients.

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Request, StatusCode};

use crate::{error::FcmError, message::Message, response::FcmResponse};

/// The FCM legacy HTTP endpoint. Every message is posted here.
pub const GATEWAY_URI: &str = "https://fcm.googleapis.com/fcm/send";

/// Builds the request to send to the gateway.
///
/// This function is generic over the request body, which means client
/// implementations with different body types can share it.
///
/// # Example
///
/// ```no_run
/// # use fcm_http::MessageBuilder;
/// # use fcm_http::request_builder::build_request;
/// let mut builder = MessageBuilder::new();
/// builder.set_to("registration-token");
///
/// //Build the request for isahc
/// let request = build_request::<isahc::AsyncBody>("api-key", &builder.build()).unwrap();
/// //Send using a http client
/// ```
pub fn build_request<T>(api_key: &str, message: &Message) -> Result<Request<T>, FcmError>
where
    T: From<Vec<u8>>,
{
    let payload = serde_json::to_vec(message).map_err(FcmError::Serialization)?;

    Request::builder()
        .method("POST")
        .uri(GATEWAY_URI)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("key={}", api_key))
        .body(payload.into())
        .map_err(FcmError::from)
}

/// Parses the gateway response, returning `Err` for non-200 statuses and for
/// 200 bodies that do not decode.
///
/// A non-200 body is carried as raw text: the gateway makes no promise of
/// JSON on error statuses, so no decode is attempted.
pub fn parse_response(response_status: StatusCode, body: Vec<u8>) -> Result<FcmResponse, FcmError> {
    if response_status != StatusCode::OK {
        return Err(FcmError::Gateway {
            status: response_status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    serde_json::from_slice(&body).map_err(FcmError::Decode)
}

#[cfg(test)]
mod tests {
    use http::header::{AUTHORIZATION, CONTENT_TYPE};
    use http::StatusCode;

    use crate::clients::request_builder::*;
    use crate::error::FcmError;
    use crate::message::MessageBuilder;

    #[test]
    fn builds_a_correct_request() {
        let mut builder = MessageBuilder::new();
        builder.set_to("token");

        let request = build_request::<Vec<u8>>("n4EUl", &builder.build()).unwrap();

        assert_eq!("POST", request.method().as_str());
        assert_eq!(GATEWAY_URI, request.uri().to_string());
        assert_eq!(
            "application/json",
            request.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap()
        );
        assert_eq!(
            "key=n4EUl",
            request.headers().get(AUTHORIZATION).unwrap().to_str().unwrap()
        );
        assert_eq!(br#"{"to":"token"}"#.to_vec(), *request.body());
    }

    #[test]
    fn parses_a_successful_response_correctly() {
        let body = r#"{"multicast_id":1,"success":1,"failure":0,"canonical_ids":0,"results":[{"message_id":"m1"}]}"#;

        let response = parse_response(StatusCode::OK, body.as_bytes().to_vec()).unwrap();

        assert_eq!(1, response.multicast_id);
        assert_eq!(1, response.success);
        assert_eq!(0, response.failure);
        assert_eq!(Some("m1"), response.results[0].message_id.as_deref());
    }

    #[test]
    fn carries_a_non_ok_status_and_body_without_decoding() {
        // JSON-shaped or not, an error body stays raw text
        let err = parse_response(StatusCode::BAD_REQUEST, b"INVALID_KEY".to_vec()).unwrap_err();

        match err {
            FcmError::Gateway { status, body } => {
                assert_eq!(StatusCode::BAD_REQUEST, status);
                assert_eq!("INVALID_KEY", body);
            }
            other => panic!("expected a gateway error, got {:?}", other),
        }
    }

    #[test]
    fn carries_a_server_error_status_the_same_way() {
        let err = parse_response(StatusCode::SERVICE_UNAVAILABLE, vec![]).unwrap_err();

        assert!(matches!(err, FcmError::Gateway { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE));
    }

    #[test]
    fn fails_decode_on_a_garbage_ok_body() {
        let err = parse_response(StatusCode::OK, b"<html>gateway</html>".to_vec()).unwrap_err();

        assert!(matches!(err, FcmError::Decode(_)));
    }
}
