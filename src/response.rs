use std::fmt;

/// The gateway's answer to an accepted request.
///
/// Fields the gateway leaves out decode to their zero values, the way the
/// wire format treats them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FcmResponse {
    /// Identifier of the request as a whole.
    pub multicast_id: i64,
    /// How many targets were accepted for delivery.
    pub success: u64,
    /// How many targets failed.
    pub failure: u64,
    /// How many results carry a canonical registration token.
    pub canonical_ids: u64,
    /// Per-target outcomes. When the request addressed a list of
    /// registration ids, the order here matches the order of that list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<MessageResult>,
}

/// Outcome for a single target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResult {
    /// Identifier the gateway assigned to the accepted message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Replacement registration token. Set when the token used is stale;
    /// the caller should switch to this one for future sends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<String>,

    /// Gateway error code for this target, passed through verbatim. Acting
    /// on it is the caller's business; [`ErrorReason`] names the known codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResult {
    /// The error code mapped into the known vocabulary, `None` when the
    /// target succeeded or the gateway sent a code this crate does not know.
    pub fn error_reason(&self) -> Option<ErrorReason> {
        self.error.as_deref().and_then(ErrorReason::from_code)
    }
}

/// Error codes the gateway puts in [`MessageResult::error`]. The client only
/// names them; it never branches on them, and unknown codes still reach the
/// caller through the verbatim string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorReason {
    MissingRegistration,
    InvalidRegistration,
    NotRegistered,
    InvalidPackageName,
    MismatchSenderId,
    MessageTooBig,
    InvalidDataKey,
    InvalidTtl,
    Unavailable,
    InternalServerError,
    DeviceMessageRateExceeded,
    TopicsMessageRateExceeded,
}

impl ErrorReason {
    pub fn from_code(code: &str) -> Option<ErrorReason> {
        let reason = match code {
            "MissingRegistration" => ErrorReason::MissingRegistration,
            "InvalidRegistration" => ErrorReason::InvalidRegistration,
            "NotRegistered" => ErrorReason::NotRegistered,
            "InvalidPackageName" => ErrorReason::InvalidPackageName,
            "MismatchSenderId" => ErrorReason::MismatchSenderId,
            "MessageTooBig" => ErrorReason::MessageTooBig,
            "InvalidDataKey" => ErrorReason::InvalidDataKey,
            "InvalidTtl" => ErrorReason::InvalidTtl,
            "Unavailable" => ErrorReason::Unavailable,
            "InternalServerError" => ErrorReason::InternalServerError,
            "DeviceMessageRateExceeded" => ErrorReason::DeviceMessageRateExceeded,
            "TopicsMessageRateExceeded" => ErrorReason::TopicsMessageRateExceeded,
            _ => return None,
        };

        Some(reason)
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            ErrorReason::MissingRegistration => "MissingRegistration",
            ErrorReason::InvalidRegistration => "InvalidRegistration",
            ErrorReason::NotRegistered => "NotRegistered",
            ErrorReason::InvalidPackageName => "InvalidPackageName",
            ErrorReason::MismatchSenderId => "MismatchSenderId",
            ErrorReason::MessageTooBig => "MessageTooBig",
            ErrorReason::InvalidDataKey => "InvalidDataKey",
            ErrorReason::InvalidTtl => "InvalidTtl",
            ErrorReason::Unavailable => "Unavailable",
            ErrorReason::InternalServerError => "InternalServerError",
            ErrorReason::DeviceMessageRateExceeded => "DeviceMessageRateExceeded",
            ErrorReason::TopicsMessageRateExceeded => "TopicsMessageRateExceeded",
        }
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
