use serde::Serialize;
use serde_json::Value;

use crate::{error::FcmError, notification::Notification};

/// Message delivery priority, `"high"` or `"normal"` on the wire. Normal
/// priority lets the device batch delivery to save battery; high priority
/// wakes a sleeping device immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Normal,
}

/// Everything needed for one push request to the gateway.
///
/// Every field is optional, and unset fields are left out of the wire JSON
/// entirely rather than sent as `null` or a zero value, so the gateway's
/// defaulting behavior is preserved. The three target selectors (`to`,
/// `registration_ids`, `condition`) are mutually exclusive in intent; the
/// gateway enforces that, not this model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Message {
    /// A single registration token, or a topic in `/topics/name` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Multicast target list. The response carries one result per entry,
    /// in this order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_ids: Option<Vec<String>>,

    /// A boolean topic expression such as `'a' in topics && 'b' in topics`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    /// Messages sharing a collapse key replace each other while the device
    /// is offline, so only the last one is delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// On iOS, delivers the message as a silent background update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_available: Option<bool>,

    /// How long the gateway holds the message for an offline device, in
    /// seconds. The gateway defaults to four weeks when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<u32>,

    /// Package name the registration token must match for delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_package_name: Option<String>,

    /// Asks the gateway to validate the request without delivering it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    /// Opaque key/value payload handed to the receiving app as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

/// Builds a [`Message`] field by field.
///
/// ```
/// # use fcm_http::{MessageBuilder, Priority};
/// let mut builder = MessageBuilder::new();
/// builder.set_to("registration-token");
/// builder.set_priority(Priority::High);
///
/// let message = builder.build();
/// ```
#[derive(Debug, Default)]
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn new() -> MessageBuilder {
        Default::default()
    }

    /// Targets a single registration token or topic.
    pub fn set_to(&mut self, to: &str) {
        self.message.to = Some(to.to_owned());
    }

    /// Targets a list of registration tokens, up to the thousand the gateway
    /// accepts per request.
    pub fn set_registration_ids(&mut self, ids: &[String]) {
        self.message.registration_ids = Some(ids.to_vec());
    }

    /// Targets devices by a topic condition expression.
    pub fn set_condition(&mut self, condition: &str) {
        self.message.condition = Some(condition.to_owned());
    }

    pub fn set_collapse_key(&mut self, collapse_key: &str) {
        self.message.collapse_key = Some(collapse_key.to_owned());
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.message.priority = Some(priority);
    }

    pub fn set_content_available(&mut self, content_available: bool) {
        self.message.content_available = Some(content_available);
    }

    pub fn set_time_to_live(&mut self, seconds: u32) {
        self.message.time_to_live = Some(seconds);
    }

    pub fn set_restricted_package_name(&mut self, package_name: &str) {
        self.message.restricted_package_name = Some(package_name.to_owned());
    }

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.message.dry_run = Some(dry_run);
    }

    /// The application payload, converted to its JSON representation here so
    /// a conversion failure surfaces before anything is sent.
    pub fn set_data<S>(&mut self, data: &S) -> Result<(), FcmError>
    where
        S: Serialize,
    {
        self.message.data = Some(serde_json::to_value(data).map_err(FcmError::Serialization)?);

        Ok(())
    }

    pub fn set_notification(&mut self, notification: Notification) {
        self.message.notification = Some(notification);
    }

    pub fn build(self) -> Message {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::message::{MessageBuilder, Priority};
    use crate::notification::NotificationBuilder;

    #[test]
    fn serializes_an_empty_message_to_an_empty_object() {
        let message = MessageBuilder::new().build();

        assert_eq!("{}", serde_json::to_string(&message).unwrap());
    }

    #[test]
    fn leaves_unset_fields_out_of_the_wire_format() {
        let mut builder = MessageBuilder::new();
        builder.set_to("token");
        builder.set_priority(Priority::High);

        let wire = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(json!({"to": "token", "priority": "high"}), wire);
    }

    #[test]
    fn does_not_emit_null_for_flags_set_to_false() {
        let mut builder = MessageBuilder::new();
        builder.set_to("token");
        builder.set_dry_run(false);

        let wire = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(json!({"to": "token", "dry_run": false}), wire);
    }

    #[test]
    fn serializes_every_field_with_its_wire_name() {
        let mut notification = NotificationBuilder::new();
        notification.set_title("title");

        let mut builder = MessageBuilder::new();
        builder.set_to("token");
        builder.set_registration_ids(&["a".to_owned(), "b".to_owned()]);
        builder.set_condition("'scores' in topics");
        builder.set_collapse_key("scores");
        builder.set_priority(Priority::Normal);
        builder.set_content_available(true);
        builder.set_time_to_live(3600);
        builder.set_restricted_package_name("com.example.app");
        builder.set_dry_run(true);
        builder.set_data(&json!({"score": "5x1"})).unwrap();
        builder.set_notification(notification.build());

        let wire = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(
            json!({
                "to": "token",
                "registration_ids": ["a", "b"],
                "condition": "'scores' in topics",
                "collapse_key": "scores",
                "priority": "normal",
                "content_available": true,
                "time_to_live": 3600,
                "restricted_package_name": "com.example.app",
                "dry_run": true,
                "data": {"score": "5x1"},
                "notification": {"title": "title"},
            }),
            wire
        );
    }

    #[test]
    fn converts_the_data_payload_through_serde() {
        #[derive(Serialize)]
        struct MatchData {
            score: &'static str,
            minute: u8,
        }

        let mut builder = MessageBuilder::new();
        builder
            .set_data(&MatchData {
                score: "5x1",
                minute: 87,
            })
            .unwrap();

        let wire = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(json!({"data": {"score": "5x1", "minute": 87}}), wire);
    }

    #[test]
    fn priorities_use_their_lowercase_wire_names() {
        assert_eq!("\"high\"", serde_json::to_string(&Priority::High).unwrap());
        assert_eq!("\"normal\"", serde_json::to_string(&Priority::Normal).unwrap());
    }
}
