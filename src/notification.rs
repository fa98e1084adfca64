/// Display notification shown by the device when the receiving app is in the
/// background. Omitted entirely from the wire format when the message only
/// carries data.
///
/// Every field is optional and unset fields are left out of the JSON, so the
/// gateway and the platform apply their own defaults. The `icon`, `tag` and
/// `color` fields are Android only; `badge` is iOS only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_action: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_loc_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_loc_args: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_loc_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_loc_args: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Builds a [`Notification`] field by field.
#[derive(Debug, Default)]
pub struct NotificationBuilder {
    notification: Notification,
}

impl NotificationBuilder {
    pub fn new() -> NotificationBuilder {
        Default::default()
    }

    /// The notification's title, shown by the platform notification tray.
    pub fn set_title(&mut self, title: &str) {
        self.notification.title = Some(title.to_owned());
    }

    /// The notification's body text.
    pub fn set_body(&mut self, body: &str) {
        self.notification.body = Some(body.to_owned());
    }

    /// Sound to play on delivery. `"default"` plays the platform default.
    pub fn set_sound(&mut self, sound: &str) {
        self.notification.sound = Some(sound.to_owned());
    }

    /// Action taken when the user taps the notification.
    pub fn set_click_action(&mut self, click_action: &str) {
        self.notification.click_action = Some(click_action.to_owned());
    }

    /// Localization key for the body, resolved in the app's string resources.
    pub fn set_body_loc_key(&mut self, key: &str) {
        self.notification.body_loc_key = Some(key.to_owned());
    }

    /// Format arguments for the localized body, as a JSON array string.
    pub fn set_body_loc_args(&mut self, args: &str) {
        self.notification.body_loc_args = Some(args.to_owned());
    }

    /// Localization key for the title.
    pub fn set_title_loc_key(&mut self, key: &str) {
        self.notification.title_loc_key = Some(key.to_owned());
    }

    /// Format arguments for the localized title, as a JSON array string.
    pub fn set_title_loc_args(&mut self, args: &str) {
        self.notification.title_loc_args = Some(args.to_owned());
    }

    /// Android only. Notification icon resource name.
    pub fn set_icon(&mut self, icon: &str) {
        self.notification.icon = Some(icon.to_owned());
    }

    /// Android only. Notifications sharing a tag replace each other.
    pub fn set_tag(&mut self, tag: &str) {
        self.notification.tag = Some(tag.to_owned());
    }

    /// Android only. Icon color in `#rrggbb` form.
    pub fn set_color(&mut self, color: &str) {
        self.notification.color = Some(color.to_owned());
    }

    /// iOS only. Value for the badge on the home screen app icon.
    pub fn set_badge(&mut self, badge: &str) {
        self.notification.badge = Some(badge.to_owned());
    }

    pub fn build(self) -> Notification {
        self.notification
    }
}
