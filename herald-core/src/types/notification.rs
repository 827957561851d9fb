//! Core notification type
//!
//! The platform-independent notification payload. Platform-specific
//! presentation lives in the `android` and `ios` sub-structs; the native
//! module reads whichever half applies to the platform it runs on.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::android::NotificationAndroid;
use super::ios::NotificationIOS;

/// A notification to display or schedule
#[derive(Debug, Clone, Default, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique id; generated at display time when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Title shown at the top of the notification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Secondary title line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Main body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Caller data attached to the notification and echoed back in events
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, String>,

    /// Android-specific presentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<NotificationAndroid>,

    /// iOS-specific presentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<NotificationIOS>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_omitted() {
        let notification = Notification {
            title: Some("Ping".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Ping" }));
    }

    #[test]
    fn test_data_survives_parse() {
        let json = r#"{"id":"abc","body":"hi","data":{"deepLink":"app://inbox"}}"#;
        let notification: Notification = serde_json::from_str(json).unwrap();

        assert_eq!(notification.id.as_deref(), Some("abc"));
        assert_eq!(
            notification.data.get("deepLink").map(String::as_str),
            Some("app://inbox")
        );
    }
}
