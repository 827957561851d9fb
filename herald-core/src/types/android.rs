//! Android notification types
//!
//! Channel-based presentation controls passed through to the Android side of
//! the native module. On other platforms the native module ignores these.

use serde::{Deserialize, Serialize};

/// Importance of a channel or notification
///
/// Maps onto Android's `NotificationManager` importance levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum AndroidImportance {
    /// No sound, does not appear in the status bar
    Min,
    /// No sound
    Low,
    /// Makes a sound
    #[default]
    Default,
    /// Makes a sound and peeks onto the screen
    High,
}

/// A notification channel
///
/// Channels must be created before notifications reference them; Android 8+
/// refuses to display a notification on an unknown channel.
#[derive(Debug, Clone, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct AndroidChannel {
    /// Unique channel id
    pub id: String,

    /// User-visible channel name
    pub name: String,

    /// User-visible channel description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub importance: AndroidImportance,

    /// Whether notifications on this channel can interrupt Do Not Disturb
    #[serde(default)]
    pub bypass_dnd: bool,

    /// Sound asset name; the platform default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    #[serde(default = "default_true")]
    pub vibration: bool,

    #[serde(default = "default_true")]
    pub badge: bool,

    #[serde(default)]
    pub lights: bool,
}

/// Action invoked when a notification or action button is pressed
#[derive(Debug, Clone, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct AndroidPressAction {
    /// Id echoed back in the resulting press event
    pub id: String,

    /// Activity to launch; the default launch activity when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_activity: Option<String>,
}

/// An action button rendered on the notification
#[derive(Debug, Clone, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct AndroidAction {
    /// Button label
    pub title: String,

    pub press_action: AndroidPressAction,
}

/// Android-specific notification presentation
#[derive(Debug, Clone, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAndroid {
    /// Channel to post on; required by the platform on Android 8+
    pub channel_id: String,

    /// Drawable resource name for the small icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_icon: Option<String>,

    /// URL or resource name for the large icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_icon: Option<String>,

    /// Accent color as a hex string (e.g. "#2962ff")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Whether the notification can be dismissed by the user
    #[serde(default)]
    pub ongoing: bool,

    /// Dismiss automatically when pressed
    #[serde(default = "default_true")]
    pub auto_cancel: bool,

    #[serde(default)]
    pub importance: AndroidImportance,

    /// Action buttons, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<AndroidAction>,

    /// Action for pressing the notification body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press_action: Option<AndroidPressAction>,

    /// Group key for notification stacking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(default)]
    pub show_timestamp: bool,

    /// Timestamp shown when `show_timestamp` is set, ms since UNIX epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_defaults() {
        let channel: AndroidChannel =
            serde_json::from_str(r#"{"id":"alerts","name":"Alerts"}"#).unwrap();

        assert_eq!(channel.importance, AndroidImportance::Default);
        assert!(channel.vibration);
        assert!(channel.badge);
        assert!(!channel.bypass_dnd);
        assert!(!channel.lights);
    }

    #[test]
    fn test_importance_wire_names() {
        let json = serde_json::to_string(&AndroidImportance::High).unwrap();
        assert_eq!(json, r#""high""#);

        let parsed: AndroidImportance = serde_json::from_str(r#""min""#).unwrap();
        assert_eq!(parsed, AndroidImportance::Min);
    }
}
