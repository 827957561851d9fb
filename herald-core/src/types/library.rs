//! Library-level types
//!
//! Permission state, notification events delivered by the native module, and
//! triggers for scheduling local notifications.

use serde::{Deserialize, Serialize};

use super::ios::IOSNotificationSettings;
use super::notification::Notification;

/// Overall notification permission state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationStatus {
    /// The user has not been asked yet
    #[default]
    NotDetermined,
    Denied,
    Authorized,
    /// Delivered quietly without an explicit prompt (iOS)
    Provisional,
}

/// Permission settings reported by the native module
#[derive(Debug, Clone, Default, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    #[serde(default)]
    pub authorization_status: AuthorizationStatus,

    /// Per-feature settings, present on iOS only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<IOSNotificationSettings>,
}

/// What happened to a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    /// The user dismissed the notification
    Dismissed,
    /// The user pressed the notification body
    Press,
    /// The user pressed an action button
    ActionPress,
    /// The notification was delivered to the device
    Delivered,
    /// Emitted by newer native modules this library does not know about
    #[serde(other)]
    Unknown,
}

/// Event context beyond the event type
#[derive(Debug, Clone, Default, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    /// The notification the event refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,

    /// Id of the press action, for press and action-press events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press_action_id: Option<String>,

    /// Text entered by the user for input actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

/// A notification event emitted by the native module
#[derive(Debug, Clone, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,

    #[serde(default)]
    pub detail: EventDetail,
}

/// Repeat cadence for timestamp triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum RepeatFrequency {
    Hourly,
    Daily,
    Weekly,
}

/// Unit for interval triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

/// When a scheduled notification fires
#[derive(Debug, Clone, Serialize, Deserialize, uniffi::Enum)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Trigger {
    /// Fire once at a wall-clock time, optionally repeating
    #[serde(rename_all = "camelCase")]
    Timestamp {
        /// Fire time, ms since UNIX epoch
        timestamp_ms: u64,
        repeat_frequency: Option<RepeatFrequency>,
    },

    /// Fire repeatedly at a fixed interval
    #[serde(rename_all = "camelCase")]
    Interval { interval: u64, time_unit: TimeUnit },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_event_parses() {
        let payload = r#"{
            "type": "press",
            "detail": {
                "notification": { "id": "n1", "title": "Ping" },
                "pressActionId": "open"
            }
        }"#;

        let event: NotificationEvent = serde_json::from_str(payload).unwrap();
        assert_eq!(event.event_type, EventType::Press);
        assert_eq!(event.detail.press_action_id.as_deref(), Some("open"));
        let notification = event.detail.notification.unwrap();
        assert_eq!(notification.id.as_deref(), Some("n1"));
    }

    #[test]
    fn test_unknown_event_type_is_tolerated() {
        let event: NotificationEvent =
            serde_json::from_str(r#"{"type":"somethingNew"}"#).unwrap();
        assert_eq!(event.event_type, EventType::Unknown);
        assert!(event.detail.notification.is_none());
    }

    #[test]
    fn test_trigger_wire_format_is_tagged() {
        let trigger = Trigger::Interval {
            interval: 30,
            time_unit: TimeUnit::Minutes,
        };

        let json = serde_json::to_value(&trigger).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type":"interval","interval":30,"timeUnit":"minutes"})
        );
    }
}
