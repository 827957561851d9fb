//! iOS notification types
//!
//! Presentation and permission types passed through to the iOS side of the
//! native module. Ignored by the native module on other platforms.

use serde::{Deserialize, Serialize};

/// How a notification interrupts the user (iOS 15+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum IOSInterruptionLevel {
    /// Delivered silently, no wake
    Passive,
    #[default]
    Active,
    /// Breaks through scheduled delivery and some focus modes
    TimeSensitive,
    /// Breaks through Do Not Disturb; requires an entitlement
    Critical,
}

/// How a notification presents while the app is in the foreground
#[derive(Debug, Clone, Copy, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct IOSForegroundPresentationOptions {
    #[serde(default = "default_true")]
    pub alert: bool,

    #[serde(default = "default_true")]
    pub badge: bool,

    #[serde(default = "default_true")]
    pub sound: bool,

    #[serde(default)]
    pub banner: bool,

    #[serde(default)]
    pub list: bool,
}

impl Default for IOSForegroundPresentationOptions {
    fn default() -> Self {
        Self {
            alert: true,
            badge: true,
            sound: true,
            banner: false,
            list: false,
        }
    }
}

/// Media attached to a notification
#[derive(Debug, Clone, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct IOSNotificationAttachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Local file URL of the attachment
    pub url: String,

    #[serde(default)]
    pub thumbnail_hidden: bool,
}

/// iOS-specific notification presentation
#[derive(Debug, Clone, Default, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct NotificationIOS {
    /// Sound asset name; the platform default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    /// Value to set the app badge to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_count: Option<i32>,

    /// Category id for action buttons registered by the host app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// Thread id for notification grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,

    #[serde(default)]
    pub critical: bool,

    /// Volume for critical notifications, 0.0 to 1.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_volume: Option<f32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<IOSNotificationAttachment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_presentation_options: Option<IOSForegroundPresentationOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interruption_level: Option<IOSInterruptionLevel>,
}

/// State of a single iOS permission toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum IOSNotificationSetting {
    #[default]
    NotSupported,
    Disabled,
    Enabled,
}

/// Per-feature iOS notification settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct IOSNotificationSettings {
    #[serde(default)]
    pub alert: IOSNotificationSetting,

    #[serde(default)]
    pub badge: IOSNotificationSetting,

    #[serde(default)]
    pub sound: IOSNotificationSetting,

    #[serde(default)]
    pub critical_alert: IOSNotificationSetting,

    #[serde(default)]
    pub lock_screen: IOSNotificationSetting,

    #[serde(default)]
    pub notification_center: IOSNotificationSetting,
}

fn default_true() -> bool {
    true
}
