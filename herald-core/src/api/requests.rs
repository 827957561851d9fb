//! Native call payloads
//!
//! Request and response bodies for the methods the binding invokes on the
//! native module.

use serde::{Deserialize, Serialize};

use crate::types::{AndroidChannel, Notification, Trigger};

/// Request body for methods that take no arguments
#[derive(Debug, Clone, Serialize)]
pub struct EmptyRequest {}

/// Request body for addListener
#[derive(Debug, Clone, Serialize)]
pub struct AddListenerRequest {
    pub event: String,
}

/// Request body for displayNotification
#[derive(Debug, Clone, Serialize)]
pub struct DisplayNotificationRequest {
    pub notification: Notification,
}

/// Request body for createTriggerNotification
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTriggerNotificationRequest {
    pub notification: Notification,
    pub trigger: Trigger,
}

/// Request body for cancelNotification / cancelTriggerNotification
#[derive(Debug, Clone, Serialize)]
pub struct CancelNotificationRequest {
    pub id: String,
}

/// Request body for createChannel
#[derive(Debug, Clone, Serialize)]
pub struct CreateChannelRequest {
    pub channel: AndroidChannel,
}

/// Request body for createChannels
#[derive(Debug, Clone, Serialize)]
pub struct CreateChannelsRequest {
    pub channels: Vec<AndroidChannel>,
}

/// Request body for deleteChannel
#[derive(Debug, Clone, Serialize)]
pub struct DeleteChannelRequest {
    pub id: String,
}

/// Response for getTriggerNotificationIds
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationIdsResponse {
    pub ids: Vec<String>,
}

/// Response for getChannels
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelsResponse {
    pub channels: Vec<AndroidChannel>,
}
