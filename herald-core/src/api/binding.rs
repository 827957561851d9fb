//! API binding
//!
//! The object through which all notification operations flow. Constructed
//! once with an immutable configuration; every operation is a marshaled call
//! onto the native module, and construction registers a listener for each
//! declared native event name.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::bridge::{
    BridgeError, DispatcherHandle, EventDispatcher, ForegroundEventObserver, NativeAdapter,
    NativeBridge,
};
use crate::types::{
    self, AndroidChannel, Notification, NotificationSettings, Trigger,
};

use super::requests::*;

/// Binding-level errors
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("invalid binding config: {0}")]
    InvalidConfig(String),

    #[error("bridge error: {0}")]
    Bridge(#[from] BridgeError),
}

/// Immutable configuration the binding is constructed with
#[derive(Debug, Clone)]
pub struct BindingConfig {
    /// Library version reported to the native module
    pub version: String,
    /// Name of the host-provided native module
    pub native_module_name: String,
    /// Native event names the binding subscribes to
    pub native_events: Vec<String>,
}

impl BindingConfig {
    fn validate(&self) -> Result<(), BindingError> {
        if self.native_module_name.is_empty() {
            return Err(BindingError::InvalidConfig(
                "native module name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// The notification API binding
pub struct ApiBinding {
    config: BindingConfig,
    bridge: NativeBridge,
    dispatcher: DispatcherHandle,
}

impl ApiBinding {
    /// Construct the binding and register its native event listeners.
    ///
    /// Fails when the configuration is invalid or the native module is
    /// unavailable; failures propagate unmodified to the caller.
    pub fn new(config: BindingConfig, adapter: Arc<dyn NativeAdapter>) -> Result<Self, BindingError> {
        config.validate()?;

        let bridge = NativeBridge::new(config.native_module_name.clone(), adapter);
        if !bridge.is_available() {
            return Err(BridgeError::ModuleUnavailable(config.native_module_name.clone()).into());
        }

        for event in &config.native_events {
            bridge.call_ack(
                "addListener",
                &AddListenerRequest {
                    event: event.clone(),
                },
            )?;
            debug!("Registered native listener for {}", event);
        }

        let dispatcher = EventDispatcher::new(config.native_events.iter().cloned()).start()?;

        info!(
            "API binding ready (module: {}, version: {})",
            config.native_module_name, config.version
        );

        Ok(Self {
            config,
            bridge,
            dispatcher,
        })
    }

    /// The configuration this binding was constructed with
    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    // === Display ===

    /// Display a notification, returning its id.
    ///
    /// An id is generated when the notification does not carry one.
    pub fn display_notification(&self, mut notification: Notification) -> Result<String, BindingError> {
        let id = notification
            .id
            .take()
            .unwrap_or_else(types::generate_id);
        notification.id = Some(id.clone());

        self.bridge
            .call_ack("displayNotification", &DisplayNotificationRequest { notification })?;
        Ok(id)
    }

    /// Schedule a notification against a trigger, returning its id
    pub fn create_trigger_notification(
        &self,
        mut notification: Notification,
        trigger: Trigger,
    ) -> Result<String, BindingError> {
        let id = notification
            .id
            .take()
            .unwrap_or_else(types::generate_id);
        notification.id = Some(id.clone());

        self.bridge.call_ack(
            "createTriggerNotification",
            &CreateTriggerNotificationRequest {
                notification,
                trigger,
            },
        )?;
        Ok(id)
    }

    // === Cancellation ===

    /// Cancel a displayed notification by id
    pub fn cancel_notification(&self, id: &str) -> Result<(), BindingError> {
        self.bridge
            .call_ack("cancelNotification", &CancelNotificationRequest { id: id.to_string() })?;
        Ok(())
    }

    /// Cancel all displayed notifications
    pub fn cancel_all_notifications(&self) -> Result<(), BindingError> {
        self.bridge.call_ack("cancelAllNotifications", &EmptyRequest {})?;
        Ok(())
    }

    /// Cancel a scheduled notification by id
    pub fn cancel_trigger_notification(&self, id: &str) -> Result<(), BindingError> {
        self.bridge.call_ack(
            "cancelTriggerNotification",
            &CancelNotificationRequest { id: id.to_string() },
        )?;
        Ok(())
    }

    /// Ids of all pending scheduled notifications
    pub fn get_trigger_notification_ids(&self) -> Result<Vec<String>, BindingError> {
        let response: NotificationIdsResponse =
            self.bridge.call("getTriggerNotificationIds", &EmptyRequest {})?;
        Ok(response.ids)
    }

    // === Channels ===

    /// Create (or update) a channel, returning its id
    pub fn create_channel(&self, channel: AndroidChannel) -> Result<String, BindingError> {
        let id = channel.id.clone();
        self.bridge
            .call_ack("createChannel", &CreateChannelRequest { channel })?;
        Ok(id)
    }

    /// Create (or update) several channels in one call
    pub fn create_channels(&self, channels: Vec<AndroidChannel>) -> Result<(), BindingError> {
        self.bridge
            .call_ack("createChannels", &CreateChannelsRequest { channels })?;
        Ok(())
    }

    /// Delete a channel by id
    pub fn delete_channel(&self, id: &str) -> Result<(), BindingError> {
        self.bridge
            .call_ack("deleteChannel", &DeleteChannelRequest { id: id.to_string() })?;
        Ok(())
    }

    /// All channels known to the native module
    pub fn get_channels(&self) -> Result<Vec<AndroidChannel>, BindingError> {
        let response: ChannelsResponse = self.bridge.call("getChannels", &EmptyRequest {})?;
        Ok(response.channels)
    }

    // === Permissions ===

    /// Prompt the user for notification permission
    pub fn request_permission(&self) -> Result<NotificationSettings, BindingError> {
        Ok(self.bridge.call("requestPermission", &EmptyRequest {})?)
    }

    /// Current notification settings without prompting
    pub fn get_notification_settings(&self) -> Result<NotificationSettings, BindingError> {
        Ok(self.bridge.call("getNotificationSettings", &EmptyRequest {})?)
    }

    // === Events ===

    /// Push a raw native event into the dispatcher.
    ///
    /// Called by the host runtime when the native module emits one of the
    /// declared event names.
    pub fn emit_native_event(&self, name: &str, payload: &str) -> Result<(), BindingError> {
        Ok(self.dispatcher.emit(name, payload)?)
    }

    /// Register an observer for foreground notification events
    pub fn add_foreground_observer(&self, observer: Arc<dyn ForegroundEventObserver>) {
        self.dispatcher.add_observer(observer);
    }

    /// Drop all registered foreground observers
    pub fn remove_foreground_observers(&self) {
        self.dispatcher.clear_observers();
    }
}
