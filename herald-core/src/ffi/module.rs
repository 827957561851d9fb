//! Module bootstrap
//!
//! Constructs the notification module host shells import: one API binding
//! built from the hardcoded bootstrap configuration, composed with the
//! library's static version metadata. The binding's operations and the
//! statics live on a single structured type, so nothing can shadow a method.

use std::sync::{Arc, Once, OnceLock};

use tracing::{info, warn};

use crate::api::{ApiBinding, BindingConfig};
use crate::bridge::{ForegroundEventObserver, NativeAdapter};
use crate::types::{AndroidChannel, Notification, NotificationSettings, Trigger};

use super::error::CoreError;

/// Library version exposed as `SDK_VERSION` on the module
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the native module the binding talks to
pub const NATIVE_MODULE_NAME: &str = "HeraldApiModule";

/// Native event name the binding subscribes to
pub const NOTIFICATION_EVENT: &str = "app.herald.notification.event";

static TRACING_INIT: Once = Once::new();
static SHARED: OnceLock<Arc<NotificationModule>> = OnceLock::new();

/// The public notification module
///
/// One per process in normal use (see [`NotificationModule::initialize`]);
/// explicit construction with [`NotificationModule::new`] stays available for
/// hosts that prefer to manage the lifecycle themselves.
#[derive(uniffi::Object)]
pub struct NotificationModule {
    binding: ApiBinding,
}

#[uniffi::export]
impl NotificationModule {
    /// Construct a module against the given adapter.
    ///
    /// Fails when the bootstrap configuration is rejected or the native
    /// module is unavailable; the failure propagates unmodified.
    #[uniffi::constructor]
    pub fn new(adapter: Box<dyn NativeAdapter>) -> Result<Arc<Self>, CoreError> {
        Ok(Arc::new(Self::build(Arc::from(adapter))?))
    }

    /// Construct the process-wide module, or return it if already built.
    #[uniffi::constructor]
    pub fn initialize(adapter: Box<dyn NativeAdapter>) -> Result<Arc<Self>, CoreError> {
        if let Some(existing) = SHARED.get() {
            warn!("Notification module already initialized; returning existing instance");
            return Ok(Arc::clone(existing));
        }

        let module = Arc::new(Self::build(Arc::from(adapter))?);
        Ok(Arc::clone(SHARED.get_or_init(|| module)))
    }

    /// The process-wide module built by [`NotificationModule::initialize`].
    #[uniffi::constructor]
    pub fn instance() -> Result<Arc<Self>, CoreError> {
        SHARED.get().cloned().ok_or(CoreError::NotInitialized)
    }

    // === Statics ===

    /// The library's semantic version
    pub fn sdk_version(&self) -> String {
        SDK_VERSION.to_string()
    }

    // === Display ===

    /// Display a notification, returning its id
    pub fn display_notification(&self, notification: Notification) -> Result<String, CoreError> {
        Ok(self.binding.display_notification(notification)?)
    }

    /// Schedule a notification against a trigger, returning its id
    pub fn create_trigger_notification(
        &self,
        notification: Notification,
        trigger: Trigger,
    ) -> Result<String, CoreError> {
        Ok(self.binding.create_trigger_notification(notification, trigger)?)
    }

    // === Cancellation ===

    pub fn cancel_notification(&self, id: String) -> Result<(), CoreError> {
        Ok(self.binding.cancel_notification(&id)?)
    }

    pub fn cancel_all_notifications(&self) -> Result<(), CoreError> {
        Ok(self.binding.cancel_all_notifications()?)
    }

    pub fn cancel_trigger_notification(&self, id: String) -> Result<(), CoreError> {
        Ok(self.binding.cancel_trigger_notification(&id)?)
    }

    pub fn get_trigger_notification_ids(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.binding.get_trigger_notification_ids()?)
    }

    // === Channels ===

    pub fn create_channel(&self, channel: AndroidChannel) -> Result<String, CoreError> {
        Ok(self.binding.create_channel(channel)?)
    }

    pub fn create_channels(&self, channels: Vec<AndroidChannel>) -> Result<(), CoreError> {
        Ok(self.binding.create_channels(channels)?)
    }

    pub fn delete_channel(&self, id: String) -> Result<(), CoreError> {
        Ok(self.binding.delete_channel(&id)?)
    }

    pub fn get_channels(&self) -> Result<Vec<AndroidChannel>, CoreError> {
        Ok(self.binding.get_channels()?)
    }

    // === Permissions ===

    pub fn request_permission(&self) -> Result<NotificationSettings, CoreError> {
        Ok(self.binding.request_permission()?)
    }

    pub fn get_notification_settings(&self) -> Result<NotificationSettings, CoreError> {
        Ok(self.binding.get_notification_settings()?)
    }

    // === Events ===

    /// Push a raw native event into the dispatcher.
    ///
    /// Called by the host runtime when the native module emits one of the
    /// declared event names. Never blocks; failures are logged, not surfaced,
    /// since the host cannot act on them.
    pub fn emit_native_event(&self, name: String, payload: String) {
        if let Err(e) = self.binding.emit_native_event(&name, &payload) {
            warn!("Failed to enqueue native event {}: {}", name, e);
        }
    }

    /// Register an observer for foreground notification events
    pub fn add_foreground_observer(&self, observer: Box<dyn ForegroundEventObserver>) {
        self.binding.add_foreground_observer(Arc::from(observer));
    }

    /// Drop all registered foreground observers
    pub fn remove_foreground_observers(&self) {
        self.binding.remove_foreground_observers();
    }
}

impl NotificationModule {
    fn build(adapter: Arc<dyn NativeAdapter>) -> Result<Self, CoreError> {
        // Initialize tracing once
        TRACING_INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_ansi(false) // Disable colors for host consoles
                .with_target(false)
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive("herald_core=debug".parse().unwrap()),
                )
                .with_writer(std::io::stderr)
                .try_init()
                .ok();
        });

        info!("Initializing notification module (version {})", SDK_VERSION);

        let config = BindingConfig {
            version: SDK_VERSION.to_string(),
            native_module_name: NATIVE_MODULE_NAME.to_string(),
            native_events: vec![NOTIFICATION_EVENT.to_string()],
        };

        let binding = ApiBinding::new(config, adapter)?;
        Ok(Self { binding })
    }

    /// The binding this module fronts
    pub fn binding(&self) -> &ApiBinding {
        &self.binding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::AdapterError;
    use crate::types::{EventType, NotificationEvent};
    use parking_lot::Mutex;
    use std::sync::mpsc;
    use std::time::Duration;

    struct RecordingAdapter {
        calls: Mutex<Vec<(String, String)>>,
        available: bool,
    }

    impl RecordingAdapter {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                available: true,
            }
        }
    }

    impl NativeAdapter for RecordingAdapter {
        fn is_available(&self) -> bool {
            self.available
        }

        fn invoke(&self, method: String, payload: String) -> Result<String, AdapterError> {
            let reply = match method.as_str() {
                "getNotificationSettings" => r#"{"authorizationStatus":"denied"}"#,
                "getTriggerNotificationIds" => r#"{"ids":["t1"]}"#,
                "getChannels" => r#"{"channels":[]}"#,
                _ => "{}",
            };
            self.calls.lock().push((method, payload));
            Ok(reply.to_string())
        }
    }

    struct ChannelObserver {
        tx: mpsc::Sender<NotificationEvent>,
    }

    impl ForegroundEventObserver for ChannelObserver {
        fn on_event(&self, event: NotificationEvent) {
            let _ = self.tx.send(event);
        }
    }

    fn test_module() -> (Arc<NotificationModule>, Arc<RecordingAdapter>) {
        let adapter = Arc::new(RecordingAdapter::new());
        let module = NotificationModule::build(Arc::clone(&adapter)).unwrap();
        (Arc::new(module), adapter)
    }

    #[test]
    fn test_sdk_version_matches_package_version() {
        let (module, _adapter) = test_module();
        assert_eq!(module.sdk_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_bootstrap_registers_declared_event() {
        let (_module, adapter) = test_module();

        let calls = adapter.calls.lock();
        assert_eq!(calls[0].0, "addListener");
        assert!(calls[0].1.contains(NOTIFICATION_EVENT));
    }

    #[test]
    fn test_operations_delegate_to_binding() {
        let (module, adapter) = test_module();

        let id = module.display_notification(Notification::default()).unwrap();
        module.cancel_notification(id).unwrap();

        let channel: crate::types::AndroidChannel =
            serde_json::from_str(r#"{"id":"alerts","name":"Alerts"}"#).unwrap();
        module.create_channel(channel).unwrap();
        assert!(module.get_channels().unwrap().is_empty());

        let trigger_id = module
            .create_trigger_notification(
                Notification::default(),
                Trigger::Interval {
                    interval: 5,
                    time_unit: crate::types::TimeUnit::Minutes,
                },
            )
            .unwrap();
        assert!(!trigger_id.is_empty());
        assert_eq!(module.get_trigger_notification_ids().unwrap(), vec!["t1"]);

        let settings = module.get_notification_settings().unwrap();
        assert_eq!(
            settings.authorization_status,
            crate::types::AuthorizationStatus::Denied
        );

        let methods: Vec<String> = adapter.calls.lock().iter().map(|(m, _)| m.clone()).collect();
        for expected in [
            "displayNotification",
            "cancelNotification",
            "createChannel",
            "getChannels",
            "createTriggerNotification",
            "getTriggerNotificationIds",
            "getNotificationSettings",
        ] {
            assert!(methods.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_unavailable_native_module_fails_bootstrap() {
        struct UnavailableAdapter;

        impl NativeAdapter for UnavailableAdapter {
            fn is_available(&self) -> bool {
                false
            }

            fn invoke(&self, _method: String, _payload: String) -> Result<String, AdapterError> {
                Err(AdapterError::Unavailable)
            }
        }

        let result = NotificationModule::new(Box::new(UnavailableAdapter));
        assert!(matches!(result, Err(CoreError::ModuleUnavailable(_))));
    }

    #[test]
    fn test_initialize_is_identity_stable() {
        let first = NotificationModule::initialize(Box::new(RecordingAdapter::new())).unwrap();
        let again = NotificationModule::initialize(Box::new(RecordingAdapter::new())).unwrap();
        let via_instance = NotificationModule::instance().unwrap();

        assert!(Arc::ptr_eq(&first, &again));
        assert!(Arc::ptr_eq(&first, &via_instance));
    }

    #[test]
    fn test_emitted_event_reaches_observer() {
        let (module, _adapter) = test_module();

        let (tx, rx) = mpsc::channel();
        module.add_foreground_observer(Box::new(ChannelObserver { tx }));

        module.emit_native_event(
            NOTIFICATION_EVENT.to_string(),
            r#"{"type":"dismissed","detail":{"notification":{"id":"n9"}}}"#.to_string(),
        );

        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(event.event_type, EventType::Dismissed);
        assert_eq!(
            event.detail.notification.unwrap().id.as_deref(),
            Some("n9")
        );
    }
}
