use super::NotificationSink;
use fleet_reminders_domain::{AlarmPayload, DeliveryOutcome};
use fleet_reminders_infra::ReminderContext;
use std::sync::Arc;
use tracing::warn;

type ResolveContext = dyn Fn() -> ReminderContext + Send + Sync;

/// Invoked by the host when an alarm fires.
///
/// The process that scheduled the alarm may be long gone, so the receiver
/// keeps no state of its own: everything about the reminder comes from the
/// payload, and the context is resolved again on every fire.
#[derive(Clone)]
pub struct DispatchReceiver {
    resolve: Arc<ResolveContext>,
}

impl DispatchReceiver {
    pub fn new<F>(resolve: F) -> Self
    where
        F: Fn() -> ReminderContext + Send + Sync + 'static,
    {
        Self {
            resolve: Arc::new(resolve),
        }
    }

    /// Malformed payloads are logged and dropped, there is no caller to
    /// report them to.
    pub fn on_fire(&self, payload: &AlarmPayload) -> Option<DeliveryOutcome> {
        let reminder = match payload.parse() {
            Ok(reminder) => reminder,
            Err(e) => {
                warn!("Dropping fired alarm: {}. Payload: {:?}", e, payload.extras);
                return None;
            }
        };

        let sink = NotificationSink::new((self.resolve)());
        Some(sink.deliver(reminder))
    }
}
