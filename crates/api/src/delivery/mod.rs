mod deliver_notification;
mod dispatch_receiver;

use crate::shared::usecase::execute;
use deliver_notification::DeliverNotificationUseCase;
pub use dispatch_receiver::DispatchReceiver;
use fleet_reminders_domain::{DeliveryOutcome, FiredReminder};
use fleet_reminders_infra::ReminderContext;

/// Presents fired reminders to the user. Delivery is fire and forget,
/// nothing is retried.
#[derive(Clone)]
pub struct NotificationSink {
    ctx: ReminderContext,
}

impl NotificationSink {
    pub fn new(ctx: ReminderContext) -> Self {
        Self { ctx }
    }

    pub fn deliver(&self, reminder: FiredReminder) -> DeliveryOutcome {
        let usecase = DeliverNotificationUseCase { reminder };
        match execute(usecase, &self.ctx) {
            Ok(outcome) => outcome,
            Err(e) => match e {},
        }
    }
}
