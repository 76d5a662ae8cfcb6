use crate::preference::is_category_enabled;
use crate::shared::usecase::UseCase;
use fleet_reminders_domain::{DeliveryOutcome, DropReason, FiredReminder, Notification};
use fleet_reminders_infra::ReminderContext;
use tracing::debug;

/// Turns a fired reminder into a notification in the user's tray
#[derive(Debug)]
pub struct DeliverNotificationUseCase {
    pub reminder: FiredReminder,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl UseCase for DeliverNotificationUseCase {
    type Response = DeliveryOutcome;

    type Error = UseCaseError;

    const NAME: &'static str = "DeliverNotification";

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let key = self.reminder.key();

        // The preference may have changed since the alarm was scheduled
        if !is_category_enabled(self.reminder.category, ctx) {
            debug!("Dropping {}, {} reminders are disabled", key, self.reminder.category);
            return Ok(DeliveryOutcome::Dropped(DropReason::CategoryDisabled));
        }

        let notifications = &ctx.services.notifications;
        if !notifications.are_notifications_enabled() {
            debug!("Dropping {}, notifications are blocked", key);
            return Ok(DeliveryOutcome::Dropped(DropReason::NotificationsBlocked));
        }

        notifications.notify(&Notification::for_reminder(&self.reminder));

        Ok(DeliveryOutcome::Delivered(key))
    }
}
