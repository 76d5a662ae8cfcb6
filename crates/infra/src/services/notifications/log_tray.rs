use super::INotificationManager;
use fleet_reminders_domain::Notification;
use tracing::info;

/// Tray for headless hosts, every notification becomes a log event
pub struct LogNotificationManager {}

impl INotificationManager for LogNotificationManager {
    fn are_notifications_enabled(&self) -> bool {
        true
    }

    fn notify(&self, notification: &Notification) {
        info!(
            notification_id = %notification.id,
            channel = notification.channel_id,
            reopen_category = %notification.reopen.category,
            reopen_entity_id = notification.reopen.entity_id,
            "{}: {}",
            notification.title,
            notification.message
        );
    }
}
