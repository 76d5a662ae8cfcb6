mod inmemory;
mod log_tray;

use fleet_reminders_domain::Notification;
pub use inmemory::InMemoryNotificationManager;
pub use log_tray::LogNotificationManager;

/// The host's notification tray
pub trait INotificationManager: Send + Sync {
    /// Whether the user allows the application to post notifications
    fn are_notifications_enabled(&self) -> bool;
    /// Posts the notification, replacing any notification with the same id
    fn notify(&self, notification: &Notification);
}
