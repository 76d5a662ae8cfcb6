use crate::reminder::{FiredReminder, ReminderCategory, ReminderKey};
use serde::{Deserialize, Serialize};

/// Handed to the host application when the user activates a delivered
/// notification. The host decides how to navigate to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReopenAction {
    pub category: ReminderCategory,
    pub entity_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReopenDestination {
    ReservationDetail { reservation_id: i64 },
    MaintenanceDetail { maintenance_id: i64 },
}

impl ReopenAction {
    pub fn destination(&self) -> ReopenDestination {
        match self.category {
            ReminderCategory::Reservation => ReopenDestination::ReservationDetail {
                reservation_id: self.entity_id,
            },
            ReminderCategory::Maintenance => ReopenDestination::MaintenanceDetail {
                maintenance_id: self.entity_id,
            },
        }
    }
}

/// A user visible notification. Posting a `Notification` with the `id` of
/// one already in the tray replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ReminderKey,
    pub channel_id: &'static str,
    pub title: String,
    pub message: String,
    pub reopen: ReopenAction,
    /// Dismiss the notification once the user taps it
    pub auto_cancel: bool,
}

impl Notification {
    pub fn for_reminder(reminder: &FiredReminder) -> Self {
        Self {
            id: reminder.key(),
            channel_id: reminder.category.channel_id(),
            title: reminder.title.clone(),
            message: reminder.message.clone(),
            reopen: ReopenAction {
                category: reminder.category,
                entity_id: reminder.entity_id,
            },
            auto_cancel: true,
        }
    }
}
