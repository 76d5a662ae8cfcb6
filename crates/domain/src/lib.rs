mod alarm;
pub mod date;
mod lead_policy;
mod notification;
mod reminder;

pub use alarm::{AlarmPayload, PayloadError, PendingAlarm};
pub use lead_policy::LeadPolicy;
pub use notification::{Notification, ReopenAction, ReopenDestination};
pub use reminder::{
    DeliveryOutcome, DropReason, FiredReminder, InvalidCategoryError, ReminderCategory,
    ReminderKey, ReminderRequest, ScheduleOutcome, SkipReason,
};
