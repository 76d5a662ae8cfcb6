use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The kind of domain event a `Reminder` is about. Every category has its
/// own lead time policy and its own delivery preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderCategory {
    Reservation,
    Maintenance,
}

impl ReminderCategory {
    pub const ALL: [ReminderCategory; 2] = [Self::Reservation, Self::Maintenance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reservation => "reservation",
            Self::Maintenance => "maintenance",
        }
    }

    /// Key under which the delivery preference of this category is persisted
    pub fn preference_key(&self) -> &'static str {
        match self {
            Self::Reservation => "reservation_reminders_enabled",
            Self::Maintenance => "maintenance_reminders_enabled",
        }
    }

    /// Notification channel that delivered reminders of this category are posted to
    pub fn channel_id(&self) -> &'static str {
        match self {
            Self::Reservation => "reservation_reminders",
            Self::Maintenance => "maintenance_reminders",
        }
    }
}

impl Display for ReminderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown reminder category: `{0}`")]
pub struct InvalidCategoryError(pub String);

impl FromStr for ReminderCategory {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reservation" => Ok(Self::Reservation),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(InvalidCategoryError(s.to_string())),
        }
    }
}

/// Identity of a pending reminder. The same key is used to register the
/// alarm, to cancel it and to post the delivered notification, so that two
/// reminders for the same entity always replace each other.
///
/// The variant carries the category, so keys of different categories can
/// never collide regardless of the entity id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "category", content = "entity_id", rename_all = "lowercase")]
pub enum ReminderKey {
    Reservation(i64),
    Maintenance(i64),
}

impl ReminderKey {
    pub fn new(category: ReminderCategory, entity_id: i64) -> Self {
        match category {
            ReminderCategory::Reservation => Self::Reservation(entity_id),
            ReminderCategory::Maintenance => Self::Maintenance(entity_id),
        }
    }

    pub fn category(&self) -> ReminderCategory {
        match self {
            Self::Reservation(_) => ReminderCategory::Reservation,
            Self::Maintenance(_) => ReminderCategory::Maintenance,
        }
    }

    pub fn entity_id(&self) -> i64 {
        match *self {
            Self::Reservation(id) | Self::Maintenance(id) => id,
        }
    }
}

impl Display for ReminderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.category(), self.entity_id())
    }
}

/// A request from a domain collaborator (reservation or maintenance CRUD)
/// to remind the user about an upcoming event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderRequest {
    pub category: ReminderCategory,
    /// Id of the reservation or maintenance record
    pub entity_id: i64,
    /// Timestamp in millis of the domain event itself, not of the reminder
    pub due_at: i64,
    pub title: String,
    pub message: String,
}

impl ReminderRequest {
    pub fn reservation(entity_id: i64, due_at: i64, title: &str, message: &str) -> Self {
        Self {
            category: ReminderCategory::Reservation,
            entity_id,
            due_at,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn maintenance(entity_id: i64, due_at: i64, title: &str, message: &str) -> Self {
        Self {
            category: ReminderCategory::Maintenance,
            entity_id,
            due_at,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn key(&self) -> ReminderKey {
        ReminderKey::new(self.category, self.entity_id)
    }
}

/// The content of an alarm that has fired, as recovered from its payload
#[derive(Debug, Clone, PartialEq)]
pub struct FiredReminder {
    pub category: ReminderCategory,
    pub entity_id: i64,
    pub title: String,
    pub message: String,
}

impl FiredReminder {
    pub fn key(&self) -> ReminderKey {
        ReminderKey::new(self.category, self.entity_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    CategoryDisabled,
    /// The lead adjusted fire time was not in the future
    FireTimePassed,
    /// The fire time does not exist in the local timezone
    NoFireTime,
    ExactAlarmUnavailable,
    RegistrationFailed,
}

/// Result of asking for a reminder to be scheduled. A skipped reminder is
/// not an error, it simply never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Scheduled { key: ReminderKey, fire_at: i64 },
    Skipped(SkipReason),
}

impl ScheduleOutcome {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    CategoryDisabled,
    NotificationsBlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered(ReminderKey),
    Dropped(DropReason),
}
