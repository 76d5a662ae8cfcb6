use crate::date::{at_local_time, local_date};
use crate::reminder::ReminderCategory;
use chrono::{Duration, NaiveTime};
use chrono_tz::Tz;

/// Decides how long before a domain event its reminder should fire.
///
/// Reservations are time of day sensitive and fire a fixed duration before
/// they start. Maintenance due dates have day granularity, so their
/// reminders fire at a fixed local time on the due date, whatever time of
/// day the due timestamp carries.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadPolicy {
    pub reservation_lead: Duration,
    pub maintenance_remind_at: NaiveTime,
}

impl LeadPolicy {
    pub fn new(reservation_lead: Duration, maintenance_remind_at: NaiveTime) -> Self {
        Self {
            reservation_lead,
            maintenance_remind_at,
        }
    }

    /// Timestamp in millis at which a reminder for an event due at `due_at`
    /// should fire, or `None` if there is no such instant in `tz`.
    pub fn fire_at(&self, category: ReminderCategory, due_at: i64, tz: &Tz) -> Option<i64> {
        match category {
            ReminderCategory::Reservation => {
                due_at.checked_sub(self.reservation_lead.num_milliseconds())
            }
            ReminderCategory::Maintenance => {
                let due_date = local_date(due_at, tz)?;
                at_local_time(due_date, self.maintenance_remind_at, tz)
            }
        }
    }
}

impl Default for LeadPolicy {
    fn default() -> Self {
        Self {
            reservation_lead: Duration::hours(1),
            maintenance_remind_at: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        }
    }
}
