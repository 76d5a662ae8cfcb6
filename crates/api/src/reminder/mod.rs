mod cancel_reminder;
mod schedule_reminder;

use crate::error::ReminderError;
use crate::shared::usecase::execute;
use cancel_reminder::CancelReminderUseCase;
use fleet_reminders_domain::{
    ReminderCategory, ReminderKey, ReminderRequest, ScheduleOutcome, SkipReason,
};
use fleet_reminders_infra::ReminderContext;
use schedule_reminder::ScheduleReminderUseCase;

fn handle_error(e: schedule_reminder::UseCaseError) -> ReminderError {
    match e {
        schedule_reminder::UseCaseError::AlarmRegistration(key, reason) => {
            ReminderError::AlarmRegistration { key, reason }
        }
    }
}

/// Entry point for domain collaborators that create, edit or delete
/// reservations and maintenance records.
///
/// A reminder is identified by its category and entity id only. To move a
/// reminder, cancel it and schedule it again, or use `reschedule`.
#[derive(Clone)]
pub struct ReminderScheduler {
    ctx: ReminderContext,
}

impl ReminderScheduler {
    pub fn new(ctx: ReminderContext) -> Self {
        Self { ctx }
    }

    /// Schedules the reminder. Reminders that can not be scheduled are
    /// skipped silently, the outcome only tells why.
    pub fn schedule(&self, request: ReminderRequest) -> ScheduleOutcome {
        self.try_schedule(request)
            .unwrap_or(ScheduleOutcome::Skipped(SkipReason::RegistrationFailed))
    }

    /// Like `schedule`, but reports a host refusing to register the alarm
    pub fn try_schedule(&self, request: ReminderRequest) -> Result<ScheduleOutcome, ReminderError> {
        let usecase = ScheduleReminderUseCase { request };
        execute(usecase, &self.ctx).map_err(handle_error)
    }

    /// Removes the pending reminder of the entity. Returns whether there was one.
    pub fn cancel(&self, category: ReminderCategory, entity_id: i64) -> bool {
        let usecase = CancelReminderUseCase {
            key: ReminderKey::new(category, entity_id),
        };
        match execute(usecase, &self.ctx) {
            Ok(cancelled) => cancelled,
            Err(e) => match e {},
        }
    }

    /// Replaces the pending reminder of the entity with one for the new request
    pub fn reschedule(&self, request: ReminderRequest) -> ScheduleOutcome {
        self.cancel(request.category, request.entity_id);
        self.schedule(request)
    }
}
