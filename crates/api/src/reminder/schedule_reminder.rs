use crate::preference::is_category_enabled;
use crate::shared::usecase::UseCase;
use fleet_reminders_domain::{
    PendingAlarm, ReminderKey, ReminderRequest, ScheduleOutcome, SkipReason,
};
use fleet_reminders_infra::ReminderContext;
use tracing::debug;

/// Registers a one-shot alarm that reminds the user of an upcoming
/// reservation or maintenance ahead of its due time.
#[derive(Debug)]
pub struct ScheduleReminderUseCase {
    pub request: ReminderRequest,
}

#[derive(Debug)]
pub enum UseCaseError {
    AlarmRegistration(ReminderKey, String),
}

impl UseCase for ScheduleReminderUseCase {
    type Response = ScheduleOutcome;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleReminder";

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let request = &self.request;
        let key = request.key();

        if !is_category_enabled(request.category, ctx) {
            debug!("Not scheduling {}, {} reminders are disabled", key, request.category);
            return Ok(ScheduleOutcome::Skipped(SkipReason::CategoryDisabled));
        }

        let fire_at = match ctx.config.lead_policy.fire_at(
            request.category,
            request.due_at,
            &ctx.config.timezone,
        ) {
            Some(fire_at) => fire_at,
            None => {
                debug!("Not scheduling {}, it has no local fire time", key);
                return Ok(ScheduleOutcome::Skipped(SkipReason::NoFireTime));
            }
        };

        let now = ctx.sys.get_timestamp_millis();
        if fire_at <= now {
            debug!(
                "Not scheduling {}, its fire time {} is not after {}",
                key, fire_at, now
            );
            return Ok(ScheduleOutcome::Skipped(SkipReason::FireTimePassed));
        }

        let alarms = &ctx.services.alarms;
        if !alarms.can_schedule_exact_alarms() {
            debug!("Not scheduling {}, exact alarms are not available", key);
            return Ok(ScheduleOutcome::Skipped(SkipReason::ExactAlarmUnavailable));
        }

        alarms
            .set_exact_and_allow_while_idle(PendingAlarm::new(request, fire_at))
            .map_err(|e| UseCaseError::AlarmRegistration(key, format!("{:?}", e)))?;

        Ok(ScheduleOutcome::Scheduled { key, fire_at })
    }
}
