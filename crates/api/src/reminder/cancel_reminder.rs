use crate::shared::usecase::UseCase;
use fleet_reminders_domain::ReminderKey;
use fleet_reminders_infra::ReminderContext;
use tracing::debug;

/// Removes the pending alarm of a reminder, if there is one
#[derive(Debug)]
pub struct CancelReminderUseCase {
    pub key: ReminderKey,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl UseCase for CancelReminderUseCase {
    /// Whether an alarm was pending
    type Response = bool;

    type Error = UseCaseError;

    const NAME: &'static str = "CancelReminder";

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let cancelled = ctx.services.alarms.cancel(&self.key);
        if !cancelled {
            debug!("No pending alarm for {}", self.key);
        }
        Ok(cancelled)
    }
}
