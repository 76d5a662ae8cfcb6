mod set_preference;

use crate::error::ReminderError;
use crate::shared::usecase::execute;
use fleet_reminders_domain::ReminderCategory;
use fleet_reminders_infra::ReminderContext;
use set_preference::{SetPreferenceUseCase, UseCaseError};

/// Reminders are delivered unless the user explicitly turned the category off
pub(crate) fn is_category_enabled(category: ReminderCategory, ctx: &ReminderContext) -> bool {
    ctx.repos.preferences.get(category).unwrap_or(true)
}

fn handle_error(e: UseCaseError) -> ReminderError {
    match e {
        UseCaseError::StorageError(msg) => ReminderError::Storage(msg),
    }
}

/// The user's delivery preferences, one flag per `ReminderCategory`
#[derive(Clone)]
pub struct PreferenceGate {
    ctx: ReminderContext,
}

impl PreferenceGate {
    pub fn new(ctx: ReminderContext) -> Self {
        Self { ctx }
    }

    pub fn is_enabled(&self, category: ReminderCategory) -> bool {
        is_category_enabled(category, &self.ctx)
    }

    pub fn set_enabled(&self, category: ReminderCategory, enabled: bool) -> Result<(), ReminderError> {
        let usecase = SetPreferenceUseCase { category, enabled };
        execute(usecase, &self.ctx).map_err(handle_error)
    }
}
