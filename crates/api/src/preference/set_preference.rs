use crate::shared::usecase::UseCase;
use fleet_reminders_domain::ReminderCategory;
use fleet_reminders_infra::ReminderContext;

/// Persists whether reminders of a category should be delivered.
///
/// Alarms that are already pending are left alone, disabled reminders are
/// suppressed when they fire instead.
#[derive(Debug)]
pub struct SetPreferenceUseCase {
    pub category: ReminderCategory,
    pub enabled: bool,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(String),
}

impl UseCase for SetPreferenceUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "SetPreference";

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .preferences
            .set(self.category, self.enabled)
            .map_err(|e| UseCaseError::StorageError(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::is_category_enabled;
    use crate::shared::{test_utils::setup, usecase::execute};

    #[test]
    fn toggles_category() {
        let t = setup();
        let usecase = SetPreferenceUseCase {
            category: ReminderCategory::Reservation,
            enabled: false,
        };
        assert!(execute(usecase, &t.ctx).is_ok());
        assert!(!is_category_enabled(ReminderCategory::Reservation, &t.ctx));
        assert!(is_category_enabled(ReminderCategory::Maintenance, &t.ctx));

        let usecase = SetPreferenceUseCase {
            category: ReminderCategory::Reservation,
            enabled: true,
        };
        assert!(execute(usecase, &t.ctx).is_ok());
        assert!(is_category_enabled(ReminderCategory::Reservation, &t.ctx));
    }
}
