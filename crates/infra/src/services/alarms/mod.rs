mod inmemory;
mod runtime;

use fleet_reminders_domain::{PendingAlarm, ReminderKey};
pub use inmemory::InMemoryAlarmManager;
pub use runtime::TokioAlarmManager;

/// The host facility that keeps one-shot alarms and hands their payload
/// back when they fire.
///
/// There is at most one pending alarm per `ReminderKey`: registering an
/// alarm under a key that is already pending replaces it.
pub trait IAlarmManager: Send + Sync {
    /// Whether the host currently allows exact alarms to be registered
    fn can_schedule_exact_alarms(&self) -> bool;
    /// Registers an alarm that fires as close to `fire_at` as the host
    /// permits, waking the device from low power states if needed.
    fn set_exact_and_allow_while_idle(&self, alarm: PendingAlarm) -> anyhow::Result<()>;
    /// Removes the pending alarm under `key`. Returns whether there was one.
    fn cancel(&self, key: &ReminderKey) -> bool;
}
