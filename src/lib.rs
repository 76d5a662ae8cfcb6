//! Local reminders for reservations and maintenance of fleet vehicles.
//!
//! Domain collaborators hand `ReminderRequest`s to the `ReminderScheduler`,
//! which registers one-shot alarms with the host. When an alarm fires the
//! host calls the `DispatchReceiver`, which hands the reminder to the
//! `NotificationSink`. Both check the user's `PreferenceGate`.
pub mod telemetry;

pub use fleet_reminders_api::*;
pub use fleet_reminders_domain::*;
pub use fleet_reminders_infra::*;
