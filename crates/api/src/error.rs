use fleet_reminders_domain::ReminderKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("Unable to persist delivery preference. Error message: `{0}`")]
    Storage(String),
    #[error("Host refused to register the alarm for {key}. Error message: `{reason}`")]
    AlarmRegistration { key: ReminderKey, reason: String },
}
