mod alarms;
mod notifications;

pub use alarms::{IAlarmManager, InMemoryAlarmManager, TokioAlarmManager};
pub use notifications::{
    INotificationManager, InMemoryNotificationManager, LogNotificationManager,
};
use std::sync::Arc;

/// Facilities provided by the host the reminders run on
#[derive(Clone)]
pub struct Services {
    pub alarms: Arc<dyn IAlarmManager>,
    pub notifications: Arc<dyn INotificationManager>,
}

