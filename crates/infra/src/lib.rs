mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
use fleet_reminders_domain::AlarmPayload;
pub use repos::{FilePreferenceRepo, IPreferenceRepo, InMemoryPreferenceRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, MockSys, RealSys};
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub services: Services,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl ReminderContext {
    fn create(config: Config) -> (Self, UnboundedReceiver<AlarmPayload>) {
        let sys: Arc<dyn ISys> = Arc::new(RealSys {});
        let repos = match &config.preferences_path {
            Some(path) => Repos::create_file(path),
            None => Repos::create_inmemory(),
        };
        let (alarms, fired) = TokioAlarmManager::new(sys.clone());
        let services = Services {
            alarms: Arc::new(alarms),
            notifications: Arc::new(LogNotificationManager {}),
        };
        let ctx = Self {
            repos,
            services,
            config,
            sys,
        };
        (ctx, fired)
    }
}

/// Will setup the infrastructure context given the environment.
///
/// Alarms are tokio timers, so the returned receiver of fired alarm
/// payloads has to be drained inside a tokio runtime.
pub fn setup_context() -> (ReminderContext, UnboundedReceiver<AlarmPayload>) {
    ReminderContext::create(Config::new())
}
