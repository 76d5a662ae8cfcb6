use chrono_tz::Tz;
use fleet_reminders::{
    Config, DeliveryOutcome, DispatchReceiver, InMemoryAlarmManager, InMemoryNotificationManager,
    InMemoryPreferenceRepo, LeadPolicy, MockSys, PreferenceGate, ReminderContext,
    ReminderScheduler, Repos, Services,
};
use std::sync::Arc;

/// A host whose clock only moves when told to and whose alarms only fire
/// when the clock is advanced past them.
#[derive(Clone)]
pub struct SimulatedHost {
    pub sys: Arc<MockSys>,
    pub alarms: Arc<InMemoryAlarmManager>,
    pub notifications: Arc<InMemoryNotificationManager>,
    pub preferences: Arc<InMemoryPreferenceRepo>,
    pub timezone: Tz,
}

impl SimulatedHost {
    pub fn new(now: i64, timezone: Tz) -> Self {
        Self {
            sys: Arc::new(MockSys::new(now)),
            alarms: Arc::new(InMemoryAlarmManager::new()),
            notifications: Arc::new(InMemoryNotificationManager::new()),
            preferences: Arc::new(InMemoryPreferenceRepo::new()),
            timezone,
        }
    }

    /// A context built from scratch, as a freshly started process would
    pub fn context(&self) -> ReminderContext {
        ReminderContext {
            repos: Repos {
                preferences: self.preferences.clone(),
            },
            services: Services {
                alarms: self.alarms.clone(),
                notifications: self.notifications.clone(),
            },
            config: Config {
                timezone: self.timezone,
                lead_policy: LeadPolicy::default(),
                preferences_path: None,
            },
            sys: self.sys.clone(),
        }
    }

    pub fn scheduler(&self) -> ReminderScheduler {
        ReminderScheduler::new(self.context())
    }

    pub fn preferences(&self) -> PreferenceGate {
        PreferenceGate::new(self.context())
    }

    pub fn receiver(&self) -> DispatchReceiver {
        let host = self.clone();
        DispatchReceiver::new(move || host.context())
    }

    /// Moves the clock to `now` and fires every alarm due by then
    pub fn advance_to(&self, now: i64) -> Vec<Option<DeliveryOutcome>> {
        self.sys.set_timestamp_millis(now);
        let receiver = self.receiver();
        self.alarms
            .take_due(now)
            .iter()
            .map(|alarm| receiver.on_fire(&alarm.payload))
            .collect()
    }
}
