use chrono_tz::UTC;
use fleet_reminders_domain::LeadPolicy;
use fleet_reminders_infra::{
    Config, InMemoryAlarmManager, InMemoryNotificationManager, InMemoryPreferenceRepo, MockSys,
    ReminderContext, Repos, Services,
};
use std::sync::Arc;

/// Sun Feb 21 2021 00:00:00 UTC
pub const START: i64 = 1613865600000;
pub const MINUTE: i64 = 1000 * 60;
pub const HOUR: i64 = MINUTE * 60;

pub struct TestContext {
    pub ctx: ReminderContext,
    pub sys: Arc<MockSys>,
    pub alarms: Arc<InMemoryAlarmManager>,
    pub notifications: Arc<InMemoryNotificationManager>,
    pub preferences: Arc<InMemoryPreferenceRepo>,
}

pub fn setup() -> TestContext {
    let sys = Arc::new(MockSys::new(START));
    let alarms = Arc::new(InMemoryAlarmManager::new());
    let notifications = Arc::new(InMemoryNotificationManager::new());
    let preferences = Arc::new(InMemoryPreferenceRepo::new());

    let ctx = ReminderContext {
        repos: Repos {
            preferences: preferences.clone(),
        },
        services: Services {
            alarms: alarms.clone(),
            notifications: notifications.clone(),
        },
        config: Config {
            timezone: UTC,
            lead_policy: LeadPolicy::default(),
            preferences_path: None,
        },
        sys: sys.clone(),
    };

    TestContext {
        ctx,
        sys,
        alarms,
        notifications,
        preferences,
    }
}
