use super::IAlarmManager;
use fleet_reminders_domain::{PendingAlarm, ReminderKey};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Alarm table of a simulated host. Nothing fires by itself, the owner
/// collects due alarms with `take_due`.
pub struct InMemoryAlarmManager {
    alarms: Mutex<HashMap<ReminderKey, PendingAlarm>>,
    exact_alarms_allowed: AtomicBool,
}

impl InMemoryAlarmManager {
    pub fn new() -> Self {
        Self {
            alarms: Mutex::new(HashMap::new()),
            exact_alarms_allowed: AtomicBool::new(true),
        }
    }

    pub fn set_exact_alarms_allowed(&self, allowed: bool) {
        self.exact_alarms_allowed.store(allowed, Ordering::SeqCst);
    }

    pub fn pending(&self, key: &ReminderKey) -> Option<PendingAlarm> {
        let alarms = self.alarms.lock().unwrap_or_else(PoisonError::into_inner);
        alarms.get(key).cloned()
    }

    pub fn pending_count(&self) -> usize {
        let alarms = self.alarms.lock().unwrap_or_else(PoisonError::into_inner);
        alarms.len()
    }

    /// Removes and returns every alarm due at `now`, earliest first.
    /// Alarms are one-shot so a taken alarm never fires again.
    pub fn take_due(&self, now: i64) -> Vec<PendingAlarm> {
        let mut alarms = self.alarms.lock().unwrap_or_else(PoisonError::into_inner);
        let due_keys = alarms
            .values()
            .filter(|alarm| alarm.fire_at <= now)
            .map(|alarm| alarm.key)
            .collect::<Vec<_>>();

        let mut due = due_keys
            .iter()
            .filter_map(|key| alarms.remove(key))
            .collect::<Vec<_>>();
        due.sort_by_key(|alarm| (alarm.fire_at, alarm.key));
        due
    }
}

impl Default for InMemoryAlarmManager {
    fn default() -> Self {
        Self::new()
    }
}

impl IAlarmManager for InMemoryAlarmManager {
    fn can_schedule_exact_alarms(&self) -> bool {
        self.exact_alarms_allowed.load(Ordering::SeqCst)
    }

    fn set_exact_and_allow_while_idle(&self, alarm: PendingAlarm) -> anyhow::Result<()> {
        let mut alarms = self.alarms.lock().unwrap_or_else(PoisonError::into_inner);
        alarms.insert(alarm.key, alarm);
        Ok(())
    }

    fn cancel(&self, key: &ReminderKey) -> bool {
        let mut alarms = self.alarms.lock().unwrap_or_else(PoisonError::into_inner);
        alarms.remove(key).is_some()
    }
}
