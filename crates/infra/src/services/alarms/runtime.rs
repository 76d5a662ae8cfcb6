use super::IAlarmManager;
use crate::system::ISys;
use anyhow::Context;
use fleet_reminders_domain::{AlarmPayload, PendingAlarm, ReminderKey};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Alarms backed by tokio timers: every pending alarm is a task sleeping
/// until its fire time, after which its payload is sent on the channel
/// returned by `TokioAlarmManager::new`.
pub struct TokioAlarmManager {
    sys: Arc<dyn ISys>,
    fired: UnboundedSender<AlarmPayload>,
    tasks: Mutex<HashMap<ReminderKey, JoinHandle<()>>>,
}

impl TokioAlarmManager {
    pub fn new(sys: Arc<dyn ISys>) -> (Self, UnboundedReceiver<AlarmPayload>) {
        let (fired, fired_rx) = unbounded_channel();
        let manager = Self {
            sys,
            fired,
            tasks: Mutex::new(HashMap::new()),
        };
        (manager, fired_rx)
    }
}

impl IAlarmManager for TokioAlarmManager {
    fn can_schedule_exact_alarms(&self) -> bool {
        Handle::try_current().is_ok()
    }

    fn set_exact_and_allow_while_idle(&self, alarm: PendingAlarm) -> anyhow::Result<()> {
        let handle = Handle::try_current().context("Alarms can only be set inside a tokio runtime")?;

        let millis_to_fire = (alarm.fire_at - self.sys.get_timestamp_millis()).max(0) as u64;
        let fired = self.fired.clone();
        let key = alarm.key;
        let payload = alarm.payload;
        let task = handle.spawn(async move {
            tokio::time::sleep(Duration::from_millis(millis_to_fire)).await;
            debug!("Alarm {} fired", key);
            if fired.send(payload).is_err() {
                warn!("Alarm {} fired but nobody is receiving fired alarms", key);
            }
        });

        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        tasks.retain(|_, task| !task.is_finished());
        if let Some(previous) = tasks.insert(key, task) {
            previous.abort();
        }
        Ok(())
    }

    fn cancel(&self, key: &ReminderKey) -> bool {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        match tasks.remove(key) {
            Some(task) if !task.is_finished() => {
                task.abort();
                true
            }
            _ => false,
        }
    }
}
