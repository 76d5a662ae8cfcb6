use super::INotificationManager;
use fleet_reminders_domain::{Notification, ReminderKey};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

pub struct InMemoryNotificationManager {
    tray: Mutex<Vec<Notification>>,
    posted: AtomicUsize,
    enabled: AtomicBool,
}

impl InMemoryNotificationManager {
    pub fn new() -> Self {
        Self {
            tray: Mutex::new(vec![]),
            posted: AtomicUsize::new(0),
            enabled: AtomicBool::new(true),
        }
    }

    pub fn set_notifications_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Notifications currently shown, in the order they were first posted
    pub fn active(&self) -> Vec<Notification> {
        self.tray
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn find(&self, id: &ReminderKey) -> Option<Notification> {
        let tray = self.tray.lock().unwrap_or_else(PoisonError::into_inner);
        tray.iter().find(|n| n.id == *id).cloned()
    }

    /// How many times `notify` was called, including replacements
    pub fn posted_count(&self) -> usize {
        self.posted.load(Ordering::SeqCst)
    }

    /// The user swiping a notification away
    pub fn dismiss(&self, id: &ReminderKey) -> Option<Notification> {
        let mut tray = self.tray.lock().unwrap_or_else(PoisonError::into_inner);
        let index = tray.iter().position(|n| n.id == *id)?;
        Some(tray.remove(index))
    }
}

impl Default for InMemoryNotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl INotificationManager for InMemoryNotificationManager {
    fn are_notifications_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn notify(&self, notification: &Notification) {
        self.posted.fetch_add(1, Ordering::SeqCst);
        let mut tray = self.tray.lock().unwrap_or_else(PoisonError::into_inner);
        match tray.iter_mut().find(|n| n.id == notification.id) {
            Some(existing) => *existing = notification.clone(),
            None => tray.push(notification.clone()),
        }
    }
}
