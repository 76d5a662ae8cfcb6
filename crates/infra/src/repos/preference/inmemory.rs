use super::IPreferenceRepo;
use fleet_reminders_domain::ReminderCategory;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

pub struct InMemoryPreferenceRepo {
    preferences: Mutex<HashMap<ReminderCategory, bool>>,
}

impl InMemoryPreferenceRepo {
    pub fn new() -> Self {
        Self {
            preferences: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPreferenceRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl IPreferenceRepo for InMemoryPreferenceRepo {
    fn get(&self, category: ReminderCategory) -> Option<bool> {
        let preferences = self.preferences.lock().unwrap_or_else(PoisonError::into_inner);
        preferences.get(&category).copied()
    }

    fn set(&self, category: ReminderCategory, enabled: bool) -> anyhow::Result<()> {
        let mut preferences = self.preferences.lock().unwrap_or_else(PoisonError::into_inner);
        preferences.insert(category, enabled);
        Ok(())
    }
}
