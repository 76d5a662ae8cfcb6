use super::IPreferenceRepo;
use anyhow::Context;
use fleet_reminders_domain::ReminderCategory;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Preferences persisted as a flat json object of
/// `ReminderCategory::preference_key` to flag.
///
/// Every read goes to disk so that separate processes sharing the file
/// observe each other's writes.
pub struct FilePreferenceRepo {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> anyhow::Result<BTreeMap<String, bool>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read preferences at {:?}", self.path))?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw)
            .with_context(|| format!("Malformed preferences at {:?}", self.path))
    }

    fn write(&self, preferences: &BTreeMap<String, bool>) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        // Write next to the target and rename so readers never see a partial file
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(preferences)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl IPreferenceRepo for FilePreferenceRepo {
    fn get(&self, category: ReminderCategory) -> Option<bool> {
        match self.read() {
            Ok(preferences) => preferences.get(category.preference_key()).copied(),
            Err(e) => {
                warn!("{:?}", e);
                None
            }
        }
    }

    fn set(&self, category: ReminderCategory, enabled: bool) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut preferences = match self.read() {
            Ok(preferences) => preferences,
            Err(e) => {
                warn!("Overwriting unreadable preferences. Err: {:?}", e);
                BTreeMap::new()
            }
        };
        preferences.insert(category.preference_key().to_string(), enabled);
        self.write(&preferences)
    }
}
