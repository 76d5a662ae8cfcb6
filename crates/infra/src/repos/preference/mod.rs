mod file;
mod inmemory;

pub use file::FilePreferenceRepo;
use fleet_reminders_domain::ReminderCategory;
pub use inmemory::InMemoryPreferenceRepo;

/// Process wide storage of the delivery preference of each
/// `ReminderCategory`.
pub trait IPreferenceRepo: Send + Sync {
    /// The stored flag, or `None` if it was never set or could not be read
    fn get(&self, category: ReminderCategory) -> Option<bool>;
    fn set(&self, category: ReminderCategory, enabled: bool) -> anyhow::Result<()>;
}
