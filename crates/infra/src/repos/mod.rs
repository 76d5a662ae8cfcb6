mod preference;

pub use preference::{FilePreferenceRepo, IPreferenceRepo, InMemoryPreferenceRepo};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub preferences: Arc<dyn IPreferenceRepo>,
}

impl Repos {
    pub fn create_file(path: &Path) -> Self {
        info!("Delivery preferences are persisted at {:?}", path);
        Self {
            preferences: Arc::new(FilePreferenceRepo::new(path)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            preferences: Arc::new(InMemoryPreferenceRepo::new()),
        }
    }
}
