use crate::reminder::{FiredReminder, ReminderCategory, ReminderKey, ReminderRequest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

const CATEGORY: &str = "category";
const ENTITY_ID: &str = "entity_id";
const TITLE: &str = "title";
const MESSAGE: &str = "message";

/// The data attached to a registered alarm.
///
/// This is everything the receiving side gets when the alarm fires, possibly
/// in a different process than the one that scheduled it, so it is kept as
/// a flat map of string extras that any host can persist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmPayload {
    pub extras: BTreeMap<String, String>,
}

#[derive(Error, Debug, PartialEq)]
pub enum PayloadError {
    #[error("Alarm payload is missing the `{0}` extra")]
    MissingField(&'static str),
    #[error("Alarm payload has an unknown category: `{0}`")]
    InvalidCategory(String),
    #[error("Alarm payload has a malformed entity id: `{0}`")]
    InvalidEntityId(String),
}

impl AlarmPayload {
    pub fn new(request: &ReminderRequest) -> Self {
        let mut extras = BTreeMap::new();
        extras.insert(CATEGORY.to_string(), request.category.as_str().to_string());
        extras.insert(ENTITY_ID.to_string(), request.entity_id.to_string());
        extras.insert(TITLE.to_string(), request.title.clone());
        extras.insert(MESSAGE.to_string(), request.message.clone());
        Self { extras }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(|v| v.as_str())
    }

    /// Recovers the fired reminder. Category and entity id are required,
    /// a missing title or message is delivered as an empty string.
    pub fn parse(&self) -> Result<FiredReminder, PayloadError> {
        let category = self
            .get(CATEGORY)
            .ok_or(PayloadError::MissingField(CATEGORY))?;
        let category = category
            .parse::<ReminderCategory>()
            .map_err(|e| PayloadError::InvalidCategory(e.0))?;
        let entity_id = self
            .get(ENTITY_ID)
            .ok_or(PayloadError::MissingField(ENTITY_ID))?;
        let entity_id = entity_id
            .trim()
            .parse::<i64>()
            .map_err(|_| PayloadError::InvalidEntityId(entity_id.to_string()))?;

        Ok(FiredReminder {
            category,
            entity_id,
            title: self.get(TITLE).unwrap_or_default().to_string(),
            message: self.get(MESSAGE).unwrap_or_default().to_string(),
        })
    }
}

/// A one-shot alarm as registered with the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAlarm {
    pub key: ReminderKey,
    /// Timestamp in millis at which the alarm should fire
    pub fire_at: i64,
    pub payload: AlarmPayload,
}

impl PendingAlarm {
    pub fn new(request: &ReminderRequest, fire_at: i64) -> Self {
        Self {
            key: request.key(),
            fire_at,
            payload: AlarmPayload::new(request),
        }
    }
}
