use chrono::{Duration, NaiveTime};
use chrono_tz::{Tz, UTC};
use fleet_reminders_domain::LeadPolicy;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Timezone used to find the local calendar date of maintenance
    /// due dates and the local time their reminders fire at
    pub timezone: Tz,
    /// How long before the due time reminders of each category fire
    pub lead_policy: LeadPolicy,
    /// Where delivery preferences are persisted. When not set the
    /// preferences only live as long as the process.
    pub preferences_path: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        let timezone = match std::env::var("REMINDERS_TIMEZONE") {
            Ok(tz) => match tz.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given REMINDERS_TIMEZONE: {} is not valid, falling back to UTC.",
                        tz
                    );
                    UTC
                }
            },
            Err(_) => UTC,
        };

        let default_lead_minutes = 60;
        let lead_minutes = parse_env("RESERVATION_REMINDER_LEAD_MINUTES", default_lead_minutes)
            .filter(|minutes| *minutes >= 0)
            .unwrap_or_else(|| {
                warn!(
                    "Invalid RESERVATION_REMINDER_LEAD_MINUTES, falling back to: {}.",
                    default_lead_minutes
                );
                default_lead_minutes
            });

        let default_hour = 9;
        let remind_at = parse_env("MAINTENANCE_REMINDER_HOUR", default_hour)
            .and_then(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .unwrap_or_else(|| {
                warn!(
                    "Invalid MAINTENANCE_REMINDER_HOUR, falling back to: {}.",
                    default_hour
                );
                LeadPolicy::default().maintenance_remind_at
            });

        let preferences_path = match std::env::var("REMINDERS_PREFERENCES_PATH") {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => {
                info!("Did not find REMINDERS_PREFERENCES_PATH environment variable. Delivery preferences will not be persisted.");
                None
            }
        };

        Self {
            timezone,
            lead_policy: LeadPolicy::new(Duration::minutes(lead_minutes), remind_at),
            preferences_path,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads and parses an environment variable. Returns the default when the
/// variable is absent and `None` when it is present but malformed.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Option<T> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse::<T>().ok(),
        Err(_) => Some(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_env_values() {
        std::env::set_var("FLEET_REMINDERS_TEST_VALID", " 30 ");
        std::env::set_var("FLEET_REMINDERS_TEST_INVALID", "thirty");
        assert_eq!(parse_env::<i64>("FLEET_REMINDERS_TEST_VALID", 60), Some(30));
        assert_eq!(parse_env::<i64>("FLEET_REMINDERS_TEST_INVALID", 60), None);
        assert_eq!(parse_env::<i64>("FLEET_REMINDERS_TEST_MISSING", 60), Some(60));
    }

    const VARS: [&str; 4] = [
        "REMINDERS_TIMEZONE",
        "RESERVATION_REMINDER_LEAD_MINUTES",
        "MAINTENANCE_REMINDER_HOUR",
        "REMINDERS_PREFERENCES_PATH",
    ];

    fn clear_env() {
        for var in VARS.iter() {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial_test::serial]
    fn defaults_without_env() {
        clear_env();
        let config = Config::new();
        assert_eq!(config.timezone, UTC);
        assert_eq!(config.lead_policy, LeadPolicy::default());
        assert!(config.preferences_path.is_none());
    }

    #[test]
    #[serial_test::serial]
    fn reads_env() {
        clear_env();
        std::env::set_var("REMINDERS_TIMEZONE", "Europe/Oslo");
        std::env::set_var("RESERVATION_REMINDER_LEAD_MINUTES", "30");
        std::env::set_var("MAINTENANCE_REMINDER_HOUR", "7");
        std::env::set_var("REMINDERS_PREFERENCES_PATH", "/var/lib/fleet/preferences.json");

        let config = Config::new();
        assert_eq!(config.timezone, chrono_tz::Europe::Oslo);
        assert_eq!(
            config.lead_policy,
            LeadPolicy::new(
                Duration::minutes(30),
                NaiveTime::from_hms_opt(7, 0, 0).unwrap()
            )
        );
        assert_eq!(
            config.preferences_path,
            Some(PathBuf::from("/var/lib/fleet/preferences.json"))
        );
        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn falls_back_on_invalid_env() {
        clear_env();
        std::env::set_var("REMINDERS_TIMEZONE", "Not/AZone");
        std::env::set_var("RESERVATION_REMINDER_LEAD_MINUTES", "-5");
        std::env::set_var("MAINTENANCE_REMINDER_HOUR", "25");
        std::env::set_var("REMINDERS_PREFERENCES_PATH", "  ");

        let config = Config::new();
        assert_eq!(config.timezone, UTC);
        assert_eq!(config.lead_policy, LeadPolicy::default());
        assert!(config.preferences_path.is_none());

        std::env::set_var("RESERVATION_REMINDER_LEAD_MINUTES", "an hour");
        std::env::set_var("MAINTENANCE_REMINDER_HOUR", "nine");
        assert_eq!(Config::new().lead_policy, LeadPolicy::default());
        clear_env();
    }
}
