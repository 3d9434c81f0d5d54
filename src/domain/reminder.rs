/// Reminder time-of-day values
///
/// A reminder is a plain time of day attached to a habit name. Only storage
/// and validation are in scope here; nothing in the tool actually fires
/// alerts.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A 24-hour "HH:MM" reminder time
///
/// Wraps NaiveTime so comparisons and formatting are well defined, but only
/// the exact "HH:MM" shape parses: hour 0-23, minute 0-59, no seconds. The
/// snapshot stores it as the same "HH:MM" string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReminderTime(NaiveTime);

impl ReminderTime {
    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for ReminderTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Self)
            .map_err(|_| DomainError::InvalidTimeFormat(s.to_string()))
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl TryFrom<String> for ReminderTime {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ReminderTime> for String {
    fn from(time: ReminderTime) -> Self {
        time.to_string()
    }
}
