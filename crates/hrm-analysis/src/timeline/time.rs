//! Recording-clock timestamps.

use std::fmt;

use serde::Serialize;

use hrm_core::errors::ConfigError;

/// Time since the start of the recording, in whole deciseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct EventTime(pub u64);

impl EventTime {
    pub const ZERO: EventTime = EventTime(0);

    pub fn from_deciseconds(deciseconds: u64) -> Self {
        Self(deciseconds)
    }

    /// Saturates at the largest representable time.
    pub fn from_hms(hour: u64, minute: u64, second: u64) -> Self {
        Self::checked_from_hms(hour, minute, second).unwrap_or(Self(u64::MAX))
    }

    /// `None` when the time does not fit in deciseconds.
    pub fn checked_from_hms(hour: u64, minute: u64, second: u64) -> Option<Self> {
        hour.checked_mul(3600)?
            .checked_add(minute.checked_mul(60)?)?
            .checked_add(second)?
            .checked_mul(10)
            .map(Self)
    }

    /// Parse `HH:MM:SS`. Minutes and seconds must be below 60; hours are
    /// unbounded.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let invalid = |message: &str| ConfigError::InvalidValue {
            field: "event time".to_string(),
            message: format!("{message}: {text:?}"),
        };

        let parts: Vec<&str> = text.trim().split(':').collect();
        let [h, m, s] = parts.as_slice() else {
            return Err(invalid("expected HH:MM:SS"));
        };
        let parse = |part: &str| {
            let part = part.trim();
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("time parts must be whole numbers"));
            }
            part.parse::<u64>().map_err(|_| invalid("time part out of range"))
        };
        let (hour, minute, second) = (parse(*h)?, parse(*m)?, parse(*s)?);
        if minute >= 60 || second >= 60 {
            return Err(invalid("minutes and seconds must be below 60"));
        }
        Self::checked_from_hms(hour, minute, second).ok_or_else(|| invalid("time out of range"))
    }

    pub fn deciseconds(self) -> u64 {
        self.0
    }

    /// Whole seconds, discarding the decisecond remainder.
    pub fn total_seconds(self) -> u64 {
        self.0 / 10
    }

    /// `(hour, minute, second)` of the whole-second part.
    pub fn hms(self) -> (u64, u64, u64) {
        let total = self.total_seconds();
        let (hour, rem) = (total / 3600, total % 3600);
        (hour, rem / 60, rem % 60)
    }

    /// Time shifted by whole seconds, `None` on overflow.
    pub fn checked_plus_seconds(self, seconds: u64) -> Option<Self> {
        seconds.checked_mul(10).and_then(|ds| self.0.checked_add(ds)).map(Self)
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decisecond_conversion() {
        let t = EventTime::from_deciseconds(37_259);
        assert_eq!(t.total_seconds(), 3725);
        assert_eq!(t.hms(), (1, 2, 5));
        assert_eq!(t.to_string(), "01:02:05");
    }

    #[test]
    fn test_parse() {
        assert_eq!(EventTime::parse("00:02:00").unwrap(), EventTime::from_hms(0, 2, 0));
        assert_eq!(EventTime::parse(" 26:00:01 ").unwrap().hms(), (26, 0, 1));
        assert!(EventTime::parse("00:60:00").is_err());
        assert!(EventTime::parse("00:00").is_err());
        assert!(EventTime::parse("aa:00:00").is_err());
        assert!(EventTime::parse("-1:00:00").is_err());
    }

    #[test]
    fn test_out_of_range_hour_is_rejected() {
        let err = EventTime::parse("99999999999999999:00:00").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "event time"
        ));
        assert_eq!(EventTime::checked_from_hms(u64::MAX / 3600, 0, 0), None);
        assert_eq!(EventTime::from_hms(u64::MAX, 0, 0), EventTime(u64::MAX));
    }

    #[test]
    fn test_checked_plus_seconds() {
        assert_eq!(
            EventTime::from_hms(0, 0, 1).checked_plus_seconds(1),
            Some(EventTime::from_hms(0, 0, 2))
        );
        assert_eq!(EventTime(u64::MAX - 5).checked_plus_seconds(1), None);
    }
}
