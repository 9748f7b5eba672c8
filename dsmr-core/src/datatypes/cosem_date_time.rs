//! DSMR timestamp type

use crate::error::{DsmrError, DsmrResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Daylight saving time flag carried at the end of a DSMR timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DstIndicator {
    /// 'S' suffix, daylight saving time active
    Summer,
    /// 'W' suffix, standard time
    Winter,
}

/// Timestamp as transmitted on the P1 port: `YYMMDDhhmmss` with an optional
/// trailing `S`/`W` daylight saving flag
///
/// DSMR v2 gas meters transmit the twelve digits without the flag; v4 and
/// later always append it. Two-digit years are 2000-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosemDateTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    dst: Option<DstIndicator>,
}

impl CosemDateTime {
    /// Constructs a timestamp from explicit field values
    ///
    /// # Errors
    ///
    /// Returns an error if a field is out of range.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        dst: Option<DstIndicator>,
    ) -> DsmrResult<Self> {
        Self::verify_month(month)?;
        Self::verify_day(day)?;
        Self::verify_time(hour, minute, second)?;

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            dst,
        })
    }

    /// Parse a timestamp from its raw telegram text
    pub fn parse(raw: &str) -> DsmrResult<Self> {
        let (digits, dst) = match raw.as_bytes().last() {
            Some(b'S') => (&raw[..raw.len() - 1], Some(DstIndicator::Summer)),
            Some(b'W') => (&raw[..raw.len() - 1], Some(DstIndicator::Winter)),
            _ => (raw, None),
        };

        if digits.len() != 12 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DsmrError::ValueDecode(format!(
                "Invalid timestamp text: {}",
                raw
            )));
        }

        let field = |range: std::ops::Range<usize>| -> u8 {
            // Slice is all ASCII digits and two characters wide
            digits[range].parse().unwrap_or(0)
        };

        Self::new(
            2000 + field(0..2) as u16,
            field(2..4),
            field(4..6),
            field(6..8),
            field(8..10),
            field(10..12),
            dst,
        )
    }

    fn verify_month(month: u8) -> DsmrResult<()> {
        if month < 1 || month > 12 {
            Err(DsmrError::ValueDecode(format!(
                "Timestamp month is out of range [1, 12], got {}",
                month
            )))
        } else {
            Ok(())
        }
    }

    fn verify_day(day: u8) -> DsmrResult<()> {
        if day < 1 || day > 31 {
            Err(DsmrError::ValueDecode(format!(
                "Timestamp day is out of range [1, 31], got {}",
                day
            )))
        } else {
            Ok(())
        }
    }

    fn verify_time(hour: u8, minute: u8, second: u8) -> DsmrResult<()> {
        if hour > 23 || minute > 59 || second > 59 {
            Err(DsmrError::ValueDecode(format!(
                "Timestamp time of day is out of range, got {:02}:{:02}:{:02}",
                hour, minute, second
            )))
        } else {
            Ok(())
        }
    }

    /// Get the year (four digits)
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Get the month (1 to 12)
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Get the day of the month (1 to 31)
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Get the hour (0 to 23)
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Get the minute (0 to 59)
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Get the second (0 to 59)
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Get the daylight saving flag, `None` for DSMR v2 style timestamps
    pub fn dst(&self) -> Option<DstIndicator> {
        self.dst
    }
}

impl fmt::Display for CosemDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_dst_flag() {
        let ts = CosemDateTime::parse("220531000000W").unwrap();
        assert_eq!(ts.year(), 2022);
        assert_eq!(ts.month(), 5);
        assert_eq!(ts.day(), 31);
        assert_eq!(ts.hour(), 0);
        assert_eq!(ts.minute(), 0);
        assert_eq!(ts.second(), 0);
        assert_eq!(ts.dst(), Some(DstIndicator::Winter));

        let ts = CosemDateTime::parse("101208152415S").unwrap();
        assert_eq!(ts.dst(), Some(DstIndicator::Summer));
        assert_eq!(ts.hour(), 15);
    }

    #[test]
    fn test_parse_without_dst_flag() {
        // DSMR v2 gas meters omit the flag
        let ts = CosemDateTime::parse("220531060000").unwrap();
        assert_eq!(ts.dst(), None);
        assert_eq!(ts.hour(), 6);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(CosemDateTime::parse("").is_err());
        assert!(CosemDateTime::parse("2205310000").is_err());
        assert!(CosemDateTime::parse("22053100000zW").is_err());
        // Out of range fields
        assert!(CosemDateTime::parse("221331000000W").is_err());
        assert!(CosemDateTime::parse("220532000000W").is_err());
        assert!(CosemDateTime::parse("220531250000W").is_err());
    }

    #[test]
    fn test_display() {
        let ts = CosemDateTime::parse("220531061500W").unwrap();
        assert_eq!(ts.to_string(), "2022-05-31 06:15:00");
    }
}
