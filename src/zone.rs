//! The process default time zone.
//!
//! Zone-bearing temporals are bound as the wall clock they show in this zone. It starts out
//! as [`DefaultZone::System`] and a host may replace it once its configuration is loaded.

use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::ParameterSourceError;

/// Zone used to render instants as local wall-clock timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DefaultZone {
    /// Whatever the operating system reports (honors `TZ`).
    #[default]
    System,
    /// A constant UTC offset.
    Fixed(FixedOffset),
    /// An IANA zone, daylight-saving rules included.
    Named(Tz),
}

impl DefaultZone {
    #[must_use]
    pub fn utc() -> Self {
        DefaultZone::Named(Tz::UTC)
    }

    /// Wall clock at which `instant` is observed in this zone.
    ///
    /// `None` when that wall clock falls outside the representable calendar.
    #[must_use]
    pub fn local_wall_clock<Z: TimeZone>(&self, instant: &DateTime<Z>) -> Option<NaiveDateTime> {
        let utc = instant.naive_utc();
        let offset = match self {
            DefaultZone::System => Local.offset_from_utc_datetime(&utc).fix(),
            DefaultZone::Fixed(offset) => *offset,
            DefaultZone::Named(tz) => tz.offset_from_utc_datetime(&utc).fix(),
        };
        utc.checked_add_offset(offset)
    }
}

impl fmt::Display for DefaultZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultZone::System => f.write_str("system"),
            DefaultZone::Fixed(offset) => write!(f, "UTC{offset}"),
            DefaultZone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl FromStr for DefaultZone {
    type Err = ParameterSourceError;

    /// Accepts `system`/`local`, `UTC`/`Z`, offsets such as `+02:00` or `UTC-05:30`,
    /// and IANA names like `America/New_York`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "system" | "local" => return Ok(DefaultZone::System),
            "utc" | "z" | "gmt" => return Ok(DefaultZone::utc()),
            _ => {}
        }

        let prefix = trimmed.get(..3).map(str::to_ascii_lowercase);
        let offset_part = match prefix.as_deref() {
            Some("utc" | "gmt") => &trimmed[3..],
            _ => trimmed,
        };
        if offset_part.starts_with('+') || offset_part.starts_with('-') {
            return parse_offset(offset_part)
                .map(DefaultZone::Fixed)
                .ok_or_else(|| ParameterSourceError::InvalidZone(s.to_string()));
        }

        trimmed
            .parse::<Tz>()
            .map(DefaultZone::Named)
            .map_err(|_| ParameterSourceError::InvalidZone(s.to_string()))
    }
}

impl TryFrom<String> for DefaultZone {
    type Error = ParameterSourceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DefaultZone> for String {
    fn from(zone: DefaultZone) -> Self {
        zone.to_string()
    }
}

// `+HH`, `+HH:MM` or `+HHMM`
fn parse_offset(text: &str) -> Option<FixedOffset> {
    let (sign, digits) = match text.split_at(1) {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }
    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None if digits.len() == 4 => digits.split_at(2),
        None => (digits, "0"),
    };
    if hours.is_empty() || hours.len() > 2 || minutes.is_empty() || minutes.len() > 2 {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 18 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

lazy_static! {
    static ref PROCESS_ZONE: RwLock<DefaultZone> = RwLock::new(DefaultZone::System);
}

/// Current process default zone.
#[must_use]
pub fn default_zone() -> DefaultZone {
    match PROCESS_ZONE.read() {
        Ok(zone) => *zone,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Replace the process default zone, returning the previous one.
pub fn set_default_zone(zone: DefaultZone) -> DefaultZone {
    let mut guard = match PROCESS_ZONE.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    tracing::debug!(zone = %zone, previous = %*guard, "process default zone changed");
    std::mem::replace(&mut *guard, zone)
}
