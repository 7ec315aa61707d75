//! Normalization of raw field values into driver-bindable values.
//!
//! Wall-clock temporals map onto their SQL counterparts as-is. Offset and zoned date-times
//! are reduced to the instant they denote and re-expressed as the wall clock of the
//! effective default zone, so a driver rendering that timestamp in the same zone does not
//! shift it.

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Timelike};

use crate::error::ParameterSourceError;
use crate::types::{FieldValue, RowValues};
use crate::zone::DefaultZone;

/// Map a raw field value onto the value that should be bound.
///
/// Returns `None` for [`FieldValue::Null`]; every other value maps to exactly one
/// [`RowValues`].
///
/// # Errors
///
/// Returns `ParameterSourceError::TemporalOutOfRange` if a zone-bearing instant has no
/// representable wall clock in `zone`.
pub fn coerce(
    value: FieldValue,
    zone: DefaultZone,
) -> Result<Option<RowValues>, ParameterSourceError> {
    let bound = match value {
        FieldValue::Null => return Ok(None),
        FieldValue::LocalDateTime(dt) => RowValues::Timestamp(dt),
        FieldValue::LocalDate(date) => RowValues::Date(date),
        FieldValue::LocalTime(time) => RowValues::Time(truncate_to_seconds(time)),
        FieldValue::OffsetDateTime(dt) => RowValues::Timestamp(wall_clock_in(zone, &dt)?),
        FieldValue::ZonedDateTime(dt) => RowValues::Timestamp(wall_clock_in(zone, &dt)?),
        FieldValue::Bool(b) => RowValues::Bool(b),
        FieldValue::Int(i) => RowValues::Int(i),
        FieldValue::Float(f) => RowValues::Float(f),
        FieldValue::Text(s) => RowValues::Text(s),
        FieldValue::Blob(bytes) => RowValues::Blob(bytes),
        FieldValue::Json(json) => RowValues::JSON(json),
    };
    Ok(Some(bound))
}

fn wall_clock_in<Z: TimeZone>(
    zone: DefaultZone,
    instant: &DateTime<Z>,
) -> Result<NaiveDateTime, ParameterSourceError> {
    zone.local_wall_clock(instant)
        .ok_or_else(|| ParameterSourceError::TemporalOutOfRange {
            instant: format!("{} UTC", instant.naive_utc()),
            zone: zone.to_string(),
        })
}

// SQL TIME carries no fractional seconds.
fn truncate_to_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}
