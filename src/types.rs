use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde_json::Value as JsonValue;

/// Values a SQL driver can bind directly.
///
/// This is what a parameter source hands to the binding layer. It deliberately has no
/// zone-bearing temporal variants; those are normalized before they get here.
/// ```rust
/// use sql_bean_params::prelude::*;
///
/// let params = vec![
///     RowValues::Int(1),
///     RowValues::Text("alice".into()),
///     RowValues::Bool(true),
/// ];
/// # let _ = params;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowValues {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// SQL timestamp (wall clock, no zone)
    Timestamp(NaiveDateTime),
    /// SQL date
    Date(NaiveDate),
    /// SQL time, whole seconds
    Time(NaiveTime),
    /// NULL value
    Null,
    /// JSON value
    JSON(JsonValue),
    /// Binary data
    Blob(Vec<u8>),
}

impl RowValues {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let RowValues::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let RowValues::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<&bool> {
        if let RowValues::Bool(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        if let RowValues::Timestamp(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        if let RowValues::Date(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_time(&self) -> Option<NaiveTime> {
        if let RowValues::Time(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let RowValues::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let RowValues::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}

/// A raw value read from an entity field, before temporal normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
    /// Structured values (nested objects, collections) pass through as JSON.
    Json(JsonValue),
    LocalDateTime(NaiveDateTime),
    LocalDate(NaiveDate),
    LocalTime(NaiveTime),
    OffsetDateTime(DateTime<FixedOffset>),
    ZonedDateTime(DateTime<Tz>),
}

impl FieldValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this value goes through the temporal coercion table.
    #[must_use]
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::LocalDateTime(_)
                | Self::LocalDate(_)
                | Self::LocalTime(_)
                | Self::OffsetDateTime(_)
                | Self::ZonedDateTime(_)
        )
    }
}

/// Reads a Rust value as a [`FieldValue`].
///
/// Narrow primitives widen to their 64-bit counterparts and `None` reads as `Null`.
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

macro_rules! impl_to_field_value {
    ($variant:ident, $via:ty, $($ty:ty),+) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::$variant(<$via>::from(*self))
                }
            }

            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    value.to_field_value()
                }
            }
        )+
    };
}

impl_to_field_value!(Int, i64, i8, i16, i32, i64, u8, u16, u32);
impl_to_field_value!(Float, f64, f32, f64);
impl_to_field_value!(Bool, bool, bool);
impl_to_field_value!(LocalDateTime, NaiveDateTime, NaiveDateTime);
impl_to_field_value!(LocalDate, NaiveDate, NaiveDate);
impl_to_field_value!(LocalTime, NaiveTime, NaiveTime);
impl_to_field_value!(OffsetDateTime, DateTime<FixedOffset>, DateTime<FixedOffset>);
impl_to_field_value!(ZonedDateTime, DateTime<Tz>, DateTime<Tz>);

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }
}

impl ToFieldValue for &str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text((*self).to_string())
    }
}

impl ToFieldValue for Vec<u8> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Blob(self.clone())
    }
}

impl ToFieldValue for JsonValue {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Json(self.clone())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        FieldValue::Blob(value)
    }
}

impl From<JsonValue> for FieldValue {
    fn from(value: JsonValue) -> Self {
        FieldValue::Json(value)
    }
}

impl ToFieldValue for FieldValue {
    fn to_field_value(&self) -> FieldValue {
        self.clone()
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(value) => value.to_field_value(),
            None => FieldValue::Null,
        }
    }
}

impl<T: ToFieldValue> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.to_field_value()
    }
}
