use rusqlite::types::{ToSqlOutput, Value};

use crate::types::RowValues;

/// Convert a bound value to a rusqlite `Value`.
///
/// SQLite has no temporal storage class; timestamps, dates and times are written as ISO-8601
/// text, which the built-in date functions understand.
#[must_use]
pub fn row_value_to_sqlite_value(value: &RowValues) -> Value {
    match value {
        RowValues::Int(i) => Value::Integer(*i),
        RowValues::Float(f) => Value::Real(*f),
        RowValues::Text(s) => Value::Text(s.clone()),
        RowValues::Bool(b) => Value::Integer(i64::from(*b)),
        RowValues::Timestamp(dt) => Value::Text(dt.format("%F %T%.f").to_string()),
        RowValues::Date(date) => Value::Text(date.format("%F").to_string()),
        RowValues::Time(time) => Value::Text(time.format("%T").to_string()),
        RowValues::Null => Value::Null,
        RowValues::JSON(jval) => Value::Text(jval.to_string()),
        RowValues::Blob(bytes) => Value::Blob(bytes.clone()),
    }
}

impl rusqlite::ToSql for RowValues {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(row_value_to_sqlite_value(self)))
    }
}
