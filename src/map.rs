use std::collections::HashMap;

use crate::coercion::coerce;
use crate::error::ParameterSourceError;
use crate::source::ParameterSource;
use crate::types::{FieldValue, RowValues};
use crate::zone::{DefaultZone, default_zone};

/// Named parameters held in a map, with the same temporal handling as
/// [`BeanParameterSource`](crate::bean::BeanParameterSource).
///
/// A name mapped to `FieldValue::Null` has a value; it just binds as absent.
#[derive(Debug, Clone, Default)]
pub struct MapParameterSource {
    values: HashMap<String, FieldValue>,
    order: Vec<String>,
    zone: Option<DefaultZone>,
}

impl MapParameterSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a parameter and return the source for chaining.
    #[must_use]
    pub fn add_value(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add (or replace) a parameter in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        if self.values.insert(name.clone(), value.into()).is_none() {
            self.order.push(name);
        }
    }

    #[must_use]
    pub fn with_zone(mut self, zone: DefaultZone) -> Self {
        self.zone = Some(zone);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for MapParameterSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut source = MapParameterSource::new();
        for (name, value) in iter {
            source.insert(name, value);
        }
        source
    }
}

impl ParameterSource for MapParameterSource {
    fn has_value(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn value(&self, name: &str) -> Result<Option<RowValues>, ParameterSourceError> {
        let Some(raw) = self.values.get(name) else {
            tracing::trace!(parameter = name, "no entry for parameter");
            return Ok(None);
        };
        coerce(raw.clone(), self.zone.unwrap_or_else(default_zone))
    }

    fn parameter_names(&self) -> Vec<String> {
        self.order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

    #[test]
    fn keeps_insertion_order_and_replaces_in_place() {
        let source = MapParameterSource::new()
            .add_value("b", 1)
            .add_value("a", "x")
            .add_value("b", 2);
        assert_eq!(source.parameter_names(), vec!["b", "a"]);
        assert_eq!(source.value("b").unwrap(), Some(RowValues::Int(2)));
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn explicit_null_has_value_but_binds_absent() {
        let source = MapParameterSource::new().add_value("email", None::<String>);
        assert!(source.has_value("email"));
        assert_eq!(source.value("email").unwrap(), None);
        assert!(!source.has_value("phone"));
    }

    #[test]
    fn coerces_like_a_bean() {
        let odt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2023, 1, 15, 9, 30, 0)
            .unwrap();
        let source: MapParameterSource = [("odt", odt)].into_iter().collect();
        let source = source.with_zone("UTC+02:00".parse().unwrap());
        assert_eq!(
            source.value("odt").unwrap(),
            Some(RowValues::Timestamp(
                NaiveDate::from_ymd_opt(2023, 1, 15)
                    .unwrap()
                    .and_hms_opt(11, 30, 0)
                    .unwrap()
            ))
        );
    }

    #[test]
    fn unrepresentable_wall_clock_is_reported() {
        let source = MapParameterSource::new()
            .add_value("odt", NaiveDateTime::MAX.and_utc().fixed_offset())
            .with_zone("+01:00".parse().unwrap());
        let err = source.value("odt").unwrap_err();
        assert!(matches!(err, ParameterSourceError::TemporalOutOfRange { .. }));
        assert!(err.to_string().contains("UTC+01:00"));
    }
}
