use crate::error::ParameterSourceError;
use crate::types::RowValues;

/// What a named-parameter binding layer asks of a value provider.
///
/// `value` returns `Ok(None)` for the absent sentinel: either the name is unknown or the
/// value behind it is null. The metadata hooks default to "unknown" so the binding layer
/// falls back to its own type inference.
pub trait ParameterSource {
    /// Whether `name` is a parameter this source can answer for.
    fn has_value(&self, name: &str) -> bool;

    /// The value to bind for `name`.
    ///
    /// # Errors
    ///
    /// Returns `ParameterSourceError` when the value exists but cannot be read.
    fn value(&self, name: &str) -> Result<Option<RowValues>, ParameterSourceError>;

    /// Driver type code to bind `name` with, if the source knows better than the driver.
    fn sql_type(&self, _name: &str) -> Option<i32> {
        None
    }

    /// Driver type name to bind `name` with.
    fn type_name(&self, _name: &str) -> Option<String> {
        None
    }

    /// Every parameter name this source answers for, when it can enumerate them.
    fn parameter_names(&self) -> Vec<String> {
        Vec::new()
    }
}

/// A source with no parameters at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyParameterSource;

impl ParameterSource for EmptyParameterSource {
    fn has_value(&self, _name: &str) -> bool {
        false
    }

    fn value(&self, _name: &str) -> Result<Option<RowValues>, ParameterSourceError> {
        Ok(None)
    }
}

/// Resolve an ordered list of placeholder names into positional values.
///
/// Absent parameters bind as `RowValues::Null`.
///
/// # Errors
///
/// Propagates the first error reported by `source`.
///
/// # Example
///
/// ```rust
/// use sql_bean_params::prelude::*;
///
/// let source = MapParameterSource::new()
///     .add_value("id", 42)
///     .add_value("name", "alice");
/// let params = resolve_all(&source, &["name", "id", "missing"]).unwrap();
/// assert_eq!(
///     params,
///     vec![RowValues::Text("alice".into()), RowValues::Int(42), RowValues::Null]
/// );
/// ```
pub fn resolve_all<S, N>(source: &S, names: &[N]) -> Result<Vec<RowValues>, ParameterSourceError>
where
    S: ParameterSource + ?Sized,
    N: AsRef<str>,
{
    let mut values = Vec::with_capacity(names.len());
    for name in names {
        values.push(source.value(name.as_ref())?.unwrap_or(RowValues::Null));
    }
    Ok(values)
}
