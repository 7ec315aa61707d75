//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::bean::{BeanFields, BeanParameterSource, FieldAccessor};
pub use crate::error::{FieldAccessError, ParameterSourceError};
pub use crate::map::MapParameterSource;
pub use crate::source::{EmptyParameterSource, ParameterSource, resolve_all};
pub use crate::types::{FieldValue, RowValues, ToFieldValue};
pub use crate::zone::DefaultZone;

#[cfg(feature = "sqlite")]
pub use crate::drivers::sqlite::row_value_to_sqlite_value;
