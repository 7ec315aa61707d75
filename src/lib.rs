//! Named-parameter sources for SQL binding layers.
//!
//! A [`ParameterSource`] answers two questions for a binding layer: does a parameter with
//! this name exist, and what value should be bound for it. [`BeanParameterSource`] answers
//! them from the fields of a borrowed struct, [`MapParameterSource`] from a map. Both
//! normalize date/time values into the plain timestamp, date and time types drivers bind
//! directly, resolving offset and zoned date-times against the process default zone.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sql_bean_params::prelude::*;
//!
//! struct Booking {
//!     guest: String,
//!     night: NaiveDate,
//! }
//!
//! sql_bean_params::bean_fields!(Booking { guest, night });
//!
//! let booking = Booking {
//!     guest: "Alice".into(),
//!     night: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
//! };
//! let source = BeanParameterSource::new(&booking);
//! assert!(source.has_value("guest"));
//! assert_eq!(
//!     source.value("night").unwrap(),
//!     Some(RowValues::Date(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()))
//! );
//! assert_eq!(source.value("room").unwrap(), None);
//! ```

pub mod bean;
pub mod coercion;
pub mod drivers;
pub mod error;
pub mod map;
pub mod prelude;
pub mod source;
pub mod types;
pub mod zone;

pub use bean::{BeanFields, BeanParameterSource, FieldAccessor, FieldReader};
pub use coercion::coerce;
pub use error::{FieldAccessError, ParameterSourceError};
pub use map::MapParameterSource;
pub use source::{EmptyParameterSource, ParameterSource, resolve_all};
pub use types::{FieldValue, RowValues, ToFieldValue};
pub use zone::{DefaultZone, default_zone, set_default_zone};
