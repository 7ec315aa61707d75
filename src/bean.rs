//! Parameter sources backed by the fields of a value object.

use std::any::type_name;
use std::collections::HashMap;
use std::fmt;

use crate::coercion::coerce;
use crate::error::{FieldAccessError, ParameterSourceError};
use crate::source::ParameterSource;
use crate::types::{FieldValue, RowValues};
use crate::zone::{DefaultZone, default_zone};

/// Reads one field of an entity.
pub type FieldReader<E> = fn(&E) -> Result<FieldValue, FieldAccessError>;

/// A named, readable field of `E`.
pub struct FieldAccessor<E> {
    name: &'static str,
    read: FieldReader<E>,
}

impl<E> FieldAccessor<E> {
    pub const fn new(name: &'static str, read: FieldReader<E>) -> Self {
        Self { name, read }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read this field from `entity`.
    ///
    /// # Errors
    ///
    /// Returns `FieldAccessError` if the accessor rejects the read.
    pub fn read(&self, entity: &E) -> Result<FieldValue, FieldAccessError> {
        (self.read)(entity)
    }
}

impl<E> Clone for FieldAccessor<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for FieldAccessor<E> {}

impl<E> fmt::Debug for FieldAccessor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Field discovery for an entity type.
///
/// Yields the bindable fields in a stable order. When two accessors share a name the later
/// one wins; that ordering is the implementor's to define. Usually implemented with
/// [`bean_fields!`](crate::bean_fields).
pub trait BeanFields: Sized {
    fn bean_fields() -> Vec<FieldAccessor<Self>>;
}

/// Implement [`BeanFields`] for a struct by listing the fields to expose.
///
/// Each listed field must implement [`ToFieldValue`](crate::types::ToFieldValue).
/// ```rust
/// use sql_bean_params::prelude::*;
///
/// struct User {
///     name: String,
///     age: i32,
///     email: Option<String>,
/// }
///
/// sql_bean_params::bean_fields!(User { name, age, email });
///
/// let user = User { name: "Alice".into(), age: 30, email: None };
/// let source = BeanParameterSource::new(&user);
/// assert_eq!(source.value("age").unwrap(), Some(RowValues::Int(30)));
/// assert_eq!(source.value("email").unwrap(), None);
/// ```
#[macro_export]
macro_rules! bean_fields {
    ($entity:ty { $($field:ident),* $(,)? }) => {
        impl $crate::bean::BeanFields for $entity {
            fn bean_fields() -> ::std::vec::Vec<$crate::bean::FieldAccessor<Self>> {
                ::std::vec![
                    $(
                        $crate::bean::FieldAccessor::new(stringify!($field), |entity: &$entity| {
                            ::std::result::Result::Ok($crate::types::ToFieldValue::to_field_value(
                                &entity.$field,
                            ))
                        }),
                    )*
                ]
            }
        }
    };
}

/// Binds the fields of a borrowed entity as named parameters.
///
/// The name index is built once at construction and never changes. Zone-bearing temporals
/// are rendered in the pinned zone if one was given, otherwise in the process default
/// zone as it stands when the value is read.
pub struct BeanParameterSource<'a, E> {
    entity: &'a E,
    fields: Vec<FieldAccessor<E>>,
    index: HashMap<&'static str, usize>,
    zone: Option<DefaultZone>,
}

impl<'a, E: BeanFields> BeanParameterSource<'a, E> {
    /// Index the fields `E` exposes through [`BeanFields`].
    #[must_use]
    pub fn new(entity: &'a E) -> Self {
        Self::with_fields(entity, E::bean_fields())
    }

    /// Like [`new`](Self::new), for callers holding an entity that may be missing.
    ///
    /// # Errors
    ///
    /// Returns `ParameterSourceError::InvalidArgument` if `entity` is `None`.
    pub fn from_optional(entity: Option<&'a E>) -> Result<Self, ParameterSourceError> {
        entity.map(Self::new).ok_or_else(|| {
            ParameterSourceError::InvalidArgument(format!(
                "entity of type {} must not be null",
                type_name::<E>()
            ))
        })
    }
}

impl<'a, E> BeanParameterSource<'a, E> {
    /// Index a caller-supplied field list, in discovery order.
    pub fn with_fields(entity: &'a E, fields: impl IntoIterator<Item = FieldAccessor<E>>) -> Self {
        let fields: Vec<FieldAccessor<E>> = fields.into_iter().collect();
        let mut index = HashMap::with_capacity(fields.len());
        for (position, field) in fields.iter().enumerate() {
            if index.insert(field.name(), position).is_some() {
                tracing::debug!(
                    entity = type_name::<E>(),
                    field = field.name(),
                    "duplicate field name, keeping the later accessor"
                );
            }
        }
        tracing::debug!(
            entity = type_name::<E>(),
            fields = index.len(),
            "indexed bean parameter fields"
        );
        Self {
            entity,
            fields,
            index,
            zone: None,
        }
    }

    /// Pin the zone used for offset and zoned date-times instead of reading the process
    /// default.
    #[must_use]
    pub fn with_zone(mut self, zone: DefaultZone) -> Self {
        self.zone = Some(zone);
        self
    }

    #[must_use]
    pub fn entity(&self) -> &'a E {
        self.entity
    }

    fn effective_zone(&self) -> DefaultZone {
        self.zone.unwrap_or_else(default_zone)
    }
}

impl<E> ParameterSource for BeanParameterSource<'_, E> {
    fn has_value(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn value(&self, name: &str) -> Result<Option<RowValues>, ParameterSourceError> {
        let Some(&position) = self.index.get(name) else {
            tracing::trace!(parameter = name, "no field for parameter");
            return Ok(None);
        };
        let field = &self.fields[position];
        let raw = field.read(self.entity).map_err(|err| {
            tracing::warn!(
                entity = type_name::<E>(),
                field = field.name(),
                error = %err,
                "field read rejected"
            );
            ParameterSourceError::from(err)
        })?;
        if raw.is_temporal() {
            tracing::trace!(parameter = name, value = ?raw, "coercing temporal value");
        }
        coerce(raw, self.effective_zone())
    }

    fn parameter_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(position, field)| self.index.get(field.name()) == Some(position))
            .map(|(_, field)| field.name().to_string())
            .collect()
    }
}

impl<E> fmt::Debug for BeanParameterSource<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanParameterSource")
            .field("entity", &type_name::<E>())
            .field("fields", &self.parameter_names())
            .field("zone", &self.zone)
            .finish()
    }
}
