//! Bindings from [`RowValues`](crate::types::RowValues) into driver parameter types.

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;
