//! Small value objects and JSON helpers.
//!
//! - [`Rectangle`] - a width/height pair with an `area`
//! - [`serialize`] / [`materialize`] - JSON text to and from [`Object`]s bound
//!   to a [`Schema`], keeping per-property [`PropertyDescriptor`]s
//! - [`materialize_as`] - JSON text straight into a Rust type

/// Error types.
pub mod error;
/// Serialization and materialization entry points.
pub mod json;
/// Schema-bound objects and property descriptors.
pub mod object;
/// Materialization schemas.
pub mod schema;
/// The rectangle value object.
pub mod shape;

// Re-exports for convenience
pub use error::ObjectError;
pub use json::{materialize, materialize_as, serialize};
pub use object::{Object, Property, PropertyDescriptor};
pub use schema::Schema;
pub use shape::Rectangle;
