//! The attribute-mapping engine.
//!
//! Translates a caller-facing attribute tree (symbolic keys, typed values,
//! nested objects and lists) into the wire tree the iFirma API consumes
//! (Polish field names, encoded values). The walk is driven by two parallel
//! static tables: a field-mapping tree for names and a value-transformation
//! tree for encodings. Both are plain data, constructed once and passed into
//! the mapper explicitly.

mod attribute;
mod error;
mod field_map;
mod mapper;
mod tables;
mod transformer;
mod value_map;

pub use attribute::{AttrTree, AttrValue};
pub use error::MappingError;
pub use field_map::{FieldMap, FieldNode};
pub use mapper::{AttributeMapper, UNMAPPED_FIELD_PREFIX};
pub use tables::MappingConfig;
pub use transformer::{date_ymd, percent_as_fraction, strip_spaces, transform};
pub use value_map::{TransformFn, ValueMap, ValueRule};
