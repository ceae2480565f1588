use thiserror::Error;

/// Errors that abort an attribute-mapping walk.
///
/// Only composite attributes can fail the walk; scalar lookup misses are
/// represented in the output instead (see
/// [`UNMAPPED_FIELD_PREFIX`](super::UNMAPPED_FIELD_PREFIX)).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MappingError {
    /// A nested object or list has no entry in the field-mapping tree.
    /// `path` is the dot-separated symbolic path (e.g. "customer.address").
    #[error("no field mapping for composite attribute '{path}'")]
    MissingMapping { path: String },

    /// A nested object or list is mapped to a scalar wire name, so there is
    /// no child table to descend into.
    #[error("field mapping for '{path}' is a scalar, but the attribute is a composite")]
    NotComposite { path: String },
}
