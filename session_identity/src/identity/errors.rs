use thiserror::Error;

use crate::utils::UtilError;

/// Why a cookie store did not yield a user identifier.
///
/// None of these is fatal. The collapsing entry points log the kind and
/// return `None`; `try_resolve_identity` hands it back for inspection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No session source available")]
    NoSource,

    #[error("Malformed encoding: {0}")]
    DecodeFailure(#[from] UtilError),

    #[error("Malformed payload: {0}")]
    StructureFailure(String),

    /// Carries the path of the field that was absent or falsy
    #[error("Identifier field missing: {0}")]
    FieldMissing(&'static str),
}
