//! Error types for category color bindings.

use thiserror::Error;

/// Errors raised when building or querying a [`CategoryColorBinding`].
///
/// Every variant is a caller defect. None of them fall back to a default
/// color.
///
/// [`CategoryColorBinding`]: super::CategoryColorBinding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// Label and color sequences have different lengths
    #[error("Arity mismatch: {labels} labels but {colors} colors")]
    ArityMismatch {
        /// Number of labels supplied
        labels: usize,
        /// Number of colors supplied
        colors: usize,
    },

    /// The same label appears more than once
    #[error("Duplicate label: {label}")]
    DuplicateLabel {
        /// The repeated label
        label: String,
    },

    /// A requested label is not part of the binding
    #[error("Unknown label: {label}")]
    UnknownLabel {
        /// The missing label
        label: String,
    },
}

/// Result type for binding operations.
pub type BindingResult<T> = Result<T, BindingError>;
