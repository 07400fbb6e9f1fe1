//! Error types for the opt-in validation surfaces.
//!
//! Resolution never fails: [`crate::VariantResolver::resolve`] degrades to
//! "no contribution" on any miss. These errors are returned only by
//! [`crate::Props::validate`], [`crate::VariantConfig::validate`], and the
//! JSON loading helpers.

use thiserror::Error;

/// Convenience alias for results carrying [`ClassmixError`].
pub type ClassmixResult<T> = Result<T, ClassmixError>;

/// Errors reported by the strict validation and loading helpers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassmixError {
    /// Props supplied both of the mutually exclusive extra-class fields.
    #[error("props supply both `class` and `class_name`; set at most one")]
    ConflictingClassProps,

    /// A default selection or compound condition referenced a variant axis
    /// that the configuration does not declare.
    #[error("unknown variant `{name}` referenced by {context}")]
    UnknownVariant {
        /// Name of the missing variant axis.
        name: String,
        /// Where the reference occurred.
        context: String,
    },

    /// A selection named an option key missing from its variant's option map.
    #[error("variant `{variant}` has no option `{option}` ({context})")]
    UnknownOption {
        /// Variant axis that was looked up.
        variant: String,
        /// Option key that was not found.
        option: String,
        /// Where the reference occurred.
        context: String,
    },

    /// Failed to parse a JSON variant configuration.
    #[cfg(feature = "serde_json")]
    #[error("failed to parse variant configuration: {0}")]
    Config(#[from] Box<serde_json::Error>),
}
