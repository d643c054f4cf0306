//! # Error Handling
//!
//! Two layers of errors, mirroring how the operations fail:
//!
//! - [`ReflectError`] is returned to the caller. It covers structural problems:
//!   an unaddressable destination, a non-struct where a struct was required,
//!   a missing field, or a field whose type does not match the requested one.
//! - [`FieldError`] describes why a single field transfer inside
//!   [`copy_same_fields`](crate::copy_same_fields) did not happen. These are
//!   swallowed by the copier (and logged at `debug`); they are only visible
//!   through [`CopyReport`](crate::CopyReport).
//!
//! [`ScanError`] is what a [`Scan`](crate::Scan) hook returns when it refuses a
//! source value.
//!
//! ## Logging
//!
//! Events are emitted with the `tracing` crate. Nothing is printed unless the
//! application installs a subscriber.

use std::fmt;

/// Error returned by the field copier, projector and indexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectError {
    /// The destination cannot be mutated in place (nil pointer or shared `Rc`/`Arc`).
    Unaddressable {
        /// Type of the value that could not be reached
        type_name: &'static str,
    },

    /// A struct was required but the type resolved to something else.
    NotStruct {
        /// Offending type
        type_name: &'static str,
    },

    /// An embedded field leads back to a struct that is already being flattened.
    EmbedCycle {
        /// Struct that embeds itself
        type_name: &'static str,
    },

    /// List elements do not resolve to a struct.
    InvalidElement {
        /// Element type of the list
        type_name: &'static str,
    },

    /// The named field does not exist on the element type.
    FieldNotFound {
        /// Requested field name
        field: String,
        /// Type that was searched
        type_name: &'static str,
    },

    /// The field exists but its type is not the requested output type.
    FieldTypeMismatch {
        /// Field name
        field: String,
        /// Type requested by the caller
        expected: &'static str,
        /// Declared type of the field
        found: &'static str,
    },

    /// A direct (non-struct) assignment failed.
    Conversion(FieldError),
}

impl ReflectError {
    // ============================================================================
    // Constructors
    // ============================================================================

    /// Create an [`Unaddressable`](Self::Unaddressable) error
    #[must_use]
    pub fn unaddressable(type_name: &'static str) -> Self {
        Self::Unaddressable { type_name }
    }

    /// Create a [`NotStruct`](Self::NotStruct) error
    #[must_use]
    pub fn not_struct(type_name: &'static str) -> Self {
        Self::NotStruct { type_name }
    }

    /// Create an [`EmbedCycle`](Self::EmbedCycle) error
    #[must_use]
    pub fn embed_cycle(type_name: &'static str) -> Self {
        Self::EmbedCycle { type_name }
    }

    /// Create an [`InvalidElement`](Self::InvalidElement) error
    #[must_use]
    pub fn invalid_element(type_name: &'static str) -> Self {
        Self::InvalidElement { type_name }
    }

    /// Create a [`FieldNotFound`](Self::FieldNotFound) error
    #[must_use]
    pub fn field_not_found(field: impl Into<String>, type_name: &'static str) -> Self {
        Self::FieldNotFound {
            field: field.into(),
            type_name,
        }
    }

    /// Create a [`FieldTypeMismatch`](Self::FieldTypeMismatch) error
    #[must_use]
    pub fn field_type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::FieldTypeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }

    /// Emit a `debug` event describing this error.
    pub fn log(&self) {
        match self {
            Self::Conversion(inner) => {
                tracing::debug!(error = %inner, "direct assignment failed");
            }
            _ => {
                tracing::debug!(error = %self, "reflection error");
            }
        }
    }
}

impl fmt::Display for ReflectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unaddressable { type_name } => {
                write!(f, "copy to value is unaddressable ({type_name})")
            }
            Self::NotStruct { type_name } => write!(f, "not struct elem: {type_name}"),
            Self::EmbedCycle { type_name } => {
                write!(f, "embedded struct {type_name} embeds itself")
            }
            Self::InvalidElement { type_name } => {
                write!(f, "list element is not struct: {type_name}")
            }
            Self::FieldNotFound { field, type_name } => {
                write!(f, "field {field} not found in {type_name}")
            }
            Self::FieldTypeMismatch {
                field,
                expected,
                found,
            } => write!(f, "field {field} has type {found}, expected {expected}"),
            Self::Conversion(inner) => write!(f, "direct assignment failed: {inner}"),
        }
    }
}

impl std::error::Error for ReflectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Conversion(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<FieldError> for ReflectError {
    fn from(err: FieldError) -> Self {
        Self::Conversion(err)
    }
}

/// Why a single field transfer did not happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The destination's scan hook rejected the source value.
    Scan(ScanError),

    /// The value does not fit the destination numeric type.
    OutOfRange {
        /// Source type
        from: &'static str,
        /// Destination type
        to: &'static str,
    },

    /// The source cannot be converted to the destination type.
    Incompatible {
        /// Source type
        from: &'static str,
        /// Destination type
        to: &'static str,
    },

    /// The destination pointer could not be allocated or dereferenced.
    Unaddressable {
        /// Destination type
        type_name: &'static str,
    },
}

impl FieldError {
    /// Create an [`OutOfRange`](Self::OutOfRange) error
    #[must_use]
    pub fn out_of_range(from: &'static str, to: &'static str) -> Self {
        Self::OutOfRange { from, to }
    }

    /// Create an [`Incompatible`](Self::Incompatible) error
    #[must_use]
    pub fn incompatible(from: &'static str, to: &'static str) -> Self {
        Self::Incompatible { from, to }
    }

    /// Create an [`Unaddressable`](Self::Unaddressable) error
    #[must_use]
    pub fn unaddressable(type_name: &'static str) -> Self {
        Self::Unaddressable { type_name }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan(err) => write!(f, "scan failed: {err}"),
            Self::OutOfRange { from, to } => {
                write!(f, "value of {from} does not fit in {to}")
            }
            Self::Incompatible { from, to } => write!(f, "cannot convert {from} to {to}"),
            Self::Unaddressable { type_name } => write!(f, "{type_name} is not addressable"),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ScanError> for FieldError {
    fn from(err: ScanError) -> Self {
        Self::Scan(err)
    }
}

/// Error returned by a [`Scan`](crate::Scan) hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    message: String,
}

impl ScanError {
    /// Create a scan error with a custom message
    ///
    /// # Example
    /// ```rust
    /// use reflectutil::ScanError;
    ///
    /// let err = ScanError::new("expected an ISO-8601 date");
    /// assert_eq!(err.to_string(), "expected an ISO-8601 date");
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The hook does not accept values of `src`.
    #[must_use]
    pub fn unsupported(src: &str, dest: &str) -> Self {
        Self::new(format!("unsupported scan, storing {src} into {dest}"))
    }

    /// The message carried by this error
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ScanError {}
