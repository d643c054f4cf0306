//! Runtime value model.
//!
//! Every type that takes part in field copying, plucking or indexing implements
//! [`Reflect`]. Structs get their implementation from `#[derive(Reflect)]`;
//! primitives, strings, pointers and the standard collections are covered by
//! this crate.

use std::any::Any;

use serde::Serialize;

use crate::descriptor::TypeDescriptor;
use crate::errors::{FieldError, ScanError};

/// Classification of a reflected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Float,
    String,
    /// `Option<T>`, `Box<T>`, `Rc<T>`, `Arc<T>`
    Pointer,
    Struct,
    List,
    Map,
    /// Anything compared and assigned as a whole (ids, timestamps, JSON, enums)
    Opaque,
}

impl Kind {
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Kind::Int | Kind::Uint | Kind::Float)
    }
}

/// Borrowed scalar view of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(&'a str),
}

impl Scalar<'_> {
    /// Integral value of a numeric scalar, `None` for fractional or non-finite floats.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_i128(&self) -> Option<i128> {
        match *self {
            Scalar::Int(v) => Some(i128::from(v)),
            Scalar::Uint(v) => Some(i128::from(v)),
            Scalar::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e38 => {
                Some(v as i128)
            }
            _ => None,
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> Option<f64> {
        match *self {
            Scalar::Int(v) => Some(v as f64),
            Scalar::Uint(v) => Some(v as f64),
            Scalar::Float(v) => Some(v),
            _ => None,
        }
    }
}

/// Object-safe runtime view of a value.
///
/// Implemented by `#[derive(Reflect)]` for structs. The `where Self: Sized`
/// methods are type-level and unavailable through `dyn Reflect`.
pub trait Reflect: Any {
    /// Describe the implementing type.
    fn type_descriptor() -> TypeDescriptor
    where
        Self: Sized;

    /// The zero value of the implementing type.
    fn blank() -> Self
    where
        Self: Sized;

    /// Describe the dynamic type of this value.
    fn descriptor(&self) -> TypeDescriptor;

    fn kind(&self) -> Kind;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Structural zero test.
    fn is_blank(&self) -> bool;

    /// Reset to the zero value.
    fn set_blank(&mut self);

    /// Assign a convertible source to `self`.
    ///
    /// # Errors
    /// Returns [`FieldError::Incompatible`] when `src` is not convertible and
    /// [`FieldError::OutOfRange`] when a numeric value does not fit.
    fn assign(&mut self, src: &dyn Reflect) -> Result<(), FieldError>;

    fn to_scalar(&self) -> Option<Scalar<'_>> {
        None
    }

    /// Target of a pointer; `None` when the pointer is nil or `self` is not a pointer.
    fn pointee(&self) -> Option<&dyn Reflect> {
        None
    }

    /// Mutable target of a pointer; `None` when nil or not uniquely owned.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        None
    }

    /// Point a nil pointer at a fresh blank value. Returns `false` when not possible.
    fn allocate(&mut self) -> bool {
        false
    }

    fn as_struct(&self) -> Option<&dyn Struct> {
        None
    }

    fn as_struct_mut(&mut self) -> Option<&mut dyn Struct> {
        None
    }

    /// The scan-style custom assignment hook, if the type has one.
    fn as_scan_mut(&mut self) -> Option<&mut dyn Scan> {
        None
    }

    /// Elements of a list, in order.
    fn elements(&self) -> Vec<&dyn Reflect> {
        Vec::new()
    }

    /// Entries of a map.
    fn entries(&self) -> Vec<(&dyn Reflect, &dyn Reflect)> {
        Vec::new()
    }

    /// JSON form of an opaque value.
    #[cfg(feature = "json")]
    fn to_json_value(&self) -> Option<serde_json::Value> {
        None
    }
}

/// Positional access to the direct fields of a derived struct.
///
/// Indices follow declaration order of the registered (non-skipped) fields,
/// matching [`TypeDescriptor::fields`].
pub trait Struct: Reflect {
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

/// Scan-style custom assignment.
///
/// A destination field whose type implements `Scan` (and opts in through
/// `#[reflect(scan)]`) accepts source values that are not otherwise
/// convertible.
///
/// ```rust
/// use reflectutil::{Reflect, Scalar, Scan, ScanError};
///
/// #[derive(Clone, Reflect)]
/// #[reflect(scan)]
/// struct Cents {
///     value: i64,
/// }
///
/// impl Scan for Cents {
///     fn scan(&mut self, src: &dyn Reflect) -> Result<(), ScanError> {
///         match src.to_scalar() {
///             Some(Scalar::Float(units)) => {
///                 self.value = (units * 100.0).round() as i64;
///                 Ok(())
///             }
///             _ => Err(ScanError::unsupported(src.type_name(), "Cents")),
///         }
///     }
/// }
/// ```
pub trait Scan {
    /// Assign `src` to `self`.
    ///
    /// # Errors
    /// Returns a [`ScanError`] when `src` cannot be represented.
    fn scan(&mut self, src: &dyn Reflect) -> Result<(), ScanError>;
}

/// Whether `src` can be assigned to `dest` without custom logic.
///
/// Identical types are always convertible. Numbers convert to numbers and
/// strings to strings; booleans, pointers, structs, lists, maps and opaque
/// values only convert to their own type.
#[must_use]
pub fn convertible(src: &dyn Reflect, dest: &dyn Reflect) -> bool {
    if src.as_any().type_id() == dest.as_any().type_id() {
        return true;
    }
    let (from, to) = (src.kind(), dest.kind());
    (from.is_numeric() && to.is_numeric()) || (from == Kind::String && to == Kind::String)
}
