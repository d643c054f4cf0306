//! Blank (zero value) predicate.

use crate::value::{Kind, Reflect, Scalar};

/// Whether `value` is the zero value of its type.
///
/// Text is blank when empty, booleans when `false`, numbers when zero and
/// pointers when nil. Everything else (structs, lists, maps, opaque values)
/// is compared structurally through [`Reflect::is_blank`].
///
/// ```rust
/// use reflectutil::is_blank;
///
/// assert!(is_blank(&String::new()));
/// assert!(is_blank(&0_u8));
/// assert!(is_blank(&None::<i32>));
/// assert!(!is_blank(&Some(0_i32)));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_blank(value: &dyn Reflect) -> bool {
    match (value.kind(), value.to_scalar()) {
        (Kind::String, Some(Scalar::Str(text))) => text.is_empty(),
        (Kind::Bool, Some(Scalar::Bool(flag))) => !flag,
        (Kind::Int, Some(Scalar::Int(number))) => number == 0,
        (Kind::Uint, Some(Scalar::Uint(number))) => number == 0,
        (Kind::Float, Some(Scalar::Float(number))) => number == 0.0,
        (Kind::Pointer, _) => value.pointee().is_none(),
        _ => value.is_blank(),
    }
}
