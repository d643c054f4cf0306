//! # List Projector
//!
//! Extract one named field from every element of a list.

use std::any::{TypeId, type_name};

use crate::errors::ReflectError;
use crate::fields::{FieldDescriptor, deep_pointee_descriptor, field_at_path, field_by_name, struct_fields};
use crate::value::{Kind, Reflect};

/// Resolve `field_name` on the struct behind the element type `E` and check
/// that its declared type is `T`.
pub(crate) fn resolve_typed_field<E: Reflect, T: Reflect>(
    field_name: &str,
) -> Result<FieldDescriptor, ReflectError> {
    let element = deep_pointee_descriptor(&E::type_descriptor());
    if element.kind != Kind::Struct {
        let err = ReflectError::invalid_element(element.name);
        err.log();
        return Err(err);
    }

    let fields = struct_fields(&element)?;
    let Some(field) = field_by_name(&fields, field_name) else {
        let err = ReflectError::field_not_found(field_name, element.name);
        err.log();
        return Err(err);
    };

    if field.type_id != TypeId::of::<T>() {
        let err = ReflectError::field_type_mismatch(field_name, type_name::<T>(), field.type_name);
        err.log();
        return Err(err);
    }

    Ok(field.clone())
}

/// Collect `field_name` from every element of `list`, preserving order and length.
///
/// Nil elements (and nil embedded pointers on the way to the field) yield
/// the blank value of `T`. An empty list returns an empty result without
/// inspecting the element type.
///
/// # Example
/// ```rust
/// use reflectutil::{Reflect, pluck};
///
/// #[derive(Clone, Reflect)]
/// struct Row {
///     f: i64,
/// }
///
/// let rows = vec![Some(Row { f: 1 }), Some(Row { f: 2 }), None, Some(Row { f: 4 })];
/// let values: Vec<i64> = pluck(&rows, "f").unwrap();
/// assert_eq!(values, vec![1, 2, 0, 4]);
/// ```
///
/// # Errors
/// - [`ReflectError::InvalidElement`] when the elements are not structs
/// - [`ReflectError::FieldNotFound`] when the field does not exist
/// - [`ReflectError::FieldTypeMismatch`] when the field is not of type `T`
pub fn pluck<T, E>(list: &[E], field_name: &str) -> Result<Vec<T>, ReflectError>
where
    T: Reflect + Clone,
    E: Reflect,
{
    if list.is_empty() {
        return Ok(Vec::new());
    }

    let field = resolve_typed_field::<E, T>(field_name)?;
    Ok(list
        .iter()
        .map(|element| {
            field_at_path(element, &field.path)
                .and_then(|value| value.as_any().downcast_ref::<T>())
                .map_or_else(T::blank, Clone::clone)
        })
        .collect())
}

/// [`pluck`] for `i64` ("int") fields.
///
/// # Errors
/// As [`pluck`].
pub fn pluck_i64<E: Reflect>(list: &[E], field_name: &str) -> Result<Vec<i64>, ReflectError> {
    pluck(list, field_name)
}

/// [`pluck`] for `i32` fields.
///
/// # Errors
/// As [`pluck`].
pub fn pluck_i32<E: Reflect>(list: &[E], field_name: &str) -> Result<Vec<i32>, ReflectError> {
    pluck(list, field_name)
}

/// [`pluck`] for `u32` fields.
///
/// # Errors
/// As [`pluck`].
pub fn pluck_u32<E: Reflect>(list: &[E], field_name: &str) -> Result<Vec<u32>, ReflectError> {
    pluck(list, field_name)
}

/// [`pluck`] for `u64` fields.
///
/// # Errors
/// As [`pluck`].
pub fn pluck_u64<E: Reflect>(list: &[E], field_name: &str) -> Result<Vec<u64>, ReflectError> {
    pluck(list, field_name)
}

/// [`pluck`] for `String` fields.
///
/// # Errors
/// As [`pluck`].
pub fn pluck_string<E: Reflect>(list: &[E], field_name: &str) -> Result<Vec<String>, ReflectError> {
    pluck(list, field_name)
}
