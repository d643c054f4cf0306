//! # Field Enumerator
//!
//! Turns a [`TypeDescriptor`] into the flat, ordered list of its named fields.
//! Embedded fields (`#[reflect(embed)]`) are replaced by the fields of the
//! embedded struct, depth-first, in declaration order.
//!
//! Field lists depend only on the type, so they are computed once per
//! [`TypeId`] and kept in a process-wide cache.
//!
//! ## Name collisions
//!
//! Enumeration keeps every entry. Lookup by name ([`field_by_name`]) resolves
//! to the shallowest entry; among entries at the same depth the first in
//! declaration order wins. A direct field therefore shadows a promoted one.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use serde::Serialize;

use crate::descriptor::TypeDescriptor;
use crate::errors::ReflectError;
use crate::value::{Kind, Reflect};

/// A named field reachable from a struct, with its position path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub type_name: &'static str,
    #[serde(skip)]
    pub type_id: TypeId,
    pub kind: Kind,
    /// Direct-field indices from the outer struct down through embedded structs
    pub path: Vec<usize>,
    /// `false` for `readonly` fields and fields promoted through a `readonly` embed
    pub settable: bool,
}

impl FieldDescriptor {
    /// Embedding depth; 0 for a direct field.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

type FieldList = Arc<[FieldDescriptor]>;

static FIELD_CACHE: LazyLock<RwLock<HashMap<TypeId, FieldList>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Unwrap pointer and list wrapping on a type description.
#[must_use]
pub fn deep_elem_descriptor(descriptor: &TypeDescriptor) -> TypeDescriptor {
    let mut current = descriptor.clone();
    while matches!(current.kind, Kind::Pointer | Kind::List) {
        match current.elem() {
            Some(next) => current = next,
            None => break,
        }
    }
    current
}

/// Unwrap pointer wrapping only.
#[must_use]
pub fn deep_pointee_descriptor(descriptor: &TypeDescriptor) -> TypeDescriptor {
    let mut current = descriptor.clone();
    while current.kind == Kind::Pointer {
        match current.elem() {
            Some(next) => current = next,
            None => break,
        }
    }
    current
}

/// Follow a pointer chain down to a concrete value. `None` when a nil pointer is reached.
#[must_use]
pub fn deep_elem(value: &dyn Reflect) -> Option<&dyn Reflect> {
    let mut current = value;
    while current.kind() == Kind::Pointer {
        current = current.pointee()?;
    }
    Some(current)
}

/// Follow a pointer chain for mutation.
///
/// # Errors
/// Returns [`ReflectError::Unaddressable`] when the chain hits a nil pointer or
/// a shared `Rc`/`Arc`.
pub fn deep_elem_mut(value: &mut dyn Reflect) -> Result<&mut dyn Reflect, ReflectError> {
    let mut current = value;
    while current.kind() == Kind::Pointer {
        let type_name = current.type_name();
        current = current
            .pointee_mut()
            .ok_or_else(|| ReflectError::unaddressable(type_name))?;
    }
    Ok(current)
}

/// Ordered, flattened field list of the struct behind `descriptor`.
///
/// # Errors
/// Returns [`ReflectError::NotStruct`] when the type (after unwrapping pointers
/// and lists) or one of its embedded fields is not a struct, and
/// [`ReflectError::EmbedCycle`] when an embedded field leads back to a struct
/// that encloses it.
pub fn struct_fields(descriptor: &TypeDescriptor) -> Result<FieldList, ReflectError> {
    let target = deep_elem_descriptor(descriptor);
    if target.kind != Kind::Struct {
        return Err(ReflectError::not_struct(target.name));
    }

    if let Some(cached) = FIELD_CACHE
        .read()
        .ok()
        .and_then(|cache| cache.get(&target.id).cloned())
    {
        return Ok(cached);
    }

    let mut fields = Vec::new();
    flatten_into(&target, &mut Vec::new(), &mut vec![target.id], true, &mut fields)?;
    let fields: FieldList = fields.into();
    tracing::trace!(type_name = target.name, count = fields.len(), "enumerated struct fields");

    // First writer wins so every caller shares one list per type.
    match FIELD_CACHE.write() {
        Ok(mut cache) => Ok(Arc::clone(cache.entry(target.id).or_insert(fields))),
        Err(_) => Ok(fields),
    }
}

/// Field list of `T`.
///
/// # Errors
/// See [`struct_fields`].
pub fn fields_of<T: Reflect>() -> Result<FieldList, ReflectError> {
    struct_fields(&T::type_descriptor())
}

/// `enclosing` holds the structs currently being flattened, outermost first.
fn flatten_into(
    descriptor: &TypeDescriptor,
    prefix: &mut Vec<usize>,
    enclosing: &mut Vec<TypeId>,
    settable: bool,
    out: &mut Vec<FieldDescriptor>,
) -> Result<(), ReflectError> {
    for (index, field) in descriptor.fields.iter().enumerate() {
        let ty = (field.ty)();
        prefix.push(index);
        if field.embedded {
            let embedded = deep_pointee_descriptor(&ty);
            if embedded.kind != Kind::Struct {
                return Err(ReflectError::not_struct(embedded.name));
            }
            if enclosing.contains(&embedded.id) {
                return Err(ReflectError::embed_cycle(embedded.name));
            }
            enclosing.push(embedded.id);
            flatten_into(&embedded, prefix, enclosing, settable && field.settable, out)?;
            enclosing.pop();
        } else {
            out.push(FieldDescriptor {
                name: field.name,
                type_name: ty.name,
                type_id: ty.id,
                kind: ty.kind,
                path: prefix.clone(),
                settable: settable && field.settable,
            });
        }
        prefix.pop();
    }
    Ok(())
}

/// Resolve `name` in a flattened field list.
#[must_use]
pub fn field_by_name<'a>(fields: &'a [FieldDescriptor], name: &str) -> Option<&'a FieldDescriptor> {
    fields
        .iter()
        .filter(|field| field.name == name)
        .min_by_key(|field| field.path.len())
}

/// Read the field at `path`, following pointers on the way.
///
/// `None` when `value` or an embedded pointer on the path is nil.
#[must_use]
pub fn field_at_path<'a>(value: &'a dyn Reflect, path: &[usize]) -> Option<&'a dyn Reflect> {
    let (last, parents) = path.split_last()?;
    let mut current = deep_elem(value)?;
    for &index in parents {
        current = deep_elem(current.as_struct()?.field_at(index)?)?;
    }
    current.as_struct()?.field_at(*last)
}

/// Write access to the field at `path`.
///
/// The outer value must be reachable (see [`deep_elem_mut`]). Nil embedded
/// pointers on the way are allocated.
pub fn field_at_path_mut<'a>(
    value: &'a mut dyn Reflect,
    path: &[usize],
) -> Option<&'a mut dyn Reflect> {
    walk_path_mut(value, path, true)
}

/// Write access to the field at `path` without allocating.
///
/// `None` when an embedded pointer on the path is nil.
pub fn existing_field_at_path_mut<'a>(
    value: &'a mut dyn Reflect,
    path: &[usize],
) -> Option<&'a mut dyn Reflect> {
    walk_path_mut(value, path, false)
}

fn walk_path_mut<'a>(
    value: &'a mut dyn Reflect,
    path: &[usize],
    allocate: bool,
) -> Option<&'a mut dyn Reflect> {
    let (last, parents) = path.split_last()?;
    let mut current = deep_elem_mut(value).ok()?;
    for &index in parents {
        let embedded = current.as_struct_mut()?.field_at_mut(index)?;
        current = descend_mut(embedded, allocate)?;
    }
    current.as_struct_mut()?.field_at_mut(*last)
}

fn descend_mut(value: &mut dyn Reflect, allocate: bool) -> Option<&mut dyn Reflect> {
    let mut current = value;
    while current.kind() == Kind::Pointer {
        if allocate && current.pointee().is_none() && current.allocate() {
            tracing::trace!(type_name = current.type_name(), "allocated embedded pointer");
        }
        current = current.pointee_mut()?;
    }
    Some(current)
}

/// Read a field by name.
///
/// # Errors
/// [`ReflectError::NotStruct`] when `value` is not a struct behind its pointers,
/// [`ReflectError::FieldNotFound`] when no field has that name.
pub fn get_field<'a>(value: &'a dyn Reflect, name: &str) -> Result<Option<&'a dyn Reflect>, ReflectError> {
    let fields = struct_fields(&value.descriptor())?;
    let field = field_by_name(&fields, name)
        .ok_or_else(|| ReflectError::field_not_found(name, value.type_name()))?;
    Ok(field_at_path(value, &field.path))
}

/// Write access to a settable field by name.
///
/// # Errors
/// As [`get_field`], plus [`ReflectError::Unaddressable`] when the field is
/// read-only or the value cannot be reached for mutation.
pub fn get_field_mut<'a>(
    value: &'a mut dyn Reflect,
    name: &str,
) -> Result<&'a mut dyn Reflect, ReflectError> {
    let fields = struct_fields(&value.descriptor())?;
    let field = field_by_name(&fields, name)
        .ok_or_else(|| ReflectError::field_not_found(name, value.type_name()))?;
    if !field.settable {
        return Err(ReflectError::unaddressable(field.type_name));
    }
    let type_name = field.type_name;
    field_at_path_mut(value, &field.path).ok_or_else(|| ReflectError::unaddressable(type_name))
}
