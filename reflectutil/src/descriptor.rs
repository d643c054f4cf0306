//! Type-level descriptions published by every [`Reflect`](crate::Reflect) type.

use std::any::{Any, TypeId, type_name};

use crate::value::Kind;

/// Reflective description of a type.
///
/// Built on demand by [`Reflect::type_descriptor`](crate::Reflect::type_descriptor).
/// Child descriptors are reached lazily through function pointers, so
/// recursive types (`struct Node { next: Option<Box<Node>> }`) describe fine.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub id: TypeId,
    pub kind: Kind,
    /// Pointee of a pointer, element of a list, value of a map
    pub elem: Option<fn() -> TypeDescriptor>,
    /// Direct fields of a struct, in declaration order
    pub fields: Vec<FieldDef>,
}

impl TypeDescriptor {
    fn new<T: Any>(kind: Kind) -> Self {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
            kind,
            elem: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn scalar<T: Any>(kind: Kind) -> Self {
        Self::new::<T>(kind)
    }

    #[must_use]
    pub fn opaque<T: Any>() -> Self {
        Self::new::<T>(Kind::Opaque)
    }

    #[must_use]
    pub fn pointer<T: Any>(pointee: fn() -> TypeDescriptor) -> Self {
        Self {
            elem: Some(pointee),
            ..Self::new::<T>(Kind::Pointer)
        }
    }

    #[must_use]
    pub fn list<T: Any>(element: fn() -> TypeDescriptor) -> Self {
        Self {
            elem: Some(element),
            ..Self::new::<T>(Kind::List)
        }
    }

    #[must_use]
    pub fn map<T: Any>(value: fn() -> TypeDescriptor) -> Self {
        Self {
            elem: Some(value),
            ..Self::new::<T>(Kind::Map)
        }
    }

    #[must_use]
    pub fn structure<T: Any>(fields: Vec<FieldDef>) -> Self {
        Self {
            fields,
            ..Self::new::<T>(Kind::Struct)
        }
    }

    /// Descriptor of the pointee, list element or map value.
    #[must_use]
    pub fn elem(&self) -> Option<TypeDescriptor> {
        self.elem.map(|describe| describe())
    }
}

/// A field as declared on a struct.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: fn() -> TypeDescriptor,
    /// Promote the fields of this field's struct into the parent
    pub embedded: bool,
    /// Whether the copier may write to this field
    pub settable: bool,
}

impl FieldDef {
    #[must_use]
    pub fn new(name: &'static str, ty: fn() -> TypeDescriptor) -> Self {
        Self {
            name,
            ty,
            embedded: false,
            settable: true,
        }
    }

    #[must_use]
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    #[must_use]
    pub fn readonly(mut self) -> Self {
        self.settable = false;
        self
    }
}
