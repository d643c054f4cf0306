//! Pointer kinds.
//!
//! `Option<T>` is the nullable pointer. `Box<T>`, `Rc<T>` and `Arc<T>` are
//! never nil; `Rc`/`Arc` are only mutable through while uniquely owned.

use std::any::{Any, type_name};
use std::rc::Rc;
use std::sync::Arc;

use crate::descriptor::TypeDescriptor;
use crate::errors::FieldError;
use crate::value::{Kind, Reflect};

fn same_type<T: Clone + 'static>(dest: &mut T, src: &dyn Reflect) -> Result<(), FieldError> {
    match src.as_any().downcast_ref::<T>() {
        Some(value) => {
            dest.clone_from(value);
            Ok(())
        }
        None => Err(FieldError::incompatible(src.type_name(), type_name::<T>())),
    }
}

impl<T: Reflect + Clone> Reflect for Option<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::pointer::<Self>(T::type_descriptor)
    }

    fn blank() -> Self {
        None
    }

    fn descriptor(&self) -> TypeDescriptor {
        Self::type_descriptor()
    }

    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_blank(&self) -> bool {
        self.is_none()
    }

    fn set_blank(&mut self) {
        *self = None;
    }

    fn assign(&mut self, src: &dyn Reflect) -> Result<(), FieldError> {
        same_type(self, src)
    }

    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }

    fn allocate(&mut self) -> bool {
        if self.is_none() {
            *self = Some(T::blank());
        }
        true
    }
}

impl<T: Reflect + Clone> Reflect for Box<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::pointer::<Self>(T::type_descriptor)
    }

    fn blank() -> Self {
        Box::new(T::blank())
    }

    fn descriptor(&self) -> TypeDescriptor {
        Self::type_descriptor()
    }

    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_blank(&self) -> bool {
        false
    }

    fn set_blank(&mut self) {
        **self = T::blank();
    }

    fn assign(&mut self, src: &dyn Reflect) -> Result<(), FieldError> {
        same_type(self, src)
    }

    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self as &dyn Reflect)
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self as &mut dyn Reflect)
    }

    fn allocate(&mut self) -> bool {
        true
    }
}

macro_rules! impl_reflect_shared {
    ($($ptr:ident),*) => {$(
        impl<T: Reflect> Reflect for $ptr<T> {
            fn type_descriptor() -> TypeDescriptor {
                TypeDescriptor::pointer::<Self>(T::type_descriptor)
            }

            fn blank() -> Self {
                $ptr::new(T::blank())
            }

            fn descriptor(&self) -> TypeDescriptor {
                Self::type_descriptor()
            }

            fn kind(&self) -> Kind {
                Kind::Pointer
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn Any {
                self
            }

            fn is_blank(&self) -> bool {
                false
            }

            fn set_blank(&mut self) {
                *self = $ptr::new(T::blank());
            }

            fn assign(&mut self, src: &dyn Reflect) -> Result<(), FieldError> {
                same_type(self, src)
            }

            fn pointee(&self) -> Option<&dyn Reflect> {
                Some(&**self as &dyn Reflect)
            }

            fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
                $ptr::get_mut(self).map(|value| value as &mut dyn Reflect)
            }

            fn allocate(&mut self) -> bool {
                true
            }
        }
    )*};
}

impl_reflect_shared!(Rc, Arc);
