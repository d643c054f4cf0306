//! [`Reflect`](crate::Reflect) implementations for types outside the derive macro's reach.

/// Implement `Reflect` for a type compared and assigned as a whole.
///
/// The type must be `Clone + PartialEq`; `$blank` is its zero value.
#[cfg(any(feature = "uuid", feature = "chrono"))]
macro_rules! impl_reflect_opaque {
    ($ty:ty, blank = $blank:expr) => {
        impl $crate::Reflect for $ty {
            fn type_descriptor() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::opaque::<Self>()
            }

            fn blank() -> Self {
                $blank
            }

            fn descriptor(&self) -> $crate::TypeDescriptor {
                <Self as $crate::Reflect>::type_descriptor()
            }

            fn kind(&self) -> $crate::Kind {
                $crate::Kind::Opaque
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn is_blank(&self) -> bool {
                *self == $blank
            }

            fn set_blank(&mut self) {
                *self = $blank;
            }

            fn assign(&mut self, src: &dyn $crate::Reflect) -> Result<(), $crate::FieldError> {
                match src.as_any().downcast_ref::<Self>() {
                    Some(value) => {
                        *self = value.clone();
                        Ok(())
                    }
                    None => Err($crate::FieldError::incompatible(
                        src.type_name(),
                        ::std::any::type_name::<Self>(),
                    )),
                }
            }

            #[cfg(feature = "json")]
            fn to_json_value(&self) -> Option<::serde_json::Value> {
                ::serde_json::to_value(self).ok()
            }
        }
    };
}

mod collections;
#[cfg(any(feature = "uuid", feature = "chrono"))]
mod external;
mod pointers;
mod primitives;
