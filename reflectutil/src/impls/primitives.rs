use std::any::{Any, type_name};

use crate::descriptor::TypeDescriptor;
use crate::errors::FieldError;
use crate::value::{Kind, Reflect, Scalar};

/// Numeric view of `src`, or `Incompatible` when `src` is not a number.
fn numeric_source<'a, T>(src: &'a dyn Reflect) -> Result<Scalar<'a>, FieldError> {
    src.to_scalar()
        .filter(|_| src.kind().is_numeric())
        .ok_or_else(|| FieldError::incompatible(src.type_name(), type_name::<T>()))
}

macro_rules! impl_reflect_integer {
    ($($ty:ty => $kind:ident, $variant:ident;)*) => {$(
        impl Reflect for $ty {
            fn type_descriptor() -> TypeDescriptor {
                TypeDescriptor::scalar::<Self>(Kind::$kind)
            }

            fn blank() -> Self {
                0
            }

            fn descriptor(&self) -> TypeDescriptor {
                Self::type_descriptor()
            }

            fn kind(&self) -> Kind {
                Kind::$kind
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn Any {
                self
            }

            fn is_blank(&self) -> bool {
                *self == 0
            }

            fn set_blank(&mut self) {
                *self = 0;
            }

            fn assign(&mut self, src: &dyn Reflect) -> Result<(), FieldError> {
                if let Some(value) = src.as_any().downcast_ref::<Self>() {
                    *self = *value;
                    return Ok(());
                }
                let scalar = numeric_source::<Self>(src)?;
                *self = scalar
                    .to_i128()
                    .and_then(|wide| Self::try_from(wide).ok())
                    .ok_or_else(|| FieldError::out_of_range(src.type_name(), type_name::<Self>()))?;
                Ok(())
            }

            #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
            fn to_scalar(&self) -> Option<Scalar<'_>> {
                Some(Scalar::$variant(*self as _))
            }
        }
    )*};
}

impl_reflect_integer! {
    i8 => Int, Int;
    i16 => Int, Int;
    i32 => Int, Int;
    i64 => Int, Int;
    isize => Int, Int;
    u8 => Uint, Uint;
    u16 => Uint, Uint;
    u32 => Uint, Uint;
    u64 => Uint, Uint;
    usize => Uint, Uint;
}

macro_rules! impl_reflect_float {
    ($($ty:ty),*) => {$(
        impl Reflect for $ty {
            fn type_descriptor() -> TypeDescriptor {
                TypeDescriptor::scalar::<Self>(Kind::Float)
            }

            fn blank() -> Self {
                0.0
            }

            fn descriptor(&self) -> TypeDescriptor {
                Self::type_descriptor()
            }

            fn kind(&self) -> Kind {
                Kind::Float
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn Any {
                self
            }

            #[allow(clippy::float_cmp)]
            fn is_blank(&self) -> bool {
                *self == 0.0
            }

            fn set_blank(&mut self) {
                *self = 0.0;
            }

            #[allow(clippy::cast_possible_truncation)]
            fn assign(&mut self, src: &dyn Reflect) -> Result<(), FieldError> {
                if let Some(value) = src.as_any().downcast_ref::<Self>() {
                    *self = *value;
                    return Ok(());
                }
                let wide = numeric_source::<Self>(src)?
                    .to_f64()
                    .ok_or_else(|| FieldError::incompatible(src.type_name(), type_name::<Self>()))?;
                if wide.is_finite() && wide.abs() > f64::from(<$ty>::MAX) {
                    return Err(FieldError::out_of_range(src.type_name(), type_name::<Self>()));
                }
                *self = wide as $ty;
                Ok(())
            }

            fn to_scalar(&self) -> Option<Scalar<'_>> {
                Some(Scalar::Float(f64::from(*self)))
            }
        }
    )*};
}

impl_reflect_float!(f32, f64);

impl Reflect for bool {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::scalar::<Self>(Kind::Bool)
    }

    fn blank() -> Self {
        false
    }

    fn descriptor(&self) -> TypeDescriptor {
        Self::type_descriptor()
    }

    fn kind(&self) -> Kind {
        Kind::Bool
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_blank(&self) -> bool {
        !*self
    }

    fn set_blank(&mut self) {
        *self = false;
    }

    fn assign(&mut self, src: &dyn Reflect) -> Result<(), FieldError> {
        match src.as_any().downcast_ref::<Self>() {
            Some(value) => {
                *self = *value;
                Ok(())
            }
            None => Err(FieldError::incompatible(src.type_name(), "bool")),
        }
    }

    fn to_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Bool(*self))
    }
}

impl Reflect for String {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::scalar::<Self>(Kind::String)
    }

    fn blank() -> Self {
        String::new()
    }

    fn descriptor(&self) -> TypeDescriptor {
        Self::type_descriptor()
    }

    fn kind(&self) -> Kind {
        Kind::String
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn set_blank(&mut self) {
        self.clear();
    }

    fn assign(&mut self, src: &dyn Reflect) -> Result<(), FieldError> {
        if let Some(value) = src.as_any().downcast_ref::<Self>() {
            self.clone_from(value);
            return Ok(());
        }
        match src.to_scalar() {
            Some(Scalar::Str(value)) if src.kind() == Kind::String => {
                value.clone_into(self);
                Ok(())
            }
            _ => Err(FieldError::incompatible(src.type_name(), type_name::<Self>())),
        }
    }

    fn to_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Str(self.as_str()))
    }
}
