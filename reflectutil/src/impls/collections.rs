use std::any::{Any, type_name};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::descriptor::TypeDescriptor;
use crate::errors::FieldError;
use crate::value::{Kind, Reflect};

impl<T: Reflect + Clone> Reflect for Vec<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::list::<Self>(T::type_descriptor)
    }

    fn blank() -> Self {
        Vec::new()
    }

    fn descriptor(&self) -> TypeDescriptor {
        Self::type_descriptor()
    }

    fn kind(&self) -> Kind {
        Kind::List
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
        match src.as_any().downcast_ref::<Self>() {
            Some(value) => {
                self.clone_from(value);
                Ok(())
            }
            None => Err(FieldError::incompatible(src.type_name(), type_name::<Self>())),
        }
    }

    fn elements(&self) -> Vec<&dyn Reflect> {
        self.iter().map(|item| item as &dyn Reflect).collect()
    }
}

macro_rules! impl_reflect_map {
    ($($map:ident: $($bound:path),+;)*) => {$(
        impl<K, V> Reflect for $map<K, V>
        where
            K: Reflect + Clone $(+ $bound)+,
            V: Reflect + Clone,
        {
            fn type_descriptor() -> TypeDescriptor {
                TypeDescriptor::map::<Self>(V::type_descriptor)
            }

            fn blank() -> Self {
                $map::new()
            }

            fn descriptor(&self) -> TypeDescriptor {
                Self::type_descriptor()
            }

            fn kind(&self) -> Kind {
                Kind::Map
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
                match src.as_any().downcast_ref::<Self>() {
                    Some(value) => {
                        self.clone_from(value);
                        Ok(())
                    }
                    None => Err(FieldError::incompatible(src.type_name(), type_name::<Self>())),
                }
            }

            fn entries(&self) -> Vec<(&dyn Reflect, &dyn Reflect)> {
                self.iter()
                    .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect))
                    .collect()
            }
        }
    )*};
}

impl_reflect_map! {
    HashMap: Eq, Hash;
    BTreeMap: Ord;
}
