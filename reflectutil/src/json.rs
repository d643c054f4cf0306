//! JSON bridge (behind the `json` feature).
//!
//! [`to_json`] renders any reflected value as a [`serde_json::Value`].
//! `serde_json::Value` itself implements [`Reflect`] and [`Scan`], so a
//! struct field of that type accepts any source during
//! [`copy_same_fields`](crate::copy_same_fields).

use std::any::{Any, type_name};
use std::collections::HashSet;

use serde_json::{Map, Number, Value};

use crate::descriptor::TypeDescriptor;
use crate::errors::{FieldError, ScanError};
use crate::fields::{field_at_path, struct_fields};
use crate::value::{Kind, Reflect, Scalar, Scan};

/// Render a reflected value as JSON.
///
/// Structs become objects keyed by their flattened field names, lists become
/// arrays, nil pointers become `null`.
#[must_use]
pub fn to_json(value: &dyn Reflect) -> Value {
    if let Some(json) = value.as_any().downcast_ref::<Value>() {
        return json.clone();
    }
    match value.kind() {
        Kind::Pointer => value.pointee().map_or(Value::Null, to_json),
        Kind::Struct => struct_to_json(value),
        Kind::List => Value::Array(value.elements().into_iter().map(to_json).collect()),
        Kind::Map => Value::Object(
            value
                .entries()
                .into_iter()
                .map(|(key, item)| (key_to_string(key), to_json(item)))
                .collect(),
        ),
        Kind::Opaque => value.to_json_value().unwrap_or(Value::Null),
        Kind::Bool | Kind::Int | Kind::Uint | Kind::Float | Kind::String => {
            value.to_scalar().map_or(Value::Null, scalar_to_json)
        }
    }
}

fn scalar_to_json(scalar: Scalar<'_>) -> Value {
    match scalar {
        Scalar::Bool(flag) => Value::Bool(flag),
        Scalar::Int(number) => Value::Number(number.into()),
        Scalar::Uint(number) => Value::Number(number.into()),
        Scalar::Float(number) => Number::from_f64(number).map_or(Value::Null, Value::Number),
        Scalar::Str(text) => Value::String(text.to_owned()),
    }
}

fn key_to_string(key: &dyn Reflect) -> String {
    match to_json(key) {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn struct_to_json(value: &dyn Reflect) -> Value {
    let Ok(fields) = struct_fields(&value.descriptor()) else {
        return Value::Null;
    };
    let mut seen = HashSet::new();
    let mut object = Map::new();
    for field in fields.iter() {
        if !seen.insert(field.name) {
            continue;
        }
        let resolved = crate::fields::field_by_name(&fields, field.name).unwrap_or(field);
        let rendered = field_at_path(value, &resolved.path).map_or(Value::Null, to_json);
        object.insert(field.name.to_owned(), rendered);
    }
    Value::Object(object)
}

impl Reflect for Value {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::opaque::<Self>()
    }

    fn blank() -> Self {
        Value::Null
    }

    fn descriptor(&self) -> TypeDescriptor {
        Self::type_descriptor()
    }

    fn kind(&self) -> Kind {
        Kind::Opaque
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_blank(&self) -> bool {
        self.is_null()
    }

    fn set_blank(&mut self) {
        *self = Value::Null;
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

    fn as_scan_mut(&mut self) -> Option<&mut dyn Scan> {
        Some(self)
    }

    fn to_json_value(&self) -> Option<Value> {
        Some(self.clone())
    }
}

impl Scan for Value {
    fn scan(&mut self, src: &dyn Reflect) -> Result<(), ScanError> {
        *self = to_json(src);
        Ok(())
    }
}
