//! # List Indexer
//!
//! Build a lookup map from a list, keyed by a named field.

use std::collections::HashMap;
use std::hash::Hash;

use crate::errors::ReflectError;
use crate::fields::field_at_path;
use crate::pluck::resolve_typed_field;
use crate::value::Reflect;

/// Index `list` by `field_name`.
///
/// Nil elements are skipped entirely. When two elements share a key the later
/// one wins. Values are clones of the elements, pointer wrapping included.
/// Unlike [`pluck`](crate::pluck), the element type is validated even for an
/// empty list.
///
/// # Example
/// ```rust
/// use std::collections::HashMap;
/// use reflectutil::{Reflect, map_by_key};
///
/// #[derive(Clone, Debug, PartialEq, Reflect)]
/// struct Entry {
///     k: String,
///     v: i32,
/// }
///
/// let entries = vec![
///     Entry { k: "a".into(), v: 1 },
///     Entry { k: "b".into(), v: 2 },
///     Entry { k: "a".into(), v: 3 },
/// ];
/// let by_key: HashMap<String, Entry> = map_by_key(&entries, "k").unwrap();
/// assert_eq!(by_key.len(), 2);
/// assert_eq!(by_key["a"].v, 3);
/// ```
///
/// # Errors
/// - [`ReflectError::InvalidElement`] when the elements are not structs
/// - [`ReflectError::FieldNotFound`] when the field does not exist
/// - [`ReflectError::FieldTypeMismatch`] when the field is not of type `K`
pub fn map_by_key<K, E>(list: &[E], field_name: &str) -> Result<HashMap<K, E>, ReflectError>
where
    K: Reflect + Clone + Eq + Hash,
    E: Reflect + Clone,
{
    let field = resolve_typed_field::<E, K>(field_name)?;

    let mut map = HashMap::with_capacity(list.len());
    for element in list {
        let Some(key) = field_at_path(element, &field.path)
            .and_then(|value| value.as_any().downcast_ref::<K>())
        else {
            continue;
        };
        map.insert(key.clone(), element.clone());
    }
    Ok(map)
}
