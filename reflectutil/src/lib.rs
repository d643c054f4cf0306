//! Name-based field operations over a derived field registry.
//!
//! `#[derive(Reflect)]` publishes a struct's named fields, their types and
//! their embedding relations. On top of that registry the crate offers:
//!
//! - [`copy_same_fields`]: copy every same-named, convertible field from one
//!   struct to another of a different type;
//! - [`pluck`] and its typed wrappers: project one field out of a list;
//! - [`map_by_key`]: index a list by one field;
//! - [`is_blank`]: the zero-value predicate the copier relies on.
//!
//! ```rust
//! use reflectutil::{Reflect, copy_same_fields, pluck_string};
//!
//! #[derive(Clone, Reflect)]
//! struct User {
//!     name: String,
//!     age: u8,
//! }
//!
//! #[derive(Clone, Default, Reflect)]
//! struct UserRow {
//!     name: String,
//!     age: i64,
//! }
//!
//! let user = User { name: "ada".into(), age: 36 };
//! let mut row = UserRow::default();
//! copy_same_fields(&user, &mut row).unwrap();
//! assert_eq!(row.age, 36);
//!
//! let names = pluck_string(&[user], "name").unwrap();
//! assert_eq!(names, vec!["ada".to_string()]);
//! ```

// Lets the derive macro's `::reflectutil::` paths resolve inside this crate.
extern crate self as reflectutil;

pub mod blank;
pub mod copy;
pub mod descriptor;
pub mod errors;
pub mod fields;
mod impls;
pub mod index;
#[cfg(feature = "json")]
pub mod json;
pub mod pluck;
pub mod value;

pub use blank::is_blank;
pub use copy::{CopyReport, copy_same_fields, copy_same_fields_with_report};
pub use descriptor::{FieldDef, TypeDescriptor};
pub use errors::{FieldError, ReflectError, ScanError};
pub use fields::{FieldDescriptor, fields_of, get_field, get_field_mut, struct_fields};
pub use index::map_by_key;
#[cfg(feature = "json")]
pub use json::to_json;
pub use pluck::{pluck, pluck_i32, pluck_i64, pluck_string, pluck_u32, pluck_u64};
pub use value::{Kind, Reflect, Scalar, Scan, Struct, convertible};

#[cfg(feature = "derive")]
pub use reflectutil_derive::Reflect;
