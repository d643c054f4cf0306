//! # Field Copier
//!
//! [`copy_same_fields`] copies every same-named field from a source struct to a
//! destination struct of a possibly different type.
//!
//! Per field, in order:
//!
//! 1. a missing or blank source resets the destination field to its blank value
//!    (a nil embedded pointer in the destination stays nil);
//! 2. a nil `Option` destination is allocated, and a pointer destination is
//!    dereferenced;
//! 3. convertible values are assigned (identical types, number to number,
//!    string to string);
//! 4. otherwise a destination with a [`Scan`](crate::Scan) hook is handed the
//!    source value;
//! 5. otherwise a pointer source is dereferenced and the transfer retried
//!    against the same destination;
//! 6. otherwise the field is left alone.
//!
//! A field that fails to transfer (a scan hook error, an out-of-range number)
//! does not fail the copy. It is logged at `debug` and listed in the
//! [`CopyReport`] returned by [`copy_same_fields_with_report`].

use std::collections::HashSet;

use crate::blank::is_blank;
use crate::errors::{FieldError, ReflectError};
use crate::fields::{
    deep_elem, deep_elem_mut, existing_field_at_path_mut, field_at_path, field_at_path_mut,
    field_by_name, struct_fields,
};
use crate::value::{Kind, Reflect, convertible};

/// What happened to each field during a copy.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Fields assigned from the source (directly or through a scan hook)
    pub assigned: Vec<&'static str>,
    /// Fields reset to blank because the source was blank
    pub reset: Vec<&'static str>,
    /// Matched fields with no applicable transfer rule
    pub untouched: Vec<&'static str>,
    /// Fields whose transfer failed
    pub failed: Vec<(&'static str, FieldError)>,
}

impl CopyReport {
    /// No field failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, name: &'static str, outcome: Result<Transfer, FieldError>) {
        match outcome {
            Ok(Transfer::Assigned) => self.assigned.push(name),
            Ok(Transfer::Reset) => self.reset.push(name),
            Ok(Transfer::Untouched) => self.untouched.push(name),
            Err(error) => {
                tracing::debug!(field = name, error = %error, "field transfer skipped");
                self.failed.push((name, error));
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    Assigned,
    Reset,
    Untouched,
}

/// Copy same-named fields from `src` into `dest`.
///
/// # Example
/// ```rust
/// use reflectutil::{Reflect, copy_same_fields};
///
/// #[derive(Clone, Reflect)]
/// struct Source {
///     name: String,
///     age: i32,
///     email: String,
/// }
///
/// #[derive(Clone, Default, Reflect)]
/// struct Target {
///     name: String,
///     age: i64,
///     email: Option<String>,
/// }
///
/// let src = Source { name: String::new(), age: 5, email: "a@b.c".into() };
/// let mut dest = Target { name: "stale".into(), ..Target::default() };
/// copy_same_fields(&src, &mut dest).unwrap();
///
/// assert_eq!(dest.name, "");
/// assert_eq!(dest.age, 5);
/// assert_eq!(dest.email.as_deref(), Some("a@b.c"));
/// ```
///
/// # Errors
/// - [`ReflectError::Unaddressable`] when `dest` sits behind a nil pointer or a
///   shared `Rc`/`Arc`. Nothing is mutated.
/// - [`ReflectError::NotStruct`] when an embedded field does not resolve to a
///   struct, [`ReflectError::EmbedCycle`] when a struct embeds itself.
/// - [`ReflectError::Conversion`] when a direct non-struct assignment fails.
pub fn copy_same_fields(src: &dyn Reflect, dest: &mut dyn Reflect) -> Result<(), ReflectError> {
    copy_same_fields_with_report(src, dest).map(|_| ())
}

/// [`copy_same_fields`], returning what happened to each field.
///
/// # Errors
/// As [`copy_same_fields`].
pub fn copy_same_fields_with_report(
    src: &dyn Reflect,
    dest: &mut dyn Reflect,
) -> Result<CopyReport, ReflectError> {
    let dest = deep_elem_mut(dest)?;
    let mut report = CopyReport::default();

    let Some(src) = deep_elem(src) else {
        tracing::trace!(type_name = dest.type_name(), "nil source, resetting destination");
        dest.set_blank();
        return Ok(report);
    };

    if src.kind() != Kind::Struct && convertible(src, dest) {
        dest.assign(src)?;
        return Ok(report);
    }

    if src.kind() != Kind::Struct || dest.kind() != Kind::Struct {
        return Ok(report);
    }

    let src_fields = struct_fields(&src.descriptor())?;
    let dest_fields = struct_fields(&dest.descriptor())?;
    let mut seen = HashSet::new();

    for field in src_fields.iter() {
        if !seen.insert(field.name) {
            continue;
        }
        let Some(target) = field_by_name(&dest_fields, field.name) else {
            continue;
        };
        if !target.settable {
            continue;
        }
        let source_path = field_by_name(&src_fields, field.name).map_or(&field.path, |resolved| &resolved.path);
        let source_value = field_at_path(src, source_path).filter(|value| !is_blank(*value));

        // Resets never allocate: a field behind a nil embedded pointer already reads as blank.
        let dest_value = if source_value.is_some() {
            field_at_path_mut(&mut *dest, &target.path)
        } else if field_at_path(&*dest, &target.path).is_none() {
            report.record(field.name, Ok(Transfer::Reset));
            continue;
        } else {
            existing_field_at_path_mut(&mut *dest, &target.path)
        };
        let Some(dest_value) = dest_value else {
            continue;
        };
        report.record(field.name, transfer(source_value, dest_value));
    }

    Ok(report)
}

fn transfer(src: Option<&dyn Reflect>, dest: &mut dyn Reflect) -> Result<Transfer, FieldError> {
    let src = match src {
        Some(value) if !is_blank(value) => value,
        _ => {
            dest.set_blank();
            return Ok(Transfer::Reset);
        }
    };

    let dest = if dest.kind() == Kind::Pointer {
        let type_name = dest.type_name();
        if dest.pointee().is_none() {
            if !dest.allocate() {
                return Err(FieldError::unaddressable(type_name));
            }
            tracing::trace!(type_name, "allocated destination pointer");
        }
        dest.pointee_mut()
            .ok_or_else(|| FieldError::unaddressable(type_name))?
    } else {
        dest
    };

    if convertible(src, dest) {
        dest.assign(src)?;
        return Ok(Transfer::Assigned);
    }

    if let Some(scanner) = dest.as_scan_mut() {
        scanner.scan(src)?;
        return Ok(Transfer::Assigned);
    }

    if src.kind() == Kind::Pointer {
        return transfer(src.pointee(), dest);
    }

    Ok(Transfer::Untouched)
}
