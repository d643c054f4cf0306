//! Opaque implementations for ecosystem value types (behind the `uuid` and `chrono` features).

#[cfg(feature = "uuid")]
impl_reflect_opaque!(uuid::Uuid, blank = uuid::Uuid::nil());

#[cfg(feature = "chrono")]
impl_reflect_opaque!(
    chrono::DateTime<chrono::Utc>,
    blank = chrono::DateTime::<chrono::Utc>::default()
);

#[cfg(feature = "chrono")]
impl_reflect_opaque!(chrono::NaiveDate, blank = chrono::NaiveDate::default());

#[cfg(feature = "chrono")]
impl_reflect_opaque!(
    chrono::NaiveDateTime,
    blank = chrono::NaiveDateTime::default()
);
