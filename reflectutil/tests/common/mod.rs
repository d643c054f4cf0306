//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use reflectutil::{Reflect, Scalar, Scan, ScanError};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to the test harness; `RUST_LOG=reflectutil=debug` shows skipped fields.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Base {
    pub id: i64,
    pub created_by: String,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct User {
    #[reflect(embed)]
    pub base: Base,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub active: bool,
    pub score: f64,
}

impl User {
    pub fn sample() -> Self {
        Self {
            base: Base {
                id: 42,
                created_by: "admin".to_string(),
            },
            name: "Ada".to_string(),
            age: 36,
            email: "ada@example.com".to_string(),
            active: true,
            score: 2.5,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct UserRecord {
    pub id: i64,
    pub created_by: Option<String>,
    pub name: String,
    pub age: i64,
    pub email: Option<String>,
    pub active: bool,
    pub score: f32,
    pub note: String,
}

/// Destination whose embedded struct sits behind a nil-able pointer
#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct LazyUser {
    #[reflect(embed)]
    pub base: Option<Base>,
    pub name: String,
}

/// Money stored as integer cents, filled from floating point units by its scan hook
#[derive(Clone, Debug, Default, PartialEq, Reflect)]
#[reflect(scan)]
pub struct Money {
    pub cents: i64,
}

impl Scan for Money {
    #[allow(clippy::cast_possible_truncation)]
    fn scan(&mut self, src: &dyn Reflect) -> Result<(), ScanError> {
        match src.to_scalar() {
            Some(Scalar::Float(units)) => {
                self.cents = (units * 100.0).round() as i64;
                Ok(())
            }
            _ => Err(ScanError::unsupported(src.type_name(), "Money")),
        }
    }
}

#[derive(Clone, Debug, Reflect)]
pub struct PriceQuote {
    pub amount: f64,
    pub currency: String,
}

#[derive(Clone, Debug, Reflect)]
pub struct LegacyQuote {
    pub amount: String,
    pub currency: String,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Invoice {
    pub amount: Money,
    pub currency: String,
}

#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct Row {
    #[reflect(rename = "F")]
    pub f: i64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct Entry {
    #[reflect(rename = "K")]
    pub k: String,
    #[reflect(rename = "V")]
    pub v: i32,
}

pub fn entry(k: &str, v: i32) -> Entry {
    Entry { k: k.to_string(), v }
}
