mod common;

use std::collections::BTreeMap;

use common::{Base, Money, User};
use reflectutil::{Reflect, is_blank};

#[test]
fn test_zero_scalars() {
    assert!(is_blank(&String::new()));
    assert!(is_blank(&false));
    assert!(is_blank(&0_i8));
    assert!(is_blank(&0_u64));
    assert!(is_blank(&0.0_f32));
    assert!(is_blank(&None::<User>));
}

#[test]
fn test_non_zero_scalars() {
    assert!(!is_blank(&String::from("x")));
    assert!(!is_blank(&true));
    assert!(!is_blank(&-3_i32));
    assert!(!is_blank(&f64::NAN));
    assert!(!is_blank(&Some(0_u8)));
}

#[test]
fn test_structs_are_blank_when_every_field_is() {
    assert!(is_blank(&Base::default()));
    assert!(!is_blank(&Base {
        id: 1,
        ..Base::default()
    }));
    assert!(is_blank(&User::default()));
    assert!(!is_blank(&User::sample()));
}

#[test]
fn test_skipped_fields_do_not_count() {
    #[derive(Clone, Reflect)]
    struct Cached {
        key: String,
        #[reflect(skip)]
        hits: u32,
    }

    let cached = Cached {
        key: String::new(),
        hits: 10,
    };
    assert!(is_blank(&cached));
    assert_eq!(<Cached as Reflect>::blank().hits, 0);
}

#[test]
fn test_collections_are_blank_when_empty() {
    assert!(is_blank(&BTreeMap::<String, Money>::new()));
    assert!(!is_blank(&vec![Money::default()]));
}

#[test]
fn test_opaque_values() {
    assert!(is_blank(&uuid::Uuid::nil()));
    assert!(!is_blank(&uuid::Uuid::new_v4()));
    assert!(is_blank(&serde_json::Value::Null));
    assert!(!is_blank(&serde_json::json!({})));
}
