mod common;

use std::sync::Arc;

use common::{Base, Invoice, LazyUser, LegacyQuote, Money, PriceQuote, User, UserRecord, init_tracing};
use reflectutil::{FieldError, Reflect, ReflectError, copy_same_fields, copy_same_fields_with_report};

#[test]
fn test_scalar_values_are_assigned_directly() {
    let mut dest = 0_i64;
    copy_same_fields(&5_i32, &mut dest).unwrap();
    assert_eq!(dest, 5);

    let mut text = String::from("old");
    copy_same_fields(&String::from("new"), &mut text).unwrap();
    assert_eq!(text, "new");
}

#[test]
fn test_failed_scalar_assignment_is_an_error() {
    let mut dest = 0_u8;
    let err = copy_same_fields(&-1_i32, &mut dest).unwrap_err();
    assert!(matches!(err, ReflectError::Conversion(FieldError::OutOfRange { .. })));
    assert_eq!(dest, 0);
}

#[test]
fn test_non_convertible_scalars_are_ignored() {
    let mut dest = 7_i32;
    copy_same_fields(&String::from("8"), &mut dest).unwrap();
    assert_eq!(dest, 7);
}

#[test]
fn test_same_named_fields_are_copied_across_types() {
    let mut record = UserRecord {
        note: "keep me".to_string(),
        ..UserRecord::default()
    };
    let report = copy_same_fields_with_report(&User::sample(), &mut record).unwrap();

    assert_eq!(
        record,
        UserRecord {
            id: 42,
            created_by: Some("admin".to_string()),
            name: "Ada".to_string(),
            age: 36,
            email: Some("ada@example.com".to_string()),
            active: true,
            score: 2.5,
            note: "keep me".to_string(),
        }
    );
    assert_eq!(
        report.assigned,
        vec!["id", "created_by", "name", "age", "email", "active", "score"]
    );
    assert!(report.is_clean());
}

#[test]
fn test_blank_source_fields_reset_the_destination() {
    let src = User {
        name: String::new(),
        active: false,
        ..User::sample()
    };
    let mut record = UserRecord {
        name: "stale".to_string(),
        active: true,
        ..UserRecord::default()
    };
    let report = copy_same_fields_with_report(&src, &mut record).unwrap();

    assert_eq!(record.name, "");
    assert!(!record.active);
    assert_eq!(report.reset, vec!["name", "active"]);
}

#[test]
fn test_nil_destination_is_unaddressable() {
    let mut dest: Option<UserRecord> = None;
    let err = copy_same_fields(&User::sample(), &mut dest).unwrap_err();
    assert!(matches!(err, ReflectError::Unaddressable { .. }));
    assert!(dest.is_none());
}

#[test]
fn test_shared_destination_is_unaddressable() {
    let shared = Arc::new(UserRecord::default());
    let mut dest = Arc::clone(&shared);
    let err = copy_same_fields(&User::sample(), &mut dest).unwrap_err();
    assert!(matches!(err, ReflectError::Unaddressable { .. }));
    assert_eq!(*shared, UserRecord::default());
}

#[test]
fn test_uniquely_owned_pointers_are_followed() {
    let src = Some(Box::new(User::sample()));
    let mut dest = Box::new(UserRecord::default());
    copy_same_fields(&src, &mut dest).unwrap();
    assert_eq!(dest.name, "Ada");

    let mut owned = Arc::new(UserRecord::default());
    copy_same_fields(&User::sample(), &mut owned).unwrap();
    assert_eq!(owned.age, 36);
}

#[test]
fn test_nil_source_resets_destination() {
    let mut record = UserRecord {
        name: "stale".to_string(),
        age: 9,
        ..UserRecord::default()
    };
    copy_same_fields(&None::<User>, &mut record).unwrap();
    assert_eq!(record, UserRecord::default());
}

#[test]
fn test_nil_embedded_destination_is_allocated() {
    let mut dest = LazyUser::default();
    copy_same_fields(&User::sample(), &mut dest).unwrap();
    assert_eq!(
        dest.base,
        Some(Base {
            id: 42,
            created_by: "admin".to_string(),
        })
    );
    assert_eq!(dest.name, "Ada");
}

#[test]
fn test_blank_source_leaves_nil_embedded_destination_alone() {
    #[derive(Clone, Reflect)]
    struct Draft {
        id: i64,
        created_by: String,
        name: String,
    }

    let mut dest = LazyUser::default();
    let report = copy_same_fields_with_report(
        &Draft {
            id: 0,
            created_by: String::new(),
            name: "z".to_string(),
        },
        &mut dest,
    )
    .unwrap();

    assert_eq!(dest.base, None);
    assert_eq!(dest.name, "z");
    assert_eq!(report.reset, vec!["id", "created_by"]);
    assert_eq!(report.assigned, vec!["name"]);
}

#[test]
fn test_partially_blank_source_allocates_embedded_destination() {
    #[derive(Clone, Reflect)]
    struct Draft {
        id: i64,
        created_by: String,
    }

    let mut dest = LazyUser::default();
    copy_same_fields(
        &Draft {
            id: 0,
            created_by: "ops".to_string(),
        },
        &mut dest,
    )
    .unwrap();

    assert_eq!(
        dest.base,
        Some(Base {
            id: 0,
            created_by: "ops".to_string(),
        })
    );
}

#[test]
fn test_nil_embedded_source_resets_promoted_fields() {
    let src = LazyUser {
        base: None,
        name: "Grace".to_string(),
    };
    let mut record = UserRecord {
        id: 3,
        ..UserRecord::default()
    };
    let report = copy_same_fields_with_report(&src, &mut record).unwrap();
    assert_eq!(record.id, 0);
    assert_eq!(record.created_by, None);
    assert_eq!(record.name, "Grace");
    assert_eq!(report.reset, vec!["id", "created_by"]);
}

#[test]
fn test_non_struct_embed_is_rejected() {
    #[derive(Clone, Reflect)]
    struct BadEmbed {
        #[reflect(embed)]
        n: i32,
        name: String,
    }

    let mut record = UserRecord {
        name: "untouched".to_string(),
        ..UserRecord::default()
    };
    let err = copy_same_fields(
        &BadEmbed {
            n: 1,
            name: "Ada".to_string(),
        },
        &mut record,
    )
    .unwrap_err();

    assert_eq!(err, ReflectError::not_struct("i32"));
    assert_eq!(record.name, "untouched");
}

#[test]
fn test_self_embedding_struct_is_rejected() {
    #[derive(Clone, Default, Reflect)]
    struct Chain {
        value: i32,
        #[reflect(embed)]
        next: Option<Box<Chain>>,
    }

    let mut dest = Chain::default();
    let err = copy_same_fields(&User::sample(), &mut dest).unwrap_err();
    assert!(matches!(err, ReflectError::EmbedCycle { .. }));
}

#[test]
fn test_pointer_source_is_dereferenced_into_plain_destination() {
    #[derive(Clone, Reflect)]
    struct Sparse {
        age: Option<i32>,
        name: Option<Box<String>>,
    }

    let src = Sparse {
        age: Some(4),
        name: Some(Box::new("Linus".to_string())),
    };
    let mut record = UserRecord::default();
    copy_same_fields(&src, &mut record).unwrap();
    assert_eq!(record.age, 4);
    assert_eq!(record.name, "Linus");
}

#[test]
fn test_out_of_range_field_is_reported_and_skipped() {
    #[derive(Clone, Reflect)]
    struct Wide {
        age: i64,
        name: String,
    }

    #[derive(Clone, Default, Reflect)]
    struct Narrow {
        age: u8,
        name: String,
    }

    init_tracing();
    let mut dest = Narrow::default();
    let report = copy_same_fields_with_report(
        &Wide {
            age: 300,
            name: "Ada".to_string(),
        },
        &mut dest,
    )
    .unwrap();

    assert_eq!(dest.age, 0);
    assert_eq!(dest.name, "Ada");
    assert_eq!(
        report.failed,
        vec![("age", FieldError::out_of_range("i64", "u8"))]
    );
    assert!(!report.is_clean());
}

#[test]
fn test_scan_hook_accepts_unconvertible_source() {
    let src = PriceQuote {
        amount: 12.34,
        currency: "EUR".to_string(),
    };
    let mut invoice = Invoice::default();
    copy_same_fields(&src, &mut invoice).unwrap();
    assert_eq!(invoice.amount, Money { cents: 1234 });
    assert_eq!(invoice.currency, "EUR");
}

#[test]
fn test_scan_hook_failure_is_swallowed() {
    init_tracing();
    let src = LegacyQuote {
        amount: "12.34".to_string(),
        currency: "EUR".to_string(),
    };
    let mut invoice = Invoice::default();
    let report = copy_same_fields_with_report(&src, &mut invoice).unwrap();

    assert_eq!(invoice.amount, Money::default());
    assert_eq!(invoice.currency, "EUR");
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "amount");
    assert!(matches!(report.failed[0].1, FieldError::Scan(_)));
}

#[test]
fn test_incompatible_fields_are_left_alone() {
    #[derive(Clone, Reflect)]
    struct Labelled {
        age: String,
    }

    let mut record = UserRecord {
        age: 9,
        ..UserRecord::default()
    };
    let report = copy_same_fields_with_report(
        &Labelled {
            age: "nine".to_string(),
        },
        &mut record,
    )
    .unwrap();
    assert_eq!(record.age, 9);
    assert_eq!(report.untouched, vec!["age"]);
}

#[test]
fn test_readonly_destination_fields_are_not_written() {
    #[derive(Clone, Default, Reflect)]
    struct Locked {
        #[reflect(readonly)]
        id: i64,
        name: String,
    }

    let mut dest = Locked {
        id: 7,
        ..Locked::default()
    };
    copy_same_fields(&User::sample(), &mut dest).unwrap();
    assert_eq!(dest.id, 7);
    assert_eq!(dest.name, "Ada");
}

#[test]
fn test_struct_valued_fields_copy_when_identical() {
    #[derive(Clone, Reflect)]
    struct Holder {
        base: Base,
    }

    #[derive(Clone, Default, Reflect)]
    struct OtherHolder {
        base: Base,
    }

    let mut dest = OtherHolder::default();
    copy_same_fields(
        &Holder {
            base: Base {
                id: 1,
                created_by: "x".to_string(),
            },
        },
        &mut dest,
    )
    .unwrap();
    assert_eq!(dest.base.id, 1);
}

#[test]
fn test_json_destination_field_scans_any_source() {
    #[derive(Clone, Reflect)]
    struct Tagged {
        tags: Vec<String>,
    }

    #[derive(Clone, Default, Reflect)]
    struct Document {
        tags: serde_json::Value,
    }

    let mut doc = Document::default();
    copy_same_fields(
        &Tagged {
            tags: vec!["a".to_string(), "b".to_string()],
        },
        &mut doc,
    )
    .unwrap();
    assert_eq!(doc.tags, serde_json::json!(["a", "b"]));
}
