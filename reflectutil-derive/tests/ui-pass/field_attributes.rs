use reflectutil::{Reflect, fields_of};

#[derive(Clone, Default, Reflect)]
struct Base {
    id: u64,
}

#[derive(Clone, Reflect)]
#[reflect(rename_all = "PascalCase")]
struct Order {
    #[reflect(embed)]
    base: Base,
    #[reflect(flatten)]
    extra: Option<Box<Base>>,
    #[reflect(rename = "Sum", readonly)]
    total: f64,
    #[reflect(skip)]
    scratch: Vec<u8>,
    r#type: String,
}

fn main() {
    let names: Vec<&str> = fields_of::<Order>()
        .unwrap()
        .iter()
        .map(|field| field.name)
        .collect();
    assert_eq!(names, vec!["id", "id", "Sum", "Type"]);

    let order = <Order as Reflect>::blank();
    assert!(order.scratch.is_empty());
    assert!(order.extra.is_none());
}
