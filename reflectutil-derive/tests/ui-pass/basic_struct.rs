use reflectutil::{Reflect, copy_same_fields, fields_of};

#[derive(Clone, Reflect)]
struct Source {
    name: String,
    age: i32,
}

#[derive(Clone, Default, Reflect)]
struct Target {
    name: String,
    age: i64,
}

fn main() {
    let src = Source {
        name: "ada".to_string(),
        age: 36,
    };
    let mut dest = Target::default();
    copy_same_fields(&src, &mut dest).unwrap();
    assert_eq!(dest.age, 36);
    assert_eq!(fields_of::<Source>().unwrap().len(), 2);
}
