use reflectutil::{Reflect, Scan, ScanError, pluck};

#[derive(Clone, Reflect)]
struct Wrapper<T> {
    inner: T,
    label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
#[reflect(opaque)]
enum Status {
    #[default]
    Draft,
    Published,
}

#[derive(Clone, Default, Reflect)]
#[reflect(scan)]
struct Tag {
    text: String,
}

impl Scan for Tag {
    fn scan(&mut self, src: &dyn Reflect) -> Result<(), ScanError> {
        self.text = src.type_name().to_string();
        Ok(())
    }
}

#[derive(Clone, Reflect)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

fn main() {
    let items = vec![Wrapper {
        inner: Status::Published,
        label: "a".to_string(),
    }];
    let statuses: Vec<Status> = pluck(&items, "inner").unwrap();
    assert_eq!(statuses, vec![Status::Published]);
    assert!(Status::Draft.is_blank());

    let mut tag = Tag::default();
    assert!(tag.as_scan_mut().is_some());

    let list = Node {
        value: 1,
        next: Some(Box::new(Node { value: 2, next: None })),
    };
    assert!(!list.is_blank());
}
