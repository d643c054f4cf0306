mod runtime {
    pub use reflectutil::*;
}

#[derive(Clone, reflectutil::Reflect)]
#[reflect(crate = "crate::runtime")]
struct Row {
    id: i64,
}

fn main() {
    let rows = vec![Row { id: 7 }];
    assert_eq!(runtime::pluck_i64(&rows, "id").unwrap(), vec![7]);
}
