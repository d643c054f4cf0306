use reflectutil::Reflect;

#[derive(Clone, Reflect)]
#[reflect(transparent)]
struct Wrapper { value: i64 }

fn main() {}
