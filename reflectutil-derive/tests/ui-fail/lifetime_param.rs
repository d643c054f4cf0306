use reflectutil::Reflect;

#[derive(Clone, Reflect)]
struct View<'a> { name: &'a str }

fn main() {}
