use reflectutil::Reflect;

#[derive(Clone, Reflect)]
struct Order { #[reflect(skip, embed)] lines: Vec<u8> }

fn main() {}
