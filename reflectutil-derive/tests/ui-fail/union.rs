use reflectutil::Reflect;

#[derive(Reflect)]
union Bits { a: u32, b: f32 }

fn main() {}
