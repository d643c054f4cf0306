use reflectutil::Reflect;

#[derive(Reflect)]
enum Status { Draft, Published }

fn main() {}
