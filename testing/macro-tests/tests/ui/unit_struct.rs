use typeinit::TypeInit;

#[derive(TypeInit)]
struct Empty;

fn main() {
    let _empty = Empty::new();
}
