use typeinit::TypeInit;

#[derive(TypeInit)]
struct Dog {
    name: String,
    breed: String,
}

fn main() {
    let dog = Dog::new("Rex".to_string(), "Collie".to_string());

    assert_eq!(dog.name, "Rex");
    assert_eq!(dog.breed, "Collie");
}
