#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/named_struct.rs");
    t.pass("tests/ui/unit_struct.rs");
}
