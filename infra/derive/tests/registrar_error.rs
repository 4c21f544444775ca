#[test]
fn registrar_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/registrar_error_pass.rs");
    t.pass("tests/ui/registrar_error_context.rs");
}
