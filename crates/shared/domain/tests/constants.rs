use registrar_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR};

#[test]
fn env_constants_are_stable() {
    assert_eq!(ENV_PREFIX, "REGISTRAR");
    assert_eq!(ENV_SEPARATOR, "__");
    assert_eq!(DEFAULT_CONFIG_FILE, "registrar");
}
