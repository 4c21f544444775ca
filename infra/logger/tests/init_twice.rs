use registrar_logger::{Logger, LoggerError, parse_level};
use tempfile::tempdir;

const SHELL_LOGGER: &str = "registrar-shell";

#[test]
fn shell_logger_cannot_be_installed_twice() {
    let _logger = Logger::builder()
        .name(SHELL_LOGGER)
        .level(parse_level("warn").expect("default shell level"))
        .ansi(false)
        .init()
        .expect("first install should succeed");

    let dir = tempdir().expect("temp dir");
    let logs = dir.path().join("logs");
    let err = Logger::builder()
        .name(SHELL_LOGGER)
        .level(parse_level("debug").expect("valid level"))
        .path(&logs)
        .json()
        .init()
        .expect_err("a second global subscriber must be rejected");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("Tracing subscriber error"));
}
