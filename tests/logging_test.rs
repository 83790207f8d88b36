//! Log file setup.
//!
//! Kept in its own test binary because it installs the global subscriber.

use chatshell::startup::{init_logging, ClientConfig};

#[test]
fn test_logging_writes_to_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("chatshell.log");
    let config = ClientConfig::default()
        .with_log_file(&path)
        .with_log_filter("chatshell=debug");

    let written = init_logging(&config).unwrap();
    assert_eq!(written.as_deref(), Some(path.as_path()));

    tracing::info!(target: "chatshell::test", "hello from the test");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Logging initialized"));
    assert!(contents.contains("hello from the test"));
    assert!(!contents.contains("\x1b["), "log file must not contain ANSI escapes");
}
