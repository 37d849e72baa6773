use crate::logger;

use feed_config::LogLevel;

use log::LevelFilter;
use tempfile::TempDir;

// The global logger can be installed once per process; this is the only test that does.
#[test]
fn given_log_file_when_initialized_then_records_written_to_file() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("feed.log");

    // When
    let result = logger::initialize(LogLevel(LevelFilter::Info), Some(path.clone()), true);
    log::warn!("image feed logger check");
    log::debug!("below the configured level");
    log::logger().flush();

    // Then
    assert!(result.is_ok());
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Logger initialized: level=Info"));
    assert!(contents.contains("- WARN] image feed logger check"));
    assert!(!contents.contains("below the configured level"));
    assert!(!contents.contains("\u{1b}["));
}
