use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Logging
// =========================================================================

#[test]
#[serial]
fn given_absolute_log_dir_when_validate_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[logging]\ndir = \"/var/log\"\n");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_parent_traversal_in_log_dir_when_validate_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[logging]\ndir = \"../outside\"\n");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_log_file_with_path_separator_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("FEED_LOG_FILE", "nested/feed.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_plain_log_file_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("FEED_LOG_FILE", "feed.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
