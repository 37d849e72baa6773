use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Feed
// =========================================================================

#[test]
#[serial]
fn given_zero_max_images_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _max = EnvGuard::set("FEED_MAX_IMAGES", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_message_length_over_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _max = EnvGuard::set("FEED_MAX_MESSAGE_LENGTH", "4001");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_boundary_values_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _images = EnvGuard::set("FEED_MAX_IMAGES", "100000");
    let _length = EnvGuard::set("FEED_MAX_MESSAGE_LENGTH", "1");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
