use crate::{validate_image_url, validate_message};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_https_url_when_validated_then_ok_and_trimmed() {
    let result = validate_image_url("  https://cdn.example.com/a.png ");

    assert_eq!(result.unwrap(), "https://cdn.example.com/a.png");
}

#[test]
fn given_http_url_with_port_and_query_when_validated_then_ok() {
    let result = validate_image_url("http://localhost:8080/img?id=3");

    assert_that!(result, ok(anything()));
}

#[test]
fn given_unsupported_or_partial_urls_when_validated_then_error() {
    let rejected = [
        "",
        "   ",
        "ftp://example.com/a.png",
        "/relative/path.png",
        "example.com/a.png",
        "https://",
        "not a url",
    ];

    for raw in rejected {
        assert!(validate_image_url(raw).is_err(), "accepted {raw:?}");
    }
}

#[test]
fn given_no_message_when_validated_then_none() {
    let result = validate_message(None, 10);

    assert_eq!(result.unwrap(), None);
}

#[test]
fn given_blank_message_when_validated_then_none() {
    let result = validate_message(Some("   ".to_string()), 10);

    assert_eq!(result.unwrap(), None);
}

#[test]
fn given_message_at_limit_when_validated_then_kept() {
    // Multi-byte characters count once each
    let result = validate_message(Some(" héllo ".to_string()), 5);

    assert_eq!(result.unwrap(), Some("héllo".to_string()));
}

#[test]
fn given_message_over_limit_when_validated_then_error() {
    let result = validate_message(Some("abcdef".to_string()), 5);

    assert_that!(result, err(anything()));
}
