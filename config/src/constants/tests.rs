//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.max_nesting_depth, Some(DEFAULT_MAX_NESTING_DEPTH));
    assert!(cfg.red_zone_bytes > 0);
    assert!(cfg.stack_size_bytes > cfg.red_zone_bytes);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(Some(0)).unwrap_err(),
        ConfigError::InvalidNestingDepth
    );
    assert_eq!(
        GlobalConfig::with_stack(Some(8), 0, 1024).unwrap_err(),
        ConfigError::InvalidStack {
            red_zone: 0,
            stack_size: 1024
        }
    );
    assert_eq!(
        GlobalConfig::with_stack(Some(8), 2048, 2048).unwrap_err(),
        ConfigError::InvalidStack {
            red_zone: 2048,
            stack_size: 2048
        }
    );
}

#[test]
fn unbounded_nesting_is_allowed() {
    let cfg = GlobalConfig::new(None).unwrap();
    assert!(cfg.max_nesting_depth.is_none());
    assert_eq!(cfg.stack_size_bytes, STACKER_STACK_SIZE_BYTES);
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(
        ConfigError::InvalidNestingDepth.to_string(),
        "max_nesting_depth must be at least 1"
    );
    let msg = ConfigError::InvalidStack {
        red_zone: 9,
        stack_size: 3,
    }
    .to_string();
    assert!(msg.contains("9 >= 3"));
}
