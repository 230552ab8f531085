//! Per-section validators.

use crate::schema::{MidwayConfig, WINDOW_LIMIT_MAX, WINDOW_LIMIT_MIN};

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_general(errors: &mut Vec<String>, config: &MidwayConfig) {
    validate_range(
        errors,
        "general.window_limit",
        config.general.window_limit,
        WINDOW_LIMIT_MIN,
        WINDOW_LIMIT_MAX,
    );
}

pub(crate) fn validate_display(errors: &mut Vec<String>, config: &MidwayConfig) {
    validate_range(errors, "display.width", config.display.width, 64, 16384);
    validate_range(errors, "display.height", config.display.height, 64, 16384);
    validate_range(
        errors,
        "display.top_toolbar_height",
        config.display.top_toolbar_height,
        0,
        200,
    );
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &MidwayConfig) {
    validate_non_empty(errors, "logging.level", &config.logging.level);
}
