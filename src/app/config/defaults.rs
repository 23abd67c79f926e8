// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration settings.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;

/// Narrowest window that still fits the three tabs side by side.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Shortest window that still shows the card and the footer.
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};

/// Clamps a configured dimension to `min`. Non-finite values use `fallback`.
#[must_use]
pub fn clamp_dimension(value: f32, min: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.max(min)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_clamp_to_minimum() {
        assert_eq!(
            clamp_dimension(100.0, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_WIDTH),
            MIN_WINDOW_WIDTH
        );
    }

    #[test]
    fn large_values_are_kept() {
        assert_eq!(
            clamp_dimension(1600.0, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_WIDTH),
            1600.0
        );
    }

    #[test]
    fn non_finite_values_use_fallback() {
        assert_eq!(
            clamp_dimension(f32::NAN, MIN_WINDOW_HEIGHT, WINDOW_DEFAULT_HEIGHT),
            WINDOW_DEFAULT_HEIGHT
        );
        assert_eq!(
            clamp_dimension(f32::INFINITY, MIN_WINDOW_HEIGHT, WINDOW_DEFAULT_HEIGHT),
            WINDOW_DEFAULT_HEIGHT
        );
    }
}
