//! Error types for the texgen core.

use thiserror::Error;

/// Errors produced by engine operations.
///
/// The failure taxonomy is deliberately narrow: name lookup misses and
/// structural mismatches fail fast, while numeric edge cases (division by
/// zero, degenerate distances) are defined IEEE behavior that propagates
/// through the pixel math rather than erroring.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero, or their product overflowed, when creating a buffer.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// Two buffers had incompatible dimensions for a copy or element-wise operation.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// A layer named an algorithm that is not in the registry.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A layer named a blend mode that is not in the registry.
    #[error("unknown blend mode: {0}")]
    UnknownBlendMode(String),

    /// A layer named an interpolation method that is not recognized.
    #[error("unknown interpolation method: {0}")]
    UnknownInterpolation(String),

    /// A control-point list was too short or otherwise unusable.
    #[error("invalid control points: {0}")]
    InvalidControlPoints(String),

    /// A color value could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An I/O failure while writing output.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let err = EngineError::InvalidDimensions;
        let msg = format!("{err}");
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn dimension_mismatch_includes_all_dimensions() {
        let err = EngineError::DimensionMismatch {
            lhs_w: 10,
            lhs_h: 20,
            rhs_w: 30,
            rhs_h: 40,
        };
        let msg = format!("{err}");
        assert!(msg.contains("10"), "missing lhs_w in: {msg}");
        assert!(msg.contains("20"), "missing lhs_h in: {msg}");
        assert!(msg.contains("30"), "missing rhs_w in: {msg}");
        assert!(msg.contains("40"), "missing rhs_h in: {msg}");
    }

    #[test]
    fn unknown_algorithm_includes_name() {
        let err = EngineError::UnknownAlgorithm("plasma".into());
        let msg = format!("{err}");
        assert!(
            msg.contains("plasma"),
            "expected message containing 'plasma', got: {msg}"
        );
    }

    #[test]
    fn unknown_blend_mode_includes_name() {
        let err = EngineError::UnknownBlendMode("burn".into());
        let msg = format!("{err}");
        assert!(msg.contains("burn"), "missing mode name in: {msg}");
    }

    #[test]
    fn unknown_interpolation_includes_name() {
        let err = EngineError::UnknownInterpolation("bicubic".into());
        let msg = format!("{err}");
        assert!(msg.contains("bicubic"), "missing method name in: {msg}");
    }

    #[test]
    fn invalid_control_points_includes_message() {
        let err = EngineError::InvalidControlPoints("need at least 2 points".into());
        let msg = format!("{err}");
        assert!(msg.contains("at least 2"), "missing message in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = EngineError::InvalidColor("bad tint".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad tint"), "missing message in: {msg}");
    }

    #[test]
    fn engine_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }

    #[test]
    fn engine_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<EngineError>();
    }
}
