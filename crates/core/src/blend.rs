//! Per-channel blend modes used when compositing a layer onto the buffer.
//!
//! Every mode is a pure binary function `(dst, src) -> f64` applied to each
//! channel independently. Channel values are nominally in [0, 1] but
//! nothing enforces that; `divide` and friends may produce infinities or
//! NaN, which propagate to the output as defined numeric behavior.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// All recognized blend mode names, in registry order.
const MODE_NAMES: &[&str] = &[
    "set",
    "add",
    "subtract",
    "multiply",
    "divide",
    "and",
    "or",
    "xor",
    "screen",
    "difference",
    "darken",
    "lighten",
    "overlay",
    "exclusion",
];

/// Blend mode combining an existing channel value with a layer's output.
///
/// `And`/`Or`/`Xor` operate on the operands truncated to integers, a
/// leftover of 8-bit-era semantics kept for compatibility. `Overlay`
/// compares the source against 128 rather than 0.5, the one mode whose
/// threshold assumes unnormalized channels; it is preserved verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Set,
    Add,
    Subtract,
    Multiply,
    Divide,
    And,
    Or,
    Xor,
    Screen,
    Difference,
    Darken,
    Lighten,
    Overlay,
    Exclusion,
}

impl BlendMode {
    /// Looks up a mode by its program-facing name.
    ///
    /// Returns `EngineError::UnknownBlendMode` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name {
            "set" => Ok(BlendMode::Set),
            "add" => Ok(BlendMode::Add),
            "subtract" => Ok(BlendMode::Subtract),
            "multiply" => Ok(BlendMode::Multiply),
            "divide" => Ok(BlendMode::Divide),
            "and" => Ok(BlendMode::And),
            "or" => Ok(BlendMode::Or),
            "xor" => Ok(BlendMode::Xor),
            "screen" => Ok(BlendMode::Screen),
            "difference" => Ok(BlendMode::Difference),
            "darken" => Ok(BlendMode::Darken),
            "lighten" => Ok(BlendMode::Lighten),
            "overlay" => Ok(BlendMode::Overlay),
            "exclusion" => Ok(BlendMode::Exclusion),
            _ => Err(EngineError::UnknownBlendMode(name.to_string())),
        }
    }

    /// Returns a slice of all recognized mode names.
    pub fn list_names() -> &'static [&'static str] {
        MODE_NAMES
    }

    /// Combines one destination channel with one source channel.
    pub fn apply(self, dst: f64, src: f64) -> f64 {
        match self {
            BlendMode::Set => src,
            BlendMode::Add => dst + src,
            BlendMode::Subtract => dst - src,
            BlendMode::Multiply => dst * src,
            BlendMode::Divide => dst / src,
            BlendMode::And => ((dst as i64) & (src as i64)) as f64,
            BlendMode::Or => ((dst as i64) | (src as i64)) as f64,
            BlendMode::Xor => ((dst as i64) ^ (src as i64)) as f64,
            BlendMode::Screen => 1.0 - (1.0 - dst) * (1.0 - src),
            BlendMode::Difference => (dst - src).abs(),
            BlendMode::Darken => dst.min(src),
            BlendMode::Lighten => dst.max(src),
            BlendMode::Overlay => {
                if src < 128.0 {
                    2.0 * dst * src
                } else {
                    1.0 - 2.0 * (1.0 - dst) * (1.0 - src)
                }
            }
            BlendMode::Exclusion => dst + src - 2.0 * dst * src,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_set() {
        assert_eq!(BlendMode::default(), BlendMode::Set);
    }

    #[test]
    fn from_name_resolves_every_listed_name() {
        for name in BlendMode::list_names() {
            assert!(
                BlendMode::from_name(name).is_ok(),
                "listed mode '{name}' failed to resolve"
            );
        }
    }

    #[test]
    fn from_name_rejects_unknown_mode() {
        assert!(matches!(
            BlendMode::from_name("burn"),
            Err(EngineError::UnknownBlendMode(_))
        ));
    }

    #[test]
    fn serde_names_match_registry_names() {
        for name in BlendMode::list_names() {
            let mode: BlendMode = serde_json::from_str(&format!("\"{name}\"")).unwrap();
            assert_eq!(mode, BlendMode::from_name(name).unwrap());
            assert_eq!(serde_json::to_string(&mode).unwrap(), format!("\"{name}\""));
        }
    }

    // -- Identity properties --

    #[test]
    fn set_returns_source() {
        assert_eq!(BlendMode::Set.apply(0.3, 0.8), 0.8);
    }

    #[test]
    fn add_zero_destination_returns_source() {
        assert_eq!(BlendMode::Add.apply(0.0, 0.7), 0.7);
    }

    #[test]
    fn multiply_by_one_is_identity() {
        assert_eq!(BlendMode::Multiply.apply(0.4, 1.0), 0.4);
    }

    #[test]
    fn multiply_by_zero_is_zero() {
        assert_eq!(BlendMode::Multiply.apply(0.4, 0.0), 0.0);
    }

    #[test]
    fn darken_and_lighten_are_idempotent_on_equal_inputs() {
        assert_eq!(BlendMode::Darken.apply(0.5, 0.5), 0.5);
        assert_eq!(BlendMode::Lighten.apply(0.5, 0.5), 0.5);
    }

    // -- Formula spot checks --

    #[test]
    fn subtract_and_difference() {
        assert!((BlendMode::Subtract.apply(0.3, 0.5) + 0.2).abs() < 1e-12);
        assert!((BlendMode::Difference.apply(0.3, 0.5) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn screen_of_half_and_half() {
        assert!((BlendMode::Screen.apply(0.5, 0.5) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn exclusion_of_half_and_half() {
        // 0.5 + 0.5 - 2*0.25 = 0.5
        assert!((BlendMode::Exclusion.apply(0.5, 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn divide_by_zero_propagates_infinity() {
        assert!(BlendMode::Divide.apply(1.0, 0.0).is_infinite());
        assert!(BlendMode::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn bitwise_modes_truncate_unit_range_operands_to_zero() {
        // Channels in [0, 1) truncate to integer 0, so these modes zero out
        // ordinary float content. Inherited semantics, kept verbatim.
        assert_eq!(BlendMode::And.apply(0.9, 0.9), 0.0);
        assert_eq!(BlendMode::Or.apply(0.9, 0.9), 0.0);
        assert_eq!(BlendMode::Xor.apply(0.9, 0.9), 0.0);
    }

    #[test]
    fn bitwise_modes_combine_integral_operands() {
        assert_eq!(BlendMode::And.apply(6.0, 3.0), 2.0);
        assert_eq!(BlendMode::Or.apply(6.0, 3.0), 7.0);
        assert_eq!(BlendMode::Xor.apply(6.0, 3.0), 5.0);
    }

    #[test]
    fn overlay_threshold_is_128_not_half() {
        // src below 128 takes the multiply branch even for values far
        // above a normalized 0.5.
        assert_eq!(BlendMode::Overlay.apply(0.5, 1.0), 1.0);
        // src at or above 128 takes the screen-like branch.
        let v = BlendMode::Overlay.apply(0.5, 128.0);
        assert!((v - (1.0 - 2.0 * 0.5 * -127.0)).abs() < 1e-9);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn set_always_returns_source(dst in -10.0_f64..10.0, src in -10.0_f64..10.0) {
                prop_assert_eq!(BlendMode::Set.apply(dst, src), src);
            }

            #[test]
            fn darken_never_exceeds_either_operand(
                dst in -10.0_f64..10.0,
                src in -10.0_f64..10.0,
            ) {
                let out = BlendMode::Darken.apply(dst, src);
                prop_assert!(out <= dst && out <= src);
            }

            #[test]
            fn difference_is_symmetric(dst in -10.0_f64..10.0, src in -10.0_f64..10.0) {
                prop_assert_eq!(
                    BlendMode::Difference.apply(dst, src),
                    BlendMode::Difference.apply(src, dst)
                );
            }
        }
    }
}
