//! Three-channel float color used throughout the compositing pipeline.
//!
//! Channels are unconstrained `f64` values: blend math may push them outside
//! [0, 1] transiently, and the range is only resolved at 8-bit output time.
//! All operations are pure and value-returning; no shared mutable scratch
//! color exists anywhere in the pipeline, so per-pixel evaluation can be
//! parallelized without aliasing hazards.

use serde::{Deserialize, Serialize};

/// An RGB color with unconstrained `f64` channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// All channels zero.
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// All channels one.
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Creates a color from explicit channel values.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray color with all three channels set to `v`.
    pub fn splat(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Component-wise addition.
    pub fn add(self, other: Color) -> Color {
        Color {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }

    /// Component-wise multiplication (used for layer tinting).
    pub fn multiply(self, other: Color) -> Color {
        Color {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }

    /// Multiplies all channels by a scalar.
    pub fn scale(self, factor: f64) -> Color {
        Color {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }
}

impl From<f64> for Color {
    fn from(v: f64) -> Self {
        Color::splat(v)
    }
}

impl From<[f64; 3]> for Color {
    fn from(rgb: [f64; 3]) -> Self {
        Color {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splat_sets_all_channels() {
        let c = Color::splat(0.4);
        assert_eq!(c.r, 0.4);
        assert_eq!(c.g, 0.4);
        assert_eq!(c.b, 0.4);
    }

    #[test]
    fn add_is_component_wise() {
        let c = Color::new(0.1, 0.2, 0.3).add(Color::new(0.4, 0.5, 0.6));
        assert!((c.r - 0.5).abs() < f64::EPSILON);
        assert!((c.g - 0.7).abs() < f64::EPSILON);
        assert!((c.b - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn multiply_by_white_is_identity() {
        let c = Color::new(0.3, 0.6, 0.9);
        assert_eq!(c.multiply(Color::WHITE), c);
    }

    #[test]
    fn multiply_by_black_is_black() {
        let c = Color::new(0.3, 0.6, 0.9);
        assert_eq!(c.multiply(Color::BLACK), Color::BLACK);
    }

    #[test]
    fn operations_do_not_mutate_operands() {
        let a = Color::new(1.0, 2.0, 3.0);
        let b = Color::splat(2.0);
        let _ = a.multiply(b);
        let _ = a.add(b);
        assert_eq!(a, Color::new(1.0, 2.0, 3.0));
        assert_eq!(b, Color::splat(2.0));
    }

    #[test]
    fn channels_may_exceed_unit_range() {
        let c = Color::splat(2.0).scale(3.0);
        assert_eq!(c.r, 6.0);
    }

    #[test]
    fn from_scalar_splats() {
        let c: Color = 0.25.into();
        assert_eq!(c, Color::splat(0.25));
    }

    #[test]
    fn from_array_maps_channels_in_order() {
        let c: Color = [0.1, 0.2, 0.3].into();
        assert_eq!(c, Color::new(0.1, 0.2, 0.3));
    }
}
