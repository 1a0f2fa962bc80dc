//! Snapshot-sampling distortion algorithms: affine transform, sine ripple,
//! and twirl. Each reads the immutable pre-layer snapshot through bilinear
//! sampling, so warps compose across layers and tile at the edges.

use glam::DVec2;
use serde_json::Value;

use texgen_core::color::Color;
use texgen_core::math::deg_to_rad;
use texgen_core::params::{param_f64, param_pair};

use crate::EvalContext;

/// Options for the `transform` algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOptions {
    pub offset: [f64; 2],
    pub angle: f64,
    pub scale: [f64; 2],
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            offset: [0.0, 0.0],
            angle: 0.0,
            scale: [1.0, 1.0],
        }
    }
}

impl TransformOptions {
    /// Extracts options from a JSON record, falling back to defaults.
    pub fn from_json(options: &Value) -> Self {
        Self {
            offset: param_pair(options, "offset", [0.0, 0.0]),
            angle: param_f64(options, "angle", 0.0),
            scale: param_pair(options, "scale", [1.0, 1.0]),
        }
    }

    /// Samples the snapshot at the inverse-rotated/scaled/translated
    /// coordinate, pivoting around the buffer center. A zero scale divides
    /// to infinity and the wrapped sample goes where IEEE sends it.
    pub fn eval(&self, ctx: &EvalContext<'_>, x: usize, y: usize) -> Color {
        let angle = deg_to_rad(self.angle);
        let (sin, cos) = angle.sin_cos();
        let half = DVec2::new(ctx.width as f64 / 2.0, ctx.height as f64 / 2.0);
        let p = DVec2::new(x as f64, y as f64) - half;
        let s = p.x * (cos / self.scale[0]) + p.y * -(sin / self.scale[0]);
        let t = p.x * (sin / self.scale[1]) + p.y * (cos / self.scale[1]);
        ctx.snapshot
            .sample_bilinear(s + self.offset[0] + half.x, t + self.offset[1] + half.y)
    }
}

/// Options for the `sineDistort` algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineDistortOptions {
    pub sines: [f64; 2],
    pub offset: [f64; 2],
    pub amplitude: [f64; 2],
}

impl Default for SineDistortOptions {
    fn default() -> Self {
        Self {
            sines: [4.0, 4.0],
            offset: [0.0, 0.0],
            amplitude: [16.0, 16.0],
        }
    }
}

impl SineDistortOptions {
    /// Extracts options from a JSON record, falling back to defaults.
    pub fn from_json(options: &Value) -> Self {
        Self {
            sines: param_pair(options, "sines", [4.0, 4.0]),
            offset: param_pair(options, "offset", [0.0, 0.0]),
            amplitude: param_pair(options, "amplitude", [16.0, 16.0]),
        }
    }

    /// Classic ripple: each axis is displaced by a sinusoid of the other
    /// axis.
    pub fn eval(&self, ctx: &EvalContext<'_>, x: usize, y: usize) -> Color {
        let xf = x as f64;
        let yf = y as f64;
        let s = (self.sines[0] / 100.0 * yf + self.offset[0]).sin() * self.amplitude[0] + xf;
        let t = (self.sines[1] / 100.0 * xf + self.offset[1]).sin() * self.amplitude[1] + yf;
        ctx.snapshot.sample_bilinear(s, t)
    }
}

/// Options for the `twirl` algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwirlOptions {
    pub strength: f64,
    pub radius: f64,
    pub position: [f64; 2],
}

impl Default for TwirlOptions {
    fn default() -> Self {
        Self {
            strength: 200.0,
            radius: 40.0,
            position: [50.0, 50.0],
        }
    }
}

impl TwirlOptions {
    /// Extracts options from a JSON record, falling back to defaults.
    pub fn from_json(options: &Value) -> Self {
        Self {
            strength: param_f64(options, "strength", 200.0),
            radius: param_f64(options, "radius", 40.0),
            position: param_pair(options, "position", [50.0, 50.0]),
        }
    }

    /// Spirals sample positions around the center, with rotation growing
    /// as `(radius - dist)^2 / radius` toward the middle and no effect at
    /// or beyond the radius.
    ///
    /// Each output row anchors on a single center component (the s row on
    /// `position[0]`, the t row on `position[1]`), and samples carry a
    /// half-texel bias. Inherited behavior, kept verbatim.
    pub fn eval(&self, ctx: &EvalContext<'_>, x: usize, y: usize) -> Color {
        let xf = x as f64;
        let yf = y as f64;
        let center = DVec2::new(self.position[0], self.position[1]);
        let dist = DVec2::new(xf, yf).distance(center);

        if dist >= self.radius {
            return ctx.snapshot.sample_bilinear(xf, yf);
        }

        let strength = self.strength / 100.0;
        let falloff = (self.radius - dist).powi(2) / self.radius;
        let angle = 2.0 * std::f64::consts::PI * (falloff / (self.radius / strength));
        let (sin, cos) = angle.sin_cos();
        let s = (xf - center.x) * cos - (yf - center.x) * sin + center.x + 0.5;
        let t = (yf - center.y) * cos + (xf - center.y) * sin + center.y + 0.5;
        ctx.snapshot.sample_bilinear(s, t)
    }
}
