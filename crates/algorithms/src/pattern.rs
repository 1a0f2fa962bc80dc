//! Geometric and coordinate-pattern algorithms: constant tint, sinusoids,
//! bitwise grids, checkerboard, rectangle, and circle.

use glam::DVec2;
use serde_json::Value;

use texgen_core::color::Color;
use texgen_core::math::smooth_step;
use texgen_core::params::{param_f64, param_pair};

use crate::EvalContext;

const DEFAULT_SIN_OFFSET: f64 = 0.0;
const DEFAULT_SIN_FREQUENCY: f64 = 0.01;
const DEFAULT_TILE_SIZE: [f64; 2] = [32.0, 32.0];
const DEFAULT_CIRCLE_RADIUS: f64 = 40.0;
const DEFAULT_CIRCLE_DELTA: f64 = 1.0;

/// Options for the `sinX`/`sinY` gradient algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinOptions {
    pub offset: f64,
    pub frequency: f64,
}

impl Default for SinOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_SIN_OFFSET,
            frequency: DEFAULT_SIN_FREQUENCY,
        }
    }
}

impl SinOptions {
    /// Extracts options from a JSON record, falling back to defaults.
    pub fn from_json(options: &Value) -> Self {
        Self {
            offset: param_f64(options, "offset", DEFAULT_SIN_OFFSET),
            frequency: param_f64(options, "frequency", DEFAULT_SIN_FREQUENCY),
        }
    }

    /// `sin((coord + offset) * frequency * pi)` as a gray value.
    pub fn eval(&self, coord: usize) -> Color {
        let v = ((coord as f64 + self.offset) * self.frequency * std::f64::consts::PI).sin();
        Color::splat(v)
    }
}

/// `(x | y) / width` on the integer pixel coordinates.
pub fn bitwise_or(ctx: &EvalContext<'_>, x: usize, y: usize) -> Color {
    Color::splat(((x | y) as f64) / ctx.width as f64)
}

/// `(x ^ y) / width` on the integer pixel coordinates.
pub fn bitwise_xor(ctx: &EvalContext<'_>, x: usize, y: usize) -> Color {
    Color::splat(((x ^ y) as f64) / ctx.width as f64)
}

/// Options for the `checkerBoard` algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckerBoardOptions {
    pub size: [f64; 2],
    pub offset: [f64; 2],
    pub row_shift: f64,
}

impl Default for CheckerBoardOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_TILE_SIZE,
            offset: [0.0, 0.0],
            row_shift: 0.0,
        }
    }
}

impl CheckerBoardOptions {
    /// Extracts options from a JSON record, falling back to defaults.
    pub fn from_json(options: &Value) -> Self {
        Self {
            size: param_pair(options, "size", DEFAULT_TILE_SIZE),
            offset: param_pair(options, "offset", [0.0, 0.0]),
            row_shift: param_f64(options, "rowShift", 0.0),
        }
    }

    /// Alternating 0/1 tiles, with each row of tiles optionally shifted
    /// horizontally by `row_shift` pixels. Tile parity comes from the
    /// truncated tile coordinates.
    pub fn eval(&self, x: usize, y: usize) -> Color {
        let xf = x as f64;
        let yf = y as f64;
        let row = (yf + self.offset[1]) / self.size[1];
        let tile_row = (yf / self.size[1]) as i64;
        let col = (xf + self.offset[0] + tile_row as f64 * self.row_shift) / self.size[0];
        let checker = ((row as i64) & 1) ^ ((col as i64) & 1);
        Color::splat(if checker != 0 { 0.0 } else { 1.0 })
    }
}

/// Options for the `rectangle` algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleOptions {
    pub position: [f64; 2],
    pub size: [f64; 2],
}

impl Default for RectangleOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            size: DEFAULT_TILE_SIZE,
        }
    }
}

impl RectangleOptions {
    /// Extracts options from a JSON record, falling back to defaults.
    pub fn from_json(options: &Value) -> Self {
        Self {
            position: param_pair(options, "position", [0.0, 0.0]),
            size: param_pair(options, "size", DEFAULT_TILE_SIZE),
        }
    }

    /// 1 inside the axis-aligned box, bounds inclusive on all four edges.
    pub fn eval(&self, x: usize, y: usize) -> Color {
        let xf = x as f64;
        let yf = y as f64;
        let inside = xf >= self.position[0]
            && xf <= self.position[0] + self.size[0]
            && yf >= self.position[1]
            && yf <= self.position[1] + self.size[1];
        Color::splat(if inside { 1.0 } else { 0.0 })
    }
}

/// Options for the `circle` algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOptions {
    pub position: [f64; 2],
    pub radius: f64,
    pub delta: f64,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            radius: DEFAULT_CIRCLE_RADIUS,
            delta: DEFAULT_CIRCLE_DELTA,
        }
    }
}

impl CircleOptions {
    /// Extracts options from a JSON record, falling back to defaults.
    pub fn from_json(options: &Value) -> Self {
        Self {
            position: param_pair(options, "position", [0.0, 0.0]),
            radius: param_f64(options, "radius", DEFAULT_CIRCLE_RADIUS),
            delta: param_f64(options, "delta", DEFAULT_CIRCLE_DELTA),
        }
    }

    /// Smooth-stepped disk: 1 inside `radius - delta`, falling to 0 at
    /// `radius`. A zero `delta` gives a hard-edged disk.
    pub fn eval(&self, x: usize, y: usize) -> Color {
        let p = DVec2::new(x as f64, y as f64);
        let center = DVec2::new(self.position[0], self.position[1]);
        let dist = p.distance(center);
        Color::splat(1.0 - smooth_step(self.radius - self.delta, self.radius, dist))
    }
}
