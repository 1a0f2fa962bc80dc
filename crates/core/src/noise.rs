//! Deterministic noise primitives.
//!
//! Everything here is a pure function of its integer-ish inputs: same
//! arguments always produce the same bits, across calls and across
//! platforms (pure integer arithmetic in the hash core). The cellular and
//! fractal algorithms depend on this for reproducible, tileable output.

use std::f64::consts::TAU;

/// Deterministic avalanche hash of `(seed, x, y)` into a float.
///
/// The pre-mix folds the three inputs with wrapping 64-bit arithmetic, the
/// avalanche runs in 32-bit space, and the result is the signed 32-bit
/// state divided by `2^31 - 1`, so values land in `[-1, 1]`. A seed that
/// is congruent to 0 mod `2^31` is replaced with 1 so the mix never
/// degenerates to all zeros.
pub fn hash_rng(seed: i64, x: i64, y: i64) -> f64 {
    let seed = if (seed % 2_147_483_648).abs() == 0 {
        1
    } else {
        seed
    };
    let mixed = (seed.wrapping_mul(x.wrapping_add(1)).wrapping_mul(777))
        ^ (seed.wrapping_mul(y.wrapping_add(1)).wrapping_mul(123));
    let mut a = (mixed % 2_147_483_647) as i32;
    a = (a ^ 61) ^ (a >> 16);
    a = a.wrapping_add(a << 3);
    a ^= a >> 4;
    a = a.wrapping_mul(0x27d4_eb2d);
    a ^= a >> 15;
    f64::from(a) / 2_147_483_647.0
}

/// Result of one cellular/Voronoi query: distance to the nearest feature
/// point and that point's hash-derived value. Ephemeral, produced per query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSample {
    pub dist: f64,
    pub value: f64,
}

/// Nearest-feature-point search shared by the cellular and Voronoi
/// algorithms.
///
/// Scans a fixed 5x5 neighborhood of grid cells at `|density|` spacing.
/// Each cell's feature point is placed at a hash-derived offset within the
/// cell; when `weight_range > 0` the squared distance is additionally
/// weighted by a secondary hash, which can push the effective winner
/// outside the immediate 3x3 ring; the wider radius accounts for that.
pub fn cell_noise_base(
    x: f64,
    y: f64,
    seed: i64,
    density: f64,
    weight_range: f64,
) -> CellSample {
    let density = density.abs();
    let cell_x = (x / density).ceil() as i64;
    let cell_y = (y / density).ceil() as i64;
    let mut shortest = f64::INFINITY;
    let mut value = 0.0;

    for sx in -2..=2_i64 {
        for sy in -2..=2_i64 {
            let qx = cell_x.wrapping_add(sx);
            let qy = cell_y.wrapping_add(sy);
            let rx = hash_rng(seed, qx, qy);
            let ry = hash_rng(seed.wrapping_mul(2), qx, qy);
            let w = if weight_range > 0.0 {
                1.0 + hash_rng(seed.wrapping_mul(3), qx, qy) * weight_range
            } else {
                1.0
            };
            let px = (rx + qx as f64) * density;
            let py = (ry + qy as f64) * density;
            let dx = (px - x).abs();
            let dy = (py - y).abs();
            let dist = (dx * dx + dy * dy) * w;
            if dist < shortest {
                shortest = dist;
                value = rx;
            }
        }
    }

    CellSample {
        dist: shortest.sqrt(),
        value,
    }
}

/// Gradient noise over a `ceil`-derived lattice with linear interpolation.
///
/// Gradient directions are derived from `hash_rng(seed, ix, iy)`, so the
/// output is fully deterministic and seed-addressable.
pub fn perlin_noise_base(x: f64, y: f64, seed: i64, density: f64) -> f64 {
    let x0 = (x / density).ceil() as i64;
    let y0 = (y / density).ceil() as i64;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let sx = x - x0 as f64;
    let sy = y - y0 as f64;

    let n0 = dot_grid_gradient(x0, y0, x, y, seed);
    let n1 = dot_grid_gradient(x1, y0, x, y, seed);
    let ix0 = lerp(n0, n1, sx);

    let n0 = dot_grid_gradient(x0, y1, x, y, seed);
    let n1 = dot_grid_gradient(x1, y1, x, y, seed);
    let ix1 = lerp(n0, n1, sx);

    lerp(ix0, ix1, sy)
}

/// Dot product of the lattice gradient at `(ix, iy)` with the offset to
/// `(x, y)`. The gradient angle comes from the coordinate hash.
fn dot_grid_gradient(ix: i64, iy: i64, x: f64, y: f64, seed: i64) -> f64 {
    let theta = hash_rng(seed, ix, iy) * TAU;
    let dx = x - ix as f64;
    let dy = y - iy as f64;
    dx * theta.cos() + dy * theta.sin()
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a) * t + a
}
