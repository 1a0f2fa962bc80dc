//! Noise-family algorithms: raw hash noise, fractal lattice noise, the
//! cellular/Voronoi distance and value fields, gradient noise, and their
//! octave-sum fractal variants.

use serde_json::Value;

use texgen_core::color::Color;
use texgen_core::error::EngineError;
use texgen_core::interp::{ColorInterpolator, ControlPoint, EdgePolicy, Interpolation};
use texgen_core::noise::{cell_noise_base, hash_rng, perlin_noise_base};
use texgen_core::params::{param_f64, param_i64, param_string, param_usize};

const DEFAULT_SEED: i64 = 0;
const DEFAULT_DENSITY: f64 = 32.0;
const DEFAULT_OCTAVES: usize = 4;

/// Options for the raw `noise` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoiseOptions {
    pub seed: i64,
}

impl NoiseOptions {
    /// Extracts options from a JSON record, falling back to defaults.
    pub fn from_json(options: &Value) -> Self {
        Self {
            seed: param_i64(options, "seed", DEFAULT_SEED),
        }
    }

    /// The raw hash value at the pixel coordinate.
    pub fn eval(&self, x: usize, y: usize) -> Color {
        Color::splat(hash_rng(self.seed, x as i64, y as i64))
    }
}

/// Options for the `fractalNoise` algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalNoiseOptions {
    pub interpolation: Interpolation,
    pub seed: i64,
    pub base_frequency: f64,
    pub amplitude: f64,
    pub persistence: f64,
    pub octaves: usize,
    pub step: f64,
}

impl Default for FractalNoiseOptions {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::Step,
            seed: DEFAULT_SEED,
            base_frequency: 0.03125,
            amplitude: 0.4,
            persistence: 0.72,
            octaves: DEFAULT_OCTAVES,
            step: 4.0,
        }
    }
}

impl FractalNoiseOptions {
    /// Extracts options from a JSON record, falling back to defaults.
    ///
    /// Fails only if `interpolation` names an unknown method.
    pub fn from_json(options: &Value) -> Result<Self, EngineError> {
        Ok(Self {
            interpolation: Interpolation::from_name(&param_string(
                options,
                "interpolation",
                "step",
            ))?,
            seed: param_i64(options, "seed", DEFAULT_SEED),
            base_frequency: param_f64(options, "baseFrequency", 0.03125),
            amplitude: param_f64(options, "amplitude", 0.4),
            persistence: param_f64(options, "persistence", 0.72),
            octaves: param_usize(options, "octaves", DEFAULT_OCTAVES),
            step: param_f64(options, "step", 4.0),
        })
    }

    /// Octave sum over the hash lattice. `step` interpolation reads the
    /// containing lattice cell; `linear`/`spline` blend the four
    /// surrounding lattice hashes as two 1D interpolations composed.
    pub fn eval(&self, x: usize, y: usize) -> Color {
        let xf = x as f64;
        let yf = y as f64;
        let mut v = 0.0;
        let mut frequency = 1.0 / self.base_frequency;
        let mut amplitude = self.amplitude;

        for i in 1..=self.octaves {
            let seed = self.seed.wrapping_mul(i as i64);
            let cx = (xf * frequency).floor();
            let cy = (yf * frequency).floor();
            let xi = cx as i64;
            let yi = cy as i64;
            if self.interpolation == Interpolation::Step {
                v += hash_rng(seed, xi, yi) * amplitude;
            } else {
                let dx = xf * frequency - cx;
                let dy = yf * frequency - cy;
                let v1 = hash_rng(seed, xi, yi);
                let v2 = hash_rng(seed, xi.wrapping_add(1), yi);
                let v3 = hash_rng(seed, xi, yi.wrapping_add(1));
                let v4 = hash_rng(seed, xi.wrapping_add(1), yi.wrapping_add(1));
                let i1 = lattice_blend(self.interpolation, v1, v2, dx);
                let i2 = lattice_blend(self.interpolation, v3, v4, dx);
                v += lattice_blend(self.interpolation, i1, i2, dy) * amplitude;
            }
            frequency *= self.step;
            amplitude *= self.persistence;
        }

        Color::splat(v)
    }
}

/// One 1D blend across a unit lattice segment, using the interpolator so
/// the method selection matches gradient sampling everywhere else.
fn lattice_blend(method: Interpolation, a: f64, b: f64, t: f64) -> f64 {
    let interp = ColorInterpolator::new(
        method,
        EdgePolicy::Clamp,
        vec![ControlPoint::new(0.0, &[a]), ControlPoint::new(1.0, &[b])],
    )
    .expect("a two-point unit segment is always a valid point set");
    interp.color_at(t)[0]
}

/// Options shared by `cellularNoise` and `voronoiNoise`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellularNoiseOptions {
    pub seed: i64,
    pub density: f64,
    pub weight_range: f64,
}

impl Default for CellularNoiseOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            density: DEFAULT_DENSITY,
            weight_range: 0.0,
        }
    }
}

impl CellularNoiseOptions {
    /// Extracts options from a JSON record, falling back to defaults.
    pub fn from_json(options: &Value) -> Self {
        Self {
            seed: param_i64(options, "seed", DEFAULT_SEED),
            density: param_f64(options, "density", DEFAULT_DENSITY),
            weight_range: param_f64(options, "weightRange", 0.0),
        }
    }

    /// F1 distance field: 1 minus the normalized nearest-point distance.
    /// A negative density flips the field into [-1, 0].
    pub fn eval_cellular(&self, x: usize, y: usize) -> Color {
        let sample = cell_noise_base(
            x as f64,
            y as f64,
            self.seed,
            self.density,
            self.weight_range.max(0.0),
        );
        let mut v = 1.0 - sample.dist / self.density;
        if self.density < 0.0 {
            v -= 1.0;
        }
        Color::splat(v)
    }

    /// The winning cell's hash value rather than its distance.
    pub fn eval_voronoi(&self, x: usize, y: usize) -> Color {
        let sample = cell_noise_base(
            x as f64,
            y as f64,
            self.seed,
            self.density,
            self.weight_range.max(0.0),
        );
        Color::splat(sample.value)
    }
}

/// Options for the `perlinNoise` algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerlinNoiseOptions {
    pub seed: i64,
    pub density: f64,
}

impl Default for PerlinNoiseOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            density: DEFAULT_DENSITY,
        }
    }
}

impl PerlinNoiseOptions {
    /// Extracts options from a JSON record, falling back to defaults.
    pub fn from_json(options: &Value) -> Self {
        Self {
            seed: param_i64(options, "seed", DEFAULT_SEED),
            density: param_f64(options, "density", DEFAULT_DENSITY),
        }
    }

    pub fn eval(&self, x: usize, y: usize) -> Color {
        Color::splat(perlin_noise_base(x as f64, y as f64, self.seed, self.density))
    }
}

/// Options shared by the `cellularFractal` and `voronoiFractal` octave sums.
/// The two differ only in their default amplitude/persistence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFractalOptions {
    pub seed: i64,
    pub weight_range: f64,
    pub base_density: f64,
    pub amplitude: f64,
    pub persistence: f64,
    pub octaves: usize,
    pub step: f64,
}

impl CellFractalOptions {
    /// Extracts `cellularFractal` options (amplitude 0.7, persistence 0.45).
    pub fn cellular_from_json(options: &Value) -> Self {
        Self::from_json_with(options, 0.7, 0.45)
    }

    /// Extracts `voronoiFractal` options (amplitude 0.6, persistence 0.6).
    pub fn voronoi_from_json(options: &Value) -> Self {
        Self::from_json_with(options, 0.6, 0.6)
    }

    fn from_json_with(options: &Value, amplitude: f64, persistence: f64) -> Self {
        Self {
            seed: param_i64(options, "seed", DEFAULT_SEED),
            weight_range: param_f64(options, "weightRange", 0.0),
            base_density: param_f64(options, "baseDensity", 64.0),
            amplitude: param_f64(options, "amplitude", amplitude),
            persistence: param_f64(options, "persistence", persistence),
            octaves: param_usize(options, "octaves", DEFAULT_OCTAVES),
            step: param_f64(options, "step", 2.0),
        }
    }

    /// Octave sum of the cellular distance field, density dividing by
    /// `step` each octave.
    pub fn eval_cellular(&self, x: usize, y: usize) -> Color {
        let xf = x as f64;
        let yf = y as f64;
        let mut v = 0.0;
        let mut density = self.base_density;
        let mut amplitude = self.amplitude;
        for i in 1..=self.octaves {
            let sample = cell_noise_base(
                xf,
                yf,
                self.seed.wrapping_mul(i as i64),
                density,
                self.weight_range.max(0.0),
            );
            let mut d = 1.0 - sample.dist / density;
            if density < 0.0 {
                d -= 1.0;
            }
            v += d * amplitude;
            density /= self.step;
            amplitude *= self.persistence;
        }
        Color::splat(v)
    }

    /// Octave sum of the Voronoi value field.
    pub fn eval_voronoi(&self, x: usize, y: usize) -> Color {
        let xf = x as f64;
        let yf = y as f64;
        let mut v = 0.0;
        let mut density = self.base_density;
        let mut amplitude = self.amplitude;
        for i in 1..=self.octaves {
            let sample = cell_noise_base(
                xf,
                yf,
                self.seed.wrapping_mul(i as i64),
                density,
                self.weight_range.max(0.0),
            );
            v += sample.value * amplitude;
            density /= self.step;
            amplitude *= self.persistence;
        }
        Color::splat(v)
    }
}
