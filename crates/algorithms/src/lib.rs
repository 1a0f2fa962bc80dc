#![deny(unsafe_code)]
//! Algorithm registry: maps algorithm names to per-pixel color functions.
//!
//! A layer's open-ended JSON options are parsed **once** into a typed
//! options struct when the program is loaded; the pixel hot loop then
//! dispatches through [`AlgorithmKind`] without any string lookups or JSON
//! reads. Warp algorithms read the immutable pre-layer snapshot through
//! the [`EvalContext`].

pub mod noise;
pub mod pattern;
pub mod warp;

use serde_json::Value;

use texgen_core::buffer::PixelBuffer;
use texgen_core::color::Color;
use texgen_core::error::EngineError;

use noise::{
    CellFractalOptions, CellularNoiseOptions, FractalNoiseOptions, NoiseOptions,
    PerlinNoiseOptions,
};
use pattern::{CheckerBoardOptions, CircleOptions, RectangleOptions, SinOptions};
use warp::{SineDistortOptions, TransformOptions, TwirlOptions};

/// All recognized algorithm names, in registry order.
const ALGORITHM_NAMES: &[&str] = &[
    "tint",
    "sinX",
    "sinY",
    "or",
    "xor",
    "checkerBoard",
    "rectangle",
    "circle",
    "noise",
    "fractalNoise",
    "cellularNoise",
    "voronoiNoise",
    "perlinNoise",
    "cellularFractal",
    "voronoiFractal",
    "perlinFractal",
    "transform",
    "sineDistort",
    "twirl",
];

/// Read-only evaluation context handed to every algorithm.
///
/// The snapshot is the buffer state from before the current layer started;
/// holding it by shared reference guarantees it cannot change during the
/// pixel loop. Width and height are the render target dimensions, used for
/// coordinate normalization.
#[derive(Debug)]
pub struct EvalContext<'a> {
    pub snapshot: &'a PixelBuffer,
    pub width: usize,
    pub height: usize,
}

impl<'a> EvalContext<'a> {
    /// Builds a context over a snapshot buffer, taking the dimensions from it.
    pub fn new(snapshot: &'a PixelBuffer) -> Self {
        Self {
            snapshot,
            width: snapshot.width(),
            height: snapshot.height(),
        }
    }
}

/// One algorithm resolved from a layer record, options already parsed.
///
/// Use [`AlgorithmKind::from_layer`] for string-based construction.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmKind {
    /// Constant white; meaningful combined with a tint and blend mode.
    Tint,
    SinX(SinOptions),
    SinY(SinOptions),
    /// `(x | y) / width` on the pixel coordinates.
    BitOr,
    /// `(x ^ y) / width` on the pixel coordinates.
    BitXor,
    CheckerBoard(CheckerBoardOptions),
    Rectangle(RectangleOptions),
    Circle(CircleOptions),
    Noise(NoiseOptions),
    FractalNoise(FractalNoiseOptions),
    CellularNoise(CellularNoiseOptions),
    VoronoiNoise(CellularNoiseOptions),
    PerlinNoise(PerlinNoiseOptions),
    CellularFractal(CellFractalOptions),
    VoronoiFractal(CellFractalOptions),
    /// Reserved name for fractal gradient noise; evaluates to black until
    /// an octave-sum variant exists.
    PerlinFractal,
    Transform(TransformOptions),
    SineDistort(SineDistortOptions),
    Twirl(TwirlOptions),
}

impl AlgorithmKind {
    /// Resolves an algorithm by name, parsing its options from the layer
    /// record.
    ///
    /// Returns `EngineError::UnknownAlgorithm` if the name is not
    /// recognized, or an option-parse error (currently only an unknown
    /// interpolation method) from the options struct.
    pub fn from_layer(name: &str, options: &Value) -> Result<Self, EngineError> {
        match name {
            "tint" => Ok(AlgorithmKind::Tint),
            "sinX" => Ok(AlgorithmKind::SinX(SinOptions::from_json(options))),
            "sinY" => Ok(AlgorithmKind::SinY(SinOptions::from_json(options))),
            "or" => Ok(AlgorithmKind::BitOr),
            "xor" => Ok(AlgorithmKind::BitXor),
            "checkerBoard" => Ok(AlgorithmKind::CheckerBoard(CheckerBoardOptions::from_json(
                options,
            ))),
            "rectangle" => Ok(AlgorithmKind::Rectangle(RectangleOptions::from_json(
                options,
            ))),
            "circle" => Ok(AlgorithmKind::Circle(CircleOptions::from_json(options))),
            "noise" => Ok(AlgorithmKind::Noise(NoiseOptions::from_json(options))),
            "fractalNoise" => Ok(AlgorithmKind::FractalNoise(FractalNoiseOptions::from_json(
                options,
            )?)),
            "cellularNoise" => Ok(AlgorithmKind::CellularNoise(
                CellularNoiseOptions::from_json(options),
            )),
            "voronoiNoise" => Ok(AlgorithmKind::VoronoiNoise(CellularNoiseOptions::from_json(
                options,
            ))),
            "perlinNoise" => Ok(AlgorithmKind::PerlinNoise(PerlinNoiseOptions::from_json(
                options,
            ))),
            "cellularFractal" => Ok(AlgorithmKind::CellularFractal(
                CellFractalOptions::cellular_from_json(options),
            )),
            "voronoiFractal" => Ok(AlgorithmKind::VoronoiFractal(
                CellFractalOptions::voronoi_from_json(options),
            )),
            "perlinFractal" => Ok(AlgorithmKind::PerlinFractal),
            "transform" => Ok(AlgorithmKind::Transform(TransformOptions::from_json(
                options,
            ))),
            "sineDistort" => Ok(AlgorithmKind::SineDistort(SineDistortOptions::from_json(
                options,
            ))),
            "twirl" => Ok(AlgorithmKind::Twirl(TwirlOptions::from_json(options))),
            _ => Err(EngineError::UnknownAlgorithm(name.to_string())),
        }
    }

    /// Returns a slice of all recognized algorithm names.
    pub fn list_names() -> &'static [&'static str] {
        ALGORITHM_NAMES
    }

    /// Computes this algorithm's color contribution for one pixel.
    pub fn eval(&self, ctx: &EvalContext<'_>, x: usize, y: usize) -> Color {
        match self {
            AlgorithmKind::Tint => Color::WHITE,
            AlgorithmKind::SinX(o) => o.eval(x),
            AlgorithmKind::SinY(o) => o.eval(y),
            AlgorithmKind::BitOr => pattern::bitwise_or(ctx, x, y),
            AlgorithmKind::BitXor => pattern::bitwise_xor(ctx, x, y),
            AlgorithmKind::CheckerBoard(o) => o.eval(x, y),
            AlgorithmKind::Rectangle(o) => o.eval(x, y),
            AlgorithmKind::Circle(o) => o.eval(x, y),
            AlgorithmKind::Noise(o) => o.eval(x, y),
            AlgorithmKind::FractalNoise(o) => o.eval(x, y),
            AlgorithmKind::CellularNoise(o) => o.eval_cellular(x, y),
            AlgorithmKind::VoronoiNoise(o) => o.eval_voronoi(x, y),
            AlgorithmKind::PerlinNoise(o) => o.eval(x, y),
            AlgorithmKind::CellularFractal(o) => o.eval_cellular(x, y),
            AlgorithmKind::VoronoiFractal(o) => o.eval_voronoi(x, y),
            AlgorithmKind::PerlinFractal => Color::BLACK,
            AlgorithmKind::Transform(o) => o.eval(ctx, x, y),
            AlgorithmKind::SineDistort(o) => o.eval(ctx, x, y),
            AlgorithmKind::Twirl(o) => o.eval(ctx, x, y),
        }
    }
}
