//! Layer program data model.
//!
//! A program is an ordered sequence of [`Layer`] records, each naming an
//! algorithm plus optional blend mode, tint, and algorithm-specific
//! options. Records deserialize from the JSON shape
//! `{"program": "circle", "blendMode": "add", "tint": [1, 0, 0], "radius": 12}`;
//! unknown keys are collected into the open-ended options record.
//!
//! A [`Layer`] is compiled once, at program load, into a [`CompiledLayer`]
//! whose algorithm and blend mode are fully resolved; the pixel loop never
//! touches strings or JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use texgen_algorithms::AlgorithmKind;
use texgen_core::blend::BlendMode;
use texgen_core::color::Color;
use texgen_core::error::EngineError;

/// A layer tint: either a single gray level or an RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TintSpec {
    Scalar(f64),
    Rgb([f64; 3]),
}

impl TintSpec {
    /// Resolves to a concrete color.
    pub fn to_color(self) -> Color {
        match self {
            TintSpec::Scalar(v) => Color::splat(v),
            TintSpec::Rgb(rgb) => rgb.into(),
        }
    }
}

/// One entry of a layer program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Algorithm name; the only required key.
    pub program: String,

    /// Blend mode name; `set` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,

    /// Color multiplied into the algorithm output; white when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<TintSpec>,

    /// Algorithm-specific options; every remaining key lands here.
    #[serde(flatten)]
    pub options: Value,
}

impl Layer {
    /// Creates a layer for the named algorithm with empty options.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            blend_mode: None,
            tint: None,
            options: Value::Object(Map::new()),
        }
    }

    /// Returns the layer with the given blend mode name.
    pub fn with_blend_mode(mut self, mode: impl Into<String>) -> Self {
        self.blend_mode = Some(mode.into());
        self
    }

    /// Returns the layer with the given tint.
    pub fn with_tint(mut self, tint: TintSpec) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Returns the layer with one algorithm option set.
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        if let Value::Object(map) = &mut self.options {
            map.insert(key.into(), value);
        }
        self
    }
}

/// A layer with its algorithm, blend mode, and tint fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledLayer {
    algorithm: AlgorithmKind,
    blend: BlendMode,
    tint: Color,
}

impl CompiledLayer {
    /// Resolves a layer record against the algorithm and blend registries.
    ///
    /// This is the single point where unknown algorithm or blend mode
    /// names are rejected.
    pub fn compile(layer: &Layer) -> Result<Self, EngineError> {
        let algorithm = AlgorithmKind::from_layer(&layer.program, &layer.options)?;
        let blend = match &layer.blend_mode {
            Some(name) => BlendMode::from_name(name)?,
            None => BlendMode::default(),
        };
        let tint = layer.tint.map(TintSpec::to_color).unwrap_or(Color::WHITE);
        Ok(Self {
            algorithm,
            blend,
            tint,
        })
    }

    /// The resolved algorithm.
    pub fn algorithm(&self) -> &AlgorithmKind {
        &self.algorithm
    }

    /// The resolved blend mode.
    pub fn blend(&self) -> BlendMode {
        self.blend
    }

    /// The resolved tint color.
    pub fn tint(&self) -> Color {
        self.tint
    }
}
