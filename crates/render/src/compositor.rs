//! The layer-execution pipeline.
//!
//! A [`Compositor`] owns two buffers: the live accumulation buffer and a
//! scratch snapshot. Each layer is rendered by copying live -> snapshot
//! (a full, atomic overwrite), evaluating the algorithm for every pixel
//! against that frozen snapshot, tinting, and blending the result into the
//! live buffer. Layers are strictly sequential; within one layer every
//! pixel reads only the snapshot, so per-pixel evaluation is race-free.

use texgen_algorithms::EvalContext;
use texgen_core::buffer::PixelBuffer;
use texgen_core::color::Color;
use texgen_core::error::EngineError;

use crate::layer::{CompiledLayer, Layer};
use crate::pixel::buffer_to_rgba;

/// Renders an ordered layer program into a float buffer and emits 8-bit
/// frames.
///
/// Dimensions are fixed for the compositor's lifetime; changing them means
/// building a new instance.
#[derive(Debug)]
pub struct Compositor {
    width: usize,
    height: usize,
    buffer: PixelBuffer,
    snapshot: PixelBuffer,
    program: Vec<CompiledLayer>,
    clamp_output: bool,
}

impl Compositor {
    /// Creates a compositor with an empty program and a zeroed buffer.
    ///
    /// Returns `EngineError::InvalidDimensions` for zero or overflowing
    /// dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        Ok(Self {
            width,
            height,
            buffer: PixelBuffer::new(width, height)?,
            snapshot: PixelBuffer::new(width, height)?,
            program: Vec::new(),
            clamp_output: true,
        })
    }

    /// Target width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Target height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of layers in the current program.
    pub fn layer_count(&self) -> usize {
        self.program.len()
    }

    /// Whether [`Compositor::frame`] saturates channels to [0, 1] before
    /// the 8-bit scale. On by default; turn off to reproduce the legacy
    /// straight-scale output where out-of-range values saturate only at
    /// the integer cast.
    pub fn clamp_output(&self) -> bool {
        self.clamp_output
    }

    /// Sets the output clamping choice.
    pub fn set_clamp_output(&mut self, clamp: bool) {
        self.clamp_output = clamp;
    }

    /// Returns the compositor with the given output clamping choice.
    pub fn with_clamp_output(mut self, clamp: bool) -> Self {
        self.clamp_output = clamp;
        self
    }

    /// Compiles and installs a whole program, resetting the buffer to zero.
    ///
    /// On a compile error the previous program and buffer are left intact.
    pub fn set_program(&mut self, layers: &[Layer]) -> Result<(), EngineError> {
        let program = layers
            .iter()
            .map(CompiledLayer::compile)
            .collect::<Result<Vec<_>, _>>()?;
        self.buffer = PixelBuffer::new(self.width, self.height)?;
        self.program = program;
        Ok(())
    }

    /// Compiles and appends a single layer without resetting the buffer.
    pub fn push_layer(&mut self, layer: &Layer) -> Result<(), EngineError> {
        self.program.push(CompiledLayer::compile(layer)?);
        Ok(())
    }

    /// Runs the program: every layer, in order, over every pixel in
    /// row-major order.
    pub fn render(&mut self) -> Result<(), EngineError> {
        for layer in &self.program {
            self.snapshot.copy_from(&self.buffer)?;
            let ctx = EvalContext::new(&self.snapshot);
            for y in 0..self.height {
                for x in 0..self.width {
                    let src = layer.algorithm().eval(&ctx, x, y).multiply(layer.tint());
                    let dst = self.buffer.get(x as isize, y as isize);
                    self.buffer.set(
                        x as isize,
                        y as isize,
                        Color::new(
                            layer.blend().apply(dst.r, src.r),
                            layer.blend().apply(dst.g, src.g),
                            layer.blend().apply(dst.b, src.b),
                        ),
                    );
                }
            }
        }
        Ok(())
    }

    /// Read access to the live accumulation buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Emits the current buffer as an 8-bit RGBA frame, row-major and
    /// fully opaque, honoring the clamp choice.
    pub fn frame(&self) -> Vec<u8> {
        buffer_to_rgba(&self.buffer, self.clamp_output)
    }
}
