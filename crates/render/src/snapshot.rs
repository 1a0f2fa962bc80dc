//! PNG output of a rendered buffer.
//!
//! Feature-gated behind `png` (default on) so headless consumers can
//! depend on this crate without pulling in the `image` crate. The pixel
//! conversion itself lives in [`crate::pixel`] (always available).

use std::path::Path;

use texgen_core::buffer::PixelBuffer;
use texgen_core::error::EngineError;

use crate::pixel::buffer_to_rgba;

/// Writes a buffer as an RGBA PNG.
///
/// Returns `EngineError::InvalidDimensions` if the dimensions overflow
/// `u32`, or `EngineError::Io` on write failure.
pub fn write_png(buffer: &PixelBuffer, clamp: bool, path: &Path) -> Result<(), EngineError> {
    let rgba = buffer_to_rgba(buffer, clamp);
    let w = u32::try_from(buffer.width()).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(buffer.height()).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}
