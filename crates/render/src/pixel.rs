//! Pure conversion from the float buffer to an 8-bit RGBA frame.
//!
//! Always available (no feature gate) so that PNG output and any other
//! frame consumer share the same conversion.

use texgen_core::buffer::{PixelBuffer, CHANNELS};

/// Converts a buffer to row-major 8-bit RGBA, alpha forced to 255.
///
/// With `clamp` set, channels saturate to [0, 1] before the 255 scale.
/// Without it, channels are scaled as-is and only the integer cast
/// saturates: values above 1 still land on 255, negatives and NaN on 0.
pub fn buffer_to_rgba(buffer: &PixelBuffer, clamp: bool) -> Vec<u8> {
    let quantize = |v: f64| {
        let v = if clamp { v.clamp(0.0, 1.0) } else { v };
        (v * 255.0) as u8
    };
    buffer
        .data()
        .chunks_exact(CHANNELS)
        .flat_map(|px| [quantize(px[0]), quantize(px[1]), quantize(px[2]), 255u8])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use texgen_core::color::Color;

    #[test]
    fn output_length_is_four_bytes_per_pixel() {
        let buf = PixelBuffer::new(8, 4).unwrap();
        assert_eq!(buffer_to_rgba(&buf, true).len(), 8 * 4 * 4);
    }

    #[test]
    fn alpha_is_always_opaque() {
        let buf = PixelBuffer::new(4, 4).unwrap();
        let rgba = buffer_to_rgba(&buf, true);
        for (i, &byte) in rgba.iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 255, "alpha at pixel {}", i / 4);
            }
        }
    }

    #[test]
    fn unit_channels_scale_to_full_range() {
        let mut buf = PixelBuffer::new(1, 1).unwrap();
        buf.set(0, 0, Color::new(0.0, 0.5, 1.0));
        let rgba = buffer_to_rgba(&buf, true);
        assert_eq!(rgba[0], 0);
        assert_eq!(rgba[1], 127);
        assert_eq!(rgba[2], 255);
    }

    #[test]
    fn clamp_saturates_before_scaling() {
        let mut buf = PixelBuffer::new(1, 1).unwrap();
        buf.set(0, 0, Color::new(2.5, -1.0, 0.5));
        let rgba = buffer_to_rgba(&buf, true);
        assert_eq!(rgba[0], 255);
        assert_eq!(rgba[1], 0);
        assert_eq!(rgba[2], 127);
    }

    #[test]
    fn raw_range_saturates_only_at_the_cast() {
        let mut buf = PixelBuffer::new(1, 1).unwrap();
        buf.set(0, 0, Color::new(2.5, -1.0, f64::NAN));
        let rgba = buffer_to_rgba(&buf, false);
        assert_eq!(rgba[0], 255, "above-range casts saturate high");
        assert_eq!(rgba[1], 0, "negative casts saturate low");
        assert_eq!(rgba[2], 0, "NaN casts to zero");
    }
}
