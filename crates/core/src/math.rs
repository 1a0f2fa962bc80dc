//! Small numeric helpers shared by the interpolator, shape, and warp code.

/// Clamps `value` into `[min, max]`.
pub fn clampf(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Wraps `value` into the half-open range `[min, max)` by modulo.
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    let v = value - min;
    let r = max - min;
    ((r + v % r) % r) + min
}

/// Wraps `value` into `[min, max]` with ping-pong reflection at the bounds.
///
/// The value is first taken modulo the doubled range, then folded back when
/// it lands in the second half: `mirrored_wrap(12, 0, 10) == 8` and
/// `mirrored_wrap(-2, 0, 10) == 2`.
pub fn mirrored_wrap(value: f64, min: f64, max: f64) -> f64 {
    let r = (max - min) * 2.0;
    let v = (r + (value - min) % r) % r;
    if v > max - min {
        (r - v) + min
    } else {
        v + min
    }
}

/// Linearly interpolates each channel of two channel slices.
///
/// Output length matches the shorter of the two inputs.
pub fn mix(c1: &[f64], c2: &[f64], delta: f64) -> Vec<f64> {
    c1.iter()
        .zip(c2.iter())
        .map(|(a, b)| a * (1.0 - delta) + b * delta)
        .collect()
}

/// Cubic smoothstep between `edge0` and `edge1`.
///
/// Degenerate edges (`edge1 <= edge0`) act as a hard step at `edge0`, so a
/// zero-width falloff produces a crisp boundary rather than NaN.
pub fn smooth_step(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clampf((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}
