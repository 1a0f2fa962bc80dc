//! Piecewise interpolation over sorted control points.
//!
//! A [`ColorInterpolator`] holds control points sorted by position and
//! samples them with a selectable method (step, linear, or a two-point
//! cubic) and edge policy (clamp, wrap, mirrored wrap). Points carry 1..=4
//! channels generically, so the same interpolator serves full colors and
//! scalar noise lattice values.

use crate::error::EngineError;
use crate::math::{clampf, mirrored_wrap, mix, wrap};

/// Interpolation method between two bracketing control points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// The left point's channels, verbatim.
    Step,
    /// Per-channel linear mix.
    #[default]
    Linear,
    /// Per-channel cubic blend using only the two bracketing endpoint
    /// values (a one-sided Hermite approximation, not a multi-segment
    /// spline fit).
    Spline,
}

impl Interpolation {
    /// Looks up a method by its program-facing name.
    ///
    /// Returns `EngineError::UnknownInterpolation` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name {
            "step" => Ok(Interpolation::Step),
            "linear" => Ok(Interpolation::Linear),
            "spline" => Ok(Interpolation::Spline),
            _ => Err(EngineError::UnknownInterpolation(name.to_string())),
        }
    }

    /// The program-facing name of this method.
    pub fn name(self) -> &'static str {
        match self {
            Interpolation::Step => "step",
            Interpolation::Linear => "linear",
            Interpolation::Spline => "spline",
        }
    }
}

/// How sample positions outside `[low, high]` are remapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Saturate into `[low, high]`.
    #[default]
    Clamp,
    /// Modulo into `[low, high)`.
    Wrap,
    /// Modulo into the doubled range, then fold back (ping-pong).
    MirroredWrap,
}

/// One interpolation control point: a position and 1..=4 channel values.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    pub pos: f64,
    pub color: Vec<f64>,
}

impl ControlPoint {
    /// Creates a control point from a position and channel slice.
    pub fn new(pos: f64, color: &[f64]) -> Self {
        Self {
            pos,
            color: color.to_vec(),
        }
    }
}

/// Piecewise interpolator over sorted control points with cached bounds.
#[derive(Debug, Clone)]
pub struct ColorInterpolator {
    points: Vec<ControlPoint>,
    low: f64,
    high: f64,
    interpolation: Interpolation,
    edge_policy: EdgePolicy,
}

impl ColorInterpolator {
    /// Creates an interpolator from an unsorted point list.
    ///
    /// Points are sorted by position; the extremes are cached as
    /// `low`/`high`. Returns `EngineError::InvalidControlPoints` if fewer
    /// than two points are given, any position is non-finite, or the
    /// sorted positions span an empty range.
    pub fn new(
        interpolation: Interpolation,
        edge_policy: EdgePolicy,
        points: Vec<ControlPoint>,
    ) -> Result<Self, EngineError> {
        let mut interp = Self {
            points: Vec::new(),
            low: 0.0,
            high: 0.0,
            interpolation,
            edge_policy,
        };
        interp.set_points(points)?;
        Ok(interp)
    }

    /// Replaces the control points, re-sorting and re-caching the bounds.
    ///
    /// Same validation as [`ColorInterpolator::new`]. On error the previous
    /// points are kept.
    pub fn set_points(&mut self, mut points: Vec<ControlPoint>) -> Result<(), EngineError> {
        if points.len() < 2 {
            return Err(EngineError::InvalidControlPoints(format!(
                "need at least 2 points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|p| !p.pos.is_finite()) {
            return Err(EngineError::InvalidControlPoints(
                "point positions must be finite".to_string(),
            ));
        }
        points.sort_by(|a, b| a.pos.total_cmp(&b.pos));
        let low = points[0].pos;
        let high = points[points.len() - 1].pos;
        if low >= high {
            return Err(EngineError::InvalidControlPoints(
                "points must span a non-empty position range".to_string(),
            ));
        }
        self.points = points;
        self.low = low;
        self.high = high;
        Ok(())
    }

    /// Cached lowest control-point position.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Cached highest control-point position.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Samples the channels at `pos`.
    ///
    /// The position is first remapped by the edge policy, then the
    /// bracketing segment is located by linear scan and blended per the
    /// interpolation method. At a control point's exact position the
    /// sample equals that point's channels under every method.
    pub fn color_at(&self, pos: f64) -> Vec<f64> {
        let pos = match self.edge_policy {
            EdgePolicy::Clamp => clampf(pos, self.low, self.high),
            EdgePolicy::Wrap => wrap(pos, self.low, self.high),
            EdgePolicy::MirroredWrap => mirrored_wrap(pos, self.low, self.high),
        };

        let mut i = 0;
        while self.points[i + 1].pos < pos {
            i += 1;
        }
        let p1 = &self.points[i];
        let p2 = &self.points[i + 1];
        let delta = (pos - p1.pos) / (p2.pos - p1.pos);

        match self.interpolation {
            Interpolation::Step => {
                if delta >= 1.0 {
                    p2.color.clone()
                } else {
                    p1.color.clone()
                }
            }
            Interpolation::Linear => mix(&p1.color, &p2.color, delta),
            Interpolation::Spline => {
                let delta2 = delta * delta;
                let delta3 = delta2 * delta;
                p1.color
                    .iter()
                    .zip(p2.color.iter())
                    .map(|(&c1, &c2)| {
                        let a = 2.0 * c1 - 2.0 * c2;
                        let b = -3.0 * c1 + 3.0 * c2;
                        a * delta3 + b * delta2 + c1
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stop(interpolation: Interpolation) -> ColorInterpolator {
        ColorInterpolator::new(
            interpolation,
            EdgePolicy::Clamp,
            vec![
                ControlPoint::new(0.0, &[0.0, 0.1, 0.2]),
                ControlPoint::new(1.0, &[1.0, 0.9, 0.8]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn from_name_resolves_all_methods() {
        assert_eq!(Interpolation::from_name("step").unwrap(), Interpolation::Step);
        assert_eq!(
            Interpolation::from_name("linear").unwrap(),
            Interpolation::Linear
        );
        assert_eq!(
            Interpolation::from_name("spline").unwrap(),
            Interpolation::Spline
        );
    }

    #[test]
    fn from_name_rejects_unknown_method() {
        assert!(matches!(
            Interpolation::from_name("bicubic"),
            Err(EngineError::UnknownInterpolation(_))
        ));
    }

    #[test]
    fn new_rejects_fewer_than_two_points() {
        let result = ColorInterpolator::new(
            Interpolation::Linear,
            EdgePolicy::Clamp,
            vec![ControlPoint::new(0.0, &[1.0])],
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidControlPoints(_))
        ));
    }

    #[test]
    fn new_rejects_empty_position_range() {
        let result = ColorInterpolator::new(
            Interpolation::Linear,
            EdgePolicy::Clamp,
            vec![
                ControlPoint::new(0.5, &[0.0]),
                ControlPoint::new(0.5, &[1.0]),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_non_finite_positions() {
        let result = ColorInterpolator::new(
            Interpolation::Linear,
            EdgePolicy::Clamp,
            vec![
                ControlPoint::new(f64::NAN, &[0.0]),
                ControlPoint::new(1.0, &[1.0]),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn points_are_sorted_on_construction() {
        let interp = ColorInterpolator::new(
            Interpolation::Linear,
            EdgePolicy::Clamp,
            vec![
                ControlPoint::new(1.0, &[1.0]),
                ControlPoint::new(0.0, &[0.0]),
            ],
        )
        .unwrap();
        assert_eq!(interp.low(), 0.0);
        assert_eq!(interp.high(), 1.0);
        assert_eq!(interp.color_at(0.0), vec![0.0]);
    }

    #[test]
    fn boundary_returns_first_and_last_point_for_all_methods() {
        for method in [
            Interpolation::Step,
            Interpolation::Linear,
            Interpolation::Spline,
        ] {
            let interp = two_stop(method);
            assert_eq!(
                interp.color_at(0.0),
                vec![0.0, 0.1, 0.2],
                "low boundary failed for {method:?}"
            );
            assert_eq!(
                interp.color_at(1.0),
                vec![1.0, 0.9, 0.8],
                "high boundary failed for {method:?}"
            );
        }
    }

    #[test]
    fn step_holds_left_point_mid_segment() {
        let interp = two_stop(Interpolation::Step);
        assert_eq!(interp.color_at(0.99), vec![0.0, 0.1, 0.2]);
    }

    #[test]
    fn linear_midpoint_is_average() {
        let interp = two_stop(Interpolation::Linear);
        let mid = interp.color_at(0.5);
        assert!((mid[0] - 0.5).abs() < 1e-12);
        assert!((mid[1] - 0.5).abs() < 1e-12);
        assert!((mid[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn spline_midpoint_matches_two_point_cubic() {
        // a*d^3 + b*d^2 + c1 at delta 0.5 with c1=0, c2=1: -2*(1/8) + 3*(1/4) = 0.5
        let interp = ColorInterpolator::new(
            Interpolation::Spline,
            EdgePolicy::Clamp,
            vec![
                ControlPoint::new(0.0, &[0.0]),
                ControlPoint::new(1.0, &[1.0]),
            ],
        )
        .unwrap();
        assert!((interp.color_at(0.5)[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn spline_stays_inside_segment_pair() {
        // Three points; sampling between the last two must not consult the first.
        let interp = ColorInterpolator::new(
            Interpolation::Spline,
            EdgePolicy::Clamp,
            vec![
                ControlPoint::new(0.0, &[100.0]),
                ControlPoint::new(1.0, &[0.0]),
                ControlPoint::new(2.0, &[1.0]),
            ],
        )
        .unwrap();
        let v = interp.color_at(1.5)[0];
        assert!((v - 0.5).abs() < 1e-12, "two-point cubic expected 0.5, got {v}");
    }

    #[test]
    fn clamp_policy_saturates_out_of_range_samples() {
        let interp = two_stop(Interpolation::Linear);
        assert_eq!(interp.color_at(-5.0), interp.color_at(0.0));
        assert_eq!(interp.color_at(5.0), interp.color_at(1.0));
    }

    #[test]
    fn wrap_policy_repeats_the_range() {
        let interp = ColorInterpolator::new(
            Interpolation::Linear,
            EdgePolicy::Wrap,
            vec![
                ControlPoint::new(0.0, &[0.0]),
                ControlPoint::new(10.0, &[1.0]),
            ],
        )
        .unwrap();
        let direct = interp.color_at(2.0);
        let wrapped = interp.color_at(12.0);
        assert_eq!(direct, wrapped);
    }

    #[test]
    fn mirrored_wrap_policy_reflects_at_bounds() {
        let interp = ColorInterpolator::new(
            Interpolation::Linear,
            EdgePolicy::MirroredWrap,
            vec![
                ControlPoint::new(0.0, &[0.0]),
                ControlPoint::new(10.0, &[1.0]),
            ],
        )
        .unwrap();
        assert_eq!(interp.color_at(12.0), interp.color_at(8.0));
        assert_eq!(interp.color_at(-2.0), interp.color_at(2.0));
    }

    #[test]
    fn single_channel_points_interpolate_as_scalars() {
        let interp = ColorInterpolator::new(
            Interpolation::Linear,
            EdgePolicy::Clamp,
            vec![
                ControlPoint::new(0.0, &[0.25]),
                ControlPoint::new(1.0, &[0.75]),
            ],
        )
        .unwrap();
        let out = interp.color_at(0.5);
        assert_eq!(out.len(), 1);
        assert!((out[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn interior_knot_is_exact_under_step() {
        let interp = ColorInterpolator::new(
            Interpolation::Step,
            EdgePolicy::Clamp,
            vec![
                ControlPoint::new(0.0, &[0.0]),
                ControlPoint::new(5.0, &[0.5]),
                ControlPoint::new(10.0, &[1.0]),
            ],
        )
        .unwrap();
        assert_eq!(interp.color_at(5.0), vec![0.5]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn linear_output_stays_in_channel_hull(pos in -20.0_f64..20.0) {
                let interp = ColorInterpolator::new(
                    Interpolation::Linear,
                    EdgePolicy::MirroredWrap,
                    vec![
                        ControlPoint::new(0.0, &[0.2]),
                        ControlPoint::new(4.0, &[0.8]),
                        ControlPoint::new(10.0, &[0.4]),
                    ],
                )
                .unwrap();
                let v = interp.color_at(pos)[0];
                prop_assert!(
                    (0.2 - 1e-9..=0.8 + 1e-9).contains(&v),
                    "linear sample {v} escaped hull at pos {pos}"
                );
            }
        }
    }
}
