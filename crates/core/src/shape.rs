use glam::DVec2;

/// Decimal places to which partial lengths are compared during arc-length inversion.
pub const TOLERANCE_DECIMALS: i32 = 3;

/// Bisection steps after which arc-length inversion settles for its current guess.
pub const MAX_SEARCH_DEPTH: u32 = 20;

/// A curve segment described by its native shape parameter `t ∈ [0, 1]`.
///
/// The shape parameter is not proportional to distance travelled along the
/// curve; [VectorGraphic](crate::VectorGraphic) inverts it by arc length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    /// Straight segment from `start` to `end`.
    Line { start: DVec2, end: DVec2 },
    /// Quadratic Bézier segment pulled towards `control`.
    Quadratic {
        start: DVec2,
        control: DVec2,
        end: DVec2,
    },
}

/// Outcome of inverting a partial arc length back into a shape parameter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ArcSearch {
    /// The partial length at `t` matches the target at [TOLERANCE_DECIMALS].
    Matched(f64),
    /// [MAX_SEARCH_DEPTH] was reached first; `t` is the last midpoint tried.
    Exhausted(f64),
}

impl ArcSearch {
    /// The shape parameter found, regardless of whether the search converged.
    pub fn parameter(self) -> f64 {
        match self {
            ArcSearch::Matched(t) | ArcSearch::Exhausted(t) => t,
        }
    }

    pub fn is_exhausted(self) -> bool {
        matches!(self, ArcSearch::Exhausted(_))
    }
}

impl Shape {
    pub fn start(&self) -> DVec2 {
        match *self {
            Shape::Line { start, .. } | Shape::Quadratic { start, .. } => start,
        }
    }

    pub fn end(&self) -> DVec2 {
        match *self {
            Shape::Line { end, .. } | Shape::Quadratic { end, .. } => end,
        }
    }

    /// Position at shape parameter `t`.
    pub fn position_at(&self, t: f64) -> DVec2 {
        match *self {
            Shape::Line { start, end } => start + (end - start) * t,
            // B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
            Shape::Quadratic {
                start,
                control,
                end,
            } => {
                let inv = 1.0 - t;
                inv * inv * start + 2.0 * inv * t * control + t * t * end
            }
        }
    }

    /// Approximate length over the whole of `[0, 1]`.
    pub fn approximate_length(&self, sample_count: usize) -> f64 {
        self.length_until(1.0, sample_count)
    }

    /// Approximate length of the part of the curve between `0` and `t`.
    ///
    /// Sums the chords between `sample_count` evenly spaced samples, so curved
    /// segments are always underestimated.
    pub fn length_until(&self, t: f64, sample_count: usize) -> f64 {
        polyline_length(sample_between(
            |z| self.position_at(z),
            t,
            sample_count.max(2),
            true,
        ))
    }

    /// Find the shape parameter at which the partial length reaches `target`.
    ///
    /// Bisects `[0, 1]`, comparing partial lengths rounded to
    /// [TOLERANCE_DECIMALS], for at most [MAX_SEARCH_DEPTH] narrowing steps.
    pub fn parameter_for_length(&self, target: f64, sample_count: usize) -> ArcSearch {
        let target = round_to_tolerance(target);
        let (mut low, mut high) = (0.0, 1.0);
        let mut depth = 0;

        loop {
            let t = (low + high) / 2.0;
            let length = round_to_tolerance(self.length_until(t, sample_count));

            if length == target {
                return ArcSearch::Matched(t);
            }
            if depth >= MAX_SEARCH_DEPTH {
                log::trace!("arc-length search exhausted at t = {t} (target {target}, reached {length})");
                return ArcSearch::Exhausted(t);
            }

            if target > length {
                low = t;
            } else {
                high = t;
            }
            depth += 1;
        }
    }
}

fn round_to_tolerance(value: f64) -> f64 {
    let scale = 10f64.powi(TOLERANCE_DECIMALS);
    (value * scale).round() / scale
}

/// `count` evenly spaced evaluations of `f` over `[0, end]`.
///
/// With `include_last_point` the final sample lands exactly on `end`,
/// otherwise the spacing is `end / count` and `end` itself is never reached.
pub(crate) fn sample_between<F>(
    f: F,
    end: f64,
    count: usize,
    include_last_point: bool,
) -> impl Iterator<Item = DVec2>
where
    F: Fn(f64) -> DVec2,
{
    let divisor = if include_last_point {
        count.saturating_sub(1)
    } else {
        count
    };
    let step = if divisor == 0 {
        0.0
    } else {
        end / divisor as f64
    };
    (0..count).map(move |n| f(step * n as f64))
}

/// Sum of the distances between consecutive points.
pub(crate) fn polyline_length(points: impl IntoIterator<Item = DVec2>) -> f64 {
    let mut points = points.into_iter();
    let Some(mut prev) = points.next() else {
        return 0.0;
    };
    let mut length = 0.0;
    for point in points {
        length += prev.distance(point);
        prev = point;
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> Shape {
        Shape::Quadratic {
            start: DVec2::new(0.0, 0.0),
            control: DVec2::new(5.0, 10.0),
            end: DVec2::new(10.0, 0.0),
        }
    }

    #[test]
    fn quadratic_endpoints_and_apex() {
        let shape = arch();
        assert!((shape.position_at(0.0) - DVec2::ZERO).length() < 1e-9);
        assert!((shape.position_at(1.0) - DVec2::new(10.0, 0.0)).length() < 1e-9);
        assert!((shape.position_at(0.5) - DVec2::new(5.0, 5.0)).length() < 1e-9);
    }

    #[test]
    fn line_length_is_exact_at_any_resolution() {
        let line = Shape::Line {
            start: DVec2::new(0.0, 0.0),
            end: DVec2::new(3.0, 4.0),
        };
        assert_relative_eq!(line.approximate_length(2), 5.0, epsilon = 1e-12);
        assert_relative_eq!(line.approximate_length(64), 5.0, epsilon = 1e-12);
        assert_relative_eq!(line.length_until(0.5, 10), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn curved_length_grows_with_resolution() {
        let shape = arch();
        let coarse = shape.approximate_length(10);
        let fine = shape.approximate_length(128);
        let chord = shape.approximate_length(2);

        assert_relative_eq!(chord, 10.0, epsilon = 1e-12);
        assert!(chord < coarse);
        assert!(coarse < fine);
    }

    #[test]
    fn bisection_matches_midpoint_of_line() {
        let line = Shape::Line {
            start: DVec2::new(0.0, 0.0),
            end: DVec2::new(1.0, 0.0),
        };
        assert_eq!(line.parameter_for_length(0.5, 10), ArcSearch::Matched(0.5));

        let search = line.parameter_for_length(0.25, 10);
        assert!(!search.is_exhausted());
        assert_relative_eq!(search.parameter(), 0.25, epsilon = 1e-3);
    }

    #[test]
    fn bisection_gives_up_on_unreachable_target() {
        let line = Shape::Line {
            start: DVec2::new(0.0, 0.0),
            end: DVec2::new(1.0, 0.0),
        };
        let search = line.parameter_for_length(2.0, 10);
        assert!(search.is_exhausted());
        assert!(search.parameter() > 0.999);
    }

    #[test]
    fn sampling_divisor_depends_on_last_point() {
        let f = |t: f64| DVec2::new(t, 0.0);
        let closed: Vec<_> = sample_between(f, 1.0, 5, true).collect();
        let open: Vec<_> = sample_between(f, 1.0, 5, false).collect();

        assert_eq!(closed.len(), 5);
        assert_eq!(closed[4].x, 1.0);
        assert_eq!(open[4].x, 0.8);
        assert_eq!(sample_between(f, 1.0, 1, true).collect::<Vec<_>>(), vec![DVec2::ZERO]);
    }
}
