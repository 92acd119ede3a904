use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A raw contour point, as handed over by a font parser.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate of this point
    pub x: f64,
    /// Y coordinate of this point
    pub y: f64,
    /// Does the outline pass through this point, or is it a quadratic control point?
    #[serde(alias = "on")]
    pub on_curve: bool,
}

impl Point {
    pub const fn new(x: f64, y: f64, on_curve: bool) -> Self {
        Self { x, y, on_curve }
    }

    /// An on-curve point.
    pub const fn on(x: f64, y: f64) -> Self {
        Self::new(x, y, true)
    }

    /// An off-curve (control) point.
    pub const fn off(x: f64, y: f64) -> Self {
        Self::new(x, y, false)
    }

    pub fn is_on_curve(&self) -> bool {
        self.on_curve
    }

    pub fn is_off_curve(&self) -> bool {
        !self.on_curve
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// The coordinate average of two points. The result always lies on the curve.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::on((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<Point> for DVec2 {
    fn from(point: Point) -> Self {
        point.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_forced_on_curve() {
        let mid = Point::off(0.0, 2.0).midpoint(&Point::off(4.0, -2.0));
        assert_eq!(mid, Point::on(2.0, 0.0));
    }

    #[test]
    fn deserializes_collaborator_records() {
        let point: Point = serde_json::from_str(r#"{"x": 1.5, "y": -3.0, "on_curve": false}"#)
            .expect("valid record");
        assert_eq!(point, Point::off(1.5, -3.0));

        let point: Point =
            serde_json::from_str(r#"{"x": 0, "y": 0, "on": true}"#).expect("aliased flag");
        assert!(point.is_on_curve());
    }
}
