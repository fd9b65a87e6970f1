use serde::{
    Deserialize,
    Serialize
};

/// A domain/value pair. Sequences of points ordered by `x` form curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x: x, y: y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn slope(lhs_pt: &Point2D, rhs_pt: &Point2D) -> f64 {
        (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_xy_object() {
        let pt = Point2D::new(1.5, -2.0);
        let json = serde_json::to_string(&pt).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
        let back: Point2D = serde_json::from_str(r#"{"x": 3, "y": 4.25}"#).unwrap();
        assert_eq!(back, Point2D::new(3.0, 4.25));
    }

    #[test]
    fn slope_between_points() {
        let a = Point2D::new(0.0, 1.0);
        let b = Point2D::new(2.0, 5.0);
        assert_eq!(Point2D::slope(&a, &b), 2.0);
    }
}
