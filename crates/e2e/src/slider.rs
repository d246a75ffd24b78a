// Circular-slider coordinate mapping
//
// The temperature dragger on the IoT dashboard is a circular control:
// dragging the thumb along an arc sets the value. Playwright can only
// press, move and release the pointer at screen coordinates, so setting
// a target value means mapping it onto the arc geometry first.
//
// The mapping is pure; the pointer sequence that consumes it lives in
// `pages::temperature`.

use std::f64::consts::PI;

use serde::Deserialize;

/// On-screen bounding box of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Midpoint of the box.
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// A screen coordinate, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Geometry of a circular drag control.
///
/// The control's active travel spans a fixed arc; values map linearly
/// onto it. Angles follow screen conventions: measured from the
/// positive x axis, with y growing downward.
#[derive(Debug, Clone, Copy)]
pub struct ArcSlider {
    pub min_value: f64,
    pub max_value: f64,
    /// Angle (radians) where `min_value` sits.
    pub start_angle: f64,
    /// Angle (radians) where `max_value` sits.
    pub end_angle: f64,
    /// Thumb-circle radius as a fraction of the smaller box dimension.
    pub radius_ratio: f64,
}

impl ArcSlider {
    /// The IoT dashboard temperature dragger: 10..35 °C across a 90°
    /// arc from 225° to 315°, thumb at 0.4 of the box.
    pub const TEMPERATURE: ArcSlider = ArcSlider {
        min_value: 10.0,
        max_value: 35.0,
        start_angle: 1.25 * PI,
        end_angle: 1.75 * PI,
        radius_ratio: 0.4,
    };

    /// Clamps `value` into the control's range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min_value).min(self.max_value)
    }

    /// Normalized position of `value` on the arc, in [0, 1].
    pub fn fraction(&self, value: f64) -> f64 {
        (self.clamp(value) - self.min_value) / (self.max_value - self.min_value)
    }

    /// Angle (radians) at which `value` sits on the arc.
    pub fn angle(&self, value: f64) -> f64 {
        self.start_angle + self.fraction(value) * (self.end_angle - self.start_angle)
    }

    /// Thumb radius for a control rendered inside `bounds`.
    pub fn radius(&self, bounds: &BoundingBox) -> f64 {
        bounds.width.min(bounds.height) * self.radius_ratio
    }

    /// Screen coordinate where the pointer must be released to set `value`.
    pub fn target_point(&self, bounds: &BoundingBox, value: f64) -> Point {
        let center = bounds.center();
        let radius = self.radius(bounds);
        let angle = self.angle(value);
        Point {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }
}

/// Intermediate pointer positions for a drag from `from` to `to`.
///
/// Yields `steps` points ending exactly at `to`; the starting point is
/// not included.
pub fn interpolate(from: Point, to: Point, steps: usize) -> Vec<Point> {
    (1..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            Point {
                x: from.x + (to.x - from.x) * t,
                y: from.y + (to.y - from.y) * t,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: BoundingBox = BoundingBox {
        x: 0.0,
        y: 0.0,
        width: 200.0,
        height: 200.0,
    };

    #[test]
    fn clamps_below_minimum() {
        let slider = ArcSlider::TEMPERATURE;
        assert_eq!(slider.clamp(-40.0), 10.0);
        assert_eq!(slider.clamp(9.999), 10.0);
    }

    #[test]
    fn clamps_above_maximum() {
        let slider = ArcSlider::TEMPERATURE;
        assert_eq!(slider.clamp(100.0), 35.0);
        assert_eq!(slider.clamp(35.001), 35.0);
    }

    #[test]
    fn fraction_is_monotone_in_value() {
        let slider = ArcSlider::TEMPERATURE;
        let mut previous = f64::NEG_INFINITY;
        let mut value = 0.0;
        while value <= 45.0 {
            let fraction = slider.fraction(value);
            assert!(fraction >= previous, "fraction decreased at value {value}");
            assert!((0.0..=1.0).contains(&fraction));
            previous = fraction;
            value += 0.5;
        }
    }

    #[test]
    fn angle_stays_within_arc_bounds() {
        let slider = ArcSlider::TEMPERATURE;
        for value in [-100.0, 10.0, 17.3, 22.5, 35.0, 200.0] {
            let angle = slider.angle(value);
            assert!(angle >= slider.start_angle, "angle below arc at {value}");
            assert!(angle <= slider.end_angle, "angle above arc at {value}");
        }
    }

    #[test]
    fn target_point_lies_on_the_bounding_circle() {
        let slider = ArcSlider::TEMPERATURE;
        for value in [10.0, 14.0, 19.0, 27.5, 35.0] {
            let point = slider.target_point(&BOX, value);
            let distance = point.distance_to(BOX.center());
            assert!(
                (distance - slider.radius(&BOX)).abs() < 1e-9,
                "point for {value} is off the circle: {distance}"
            );
        }
    }

    #[test]
    fn maps_19_degrees_onto_the_documented_angle() {
        // 200x200 box at the origin, range [10, 35], target 19:
        // fraction 0.36, angle 225° + 0.36 * 90° = 257.4°.
        let slider = ArcSlider::TEMPERATURE;
        assert!((slider.fraction(19.0) - 0.36).abs() < 1e-12);

        let angle = slider.angle(19.0);
        assert!((angle.to_degrees() - 257.4).abs() < 1e-9);

        let point = slider.target_point(&BOX, 19.0);
        let radius = slider.radius(&BOX);
        let expected = Point {
            x: 100.0 + radius * angle.cos(),
            y: 100.0 + radius * angle.sin(),
        };
        assert!((point.x - expected.x).abs() < 1e-9);
        assert!((point.y - expected.y).abs() < 1e-9);
        // Sanity: with y growing downward, 257.4° lands up-left of center.
        assert!(point.x < 100.0);
        assert!(point.y < 100.0);
    }

    #[test]
    fn interpolate_ends_at_the_target() {
        let from = Point { x: 0.0, y: 0.0 };
        let to = Point { x: 10.0, y: -20.0 };
        let path = interpolate(from, to, 5);
        assert_eq!(path.len(), 5);
        assert_eq!(path[4], to);
        // Monotone approach: each step is closer to the target.
        let mut last = from.distance_to(to);
        for point in &path {
            let remaining = point.distance_to(to);
            assert!(remaining <= last);
            last = remaining;
        }
    }
}
