//! Planar geometry shared across the workspace.
//!
//! Agents, targets, and move vectors all live in display coordinates: the
//! origin is the top-left corner, `x` grows to the right and `y` grows
//! downward.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A point or displacement in display coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// The origin `(0, 0)`. Every agent starts a generation here.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Squared Euclidean distance. Orders points the same way as
    /// [`distance`](Self::distance) without the square root.
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.mul_add(dx, dy * dy)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Axis-aligned rectangle with inclusive bounds.
///
/// Used to keep the target away from the display edges. A region is only
/// usable for sampling when [`is_valid`](Self::is_valid) holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Smallest allowed `x`.
    pub min_x: f64,
    /// Largest allowed `x`.
    pub max_x: f64,
    /// Smallest allowed `y`.
    pub min_y: f64,
    /// Largest allowed `y`.
    pub max_y: f64,
}

impl Region {
    /// Build the sampling region for a display of `width` x `height`.
    ///
    /// The region spans `[near_margin, width - far_margin]` horizontally and
    /// `[near_margin, height - far_margin]` vertically. Margins larger than
    /// the display produce an invalid (empty) region rather than wrapping.
    pub fn from_display(width: u32, height: u32, near_margin: u32, far_margin: u32) -> Self {
        let near = f64::from(near_margin);
        let far = f64::from(far_margin);
        Self {
            min_x: near,
            max_x: f64::from(width) - far,
            min_y: near,
            max_y: f64::from(height) - far,
        }
    }

    /// Whether both axis ranges are finite and non-empty.
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Whether `point` lies inside the region (bounds inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((b.distance(a) - 5.0).abs() < 1e-12);
        assert!((a.distance_squared(b) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut p = Vec2::ZERO;
        p += Vec2::new(0.5, -1.0);
        p += Vec2::new(0.25, 0.5);
        assert!((p.x - 0.75).abs() < 1e-12);
        assert!((p.y + 0.5).abs() < 1e-12);
        let q = Vec2::new(1.0, 1.0) + Vec2::new(2.0, 3.0);
        assert_eq!(q, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn region_from_display() {
        let region = Region::from_display(720, 480, 100, 50);
        assert!(region.is_valid());
        assert!((region.min_x - 100.0).abs() < f64::EPSILON);
        assert!((region.max_x - 670.0).abs() < f64::EPSILON);
        assert!((region.min_y - 100.0).abs() < f64::EPSILON);
        assert!((region.max_y - 430.0).abs() < f64::EPSILON);
    }

    #[test]
    fn oversized_margins_make_region_invalid() {
        let region = Region::from_display(120, 480, 100, 50);
        assert!(!region.is_valid());
    }

    #[test]
    fn contains_is_inclusive() {
        let region = Region::from_display(720, 480, 100, 50);
        assert!(region.contains(Vec2::new(100.0, 100.0)));
        assert!(region.contains(Vec2::new(670.0, 430.0)));
        assert!(!region.contains(Vec2::new(99.9, 200.0)));
        assert!(!region.contains(Vec2::new(200.0, 430.1)));
    }

    #[test]
    fn vec2_yaml_shape() {
        let yaml = "x: 1.5\ny: -2.0\n";
        let v: Result<Vec2, _> = serde_yml::from_str(yaml);
        assert!(v.is_ok());
        let v = v.ok().unwrap_or_default();
        assert_eq!(v, Vec2::new(1.5, -2.0));
    }
}
