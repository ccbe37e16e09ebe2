//! Planar vector helpers for the face-local 2D frame.

use crate::types::Vec2d;

impl Vec2d {
  #[must_use]
  pub const fn new(x: f64, y: f64) -> Self {
    Vec2d { x, y }
  }

  /// Magnitude of the vector.
  #[inline]
  #[must_use]
  pub(crate) fn mag(&self) -> f64 {
    (self.x * self.x + self.y * self.y).sqrt()
  }

  /// Componentwise equality within `f64::EPSILON`.
  #[inline]
  #[must_use]
  pub(crate) fn almost_equals(&self, other: &Vec2d) -> bool {
    (self.x - other.x).abs() < f64::EPSILON && (self.y - other.y).abs() < f64::EPSILON
  }
}

/// Intersection of the line through `p0`,`p1` with the line through
/// `p2`,`p3`. The caller guarantees the lines are not parallel and that
/// an intersection exists; this is only used for cell edges against
/// icosahedron edges, which always cross transversally.
#[inline]
#[must_use]
pub(crate) fn intersect(p0: &Vec2d, p1: &Vec2d, p2: &Vec2d, p3: &Vec2d) -> Vec2d {
  let s1x = p1.x - p0.x;
  let s1y = p1.y - p0.y;
  let s2x = p3.x - p2.x;
  let s2y = p3.y - p2.y;

  let t = (s2x * (p0.y - p2.y) - s2y * (p0.x - p2.x)) / (-s2x * s1y + s1x * s2y);

  Vec2d {
    x: p0.x + t * s1x,
    y: p0.y + t * s1y,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mag() {
    let v = Vec2d { x: 3.0, y: 4.0 };
    assert!((v.mag() - 5.0).abs() < f64::EPSILON);
  }

  #[test]
  fn test_intersect() {
    let p0 = Vec2d { x: 2.0, y: 2.0 };
    let p1 = Vec2d { x: 6.0, y: 6.0 };
    let p2 = Vec2d { x: 0.0, y: 4.0 };
    let p3 = Vec2d { x: 10.0, y: 4.0 };

    let inter = intersect(&p0, &p1, &p2, &p3);
    assert!((inter.x - 4.0).abs() < f64::EPSILON);
    assert!((inter.y - 4.0).abs() < f64::EPSILON);
  }

  #[test]
  fn test_almost_equals() {
    let v1 = Vec2d { x: 3.0, y: 4.0 };
    let v2 = Vec2d { x: 3.0, y: 4.0 };
    let v3 = Vec2d { x: 3.5, y: 4.0 };
    assert!(v1.almost_equals(&v2));
    assert!(!v1.almost_equals(&v3));
  }
}
