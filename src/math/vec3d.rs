//! Unit-sphere Cartesian helpers.

use crate::types::{GeoPoint, Vec3d};

#[inline]
fn square(x: f64) -> f64 {
  x * x
}

impl Vec3d {
  /// Squared Euclidean distance to another point.
  #[inline]
  #[must_use]
  pub(crate) fn square_dist(&self, other: &Vec3d) -> f64 {
    square(self.x - other.x) + square(self.y - other.y) + square(self.z - other.z)
  }

  /// Cartesian coordinate on the unit sphere for a lat/lng in radians.
  #[inline]
  #[must_use]
  pub(crate) fn from_geo(geo: &GeoPoint) -> Vec3d {
    let r = geo.lat.cos();
    Vec3d {
      x: geo.lng.cos() * r,
      y: geo.lng.sin() * r,
      z: geo.lat.sin(),
    }
  }
}
