//! Spherical geometry primitives shared by the face projections.
//!
//! All angles are radians unless a name says otherwise. Latitude is in
//! [-pi/2, pi/2], longitude in [-pi, pi].

use crate::constants::{EARTH_RADIUS_KM, EPSILON_RAD, M_180_PI, M_2PI, M_PI, M_PI_2, M_PI_180};
use crate::types::GeoPoint;

impl GeoPoint {
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    GeoPoint { lat, lng }
  }

  /// Build a point from decimal degrees.
  #[must_use]
  pub fn from_degrees(lat_degs: f64, lng_degs: f64) -> Self {
    GeoPoint {
      lat: degs_to_rads(lat_degs),
      lng: degs_to_rads(lng_degs),
    }
  }

  #[must_use]
  pub fn lat_degs(&self) -> f64 {
    rads_to_degs(self.lat)
  }

  #[must_use]
  pub fn lng_degs(&self) -> f64 {
    rads_to_degs(self.lng)
  }
}

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Normalizes an angle to [0, 2pi).
#[inline]
#[must_use]
pub(crate) fn pos_angle_rads(rads: f64) -> f64 {
  let mut tmp = rads;
  while tmp < 0.0 {
    tmp += M_2PI;
  }
  while tmp >= M_2PI {
    tmp -= M_2PI;
  }
  if tmp == -0.0 {
    tmp = 0.0;
  }
  tmp
}

/// Whether two points agree componentwise within `threshold` radians.
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal_threshold(p1: &GeoPoint, p2: &GeoPoint, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

/// Whether two points agree within the grid's positional epsilon.
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal(p1: &GeoPoint, p2: &GeoPoint) -> bool {
  geo_almost_equal_threshold(p1, p2, EPSILON_RAD)
}

/// Folds a latitude into [-pi/2, pi/2], reflecting across the poles.
#[inline]
#[must_use]
pub fn constrain_lat(lat: f64) -> f64 {
  let mut lat = lat % M_2PI;
  if lat > M_PI {
    lat -= M_2PI;
  } else if lat < -M_PI {
    lat += M_2PI;
  }
  if lat > M_PI_2 {
    lat = M_PI - lat;
  } else if lat < -M_PI_2 {
    lat = -M_PI - lat;
  }
  lat
}

/// Wraps a longitude into [-pi, pi].
#[inline]
#[must_use]
pub fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// The azimuth from `p1` to `p2`.
#[inline]
#[must_use]
pub(crate) fn azimuth_rads(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
  (p2.lat.cos() * (p2.lng - p1.lng).sin())
    .atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * (p2.lng - p1.lng).cos())
}

/// The point at the given azimuth and great-circle distance from `p1`.
///
/// Distances below the positional epsilon return `p1` unchanged. Points
/// that land on a pole get longitude 0 by convention.
#[must_use]
pub(crate) fn az_distance_rads(p1: &GeoPoint, az: f64, distance: f64) -> GeoPoint {
  if distance < EPSILON_RAD {
    return *p1;
  }

  let az = pos_angle_rads(az);
  let mut p2 = GeoPoint::default();

  if az < EPSILON_RAD || (az - M_PI).abs() < EPSILON_RAD {
    // due north or south
    p2.lat = if az < EPSILON_RAD { p1.lat + distance } else { p1.lat - distance };

    if (p2.lat - M_PI_2).abs() < EPSILON_RAD {
      p2.lat = M_PI_2;
      p2.lng = 0.0;
    } else if (p2.lat + M_PI_2).abs() < EPSILON_RAD {
      p2.lat = -M_PI_2;
      p2.lng = 0.0;
    } else {
      p2.lng = constrain_lng(p1.lng);
    }
  } else {
    let sin_lat = p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos();
    p2.lat = sin_lat.clamp(-1.0, 1.0).asin();

    if (p2.lat - M_PI_2).abs() < EPSILON_RAD {
      p2.lat = M_PI_2;
      p2.lng = 0.0;
    } else if (p2.lat + M_PI_2).abs() < EPSILON_RAD {
      p2.lat = -M_PI_2;
      p2.lng = 0.0;
    } else {
      let cos_p1_lat = p1.lat.cos();
      if cos_p1_lat.abs() < EPSILON_RAD {
        // starting at a pole; the non-axial azimuth fixes the meridian
        p2.lng = constrain_lng(az);
      } else {
        let inv_cos_p2_lat = 1.0 / p2.lat.cos();
        let sin_lng = (az.sin() * distance.sin() * inv_cos_p2_lat).clamp(-1.0, 1.0);
        let cos_lng =
          ((distance.cos() - p1.lat.sin() * p2.lat.sin()) / cos_p1_lat * inv_cos_p2_lat).clamp(-1.0, 1.0);
        p2.lng = constrain_lng(p1.lng + sin_lng.atan2(cos_lng));
      }
    }
  }
  p2
}

/// The great circle distance in radians between two points, by the
/// haversine formula.
#[must_use]
pub fn great_circle_distance_rads(a: &GeoPoint, b: &GeoPoint) -> f64 {
  let sin_lat_half = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng_half = ((b.lng - a.lng) * 0.5).sin();
  let h = sin_lat_half * sin_lat_half + a.lat.cos() * b.lat.cos() * sin_lng_half * sin_lng_half;
  let h = h.clamp(0.0, 1.0);
  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// The great circle distance in kilometers between two points.
#[must_use]
pub fn great_circle_distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

/// The great circle distance in meters between two points.
#[must_use]
pub fn great_circle_distance_m(a: &GeoPoint, b: &GeoPoint) -> f64 {
  great_circle_distance_km(a, b) * 1000.0
}
