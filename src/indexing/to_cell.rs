use crate::constants::{EPSILON_RAD, MAX_GRID_RES, M_PI_2};
use crate::types::{CellIndex, FaceCoord, GeoPoint, GridError};

/// Finds the cell containing the given point at the specified resolution.
///
/// The longitude may lie outside `[-pi, pi]` and is normalized during
/// projection; the latitude must be finite and within `[-pi/2, pi/2]`.
pub fn geo_to_cell(geo: &GeoPoint, res: i32) -> Result<CellIndex, GridError> {
  if !(0..=MAX_GRID_RES).contains(&res) {
    return Err(GridError::ResDomain);
  }
  if !geo.lat.is_finite() || !geo.lng.is_finite() || geo.lat.abs() > M_PI_2 + EPSILON_RAD {
    return Err(GridError::CoordDomain);
  }

  let fijk = FaceCoord::from_geo(geo, res);
  CellIndex::from_face_coord(&fijk, res)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::projection::degs_to_rads;

  #[test]
  fn res_domain_rejected() {
    let geo = GeoPoint::from_degrees(37.77, -122.4);
    assert_eq!(geo_to_cell(&geo, -1), Err(GridError::ResDomain));
    assert_eq!(geo_to_cell(&geo, 16), Err(GridError::ResDomain));
  }

  #[test]
  fn coord_domain_rejected() {
    let bad_lat = GeoPoint::from_degrees(100.0, -122.4);
    assert_eq!(geo_to_cell(&bad_lat, 5), Err(GridError::CoordDomain));

    let nan_lng = GeoPoint::new(0.0, f64::NAN);
    assert_eq!(geo_to_cell(&nan_lng, 5), Err(GridError::CoordDomain));

    let inf_lat = GeoPoint::new(f64::INFINITY, 0.0);
    assert_eq!(geo_to_cell(&inf_lat, 5), Err(GridError::CoordDomain));
  }

  #[test]
  fn known_cells() {
    let sf_city_hall = GeoPoint::from_degrees(37.779265, -122.419277);

    let h_res5 = geo_to_cell(&sf_city_hall, 5).unwrap();
    assert_eq!(h_res5.0, 0x85283083fffffff, "SF City Hall res 5");
    assert_eq!(h_res5.resolution(), 5);

    let h_res10 = geo_to_cell(&sf_city_hall, 10).unwrap();
    assert_eq!(h_res10.0, 0x8a2830828767fff, "SF City Hall res 10");
    assert_eq!(h_res10.resolution(), 10);

    let north_pole = GeoPoint::from_degrees(90.0, 0.0);
    assert_eq!(geo_to_cell(&north_pole, 3).unwrap().0, 0x830326fffffffff);

    let south_pole = GeoPoint::from_degrees(-90.0, 0.0);
    assert_eq!(geo_to_cell(&south_pole, 4).unwrap().0, 0x84f2939ffffffff);
  }

  #[test]
  fn longitude_wraps() {
    // 123 degrees east given in radians past pi
    let wrapped = GeoPoint::new(degs_to_rads(20.0), degs_to_rads(123.0));
    assert_eq!(geo_to_cell(&wrapped, 2).unwrap().0, 0x824b9ffffffffff);
  }
}
