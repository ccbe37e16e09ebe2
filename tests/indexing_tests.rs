// tests/indexing_tests.rs

use hexgrid::*;

#[test]
fn san_francisco_city_hall() {
  let geo = GeoPoint::from_degrees(37.779265, -122.419277);

  assert_eq!(geo_to_cell(&geo, 5).unwrap().0, 0x85283083fffffff);
  assert_eq!(geo_to_cell(&geo, 10).unwrap().0, 0x8a2830828767fff);
}

#[test]
fn poles() {
  let north = GeoPoint::from_degrees(90.0, 0.0);
  let h_north = geo_to_cell(&north, 3).unwrap();
  assert_eq!(h_north.0, 0x830326fffffffff);
  assert_eq!(h_north.base_cell(), 1);

  let south = GeoPoint::from_degrees(-90.0, 0.0);
  let h_south = geo_to_cell(&south, 4).unwrap();
  assert_eq!(h_south.0, 0x84f2939ffffffff);
  assert_eq!(h_south.base_cell(), 121);
}

#[test]
fn radian_fixed_vector() {
  // lat/lng given directly in radians
  let geo = GeoPoint::new(0.659966917655, -2.1364398519396);
  let cell = geo_to_cell(&geo, 9).unwrap();
  assert_eq!(cell.0, 0x89283080dcbffff);

  // the cell center re-indexes to the same cell
  let center = cell_to_geo(cell).unwrap();
  assert_eq!(geo_to_cell(&center, 9).unwrap(), cell);
}

#[test]
fn longitude_outside_pi_range_wraps() {
  let geo = GeoPoint::new(degs_to_rads(20.0), degs_to_rads(123.0));
  assert_eq!(geo_to_cell(&geo, 2).unwrap().0, 0x824b9ffffffffff);
}

#[test]
fn known_cell_center() {
  let center = cell_to_geo(CellIndex(0x8928342e20fffff)).unwrap();
  assert!((center.lat_degs() - 37.5012466151).abs() < 1e-9);
  assert!((center.lng_degs() - -122.5003039349).abs() < 1e-9);
}

#[test]
fn center_reindexes_to_same_cell_at_every_resolution() {
  let points = [
    GeoPoint::from_degrees(37.779265, -122.419277),
    GeoPoint::from_degrees(-35.282, 149.128),
    GeoPoint::from_degrees(64.7, -18.6),
    GeoPoint::from_degrees(0.0, 0.0),
    GeoPoint::from_degrees(-78.5, 106.8),
  ];

  for geo in &points {
    for res in 0..=MAX_GRID_RES {
      let cell = geo_to_cell(geo, res).unwrap();
      assert!(cell.is_valid());
      let center = cell_to_geo(cell).unwrap();
      assert_eq!(geo_to_cell(&center, res).unwrap(), cell, "res {res}");
    }
  }
}

#[test]
fn boundary_vertex_counts() {
  let sf = GeoPoint::from_degrees(37.779265, -122.419277);
  for res in 0..=6 {
    let cell = geo_to_cell(&sf, res).unwrap();
    let boundary = cell_to_boundary(cell).unwrap();
    assert!(boundary.num_verts >= 6);
    assert!(boundary.num_verts <= MAX_BOUNDARY_VERTS);
  }

  // Class II pentagon has exactly 5 verts, Class III 10
  let pents2 = pentagons(2).unwrap();
  assert_eq!(cell_to_boundary(pents2[0]).unwrap().num_verts, 5);
  let pents3 = pentagons(3).unwrap();
  assert_eq!(cell_to_boundary(pents3[0]).unwrap().num_verts, 10);
}

#[test]
fn boundary_vertices_are_finite_and_distinct() {
  let geo = GeoPoint::from_degrees(40.7128, -74.0060);
  for res in [1, 4, 9] {
    let cell = geo_to_cell(&geo, res).unwrap();
    let boundary = cell_to_boundary(cell).unwrap();
    let verts = boundary.vertices();
    for (i, v) in verts.iter().enumerate() {
      assert!(v.lat.is_finite() && v.lng.is_finite());
      for w in &verts[i + 1..] {
        assert!((v.lat - w.lat).abs() > 1e-12 || (v.lng - w.lng).abs() > 1e-12);
      }
    }
  }
}

#[test]
fn invalid_inputs() {
  let geo = GeoPoint::from_degrees(0.0, 0.0);
  assert_eq!(geo_to_cell(&geo, -1), Err(GridError::ResDomain));
  assert_eq!(geo_to_cell(&geo, 16), Err(GridError::ResDomain));
  assert_eq!(
    geo_to_cell(&GeoPoint::new(f64::NAN, 0.0), 5),
    Err(GridError::CoordDomain)
  );

  assert_eq!(cell_to_geo(NULL_INDEX), Err(GridError::IndexInvalid));
  assert_eq!(cell_to_boundary(NULL_INDEX).unwrap_err(), GridError::IndexInvalid);
}

#[test]
fn hex_string_round_trip() {
  let h = CellIndex(0x8928308280fffff);
  assert_eq!(cell_to_string(h), "8928308280fffff");
  assert_eq!(cell_from_string("8928308280fffff"), h);
  assert_eq!(cell_from_string("8928308280FFFFF"), h);

  assert_eq!(cell_from_string(""), NULL_INDEX);
  assert_eq!(cell_from_string("not hex"), NULL_INDEX);
  assert_eq!(cell_from_string("fffffffffffffffff"), NULL_INDEX);
}
