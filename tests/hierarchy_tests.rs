// tests/hierarchy_tests.rs

use hexgrid::*;

#[test]
fn parent_fixed_vectors() {
  let child = CellIndex(0x8a2830828767fff);
  assert_eq!(child.parent_at(9).unwrap().0, 0x89283082877ffff);
  assert_eq!(child.parent_at(5).unwrap().0, 0x85283083fffffff);
  assert_eq!(child.parent_at(0).unwrap().resolution(), 0);
  assert_eq!(child.parent_at(10), Ok(child));
  assert_eq!(child.parent_at(11), Err(GridError::ResDomain));
}

#[test]
fn downtown_cell_and_its_children() {
  let geo = GeoPoint::new(0.659966917655, -2.1364398519396);
  let cell9 = geo_to_cell(&geo, 9).unwrap();
  assert_eq!(cell9.0, 0x89283080dcbffff);

  let parent = cell9.parent_at(8).unwrap();
  assert_eq!(parent.0, 0x88283080ddfffff);
  assert_eq!(parent.resolution(), 8);
  assert_eq!(parent.base_cell(), cell9.base_cell());

  let children: Vec<CellIndex> = parent.children(9).collect();
  assert_eq!(children.len(), 7);
  assert!(children.contains(&cell9));
  for child in &children {
    assert_eq!(child.parent_at(8), Ok(parent));
  }
}

#[test]
fn children_partition_the_parent() {
  let parent = geo_to_cell(&GeoPoint::from_degrees(37.779, -122.419), 4).unwrap();
  for child_res in 5..=7 {
    let children: Vec<CellIndex> = parent.children(child_res).collect();
    assert_eq!(children.len() as i64, parent.children_size(child_res).unwrap());

    // distinct, ordered, and each child's center stays in the family
    for pair in children.windows(2) {
      assert!(pair[0].0 < pair[1].0);
    }
    for &child in &children {
      let center = cell_to_geo(child).unwrap();
      assert_eq!(geo_to_cell(&center, child_res).unwrap(), child);
      assert_eq!(child.parent_at(4), Ok(parent));
    }
  }
}

#[test]
fn pentagon_child_counts() {
  for &pent in &pentagons(1).unwrap() {
    assert_eq!(pent.children_size(2).unwrap(), 6);
    assert_eq!(pent.children_size(3).unwrap(), 41);
    assert_eq!(pent.children(3).count(), 41);
  }
}

#[test]
fn pentagon_children_have_no_leading_k() {
  let pent = res0_cells()[4];
  assert!(pent.is_pentagon());
  for child in pent.children(2) {
    assert!(child.is_valid());
    assert_ne!(child.digit(1), Digit::K);
  }
}

#[test]
fn center_child_round_trip() {
  let h = geo_to_cell(&GeoPoint::from_degrees(51.5, -0.12), 6).unwrap();
  let grandchild = h.center_child(9).unwrap();
  assert_eq!(grandchild.resolution(), 9);
  assert_eq!(grandchild.parent_at(6), Ok(h));

  // the center child shares its parent's center
  let parent_center = cell_to_geo(h).unwrap();
  assert_eq!(geo_to_cell(&parent_center, 9).unwrap(), grandchild);
}

#[test]
fn res0_and_pentagon_enumeration() {
  let cells = res0_cells();
  assert_eq!(cells.len() as i32, NUM_BASE_CELLS);
  for (bc, &h) in cells.iter().enumerate() {
    assert_eq!(h.base_cell(), bc as i32);
    assert_eq!(h.resolution(), 0);
  }

  assert_eq!(pentagon_count(), 12);
  for res in [0, 7, 15] {
    let pents = pentagons(res).unwrap();
    assert_eq!(pents.len(), 12);
    for p in pents {
      assert!(p.is_pentagon());
      assert_eq!(p.resolution(), res);
    }
  }
}

#[test]
fn cell_counts_match_enumeration() {
  assert_eq!(num_cells(0).unwrap(), 122);
  assert_eq!(num_cells(1).unwrap(), 842);
  assert_eq!(cells_at_res(1).count() as i64, num_cells(1).unwrap());
}
