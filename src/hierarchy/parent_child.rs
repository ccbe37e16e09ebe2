//! Parent and child relationships along the aperture-7 hierarchy.

use crate::constants::MAX_GRID_RES;
use crate::iterators::CellChildren;
use crate::math::extensions::ipow;
use crate::types::{CellIndex, Digit, GridError};

/// Overwrite the digits from `start_res` through `end_res` (1-based, both
/// inclusive) with `Digit::Center`. No-op when the range is empty.
pub(crate) fn zero_digits(mut h: CellIndex, start_res: i32, end_res: i32) -> CellIndex {
  for r in start_res..=end_res {
    h = h.with_digit(r, Digit::Center);
  }
  h
}

impl CellIndex {
  fn has_child_at_res(self, child_res: i32) -> bool {
    (self.resolution()..=MAX_GRID_RES).contains(&child_res)
  }

  /// Produces the ancestor of this cell at `parent_res`. The same
  /// resolution returns the cell itself; a finer resolution is an error.
  pub fn parent_at(self, parent_res: i32) -> Result<CellIndex, GridError> {
    if !self.is_valid() {
      return Err(GridError::IndexInvalid);
    }
    let child_res = self.resolution();
    if !(0..=child_res).contains(&parent_res) {
      return Err(GridError::ResDomain);
    }
    if parent_res == child_res {
      return Ok(self);
    }

    let mut parent = self.with_resolution(parent_res);
    for r in (parent_res + 1)..=child_res {
      parent = parent.with_digit(r, Digit::Invalid);
    }
    Ok(parent)
  }

  /// The exact number of descendants of this cell at `child_res`. A cell
  /// is its own descendant at its own resolution.
  pub fn children_size(self, child_res: i32) -> Result<i64, GridError> {
    if !self.is_valid() {
      return Err(GridError::IndexInvalid);
    }
    if !self.has_child_at_res(child_res) {
      return Err(GridError::ResDomain);
    }

    let n = i64::from(child_res - self.resolution());
    if self.is_pentagon() {
      Ok(1 + 5 * (ipow(7, n) - 1) / 6)
    } else {
      Ok(ipow(7, n))
    }
  }

  /// The child of this cell at `child_res` reached through center digits
  /// only.
  pub fn center_child(self, child_res: i32) -> Result<CellIndex, GridError> {
    if !self.is_valid() {
      return Err(GridError::IndexInvalid);
    }
    if !self.has_child_at_res(child_res) {
      return Err(GridError::ResDomain);
    }

    let parent_res = self.resolution();
    Ok(zero_digits(self.with_resolution(child_res), parent_res + 1, child_res))
  }

  /// Lazily iterates the descendants of this cell at `child_res`, in
  /// index order. An invalid cell or out-of-range resolution yields an
  /// exhausted iterator.
  #[must_use]
  pub fn children(self, child_res: i32) -> CellChildren {
    CellChildren::new(self, child_res)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::indexing::geo_to_cell;
  use crate::types::{GeoPoint, NULL_INDEX};

  #[test]
  fn parent_of_known_cell() {
    let sf = GeoPoint::from_degrees(37.779, -122.419);
    let child = geo_to_cell(&sf, 10).unwrap();

    let parent9 = child.parent_at(9).unwrap();
    assert_eq!(parent9.resolution(), 9);
    assert_eq!(parent9.0, 0x89283082877ffff);

    let parent5 = child.parent_at(5).unwrap();
    assert_eq!(parent5.0, 0x85283083fffffff);

    assert_eq!(child.parent_at(10), Ok(child));
    assert_eq!(child.parent_at(11), Err(GridError::ResDomain));
    assert_eq!(child.parent_at(-1), Err(GridError::ResDomain));
    assert_eq!(NULL_INDEX.parent_at(5), Err(GridError::IndexInvalid));
  }

  #[test]
  fn children_counts() {
    let hex = CellIndex::pack(5, 10, Digit::Center);
    assert_eq!(hex.children_size(5), Ok(1));
    assert_eq!(hex.children_size(6), Ok(7));
    assert_eq!(hex.children_size(7), Ok(49));
    assert_eq!(hex.children_size(4), Err(GridError::ResDomain));

    let pent = CellIndex::pack(5, 4, Digit::Center);
    assert!(pent.is_pentagon());
    assert_eq!(pent.children_size(5), Ok(1));
    assert_eq!(pent.children_size(6), Ok(6));
    assert_eq!(pent.children_size(7), Ok(41));
  }

  #[test]
  fn center_child_preserves_coarse_digits() {
    let h = CellIndex::pack(5, 10, Digit::Ij);
    assert_eq!(h.center_child(5), Ok(h));

    let child = h.center_child(6).unwrap();
    assert_eq!(child.resolution(), 6);
    assert_eq!(child.digit(6), Digit::Center);
    for r in 1..=5 {
      assert_eq!(child.digit(r), h.digit(r));
    }

    let pent = CellIndex::pack(2, 4, Digit::Center);
    let pent_child = pent.center_child(4).unwrap();
    assert_eq!(pent_child.resolution(), 4);
    assert_eq!(pent_child.base_cell(), 4);
    assert!(pent_child.is_pentagon());
  }

  #[test]
  fn parent_of_every_child_is_self() {
    let parent = CellIndex::pack(2, 10, Digit::Center);
    for child in parent.children(4) {
      assert!(child.is_valid());
      assert_eq!(child.parent_at(2), Ok(parent));
    }
  }
}
