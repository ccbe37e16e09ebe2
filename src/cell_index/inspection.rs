//! Structural validation and per-resolution cell counts.

use crate::base_cells::is_base_cell_pentagon;
use crate::constants::{CELL_MODE, MAX_GRID_RES, NUM_BASE_CELLS, NUM_PENTAGONS, PER_DIGIT_OFFSET};
use crate::math::extensions::ipow;
use crate::types::{CellIndex, Digit, GridError};

impl CellIndex {
  /// Validate the structure of this index: cell mode, zero high and
  /// reserved bits, in-range resolution and base cell, no digit 7 at or
  /// above the resolution, all digit 7 below it, and no deleted-K
  /// subsequence under a pentagon base cell.
  #[must_use]
  pub fn is_valid(self) -> bool {
    if self.high_bit() != 0 || self.mode() != CELL_MODE || self.reserved_bits() != 0 {
      return false;
    }

    let res = self.resolution();
    let base_cell = self.base_cell();
    if base_cell >= NUM_BASE_CELLS {
      return false;
    }

    for r in 1..=res {
      if self.digit(r) == Digit::Invalid {
        return false;
      }
    }

    // unused digit slots must hold the 7 sentinel
    let unused_bits = (MAX_GRID_RES - res) * PER_DIGIT_OFFSET as i32;
    if unused_bits > 0 {
      let mask = (1u64 << unused_bits) - 1;
      if self.0 & mask != mask {
        return false;
      }
    }

    if is_base_cell_pentagon(base_cell) && self.leading_non_zero_digit() == Digit::K {
      return false;
    }

    true
  }

  /// Whether this index addresses a pentagonal cell: a pentagon base
  /// cell descended through center digits only.
  #[must_use]
  pub fn is_pentagon(self) -> bool {
    self.is_valid() && is_base_cell_pentagon(self.base_cell()) && self.leading_non_zero_digit() == Digit::Center
  }

  /// Whether this index's resolution is Class III (odd).
  #[must_use]
  pub fn is_class_iii(self) -> bool {
    super::is_resolution_class_iii(self.resolution())
  }
}

/// Number of unique cells at the given resolution: `2 + 120 * 7^res`.
pub fn num_cells(res: i32) -> Result<i64, GridError> {
  if !(0..=MAX_GRID_RES).contains(&res) {
    return Err(GridError::ResDomain);
  }
  Ok(2 + 120 * ipow(7, i64::from(res)))
}

/// Number of pentagonal cells at every resolution.
#[must_use]
pub fn pentagon_count() -> i32 {
  NUM_PENTAGONS
}

/// All 122 resolution-0 cells, in base cell order.
#[must_use]
pub fn res0_cells() -> [CellIndex; NUM_BASE_CELLS as usize] {
  let mut cells = [CellIndex::default(); NUM_BASE_CELLS as usize];
  for (bc, cell) in cells.iter_mut().enumerate() {
    *cell = CellIndex::pack(0, bc as i32, Digit::Center);
  }
  cells
}

/// The 12 pentagonal cells at the given resolution, in base cell order.
pub fn pentagons(res: i32) -> Result<[CellIndex; NUM_PENTAGONS as usize], GridError> {
  if !(0..=MAX_GRID_RES).contains(&res) {
    return Err(GridError::ResDomain);
  }
  let mut out = [CellIndex::default(); NUM_PENTAGONS as usize];
  let mut n = 0;
  for bc in 0..NUM_BASE_CELLS {
    if is_base_cell_pentagon(bc) {
      let base = CellIndex::pack(0, bc, Digit::Center);
      out[n] = base.center_child(res)?;
      n += 1;
    }
  }
  debug_assert_eq!(n, NUM_PENTAGONS as usize);
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::NUM_CELLS_MAX_RES;
  use crate::types::NULL_INDEX;

  #[test]
  fn valid_across_resolutions() {
    for res in 0..=MAX_GRID_RES {
      let h = CellIndex::pack(res, 0, Digit::Center);
      assert!(h.is_valid(), "res {res}");
    }
  }

  #[test]
  fn valid_across_base_cells() {
    for bc in 0..NUM_BASE_CELLS {
      let h = CellIndex::pack(0, bc, Digit::Center);
      assert!(h.is_valid(), "base cell {bc}");
      assert_eq!(h.base_cell(), bc);
    }
  }

  #[test]
  fn invalid_structures_rejected() {
    assert!(!NULL_INDEX.is_valid());

    // base cell out of range
    assert!(!CellIndex::pack(0, NUM_BASE_CELLS, Digit::Center).is_valid());

    // digit 7 within the used range
    let h = CellIndex::pack(1, 0, Digit::Center).with_digit(1, Digit::Invalid);
    assert!(!h.is_valid());

    // unused digit not 7
    assert!(!CellIndex::pack(0, 0, Digit::Center).with_digit(5, Digit::Center).is_valid());

    // wrong mode
    for mode in (0..=15u8).filter(|&m| m != CELL_MODE) {
      assert!(!CellIndex::pack(0, 0, Digit::Center).with_mode(mode).is_valid());
    }

    // reserved bits set
    assert!(!CellIndex::pack(0, 0, Digit::Center).with_reserved_bits(1).is_valid());
  }

  #[test]
  fn deleted_k_subsequence_rejected() {
    // base cell 4 is a pentagon; a leading K digit is unaddressable
    assert!(!CellIndex::pack(1, 4, Digit::K).is_valid());
    assert!(CellIndex::pack(1, 4, Digit::J).is_valid());
    // leading K under a hexagon base cell is fine
    assert!(CellIndex::pack(1, 0, Digit::K).is_valid());
  }

  #[test]
  fn pentagon_detection() {
    assert!(CellIndex::pack(0, 4, Digit::Center).is_pentagon());
    assert!(CellIndex::pack(3, 117, Digit::Center).is_pentagon());
    // non-center descendant of a pentagon base cell is a hexagon
    assert!(!CellIndex::pack(1, 4, Digit::J).is_pentagon());
    assert!(!CellIndex::pack(2, 0, Digit::Center).is_pentagon());
    assert!(!NULL_INDEX.is_pentagon());
  }

  #[test]
  fn cell_counts() {
    assert_eq!(num_cells(0), Ok(122));
    assert_eq!(num_cells(1), Ok(842));
    assert_eq!(num_cells(15), Ok(NUM_CELLS_MAX_RES));
    assert_eq!(num_cells(-1), Err(GridError::ResDomain));
    assert_eq!(num_cells(16), Err(GridError::ResDomain));
  }

  #[test]
  fn res0_cells_enumerate_base_cells() {
    let cells = res0_cells();
    for (bc, &h) in cells.iter().enumerate() {
      assert!(h.is_valid());
      assert_eq!(h.resolution(), 0);
      assert_eq!(h.base_cell(), bc as i32);
    }
  }

  #[test]
  fn pentagons_at_resolution() {
    for res in [0, 5, 15] {
      let pents = pentagons(res).unwrap();
      for h in pents {
        assert!(h.is_pentagon(), "{h:x} at res {res}");
        assert_eq!(h.resolution(), res);
      }
    }
    assert_eq!(pentagons(16).unwrap_err(), GridError::ResDomain);
  }
}
