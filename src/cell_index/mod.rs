//! Bit-level cell index operations: field accessors, whole-index digit
//! rotations and the conversion between an index and its face coordinate.

pub mod inspection;
pub mod string_conv;

use crate::base_cells::{
  base_cell_home, base_cell_is_cw_offset, face_to_base_cell, face_to_base_cell_ccwrot60, is_base_cell_pentagon,
  INVALID_BASE_CELL, INVALID_ROTATIONS, MAX_FACE_COORD,
};
use crate::constants::{
  BASE_CELL_MASK, BASE_CELL_OFFSET, CELL_MODE, DIGIT_MASK, HIGH_BIT_MASK, INDEX_INIT, MAX_GRID_RES, MODE_MASK,
  MODE_OFFSET, PER_DIGIT_OFFSET, RESERVED_MASK, RESERVED_OFFSET, RES_MASK, RES_OFFSET,
};
use crate::coords::face_ijk::Overage;
use crate::types::{CellIndex, CubeCoord, Digit, FaceCoord, GridError};

pub use inspection::{num_cells, pentagon_count, pentagons, res0_cells};
pub use string_conv::{cell_from_string, cell_to_string};

/// Odd resolutions are Class III (axes rotated ~19.1 degrees against the
/// icosahedron); even resolutions are Class II.
#[inline]
#[must_use]
pub fn is_resolution_class_iii(res: i32) -> bool {
  res % 2 == 1
}

/// Decode a 3-bit digit field. The mask guarantees the range.
#[inline]
const fn digit_from_bits(bits: u64) -> Digit {
  match bits {
    0 => Digit::Center,
    1 => Digit::K,
    2 => Digit::J,
    3 => Digit::Jk,
    4 => Digit::I,
    5 => Digit::Ik,
    6 => Digit::Ij,
    _ => Digit::Invalid,
  }
}

impl CellIndex {
  /// The mode field of the index.
  #[inline]
  #[must_use]
  pub const fn mode(self) -> u8 {
    ((self.0 & MODE_MASK) >> MODE_OFFSET) as u8
  }

  /// The resolution field of the index.
  #[inline]
  #[must_use]
  pub const fn resolution(self) -> i32 {
    ((self.0 & RES_MASK) >> RES_OFFSET) as i32
  }

  /// The base cell field of the index.
  #[inline]
  #[must_use]
  pub const fn base_cell(self) -> i32 {
    ((self.0 & BASE_CELL_MASK) >> BASE_CELL_OFFSET) as i32
  }

  /// The digit at a given resolution level, 1-based up to
  /// [`CellIndex::resolution`].
  #[inline]
  #[must_use]
  pub const fn digit(self, res: i32) -> Digit {
    let shift = (MAX_GRID_RES - res) * PER_DIGIT_OFFSET as i32;
    digit_from_bits((self.0 >> shift) & DIGIT_MASK)
  }

  #[inline]
  pub(crate) const fn reserved_bits(self) -> u8 {
    ((self.0 & RESERVED_MASK) >> RESERVED_OFFSET) as u8
  }

  #[inline]
  pub(crate) const fn high_bit(self) -> u8 {
    ((self.0 & HIGH_BIT_MASK) >> 63) as u8
  }

  #[inline]
  #[must_use]
  pub const fn with_mode(self, mode: u8) -> CellIndex {
    CellIndex((self.0 & !MODE_MASK) | ((mode as u64) << MODE_OFFSET))
  }

  #[inline]
  #[must_use]
  pub const fn with_resolution(self, res: i32) -> CellIndex {
    CellIndex((self.0 & !RES_MASK) | ((res as u64) << RES_OFFSET))
  }

  #[inline]
  #[must_use]
  pub const fn with_base_cell(self, base_cell: i32) -> CellIndex {
    CellIndex((self.0 & !BASE_CELL_MASK) | ((base_cell as u64) << BASE_CELL_OFFSET))
  }

  #[inline]
  #[must_use]
  pub const fn with_digit(self, res: i32, digit: Digit) -> CellIndex {
    let shift = (MAX_GRID_RES - res) * PER_DIGIT_OFFSET as i32;
    CellIndex((self.0 & !(DIGIT_MASK << shift)) | ((digit as u64) << shift))
  }

  #[inline]
  #[must_use]
  pub const fn with_reserved_bits(self, bits: u8) -> CellIndex {
    CellIndex((self.0 & !RESERVED_MASK) | ((bits as u64) << RESERVED_OFFSET))
  }

  /// Build a cell-mode index with the given resolution and base cell and
  /// every digit up to `res` set to `init_digit`; the remaining digit
  /// slots keep the 7 sentinel from the seed pattern.
  #[must_use]
  pub fn pack(res: i32, base_cell: i32, init_digit: Digit) -> CellIndex {
    let mut h = CellIndex(INDEX_INIT)
      .with_mode(CELL_MODE)
      .with_resolution(res)
      .with_base_cell(base_cell);
    for r in 1..=res {
      h = h.with_digit(r, init_digit);
    }
    h
  }

  /// The coarsest non-center digit, or `Center` if every digit is.
  #[must_use]
  pub(crate) fn leading_non_zero_digit(self) -> Digit {
    let res = self.resolution();
    for r in 1..=res {
      let digit = self.digit(r);
      if digit != Digit::Center {
        return digit;
      }
    }
    Digit::Center
  }

  /// Rotate the index 60 degrees counter-clockwise by rotating every
  /// digit.
  #[must_use]
  pub(crate) fn rotate60_ccw(self) -> CellIndex {
    let mut h = self;
    for r in 1..=self.resolution() {
      h = h.with_digit(r, h.digit(r).rotate60_ccw());
    }
    h
  }

  /// Rotate the index 60 degrees clockwise.
  #[must_use]
  pub(crate) fn rotate60_cw(self) -> CellIndex {
    let mut h = self;
    for r in 1..=self.resolution() {
      h = h.with_digit(r, h.digit(r).rotate60_cw());
    }
    h
  }

  /// Rotate the index 60 degrees counter-clockwise about a pentagonal
  /// center. If the rotation leaves the leading digit on the deleted K
  /// axis, the whole index is rotated once more.
  #[must_use]
  pub(crate) fn rotate_pent60_ccw(self) -> CellIndex {
    let mut h = self;
    let mut found_leading = false;
    for r in 1..=self.resolution() {
      h = h.with_digit(r, h.digit(r).rotate60_ccw());
      if !found_leading && h.digit(r) != Digit::Center {
        found_leading = true;
        if h.leading_non_zero_digit() == Digit::K {
          h = h.rotate60_ccw();
        }
      }
    }
    h
  }

  /// Rotate the index 60 degrees clockwise about a pentagonal center.
  #[must_use]
  pub(crate) fn rotate_pent60_cw(self) -> CellIndex {
    let mut h = self;
    let mut found_leading = false;
    for r in 1..=self.resolution() {
      h = h.with_digit(r, h.digit(r).rotate60_cw());
      if !found_leading && h.digit(r) != Digit::Center {
        found_leading = true;
        if h.leading_non_zero_digit() == Digit::K {
          h = h.rotate60_cw();
        }
      }
    }
    h
  }

  /// Encode a face coordinate at the given resolution.
  ///
  /// Ascends one aperture-7 level per resolution, reading off the child
  /// digit at each step, then resolves the residual res-0 coordinate to a
  /// base cell and rotates the digit string into the base cell's frame.
  pub(crate) fn from_face_coord(fijk: &FaceCoord, res: i32) -> Result<CellIndex, GridError> {
    let mut h = CellIndex(INDEX_INIT).with_mode(CELL_MODE).with_resolution(res);

    if res == 0 {
      if fijk.coord.i > MAX_FACE_COORD || fijk.coord.j > MAX_FACE_COORD || fijk.coord.k > MAX_FACE_COORD {
        return Err(GridError::Unrepresentable);
      }
      let base_cell = face_to_base_cell(fijk);
      if base_cell == INVALID_BASE_CELL {
        return Err(GridError::Unrepresentable);
      }
      return Ok(h.with_base_cell(base_cell));
    }

    let mut coord = fijk.coord;
    for r in (1..=res).rev() {
      let last = coord;
      let center = if is_resolution_class_iii(r) {
        coord = coord.up_ap7();
        coord.down_ap7()
      } else {
        coord = coord.up_ap7r();
        coord.down_ap7r()
      };
      let digit = last.sub(center).digit();
      if digit == Digit::Invalid {
        return Err(GridError::Unrepresentable);
      }
      h = h.with_digit(r, digit);
    }

    // coord is now the res-0 address on the original face
    if coord.i > MAX_FACE_COORD || coord.j > MAX_FACE_COORD || coord.k > MAX_FACE_COORD {
      return Err(GridError::Unrepresentable);
    }
    let res0_fijk = FaceCoord::new(fijk.face, coord);

    let base_cell = face_to_base_cell(&res0_fijk);
    if base_cell == INVALID_BASE_CELL {
      return Err(GridError::Unrepresentable);
    }
    h = h.with_base_cell(base_cell);

    let num_rots = face_to_base_cell_ccwrot60(&res0_fijk);
    if num_rots == INVALID_ROTATIONS {
      return Err(GridError::Unrepresentable);
    }

    if is_base_cell_pentagon(base_cell) {
      // rotate out of the deleted K subsequence
      if h.leading_non_zero_digit() == Digit::K {
        if base_cell_is_cw_offset(base_cell, res0_fijk.face) {
          h = h.rotate60_cw();
        } else {
          h = h.rotate60_ccw();
        }
      }
      for _ in 0..num_rots {
        h = h.rotate_pent60_ccw();
      }
    } else {
      for _ in 0..num_rots {
        h = h.rotate60_ccw();
      }
    }
    Ok(h)
  }

  /// The canonical face coordinate of this cell's center.
  pub(crate) fn to_face_coord(self) -> Result<FaceCoord, GridError> {
    let base_cell = self.base_cell();
    let Some(home) = base_cell_home(base_cell) else {
      return Err(GridError::IndexInvalid);
    };

    // a pentagon with a leading IK digit addresses through the deleted
    // subsequence; rotate it out first
    let mut h = self;
    if is_base_cell_pentagon(base_cell) && h.leading_non_zero_digit() == Digit::Ik {
      h = h.rotate60_cw();
    }

    let (fijk, possible_overage) = h.to_face_coord_on(home);
    if !possible_overage {
      return Ok(fijk);
    }

    let res = self.resolution();
    let orig_coord = fijk.coord;

    // overage is resolved on a Class II grid
    let mut adj_fijk = fijk;
    let mut adj_res = res;
    if is_resolution_class_iii(res) {
      adj_fijk = FaceCoord::new(adj_fijk.face, adj_fijk.coord.down_ap7r());
      adj_res += 1;
    }

    let pent_leading_4 = is_base_cell_pentagon(base_cell) && h.leading_non_zero_digit() == Digit::I;

    let (mut adjusted, mut overage) = adj_fijk.adjust_overage_class_ii(adj_res, pent_leading_4, false);

    if overage != Overage::NoOverage {
      if is_base_cell_pentagon(base_cell) {
        // secondary overages around the pentagon's icosahedron vertex;
        // a valid index settles within a few folds
        let mut folds = 0;
        while overage == Overage::NewFace {
          if folds == 4 {
            return Err(GridError::Unrepresentable);
          }
          let (next, next_overage) = adjusted.adjust_overage_class_ii(adj_res, false, false);
          adjusted = next;
          overage = next_overage;
          folds += 1;
        }
      }
      if adj_res != res {
        adjusted = FaceCoord::new(adjusted.face, adjusted.coord.up_ap7r());
      }
      Ok(adjusted)
    } else if adj_res != res {
      Ok(FaceCoord::new(fijk.face, orig_coord))
    } else {
      Ok(fijk)
    }
  }

  /// Apply this index's digits starting from the given res-0 coordinate.
  /// Returns the resulting coordinate on the starting face and whether
  /// the cell might extend past that face's edge.
  fn to_face_coord_on(self, start: FaceCoord) -> (FaceCoord, bool) {
    let res = self.resolution();
    let base_cell = self.base_cell();

    // a hexagon centered on its home face at res 0 cannot overflow
    let possible_overage = is_base_cell_pentagon(base_cell)
      || !(res == 0 || start.coord == CubeCoord::new(0, 0, 0));

    let mut coord = start.coord;
    for r in 1..=res {
      coord = if is_resolution_class_iii(r) {
        coord.down_ap7()
      } else {
        coord.down_ap7r()
      };
      coord = coord.neighbor(self.digit(r));
    }
    (FaceCoord::new(start.face, coord), possible_overage)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::NUM_BASE_CELLS;
  use crate::types::NULL_INDEX;

  #[test]
  fn field_accessors_round_trip() {
    let mut h = NULL_INDEX;
    for mode in 0..=15u8 {
      h = h.with_mode(mode);
      assert_eq!(h.mode(), mode);
    }
    for res in 0..=MAX_GRID_RES {
      h = h.with_resolution(res);
      assert_eq!(h.resolution(), res);
    }
    for bc in 0..NUM_BASE_CELLS {
      h = h.with_base_cell(bc);
      assert_eq!(h.base_cell(), bc);
    }
    for bits in 0..=0b111u8 {
      h = h.with_reserved_bits(bits);
      assert_eq!(h.reserved_bits(), bits);
    }
  }

  #[test]
  fn digit_accessors_round_trip() {
    let mut h = NULL_INDEX.with_resolution(MAX_GRID_RES);
    for r in 1..=MAX_GRID_RES {
      for digit in Digit::VALID {
        h = h.with_digit(r, digit);
        assert_eq!(h.digit(r), digit);
      }
    }
  }

  #[test]
  fn pack_matches_known_literal() {
    let h = CellIndex::pack(5, 12, Digit::K);
    assert_eq!(h.mode(), CELL_MODE);
    assert_eq!(h.resolution(), 5);
    assert_eq!(h.base_cell(), 12);
    for r in 1..=5 {
      assert_eq!(h.digit(r), Digit::K);
    }
    for r in 6..=MAX_GRID_RES {
      assert_eq!(h.digit(r), Digit::Invalid);
    }
    assert_eq!(h, CellIndex(0x85184927fffffff));
  }

  #[test]
  fn class_iii_parity() {
    assert!(!is_resolution_class_iii(0));
    assert!(is_resolution_class_iii(1));
    assert!(!is_resolution_class_iii(2));
    assert!(is_resolution_class_iii(15));
  }

  #[test]
  fn leading_non_zero_digit_scan() {
    let mut h = CellIndex::pack(5, 0, Digit::Center);
    assert_eq!(h.leading_non_zero_digit(), Digit::Center);

    h = h.with_digit(3, Digit::J);
    assert_eq!(h.leading_non_zero_digit(), Digit::J);

    h = h.with_digit(1, Digit::K);
    assert_eq!(h.leading_non_zero_digit(), Digit::K);
  }

  #[test]
  fn whole_index_rotations() {
    let h_i = CellIndex::pack(1, 0, Digit::I);
    let h_ij = CellIndex::pack(1, 0, Digit::Ij);
    let h_ik = CellIndex::pack(1, 0, Digit::Ik);

    assert_eq!(h_i.rotate60_ccw(), h_ij);
    assert_eq!(h_i.rotate60_cw(), h_ik);

    // six rotations return to the start
    let mut h = h_i;
    for _ in 0..6 {
      h = h.rotate60_ccw();
    }
    assert_eq!(h, h_i);
  }

  #[test]
  fn pent60_rotation_skips_k_axis() {
    // J ccw would land on JK, no K involvement
    let h_j = CellIndex::pack(1, 14, Digit::J);
    assert_eq!(h_j.rotate_pent60_ccw(), CellIndex::pack(1, 14, Digit::Jk));

    // IK ccw lands on I, never on K
    let h_ik = CellIndex::pack(1, 14, Digit::Ik);
    assert_ne!(h_ik.rotate_pent60_ccw().leading_non_zero_digit(), Digit::K);
  }

  #[test]
  fn face_coord_round_trip_res0() {
    for face in 0..crate::constants::NUM_ICOSA_FACES {
      for i in 0..=MAX_FACE_COORD {
        for j in 0..=MAX_FACE_COORD {
          for k in 0..=MAX_FACE_COORD {
            let fijk = FaceCoord::new(face, CubeCoord::new(i, j, k));
            if face_to_base_cell(&fijk) == INVALID_BASE_CELL {
              continue;
            }
            let h = CellIndex::from_face_coord(&fijk, 0).unwrap();
            let bc = h.base_cell();
            assert!(bc >= 0 && bc < NUM_BASE_CELLS);

            // decoding lands on the base cell's canonical home
            let decoded = h.to_face_coord().unwrap();
            let home = base_cell_home(bc).unwrap();
            assert_eq!(decoded, home, "fijk {fijk:?}");
          }
        }
      }
    }
  }

  #[test]
  fn base_cell_4_home_encodes_to_pentagon() {
    let home = base_cell_home(4).unwrap();
    let h = CellIndex::from_face_coord(&home, 0).unwrap();
    assert_eq!(h.base_cell(), 4);
  }

  #[test]
  fn encode_decode_round_trip_finer_res() {
    // walk the res-2 descendants of a hexagon and a pentagon base cell
    for bc in [0, 4, 15] {
      let Some(home) = base_cell_home(bc) else { continue };
      let parent = CellIndex::from_face_coord(&home, 0).unwrap();
      for res in [1, 2] {
        let mut child = parent.with_resolution(res);
        for r in 1..=res {
          child = child.with_digit(r, Digit::Center);
        }
        let fijk = child.to_face_coord().unwrap();
        let round = CellIndex::from_face_coord(&fijk, res).unwrap();
        assert_eq!(round, child, "bc {bc} res {res}");
      }
    }
  }

  #[test]
  fn overage_decode_lands_on_neighbor_face() {
    // a coordinate past face 0's edge encodes through a neighboring
    // face's base cell and must decode back to the same index
    let fijk = FaceCoord::new(0, CubeCoord::new(2, 2, 1));
    let h = CellIndex::from_face_coord(&fijk, 0).unwrap();
    let decoded = h.to_face_coord().unwrap();
    let home = base_cell_home(h.base_cell()).unwrap();
    assert_eq!(decoded, home);
  }
}
