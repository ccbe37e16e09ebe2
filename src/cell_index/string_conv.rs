//! Hexadecimal string form of cell indexes.

use crate::types::{CellIndex, NULL_INDEX};

/// Parse the hexadecimal form of a cell index.
///
/// Returns [`NULL_INDEX`] when the string is empty or not valid
/// hexadecimal; mode 0 being reserved, the zero index can never collide
/// with a real cell.
#[must_use]
pub fn cell_from_string(s: &str) -> CellIndex {
  // from_str_radix tolerates a leading sign; only bare hex digits are
  // the canonical form
  if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
    return NULL_INDEX;
  }
  u64::from_str_radix(s, 16).map_or(NULL_INDEX, CellIndex)
}

/// The canonical lowercase hexadecimal form of a cell index.
#[must_use]
pub fn cell_to_string(h: CellIndex) -> String {
  format!("{:x}", h.0)
}

impl std::fmt::Display for CellIndex {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:x}", self.0)
  }
}

impl std::fmt::LowerHex for CellIndex {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    std::fmt::LowerHex::fmt(&self.0, f)
  }
}
