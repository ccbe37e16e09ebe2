//! Lazy iterators over cell children and whole resolutions.
//!
//! Both iterators walk the index space in increasing numeric order by
//! incrementing the finest digit and cascading rollovers toward the
//! coarser digits, skipping the deleted K subsequence under pentagons.

use crate::constants::{MAX_GRID_RES, NUM_BASE_CELLS};
use crate::types::{CellIndex, Digit};

/// Iterates the descendants of one parent cell at a fixed resolution.
///
/// Construct with [`CellIndex::children`]. Cloning before the first call
/// to `next` yields a restartable copy.
#[derive(Debug, Clone, Copy)]
pub struct CellChildren {
  current: Option<CellIndex>,
  parent_res: i32,
  // finest digit position still responsible for skipping K; walks toward
  // the coarser digits as the iteration crosses each pentagon boundary
  skip_res: i32,
}

impl CellChildren {
  pub(crate) fn new(parent: CellIndex, child_res: i32) -> CellChildren {
    match parent.center_child(child_res) {
      Ok(first) => CellChildren {
        current: Some(first),
        parent_res: parent.resolution(),
        skip_res: if parent.is_pentagon() { child_res } else { -1 },
      },
      Err(_) => CellChildren {
        current: None,
        parent_res: -1,
        skip_res: -1,
      },
    }
  }

  /// Increment the digit at `r`, cascading rollovers toward the parent.
  /// Returns `None` once the cascade crosses the parent resolution.
  fn increment(&self, mut h: CellIndex, mut r: i32) -> Option<CellIndex> {
    loop {
      if r <= self.parent_res {
        return None;
      }
      let next = h.digit(r) as u8 + 1;
      if next >= Digit::Invalid as u8 {
        if r == self.parent_res + 1 {
          return None;
        }
        h = h.with_digit(r, Digit::Center);
        r -= 1;
      } else {
        return Some(h.with_digit(r, Digit::try_from(next).unwrap_or(Digit::Invalid)));
      }
    }
  }

  fn step(&mut self, h: CellIndex) -> Option<CellIndex> {
    let child_res = h.resolution();
    let mut next = self.increment(h, child_res)?;

    if self.skip_res > self.parent_res && next.digit(self.skip_res) == Digit::K {
      next = self.increment(next, self.skip_res)?;
      self.skip_res -= 1;
    }
    Some(next)
  }
}

impl Iterator for CellChildren {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    let current = self.current?;
    self.current = self.step(current);
    Some(current)
  }
}

/// Iterates every cell at one resolution, base cell by base cell.
#[derive(Debug, Clone, Copy)]
pub struct CellsAtRes {
  base_cell: i32,
  res: i32,
  children: CellChildren,
}

/// Lazily iterates all cells at the given resolution in index order. An
/// out-of-range resolution yields an exhausted iterator.
#[must_use]
pub fn cells_at_res(res: i32) -> CellsAtRes {
  if !(0..=MAX_GRID_RES).contains(&res) {
    return CellsAtRes {
      base_cell: NUM_BASE_CELLS,
      res,
      children: CellChildren::new(crate::types::NULL_INDEX, 0),
    };
  }
  CellsAtRes {
    base_cell: 0,
    res,
    children: CellChildren::new(CellIndex::pack(0, 0, Digit::Center), res),
  }
}

impl Iterator for CellsAtRes {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    loop {
      if let Some(h) = self.children.next() {
        return Some(h);
      }
      self.base_cell += 1;
      if self.base_cell >= NUM_BASE_CELLS {
        return None;
      }
      self.children = CellChildren::new(CellIndex::pack(0, self.base_cell, Digit::Center), self.res);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell_index::num_cells;

  #[test]
  fn exhausted_on_invalid_input() {
    let parent = CellIndex(0x85283473fffffff);
    assert_eq!(parent.children(4).next(), None);
    assert_eq!(parent.children(MAX_GRID_RES + 1).next(), None);
    assert_eq!(crate::types::NULL_INDEX.children(5).next(), None);
    assert_eq!(cells_at_res(-1).next(), None);
    assert_eq!(cells_at_res(16).next(), None);
  }

  #[test]
  fn hexagon_children_complete_and_ordered() {
    let parent = CellIndex(0x85283473fffffff);
    let child_res = 7;
    let expected = parent.children_size(child_res).unwrap();

    let mut count = 0i64;
    let mut prev: Option<CellIndex> = None;
    for child in parent.children(child_res) {
      assert_eq!(child.resolution(), child_res);
      assert_eq!(child.parent_at(5), Ok(parent));
      if let Some(p) = prev {
        assert!(child.0 > p.0);
      }
      prev = Some(child);
      count += 1;
    }
    assert_eq!(count, expected);
  }

  #[test]
  fn pentagon_children_skip_deleted_subsequence() {
    let parent = CellIndex::pack(0, 4, Digit::Center);
    assert!(parent.is_pentagon());
    let child_res = 2;

    let children: Vec<CellIndex> = parent.children(child_res).collect();
    assert_eq!(children.len() as i64, parent.children_size(child_res).unwrap());
    assert_eq!(children.len(), 41);
    for child in children {
      assert!(child.is_valid(), "{child:x}");
      assert_eq!(child.parent_at(0), Ok(parent));
    }
  }

  #[test]
  fn iterator_restarts_from_clone() {
    let parent = CellIndex(0x85283473fffffff);
    let fresh = parent.children(6);
    let first_pass: Vec<CellIndex> = fresh.collect();
    let second_pass: Vec<CellIndex> = parent.children(6).collect();
    assert_eq!(first_pass, second_pass);
  }

  #[test]
  fn all_cells_at_low_resolutions() {
    for res in 0..=2 {
      let expected = num_cells(res).unwrap();
      let mut count = 0i64;
      let mut prev: Option<CellIndex> = None;
      for h in cells_at_res(res) {
        assert_eq!(h.resolution(), res);
        assert!(h.is_valid());
        if let Some(p) = prev {
          assert!(h.0 > p.0);
        }
        prev = Some(h);
        count += 1;
      }
      assert_eq!(count, expected, "res {res}");
    }
  }
}
