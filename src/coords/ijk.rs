//! Integer hex-cube lattice algebra.
//!
//! Every geometric operation that produces a new coordinate ends by
//! normalizing, so results are always in canonical form (all components
//! non-negative, at least one zero). Raw arithmetic (`add`, `sub`,
//! `scale`) deliberately does not normalize.

use crate::constants::{M_RSIN60, M_SQRT3_2};
use crate::types::{CubeCoord, Digit, Vec2d};

/// Unit vectors for the seven digits, indexed by `Digit as usize`.
#[rustfmt::skip]
pub const UNIT_VECS: [CubeCoord; 7] = [
  CubeCoord::new(0, 0, 0), // Center
  CubeCoord::new(0, 0, 1), // K
  CubeCoord::new(0, 1, 0), // J
  CubeCoord::new(0, 1, 1), // Jk
  CubeCoord::new(1, 0, 0), // I
  CubeCoord::new(1, 0, 1), // Ik
  CubeCoord::new(1, 1, 0), // Ij
];

impl CubeCoord {
  /// Componentwise sum. Does not normalize.
  #[inline]
  #[must_use]
  pub fn add(self, other: CubeCoord) -> CubeCoord {
    CubeCoord::new(self.i + other.i, self.j + other.j, self.k + other.k)
  }

  /// Componentwise difference. Does not normalize.
  #[inline]
  #[must_use]
  pub fn sub(self, other: CubeCoord) -> CubeCoord {
    CubeCoord::new(self.i - other.i, self.j - other.j, self.k - other.k)
  }

  /// Scalar multiple. Does not normalize.
  #[inline]
  #[must_use]
  pub fn scale(self, factor: i32) -> CubeCoord {
    CubeCoord::new(self.i * factor, self.j * factor, self.k * factor)
  }

  /// Canonical form: clear negative components by transferring the
  /// deficit onto the other two axes (i, then j, then k order), then
  /// subtract the common minimum. Idempotent.
  #[must_use]
  pub fn normalize(self) -> CubeCoord {
    let CubeCoord { mut i, mut j, mut k } = self;

    if i < 0 {
      j -= i;
      k -= i;
      i = 0;
    }
    if j < 0 {
      i -= j;
      k -= j;
      j = 0;
    }
    if k < 0 {
      i -= k;
      j -= k;
      k = 0;
    }

    let min = i.min(j).min(k);
    if min > 0 {
      i -= min;
      j -= min;
      k -= min;
    }
    CubeCoord::new(i, j, k)
  }

  /// The digit whose unit vector equals this coordinate after
  /// normalization, or [`Digit::Invalid`] if none matches.
  #[must_use]
  pub fn digit(self) -> Digit {
    let c = self.normalize();
    for d in Digit::VALID {
      if UNIT_VECS[d as usize] == c {
        return d;
      }
    }
    Digit::Invalid
  }

  /// The neighboring coordinate in the given digit direction.
  #[must_use]
  pub fn neighbor(self, digit: Digit) -> CubeCoord {
    if digit == Digit::Center || digit == Digit::Invalid {
      return self;
    }
    self.add(UNIT_VECS[digit as usize]).normalize()
  }

  /// Lattice distance: the largest absolute component of the normalized
  /// difference. Zero iff equal, symmetric, satisfies the triangle
  /// inequality.
  #[must_use]
  pub fn distance(self, other: CubeCoord) -> i32 {
    let diff = self.sub(other).normalize();
    diff.i.abs().max(diff.j.abs()).max(diff.k.abs())
  }

  /// Rotate 60 degrees counter-clockwise.
  #[must_use]
  pub fn rotate60_ccw(self) -> CubeCoord {
    let i_vec = CubeCoord::new(1, 1, 0).scale(self.i);
    let j_vec = CubeCoord::new(0, 1, 1).scale(self.j);
    let k_vec = CubeCoord::new(1, 0, 1).scale(self.k);
    i_vec.add(j_vec).add(k_vec).normalize()
  }

  /// Rotate 60 degrees clockwise.
  #[must_use]
  pub fn rotate60_cw(self) -> CubeCoord {
    let i_vec = CubeCoord::new(1, 0, 1).scale(self.i);
    let j_vec = CubeCoord::new(1, 1, 0).scale(self.j);
    let k_vec = CubeCoord::new(0, 1, 1).scale(self.k);
    i_vec.add(j_vec).add(k_vec).normalize()
  }

  /// Coarsen one aperture-7 level, counter-clockwise orientation.
  ///
  /// The linear map divides by 7 and rounds to nearest; it is only valid
  /// on coordinates that are exact multiples of a parent offset by
  /// construction (encode ascent, overage reversal). Round-trip tests
  /// assert that precondition.
  #[must_use]
  pub fn up_ap7(self) -> CubeCoord {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);

    #[allow(clippy::cast_possible_truncation)]
    let new_i = ((3.0 * i - j) / 7.0).round() as i32;
    #[allow(clippy::cast_possible_truncation)]
    let new_j = ((i + 2.0 * j) / 7.0).round() as i32;
    CubeCoord::new(new_i, new_j, 0).normalize()
  }

  /// Coarsen one aperture-7 level, clockwise orientation. Same
  /// precondition as [`CubeCoord::up_ap7`].
  #[must_use]
  pub fn up_ap7r(self) -> CubeCoord {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);

    #[allow(clippy::cast_possible_truncation)]
    let new_i = ((2.0 * i + j) / 7.0).round() as i32;
    #[allow(clippy::cast_possible_truncation)]
    let new_j = ((3.0 * j - i) / 7.0).round() as i32;
    CubeCoord::new(new_i, new_j, 0).normalize()
  }

  /// Refine one aperture-7 level, counter-clockwise orientation. Exact.
  #[must_use]
  pub fn down_ap7(self) -> CubeCoord {
    let i_vec = CubeCoord::new(3, 0, 1).scale(self.i);
    let j_vec = CubeCoord::new(1, 3, 0).scale(self.j);
    let k_vec = CubeCoord::new(0, 1, 3).scale(self.k);
    i_vec.add(j_vec).add(k_vec).normalize()
  }

  /// Refine one aperture-7 level, clockwise orientation. Exact.
  #[must_use]
  pub fn down_ap7r(self) -> CubeCoord {
    let i_vec = CubeCoord::new(3, 1, 0).scale(self.i);
    let j_vec = CubeCoord::new(0, 3, 1).scale(self.j);
    let k_vec = CubeCoord::new(1, 0, 3).scale(self.k);
    i_vec.add(j_vec).add(k_vec).normalize()
  }

  /// Refine one aperture-3 level, counter-clockwise orientation. Used
  /// only on the boundary substrate grid.
  #[must_use]
  pub fn down_ap3(self) -> CubeCoord {
    let i_vec = CubeCoord::new(2, 0, 1).scale(self.i);
    let j_vec = CubeCoord::new(1, 2, 0).scale(self.j);
    let k_vec = CubeCoord::new(0, 1, 2).scale(self.k);
    i_vec.add(j_vec).add(k_vec).normalize()
  }

  /// Refine one aperture-3 level, clockwise orientation. Used only on
  /// the boundary substrate grid.
  #[must_use]
  pub fn down_ap3r(self) -> CubeCoord {
    let i_vec = CubeCoord::new(2, 1, 0).scale(self.i);
    let j_vec = CubeCoord::new(0, 2, 1).scale(self.j);
    let k_vec = CubeCoord::new(1, 0, 2).scale(self.k);
    i_vec.add(j_vec).add(k_vec).normalize()
  }

  /// Embed the coordinate in the face-local 2D plane.
  #[must_use]
  pub fn to_plane(self) -> Vec2d {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    Vec2d {
      x: i - 0.5 * j,
      y: j * M_SQRT3_2,
    }
  }

  /// Quantize a 2D plane point to the containing cell's coordinate.
  ///
  /// The case split on fractional remainders resolves edge and vertex
  /// ties deterministically; exact cell centers reproduce their
  /// coordinate exactly.
  #[must_use]
  #[allow(clippy::cast_possible_truncation)]
  pub fn from_plane(v: Vec2d) -> CubeCoord {
    let a1 = v.x.abs();
    let a2 = v.y.abs();

    // reverse the plane embedding in the first quadrant
    let x2 = a2 * M_RSIN60;
    let x1 = a1 + x2 / 2.0;

    let m1 = x1 as i32;
    let m2 = x2 as i32;
    let r1 = x1 - f64::from(m1);
    let r2 = x2 - f64::from(m2);

    let mut i;
    let mut j;
    if r1 < 0.5 {
      if r1 < 1.0 / 3.0 {
        i = m1;
        j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
      } else {
        j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
        i = if (1.0 - r1) <= r2 && r2 < (2.0 * r1) { m1 + 1 } else { m1 };
      }
    } else if r1 < 2.0 / 3.0 {
      j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
      i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
    } else {
      i = m1 + 1;
      j = if r2 < (r1 / 2.0) { m2 } else { m2 + 1 };
    }

    // fold back across the axes for negative input components
    if v.x < 0.0 {
      if j % 2 == 0 {
        let axis_i = j / 2;
        let diff = i - axis_i;
        i -= 2 * diff;
      } else {
        let axis_i = (j + 1) / 2;
        let diff = i - axis_i;
        i -= 2 * diff + 1;
      }
    }
    if v.y < 0.0 {
      i -= (2 * j + 1) / 2;
      j = -j;
    }

    CubeCoord::new(i, j, 0).normalize()
  }
}

impl Digit {
  /// Rotate a digit 60 degrees counter-clockwise. Agrees with
  /// [`CubeCoord::rotate60_ccw`] on unit vectors.
  #[must_use]
  pub fn rotate60_ccw(self) -> Digit {
    match self {
      Digit::K => Digit::Ik,
      Digit::Ik => Digit::I,
      Digit::I => Digit::Ij,
      Digit::Ij => Digit::J,
      Digit::J => Digit::Jk,
      Digit::Jk => Digit::K,
      other => other,
    }
  }

  /// Rotate a digit 60 degrees clockwise. Agrees with
  /// [`CubeCoord::rotate60_cw`] on unit vectors.
  #[must_use]
  pub fn rotate60_cw(self) -> Digit {
    match self {
      Digit::K => Digit::Jk,
      Digit::Jk => Digit::J,
      Digit::J => Digit::Ij,
      Digit::Ij => Digit::I,
      Digit::I => Digit::Ik,
      Digit::Ik => Digit::K,
      other => other,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize() {
    assert_eq!(CubeCoord::new(2, 3, 4).normalize(), CubeCoord::new(0, 1, 2));
    assert_eq!(CubeCoord::new(-2, -3, -4).normalize(), CubeCoord::new(2, 1, 0));
    assert_eq!(CubeCoord::new(2, -1, 0).normalize(), CubeCoord::new(3, 0, 1));
    assert_eq!(CubeCoord::new(10, 20, 5).normalize(), CubeCoord::new(5, 15, 0));
    assert_eq!(CubeCoord::new(0, 0, 0).normalize(), CubeCoord::new(0, 0, 0));
  }

  #[test]
  fn test_normalize_idempotent() {
    for i in -3..=3 {
      for j in -3..=3 {
        for k in -3..=3 {
          let once = CubeCoord::new(i, j, k).normalize();
          assert_eq!(once.normalize(), once, "normalize not idempotent for ({i},{j},{k})");
          assert!(once.i >= 0 && once.j >= 0 && once.k >= 0);
          assert_eq!(once.i.min(once.j).min(once.k), 0);
        }
      }
    }
  }

  #[test]
  fn test_digit_round_trip() {
    for d in Digit::VALID {
      assert_eq!(UNIT_VECS[d as usize].digit(), d);
    }
    assert_eq!(CubeCoord::new(2, 0, 0).digit(), Digit::Invalid);
  }

  #[test]
  fn test_neighbor() {
    let origin = CubeCoord::default();
    assert_eq!(origin.neighbor(Digit::Center), origin);
    assert_eq!(origin.neighbor(Digit::I), CubeCoord::new(1, 0, 0));
    assert_eq!(origin.neighbor(Digit::K), CubeCoord::new(0, 0, 1));
    // stepping I then K lands on the Ik neighbor of the origin
    let ik = origin.neighbor(Digit::I).add(UNIT_VECS[Digit::K as usize]).normalize();
    assert_eq!(ik, UNIT_VECS[Digit::Ik as usize]);
  }

  #[test]
  fn test_rotate60_six_times_identity() {
    let samples = [
      CubeCoord::new(0, 0, 0),
      CubeCoord::new(1, 0, 0),
      CubeCoord::new(3, 2, 0),
      CubeCoord::new(7, 0, 4),
    ];
    for c in samples {
      let start = c.normalize();
      let mut ccw = start;
      let mut cw = start;
      for _ in 0..6 {
        ccw = ccw.rotate60_ccw();
        cw = cw.rotate60_cw();
      }
      assert_eq!(ccw, start, "ccw x6 drifted for {start:?}");
      assert_eq!(cw, start, "cw x6 drifted for {start:?}");
    }
  }

  #[test]
  fn test_digit_rotation_agrees_with_coord_rotation() {
    for d in [Digit::K, Digit::J, Digit::Jk, Digit::I, Digit::Ik, Digit::Ij] {
      let coord = UNIT_VECS[d as usize];
      assert_eq!(coord.rotate60_ccw().digit(), d.rotate60_ccw());
      assert_eq!(coord.rotate60_cw().digit(), d.rotate60_cw());
    }
  }

  #[test]
  fn test_up_down_ap7_round_trip() {
    for i in 0..4 {
      for j in 0..4 {
        let parent = CubeCoord::new(i, j, 0).normalize();
        assert_eq!(parent.down_ap7().up_ap7(), parent);
        assert_eq!(parent.down_ap7r().up_ap7r(), parent);
      }
    }
  }

  #[test]
  fn test_up_ap7_known_values() {
    assert_eq!(CubeCoord::new(0, 0, 0).up_ap7(), CubeCoord::new(0, 0, 0));
    assert_eq!(CubeCoord::new(46, 100, 0).up_ap7(), CubeCoord::new(5, 35, 0));
  }

  #[test]
  fn test_down_ap7_known_values() {
    assert_eq!(CubeCoord::new(1, 0, 0).down_ap7(), CubeCoord::new(3, 0, 1));
    assert_eq!(CubeCoord::new(2, 0, 0).down_ap7(), CubeCoord::new(6, 0, 2));
    assert_eq!(CubeCoord::new(1, 0, 0).down_ap7r(), CubeCoord::new(3, 1, 0));
  }

  #[test]
  fn test_down_ap3() {
    assert_eq!(CubeCoord::new(1, 0, 0).down_ap3(), CubeCoord::new(2, 0, 1));
    assert_eq!(CubeCoord::new(1, 0, 0).down_ap3r(), CubeCoord::new(2, 1, 0));
  }

  #[test]
  fn test_plane_round_trip_cell_centers() {
    for i in 0..5 {
      for j in 0..5 {
        for k in 0..2 {
          let c = CubeCoord::new(i, j, k).normalize();
          assert_eq!(CubeCoord::from_plane(c.to_plane()), c, "plane round trip for {c:?}");
        }
      }
    }
  }

  #[test]
  fn test_from_plane_origin_region() {
    assert_eq!(
      CubeCoord::from_plane(Vec2d { x: 0.0, y: 0.0 }),
      CubeCoord::new(0, 0, 0)
    );
    // a point well inside the I neighbor
    assert_eq!(
      CubeCoord::from_plane(Vec2d { x: 1.0, y: 0.0 }),
      CubeCoord::new(1, 0, 0)
    );
  }

  #[test]
  fn test_distance_metric() {
    let a = CubeCoord::new(0, 0, 0);
    let b = CubeCoord::new(3, 0, 1);
    let c = CubeCoord::new(1, 4, 0);

    assert_eq!(a.distance(a), 0);
    assert_eq!(a.distance(b), b.distance(a));
    assert!(a.distance(c) <= a.distance(b) + b.distance(c));
    assert_eq!(a.distance(CubeCoord::new(1, 0, 0)), 1);
  }
}
