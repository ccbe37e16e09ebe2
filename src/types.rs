//! Core value types shared across the crate.

use crate::constants::MAX_BOUNDARY_VERTS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A 64-bit cell identifier.
///
/// The bit layout packs a mode tag, a resolution (0-15), a base cell
/// (0-121) and one 3-bit digit per resolution level. A `CellIndex` is an
/// immutable value: derivations such as [`CellIndex::parent_at`] or the
/// `with_*` field setters always produce a new index and never mutate in
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct CellIndex(pub u64);

/// The invalid cell index sentinel. Mode 0 is reserved, so `0` can never
/// be produced by a valid encode and safely doubles as "no cell".
pub const NULL_INDEX: CellIndex = CellIndex(0);

impl Default for CellIndex {
  fn default() -> Self {
    NULL_INDEX
  }
}

/// Latitude/longitude pair in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

/// Ordered cell boundary: CCW vertices in radians.
///
/// A hexagon has 6 vertices and a pentagon 5; Class III (odd) resolutions
/// may insert one extra vertex per edge where the edge crosses an
/// icosahedron face boundary, for a worst case of 10.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellBoundary {
  /// Number of valid vertices in `verts`.
  pub num_verts: usize,
  /// Vertex storage; only the first `num_verts` entries are meaningful.
  pub verts: [GeoPoint; MAX_BOUNDARY_VERTS],
}

impl Default for CellBoundary {
  fn default() -> Self {
    CellBoundary {
      num_verts: 0,
      verts: [GeoPoint::default(); MAX_BOUNDARY_VERTS],
    }
  }
}

impl CellBoundary {
  /// The valid vertices as a slice.
  #[must_use]
  pub fn vertices(&self) -> &[GeoPoint] {
    &self.verts[..self.num_verts]
  }
}

/// Errors produced by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u32)]
pub enum GridError {
  /// An argument was outside its accepted range.
  Domain = 1,
  /// A resolution argument was outside 0..=15.
  ResDomain = 2,
  /// A latitude/longitude argument was non-finite or out of range.
  CoordDomain = 3,
  /// A cell index failed structural validation.
  IndexInvalid = 4,
  /// A coordinate could not be resolved to a valid base cell, or an
  /// internal invariant was violated.
  Unrepresentable = 5,
}

impl std::fmt::Display for GridError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let msg = match self {
      GridError::Domain => "argument out of range",
      GridError::ResDomain => "resolution out of range",
      GridError::CoordDomain => "coordinate out of range",
      GridError::IndexInvalid => "invalid cell index",
      GridError::Unrepresentable => "coordinate not representable on the grid",
    };
    f.write_str(msg)
  }
}

impl std::error::Error for GridError {}

/// Integer hex-cube lattice coordinate.
///
/// The triple is redundant by one degree of freedom; the canonical form
/// (see [`CubeCoord::normalize`]) has all components non-negative with at
/// least one zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubeCoord {
  pub i: i32,
  pub j: i32,
  pub k: i32,
}

impl CubeCoord {
  #[must_use]
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    CubeCoord { i, j, k }
  }
}

/// A cube coordinate anchored to one of the 20 icosahedral face planes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceCoord {
  /// Icosahedral face id, 0-19.
  pub face: i32,
  /// Coordinate on that face's hex lattice.
  pub coord: CubeCoord,
}

impl FaceCoord {
  #[must_use]
  pub const fn new(face: i32, coord: CubeCoord) -> Self {
    FaceCoord { face, coord }
  }
}

/// 2D Cartesian vector on a face plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2d {
  pub x: f64,
  pub y: f64,
}

/// 3D Cartesian vector on the unit sphere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3d {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

/// A single resolution digit: the direction from a cell center to one of
/// its seven aperture-7 children (or to a neighbor on the same grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum Digit {
  /// Center (no movement).
  Center = 0,
  /// K axis.
  K = 1,
  /// J axis.
  J = 2,
  /// J+K quadrant.
  Jk = 3,
  /// I axis.
  I = 4,
  /// I+K quadrant.
  Ik = 5,
  /// I+J quadrant.
  Ij = 6,
  /// Sentinel for digit slots finer than an index's resolution.
  Invalid = 7,
}

impl Digit {
  /// All seven valid child directions, center first.
  pub const VALID: [Digit; 7] = [
    Digit::Center,
    Digit::K,
    Digit::J,
    Digit::Jk,
    Digit::I,
    Digit::Ik,
    Digit::Ij,
  ];
}

impl TryFrom<u8> for Digit {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Digit::Center),
      1 => Ok(Digit::K),
      2 => Ok(Digit::J),
      3 => Ok(Digit::Jk),
      4 => Ok(Digit::I),
      5 => Ok(Digit::Ik),
      6 => Ok(Digit::Ij),
      7 => Ok(Digit::Invalid),
      _ => Err(GridError::Domain),
    }
  }
}
