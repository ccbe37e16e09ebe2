//! Grid, bit-layout and math constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * pi
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// General-purpose threshold epsilon.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;
/// Comparison epsilon, roughly 0.1mm expressed in degrees.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Comparison epsilon, roughly 0.1mm expressed in radians.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// sqrt(3) / 2, sin(60 degrees).
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
/// 1 / sin(60 degrees).
pub const M_RSIN60: f64 = 1.0 / M_SQRT3_2;
/// sqrt(7).
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// 1 / sqrt(7).
pub const M_RSQRT7: f64 = 1.0 / M_SQRT7;
/// One third.
pub const M_ONETHIRD: f64 = 1.0 / 3.0;

/// Rotation angle between Class II and Class III resolution axes,
/// asin(sqrt(3/28)).
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Earth radius in kilometers (WGS84 authalic radius).
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;

/// Distance between adjacent resolution-0 cell centers on the face plane,
/// in gnomonic unit lengths.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;
/// Inverse of `RES0_U_GNOMONIC`.
pub const INV_RES0_U_GNOMONIC: f64 = 1.0 / RES0_U_GNOMONIC;

// Grid system constants

/// Finest resolution; the grid has 16 resolutions, 0 through 15.
pub const MAX_GRID_RES: i32 = 15;
/// Number of faces on the icosahedron.
pub const NUM_ICOSA_FACES: i32 = 20;
/// Number of resolution-0 base cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// Vertices of a hexagonal cell.
pub const NUM_HEX_VERTS: usize = 6;
/// Vertices of a pentagonal cell.
pub const NUM_PENT_VERTS: usize = 5;
/// Pentagonal cells per resolution.
pub const NUM_PENTAGONS: i32 = 12;
/// Worst-case boundary vertex count (pentagon with a distortion vertex on
/// every edge).
pub const MAX_BOUNDARY_VERTS: usize = 10;

/// Total number of cells at the finest resolution: 2 + 120 * 7^15.
pub const NUM_CELLS_MAX_RES: i64 = 569_707_381_193_162;

// Index bit layout

/// Bit offset of the mode field.
pub const MODE_OFFSET: u8 = 59;
/// Bit offset of the reserved field.
pub const RESERVED_OFFSET: u8 = 56;
/// Bit offset of the resolution field.
pub const RES_OFFSET: u8 = 52;
/// Bit offset of the base cell field.
pub const BASE_CELL_OFFSET: u8 = 45;
/// Bits per resolution digit.
pub const PER_DIGIT_OFFSET: u8 = 3;

/// 1 in the highest bit, 0 elsewhere.
pub const HIGH_BIT_MASK: u64 = 1u64 << 63;
/// 1s in the 4 mode bits, 0 elsewhere.
pub const MODE_MASK: u64 = 0b1111u64 << MODE_OFFSET;
/// 1s in the 3 reserved bits, 0 elsewhere.
pub const RESERVED_MASK: u64 = 0b111u64 << RESERVED_OFFSET;
/// 1s in the 4 resolution bits, 0 elsewhere.
pub const RES_MASK: u64 = 0b1111u64 << RES_OFFSET;
/// 1s in the 7 base cell bits, 0 elsewhere.
pub const BASE_CELL_MASK: u64 = 0b111_1111u64 << BASE_CELL_OFFSET;
/// 1s in the 3 bits of a single digit.
pub const DIGIT_MASK: u64 = 0b111u64;

/// Mode tag for cell indexes.
pub const CELL_MODE: u8 = 1;

/// Seed pattern for building an index: mode 0, resolution 0, base cell 0
/// and every digit set to the sentinel 7. Equals `0x1fffffffffff`.
pub const INDEX_INIT: u64 = 35_184_372_088_831;
