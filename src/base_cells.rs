//! Fixed reference data for the 122 resolution-0 cells.
//!
//! All tables are compile-time constants; lookups are bounds-checked
//! indexing and nothing here is derived at runtime.

use crate::constants::{NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::types::{CubeCoord, Digit, FaceCoord};

/// One row of the resolution-0 cell table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseCellData {
  /// Home face and normalized coordinate on that face.
  pub home: FaceCoord,
  pub is_pentagon: bool,
  /// For pentagons, the two faces offset clockwise from the home face.
  /// -1 for hexagons and the polar pentagons.
  pub cw_offset_pent: [i32; 2],
}

impl BaseCellData {
  const fn hexagon(face: i32, i: i32, j: i32, k: i32) -> Self {
    BaseCellData {
      home: FaceCoord::new(face, CubeCoord::new(i, j, k)),
      is_pentagon: false,
      cw_offset_pent: [-1, -1],
    }
  }

  const fn pentagon(face: i32, i: i32, j: i32, k: i32, cw_offset_pent: [i32; 2]) -> Self {
    BaseCellData {
      home: FaceCoord::new(face, CubeCoord::new(i, j, k)),
      is_pentagon: true,
      cw_offset_pent,
    }
  }
}

/// Base cell id plus the rotation count into that cell's orientation.
#[derive(Debug, Clone, Copy)]
struct BaseCellRotation {
  base_cell: i32,
  ccw_rot60: i32,
}

const fn bc(base_cell: i32, ccw_rot60: i32) -> BaseCellRotation {
  BaseCellRotation { base_cell, ccw_rot60 }
}

pub const INVALID_BASE_CELL: i32 = 127;
pub const INVALID_ROTATIONS: i32 = -1;

/// Largest coordinate component addressable in the face lookup table.
pub(crate) const MAX_FACE_COORD: i32 = 2;

/// Neighboring base cell id in each digit direction.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBORS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 1, 5, 2, 4, 3, 8],                            // base cell 0
  [1, 7, 6, 9, 0, 3, 2],                            // base cell 1
  [2, 6, 10, 11, 0, 1, 5],                          // base cell 2
  [3, 13, 1, 7, 4, 12, 0],                          // base cell 3
  [4, INVALID_BASE_CELL, 15, 8, 3, 0, 12],          // base cell 4 (pentagon)
  [5, 2, 18, 10, 8, 0, 16],                         // base cell 5
  [6, 14, 11, 17, 1, 9, 2],                         // base cell 6
  [7, 21, 9, 19, 3, 13, 1],                         // base cell 7
  [8, 5, 22, 16, 4, 0, 15],                         // base cell 8
  [9, 19, 14, 20, 1, 7, 6],                         // base cell 9
  [10, 11, 24, 23, 5, 2, 18],                       // base cell 10
  [11, 17, 23, 25, 2, 6, 10],                       // base cell 11
  [12, 28, 13, 26, 4, 15, 3],                       // base cell 12
  [13, 26, 21, 29, 3, 12, 7],                       // base cell 13
  [14, INVALID_BASE_CELL, 17, 27, 9, 20, 6],        // base cell 14 (pentagon)
  [15, 22, 28, 31, 4, 8, 12],                       // base cell 15
  [16, 18, 33, 30, 8, 5, 22],                       // base cell 16
  [17, 11, 14, 6, 35, 25, 27],                      // base cell 17
  [18, 24, 30, 32, 5, 10, 16],                      // base cell 18
  [19, 34, 20, 36, 7, 21, 9],                       // base cell 19
  [20, 14, 19, 9, 40, 27, 36],                      // base cell 20
  [21, 38, 19, 34, 13, 29, 7],                      // base cell 21
  [22, 16, 41, 33, 15, 8, 31],                      // base cell 22
  [23, 24, 11, 10, 39, 37, 25],                     // base cell 23
  [24, INVALID_BASE_CELL, 32, 37, 10, 23, 18],      // base cell 24 (pentagon)
  [25, 23, 17, 11, 45, 39, 35],                     // base cell 25
  [26, 42, 29, 43, 12, 28, 13],                     // base cell 26
  [27, 40, 35, 46, 14, 20, 17],                     // base cell 27
  [28, 31, 42, 44, 12, 15, 26],                     // base cell 28
  [29, 43, 38, 47, 13, 26, 21],                     // base cell 29
  [30, 32, 48, 50, 16, 18, 33],                     // base cell 30
  [31, 41, 44, 53, 15, 22, 28],                     // base cell 31
  [32, 30, 24, 18, 52, 50, 37],                     // base cell 32
  [33, 30, 49, 48, 22, 16, 41],                     // base cell 33
  [34, 19, 38, 21, 54, 36, 51],                     // base cell 34
  [35, 46, 45, 56, 17, 27, 25],                     // base cell 35
  [36, 20, 34, 19, 55, 40, 54],                     // base cell 36
  [37, 39, 52, 57, 24, 23, 32],                     // base cell 37
  [38, INVALID_BASE_CELL, 34, 51, 29, 47, 21],      // base cell 38 (pentagon)
  [39, 37, 25, 23, 59, 57, 45],                     // base cell 39
  [40, 27, 36, 20, 60, 46, 55],                     // base cell 40
  [41, 49, 53, 61, 22, 33, 31],                     // base cell 41
  [42, 58, 43, 62, 28, 44, 26],                     // base cell 42
  [43, 62, 47, 64, 26, 42, 29],                     // base cell 43
  [44, 53, 58, 65, 28, 31, 42],                     // base cell 44
  [45, 39, 35, 25, 63, 59, 56],                     // base cell 45
  [46, 60, 56, 68, 27, 40, 35],                     // base cell 46
  [47, 38, 43, 29, 69, 51, 64],                     // base cell 47
  [48, 49, 30, 33, 67, 66, 50],                     // base cell 48
  [49, INVALID_BASE_CELL, 61, 66, 33, 48, 41],      // base cell 49 (pentagon)
  [50, 48, 32, 30, 70, 67, 52],                     // base cell 50
  [51, 69, 54, 71, 38, 47, 34],                     // base cell 51
  [52, 57, 70, 74, 32, 37, 50],                     // base cell 52
  [53, 61, 65, 75, 31, 41, 44],                     // base cell 53
  [54, 71, 55, 73, 34, 51, 36],                     // base cell 54
  [55, 40, 54, 36, 72, 60, 73],                     // base cell 55
  [56, 68, 63, 77, 35, 46, 45],                     // base cell 56
  [57, 59, 74, 78, 37, 39, 52],                     // base cell 57
  [58, INVALID_BASE_CELL, 62, 76, 44, 65, 42],      // base cell 58 (pentagon)
  [59, 63, 78, 79, 39, 45, 57],                     // base cell 59
  [60, 72, 68, 80, 40, 55, 46],                     // base cell 60
  [61, 53, 49, 41, 81, 75, 66],                     // base cell 61
  [62, 43, 58, 42, 82, 64, 76],                     // base cell 62
  [63, INVALID_BASE_CELL, 56, 45, 79, 59, 77],      // base cell 63 (pentagon)
  [64, 47, 62, 43, 84, 69, 82],                     // base cell 64
  [65, 58, 53, 44, 86, 76, 75],                     // base cell 65
  [66, 67, 81, 85, 49, 48, 61],                     // base cell 66
  [67, 66, 50, 48, 87, 85, 70],                     // base cell 67
  [68, 56, 60, 46, 90, 77, 80],                     // base cell 68
  [69, 51, 64, 47, 89, 71, 84],                     // base cell 69
  [70, 67, 52, 50, 83, 87, 74],                     // base cell 70
  [71, 89, 73, 91, 51, 69, 54],                     // base cell 71
  [72, INVALID_BASE_CELL, 73, 55, 80, 60, 88],      // base cell 72 (pentagon)
  [73, 91, 72, 88, 54, 71, 55],                     // base cell 73
  [74, 78, 83, 92, 52, 57, 70],                     // base cell 74
  [75, 65, 61, 53, 94, 86, 81],                     // base cell 75
  [76, 86, 82, 96, 58, 65, 62],                     // base cell 76
  [77, 63, 68, 56, 93, 79, 90],                     // base cell 77
  [78, 74, 59, 57, 95, 92, 79],                     // base cell 78
  [79, 78, 63, 59, 93, 95, 77],                     // base cell 79
  [80, 68, 72, 60, 99, 90, 88],                     // base cell 80
  [81, 85, 94, 101, 61, 66, 75],                    // base cell 81
  [82, 96, 84, 98, 62, 76, 64],                     // base cell 82
  [83, INVALID_BASE_CELL, 74, 70, 100, 87, 92],     // base cell 83 (pentagon)
  [84, 69, 82, 64, 97, 89, 98],                     // base cell 84
  [85, 87, 101, 102, 66, 67, 81],                   // base cell 85
  [86, 76, 75, 65, 104, 96, 94],                    // base cell 86
  [87, 83, 102, 100, 67, 70, 85],                   // base cell 87
  [88, 72, 91, 73, 99, 80, 105],                    // base cell 88
  [89, 97, 91, 103, 69, 84, 71],                    // base cell 89
  [90, 77, 80, 68, 106, 93, 99],                    // base cell 90
  [91, 73, 89, 71, 105, 88, 103],                   // base cell 91
  [92, 83, 78, 74, 108, 100, 95],                   // base cell 92
  [93, 79, 90, 77, 109, 95, 106],                   // base cell 93
  [94, 86, 81, 75, 107, 104, 101],                  // base cell 94
  [95, 92, 79, 78, 109, 108, 93],                   // base cell 95
  [96, 104, 98, 110, 76, 86, 82],                   // base cell 96
  [97, INVALID_BASE_CELL, 98, 84, 103, 89, 111],    // base cell 97 (pentagon)
  [98, 110, 97, 111, 82, 96, 84],                   // base cell 98
  [99, 80, 105, 88, 106, 90, 113],                  // base cell 99
  [100, 102, 83, 87, 108, 114, 92],                 // base cell 100
  [101, 102, 107, 112, 81, 85, 94],                 // base cell 101
  [102, 101, 87, 85, 114, 112, 100],                // base cell 102
  [103, 91, 97, 89, 116, 105, 111],                 // base cell 103
  [104, 107, 110, 115, 86, 94, 96],                 // base cell 104
  [105, 88, 103, 91, 113, 99, 116],                 // base cell 105
  [106, 93, 99, 90, 117, 109, 113],                 // base cell 106
  [107, INVALID_BASE_CELL, 101, 94, 115, 104, 112], // base cell 107 (pentagon)
  [108, 100, 95, 92, 118, 114, 109],                // base cell 108
  [109, 108, 93, 95, 117, 118, 106],                // base cell 109
  [110, 98, 104, 96, 119, 111, 115],                // base cell 110
  [111, 97, 110, 98, 116, 103, 119],                // base cell 111
  [112, 107, 102, 101, 120, 115, 114],              // base cell 112
  [113, 99, 116, 105, 117, 106, 121],               // base cell 113
  [114, 112, 100, 102, 118, 120, 108],              // base cell 114
  [115, 110, 107, 104, 120, 119, 112],              // base cell 115
  [116, 103, 119, 111, 113, 105, 121],              // base cell 116
  [117, INVALID_BASE_CELL, 109, 118, 113, 121, 106],// base cell 117 (pentagon)
  [118, 120, 108, 114, 117, 121, 109],              // base cell 118
  [119, 111, 115, 110, 121, 116, 120],              // base cell 119
  [120, 115, 114, 112, 121, 119, 118],              // base cell 120
  [121, 116, 120, 119, 117, 113, 118],              // base cell 121
];

/// 60-degree ccw rotations into the neighboring base cell's orientation,
/// by digit direction.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBOR_60CCW_ROTS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 5, 0, 0, 1, 5, 1],  // base cell 0
  [0, 0, 1, 0, 1, 0, 1],  // base cell 1
  [0, 0, 0, 0, 0, 5, 0],  // base cell 2
  [0, 5, 0, 0, 2, 5, 1],  // base cell 3
  [0, -1, 1, 0, 3, 4, 2], // base cell 4 (pentagon)
  [0, 0, 1, 0, 1, 0, 1],  // base cell 5
  [0, 0, 0, 3, 5, 5, 0],  // base cell 6
  [0, 0, 0, 0, 0, 5, 0],  // base cell 7
  [0, 5, 0, 0, 0, 5, 1],  // base cell 8
  [0, 0, 1, 3, 0, 0, 1],  // base cell 9
  [0, 0, 1, 3, 0, 0, 1],  // base cell 10
  [0, 3, 3, 3, 0, 0, 0],  // base cell 11
  [0, 5, 0, 0, 3, 5, 1],  // base cell 12
  [0, 0, 1, 0, 1, 0, 1],  // base cell 13
  [0, -1, 3, 0, 5, 2, 0], // base cell 14 (pentagon)
  [0, 5, 0, 0, 4, 5, 1],  // base cell 15
  [0, 0, 0, 0, 0, 5, 0],  // base cell 16
  [0, 3, 3, 3, 3, 0, 3],  // base cell 17
  [0, 0, 0, 3, 5, 5, 0],  // base cell 18
  [0, 3, 3, 3, 0, 0, 0],  // base cell 19
  [0, 3, 3, 3, 0, 3, 0],  // base cell 20
  [0, 0, 0, 3, 5, 5, 0],  // base cell 21
  [0, 0, 1, 0, 1, 0, 1],  // base cell 22
  [0, 3, 3, 3, 0, 3, 0],  // base cell 23
  [0, -1, 3, 0, 5, 2, 0], // base cell 24 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],  // base cell 25
  [0, 0, 0, 0, 0, 5, 0],  // base cell 26
  [0, 3, 0, 0, 0, 3, 3],  // base cell 27
  [0, 0, 1, 0, 1, 0, 1],  // base cell 28
  [0, 0, 1, 3, 0, 0, 1],  // base cell 29
  [0, 3, 3, 3, 0, 0, 0],  // base cell 30
  [0, 0, 0, 0, 0, 5, 0],  // base cell 31
  [0, 3, 3, 3, 3, 0, 3],  // base cell 32
  [0, 0, 1, 3, 0, 0, 1],  // base cell 33
  [0, 3, 3, 3, 3, 0, 3],  // base cell 34
  [0, 0, 3, 0, 3, 0, 3],  // base cell 35
  [0, 0, 0, 3, 0, 0, 3],  // base cell 36
  [0, 3, 0, 0, 0, 3, 3],  // base cell 37
  [0, -1, 3, 0, 5, 2, 0], // base cell 38 (pentagon)
  [0, 3, 0, 0, 3, 3, 0],  // base cell 39
  [0, 3, 0, 0, 3, 3, 0],  // base cell 40
  [0, 0, 0, 3, 5, 5, 0],  // base cell 41
  [0, 0, 0, 3, 5, 5, 0],  // base cell 42
  [0, 3, 3, 3, 0, 0, 0],  // base cell 43
  [0, 0, 1, 3, 0, 0, 1],  // base cell 44
  [0, 0, 3, 0, 0, 3, 3],  // base cell 45
  [0, 0, 0, 3, 0, 3, 0],  // base cell 46
  [0, 3, 3, 3, 0, 3, 0],  // base cell 47
  [0, 3, 3, 3, 0, 3, 0],  // base cell 48
  [0, -1, 3, 0, 5, 2, 0], // base cell 49 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],  // base cell 50
  [0, 3, 0, 0, 0, 3, 3],  // base cell 51
  [0, 0, 3, 0, 3, 0, 3],  // base cell 52
  [0, 3, 3, 3, 0, 0, 0],  // base cell 53
  [0, 0, 3, 0, 3, 0, 3],  // base cell 54
  [0, 0, 3, 0, 0, 3, 3],  // base cell 55
  [0, 3, 3, 3, 0, 0, 3],  // base cell 56
  [0, 0, 0, 3, 0, 3, 0],  // base cell 57
  [0, -1, 3, 0, 5, 2, 0], // base cell 58 (pentagon)
  [0, 3, 3, 3, 3, 3, 0],  // base cell 59
  [0, 3, 3, 3, 3, 3, 0],  // base cell 60
  [0, 3, 3, 3, 3, 0, 3],  // base cell 61
  [0, 3, 3, 3, 3, 0, 3],  // base cell 62
  [0, -1, 3, 0, 5, 2, 0], // base cell 63 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],  // base cell 64
  [0, 3, 3, 3, 0, 3, 0],  // base cell 65
  [0, 3, 0, 0, 0, 3, 3],  // base cell 66
  [0, 3, 0, 0, 3, 3, 0],  // base cell 67
  [0, 3, 3, 3, 0, 0, 0],  // base cell 68
  [0, 3, 0, 0, 3, 3, 0],  // base cell 69
  [0, 0, 3, 0, 0, 3, 3],  // base cell 70
  [0, 0, 0, 3, 0, 3, 0],  // base cell 71
  [0, -1, 3, 0, 5, 2, 0], // base cell 72 (pentagon)
  [0, 3, 3, 3, 0, 0, 3],  // base cell 73
  [0, 3, 3, 3, 0, 0, 3],  // base cell 74
  [0, 0, 0, 3, 0, 0, 3],  // base cell 75
  [0, 3, 0, 0, 0, 3, 3],  // base cell 76
  [0, 0, 0, 3, 0, 5, 0],  // base cell 77
  [0, 3, 3, 3, 0, 0, 0],  // base cell 78
  [0, 0, 1, 3, 1, 0, 1],  // base cell 79
  [0, 0, 1, 3, 1, 0, 1],  // base cell 80
  [0, 0, 3, 0, 3, 0, 3],  // base cell 81
  [0, 0, 3, 0, 3, 0, 3],  // base cell 82
  [0, -1, 3, 0, 5, 2, 0], // base cell 83 (pentagon)
  [0, 0, 3, 0, 0, 3, 3],  // base cell 84
  [0, 0, 0, 3, 0, 3, 0],  // base cell 85
  [0, 3, 0, 0, 3, 3, 0],  // base cell 86
  [0, 3, 3, 3, 3, 3, 0],  // base cell 87
  [0, 0, 0, 3, 0, 5, 0],  // base cell 88
  [0, 3, 3, 3, 3, 3, 0],  // base cell 89
  [0, 0, 0, 0, 0, 0, 1],  // base cell 90
  [0, 3, 3, 3, 0, 0, 0],  // base cell 91
  [0, 0, 0, 3, 0, 5, 0],  // base cell 92
  [0, 5, 0, 0, 5, 5, 0],  // base cell 93
  [0, 0, 3, 0, 0, 3, 3],  // base cell 94
  [0, 0, 0, 0, 0, 0, 1],  // base cell 95
  [0, 0, 0, 3, 0, 3, 0],  // base cell 96
  [0, -1, 3, 0, 5, 2, 0], // base cell 97 (pentagon)
  [0, 3, 3, 3, 0, 0, 3],  // base cell 98
  [0, 5, 0, 0, 5, 5, 0],  // base cell 99
  [0, 0, 1, 3, 1, 0, 1],  // base cell 100
  [0, 3, 3, 3, 0, 0, 3],  // base cell 101
  [0, 3, 3, 3, 0, 0, 0],  // base cell 102
  [0, 0, 1, 3, 1, 0, 1],  // base cell 103
  [0, 3, 3, 3, 3, 3, 0],  // base cell 104
  [0, 0, 0, 0, 0, 0, 1],  // base cell 105
  [0, 0, 1, 0, 3, 5, 1],  // base cell 106
  [0, -1, 3, 0, 5, 2, 0], // base cell 107 (pentagon)
  [0, 5, 0, 0, 5, 5, 0],  // base cell 108
  [0, 0, 1, 0, 4, 5, 1],  // base cell 109
  [0, 3, 3, 3, 0, 0, 0],  // base cell 110
  [0, 0, 0, 3, 0, 5, 0],  // base cell 111
  [0, 0, 0, 3, 0, 5, 0],  // base cell 112
  [0, 0, 1, 0, 2, 5, 1],  // base cell 113
  [0, 0, 0, 0, 0, 0, 1],  // base cell 114
  [0, 0, 1, 3, 1, 0, 1],  // base cell 115
  [0, 5, 0, 0, 5, 5, 0],  // base cell 116
  [0, -1, 1, 0, 3, 4, 2], // base cell 117 (pentagon)
  [0, 0, 1, 0, 0, 5, 1],  // base cell 118
  [0, 0, 0, 0, 0, 0, 1],  // base cell 119
  [0, 5, 0, 0, 5, 5, 0],  // base cell 120
  [0, 0, 1, 0, 1, 5, 1],  // base cell 121
];

/// Per-base-cell home position, pentagon flag and pentagon offset faces.
#[rustfmt::skip]
pub(crate) static BASE_CELL_DATA: [BaseCellData; NUM_BASE_CELLS as usize] = [
  BaseCellData::hexagon(1, 1, 0, 0),                // base cell 0
  BaseCellData::hexagon(2, 1, 1, 0),                // base cell 1
  BaseCellData::hexagon(1, 0, 0, 0),                // base cell 2
  BaseCellData::hexagon(2, 1, 0, 0),                // base cell 3
  BaseCellData::pentagon(0, 2, 0, 0, [-1, -1]),     // base cell 4 (polar pentagon)
  BaseCellData::hexagon(1, 1, 1, 0),                // base cell 5
  BaseCellData::hexagon(1, 0, 0, 1),                // base cell 6
  BaseCellData::hexagon(2, 0, 0, 0),                // base cell 7
  BaseCellData::hexagon(0, 1, 0, 0),                // base cell 8
  BaseCellData::hexagon(2, 0, 1, 0),                // base cell 9
  BaseCellData::hexagon(1, 0, 1, 0),                // base cell 10
  BaseCellData::hexagon(1, 0, 1, 1),                // base cell 11
  BaseCellData::hexagon(3, 1, 0, 0),                // base cell 12
  BaseCellData::hexagon(3, 1, 1, 0),                // base cell 13
  BaseCellData::pentagon(11, 2, 0, 0, [2, 6]),      // base cell 14 (pentagon)
  BaseCellData::hexagon(4, 1, 0, 0),                // base cell 15
  BaseCellData::hexagon(0, 0, 0, 0),                // base cell 16
  BaseCellData::hexagon(6, 0, 1, 0),                // base cell 17
  BaseCellData::hexagon(0, 0, 0, 1),                // base cell 18
  BaseCellData::hexagon(2, 0, 1, 1),                // base cell 19
  BaseCellData::hexagon(7, 0, 0, 1),                // base cell 20
  BaseCellData::hexagon(2, 0, 0, 1),                // base cell 21
  BaseCellData::hexagon(0, 1, 1, 0),                // base cell 22
  BaseCellData::hexagon(6, 0, 0, 1),                // base cell 23
  BaseCellData::pentagon(10, 2, 0, 0, [1, 5]),      // base cell 24 (pentagon)
  BaseCellData::hexagon(6, 0, 0, 0),                // base cell 25
  BaseCellData::hexagon(3, 0, 0, 0),                // base cell 26
  BaseCellData::hexagon(11, 1, 0, 0),               // base cell 27
  BaseCellData::hexagon(4, 1, 1, 0),                // base cell 28
  BaseCellData::hexagon(3, 0, 1, 0),                // base cell 29
  BaseCellData::hexagon(0, 0, 1, 1),                // base cell 30
  BaseCellData::hexagon(4, 0, 0, 0),                // base cell 31
  BaseCellData::hexagon(5, 0, 1, 0),                // base cell 32
  BaseCellData::hexagon(0, 0, 1, 0),                // base cell 33
  BaseCellData::hexagon(7, 0, 1, 0),                // base cell 34
  BaseCellData::hexagon(11, 1, 1, 0),               // base cell 35
  BaseCellData::hexagon(7, 0, 0, 0),                // base cell 36
  BaseCellData::hexagon(10, 1, 0, 0),               // base cell 37
  BaseCellData::pentagon(12, 2, 0, 0, [3, 7]),      // base cell 38 (pentagon)
  BaseCellData::hexagon(6, 1, 0, 1),                // base cell 39
  BaseCellData::hexagon(7, 1, 0, 1),                // base cell 40
  BaseCellData::hexagon(4, 0, 0, 1),                // base cell 41
  BaseCellData::hexagon(3, 0, 0, 1),                // base cell 42
  BaseCellData::hexagon(3, 0, 1, 1),                // base cell 43
  BaseCellData::hexagon(4, 0, 1, 0),                // base cell 44
  BaseCellData::hexagon(6, 1, 0, 0),                // base cell 45
  BaseCellData::hexagon(11, 0, 0, 0),               // base cell 46
  BaseCellData::hexagon(8, 0, 0, 1),                // base cell 47
  BaseCellData::hexagon(5, 0, 0, 1),                // base cell 48
  BaseCellData::pentagon(14, 2, 0, 0, [0, 9]),      // base cell 49 (pentagon)
  BaseCellData::hexagon(5, 0, 0, 0),                // base cell 50
  BaseCellData::hexagon(12, 1, 0, 0),               // base cell 51
  BaseCellData::hexagon(10, 1, 1, 0),               // base cell 52
  BaseCellData::hexagon(4, 0, 1, 1),                // base cell 53
  BaseCellData::hexagon(12, 1, 1, 0),               // base cell 54
  BaseCellData::hexagon(7, 1, 0, 0),                // base cell 55
  BaseCellData::hexagon(11, 0, 1, 0),               // base cell 56
  BaseCellData::hexagon(10, 0, 0, 0),               // base cell 57
  BaseCellData::pentagon(13, 2, 0, 0, [4, 8]),      // base cell 58 (pentagon)
  BaseCellData::hexagon(10, 0, 0, 1),               // base cell 59
  BaseCellData::hexagon(11, 0, 0, 1),               // base cell 60
  BaseCellData::hexagon(9, 0, 1, 0),                // base cell 61
  BaseCellData::hexagon(8, 0, 1, 0),                // base cell 62
  BaseCellData::pentagon(6, 2, 0, 0, [11, 15]),     // base cell 63 (pentagon)
  BaseCellData::hexagon(8, 0, 0, 0),                // base cell 64
  BaseCellData::hexagon(9, 0, 0, 1),                // base cell 65
  BaseCellData::hexagon(14, 1, 0, 0),               // base cell 66
  BaseCellData::hexagon(5, 1, 0, 1),                // base cell 67
  BaseCellData::hexagon(16, 0, 1, 1),               // base cell 68
  BaseCellData::hexagon(8, 1, 0, 1),                // base cell 69
  BaseCellData::hexagon(5, 1, 0, 0),                // base cell 70
  BaseCellData::hexagon(12, 0, 0, 0),               // base cell 71
  BaseCellData::pentagon(7, 2, 0, 0, [12, 16]),     // base cell 72 (pentagon)
  BaseCellData::hexagon(12, 0, 1, 0),               // base cell 73
  BaseCellData::hexagon(10, 0, 1, 0),               // base cell 74
  BaseCellData::hexagon(9, 0, 0, 0),                // base cell 75
  BaseCellData::hexagon(13, 1, 0, 0),               // base cell 76
  BaseCellData::hexagon(16, 0, 0, 1),               // base cell 77
  BaseCellData::hexagon(15, 0, 1, 1),               // base cell 78
  BaseCellData::hexagon(15, 0, 1, 0),               // base cell 79
  BaseCellData::hexagon(16, 0, 1, 0),               // base cell 80
  BaseCellData::hexagon(14, 1, 1, 0),               // base cell 81
  BaseCellData::hexagon(13, 1, 1, 0),               // base cell 82
  BaseCellData::pentagon(5, 2, 0, 0, [10, 19]),     // base cell 83 (pentagon)
  BaseCellData::hexagon(8, 1, 0, 0),                // base cell 84
  BaseCellData::hexagon(14, 0, 0, 0),               // base cell 85
  BaseCellData::hexagon(9, 1, 0, 1),                // base cell 86
  BaseCellData::hexagon(14, 0, 0, 1),               // base cell 87
  BaseCellData::hexagon(17, 0, 0, 1),               // base cell 88
  BaseCellData::hexagon(12, 0, 0, 1),               // base cell 89
  BaseCellData::hexagon(16, 0, 0, 0),               // base cell 90
  BaseCellData::hexagon(17, 0, 1, 1),               // base cell 91
  BaseCellData::hexagon(15, 0, 0, 1),               // base cell 92
  BaseCellData::hexagon(16, 1, 0, 1),               // base cell 93
  BaseCellData::hexagon(9, 1, 0, 0),                // base cell 94
  BaseCellData::hexagon(15, 0, 0, 0),               // base cell 95
  BaseCellData::hexagon(13, 0, 0, 0),               // base cell 96
  BaseCellData::pentagon(8, 2, 0, 0, [13, 17]),     // base cell 97 (pentagon)
  BaseCellData::hexagon(13, 0, 1, 0),               // base cell 98
  BaseCellData::hexagon(17, 1, 0, 1),               // base cell 99
  BaseCellData::hexagon(19, 0, 1, 0),               // base cell 100
  BaseCellData::hexagon(14, 0, 1, 0),               // base cell 101
  BaseCellData::hexagon(19, 0, 1, 1),               // base cell 102
  BaseCellData::hexagon(17, 0, 1, 0),               // base cell 103
  BaseCellData::hexagon(13, 0, 0, 1),               // base cell 104
  BaseCellData::hexagon(17, 0, 0, 0),               // base cell 105
  BaseCellData::hexagon(16, 1, 0, 0),               // base cell 106
  BaseCellData::pentagon(9, 2, 0, 0, [14, 18]),     // base cell 107 (pentagon)
  BaseCellData::hexagon(15, 1, 0, 1),               // base cell 108
  BaseCellData::hexagon(15, 1, 0, 0),               // base cell 109
  BaseCellData::hexagon(18, 0, 1, 1),               // base cell 110
  BaseCellData::hexagon(18, 0, 0, 1),               // base cell 111
  BaseCellData::hexagon(19, 0, 0, 1),               // base cell 112
  BaseCellData::hexagon(17, 1, 0, 0),               // base cell 113
  BaseCellData::hexagon(19, 0, 0, 0),               // base cell 114
  BaseCellData::hexagon(18, 0, 1, 0),               // base cell 115
  BaseCellData::hexagon(18, 1, 0, 1),               // base cell 116
  BaseCellData::pentagon(19, 2, 0, 0, [-1, -1]),    // base cell 117 (polar pentagon)
  BaseCellData::hexagon(19, 1, 0, 0),               // base cell 118
  BaseCellData::hexagon(18, 0, 0, 0),               // base cell 119
  BaseCellData::hexagon(19, 1, 0, 1),               // base cell 120
  BaseCellData::hexagon(18, 1, 0, 0),               // base cell 121
];

/// Resolution 0 base cell lookup for each face. Indexed by face, then
/// i, j, k with every component in [0, 2]. Gives the base cell at that
/// coordinate and the number of 60 ccw rotations into its orientation.
#[rustfmt::skip]
static FACE_TO_BASE_CELL_ROTATIONS:
  [[[[BaseCellRotation; 3]; 3]; 3]; NUM_ICOSA_FACES as usize] = [
  [ // face 0
    [[bc(16, 0), bc(18, 0), bc(24, 0)],
     [bc(33, 0), bc(30, 0), bc(32, 3)],
     [bc(49, 1), bc(48, 3), bc(50, 3)]],
    [[bc(8,  0), bc(5,  5), bc(10, 5)],
     [bc(22, 0), bc(16, 0), bc(18, 0)],
     [bc(41, 1), bc(33, 0), bc(30, 0)]],
    [[bc(4,  0), bc(0,  5), bc(2,  5)],
     [bc(15, 1), bc(8,  0), bc(5,  5)],
     [bc(31, 1), bc(22, 0), bc(16, 0)]],
  ],
  [ // face 1
    [[bc(2,  0), bc(6,  0), bc(14, 0)],
     [bc(10, 0), bc(11, 0), bc(17, 3)],
     [bc(24, 1), bc(23, 3), bc(25, 3)]],
    [[bc(0,  0), bc(1,  5), bc(9,  5)],
     [bc(5,  0), bc(2,  0), bc(6,  0)],
     [bc(18, 1), bc(10, 0), bc(11, 0)]],
    [[bc(4,  1), bc(3,  5), bc(7,  5)],
     [bc(8,  1), bc(0,  0), bc(1,  5)],
     [bc(16, 1), bc(5,  0), bc(2,  0)]],
  ],
  [ // face 2
    [[bc(7,  0), bc(21, 0), bc(38, 0)],
     [bc(9,  0), bc(19, 0), bc(34, 3)],
     [bc(14, 1), bc(20, 3), bc(36, 3)]],
    [[bc(3,  0), bc(13, 5), bc(29, 5)],
     [bc(1,  0), bc(7,  0), bc(21, 0)],
     [bc(6,  1), bc(9,  0), bc(19, 0)]],
    [[bc(4,  2), bc(12, 5), bc(26, 5)],
     [bc(0,  1), bc(3,  0), bc(13, 5)],
     [bc(2,  1), bc(1,  0), bc(7,  0)]],
  ],
  [ // face 3
    [[bc(26, 0), bc(42, 0), bc(58, 0)],
     [bc(29, 0), bc(43, 0), bc(62, 3)],
     [bc(38, 1), bc(47, 3), bc(64, 3)]],
    [[bc(12, 0), bc(28, 5), bc(44, 5)],
     [bc(13, 0), bc(26, 0), bc(42, 0)],
     [bc(21, 1), bc(29, 0), bc(43, 0)]],
    [[bc(4,  3), bc(15, 5), bc(31, 5)],
     [bc(3,  1), bc(12, 0), bc(28, 5)],
     [bc(7,  1), bc(13, 0), bc(26, 0)]],
  ],
  [ // face 4
    [[bc(31, 0), bc(41, 0), bc(49, 0)],
     [bc(44, 0), bc(53, 0), bc(61, 3)],
     [bc(58, 1), bc(65, 3), bc(75, 3)]],
    [[bc(15, 0), bc(22, 5), bc(33, 5)],
     [bc(28, 0), bc(31, 0), bc(41, 0)],
     [bc(42, 1), bc(44, 0), bc(53, 0)]],
    [[bc(4,  4), bc(8,  5), bc(16, 5)],
     [bc(12, 1), bc(15, 0), bc(22, 5)],
     [bc(26, 1), bc(28, 0), bc(31, 0)]],
  ],
  [ // face 5
    [[bc(50, 0), bc(48, 0), bc(49, 3)],
     [bc(32, 0), bc(30, 3), bc(33, 3)],
     [bc(24, 3), bc(18, 3), bc(16, 3)]],
    [[bc(70, 0), bc(67, 0), bc(66, 3)],
     [bc(52, 3), bc(50, 0), bc(48, 0)],
     [bc(37, 3), bc(32, 0), bc(30, 3)]],
    [[bc(83, 0), bc(87, 3), bc(85, 3)],
     [bc(74, 3), bc(70, 0), bc(67, 0)],
     [bc(57, 1), bc(52, 3), bc(50, 0)]],
  ],
  [ // face 6
    [[bc(25, 0), bc(23, 0), bc(24, 3)],
     [bc(17, 0), bc(11, 3), bc(10, 3)],
     [bc(14, 3), bc(6,  3), bc(2,  3)]],
    [[bc(45, 0), bc(39, 0), bc(37, 3)],
     [bc(35, 3), bc(25, 0), bc(23, 0)],
     [bc(27, 3), bc(17, 0), bc(11, 3)]],
    [[bc(63, 0), bc(59, 3), bc(57, 3)],
     [bc(56, 3), bc(45, 0), bc(39, 0)],
     [bc(46, 3), bc(35, 3), bc(25, 0)]],
  ],
  [ // face 7
    [[bc(36, 0), bc(20, 0), bc(14, 3)],
     [bc(34, 0), bc(19, 3), bc(9,  3)],
     [bc(38, 3), bc(21, 3), bc(7,  3)]],
    [[bc(55, 0), bc(40, 0), bc(27, 3)],
     [bc(54, 3), bc(36, 0), bc(20, 0)],
     [bc(51, 3), bc(34, 0), bc(19, 3)]],
    [[bc(72, 0), bc(60, 3), bc(46, 3)],
     [bc(73, 3), bc(55, 0), bc(40, 0)],
     [bc(71, 3), bc(54, 3), bc(36, 0)]],
  ],
  [ // face 8
    [[bc(64, 0), bc(47, 0), bc(38, 3)],
     [bc(62, 0), bc(43, 3), bc(29, 3)],
     [bc(58, 3), bc(42, 3), bc(26, 3)]],
    [[bc(84, 0), bc(69, 0), bc(51, 3)],
     [bc(82, 3), bc(64, 0), bc(47, 0)],
     [bc(76, 3), bc(62, 0), bc(43, 3)]],
    [[bc(97, 0), bc(89, 3), bc(71, 3)],
     [bc(98, 3), bc(84, 0), bc(69, 0)],
     [bc(96, 3), bc(82, 3), bc(64, 0)]],
  ],
  [ // face 9
    [[bc(75, 0), bc(65, 0), bc(58, 3)],
     [bc(61, 0), bc(53, 3), bc(44, 3)],
     [bc(49, 3), bc(41, 3), bc(31, 3)]],
    [[bc(94, 0), bc(86, 0), bc(76, 3)],
     [bc(81, 3), bc(75, 0), bc(65, 0)],
     [bc(66, 3), bc(61, 0), bc(53, 3)]],
    [[bc(107, 0), bc(104, 3), bc(96, 3)],
     [bc(101, 3), bc(94,  0), bc(86, 0)],
     [bc(85,  3), bc(81,  3), bc(75, 0)]],
  ],
  [ // face 10
    [[bc(57, 0), bc(59, 0), bc(63, 3)],
     [bc(74, 0), bc(78, 3), bc(79, 3)],
     [bc(83, 3), bc(92, 3), bc(95, 3)]],
    [[bc(37, 0), bc(39, 3), bc(45, 3)],
     [bc(52, 0), bc(57, 0), bc(59, 0)],
     [bc(70, 3), bc(74, 0), bc(78, 3)]],
    [[bc(24, 0), bc(23, 3), bc(25, 3)],
     [bc(32, 3), bc(37, 0), bc(39, 3)],
     [bc(50, 3), bc(52, 0), bc(57, 0)]],
  ],
  [ // face 11
    [[bc(46, 0), bc(60, 0), bc(72, 3)],
     [bc(56, 0), bc(68, 3), bc(80, 3)],
     [bc(63, 3), bc(77, 3), bc(90, 3)]],
    [[bc(27, 0), bc(40, 3), bc(55, 3)],
     [bc(35, 0), bc(46, 0), bc(60, 0)],
     [bc(45, 3), bc(56, 0), bc(68, 3)]],
    [[bc(14, 0), bc(20, 3), bc(36, 3)],
     [bc(17, 3), bc(27, 0), bc(40, 3)],
     [bc(25, 3), bc(35, 0), bc(46, 0)]],
  ],
  [ // face 12
    [[bc(71, 0), bc(89, 0), bc(97,  3)],
     [bc(73, 0), bc(91, 3), bc(103, 3)],
     [bc(72, 3), bc(88, 3), bc(105, 3)]],
    [[bc(51, 0), bc(69, 3), bc(84, 3)],
     [bc(54, 0), bc(71, 0), bc(89, 0)],
     [bc(55, 3), bc(73, 0), bc(91, 3)]],
    [[bc(38, 0), bc(47, 3), bc(64, 3)],
     [bc(34, 3), bc(51, 0), bc(69, 3)],
     [bc(36, 3), bc(54, 0), bc(71, 0)]],
  ],
  [ // face 13
    [[bc(96, 0), bc(104, 0), bc(107, 3)],
     [bc(98, 0), bc(110, 3), bc(115, 3)],
     [bc(97, 3), bc(111, 3), bc(119, 3)]],
    [[bc(76, 0), bc(86, 3), bc(94,  3)],
     [bc(82, 0), bc(96, 0), bc(104, 0)],
     [bc(84, 3), bc(98, 0), bc(110, 3)]],
    [[bc(58, 0), bc(65, 3), bc(75, 3)],
     [bc(62, 3), bc(76, 0), bc(86, 3)],
     [bc(64, 3), bc(82, 0), bc(96, 0)]],
  ],
  [ // face 14
    [[bc(85,  0), bc(87,  0), bc(83,  3)],
     [bc(101, 0), bc(102, 3), bc(100, 3)],
     [bc(107, 3), bc(112, 3), bc(114, 3)]],
    [[bc(66, 0), bc(67,  3), bc(70,  3)],
     [bc(81, 0), bc(85,  0), bc(87,  0)],
     [bc(94, 3), bc(101, 0), bc(102, 3)]],
    [[bc(49, 0), bc(48, 3), bc(50, 3)],
     [bc(61, 3), bc(66, 0), bc(67, 3)],
     [bc(75, 3), bc(81, 0), bc(85, 0)]],
  ],
  [ // face 15
    [[bc(95, 0), bc(92, 0), bc(83, 0)],
     [bc(79, 0), bc(78, 0), bc(74, 3)],
     [bc(63, 1), bc(59, 3), bc(57, 3)]],
    [[bc(109, 0), bc(108, 0), bc(100, 5)],
     [bc(93,  1), bc(95,  0), bc(92,  0)],
     [bc(77,  1), bc(79,  0), bc(78,  0)]],
    [[bc(117, 4), bc(118, 5), bc(114, 5)],
     [bc(106, 1), bc(109, 0), bc(108, 0)],
     [bc(90,  1), bc(93,  1), bc(95,  0)]],
  ],
  [ // face 16
    [[bc(90, 0), bc(77, 0), bc(63, 0)],
     [bc(80, 0), bc(68, 0), bc(56, 3)],
     [bc(72, 1), bc(60, 3), bc(46, 3)]],
    [[bc(106, 0), bc(93, 0), bc(79, 5)],
     [bc(99,  1), bc(90, 0), bc(77, 0)],
     [bc(88,  1), bc(80, 0), bc(68, 0)]],
    [[bc(117, 3), bc(109, 5), bc(95, 5)],
     [bc(113, 1), bc(106, 0), bc(93, 0)],
     [bc(105, 1), bc(99,  1), bc(90, 0)]],
  ],
  [ // face 17
    [[bc(105, 0), bc(88, 0), bc(72, 0)],
     [bc(103, 0), bc(91, 0), bc(73, 3)],
     [bc(97,  1), bc(89, 3), bc(71, 3)]],
    [[bc(113, 0), bc(99,  0), bc(80, 5)],
     [bc(116, 1), bc(105, 0), bc(88, 0)],
     [bc(111, 1), bc(103, 0), bc(91, 0)]],
    [[bc(117, 2), bc(106, 5), bc(90, 5)],
     [bc(121, 1), bc(113, 0), bc(99, 0)],
     [bc(119, 1), bc(116, 1), bc(105, 0)]],
  ],
  [ // face 18
    [[bc(119, 0), bc(111, 0), bc(97, 0)],
     [bc(115, 0), bc(110, 0), bc(98, 3)],
     [bc(107, 1), bc(104, 3), bc(96, 3)]],
    [[bc(121, 0), bc(116, 0), bc(103, 5)],
     [bc(120, 1), bc(119, 0), bc(111, 0)],
     [bc(112, 1), bc(115, 0), bc(110, 0)]],
    [[bc(117, 1), bc(113, 5), bc(105, 5)],
     [bc(118, 1), bc(121, 0), bc(116, 0)],
     [bc(114, 1), bc(120, 1), bc(119, 0)]],
  ],
  [ // face 19
    [[bc(114, 0), bc(112, 0), bc(107, 0)],
     [bc(100, 0), bc(102, 0), bc(101, 3)],
     [bc(83,  1), bc(87,  3), bc(85,  3)]],
    [[bc(118, 0), bc(120, 0), bc(115, 5)],
     [bc(108, 1), bc(114, 0), bc(112, 0)],
     [bc(92,  1), bc(100, 0), bc(102, 0)]],
    [[bc(117, 0), bc(121, 5), bc(119, 5)],
     [bc(109, 1), bc(118, 0), bc(120, 0)],
     [bc(95,  1), bc(108, 1), bc(114, 0)]],
  ],
];

#[inline]
#[must_use]
pub(crate) fn is_base_cell_pentagon(base_cell: i32) -> bool {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }
  BASE_CELL_DATA[base_cell as usize].is_pentagon
}

/// Whether the base cell is one of the two pentagons whose neighbors are
/// all oriented towards it.
#[inline]
#[must_use]
pub fn is_base_cell_polar_pentagon(base_cell: i32) -> bool {
  base_cell == 4 || base_cell == 117
}

fn in_table_domain(fijk: &FaceCoord) -> bool {
  fijk.face >= 0
    && fijk.face < NUM_ICOSA_FACES
    && fijk.coord.i >= 0
    && fijk.coord.i <= MAX_FACE_COORD
    && fijk.coord.j >= 0
    && fijk.coord.j <= MAX_FACE_COORD
    && fijk.coord.k >= 0
    && fijk.coord.k <= MAX_FACE_COORD
}

/// The base cell at a resolution 0 face coordinate, or
/// `INVALID_BASE_CELL` when the coordinate is out of the table domain.
#[inline]
#[must_use]
pub(crate) fn face_to_base_cell(fijk: &FaceCoord) -> i32 {
  if !in_table_domain(fijk) {
    return INVALID_BASE_CELL;
  }
  FACE_TO_BASE_CELL_ROTATIONS[fijk.face as usize][fijk.coord.i as usize][fijk.coord.j as usize]
    [fijk.coord.k as usize]
    .base_cell
}

/// The number of 60 degree ccw rotations from the face coordinate system
/// into the orientation of the base cell at that coordinate.
#[inline]
#[must_use]
pub(crate) fn face_to_base_cell_ccwrot60(fijk: &FaceCoord) -> i32 {
  if !in_table_domain(fijk) {
    return INVALID_ROTATIONS;
  }
  FACE_TO_BASE_CELL_ROTATIONS[fijk.face as usize][fijk.coord.i as usize][fijk.coord.j as usize]
    [fijk.coord.k as usize]
    .ccw_rot60
}

/// The home face coordinate of a base cell.
#[inline]
#[must_use]
pub(crate) fn base_cell_home(base_cell: i32) -> Option<FaceCoord> {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return None;
  }
  Some(BASE_CELL_DATA[base_cell as usize].home)
}

/// Whether `test_face` is a clockwise offset face of a pentagon base
/// cell. Always false for hexagons.
#[inline]
#[must_use]
pub(crate) fn base_cell_is_cw_offset(base_cell: i32, test_face: i32) -> bool {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }
  let data = &BASE_CELL_DATA[base_cell as usize];
  data.is_pentagon && (data.cw_offset_pent[0] == test_face || data.cw_offset_pent[1] == test_face)
}

/// The neighboring base cell in the given digit direction, or
/// `INVALID_BASE_CELL` across a pentagon's deleted K axis.
#[inline]
#[must_use]
pub fn base_cell_neighbor(base_cell: i32, dir: Digit) -> i32 {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS || dir == Digit::Invalid {
    return INVALID_BASE_CELL;
  }
  BASE_CELL_NEIGHBORS[base_cell as usize][dir as usize]
}

/// The rotation count paired with [`base_cell_neighbor`].
#[inline]
#[must_use]
pub fn base_cell_neighbor_rotations(base_cell: i32, dir: Digit) -> i32 {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS || dir == Digit::Invalid {
    return INVALID_ROTATIONS;
  }
  BASE_CELL_NEIGHBOR_60CCW_ROTS[base_cell as usize][dir as usize]
}

/// The digit direction from one base cell to a neighboring base cell,
/// or [`Digit::Invalid`] when they are not adjacent.
#[must_use]
pub fn base_cell_direction(origin: i32, neighbor: i32) -> Digit {
  if origin < 0 || origin >= NUM_BASE_CELLS || neighbor < 0 || neighbor >= NUM_BASE_CELLS {
    return Digit::Invalid;
  }
  for dir in Digit::VALID {
    if BASE_CELL_NEIGHBORS[origin as usize][dir as usize] == neighbor {
      return dir;
    }
  }
  Digit::Invalid
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::NUM_PENTAGONS;

  #[test]
  fn test_pentagon_count() {
    let count = (0..NUM_BASE_CELLS).filter(|&bc| is_base_cell_pentagon(bc)).count();
    assert_eq!(count, NUM_PENTAGONS as usize);
  }

  #[test]
  fn test_polar_pentagons_are_pentagons() {
    for bc in 0..NUM_BASE_CELLS {
      if is_base_cell_polar_pentagon(bc) {
        assert!(is_base_cell_pentagon(bc), "polar flag on non-pentagon {bc}");
      }
    }
    assert!(is_base_cell_polar_pentagon(4));
    assert!(is_base_cell_polar_pentagon(117));
    assert!(!is_base_cell_polar_pentagon(14));
  }

  #[test]
  fn test_pentagon_missing_k_neighbor() {
    for bc in 0..NUM_BASE_CELLS {
      let k_neighbor = base_cell_neighbor(bc, Digit::K);
      if is_base_cell_pentagon(bc) {
        assert_eq!(k_neighbor, INVALID_BASE_CELL, "pentagon {bc} has a K neighbor");
      } else {
        assert!((0..NUM_BASE_CELLS).contains(&k_neighbor), "bad K neighbor for {bc}");
      }
    }
  }

  #[test]
  fn test_neighbors_are_symmetric() {
    for bc in 0..NUM_BASE_CELLS {
      for dir in Digit::VALID {
        let n = base_cell_neighbor(bc, dir);
        if n == INVALID_BASE_CELL {
          continue;
        }
        assert_ne!(
          base_cell_direction(n, bc),
          Digit::Invalid,
          "{bc} -> {n} not reciprocated"
        );
      }
    }
  }

  #[test]
  fn test_home_positions_round_trip() {
    for base_cell in 0..NUM_BASE_CELLS {
      let home = base_cell_home(base_cell).unwrap();
      assert_eq!(face_to_base_cell(&home), base_cell);
      assert_eq!(face_to_base_cell_ccwrot60(&home), 0, "home of {base_cell} is rotated");
    }
    assert!(base_cell_home(-1).is_none());
    assert!(base_cell_home(NUM_BASE_CELLS).is_none());
  }

  #[test]
  fn test_lookup_out_of_domain() {
    let fijk = FaceCoord::new(0, CubeCoord::new(3, 0, 0));
    assert_eq!(face_to_base_cell(&fijk), INVALID_BASE_CELL);
    assert_eq!(face_to_base_cell_ccwrot60(&fijk), INVALID_ROTATIONS);
  }

  #[test]
  fn test_neighbor_rotations() {
    for bc in 0..NUM_BASE_CELLS {
      // a cell is its own center neighbor with no rotation
      assert_eq!(base_cell_neighbor(bc, Digit::Center), bc);
      assert_eq!(base_cell_neighbor_rotations(bc, Digit::Center), 0);

      for dir in Digit::VALID {
        if base_cell_neighbor(bc, dir) == INVALID_BASE_CELL {
          continue;
        }
        let rots = base_cell_neighbor_rotations(bc, dir);
        assert!((0..6).contains(&rots), "bc {bc} dir {dir:?} rots {rots}");
      }
    }

    assert_eq!(base_cell_neighbor_rotations(-1, Digit::J), INVALID_ROTATIONS);
    assert_eq!(base_cell_neighbor_rotations(NUM_BASE_CELLS, Digit::J), INVALID_ROTATIONS);
    assert_eq!(base_cell_neighbor_rotations(0, Digit::Invalid), INVALID_ROTATIONS);
  }

  #[test]
  fn test_cw_offset_faces() {
    assert!(base_cell_is_cw_offset(14, 2));
    assert!(base_cell_is_cw_offset(14, 6));
    assert!(!base_cell_is_cw_offset(14, 11));
    // polar pentagons carry no offset faces
    assert!(!base_cell_is_cw_offset(4, 0));
    // hexagons never do
    assert!(!base_cell_is_cw_offset(0, 1));
  }
}
