//! Icosahedral face coordinates and the gnomonic projection between the
//! face planes and the sphere.
//!
//! Each icosahedron face carries its own hex lattice. A [`FaceCoord`]
//! addresses a cell on one face; when a coordinate walks off the face it
//! must be folded onto the neighboring face (overage adjustment).
//! Boundary generation works on a substrate grid three aperture levels
//! finer than the cell itself so that every vertex is itself a lattice
//! point.

use crate::cell_index::is_resolution_class_iii;
use crate::constants::{
  EPSILON, INV_RES0_U_GNOMONIC, MAX_BOUNDARY_VERTS, MAX_GRID_RES, M_AP7_ROT_RADS, M_ONETHIRD, M_RSQRT7, M_SQRT3_2,
  M_SQRT7, NUM_HEX_VERTS, NUM_ICOSA_FACES, NUM_PENT_VERTS, RES0_U_GNOMONIC,
};
use crate::math::vec2d::intersect;
use crate::projection::{azimuth_rads, az_distance_rads, pos_angle_rads};
use crate::types::{CellBoundary, CubeCoord, FaceCoord, GeoPoint, GridError, Vec2d, Vec3d};

/// `FACE_NEIGHBORS` direction toward the i-j quadrant edge.
pub(crate) const IJ_QUADRANT: usize = 1;
/// `FACE_NEIGHBORS` direction toward the k-i quadrant edge.
pub(crate) const KI_QUADRANT: usize = 2;
/// `FACE_NEIGHBORS` direction toward the j-k quadrant edge.
pub(crate) const JK_QUADRANT: usize = 3;

/// Face id marking a non-adjacent face pair.
pub(crate) const INVALID_FACE: i32 = -1;

/// Result of checking a face coordinate against the face's extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overage {
  /// On the original face.
  NoOverage,
  /// On a face edge; occurs on substrate grids only.
  FaceEdge,
  /// Past the edge, in a new face's interior.
  NewFace,
}

/// Maximum lattice extent of a face at each Class II resolution. Class
/// III resolutions are looked up at the next finer (Class II) level, so
/// the table carries a slot for resolution 16 and sentinels in between.
#[rustfmt::skip]
static MAX_DIM_BY_CII_RES: [i32; (MAX_GRID_RES + 2) as usize] = [
  2,          // res 0
  -1,         // res 1
  14,         // res 2
  -1,         // res 3
  98,         // res 4
  -1,         // res 5
  686,        // res 6
  -1,         // res 7
  4802,       // res 8
  -1,         // res 9
  33614,      // res 10
  -1,         // res 11
  235_298,    // res 12
  -1,         // res 13
  1_647_086,  // res 14
  -1,         // res 15
  11_529_602, // res 16
];

/// Lattice units per res-0 unit at each Class II resolution.
#[rustfmt::skip]
static UNIT_SCALE_BY_CII_RES: [i32; (MAX_GRID_RES + 2) as usize] = [
  1,         // res 0
  -1,        // res 1
  7,         // res 2
  -1,        // res 3
  49,        // res 4
  -1,        // res 5
  343,       // res 6
  -1,        // res 7
  2401,      // res 8
  -1,        // res 9
  16807,     // res 10
  -1,        // res 11
  117_649,   // res 12
  -1,        // res 13
  823_543,   // res 14
  -1,        // res 15
  5_764_801, // res 16
];

/// Icosahedron face centers in lat/lng radians.
#[rustfmt::skip]
pub(crate) static FACE_CENTER_GEO: [GeoPoint; NUM_ICOSA_FACES as usize] = [
  GeoPoint::new(0.803_582_649_718_989_94, 1.248_397_419_617_396),     // face 0
  GeoPoint::new(1.307_747_883_455_638_2, 2.536_945_009_877_921),      // face 1
  GeoPoint::new(1.054_751_253_523_952, -1.347_517_358_900_396_6),     // face 2
  GeoPoint::new(0.600_191_595_538_186_8, -0.450_603_909_469_755_75),  // face 3
  GeoPoint::new(0.491_715_428_198_773_87, 0.401_988_202_911_306_94),  // face 4
  GeoPoint::new(0.172_745_327_415_618_7, 1.678_146_885_280_433_7),    // face 5
  GeoPoint::new(0.605_929_321_571_350_7, 2.953_923_329_812_411_6),    // face 6
  GeoPoint::new(0.427_370_518_328_979_64, -1.888_876_200_336_285_4),  // face 7
  GeoPoint::new(-0.079_066_118_549_212_83, -0.733_429_513_380_867_74),// face 8
  GeoPoint::new(-0.230_961_644_455_383_64, 0.506_495_587_332_349),    // face 9
  GeoPoint::new(0.079_066_118_549_212_83, 2.408_163_140_208_925_5),   // face 10
  GeoPoint::new(0.230_961_644_455_383_64, -2.635_097_066_257_444),    // face 11
  GeoPoint::new(-0.172_745_327_415_618_7, -1.463_445_768_309_359_5),  // face 12
  GeoPoint::new(-0.605_929_321_571_350_7, -0.187_669_323_777_381_62), // face 13
  GeoPoint::new(-0.427_370_518_328_979_64, 1.252_716_453_253_508),    // face 14
  GeoPoint::new(-0.600_191_595_538_186_8, 2.690_988_744_120_037_5),   // face 15
  GeoPoint::new(-0.491_715_428_198_773_87, -2.739_604_450_678_486_3), // face 16
  GeoPoint::new(-0.803_582_649_718_989_94, -1.893_195_233_972_397),   // face 17
  GeoPoint::new(-1.307_747_883_455_638_2, -0.604_647_643_711_872_1),  // face 18
  GeoPoint::new(-1.054_751_253_523_952, 1.794_075_294_689_396_6),     // face 19
];

/// Icosahedron face centers in x/y/z on the unit sphere.
#[rustfmt::skip]
static FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES as usize] = [
  Vec3d { x: 0.219_930_779_140_460_6, y: 0.658_369_178_027_499_6, z: 0.719_847_537_892_618_2 },    // face 0
  Vec3d { x: -0.213_923_483_450_142_1, y: 0.147_817_182_955_070_3, z: 0.965_601_793_521_420_5 },   // face 1
  Vec3d { x: 0.109_262_527_878_479_7, y: -0.481_195_157_287_321, z: 0.869_777_512_128_725_3 },     // face 2
  Vec3d { x: 0.742_856_730_158_679_1, y: -0.359_394_167_827_802_8, z: 0.564_800_593_651_703_3 },   // face 3
  Vec3d { x: 0.811_253_470_914_096_9, y: 0.344_895_323_763_938_4, z: 0.472_138_773_641_393 },      // face 4
  Vec3d { x: -0.105_549_814_961_392_1, y: 0.979_445_729_641_141_3, z: 0.171_887_461_000_936_5 },   // face 5
  Vec3d { x: -0.807_540_757_997_009_2, y: 0.153_355_248_589_881_8, z: 0.569_526_199_488_268_8 },   // face 6
  Vec3d { x: -0.284_614_806_978_790_7, y: -0.864_408_097_265_420_6, z: 0.414_479_255_247_354 },    // face 7
  Vec3d { x: 0.740_562_147_385_448_2, y: -0.667_329_956_456_552_4, z: -0.078_983_764_632_673_77 }, // face 8
  Vec3d { x: 0.851_230_398_647_429_3, y: 0.472_234_378_858_268_1, z: -0.228_913_738_868_780_8 },   // face 9
  Vec3d { x: -0.740_562_147_385_448_1, y: 0.667_329_956_456_552_4, z: 0.078_983_764_632_673_77 },  // face 10
  Vec3d { x: -0.851_230_398_647_429_2, y: -0.472_234_378_858_268_2, z: 0.228_913_738_868_780_8 },  // face 11
  Vec3d { x: 0.105_549_814_961_391_9, y: -0.979_445_729_641_141_3, z: -0.171_887_461_000_936_5 },  // face 12
  Vec3d { x: 0.807_540_757_997_009_2, y: -0.153_355_248_589_881_9, z: -0.569_526_199_488_268_8 },  // face 13
  Vec3d { x: 0.284_614_806_978_790_8, y: 0.864_408_097_265_420_4, z: -0.414_479_255_247_354 },     // face 14
  Vec3d { x: -0.742_856_730_158_679_1, y: 0.359_394_167_827_802_7, z: -0.564_800_593_651_703_3 },  // face 15
  Vec3d { x: -0.811_253_470_914_097_1, y: -0.344_895_323_763_938_2, z: -0.472_138_773_641_393 },   // face 16
  Vec3d { x: -0.219_930_779_140_460_7, y: -0.658_369_178_027_499_6, z: -0.719_847_537_892_618_2 }, // face 17
  Vec3d { x: 0.213_923_483_450_142, y: -0.147_817_182_955_070_4, z: -0.965_601_793_521_420_5 },    // face 18
  Vec3d { x: -0.109_262_527_878_479_6, y: 0.481_195_157_287_321, z: -0.869_777_512_128_725_3 },    // face 19
];

/// Face ijk axes as azimuth in radians from the face center to vertex
/// 0/1/2 respectively, Class II orientation.
#[rustfmt::skip]
static FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_ICOSA_FACES as usize] = [
  [5.619_958_268_523_94, 3.525_563_166_130_744_5, 1.431_168_063_737_548_7],   // face 0
  [5.760_339_081_714_187, 3.665_943_979_320_991_7, 1.571_548_876_927_796],    // face 1
  [0.780_213_654_393_430_1, 4.969_003_859_179_821, 2.874_608_756_786_625_7],  // face 2
  [0.430_469_363_979_999_9, 4.619_259_568_766_391, 2.524_864_466_373_195_5],  // face 3
  [6.130_269_123_335_111, 4.035_874_020_941_916, 1.941_478_918_548_720_3],    // face 4
  [2.692_877_706_530_643, 0.598_482_604_137_447_1, 4.787_272_808_923_838],    // face 5
  [2.982_963_003_477_244, 0.888_567_901_084_048_4, 5.077_358_105_870_44],     // face 6
  [3.532_912_002_790_141, 1.438_516_900_396_945_7, 5.627_307_105_183_337],    // face 7
  [3.494_305_004_259_568, 1.399_909_901_866_372_9, 5.588_700_106_652_764],    // face 8
  [3.003_214_169_499_538_4, 0.908_819_067_106_342_9, 5.097_609_271_892_734],  // face 9
  [5.930_472_956_509_811_6, 3.836_077_854_116_616, 1.741_682_751_723_420_4],  // face 10
  [0.138_378_484_090_254_85, 4.327_168_688_876_646, 2.232_773_586_483_45],    // face 11
  [0.448_714_947_059_150_36, 4.637_505_151_845_541_5, 2.543_110_049_452_346], // face 12
  [0.158_629_650_112_549_36, 4.347_419_854_898_94, 2.253_024_752_505_745],    // face 13
  [5.891_865_957_979_238_5, 3.797_470_855_586_043, 1.703_075_753_192_847_6],  // face 14
  [2.711_123_289_609_793_3, 0.616_728_187_216_597_8, 4.805_518_392_002_988_7],// face 15
  [3.294_508_837_434_268, 1.200_113_735_041_073, 5.388_903_939_827_464],      // face 16
  [3.804_819_692_245_44, 1.710_424_589_852_244_5, 5.899_214_794_638_635],     // face 17
  [3.664_438_879_055_192_4, 1.570_043_776_661_997, 5.758_833_981_448_388],    // face 18
  [2.361_378_999_196_363, 0.266_983_896_803_167_6, 4.455_774_101_589_558_6],  // face 19
];

/// How to re-express a coordinate in an adjacent face's lattice: the
/// destination face, the res-0 translation relative to the source face
/// and the number of 60 degree ccw rotations to apply first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceOrientation {
  pub(crate) face: i32,
  pub(crate) translate: CubeCoord,
  pub(crate) ccw_rot60: i32,
}

impl FaceOrientation {
  const fn new(face: i32, i: i32, j: i32, k: i32, ccw_rot60: i32) -> Self {
    FaceOrientation {
      face,
      translate: CubeCoord::new(i, j, k),
      ccw_rot60,
    }
  }
}

/// Neighboring face orientations, indexed by face then by quadrant
/// direction (0 is the face itself).
#[rustfmt::skip]
pub(crate) static FACE_NEIGHBORS: [[FaceOrientation; 4]; NUM_ICOSA_FACES as usize] = [
  // face 0
  [FaceOrientation::new(0, 0, 0, 0, 0),
   FaceOrientation::new(4, 2, 0, 2, 1),
   FaceOrientation::new(1, 2, 2, 0, 5),
   FaceOrientation::new(5, 0, 2, 2, 3)],
  // face 1
  [FaceOrientation::new(1, 0, 0, 0, 0),
   FaceOrientation::new(0, 2, 0, 2, 1),
   FaceOrientation::new(2, 2, 2, 0, 5),
   FaceOrientation::new(6, 0, 2, 2, 3)],
  // face 2
  [FaceOrientation::new(2, 0, 0, 0, 0),
   FaceOrientation::new(1, 2, 0, 2, 1),
   FaceOrientation::new(3, 2, 2, 0, 5),
   FaceOrientation::new(7, 0, 2, 2, 3)],
  // face 3
  [FaceOrientation::new(3, 0, 0, 0, 0),
   FaceOrientation::new(2, 2, 0, 2, 1),
   FaceOrientation::new(4, 2, 2, 0, 5),
   FaceOrientation::new(8, 0, 2, 2, 3)],
  // face 4
  [FaceOrientation::new(4, 0, 0, 0, 0),
   FaceOrientation::new(3, 2, 0, 2, 1),
   FaceOrientation::new(0, 2, 2, 0, 5),
   FaceOrientation::new(9, 0, 2, 2, 3)],
  // face 5
  [FaceOrientation::new(5, 0, 0, 0, 0),
   FaceOrientation::new(10, 2, 2, 0, 3),
   FaceOrientation::new(14, 2, 0, 2, 3),
   FaceOrientation::new(0, 0, 2, 2, 3)],
  // face 6
  [FaceOrientation::new(6, 0, 0, 0, 0),
   FaceOrientation::new(11, 2, 2, 0, 3),
   FaceOrientation::new(10, 2, 0, 2, 3),
   FaceOrientation::new(1, 0, 2, 2, 3)],
  // face 7
  [FaceOrientation::new(7, 0, 0, 0, 0),
   FaceOrientation::new(12, 2, 2, 0, 3),
   FaceOrientation::new(11, 2, 0, 2, 3),
   FaceOrientation::new(2, 0, 2, 2, 3)],
  // face 8
  [FaceOrientation::new(8, 0, 0, 0, 0),
   FaceOrientation::new(13, 2, 2, 0, 3),
   FaceOrientation::new(12, 2, 0, 2, 3),
   FaceOrientation::new(3, 0, 2, 2, 3)],
  // face 9
  [FaceOrientation::new(9, 0, 0, 0, 0),
   FaceOrientation::new(14, 2, 2, 0, 3),
   FaceOrientation::new(13, 2, 0, 2, 3),
   FaceOrientation::new(4, 0, 2, 2, 3)],
  // face 10
  [FaceOrientation::new(10, 0, 0, 0, 0),
   FaceOrientation::new(5, 2, 2, 0, 3),
   FaceOrientation::new(6, 2, 0, 2, 3),
   FaceOrientation::new(15, 0, 2, 2, 3)],
  // face 11
  [FaceOrientation::new(11, 0, 0, 0, 0),
   FaceOrientation::new(6, 2, 2, 0, 3),
   FaceOrientation::new(7, 2, 0, 2, 3),
   FaceOrientation::new(16, 0, 2, 2, 3)],
  // face 12
  [FaceOrientation::new(12, 0, 0, 0, 0),
   FaceOrientation::new(7, 2, 2, 0, 3),
   FaceOrientation::new(8, 2, 0, 2, 3),
   FaceOrientation::new(17, 0, 2, 2, 3)],
  // face 13
  [FaceOrientation::new(13, 0, 0, 0, 0),
   FaceOrientation::new(8, 2, 2, 0, 3),
   FaceOrientation::new(9, 2, 0, 2, 3),
   FaceOrientation::new(18, 0, 2, 2, 3)],
  // face 14
  [FaceOrientation::new(14, 0, 0, 0, 0),
   FaceOrientation::new(9, 2, 2, 0, 3),
   FaceOrientation::new(5, 2, 0, 2, 3),
   FaceOrientation::new(19, 0, 2, 2, 3)],
  // face 15
  [FaceOrientation::new(15, 0, 0, 0, 0),
   FaceOrientation::new(16, 2, 0, 2, 1),
   FaceOrientation::new(19, 2, 2, 0, 5),
   FaceOrientation::new(10, 0, 2, 2, 3)],
  // face 16
  [FaceOrientation::new(16, 0, 0, 0, 0),
   FaceOrientation::new(17, 2, 0, 2, 1),
   FaceOrientation::new(15, 2, 2, 0, 5),
   FaceOrientation::new(11, 0, 2, 2, 3)],
  // face 17
  [FaceOrientation::new(17, 0, 0, 0, 0),
   FaceOrientation::new(18, 2, 0, 2, 1),
   FaceOrientation::new(16, 2, 2, 0, 5),
   FaceOrientation::new(12, 0, 2, 2, 3)],
  // face 18
  [FaceOrientation::new(18, 0, 0, 0, 0),
   FaceOrientation::new(19, 2, 0, 2, 1),
   FaceOrientation::new(17, 2, 2, 0, 5),
   FaceOrientation::new(13, 0, 2, 2, 3)],
  // face 19
  [FaceOrientation::new(19, 0, 0, 0, 0),
   FaceOrientation::new(15, 2, 0, 2, 1),
   FaceOrientation::new(18, 2, 2, 0, 5),
   FaceOrientation::new(14, 0, 2, 2, 3)],
];

/// Quadrant direction from an origin face to an adjacent destination
/// face, in the origin face's coordinate system; `INVALID_FACE` for
/// non-adjacent pairs. Inverse of the face entries in `FACE_NEIGHBORS`.
#[rustfmt::skip]
static ADJACENT_FACE_DIR: [[i32; NUM_ICOSA_FACES as usize]; NUM_ICOSA_FACES as usize] = {
  const IJ: i32 = IJ_QUADRANT as i32;
  const KI: i32 = KI_QUADRANT as i32;
  const JK: i32 = JK_QUADRANT as i32;
  [
    // to:        0   1   2   3   4   5   6   7   8   9  10  11  12  13  14  15  16  17  18  19
    /* from 0 */ [ 0, KI, -1, -1, IJ, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    /* from 1 */ [IJ,  0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    /* from 2 */ [-1, IJ,  0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    /* from 3 */ [-1, -1, IJ,  0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    /* from 4 */ [KI, -1, -1, IJ,  0, -1, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    /* from 5 */ [JK, -1, -1, -1, -1,  0, -1, -1, -1, -1, IJ, -1, -1, -1, KI, -1, -1, -1, -1, -1],
    /* from 6 */ [-1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1, -1, -1],
    /* from 7 */ [-1, -1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1, -1],
    /* from 8 */ [-1, -1, -1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1],
    /* from 9 */ [-1, -1, -1, -1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1],
    /* from 10*/ [-1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1, -1, -1, -1],
    /* from 11*/ [-1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1, -1, -1],
    /* from 12*/ [-1, -1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1, -1],
    /* from 13*/ [-1, -1, -1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1],
    /* from 14*/ [-1, -1, -1, -1, -1, KI, -1, -1, -1, IJ, -1, -1, -1, -1,  0, -1, -1, -1, -1, JK],
    /* from 15*/ [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, -1,  0, IJ, -1, -1, KI],
    /* from 16*/ [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI,  0, IJ, -1, -1],
    /* from 17*/ [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI,  0, IJ, -1],
    /* from 18*/ [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI,  0, IJ],
    /* from 19*/ [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, IJ, -1, -1, KI,  0],
  ]
};

fn adjacent_face_dir(from: i32, to: i32) -> i32 {
  ADJACENT_FACE_DIR[from as usize][to as usize]
}

/// Substrate vertex offsets of a hexagonal cell, Class II orientation.
#[rustfmt::skip]
static VERTS_CII: [CubeCoord; NUM_HEX_VERTS] = [
  CubeCoord::new(2, 1, 0),
  CubeCoord::new(1, 2, 0),
  CubeCoord::new(0, 2, 1),
  CubeCoord::new(0, 1, 2),
  CubeCoord::new(1, 0, 2),
  CubeCoord::new(2, 0, 1),
];

/// Substrate vertex offsets of a hexagonal cell, Class III orientation.
#[rustfmt::skip]
static VERTS_CIII: [CubeCoord; NUM_HEX_VERTS] = [
  CubeCoord::new(5, 4, 0),
  CubeCoord::new(1, 5, 0),
  CubeCoord::new(0, 5, 4),
  CubeCoord::new(0, 1, 5),
  CubeCoord::new(4, 0, 5),
  CubeCoord::new(5, 0, 1),
];

/// Pentagons use the first five hexagon vertex offsets.
#[rustfmt::skip]
static PENT_VERTS_CII: [CubeCoord; NUM_PENT_VERTS] = [
  CubeCoord::new(2, 1, 0),
  CubeCoord::new(1, 2, 0),
  CubeCoord::new(0, 2, 1),
  CubeCoord::new(0, 1, 2),
  CubeCoord::new(1, 0, 2),
];

#[rustfmt::skip]
static PENT_VERTS_CIII: [CubeCoord; NUM_PENT_VERTS] = [
  CubeCoord::new(5, 4, 0),
  CubeCoord::new(1, 5, 0),
  CubeCoord::new(0, 5, 4),
  CubeCoord::new(0, 1, 5),
  CubeCoord::new(4, 0, 5),
];

/// The face whose center is closest to the given point, and the squared
/// 3D chord distance to that center.
fn geo_to_closest_face(g: &GeoPoint) -> (i32, f64) {
  let v3d = Vec3d::from_geo(g);
  let mut face = 0;
  let mut sqd = 5.0;
  for (f, center) in FACE_CENTER_POINT.iter().enumerate() {
    let d = center.square_dist(&v3d);
    if d < sqd {
      face = f as i32;
      sqd = d;
    }
  }
  (face, sqd)
}

/// Project a point onto the plane of its closest face, in hex2d units of
/// the given resolution's lattice.
pub(crate) fn geo_to_hex2d(g: &GeoPoint, res: i32) -> (i32, Vec2d) {
  let (face, sqd) = geo_to_closest_face(g);

  // cos(r) of the angular distance, via the chord length
  let r = (1.0 - sqd * 0.5).clamp(-1.0, 1.0).acos();
  if r < EPSILON {
    return (face, Vec2d::new(0.0, 0.0));
  }

  let az = azimuth_rads(&FACE_CENTER_GEO[face as usize], g);
  let mut theta = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face as usize][0] - pos_angle_rads(az));
  if is_resolution_class_iii(res) {
    theta = pos_angle_rads(theta - M_AP7_ROT_RADS);
  }

  // gnomonic scaling, then to the unit lattice of the target resolution
  let mut r = r.tan() * INV_RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= M_SQRT7;
  }

  (face, Vec2d::new(r * theta.cos(), r * theta.sin()))
}

/// Inverse gnomonic projection of a hex2d point on a face plane back to
/// the sphere. `substrate` points live on the boundary substrate grid,
/// three aperture levels finer than the nominal resolution.
pub(crate) fn hex2d_to_geo(v: &Vec2d, face: i32, res: i32, substrate: bool) -> GeoPoint {
  let mut r = v.mag();
  if r < EPSILON {
    return FACE_CENTER_GEO[face as usize];
  }

  let mut theta = v.y.atan2(v.x);

  // scale back to res-0 units
  for _ in 0..res {
    r *= M_RSQRT7;
  }
  if substrate {
    r *= M_ONETHIRD;
    if is_resolution_class_iii(res) {
      r *= M_RSQRT7;
    }
  }
  r = (r * RES0_U_GNOMONIC).atan();

  if !substrate && is_resolution_class_iii(res) {
    theta = pos_angle_rads(theta + M_AP7_ROT_RADS);
  }
  let az = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face as usize][0] - theta);
  az_distance_rads(&FACE_CENTER_GEO[face as usize], az, r)
}

impl FaceCoord {
  /// The face coordinate containing the given point at the given
  /// resolution.
  pub(crate) fn from_geo(g: &GeoPoint, res: i32) -> FaceCoord {
    let (face, v) = geo_to_hex2d(g, res);
    FaceCoord::new(face, CubeCoord::from_plane(v))
  }

  /// The spherical center point of this cell.
  pub(crate) fn to_geo(&self, res: i32) -> GeoPoint {
    hex2d_to_geo(&self.coord.to_plane(), self.face, res, false)
  }

  /// Fold a coordinate that has left its face's extent onto the proper
  /// adjacent face. Class II resolutions only; Class III callers adjust
  /// to the next finer level first.
  ///
  /// `pent_leading_4` marks the KI-quadrant displacement of a pentagon
  /// whose leading digit is I; `substrate` widens the extent by the
  /// factor of three used for boundary grids.
  pub(crate) fn adjust_overage_class_ii(self, res: i32, pent_leading_4: bool, substrate: bool) -> (FaceCoord, Overage) {
    let max_dim_base = MAX_DIM_BY_CII_RES[res as usize];
    let max_dim = if substrate { max_dim_base * 3 } else { max_dim_base };

    let sum = self.coord.i + self.coord.j + self.coord.k;
    if substrate && sum == max_dim {
      return (self, Overage::FaceEdge);
    }
    if sum <= max_dim {
      return (self, Overage::NoOverage);
    }

    let mut coord = self.coord;
    let orientation = if coord.k > 0 {
      if coord.j > 0 {
        &FACE_NEIGHBORS[self.face as usize][JK_QUADRANT]
      } else {
        // ki quadrant; a pentagon's leading-I displacement is rotated
        // around the missing-k corner before folding
        if pent_leading_4 {
          let origin = CubeCoord::new(max_dim_base, 0, 0);
          coord = coord.sub(origin).rotate60_cw().add(origin);
        }
        &FACE_NEIGHBORS[self.face as usize][KI_QUADRANT]
      }
    } else {
      &FACE_NEIGHBORS[self.face as usize][IJ_QUADRANT]
    };

    for _ in 0..orientation.ccw_rot60 {
      coord = coord.rotate60_ccw();
    }

    let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
    if substrate {
      unit_scale *= 3;
    }
    coord = coord.add(orientation.translate.scale(unit_scale)).normalize();

    let adjusted = FaceCoord::new(orientation.face, coord);

    // possibly folded onto an edge of the new face
    let new_sum = coord.i + coord.j + coord.k;
    if substrate && new_sum == max_dim {
      (adjusted, Overage::FaceEdge)
    } else {
      (adjusted, Overage::NewFace)
    }
  }

  /// Fold a pentagon boundary vertex until it settles on a face. A
  /// vertex can cross several faces at an icosahedron vertex but never
  /// more than a handful; failure to settle means the coordinate was
  /// corrupt.
  pub(crate) fn adjust_pent_vert_overage(self, res: i32) -> Result<(FaceCoord, Overage), GridError> {
    let mut fijk = self;
    for _ in 0..4 {
      let (adjusted, overage) = fijk.adjust_overage_class_ii(res, false, true);
      if overage != Overage::NewFace {
        return Ok((adjusted, overage));
      }
      fijk = adjusted;
    }
    Err(GridError::Unrepresentable)
  }

  /// The substrate-grid center and vertices of this hexagonal cell.
  /// Returns the center on the substrate, the adjusted (substrate
  /// lookup) resolution and the six vertices.
  pub(crate) fn to_verts(&self, res: i32) -> (FaceCoord, i32, [FaceCoord; NUM_HEX_VERTS]) {
    let (center, adj_res) = self.to_substrate(res);
    let verts_table = if is_resolution_class_iii(res) { &VERTS_CIII } else { &VERTS_CII };

    let mut verts = [FaceCoord::default(); NUM_HEX_VERTS];
    for (vert, offset) in verts.iter_mut().zip(verts_table.iter()) {
      *vert = FaceCoord::new(center.face, center.coord.add(*offset).normalize());
    }
    (center, adj_res, verts)
  }

  /// The substrate-grid center and vertices of this pentagonal cell.
  pub(crate) fn pent_to_verts(&self, res: i32) -> (FaceCoord, i32, [FaceCoord; NUM_PENT_VERTS]) {
    let (center, adj_res) = self.to_substrate(res);
    let verts_table = if is_resolution_class_iii(res) {
      &PENT_VERTS_CIII
    } else {
      &PENT_VERTS_CII
    };

    let mut verts = [FaceCoord::default(); NUM_PENT_VERTS];
    for (vert, offset) in verts.iter_mut().zip(verts_table.iter()) {
      *vert = FaceCoord::new(center.face, center.coord.add(*offset).normalize());
    }
    (center, adj_res, verts)
  }

  /// Re-express this coordinate on the boundary substrate grid: two
  /// aperture-3 descents, plus an aperture-7 descent for Class III
  /// resolutions so the substrate itself is Class II.
  fn to_substrate(self, res: i32) -> (FaceCoord, i32) {
    let mut coord = self.coord.down_ap3().down_ap3r();
    let mut adj_res = res;
    if is_resolution_class_iii(res) {
      coord = coord.down_ap7r();
      adj_res += 1;
    }
    (FaceCoord::new(self.face, coord), adj_res)
  }

  /// The boundary of the hexagonal cell centered here, in ccw vertex
  /// order starting from `start`. Class III cells gain an extra
  /// distortion vertex wherever an edge crosses an icosahedron edge.
  pub(crate) fn to_cell_boundary(&self, res: i32, start: usize, length: usize) -> CellBoundary {
    let (center, adj_res, verts) = self.to_verts(res);

    let mut boundary = CellBoundary::default();

    // an extra pass over the start vertex closes the last edge
    let extra = usize::from(length == NUM_HEX_VERTS);

    let mut last_fijk = FaceCoord::default();
    let mut last_overage = Overage::NoOverage;

    for i in 0..(length + extra) {
      let v = (start + i) % NUM_HEX_VERTS;
      let (fijk, overage) = verts[v].adjust_overage_class_ii(adj_res, false, true);

      if is_resolution_class_iii(res) && i > 0 && fijk.face != last_fijk.face && last_overage != Overage::FaceEdge {
        // the edge crosses an icosahedron edge; intersect it on the
        // center face's substrate plane
        let last_v = (start + i - 1) % NUM_HEX_VERTS;
        let prev2d = verts[last_v].coord.to_plane();
        let curr2d = verts[v].coord.to_plane();

        let crossed_face = if fijk.face == center.face { last_fijk.face } else { fijk.face };
        let dir = adjacent_face_dir(center.face, crossed_face);
        if let Some((edge0, edge1)) = icosa_edge(dir, adj_res) {
          let inter = intersect(&prev2d, &curr2d, &edge0, &edge1);
          let at_vertex = prev2d.almost_equals(&inter) || curr2d.almost_equals(&inter);
          if !at_vertex && boundary.num_verts < MAX_BOUNDARY_VERTS {
            boundary.verts[boundary.num_verts] = hex2d_to_geo(&inter, center.face, adj_res, true);
            boundary.num_verts += 1;
          }
        }
      }

      if i < length && boundary.num_verts < MAX_BOUNDARY_VERTS {
        boundary.verts[boundary.num_verts] = hex2d_to_geo(&fijk.coord.to_plane(), fijk.face, adj_res, true);
        boundary.num_verts += 1;
      }

      last_fijk = fijk;
      last_overage = overage;
    }

    boundary
  }

  /// The boundary of the pentagonal cell centered here. Every Class III
  /// pentagon edge crosses an icosahedron edge, so each of the five
  /// topological vertices is followed by a distortion vertex.
  pub(crate) fn pent_to_cell_boundary(&self, res: i32, start: usize, length: usize) -> Result<CellBoundary, GridError> {
    let (_, adj_res, verts) = self.pent_to_verts(res);

    let mut boundary = CellBoundary::default();
    let extra = usize::from(length == NUM_PENT_VERTS);

    let mut last_fijk = FaceCoord::default();

    for i in 0..(length + extra) {
      let v = (start + i) % NUM_PENT_VERTS;
      let (fijk, _) = verts[v].adjust_pent_vert_overage(adj_res)?;

      if is_resolution_class_iii(res) && i > 0 {
        // project this vertex into the previous vertex's face frame and
        // intersect the edge there
        let dir = adjacent_face_dir(fijk.face, last_fijk.face);
        if dir != INVALID_FACE && dir != 0 {
          let orientation = &FACE_NEIGHBORS[fijk.face as usize][dir as usize];
          let mut coord = fijk.coord;
          for _ in 0..orientation.ccw_rot60 {
            coord = coord.rotate60_ccw();
          }
          coord = coord
            .add(orientation.translate.scale(UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3))
            .normalize();

          let prev2d = last_fijk.coord.to_plane();
          let curr2d = coord.to_plane();

          let edge_dir = adjacent_face_dir(last_fijk.face, fijk.face);
          if let Some((edge0, edge1)) = icosa_edge(edge_dir, adj_res) {
            let inter = intersect(&prev2d, &curr2d, &edge0, &edge1);
            if boundary.num_verts < MAX_BOUNDARY_VERTS {
              boundary.verts[boundary.num_verts] = hex2d_to_geo(&inter, last_fijk.face, adj_res, true);
              boundary.num_verts += 1;
            }
          }
        }
      }

      if i < length && boundary.num_verts < MAX_BOUNDARY_VERTS {
        boundary.verts[boundary.num_verts] = hex2d_to_geo(&fijk.coord.to_plane(), fijk.face, adj_res, true);
        boundary.num_verts += 1;
      }

      last_fijk = fijk;
    }

    Ok(boundary)
  }
}

/// The substrate-plane endpoints of the icosahedron edge in the given
/// quadrant direction.
fn icosa_edge(dir: i32, adj_res: i32) -> Option<(Vec2d, Vec2d)> {
  let max_dim = f64::from(MAX_DIM_BY_CII_RES[adj_res as usize] * 3);
  let v0 = Vec2d::new(3.0 * max_dim, 0.0);
  let v1 = Vec2d::new(-1.5 * max_dim, 3.0 * M_SQRT3_2 * max_dim);
  let v2 = Vec2d::new(-1.5 * max_dim, -3.0 * M_SQRT3_2 * max_dim);

  match dir as usize {
    IJ_QUADRANT => Some((v0, v1)),
    JK_QUADRANT => Some((v1, v2)),
    KI_QUADRANT => Some((v2, v0)),
    _ => None,
  }
}
