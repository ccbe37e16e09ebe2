#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]
#![allow(clippy::wildcard_imports)]

//! `hexgrid` is a discrete global grid engine: it tiles the sphere with
//! hexagonal cells (plus twelve pentagons) at sixteen nested resolutions
//! and addresses each cell with a 64-bit [`CellIndex`].
//!
//! The core operations are point indexing ([`geo_to_cell`]), cell
//! centers and boundaries ([`cell_to_geo`], [`cell_to_boundary`]), and
//! the aperture-7 parent/child hierarchy on [`CellIndex`].

pub mod base_cells;
pub mod cell_index;
pub mod constants;
pub mod coords;
pub mod hierarchy;
pub mod indexing;
pub mod iterators;
pub mod math;
pub mod projection;
pub mod types;

pub use constants::{MAX_BOUNDARY_VERTS, MAX_GRID_RES, NUM_BASE_CELLS};
pub use projection::{
  constrain_lat, constrain_lng, degs_to_rads, great_circle_distance_km, great_circle_distance_m,
  great_circle_distance_rads, rads_to_degs,
};
pub use types::{CellBoundary, CellIndex, Digit, GeoPoint, GridError, NULL_INDEX};

pub use cell_index::{cell_from_string, cell_to_string, num_cells, pentagon_count, pentagons, res0_cells};
pub use indexing::{cell_to_boundary, cell_to_geo, geo_to_cell};
pub use iterators::{cells_at_res, CellChildren, CellsAtRes};
