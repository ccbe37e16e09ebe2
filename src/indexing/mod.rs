pub mod from_cell;
pub mod to_cell;

pub use from_cell::{cell_to_boundary, cell_to_geo};
pub use to_cell::geo_to_cell;
