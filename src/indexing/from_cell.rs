use crate::constants::{NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::types::{CellBoundary, CellIndex, GeoPoint, GridError};

/// Finds the center point of the given cell.
pub fn cell_to_geo(cell: CellIndex) -> Result<GeoPoint, GridError> {
  if !cell.is_valid() {
    return Err(GridError::IndexInvalid);
  }
  let fijk = cell.to_face_coord()?;
  Ok(fijk.to_geo(cell.resolution()))
}

/// Finds the boundary of the given cell: 6 vertices for a hexagon, 5 for
/// a pentagon, plus any icosahedron edge crossing points at Class III
/// resolutions.
pub fn cell_to_boundary(cell: CellIndex) -> Result<CellBoundary, GridError> {
  if !cell.is_valid() {
    return Err(GridError::IndexInvalid);
  }
  let fijk = cell.to_face_coord()?;
  let res = cell.resolution();

  if cell.is_pentagon() {
    fijk.pent_to_cell_boundary(res, 0, NUM_PENT_VERTS)
  } else {
    Ok(fijk.to_cell_boundary(res, 0, NUM_HEX_VERTS))
  }
}
