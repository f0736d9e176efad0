//! Point mesh writes through the process-wide handle.

use crate::state::with_database;
use crate::Result;

/// Writes a 3-D point mesh to the open file.
///
/// # Errors
///
/// Returns [`crate::SpinvizError::NotOpen`] if no file is open, or
/// [`crate::SpinvizError::SizeMismatch`] if the coordinate arrays differ in
/// length.
pub fn write_point_mesh(x: &[f64], y: &[f64], z: &[f64], mesh_id: &str) -> Result<()> {
    with_database(|db| db.write_point_mesh(x, y, z, mesh_id))
}

/// Writes a scalar field on the point mesh `mesh_id` to the open file.
///
/// The mesh is not required to be in the same file.
///
/// # Errors
///
/// Returns [`crate::SpinvizError::NotOpen`] if no file is open.
pub fn write_point_data(data: &[f64], value_label: &str, mesh_id: &str) -> Result<()> {
    with_database(|db| db.write_point_data(data, value_label, mesh_id))
}
