//! Quad mesh writes through the process-wide handle.

use crate::state::with_database;
use crate::Result;

/// Writes a 3-D rectilinear quad mesh to the open file.
///
/// # Errors
///
/// Returns [`crate::SpinvizError::NotOpen`] if no file is open, or
/// [`crate::SpinvizError::InvalidDimensions`] if an axis is empty.
pub fn write_quad_mesh(xs: &[f64], ys: &[f64], zs: &[f64], mesh_id: &str) -> Result<()> {
    with_database(|db| db.write_quad_mesh(xs, ys, zs, mesh_id))
}

/// Writes a node-centered scalar field over an `nx × ny × nz` grid to the
/// open file.
///
/// # Errors
///
/// Returns [`crate::SpinvizError::NotOpen`] if no file is open, or
/// [`crate::SpinvizError::SizeMismatch`] unless `data` holds `nx * ny * nz`
/// values.
pub fn write_quad_data(
    data: &[f64],
    dims: [usize; 3],
    value_label: &str,
    mesh_id: &str,
) -> Result<()> {
    with_database(|db| db.write_quad_data(data, dims, value_label, mesh_id))
}
