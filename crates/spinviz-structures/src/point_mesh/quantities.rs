//! Point mesh quantity implementations.

use spinviz_core::Quantity;

/// A scalar variable on a point mesh, one value per point.
#[derive(Debug, Clone, Copy)]
pub struct PointScalarVariable<'a> {
    name: &'a str,
    mesh_name: &'a str,
    values: &'a [f64],
}

impl<'a> PointScalarVariable<'a> {
    /// Creates a scalar variable bound to the mesh named `mesh_name`.
    ///
    /// The mesh is referenced by name only; it does not have to be written
    /// to the same file.
    pub fn new(name: &'a str, mesh_name: &'a str, values: &'a [f64]) -> Self {
        Self {
            name,
            mesh_name,
            values,
        }
    }
}

impl Quantity for PointScalarVariable<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn structure_name(&self) -> &str {
        self.mesh_name
    }

    fn values(&self) -> &[f64] {
        self.values
    }
}
