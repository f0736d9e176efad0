//! Scalar quantities on quad meshes.

use spinviz_core::{expected_quad_var_len, Centering, Quantity, Result, SpinvizError};

/// A scalar variable on a quad mesh.
///
/// Node-centered variables hold one value per node, zone-centered variables
/// one value per cell; values run with the x index fastest.
#[derive(Debug, Clone, Copy)]
pub struct QuadScalarVariable<'a> {
    name: &'a str,
    mesh_name: &'a str,
    values: &'a [f64],
    centering: Centering,
}

impl<'a> QuadScalarVariable<'a> {
    /// Creates a scalar variable bound to the mesh named `mesh_name`, whose
    /// node dimensions are `dims`.
    ///
    /// Fails with [`SpinvizError::SizeMismatch`] if `values` does not fit
    /// `dims` and `centering`.
    pub fn new(
        name: &'a str,
        mesh_name: &'a str,
        values: &'a [f64],
        dims: [usize; 3],
        centering: Centering,
    ) -> Result<Self> {
        let expected = expected_quad_var_len(dims, centering)?;
        if values.len() != expected {
            return Err(SpinvizError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            name,
            mesh_name,
            values,
            centering,
        })
    }
}

impl Quantity for QuadScalarVariable<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn structure_name(&self) -> &str {
        self.mesh_name
    }

    fn centering(&self) -> Centering {
        self.centering
    }

    fn values(&self) -> &[f64] {
        self.values
    }
}
