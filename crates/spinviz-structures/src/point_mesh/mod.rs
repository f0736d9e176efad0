//! Point mesh structure.

mod quantities;

use glam::DVec3;
use spinviz_core::structure::{bounding_box_of, Structure};
use spinviz_core::{Result, SpinvizError};

pub use quantities::*;

/// An unstructured set of points in 3-space.
///
/// The mesh borrows the caller's coordinate arrays; nothing is copied until
/// the mesh is written.
#[derive(Debug, Clone, Copy)]
pub struct PointMesh<'a> {
    name: &'a str,
    x: &'a [f64],
    y: &'a [f64],
    z: &'a [f64],
}

impl<'a> PointMesh<'a> {
    /// Creates a point mesh from three parallel coordinate arrays.
    ///
    /// Fails with [`SpinvizError::SizeMismatch`] if the arrays differ in
    /// length.
    pub fn new(name: &'a str, x: &'a [f64], y: &'a [f64], z: &'a [f64]) -> Result<Self> {
        for axis in [y, z] {
            if axis.len() != x.len() {
                return Err(SpinvizError::SizeMismatch {
                    expected: x.len(),
                    actual: axis.len(),
                });
            }
        }
        Ok(Self { name, x, y, z })
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.x.len()
    }
}

impl Structure for PointMesh<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn type_name(&self) -> &'static str {
        "PointMesh"
    }

    fn num_nodes(&self) -> usize {
        self.num_points()
    }

    fn coords(&self) -> [&[f64]; 3] {
        [self.x, self.y, self.z]
    }

    fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        bounding_box_of(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_mesh_basics() {
        let x = [0.0, 3.0];
        let y = [0.0, 4.0];
        let z = [0.0, 0.0];
        let mesh = PointMesh::new("spins", &x, &y, &z).unwrap();

        assert_eq!(mesh.num_nodes(), 2);
        assert_eq!(mesh.type_name(), "PointMesh");
        assert_eq!(mesh.coords()[1], &y);
        assert_eq!(
            mesh.bounding_box(),
            Some((DVec3::ZERO, DVec3::new(3.0, 4.0, 0.0)))
        );
    }

    #[test]
    fn test_point_mesh_rejects_ragged_coords() {
        let err = PointMesh::new("spins", &[0.0, 1.0], &[0.0, 1.0], &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            SpinvizError::SizeMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    proptest! {
        #[test]
        fn only_equal_lengths_are_accepted(nx in 0usize..8, ny in 0usize..8, nz in 0usize..8) {
            let (x, y, z) = (vec![0.0; nx], vec![0.0; ny], vec![0.0; nz]);
            let mesh = PointMesh::new("p", &x, &y, &z);
            prop_assert_eq!(mesh.is_ok(), nx == ny && ny == nz);
            if let Ok(mesh) = mesh {
                prop_assert_eq!(mesh.num_nodes(), nx);
            }
        }
    }
}
