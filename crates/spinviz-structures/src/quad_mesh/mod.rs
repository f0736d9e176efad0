//! Quad mesh structure for rectilinear 3D grids.

mod scalar_quantity;

pub use scalar_quantity::*;

use glam::DVec3;
use spinviz_core::structure::{axes_bounding_box, Structure};
use spinviz_core::{Result, SpinvizError};

/// A rectilinear 3D grid.
///
/// `QuadMesh` is defined by one coordinate array per axis (collinear
/// layout). Node `(i, j, k)` sits at `(xs[i], ys[j], zs[k])`; linear node
/// indices run with `i` fastest.
#[derive(Debug, Clone, Copy)]
pub struct QuadMesh<'a> {
    name: &'a str,
    axes: [&'a [f64]; 3],
}

impl<'a> QuadMesh<'a> {
    /// Creates a quad mesh from its three axis arrays.
    ///
    /// Fails with [`SpinvizError::InvalidDimensions`] if an axis is empty.
    pub fn new(name: &'a str, xs: &'a [f64], ys: &'a [f64], zs: &'a [f64]) -> Result<Self> {
        let axes = [xs, ys, zs];
        let dims = axes.map(<[f64]>::len);
        if dims.contains(&0) {
            return Err(SpinvizError::InvalidDimensions(dims));
        }
        Ok(Self { name, axes })
    }

    /// Returns the number of nodes along each axis.
    #[must_use]
    pub fn node_dim(&self) -> [usize; 3] {
        self.axes.map(<[f64]>::len)
    }
}

impl Structure for QuadMesh<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn type_name(&self) -> &'static str {
        "QuadMesh"
    }

    fn num_nodes(&self) -> usize {
        self.node_dim().iter().product()
    }

    fn coords(&self) -> [&[f64]; 3] {
        self.axes
    }

    fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        axes_bounding_box(self.axes)
    }
}
