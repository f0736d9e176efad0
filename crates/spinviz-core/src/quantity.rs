//! Quantity trait and related types.
//!
//! A [`Quantity`] is a field of values attached to a mesh, such as a scalar
//! spin component sampled at every point.

use crate::error::{Result, SpinvizError};

/// Where the values of a quantity live on its mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Centering {
    /// One value per mesh node.
    #[default]
    Node,
    /// One value per mesh cell (zone).
    Zone,
}

/// Data associated with a mesh.
pub trait Quantity {
    /// Returns the name of this quantity.
    fn name(&self) -> &str;

    /// Returns the name of the mesh the quantity is bound to.
    fn structure_name(&self) -> &str;

    /// Returns where the values live on the mesh.
    fn centering(&self) -> Centering {
        Centering::Node
    }

    /// Returns the stored values.
    fn values(&self) -> &[f64];

    /// Returns the smallest and largest value, ignoring NaNs.
    fn value_range(&self) -> Option<(f64, f64)> {
        self.values()
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Number of values a quad variable over node dimensions `dims` must hold.
///
/// Zone-centered data needs at least two nodes per axis. Products that do
/// not fit in `usize` are reported as [`SpinvizError::InvalidDimensions`].
pub fn expected_quad_var_len(dims: [usize; 3], centering: Centering) -> Result<usize> {
    let min_dim = match centering {
        Centering::Node => 1,
        Centering::Zone => 2,
    };
    if dims.iter().any(|&d| d < min_dim) {
        return Err(SpinvizError::InvalidDimensions(dims));
    }

    let counts = match centering {
        Centering::Node => dims,
        Centering::Zone => dims.map(|d| d - 1),
    };
    counts
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or(SpinvizError::InvalidDimensions(dims))
}
