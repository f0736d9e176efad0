//! Structure trait and related types.
//!
//! A [`Structure`] is a mesh that can be written to an output file, such as
//! an unstructured point mesh or a rectilinear quad mesh.

use glam::DVec3;

/// A mesh that quantities can be bound to.
pub trait Structure {
    /// Returns the name the mesh is stored under.
    fn name(&self) -> &str;

    /// Returns the type name of this structure (e.g., "`PointMesh`", "`QuadMesh`").
    fn type_name(&self) -> &'static str;

    /// Returns the total number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the coordinate arrays, one per axis.
    ///
    /// Point meshes hold one entry per point in each array. Quad meshes hold
    /// the grid line positions along each axis.
    fn coords(&self) -> [&[f64]; 3];

    /// Returns the axis-aligned bounding box.
    ///
    /// Returns `None` if the structure has no points, or only NaN coordinates.
    fn bounding_box(&self) -> Option<(DVec3, DVec3)>;
}

/// Computes the bounding box of three parallel coordinate arrays.
///
/// NaN coordinates are ignored. Returns `None` if nothing remains.
pub fn bounding_box_of(x: &[f64], y: &[f64], z: &[f64]) -> Option<(DVec3, DVec3)> {
    let mut min = DVec3::splat(f64::MAX);
    let mut max = DVec3::splat(f64::MIN);
    let mut has_extent = false;

    for ((&px, &py), &pz) in x.iter().zip(y).zip(z) {
        let p = DVec3::new(px, py, pz);
        if p.is_nan() {
            continue;
        }
        min = min.min(p);
        max = max.max(p);
        has_extent = true;
    }

    has_extent.then_some((min, max))
}

/// Computes the bounding box of a rectilinear grid from its axis arrays.
///
/// Returns `None` if any axis is empty or all NaN.
pub fn axes_bounding_box(axes: [&[f64]; 3]) -> Option<(DVec3, DVec3)> {
    let [x, y, z] = axes.map(axis_range);
    let (x, y, z) = (x?, y?, z?);
    Some((DVec3::new(x.0, y.0, z.0), DVec3::new(x.1, y.1, z.1)))
}

fn axis_range(axis: &[f64]) -> Option<(f64, f64)> {
    axis.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bounding_box_of_points() {
        let (min, max) = bounding_box_of(&[0.0, 2.0, -1.0], &[1.0, 1.0, 3.0], &[0.0, 0.0, 0.5])
            .unwrap();
        assert_eq!(min, DVec3::new(-1.0, 1.0, 0.0));
        assert_eq!(max, DVec3::new(2.0, 3.0, 0.5));
    }

    #[test]
    fn test_bounding_box_empty() {
        assert!(bounding_box_of(&[], &[], &[]).is_none());
        assert!(bounding_box_of(&[f64::NAN], &[0.0], &[0.0]).is_none());
    }

    #[test]
    fn test_axes_bounding_box() {
        let (min, max) =
            axes_bounding_box([&[3.0, -2.0, f64::NAN, 1.0], &[0.5], &[4.0, 2.0]]).unwrap();
        assert_eq!(min, DVec3::new(-2.0, 0.5, 2.0));
        assert_eq!(max, DVec3::new(3.0, 0.5, 4.0));
        assert!(axes_bounding_box([&[1.0], &[], &[1.0]]).is_none());
    }

    proptest! {
        #[test]
        fn bounding_box_contains_every_point(
            pts in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6, -1e6f64..1e6), 1..64)
        ) {
            let x: Vec<f64> = pts.iter().map(|p| p.0).collect();
            let y: Vec<f64> = pts.iter().map(|p| p.1).collect();
            let z: Vec<f64> = pts.iter().map(|p| p.2).collect();
            let (min, max) = bounding_box_of(&x, &y, &z).unwrap();
            for (px, py, pz) in pts {
                let p = DVec3::new(px, py, pz);
                prop_assert!(p.cmpge(min).all() && p.cmple(max).all());
            }
        }
    }
}
