//! Table of contents of an output database.
//!
//! Every mesh and variable is an [`ObjectEntry`] holding its arrays. The
//! writer collects entries in write order; the reader rebuilds them from the
//! files on disk.

use glam::DVec3;
use spinviz_core::structure::{axes_bounding_box, bounding_box_of};
use spinviz_core::{expected_quad_var_len, Centering, ObjectKind};

/// Optional metadata attached to a mesh.
///
/// Stored as the `CYCLE` and `TIME` field arrays that VisIt and ParaView
/// read from VTK files.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OptList {
    /// Simulation cycle (time step number).
    pub cycle: Option<i32>,
    /// Simulation time.
    pub time: Option<f64>,
}

impl OptList {
    /// Returns whether no option is set.
    pub fn is_empty(&self) -> bool {
        self.cycle.is_none() && self.time.is_none()
    }
}

/// One object in a database.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectEntry {
    /// Unstructured point mesh: one entry per point in each coordinate array.
    PointMesh {
        name: String,
        coords: [Vec<f64>; 3],
        options: OptList,
    },
    /// Rectilinear quad mesh: the grid line positions along each axis.
    QuadMesh {
        name: String,
        axes: [Vec<f64>; 3],
        options: OptList,
    },
    /// Scalar variable on a point mesh.
    PointVar {
        name: String,
        mesh: String,
        values: Vec<f64>,
    },
    /// Scalar variable on a quad mesh.
    QuadVar {
        name: String,
        mesh: String,
        centering: Centering,
        values: Vec<f64>,
    },
    /// Variable read back from a file whose mesh was never written.
    Unbound {
        name: String,
        mesh: String,
        values: Vec<f64>,
    },
}

impl ObjectEntry {
    /// Returns the object name.
    pub fn name(&self) -> &str {
        match self {
            Self::PointMesh { name, .. }
            | Self::QuadMesh { name, .. }
            | Self::PointVar { name, .. }
            | Self::QuadVar { name, .. }
            | Self::Unbound { name, .. } => name,
        }
    }

    /// Returns the kind of object, or `None` for an unbound variable.
    pub fn kind(&self) -> Option<ObjectKind> {
        match self {
            Self::PointMesh { .. } => Some(ObjectKind::PointMesh),
            Self::QuadMesh { .. } => Some(ObjectKind::QuadMesh),
            Self::PointVar { .. } => Some(ObjectKind::PointVar),
            Self::QuadVar { .. } => Some(ObjectKind::QuadVar),
            Self::Unbound { .. } => None,
        }
    }

    /// Returns whether the object is a mesh.
    pub fn is_mesh(&self) -> bool {
        self.kind().is_some_and(ObjectKind::is_mesh)
    }

    /// Returns the mesh a variable is bound to, or `None` for meshes.
    pub fn mesh_name(&self) -> Option<&str> {
        match self {
            Self::PointVar { mesh, .. } | Self::QuadVar { mesh, .. } | Self::Unbound { mesh, .. } => {
                Some(mesh)
            }
            Self::PointMesh { .. } | Self::QuadMesh { .. } => None,
        }
    }

    /// Returns where the values of a variable live, or `None` for meshes.
    pub fn centering(&self) -> Option<Centering> {
        match self {
            Self::QuadVar { centering, .. } => Some(*centering),
            Self::PointVar { .. } | Self::Unbound { .. } => Some(Centering::Node),
            Self::PointMesh { .. } | Self::QuadMesh { .. } => None,
        }
    }

    /// Returns the values of a variable, or `None` for meshes.
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Self::PointVar { values, .. }
            | Self::QuadVar { values, .. }
            | Self::Unbound { values, .. } => Some(values),
            Self::PointMesh { .. } | Self::QuadMesh { .. } => None,
        }
    }

    /// Returns the coordinate arrays of a mesh, or `None` for variables.
    pub fn coords(&self) -> Option<[&[f64]; 3]> {
        match self {
            Self::PointMesh { coords: c, .. } | Self::QuadMesh { axes: c, .. } => {
                Some([&c[0], &c[1], &c[2]])
            }
            _ => None,
        }
    }

    /// Returns the metadata of a mesh, or `None` for variables.
    pub fn options(&self) -> Option<&OptList> {
        match self {
            Self::PointMesh { options, .. } | Self::QuadMesh { options, .. } => Some(options),
            _ => None,
        }
    }

    /// Returns the node dimensions of a quad mesh.
    pub fn dims(&self) -> Option<[usize; 3]> {
        match self {
            Self::QuadMesh { axes, .. } => Some([axes[0].len(), axes[1].len(), axes[2].len()]),
            _ => None,
        }
    }

    /// Returns the bounding box of a mesh, or `None` for variables and empty
    /// meshes.
    pub fn extents(&self) -> Option<(DVec3, DVec3)> {
        match self {
            Self::PointMesh { coords, .. } => bounding_box_of(&coords[0], &coords[1], &coords[2]),
            Self::QuadMesh { axes, .. } => axes_bounding_box([&axes[0], &axes[1], &axes[2]]),
            _ => None,
        }
    }

    /// Returns how many values a variable with `centering` needs on this
    /// mesh, or `None` if the mesh cannot hold such a variable.
    pub fn expected_len(&self, centering: Centering) -> Option<usize> {
        match (self, centering) {
            (Self::PointMesh { coords, .. }, Centering::Node) => Some(coords[0].len()),
            (Self::QuadMesh { .. }, _) => expected_quad_var_len(self.dims()?, centering).ok(),
            _ => None,
        }
    }
}

/// The table of contents of one database.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOfContents {
    /// File label, `None` for a database without objects.
    pub label: Option<String>,
    /// Objects in write order, or in file order when read back.
    pub objects: Vec<ObjectEntry>,
}

impl TableOfContents {
    /// Looks up an object by name.
    pub fn get(&self, name: &str) -> Option<&ObjectEntry> {
        self.objects.iter().find(|o| o.name() == name)
    }

    /// Returns all meshes.
    pub fn meshes(&self) -> impl Iterator<Item = &ObjectEntry> {
        self.objects.iter().filter(|o| o.is_mesh())
    }

    /// Returns all variables.
    pub fn variables(&self) -> impl Iterator<Item = &ObjectEntry> {
        self.objects.iter().filter(|o| !o.is_mesh())
    }

    /// Returns all variables bound to the given mesh.
    pub fn variables_on<'a>(&'a self, mesh: &'a str) -> impl Iterator<Item = &'a ObjectEntry> {
        self.variables().filter(move |o| o.mesh_name() == Some(mesh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> ObjectEntry {
        ObjectEntry::QuadMesh {
            name: "grid".into(),
            axes: [vec![0.0, 1.0, 2.0], vec![-1.0, 1.0], vec![5.0, 6.0]],
            options: OptList::default(),
        }
    }

    #[test]
    fn test_quad_mesh_shape() {
        let grid = grid();
        assert_eq!(grid.dims(), Some([3, 2, 2]));
        assert_eq!(grid.expected_len(Centering::Node), Some(12));
        assert_eq!(grid.expected_len(Centering::Zone), Some(2));

        let (min, max) = grid.extents().unwrap();
        assert_eq!(min, DVec3::new(0.0, -1.0, 5.0));
        assert_eq!(max, DVec3::new(2.0, 1.0, 6.0));
    }

    #[test]
    fn test_point_mesh_has_no_zones() {
        let spins = ObjectEntry::PointMesh {
            name: "spins".into(),
            coords: [vec![0.0; 4], vec![1.0; 4], vec![2.0; 4]],
            options: OptList::default(),
        };
        assert_eq!(spins.expected_len(Centering::Node), Some(4));
        assert_eq!(spins.expected_len(Centering::Zone), None);
        assert!(spins.is_mesh());
        assert_eq!(spins.mesh_name(), None);
    }

    #[test]
    fn test_flat_grid_has_no_zones() {
        let flat = ObjectEntry::QuadMesh {
            name: "flat".into(),
            axes: [vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0]],
            options: OptList::default(),
        };
        assert_eq!(flat.expected_len(Centering::Node), Some(4));
        assert_eq!(flat.expected_len(Centering::Zone), None);
    }

    #[test]
    fn test_toc_lookups() {
        let toc = TableOfContents {
            label: Some("test".into()),
            objects: vec![
                grid(),
                ObjectEntry::QuadVar {
                    name: "density".into(),
                    mesh: "grid".into(),
                    centering: Centering::Node,
                    values: vec![0.0; 12],
                },
                ObjectEntry::Unbound {
                    name: "orphan".into(),
                    mesh: "elsewhere".into(),
                    values: vec![1.0],
                },
            ],
        };

        assert_eq!(toc.meshes().count(), 1);
        assert_eq!(toc.variables().count(), 2);
        assert_eq!(toc.variables_on("grid").count(), 1);
        assert_eq!(toc.get("orphan").unwrap().kind(), None);
        assert_eq!(toc.get("density").unwrap().values().unwrap().len(), 12);
        assert!(toc.get("missing").is_none());
    }

    #[test]
    fn test_optlist_is_empty() {
        assert!(OptList::default().is_empty());
        assert!(!OptList {
            time: Some(0.5),
            ..OptList::default()
        }
        .is_empty());
    }
}
