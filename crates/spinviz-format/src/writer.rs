//! Database writer.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use spinviz_core::{
    validate_name, Centering, ObjectKind, Quantity, Registry, Result, SpinvizError, Structure,
};

use crate::toc::{ObjectEntry, OptList, TableOfContents};
use crate::vtk;

/// File extension of the per-object files inside a database directory.
pub const OBJECT_EXTENSION: &str = "vtk";

/// An output database being written.
///
/// A database is a directory holding one legacy VTK file per mesh. Objects
/// are collected as they are put and written by [`DbFile::close`], so a
/// variable may be put before the mesh it is bound to. A `DbFile` dropped
/// without being closed is finalized from `Drop`, with errors only logged.
pub struct DbFile {
    path: PathBuf,
    label: String,
    registry: Registry,
    toc: TableOfContents,
    finalized: bool,
}

impl DbFile {
    /// Creates the database directory at `path`.
    ///
    /// With `clobber` an existing database is emptied, and an existing plain
    /// file at `path` is replaced; otherwise creation fails if `path` exists.
    /// The parent directory must exist.
    pub fn create(path: impl AsRef<Path>, label: &str, clobber: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        prepare_directory(&path, clobber)?;

        log::debug!("created {}", path.display());

        Ok(Self {
            path,
            label: label.to_string(),
            registry: Registry::new(),
            toc: TableOfContents {
                label: Some(label.to_string()),
                objects: Vec::new(),
            },
            finalized: false,
        })
    }

    /// Returns the path of the database directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the database label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the objects put so far, in write order.
    pub fn objects(&self) -> &[ObjectEntry] {
        &self.toc.objects
    }

    /// Checks if an object with the given name was put.
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Puts an unstructured 3-D point mesh.
    pub fn put_point_mesh(&mut self, mesh: &impl Structure, options: &OptList) -> Result<()> {
        let coords = mesh.coords();
        let nnodes = mesh.num_nodes();
        for axis in coords {
            check_len(nnodes, axis.len())?;
        }

        self.put_mesh(
            mesh,
            ObjectEntry::PointMesh {
                name: mesh.name().to_string(),
                coords: coords.map(<[f64]>::to_vec),
                options: *options,
            },
            ObjectKind::PointMesh,
        )
    }

    /// Puts a 3-D rectilinear quad mesh. The grid dimensions are the axis
    /// lengths.
    pub fn put_quad_mesh(&mut self, mesh: &impl Structure, options: &OptList) -> Result<()> {
        let axes = mesh.coords();
        let dims = axes.map(<[f64]>::len);
        if dims.contains(&0) {
            return Err(SpinvizError::InvalidDimensions(dims));
        }

        self.put_mesh(
            mesh,
            ObjectEntry::QuadMesh {
                name: mesh.name().to_string(),
                axes: axes.map(<[f64]>::to_vec),
                options: *options,
            },
            ObjectKind::QuadMesh,
        )
    }

    /// Puts a scalar variable bound to a point mesh.
    ///
    /// The mesh is referenced by name only and need not be in this
    /// database. If it is, the variable must have one value per point.
    pub fn put_point_var(&mut self, var: &impl Quantity) -> Result<()> {
        let entry = ObjectEntry::PointVar {
            name: var.name().to_string(),
            mesh: var.structure_name().to_string(),
            values: var.values().to_vec(),
        };
        self.put_var(var, entry, ObjectKind::PointVar)
    }

    /// Puts a scalar variable bound to a quad mesh.
    ///
    /// Node-centered variables have one value per node, zone-centered
    /// variables one value per cell of the mesh, if it is in this database.
    pub fn put_quad_var(&mut self, var: &impl Quantity) -> Result<()> {
        let entry = ObjectEntry::QuadVar {
            name: var.name().to_string(),
            mesh: var.structure_name().to_string(),
            centering: var.centering(),
            values: var.values().to_vec(),
        };
        self.put_var(var, entry, ObjectKind::QuadVar)
    }

    /// Writes every object to disk and closes the database.
    pub fn close(mut self) -> Result<PathBuf> {
        self.finalize()?;
        Ok(std::mem::take(&mut self.path))
    }

    fn put_mesh(
        &mut self,
        mesh: &impl Structure,
        entry: ObjectEntry,
        kind: ObjectKind,
    ) -> Result<()> {
        // Variables put earlier must fit the mesh they name.
        for var in self.toc.variables_on(mesh.name()) {
            check_binding(&entry, var)?;
        }
        self.register(entry, kind)?;

        log::debug!(
            "put {} '{}' with {} nodes, bounds {:?}",
            mesh.type_name(),
            mesh.name(),
            mesh.num_nodes(),
            mesh.bounding_box()
        );
        Ok(())
    }

    fn put_var(&mut self, var: &impl Quantity, entry: ObjectEntry, kind: ObjectKind) -> Result<()> {
        validate_name(var.structure_name())?;
        if let Some(mesh) = self.toc.get(var.structure_name()) {
            check_binding(mesh, &entry)?;
        }
        self.register(entry, kind)?;

        log::debug!(
            "put {kind:?} '{}' on '{}', range {:?}",
            var.name(),
            var.structure_name(),
            var.value_range()
        );
        Ok(())
    }

    /// Claims the name of a validated entry and records it. Nothing after
    /// this step can fail, so a rejected put never leaves its name taken.
    fn register(&mut self, entry: ObjectEntry, kind: ObjectKind) -> Result<()> {
        self.registry.register(entry.name(), kind)?;
        self.toc.objects.push(entry);
        Ok(())
    }

    fn object_path(&self, name: &str) -> PathBuf {
        self.path.join(format!("{name}.{OBJECT_EXTENSION}"))
    }

    fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Ok(());
        }
        self.finalized = true;

        if self.registry.is_empty() {
            log::debug!("{} closed without objects", self.path.display());
        }

        let objects = std::mem::take(&mut self.toc.objects);
        let (meshes, mut variables): (Vec<_>, Vec<_>) =
            objects.into_iter().partition(ObjectEntry::is_mesh);

        for mesh in meshes {
            let (bound, rest) = variables
                .into_iter()
                .partition(|v| v.mesh_name() == Some(mesh.name()));
            variables = rest;

            let file = self.object_path(mesh.name());
            vtk::mesh_to_vtk(&self.label, mesh, bound)?.export(&file)?;
        }

        let mut unbound: BTreeMap<String, Vec<ObjectEntry>> = BTreeMap::new();
        for var in variables {
            let mesh = var.mesh_name().unwrap_or_default().to_string();
            unbound.entry(mesh).or_default().push(var);
        }
        for (mesh, vars) in unbound {
            log::debug!(
                "mesh '{mesh}' is not in {}, storing {} variables as field data",
                self.path.display(),
                vars.len()
            );
            let file = self.object_path(&mesh);
            vtk::unbound_to_vtk(&self.label, &mesh, vars)?.export(&file)?;
        }

        log::debug!(
            "finalized {} with {} objects",
            self.path.display(),
            self.registry.len()
        );
        Ok(())
    }
}

impl Drop for DbFile {
    fn drop(&mut self) {
        if !self.finalized {
            log::warn!("{} dropped without close, finalizing", self.path.display());
            if let Err(err) = self.finalize() {
                log::error!("failed to finalize {}: {err}", self.path.display());
            }
        }
    }
}

/// Returns whether `path` names a per-object file.
pub(crate) fn is_object_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == OBJECT_EXTENSION)
}

fn prepare_directory(path: &Path, clobber: bool) -> Result<()> {
    match std::fs::create_dir(path) {
        Ok(()) => return Ok(()),
        Err(err) if clobber && err.kind() == std::io::ErrorKind::AlreadyExists => {}
        Err(err) => return Err(err.into()),
    }

    if path.is_dir() {
        for entry in std::fs::read_dir(path)? {
            let file = entry?.path();
            if is_object_file(&file) {
                std::fs::remove_file(&file)?;
            }
        }
    } else {
        std::fs::remove_file(path)?;
        std::fs::create_dir(path)?;
    }
    Ok(())
}

/// Checks that `var` fits `mesh`.
fn check_binding(mesh: &ObjectEntry, var: &ObjectEntry) -> Result<()> {
    let centering = var.centering().unwrap_or(Centering::Node);
    let expected = mesh
        .expected_len(centering)
        .ok_or_else(|| SpinvizError::IncompatibleMesh {
            variable: var.name().to_string(),
            mesh: mesh.name().to_string(),
        })?;
    check_len(expected, var.values().map_or(0, <[f64]>::len))
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(SpinvizError::SizeMismatch { expected, actual })
    }
}
