//! Explicit output file handle.

use std::path::{Path, PathBuf};

use spinviz_core::{Centering, Result, WriterOptions};
use spinviz_format::{DbFile, ObjectEntry, OptList};
use spinviz_structures::{PointMesh, PointScalarVariable, QuadMesh, QuadScalarVariable};

/// One open output file.
///
/// Returned by [`Database::open`] and consumed by [`Database::close`].
/// Dropping a `Database` without closing it still finalizes the file.
pub struct Database {
    index: u32,
    db: DbFile,
    optlist: OptList,
}

impl Database {
    /// Creates the output database for `index`, e.g. `data/spin00007.silo`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created, for instance
    /// because the output directory is missing.
    pub fn open(index: u32, options: &WriterOptions) -> Result<Self> {
        if options.create_directory {
            std::fs::create_dir_all(&options.directory)?;
        }

        let path = options.path_for(index);
        let db = DbFile::create(&path, &options.label, options.clobber)?;
        log::info!("opened {}", path.display());

        Ok(Self {
            index,
            db,
            optlist: OptList::default(),
        })
    }

    /// Returns the index the file was opened with.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.db.path()
    }

    /// Returns the objects written so far.
    #[must_use]
    pub fn objects(&self) -> &[ObjectEntry] {
        self.db.objects()
    }

    /// Sets the cycle and time attached to every mesh written from now on.
    pub fn set_optlist(&mut self, optlist: OptList) -> &mut Self {
        self.optlist = optlist;
        self
    }

    /// Writes a 3-D point mesh from three parallel coordinate arrays.
    pub fn write_point_mesh(
        &mut self,
        x: &[f64],
        y: &[f64],
        z: &[f64],
        mesh_id: &str,
    ) -> Result<()> {
        self.db
            .put_point_mesh(&PointMesh::new(mesh_id, x, y, z)?, &self.optlist)
    }

    /// Writes a scalar field with one value per point of the mesh `mesh_id`.
    pub fn write_point_data(
        &mut self,
        data: &[f64],
        value_label: &str,
        mesh_id: &str,
    ) -> Result<()> {
        self.db
            .put_point_var(&PointScalarVariable::new(value_label, mesh_id, data))
    }

    /// Writes a 3-D rectilinear quad mesh from its axis arrays.
    pub fn write_quad_mesh(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        zs: &[f64],
        mesh_id: &str,
    ) -> Result<()> {
        self.db
            .put_quad_mesh(&QuadMesh::new(mesh_id, xs, ys, zs)?, &self.optlist)
    }

    /// Writes a node-centered scalar field over a grid with node dimensions
    /// `dims`.
    pub fn write_quad_data(
        &mut self,
        data: &[f64],
        dims: [usize; 3],
        value_label: &str,
        mesh_id: &str,
    ) -> Result<()> {
        let var = QuadScalarVariable::new(value_label, mesh_id, data, dims, Centering::Node)?;
        self.db.put_quad_var(&var)
    }

    /// Writes a zone-centered scalar field over a grid with node dimensions
    /// `dims`, one value per cell.
    pub fn write_quad_zone_data(
        &mut self,
        data: &[f64],
        dims: [usize; 3],
        value_label: &str,
        mesh_id: &str,
    ) -> Result<()> {
        let var = QuadScalarVariable::new(value_label, mesh_id, data, dims, Centering::Zone)?;
        self.db.put_quad_var(&var)
    }

    /// Writes all buffered objects and closes the database, returning its path.
    pub fn close(self) -> Result<PathBuf> {
        let path = self.db.close()?;
        log::info!("closed {}", path.display());
        Ok(path)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("index", &self.index)
            .field("path", &self.path())
            .field("objects", &self.objects().len())
            .finish()
    }
}
