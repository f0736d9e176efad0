//! Database reader.

use std::path::{Path, PathBuf};

use spinviz_core::{Result, SpinvizError};
use vtkio::model::Vtk;

use crate::toc::{ObjectEntry, TableOfContents};
use crate::vtk;
use crate::writer::is_object_file;

/// A closed database loaded for reading.
pub struct DbReader {
    path: PathBuf,
    toc: TableOfContents,
}

impl DbReader {
    /// Opens a database directory and loads every object in it.
    ///
    /// Files are read in name order. Arrays whose sizes do not match their
    /// mesh are rejected with [`SpinvizError::InvalidData`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&path)? {
            let file = entry?.path();
            if is_object_file(&file) {
                files.push(file);
            }
        }
        files.sort();

        let mut toc = TableOfContents::default();
        for file in files {
            let name = file
                .file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_else(|| {
                    SpinvizError::InvalidData(format!("bad object file {}", file.display()))
                })?
                .to_string();

            let vtk = Vtk::import(&file)?;
            if toc.label.is_none() {
                toc.label = Some(vtk.title.clone());
            }
            toc.objects.extend(vtk::read_entries(&name, vtk)?);
        }

        log::debug!(
            "read {} objects from {}",
            toc.objects.len(),
            path.display()
        );
        Ok(Self { path, toc })
    }

    /// Returns the path of the database.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the table of contents.
    pub fn toc(&self) -> &TableOfContents {
        &self.toc
    }

    /// Returns the database label, or `None` if it holds no objects.
    pub fn label(&self) -> Option<&str> {
        self.toc.label.as_deref()
    }

    /// Looks up an object by name.
    pub fn get(&self, name: &str) -> Result<&ObjectEntry> {
        self.toc
            .get(name)
            .ok_or_else(|| SpinvizError::ObjectNotFound(name.to_string()))
    }

    /// Returns every array of the named object: the coordinate arrays of a
    /// mesh, or the single data array of a variable.
    pub fn read_object(&self, name: &str) -> Result<Vec<&[f64]>> {
        let entry = self.get(name)?;
        match (entry.coords(), entry.values()) {
            (Some(coords), _) => Ok(coords.to_vec()),
            (None, Some(values)) => Ok(vec![values]),
            (None, None) => Err(SpinvizError::ObjectNotFound(name.to_string())),
        }
    }

    /// Returns the data array of the named variable.
    pub fn read_variable(&self, name: &str) -> Result<&[f64]> {
        self.get(name)?
            .values()
            .ok_or_else(|| SpinvizError::ObjectNotFound(name.to_string()))
    }
}
