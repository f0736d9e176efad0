//! Registry of objects written to one output file.

use std::collections::HashMap;

use crate::error::{Result, SpinvizError};

/// Kind of object stored in an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Unstructured point mesh.
    PointMesh,
    /// Scalar variable on a point mesh.
    PointVar,
    /// Rectilinear quad mesh.
    QuadMesh,
    /// Scalar variable on a quad mesh.
    QuadVar,
}

impl ObjectKind {
    /// Returns whether this kind is a mesh (as opposed to a variable).
    pub fn is_mesh(self) -> bool {
        matches!(self, Self::PointMesh | Self::QuadMesh)
    }
}

/// Checks that `name` can name an object.
///
/// Meshes are stored one file per name and variables as named VTK arrays,
/// so names must be non-empty, free of whitespace, control characters and
/// path separators, and must not be `.` or `..`.
pub fn validate_name(name: &str) -> Result<()> {
    let bad_char = |c: char| c.is_whitespace() || c.is_control() || c == '/' || c == '\\';
    if name.is_empty() || name == "." || name == ".." || name.contains(bad_char) {
        return Err(SpinvizError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Registry of object names within one file.
///
/// Meshes and variables share a single flat namespace, so a variable cannot
/// reuse the name of a mesh and vice versa.
#[derive(Debug, Default)]
pub struct Registry {
    objects: HashMap<String, ObjectKind>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an object name.
    ///
    /// Returns an error if the name is invalid or already taken.
    pub fn register(&mut self, name: &str, kind: ObjectKind) -> Result<()> {
        validate_name(name)?;

        if self.objects.contains_key(name) {
            return Err(SpinvizError::ObjectExists(name.to_string()));
        }

        self.objects.insert(name.to_string(), kind);
        Ok(())
    }

    /// Checks if an object with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Returns the total number of registered objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
