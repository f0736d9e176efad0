//! Output databases for spinviz.
//!
//! A database is a directory holding any number of named meshes and scalar
//! variables, stored as legacy VTK files through [`vtkio`]:
//! - One file per mesh, `<mesh>.vtk`, with the variables bound to it
//! - One field file per absent mesh for variables whose mesh was never written
//! - The [`toc`] entries that describe both
//!
//! [`DbFile`] writes databases, [`DbReader`] reads them back.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod reader;
pub mod toc;
mod vtk;
pub mod writer;

pub use reader::DbReader;
pub use toc::{ObjectEntry, OptList, TableOfContents};
pub use writer::{DbFile, OBJECT_EXTENSION};
