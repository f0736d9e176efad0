//! spinviz: visualization dumps for numerical simulations.
//!
//! spinviz writes meshes and the scalar fields sampled on them to numbered
//! output databases, one per dump. A database is a directory holding one
//! legacy VTK file per mesh. It is meant to be called from a
//! simulation's output step, including from Fortran through the [`ffi`]
//! entry points.
//!
//! # Quick Start
//!
//! ```no_run
//! use spinviz::*;
//!
//! fn main() -> Result<()> {
//!     // Creates the directory data/spin00007.silo
//!     open(7)?;
//!
//!     let axis = [0.0, 1.0];
//!     write_quad_mesh(&axis, &axis, &axis, "grid")?;
//!
//!     let density = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//!     write_quad_data(&density, [2, 2, 2], "density", "grid")?;
//!
//!     close()?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! spinviz uses a paradigm of **meshes** and **variables**:
//!
//! - A **mesh** is a geometric object: a [`PointMesh`] or a [`QuadMesh`]
//! - A **variable** is a scalar field bound to a mesh by name
//!
//! The flat functions ([`open`], [`write_point_mesh`], ..., [`close`]) act on
//! one process-wide output database. [`Database`] is the same thing as an
//! explicit value, for callers that prefer to own the handle.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

mod database;
pub mod ffi;
mod lifecycle;
mod point_mesh;
mod quad_mesh;
mod state;

// Re-export core types
pub use spinviz_core::{
    error::{Result, SpinvizError},
    options::{WriterOptions, OPTIONS_ENV_VAR},
    quantity::{Centering, Quantity},
    registry::ObjectKind,
    structure::Structure,
    DVec3,
};

// Re-export format types
pub use spinviz_format::{DbFile, DbReader, ObjectEntry, OptList, TableOfContents};

// Re-export structures
pub use spinviz_structures::{PointMesh, PointScalarVariable, QuadMesh, QuadScalarVariable};

pub use database::Database;
pub use lifecycle::{close, current_path, is_open, open, options, set_options};
pub use point_mesh::{write_point_data, write_point_mesh};
pub use quad_mesh::{write_quad_data, write_quad_mesh};
pub use state::{with_context, with_context_mut, with_database, Context};
