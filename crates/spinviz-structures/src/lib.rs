//! Structure implementations for spinviz.
//!
//! This crate provides validated views over simulation-owned arrays:
//! - Point meshes and their scalar variables
//! - Quad (rectilinear) meshes and their node or zone scalar variables
//!
//! Meshes implement [`spinviz_core::Structure`] and variables
//! [`spinviz_core::Quantity`], which is what a `spinviz_format::DbFile`
//! writes.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod point_mesh;
pub mod quad_mesh;

pub use point_mesh::{PointMesh, PointScalarVariable};
pub use quad_mesh::{QuadMesh, QuadScalarVariable};
