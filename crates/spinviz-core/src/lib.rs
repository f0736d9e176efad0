//! Core abstractions for spinviz.
//!
//! This crate provides the fundamental traits and types used throughout spinviz:
//! - [`Structure`] trait for meshes (point meshes, quad meshes)
//! - [`Quantity`] trait for data bound to meshes (scalar fields)
//! - The per-file object [`Registry`]
//! - [`WriterOptions`] controlling output paths and file creation

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod options;
pub mod quantity;
pub mod registry;
pub mod structure;

pub use error::{Result, SpinvizError};
pub use options::{WriterOptions, OPTIONS_ENV_VAR};
pub use quantity::{expected_quad_var_len, Centering, Quantity};
pub use registry::{validate_name, ObjectKind, Registry};
pub use structure::Structure;

// Re-export glam types for convenience
pub use glam::DVec3;
