//! Error types for spinviz.

use thiserror::Error;

/// The main error type for spinviz operations.
#[derive(Error, Debug)]
pub enum SpinvizError {
    /// No output file is open.
    #[error("no output file open - call spinviz::open() first")]
    NotOpen,

    /// An object with the given name was already written to the file.
    #[error("object '{0}' already exists in this file")]
    ObjectExists(String),

    /// An object with the given name was not found in the file.
    #[error("object '{0}' not found")]
    ObjectNotFound(String),

    /// Object names must be usable as VTK array and file names.
    #[error("invalid object name {0:?}")]
    InvalidName(String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Grid dimensions that cannot describe the requested data.
    #[error("invalid dimensions {0:?}")]
    InvalidDimensions([usize; 3]),

    /// A variable whose centering the named mesh cannot hold.
    #[error("variable '{variable}' cannot be bound to '{mesh}'")]
    IncompatibleMesh { variable: String, mesh: String },

    /// A file that decodes but does not describe a valid mesh or variable.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// VTK import or export error.
    #[error("VTK error: {0}")]
    VtkError(#[from] vtkio::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for spinviz operations.
pub type Result<T> = std::result::Result<T, SpinvizError>;
