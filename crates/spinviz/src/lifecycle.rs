//! Opening and closing the process-wide output file.

use std::path::PathBuf;

use spinviz_core::{Result, SpinvizError, WriterOptions};

use crate::database::Database;
use crate::state::{with_context, with_context_mut};

/// Opens the output file for `index` as the process-wide handle.
///
/// The file is created at `data/spinNNNNN.silo` by default, replacing any
/// existing file. If another file is still open it is closed first.
///
/// # Errors
///
/// Returns an error if the file cannot be created; the handle is then unset.
///
/// # Example
///
/// ```no_run
/// fn main() -> spinviz::Result<()> {
///     spinviz::open(7)?;
///     spinviz::write_point_mesh(&[0.0, 1.0], &[0.0, 0.0], &[0.0, 0.0], "spins")?;
///     spinviz::close()?;
///     Ok(())
/// }
/// ```
pub fn open(index: u32) -> Result<PathBuf> {
    with_context_mut(|ctx| {
        if let Some(previous) = ctx.database.take() {
            log::warn!(
                "opening index {index} while {} is still open, closing it first",
                previous.path().display()
            );
            if let Err(err) = previous.close() {
                log::error!("failed to close previous file: {err}");
            }
        }

        let db = Database::open(index, &ctx.options)?;
        let path = db.path().to_path_buf();
        ctx.database = Some(db);
        Ok(path)
    })
}

/// Closes the process-wide output file and returns its path.
///
/// # Errors
///
/// Returns [`SpinvizError::NotOpen`] if no file is open. The handle is unset
/// even if finalizing the file fails.
pub fn close() -> Result<PathBuf> {
    with_context_mut(|ctx| ctx.database.take().ok_or(SpinvizError::NotOpen)?.close())
}

/// Returns whether an output file is open.
#[must_use]
pub fn is_open() -> bool {
    with_context(|ctx| ctx.database.is_some())
}

/// Returns the path of the open output file.
#[must_use]
pub fn current_path() -> Option<PathBuf> {
    with_context(|ctx| ctx.database.as_ref().map(|db| db.path().to_path_buf()))
}

/// Returns the options used by [`open`].
#[must_use]
pub fn options() -> WriterOptions {
    with_context(|ctx| ctx.options.clone())
}

/// Replaces the options used by [`open`]. An already open file is not
/// affected.
pub fn set_options(options: WriterOptions) {
    with_context_mut(|ctx| ctx.options = options);
}
