//! Process-wide output handle.

use std::sync::{OnceLock, RwLock};

use spinviz_core::{Result, SpinvizError, WriterOptions};

use crate::database::Database;

/// Global context singleton.
static CONTEXT: OnceLock<RwLock<Context>> = OnceLock::new();

/// The global context behind the flat write API.
#[derive(Debug)]
pub struct Context {
    /// The open output file, if any.
    pub database: Option<Database>,

    /// Options used by the next open.
    pub options: WriterOptions,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            database: None,
            options: WriterOptions::from_env(),
        }
    }
}

fn context() -> &'static RwLock<Context> {
    CONTEXT.get_or_init(|| RwLock::new(Context::default()))
}

/// Access the global context for reading.
pub fn with_context<F, R>(f: F) -> R
where
    F: FnOnce(&Context) -> R,
{
    let guard = context()
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    f(&guard)
}

/// Access the global context for writing.
pub fn with_context_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Context) -> R,
{
    let mut guard = context()
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    f(&mut guard)
}

/// Executes a closure with the open output file.
///
/// Returns [`SpinvizError::NotOpen`] if no file is open.
pub fn with_database<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&mut Database) -> Result<R>,
{
    with_context_mut(|ctx| {
        let db = ctx.database.as_mut().ok_or(SpinvizError::NotOpen)?;
        f(db)
    })
}
