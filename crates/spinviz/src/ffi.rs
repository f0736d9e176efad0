//! C ABI entry points for Fortran simulations.
//!
//! Symbol names follow the gfortran convention of a trailing underscore, so a
//! Fortran program can `call open_silo(index)` directly. Scalars are passed
//! by reference and strings must be NUL-terminated (`'spins'//char(0)`).
//!
//! These functions cannot return errors. Every entry point sets up
//! `env_logger` on first use, so diagnostics reach stderr whichever one a
//! program calls first. Failing to create a file is logged and leaves the
//! handle unset. Writing or closing without an open file logs
//! and aborts the process. Any other write error is logged and ignored.

#![allow(unsafe_code)]

use std::ffi::{c_char, c_int, CStr};

use spinviz_core::{Result, SpinvizError};

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

fn report(operation: &str, result: Result<()>) {
    match result {
        Ok(()) => {}
        Err(SpinvizError::NotOpen) => {
            log::error!("{operation}: no silo file open");
            std::process::abort();
        }
        Err(err) => log::error!("{operation}: {err}"),
    }
}

/// Builds a slice from a Fortran array argument. A null pointer or a zero
/// length yields an empty slice.
unsafe fn array<'a>(ptr: *const f64, len: usize) -> &'a [f64] {
    if len == 0 || ptr.is_null() {
        &[]
    } else {
        std::slice::from_raw_parts(ptr, len)
    }
}

unsafe fn name<'a>(ptr: *const c_char) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(SpinvizError::InvalidName(String::new()));
    }
    let cstr = CStr::from_ptr(ptr);
    cstr.to_str()
        .map_err(|_| SpinvizError::InvalidName(cstr.to_string_lossy().into_owned()))
}

/// Non-positive counts are treated as zero.
fn dim(n: c_int) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Opens `data/spin{index:05}.silo` as the process-wide output file.
#[no_mangle]
pub extern "C" fn open_silo_(index: &c_int) {
    init_logging();

    let Ok(index) = u32::try_from(*index) else {
        log::error!("Could not open silo file: negative index {index}");
        return;
    };
    if let Err(err) = crate::open(index) {
        log::error!("Could not open silo file: {err}");
    }
}

/// Writes a point mesh of `npts` points.
///
/// # Safety
///
/// `x`, `y` and `z` must each point to `npts` doubles and `mesh_id` to a
/// NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn write_silo_point_mesh_(
    x: *const f64,
    y: *const f64,
    z: *const f64,
    npts: &c_int,
    mesh_id: *const c_char,
) {
    init_logging();
    let result = crate::state::with_database(|db| {
        let npts = dim(*npts);
        let mesh_id = name(mesh_id)?;
        db.write_point_mesh(array(x, npts), array(y, npts), array(z, npts), mesh_id)
    });
    report("write_silo_point_mesh", result);
}

/// Writes a scalar field of `npts` values on a point mesh.
///
/// # Safety
///
/// `data` must point to `npts` doubles; `value_label` and `mesh_id` must be
/// NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn write_silo_point_data_(
    data: *const f64,
    npts: &c_int,
    value_label: *const c_char,
    mesh_id: *const c_char,
) {
    init_logging();
    let result = crate::state::with_database(|db| {
        db.write_point_data(array(data, dim(*npts)), name(value_label)?, name(mesh_id)?)
    });
    report("write_silo_point_data", result);
}

/// Writes a rectilinear quad mesh with `nx`, `ny` and `nz` nodes per axis.
///
/// # Safety
///
/// `xs`, `ys` and `zs` must point to `nx`, `ny` and `nz` doubles and
/// `mesh_id` to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn write_silo_quad_mesh_(
    xs: *const f64,
    ys: *const f64,
    zs: *const f64,
    nx: &c_int,
    ny: &c_int,
    nz: &c_int,
    mesh_id: *const c_char,
) {
    init_logging();
    let result = crate::state::with_database(|db| {
        let mesh_id = name(mesh_id)?;
        db.write_quad_mesh(
            array(xs, dim(*nx)),
            array(ys, dim(*ny)),
            array(zs, dim(*nz)),
            mesh_id,
        )
    });
    report("write_silo_quad_mesh", result);
}

/// Writes a node-centered scalar field over an `nx × ny × nz` grid.
///
/// # Safety
///
/// `data` must point to `nx * ny * nz` doubles; `value_label` and `mesh_id`
/// must be NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn write_silo_quad_data_(
    data: *const f64,
    nx: &c_int,
    ny: &c_int,
    nz: &c_int,
    value_label: *const c_char,
    mesh_id: *const c_char,
) {
    init_logging();
    let result = crate::state::with_database(|db| {
        let dims = [dim(*nx), dim(*ny), dim(*nz)];
        let len = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or(SpinvizError::InvalidDimensions(dims))?;
        let data = array(data, len);
        db.write_quad_data(data, dims, name(value_label)?, name(mesh_id)?)
    });
    report("write_silo_quad_data", result);
}

/// Closes the process-wide output file.
#[no_mangle]
pub extern "C" fn close_silo_() {
    init_logging();
    report("close_silo", crate::close().map(|_| ()));
}
