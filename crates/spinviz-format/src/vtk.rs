//! Conversion between database objects and legacy VTK datasets.
//!
//! A point mesh becomes a `POLYDATA` dataset with one vertex cell per point,
//! a quad mesh a `RECTILINEAR_GRID`. Variables bound to a mesh are stored in
//! the mesh's file as `SCALARS` arrays, node-centered ones under
//! `POINT_DATA` and zone-centered ones under `CELL_DATA`. Variables whose
//! mesh was never written go to a `FIELD` dataset named after that mesh.

use spinviz_core::{Centering, Result, SpinvizError};
use vtkio::model::{
    Attribute, Attributes, ByteOrder, Coordinates, DataSet, Extent, FieldArray, IOBuffer, Piece,
    PolyDataPiece, RectilinearGridPiece, Version, VertexNumbers, Vtk,
};

use crate::toc::{ObjectEntry, OptList};

const FIELD_DATA: &str = "FieldData";
const CYCLE: &str = "CYCLE";
const TIME: &str = "TIME";

/// Builds the dataset for `mesh` with the variables bound to it.
pub(crate) fn mesh_to_vtk(label: &str, mesh: ObjectEntry, vars: Vec<ObjectEntry>) -> Result<Vtk> {
    let mut data = Attributes::new();
    for var in vars {
        let centering = var.centering().unwrap_or_default();
        let (name, values) = into_values(var)?;
        let attribute = Attribute::scalars(name, 1).with_data(IOBuffer::F64(values));
        match centering {
            Centering::Node => data.point.push(attribute),
            Centering::Zone => data.cell.push(attribute),
        }
    }

    let dataset = match mesh {
        ObjectEntry::PointMesh {
            coords, options, ..
        } => {
            push_options(&mut data, options);
            let [x, y, z] = coords;
            let points: Vec<f64> = x
                .iter()
                .zip(&y)
                .zip(&z)
                .flat_map(|((&px, &py), &pz)| [px, py, pz])
                .collect();
            let verts = match u32::try_from(x.len()) {
                Ok(0) => None,
                Ok(n) => Some(VertexNumbers::Legacy {
                    num_cells: n,
                    vertices: (0..n).flat_map(|i| [1, i]).collect(),
                }),
                Err(_) => return Err(too_large(x.len())),
            };
            DataSet::inline(PolyDataPiece {
                points: IOBuffer::F64(points),
                verts,
                lines: None,
                polys: None,
                strips: None,
                data,
            })
        }
        ObjectEntry::QuadMesh { axes, options, .. } => {
            push_options(&mut data, options);
            let mut dims = [0u32; 3];
            for (dim, axis) in dims.iter_mut().zip(&axes) {
                *dim = u32::try_from(axis.len()).map_err(|_| too_large(axis.len()))?;
            }
            let [x, y, z] = axes;
            DataSet::inline(RectilinearGridPiece {
                extent: Extent::Dims(dims),
                coords: Coordinates {
                    x: IOBuffer::F64(x),
                    y: IOBuffer::F64(y),
                    z: IOBuffer::F64(z),
                },
                data,
            })
        }
        other => {
            return Err(SpinvizError::InvalidData(format!(
                "'{}' is not a mesh",
                other.name()
            )))
        }
    };

    Ok(new_vtk(label, dataset))
}

/// Builds a field dataset holding variables bound to the absent mesh `mesh`.
pub(crate) fn unbound_to_vtk(label: &str, mesh: &str, vars: Vec<ObjectEntry>) -> Result<Vtk> {
    let data_array = vars
        .into_iter()
        .map(|var| {
            let (name, values) = into_values(var)?;
            Ok(FieldArray {
                name,
                elem: 1,
                data: IOBuffer::F64(values),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(new_vtk(
        label,
        DataSet::Field {
            name: mesh.to_string(),
            data_array,
        },
    ))
}

/// Rebuilds the objects stored in one file. `name` is the file stem, which
/// names the mesh.
pub(crate) fn read_entries(name: &str, vtk: Vtk) -> Result<Vec<ObjectEntry>> {
    match vtk.data {
        DataSet::PolyData { pieces, .. } => {
            let piece = single_piece(name, pieces)?;
            let points = into_f64(name, piece.points)?;
            if points.len() % 3 != 0 {
                return Err(SpinvizError::InvalidData(format!(
                    "'{name}' has {} point coordinates, not a multiple of 3",
                    points.len()
                )));
            }

            let npts = points.len() / 3;
            let mut coords = [
                Vec::with_capacity(npts),
                Vec::with_capacity(npts),
                Vec::with_capacity(npts),
            ];
            for point in points.chunks_exact(3) {
                for (axis, &value) in coords.iter_mut().zip(point) {
                    axis.push(value);
                }
            }

            let mesh = ObjectEntry::PointMesh {
                name: name.to_string(),
                coords,
                options: OptList::default(),
            };
            read_mesh_data(mesh, piece.data)
        }
        DataSet::RectilinearGrid { pieces, .. } => {
            let piece = single_piece(name, pieces)?;
            let Coordinates { x, y, z } = piece.coords;
            let mesh = ObjectEntry::QuadMesh {
                name: name.to_string(),
                axes: [into_f64(name, x)?, into_f64(name, y)?, into_f64(name, z)?],
                options: OptList::default(),
            };
            read_mesh_data(mesh, piece.data)
        }
        DataSet::Field { name: mesh, data_array } => data_array
            .into_iter()
            .map(|array| {
                Ok(ObjectEntry::Unbound {
                    values: into_f64(&array.name, array.data)?,
                    name: array.name,
                    mesh: mesh.clone(),
                })
            })
            .collect(),
        _ => Err(SpinvizError::InvalidData(format!(
            "'{name}' is neither a point mesh nor a quad mesh"
        ))),
    }
}

/// Reads the variables and metadata stored with `mesh`, checking every
/// array against the mesh size.
fn read_mesh_data(mut mesh: ObjectEntry, data: Attributes) -> Result<Vec<ObjectEntry>> {
    let mut vars = Vec::new();
    let centered = data
        .point
        .into_iter()
        .map(|a| (Centering::Node, a))
        .chain(data.cell.into_iter().map(|a| (Centering::Zone, a)));

    for (centering, attribute) in centered {
        match attribute {
            Attribute::DataArray(array) => {
                let values = into_f64(&array.name, array.data)?;
                let expected = mesh.expected_len(centering).ok_or_else(|| {
                    SpinvizError::InvalidData(format!(
                        "'{}' has {centering:?}-centered data it cannot hold",
                        mesh.name()
                    ))
                })?;
                if values.len() != expected {
                    return Err(SpinvizError::InvalidData(format!(
                        "'{}' holds {} values, '{}' needs {expected}",
                        array.name,
                        values.len(),
                        mesh.name()
                    )));
                }

                let mesh_name = mesh.name().to_string();
                vars.push(if matches!(mesh, ObjectEntry::PointMesh { .. }) {
                    ObjectEntry::PointVar {
                        name: array.name,
                        mesh: mesh_name,
                        values,
                    }
                } else {
                    ObjectEntry::QuadVar {
                        name: array.name,
                        mesh: mesh_name,
                        centering,
                        values,
                    }
                });
            }
            Attribute::Field { name, data_array } if name == FIELD_DATA => {
                if let ObjectEntry::PointMesh { options, .. } | ObjectEntry::QuadMesh { options, .. } =
                    &mut mesh
                {
                    *options = read_options(data_array);
                }
            }
            Attribute::Field { name, .. } => {
                log::debug!("skipping field '{name}' on '{}'", mesh.name());
            }
        }
    }

    let mut entries = Vec::with_capacity(vars.len() + 1);
    entries.push(mesh);
    entries.extend(vars);
    Ok(entries)
}

fn push_options(data: &mut Attributes, options: OptList) {
    if options.is_empty() {
        return;
    }

    let mut data_array = Vec::new();
    if let Some(cycle) = options.cycle {
        data_array.push(FieldArray {
            name: CYCLE.to_string(),
            elem: 1,
            data: IOBuffer::I32(vec![cycle]),
        });
    }
    if let Some(time) = options.time {
        data_array.push(FieldArray {
            name: TIME.to_string(),
            elem: 1,
            data: IOBuffer::F64(vec![time]),
        });
    }
    data.point.push(Attribute::Field {
        name: FIELD_DATA.to_string(),
        data_array,
    });
}

fn read_options(data_array: Vec<FieldArray>) -> OptList {
    let mut options = OptList::default();
    for array in data_array {
        match (array.name.as_str(), array.data) {
            (CYCLE, IOBuffer::I32(v)) => options.cycle = v.first().copied(),
            (TIME, IOBuffer::F64(v)) => options.time = v.first().copied(),
            (TIME, IOBuffer::F32(v)) => options.time = v.first().copied().map(f64::from),
            (other, _) => log::debug!("skipping field array '{other}'"),
        }
    }
    options
}

fn new_vtk(label: &str, data: DataSet) -> Vtk {
    Vtk {
        version: Version { major: 4, minor: 2 },
        // Legacy titles are a single line.
        title: label.lines().next().unwrap_or_default().to_string(),
        byte_order: ByteOrder::BigEndian,
        file_path: None,
        data,
    }
}

fn into_values(var: ObjectEntry) -> Result<(String, Vec<f64>)> {
    match var {
        ObjectEntry::PointVar { name, values, .. }
        | ObjectEntry::QuadVar { name, values, .. }
        | ObjectEntry::Unbound { name, values, .. } => Ok((name, values)),
        mesh => Err(SpinvizError::InvalidData(format!(
            "'{}' is not a variable",
            mesh.name()
        ))),
    }
}

fn into_f64(name: &str, buffer: IOBuffer) -> Result<Vec<f64>> {
    match buffer {
        IOBuffer::F64(values) => Ok(values),
        IOBuffer::F32(values) => Ok(values.into_iter().map(f64::from).collect()),
        _ => Err(SpinvizError::InvalidData(format!(
            "'{name}' is not floating point data"
        ))),
    }
}

fn single_piece<P>(name: &str, pieces: Vec<Piece<P>>) -> Result<P> {
    match pieces.into_iter().next() {
        Some(Piece::Inline(piece)) => Ok(*piece),
        _ => Err(SpinvizError::InvalidData(format!(
            "'{name}' has no inline piece"
        ))),
    }
}

fn too_large(len: usize) -> SpinvizError {
    SpinvizError::InvalidData(format!("{len} nodes do not fit a VTK dataset"))
}
