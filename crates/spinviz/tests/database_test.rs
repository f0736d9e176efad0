//! Tests for the explicit `Database` handle.

use proptest::prelude::*;
use spinviz::*;

fn options_in(dir: &tempfile::TempDir) -> WriterOptions {
    WriterOptions::default().with_directory(dir.path())
}

#[test]
fn test_point_mesh_and_data() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = Database::open(12, &options_in(&dir)).unwrap();
    assert_eq!(db.index(), 12);
    assert_eq!(db.path(), dir.path().join("spin00012.silo"));

    let n = 100;
    let theta: Vec<f64> = (0..n).map(|i| f64::from(i) * 0.1).collect();
    let x: Vec<f64> = theta.iter().map(|t| t.cos()).collect();
    let y: Vec<f64> = theta.iter().map(|t| t.sin()).collect();
    let z: Vec<f64> = theta.iter().map(|t| t * 0.01).collect();

    db.write_point_mesh(&x, &y, &z, "helix").unwrap();
    db.write_point_data(&x, "sx", "helix").unwrap();
    db.write_point_data(&y, "sy", "helix").unwrap();
    assert_eq!(db.objects().len(), 3);

    let path = db.close().unwrap();
    let reader = DbReader::open(&path).unwrap();
    let coords = reader.read_object("helix").unwrap();
    assert_eq!(coords.len(), 3);
    assert_eq!(coords[1], y);
    assert_eq!(reader.read_variable("sy").unwrap(), y);
}

#[test]
fn test_zone_data_and_optlist() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = Database::open(1, &options_in(&dir)).unwrap();
    db.set_optlist(OptList {
        cycle: Some(250),
        time: Some(1.5),
    });

    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 1.0];
    let zs = [0.0, 1.0];
    db.write_quad_mesh(&xs, &ys, &zs, "grid").unwrap();
    db.write_quad_zone_data(&[1.0, 2.0], [3, 2, 2], "energy", "grid")
        .unwrap();
    assert!(matches!(
        db.write_quad_zone_data(&[1.0; 12], [3, 2, 2], "bad", "grid"),
        Err(SpinvizError::SizeMismatch {
            expected: 2,
            actual: 12
        })
    ));
    let path = db.close().unwrap();

    let reader = DbReader::open(&path).unwrap();
    let energy = reader.get("energy").unwrap();
    assert_eq!(energy.centering(), Some(Centering::Zone));
    assert_eq!(energy.values(), Some(&[1.0, 2.0][..]));

    let options = reader.get("grid").unwrap().options().copied().unwrap();
    assert_eq!(options.cycle, Some(250));
    assert_eq!(options.time, Some(1.5));
}

#[test]
fn test_quad_data_dimension_checks() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = Database::open(2, &options_in(&dir)).unwrap();

    assert!(matches!(
        db.write_quad_data(&[1.0; 7], [2, 2, 2], "density", "grid"),
        Err(SpinvizError::SizeMismatch {
            expected: 8,
            actual: 7
        })
    ));
    assert!(matches!(
        db.write_quad_data(&[], [0, 2, 2], "density", "grid"),
        Err(SpinvizError::InvalidDimensions(_))
    ));
    assert!(matches!(
        db.write_quad_mesh(&[], &[0.0], &[0.0], "grid"),
        Err(SpinvizError::InvalidDimensions(_))
    ));
    assert!(db.objects().is_empty());
}

#[test]
fn test_dropped_database_is_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = {
        let mut db = Database::open(5, &options_in(&dir)).unwrap();
        db.write_point_data(&[1.0, 2.0], "sx", "spins").unwrap();
        db.path().to_path_buf()
    };

    let reader = DbReader::open(&path).unwrap();
    assert_eq!(reader.read_variable("sx").unwrap(), [1.0, 2.0]);
}

#[test]
fn test_no_clobber_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = options_in(&dir);
    Database::open(9, &options).unwrap().close().unwrap();

    options.clobber = false;
    assert!(matches!(
        Database::open(9, &options),
        Err(SpinvizError::IoError(_))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn open_close_creates_indexed_file(index in 0u32..1_000_000) {
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(&dir);

        let db = Database::open(index, &options).unwrap();
        let path = db.close().unwrap();

        prop_assert_eq!(&path, &options.path_for(index));
        prop_assert!(path.is_dir());
        let name = format!("spin{index:05}.silo");
        prop_assert_eq!(path.file_name().unwrap().to_str().unwrap(), name.as_str());
    }
}
