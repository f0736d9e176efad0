//! Integration tests for the process-wide write API.
//!
//! Note: the output handle is process-wide state, so every test that touches
//! it is combined into a single test function that runs the steps in order.

use spinviz::*;

fn not_open<T>(result: Result<T>) -> bool {
    matches!(result, Err(SpinvizError::NotOpen))
}

/// Main integration test that runs all lifecycle checks in sequence.
#[test]
fn test_basics() {
    let dir = tempfile::tempdir().expect("tempdir");
    set_options(WriterOptions::default().with_directory(dir.path()));
    assert_eq!(options().directory, dir.path());

    let axis = [0.0, 1.0];
    let points = [0.0, 1.0, 2.0];
    let eight = [1.0; 8];

    // Test 1: every write and close fails before the first open
    {
        assert!(!is_open());
        assert!(current_path().is_none());
        assert!(not_open(write_point_mesh(&points, &points, &points, "spins")));
        assert!(not_open(write_point_data(&points, "sx", "spins")));
        assert!(not_open(write_quad_mesh(&axis, &axis, &axis, "grid")));
        assert!(not_open(write_quad_data(&eight, [2, 2, 2], "density", "grid")));
        assert!(not_open(close()));
    }

    // Test 2: open then close produces the file at the indexed path
    for index in [0, 1, 42, 99_999] {
        let path = open(index).expect("open failed");
        assert_eq!(path, dir.path().join(format!("spin{index:05}.silo")));
        assert!(is_open());
        assert_eq!(close().expect("close failed"), path);
        assert!(path.is_dir());
        // No objects, so no file carries the label
        assert_eq!(DbReader::open(&path).expect("reader").label(), None);
    }

    // Test 3: writes keep the handle set
    {
        open(3).expect("open failed");
        write_point_mesh(&points, &points, &points, "spins").expect("point mesh");
        assert!(is_open());
        write_point_data(&points, "sx", "spins").expect("point data");
        write_point_data(&points, "sy", "spins").expect("point data");
        assert!(is_open());

        // Bad input is an error but leaves the file open
        assert!(matches!(
            write_point_mesh(&points, &points, &axis, "ragged"),
            Err(SpinvizError::SizeMismatch { .. })
        ));
        assert!(matches!(
            write_point_data(&points, "sx", "spins"),
            Err(SpinvizError::ObjectExists(_))
        ));
        assert!(is_open());

        let path = close().expect("close failed");
        let reader = DbReader::open(&path).expect("reader");
        assert_eq!(reader.label(), Some("s3 spin components"));
        assert_eq!(reader.toc().objects.len(), 3);
        assert_eq!(reader.toc().variables_on("spins").count(), 2);
    }

    // Test 4: after close the handle is unset again
    {
        assert!(!is_open());
        assert!(not_open(write_point_mesh(&points, &points, &points, "spins")));
        assert!(not_open(close()));
    }

    // Test 5: opening twice closes the first file instead of failing
    {
        let first = open(10).expect("first open");
        write_point_data(&points, "sz", "spins").expect("point data");
        let second = open(11).expect("second open");
        assert_eq!(current_path(), Some(second.clone()));

        let reader = DbReader::open(&first).expect("first file was finalized");
        assert_eq!(reader.toc().objects.len(), 1);
        // The mesh lives in another file, so the variable reads back unbound
        let sz = reader.get("sz").expect("sz");
        assert!(matches!(sz, ObjectEntry::Unbound { .. }));
        assert_eq!(sz.kind(), None);
        assert_eq!(sz.mesh_name(), Some("spins"));

        close().expect("close failed");
        assert!(DbReader::open(&second).is_ok());
    }

    // Test 6: round trip of a 2x2x2 quad mesh with node data
    {
        open(7).expect("open failed");
        let xs = [0.0, 1.0];
        let ys = [0.0, 2.0];
        let zs = [0.0, 3.0];
        let density = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];
        write_quad_mesh(&xs, &ys, &zs, "grid").expect("quad mesh");
        write_quad_data(&density, [2, 2, 2], "density", "grid").expect("quad data");
        let path = close().expect("close failed");
        assert_eq!(path, dir.path().join("spin00007.silo"));

        let reader = DbReader::open(&path).expect("reader");
        assert_eq!(reader.toc().meshes().count(), 1);
        assert_eq!(reader.toc().variables().count(), 1);

        let var = reader.get("density").expect("density");
        assert_eq!(var.mesh_name(), Some("grid"));
        match var {
            ObjectEntry::QuadVar { centering, .. } => assert_eq!(*centering, Centering::Node),
            other => panic!("unexpected entry {other:?}"),
        }
        let grid = reader.get("grid").expect("grid");
        assert_eq!(grid.kind(), Some(ObjectKind::QuadMesh));
        assert_eq!(grid.dims(), Some([2, 2, 2]));
        assert_eq!(grid.extents(), Some((DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0))));
        assert_eq!(reader.read_variable("density").unwrap(), density);
        assert_eq!(
            reader.read_object("grid").unwrap(),
            vec![&xs[..], &ys[..], &zs[..]]
        );
    }

    // Test 7: a failed open leaves the handle unset
    {
        set_options(WriterOptions::default().with_directory(dir.path().join("missing")));
        assert!(open(1).is_err());
        assert!(!is_open());
        assert!(not_open(write_quad_mesh(&axis, &axis, &axis, "grid")));

        let mut options = options();
        options.create_directory = true;
        set_options(options);
        let path = open(1).expect("open with create_directory");
        assert!(path.starts_with(dir.path().join("missing")));
        close().expect("close failed");
    }
}
