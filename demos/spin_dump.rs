//! Demo simulating a spin lattice and dumping it every few steps.
//!
//! Writes the databases `data/spin00000.silo`, `data/spin00001.silo`, ...
//! with a quad mesh of the lattice, one node field per spin component, and a
//! point mesh of a few tracer particles. Each database is a directory of
//! legacy VTK files that VisIt or ParaView can open.
//!
//! Run with: `cargo run --example spin_dump`

use spinviz::*;

const N: usize = 8;
const STEPS: u32 = 5;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut options = options();
    options.create_directory = true;
    set_options(options);

    let axis: Vec<f64> = (0..N).map(|i| i as f64 / (N - 1) as f64).collect();

    for step in 0..STEPS {
        let phase = f64::from(step) * 0.3;

        let mut sx = Vec::with_capacity(N * N * N);
        let mut sy = Vec::with_capacity(N * N * N);
        let mut sz = Vec::with_capacity(N * N * N);
        for k in 0..N {
            for j in 0..N {
                for i in 0..N {
                    let angle = phase + axis[i] * std::f64::consts::TAU;
                    let tilt = axis[j] * std::f64::consts::PI + axis[k];
                    sx.push(tilt.sin() * angle.cos());
                    sy.push(tilt.sin() * angle.sin());
                    sz.push(tilt.cos());
                }
            }
        }

        open(step)?;
        write_quad_mesh(&axis, &axis, &axis, "lattice")?;
        write_quad_data(&sx, [N, N, N], "sx", "lattice")?;
        write_quad_data(&sy, [N, N, N], "sy", "lattice")?;
        write_quad_data(&sz, [N, N, N], "sz", "lattice")?;

        let tx: Vec<f64> = (0..4).map(|p| (phase + f64::from(p)).cos() * 0.5 + 0.5).collect();
        let ty: Vec<f64> = (0..4).map(|p| (phase + f64::from(p)).sin() * 0.5 + 0.5).collect();
        let tz = vec![0.5; 4];
        write_point_mesh(&tx, &ty, &tz, "tracers")?;
        write_point_data(&tz, "weight", "tracers")?;

        let path = close()?;
        let reader = DbReader::open(&path)?;
        if let Some((min, max)) = reader.get("lattice")?.extents() {
            println!("step {step}: wrote {} (lattice {min} .. {max})", path.display());
        }
    }

    Ok(())
}
