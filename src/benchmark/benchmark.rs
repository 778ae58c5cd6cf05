use std::time::Instant;

use crate::simulation::driver::Simulation;
use crate::simulation::engine::Engine;
use crate::simulation::field::DipoleField;
use crate::simulation::field_lines::{FieldLineTracer, TraceDirection, TraceScheme};
use crate::simulation::states::{Body, NVec3};

/// Helper to build `n` bodies on a deterministic spread of positions
fn make_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec3::new(
                (i_f * 0.37).sin() * 5.0,
                (i_f * 0.13).cos() * 5.0,
                (i_f * 0.07).sin() * 5.0,
            );
            let v = NVec3::new((i_f * 0.11).cos(), (i_f * 0.23).sin(), 0.1);
            Body::from_vectors(1.0, 1.0e7, x, v)
        })
        .collect()
}

fn make_field() -> DipoleField {
    DipoleField::at_origin(NVec3::new(0.0, 0.0, 1.0))
}

/// Time `Simulation::run` for a range of n, serial vs rayon
/// Paste output directly into a spreadsheet to graph
pub fn bench_rk4() {
    let ns = [100, 200, 400, 800, 1600, 3200, 6400];
    let duration = 1.0;
    let dt = 0.01;

    println!("N,serial_ms,parallel_ms");

    for n in ns {
        let bodies = make_bodies(n);

        let mut serial = Simulation::with_engine(&bodies, make_field(), Engine { parallel: false, strict: false });
        let t0 = Instant::now();
        serial.run(duration, dt, Some(100.0));
        let ms_serial = t0.elapsed().as_secs_f64() * 1000.0;

        let mut parallel = Simulation::with_engine(&bodies, make_field(), Engine { parallel: true, strict: false });
        let t1 = Instant::now();
        parallel.run(duration, dt, Some(100.0));
        let ms_parallel = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{:.6}", n, ms_serial, ms_parallel);
    }
}

/// Time field-line tracing with both step schemes
pub fn bench_field_lines() {
    let field = make_field();
    let seeds: Vec<NVec3> = (1..=50)
        .map(|i| NVec3::new(0.1 * i as f64, 0.0, 0.05))
        .collect();

    for scheme in [TraceScheme::Euler, TraceScheme::Rk4] {
        let tracer = FieldLineTracer::default()
            .with_direction(TraceDirection::Both)
            .with_steps(2000, 0.01)
            .with_scheme(scheme);

        let t0 = Instant::now();
        let points: usize = seeds.iter().map(|&s| tracer.trace(&field, s).len()).sum();
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("scheme = {:?}, seeds = {}, points = {}, {:8.3} ms", scheme, seeds.len(), points, ms);
    }
}
