//! Generate a demo `trajectory.csv` so the viewer can be exercised without a
//! robot export: a trapezoidal velocity profile along a straight path, plus a
//! linear rotation sweep.

use std::path::Path;

const DT: f64 = 0.02;
const MAX_VELOCITY: f64 = 3.0;
const MAX_ACCELERATION: f64 = 1.5;
const DISTANCE: f64 = 12.0;
const HEADING_RAD: f64 = 0.5;
const END_ROTATION_DEG: f64 = 90.0;

// feedforward gains, in the spirit of kv * v + ka * a
const KV: f64 = 0.28;
const KA: f64 = 0.05;

struct Sample {
    time: f64,
    position: f64,
    velocity: f64,
    acceleration: f64,
}

/// Accelerate, cruise, decelerate. Falls back to a triangular profile when
/// the distance is too short to reach the velocity limit.
fn trapezoid(distance: f64, max_v: f64, max_a: f64) -> Vec<Sample> {
    let mut cruise_v = max_v;
    let mut ramp_t = cruise_v / max_a;
    let mut ramp_d = 0.5 * max_a * ramp_t * ramp_t;
    if 2.0 * ramp_d > distance {
        cruise_v = (distance * max_a).sqrt();
        ramp_t = cruise_v / max_a;
        ramp_d = distance / 2.0;
    }
    let cruise_d = distance - 2.0 * ramp_d;
    let cruise_t = cruise_d / cruise_v;
    let total_t = 2.0 * ramp_t + cruise_t;

    let steps = (total_t / DT).ceil() as usize;
    let mut samples = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = (i as f64 * DT).min(total_t);
        let (position, velocity, acceleration) = if t < ramp_t {
            (0.5 * max_a * t * t, max_a * t, max_a)
        } else if t < ramp_t + cruise_t {
            let tc = t - ramp_t;
            (ramp_d + cruise_v * tc, cruise_v, 0.0)
        } else {
            let td = total_t - t;
            (distance - 0.5 * max_a * td * td, max_a * td, -max_a)
        };
        samples.push(Sample {
            time: t,
            position,
            velocity,
            acceleration,
        });
    }
    samples
}

/// Write the samples to `path` with the full trajectory schema.
fn write_csv(path: &Path, samples: &[Sample]) -> csv::Result<()> {
    let total_t = samples.last().map_or(0.0, |s| s.time);

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "time",
        "x",
        "y",
        "position",
        "velocity",
        "acceleration",
        "f",
        "rotation",
        "maxVelocity",
    ])?;

    for s in samples {
        let x = s.position * HEADING_RAD.cos();
        let y = s.position * HEADING_RAD.sin();
        let f = KV * s.velocity + KA * s.acceleration;
        let rotation = END_ROTATION_DEG * s.time / total_t;
        writer.write_record([
            format!("{:.4}", s.time),
            format!("{x:.4}"),
            format!("{y:.4}"),
            format!("{:.4}", s.position),
            format!("{:.4}", s.velocity),
            format!("{:.4}", s.acceleration),
            format!("{f:.4}"),
            format!("{rotation:.4}"),
            format!("{MAX_VELOCITY:.4}"),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() {
    let samples = trapezoid(DISTANCE, MAX_VELOCITY, MAX_ACCELERATION);
    let output_path = "trajectory.csv";
    write_csv(Path::new(output_path), &samples).expect("Failed to write output file");
    println!("Wrote {} samples to {output_path}", samples.len());
}
