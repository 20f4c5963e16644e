use nalgebra::Vector3;

use super::clock::SimulationClock;
use super::integrator::OrbitIntegrator;
use crate::config::SimConfig;
use crate::orbital::OrbitalElements;
use crate::presentation::PresentationSink;

/// Snapshot of one body after a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,              // simulated s since start
    pub position: Vector3<f64>, // AU
    pub velocity: Vector3<f64>, // AU/s
    pub elements: OrbitalElements,
}

impl Sample {
    fn capture(time: f64, body: &OrbitIntegrator) -> Self {
        Sample {
            time,
            position: body.state().position,
            velocity: body.state().velocity,
            elements: *body.elements(),
        }
    }
}

const MAX_PREALLOCATED_SAMPLES: usize = 1_000_000;

/// Samples to reserve per track: the initial one plus one per frame, capped.
fn track_capacity(frames: usize) -> usize {
    frames.saturating_add(1).min(MAX_PREALLOCATED_SAMPLES)
}

// ---------------------------------------------------------------------------
// Frame loop
// ---------------------------------------------------------------------------

/// Advance every body once per frame for `config.frames` frames.
///
/// The clock's rate is read once per frame so every body in a frame sees the
/// same simulated step even if the rate changes concurrently.
/// Returns one track per body, starting with the initial sample.
pub fn run(
    bodies: &mut [OrbitIntegrator],
    clock: &SimulationClock,
    config: &SimConfig,
    sink: &mut dyn PresentationSink,
) -> Vec<Vec<Sample>> {
    log::info!(
        "running {} bodies for {} frames (dt={:.4} s, time scale {:.3e})",
        bodies.len(),
        config.frames,
        config.frame_dt,
        clock.time_scale(),
    );

    let capacity = track_capacity(config.frames);
    let mut tracks: Vec<Vec<Sample>> = bodies
        .iter()
        .map(|b| {
            let mut track = Vec::with_capacity(capacity);
            track.push(Sample::capture(0.0, b));
            track
        })
        .collect();

    let mut time = 0.0;
    for _ in 0..config.frames {
        let simulated_dt = clock.simulated_dt(config.frame_dt);
        time += simulated_dt;

        for (body, track) in bodies.iter_mut().zip(tracks.iter_mut()) {
            body.integrate(simulated_dt);
            body.publish(sink);
            track.push(Sample::capture(time, body));
        }
    }

    log::info!("simulated {:.2} days", time / 86_400.0);
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;
    use crate::physics::gravity::GM_SUN;
    use crate::presentation::{BodyId, NullSink, TransformSink};

    fn planets() -> Vec<OrbitIntegrator> {
        [presets::venus(), presets::earth(), presets::mars()]
            .iter()
            .enumerate()
            .map(|(i, cfg)| {
                OrbitIntegrator::new(BodyId(i), &cfg.to_elements().unwrap(), GM_SUN).unwrap()
            })
            .collect()
    }

    #[test]
    fn track_capacity_is_capped_without_overflow() {
        assert_eq!(track_capacity(0), 1);
        assert_eq!(track_capacity(600), 601);
        assert_eq!(track_capacity(usize::MAX), MAX_PREALLOCATED_SAMPLES);
    }

    #[test]
    fn tracks_have_initial_sample_plus_one_per_frame() {
        let mut bodies = planets();
        let config = SimConfig { frames: 25, ..SimConfig::default() };
        let tracks = run(&mut bodies, &config.clock(), &config, &mut NullSink);

        assert_eq!(tracks.len(), 3);
        for track in &tracks {
            assert_eq!(track.len(), 26);
            assert_eq!(track[0].time, 0.0);
        }
        let expected_end = 25.0 * config.frame_dt * config.time_scale;
        assert!((tracks[0][25].time - expected_end).abs() < 1e-6);
    }

    #[test]
    fn last_sample_matches_body_state() {
        let mut bodies = planets();
        let config = SimConfig { frames: 10, ..SimConfig::default() };
        let mut sink = TransformSink::new();
        let tracks = run(&mut bodies, &config.clock(), &config, &mut sink);

        for (body, track) in bodies.iter().zip(&tracks) {
            let last = track.last().unwrap();
            assert_eq!(last.position, body.state().position);
            assert_eq!(last.elements, *body.elements());
            assert_eq!(sink.get(body.body()).unwrap().position, body.state().position);
        }
    }

    #[test]
    fn order_of_bodies_does_not_matter() {
        let config = SimConfig { frames: 50, ..SimConfig::default() };

        let mut forward = planets();
        let mut reversed = planets();
        reversed.reverse();

        run(&mut forward, &config.clock(), &config, &mut NullSink);
        run(&mut reversed, &config.clock(), &config, &mut NullSink);
        reversed.reverse();

        for (a, b) in forward.iter().zip(&reversed) {
            assert_eq!(a.state(), b.state());
        }
    }

    #[test]
    fn faster_clock_covers_more_orbit() {
        let config = SimConfig { frames: 100, ..SimConfig::default() };

        let mut slow = planets();
        let mut fast = planets();
        run(&mut slow, &SimulationClock::new(1e5), &config, &mut NullSink);
        run(&mut fast, &SimulationClock::new(1e6), &config, &mut NullSink);

        let start = planets()[1].state().position;
        let slow_dist = (slow[1].state().position - start).norm();
        let fast_dist = (fast[1].state().position - start).norm();
        assert!(fast_dist > 5.0 * slow_dist, "fast {:.4} vs slow {:.4}", fast_dist, slow_dist);
    }
}
