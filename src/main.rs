mod cli;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use orbit_sim::config::{presets, OrbitConfig, SimConfig};
use orbit_sim::io;
use orbit_sim::orbital::OrbitalElements;
use orbit_sim::physics::gravity::{AU, GM_SUN};
use orbit_sim::presentation::{BodyId, TransformSink};
use orbit_sim::sim::{self, OrbitIntegrator, Sample};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();
    if !(args.fps > 0.0) {
        bail!("--fps must be positive, got {}", args.fps);
    }

    let configs = body_configs(&args)?;
    let config = SimConfig {
        frame_dt: 1.0 / args.fps,
        frames: args.frames,
        time_scale: args.time_scale,
    };

    // -----------------------------------------------------------------------
    // Build bodies (body i drives node 2i, its orbit overlay node 2i+1)
    // -----------------------------------------------------------------------
    let mut bodies = Vec::with_capacity(configs.len());
    for (i, cfg) in configs.iter().enumerate() {
        let elements = cfg
            .to_elements()
            .with_context(|| format!("invalid orbit for {}", cfg.name))?;
        let body = OrbitIntegrator::new(BodyId(2 * i), &elements, GM_SUN)?
            .with_orbit_lines(BodyId(2 * i + 1));
        bodies.push(body);
    }

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let clock = config.clock();
    let mut sink = TransformSink::new();
    let tracks = sim::run(&mut bodies, &clock, &config, &mut sink);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    let simulated = tracks
        .first()
        .and_then(|t| t.last())
        .map_or(0.0, |s| s.time);

    println!();
    println!("====================================================================");
    println!("  TWO-BODY ORBIT SIMULATION");
    println!("====================================================================");
    println!();
    println!(
        "  Frames: {}   dt: {:.4} s   time scale: {:.3e}   simulated: {:.2} days",
        config.frames,
        config.frame_dt,
        config.time_scale,
        simulated / 86_400.0
    );
    println!();

    for (cfg, track) in configs.iter().zip(&tracks) {
        print_body(cfg, track);
    }

    if let Some(path) = &args.csv {
        for (cfg, track) in configs.iter().zip(&tracks) {
            let out = csv_path(path, &cfg.name, configs.len());
            io::write_samples_file(&out.to_string_lossy(), track)
                .with_context(|| format!("writing {}", out.display()))?;
            log::info!("wrote {} samples to {}", track.len(), out.display());
        }
    }

    println!("  Presentation updates: {}", sink.writes());
    println!("====================================================================");
    println!();
    Ok(())
}

fn body_configs(args: &cli::Args) -> Result<Vec<OrbitConfig>> {
    let mut configs = Vec::new();
    for name in &args.bodies {
        match presets::by_name(name) {
            Some(cfg) => configs.push(cfg),
            None => bail!("unknown body '{}', expected one of {:?}", name, presets::NAMES),
        }
    }

    if let Some(sma) = args.semimajor_axis {
        configs.push(OrbitConfig {
            name: "Custom".into(),
            eccentricity: args.eccentricity,
            inclination_deg: args.inclination,
            ascending_node_deg: args.ascending_node,
            argument_of_perihelion_deg: args.argument_of_perihelion,
            semimajor_axis: sma,
        });
    }
    Ok(configs)
}

fn csv_path(base: &Path, name: &str, count: usize) -> PathBuf {
    if count <= 1 {
        return base.to_path_buf();
    }
    let stem = base.file_stem().map_or("track".into(), |s| s.to_string_lossy());
    let ext = base.extension().map_or("csv".into(), |s| s.to_string_lossy());
    let file = format!("{}_{}.{}", stem, name.to_lowercase().replace(' ', "_"), ext);
    base.with_file_name(file)
}

fn print_body(cfg: &OrbitConfig, track: &[Sample]) {
    let (Some(first), Some(last)) = (track.first(), track.last()) else {
        return;
    };

    println!("  {}", cfg.name);
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>10}  {:>9}  {:>8}  {:>8}  {:>8}  {:>9}",
        "", "a (AU)", "e", "i (deg)", "Ω (deg)", "ω (deg)", "v (km/s)"
    );
    print_row("start", &first.elements, first.velocity.norm() * AU);
    print_row("end", &last.elements, last.velocity.norm() * AU);

    let da = (last.elements.semimajor_axis - first.elements.semimajor_axis) / first.elements.semimajor_axis;
    let de = last.elements.eccentricity - first.elements.eccentricity;
    println!(
        "  Drift: Δa/a = {:+.3e}   Δe = {:+.3e}   r = {:.4} AU",
        da,
        de,
        last.position.norm()
    );
    println!();
}

fn print_row(label: &str, e: &OrbitalElements, speed_km_s: f64) {
    println!(
        "  {:>8}  {:>10.6}  {:>9.6}  {:>8.3}  {:>8.3}  {:>8.3}  {:>9.3}",
        label,
        e.semimajor_axis,
        e.eccentricity,
        e.inclination.to_degrees(),
        e.ascending_node.to_degrees(),
        e.argument_of_perihelion.to_degrees(),
        speed_km_s,
    );
}
