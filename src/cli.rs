use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "orbit-sim", about = "Two-body heliocentric orbit simulator")]
pub struct Args {
    /// Preset body to simulate (repeatable): earth, venus, mars, halley, circular
    #[arg(short = 'b', long = "body", default_value = "earth")]
    pub bodies: Vec<String>,

    /// Add a custom body with this semi-major axis (AU)
    #[arg(long = "sma")]
    pub semimajor_axis: Option<f64>,

    /// Eccentricity of the custom body
    #[arg(long = "ecc", default_value_t = 0.0)]
    pub eccentricity: f64,

    /// Inclination of the custom body (deg)
    #[arg(long = "inc", default_value_t = 0.0)]
    pub inclination: f64,

    /// Ascending node of the custom body (deg)
    #[arg(long = "node", default_value_t = 0.0)]
    pub ascending_node: f64,

    /// Argument of perihelion of the custom body (deg)
    #[arg(long = "argp", default_value_t = 0.0)]
    pub argument_of_perihelion: f64,

    /// Simulated seconds per real second
    #[arg(short = 't', long = "time-scale", default_value_t = 1e6)]
    pub time_scale: f64,

    /// Number of frames to run
    #[arg(short = 'n', long = "frames", default_value_t = 600)]
    pub frames: usize,

    /// Frame rate used to derive the per-frame real time step
    #[arg(long = "fps", default_value_t = 60.0)]
    pub fps: f64,

    /// Write each body's track as CSV (body name is appended when several are run)
    #[arg(long = "csv")]
    pub csv: Option<PathBuf>,
}
