pub mod clock;
pub mod integrator;
pub mod runner;

pub use clock::SimulationClock;
pub use integrator::{derive_orbit_view, substep, OrbitIntegrator, SUBSTEPS};
pub use runner::{run, Sample};
