use nalgebra::Vector3;

use crate::physics::gravity::AU;

/// Heliocentric position/velocity of one body.
/// Units: AU and AU/s, reference frame of the central body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianState {
    pub position: Vector3<f64>, // AU
    pub velocity: Vector3<f64>, // AU/s
}

impl CartesianState {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self { position, velocity }
    }

    /// Distance from the central body, AU.
    pub fn radius(&self) -> f64 {
        self.position.norm()
    }

    /// Speed, AU/s.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Speed in km/s.
    pub fn speed_km_s(&self) -> f64 {
        self.speed() * AU
    }

    /// Specific orbital energy, AU^2/s^2. Negative for bound orbits.
    pub fn specific_energy(&self, gm: f64) -> f64 {
        0.5 * self.velocity.norm_squared() - gm / self.radius()
    }
}
