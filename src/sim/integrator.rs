use super::clock::SimulationClock;
use crate::error::OrbitResult;
use crate::orbital::{state_to_elements, try_elements_to_state, CartesianState, OrbitalElements};
use crate::physics::gravity::{inverse_square_increment, predictor_increment};
use crate::presentation::{BodyId, OrbitEllipse, PresentationSink};

/// Fixed number of substeps per tick.
pub const SUBSTEPS: usize = 10;

// ---------------------------------------------------------------------------
// Substep scheme
// ---------------------------------------------------------------------------

/// One predictor/corrector substep of length `dt` (seconds).
///
/// The position moves with the velocity plus half the predictor increment;
/// the velocity takes the inverse-square increment evaluated at the midpoint
/// position. The predictor uses `gm / |r|`, which only matches inverse-square
/// gravity at 1 AU; kept as-is, see DESIGN.md.
pub fn substep(state: &CartesianState, dt: f64, gm: f64) -> CartesianState {
    let a0 = predictor_increment(&state.position, dt, gm);
    let dv = a0 * 0.5;
    let pos_mid = state.position + state.velocity * (dt / 2.0);
    let a1 = inverse_square_increment(&pos_mid, dt, gm);
    let velo_mid = state.velocity + dv;

    CartesianState {
        position: state.position + velo_mid * dt,
        velocity: state.velocity + a1,
    }
}

/// Orbital elements shown for a state. Called once per tick after integration.
pub fn derive_orbit_view(state: &CartesianState, gm: f64) -> OrbitalElements {
    state_to_elements(state, gm)
}

// ---------------------------------------------------------------------------
// Per-body integrator
// ---------------------------------------------------------------------------

/// Owns the Cartesian state of one body and advances it tick by tick.
///
/// The state is the only authority; `elements` is rebuilt from it after every
/// tick and never written back.
#[derive(Debug, Clone)]
pub struct OrbitIntegrator {
    body: BodyId,
    orbit_lines: Option<BodyId>,
    gm: f64,
    state: CartesianState,
    elements: OrbitalElements,
}

impl OrbitIntegrator {
    /// Seed a body at the perihelion of `elements`. Fails on inputs that do not
    /// describe a bound orbit.
    pub fn new(body: BodyId, elements: &OrbitalElements, gm: f64) -> OrbitResult<Self> {
        let state = try_elements_to_state(elements, gm)?;
        log::info!(
            "body {}: a={:.4} AU e={:.4} i={:.2} deg, r0={:.4} AU v0={:.3} km/s",
            body.0,
            elements.semimajor_axis,
            elements.eccentricity,
            elements.inclination.to_degrees(),
            state.radius(),
            state.speed_km_s(),
        );
        Ok(Self {
            body,
            orbit_lines: None,
            gm,
            elements: derive_orbit_view(&state, gm),
            state,
        })
    }

    /// Also drive an orbit-line overlay node with the current ellipse.
    pub fn with_orbit_lines(mut self, id: BodyId) -> Self {
        self.orbit_lines = Some(id);
        self
    }

    pub fn body(&self) -> BodyId {
        self.body
    }

    pub fn state(&self) -> &CartesianState {
        &self.state
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Integrate `simulated_dt` seconds in `SUBSTEPS` equal substeps and
    /// refresh the derived elements.
    pub fn integrate(&mut self, simulated_dt: f64) -> &OrbitalElements {
        let h = simulated_dt / SUBSTEPS as f64;
        let was_bound = self.elements.is_bound();

        for _ in 0..SUBSTEPS {
            self.state = substep(&self.state, h, self.gm);
        }
        self.elements = derive_orbit_view(&self.state, self.gm);

        if was_bound && !self.elements.is_bound() {
            log::warn!(
                "body {}: state no longer bound (a={:.4e}, e={:.4}, r={:.4e} AU)",
                self.body.0,
                self.elements.semimajor_axis,
                self.elements.eccentricity,
                self.state.radius(),
            );
        }
        &self.elements
    }

    /// Push the body position and, if registered, the orbit overlay transform.
    pub fn publish(&self, sink: &mut dyn PresentationSink) {
        sink.set_local_position(self.body, self.state.position);

        if let Some(lines) = self.orbit_lines {
            match OrbitEllipse::from_elements(&self.elements) {
                Some(ellipse) => ellipse.publish(sink, lines),
                None => log::debug!("body {}: no drawable ellipse, overlay not updated", self.body.0),
            }
        }
    }

    /// One frame: `real_dt` wall-clock seconds scaled by `clock`.
    pub fn advance(&mut self, real_dt: f64, clock: &SimulationClock, sink: &mut dyn PresentationSink) {
        self.integrate(clock.simulated_dt(real_dt));
        self.publish(sink);
    }
}
