use std::f64::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::{UnitQuaternion, Vector3};

use super::state::CartesianState;
use crate::error::{InvalidOrbitError, OrbitResult};
use crate::physics::gravity::{vis_viva_speed, DEGENERACY_EPSILON};

/// Classical orbital elements (no anomaly/epoch is tracked).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub eccentricity: f64,           // 0 = circular
    pub inclination: f64,            // rad, [0, pi]
    pub ascending_node: f64,         // rad, [0, 2pi)
    pub argument_of_perihelion: f64, // rad, [0, 2pi)
    pub semimajor_axis: f64,         // AU, negative for unbound states
}

impl OrbitalElements {
    /// Build elements from angles in degrees, validated for a bound orbit.
    /// Node and argument of perihelion are wrapped into [0, 360).
    pub fn from_degrees(
        eccentricity: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
        argument_of_perihelion_deg: f64,
        semimajor_axis: f64,
    ) -> OrbitResult<Self> {
        check_finite("inclination", inclination_deg)?;
        if !(0.0..=180.0).contains(&inclination_deg) {
            return Err(InvalidOrbitError::InclinationOutOfRange(inclination_deg));
        }
        let elements = OrbitalElements {
            eccentricity,
            inclination: inclination_deg.to_radians(),
            ascending_node: ascending_node_deg.to_radians(),
            argument_of_perihelion: argument_of_perihelion_deg.to_radians(),
            semimajor_axis,
        };
        elements.validate()?;
        Ok(elements.normalized())
    }

    /// Check that these elements can seed a bound orbit.
    pub fn validate(&self) -> OrbitResult<()> {
        check_finite("eccentricity", self.eccentricity)?;
        check_finite("inclination", self.inclination)?;
        check_finite("ascending node", self.ascending_node)?;
        check_finite("argument of perihelion", self.argument_of_perihelion)?;
        check_finite("semi-major axis", self.semimajor_axis)?;

        if self.eccentricity < 0.0 {
            return Err(InvalidOrbitError::NegativeEccentricity(self.eccentricity));
        }
        if self.eccentricity >= 1.0 {
            return Err(InvalidOrbitError::UnboundEccentricity(self.eccentricity));
        }
        if self.semimajor_axis <= 0.0 {
            return Err(InvalidOrbitError::NonPositiveSemimajorAxis(self.semimajor_axis));
        }
        if !(0.0..=PI).contains(&self.inclination) {
            return Err(InvalidOrbitError::InclinationOutOfRange(
                self.inclination.to_degrees(),
            ));
        }
        Ok(())
    }

    /// Same orbit with node and argument of perihelion wrapped into [0, 2pi).
    pub fn normalized(self) -> Self {
        OrbitalElements {
            ascending_node: wrap_angle(self.ascending_node),
            argument_of_perihelion: wrap_angle(self.argument_of_perihelion),
            ..self
        }
    }

    /// Rotation from the perifocal frame to the reference frame.
    pub fn orbit_rotation(&self) -> UnitQuaternion<f64> {
        orbit_rotation(self.ascending_node, self.inclination, self.argument_of_perihelion)
    }

    pub fn is_bound(&self) -> bool {
        self.eccentricity.is_finite()
            && self.semimajor_axis.is_finite()
            && self.eccentricity < 1.0
            && self.semimajor_axis > 0.0
    }

    pub fn semiminor_axis(&self) -> f64 {
        self.semimajor_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    pub fn perihelion_distance(&self) -> f64 {
        self.semimajor_axis * (1.0 - self.eccentricity)
    }

    pub fn aphelion_distance(&self) -> f64 {
        self.semimajor_axis * (1.0 + self.eccentricity)
    }

    /// Orbital period (s) for a bound orbit.
    pub fn period(&self, gm: f64) -> f64 {
        TAU * (self.semimajor_axis.powi(3) / gm).sqrt()
    }
}

fn check_finite(field: &'static str, value: f64) -> OrbitResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidOrbitError::NonFinite { field, value })
    }
}

/// Wrap an angle into [0, 2pi).
pub fn wrap_angle(angle: f64) -> f64 {
    let w = angle.rem_euclid(TAU);
    if w >= TAU {
        0.0
    } else {
        w
    }
}

// ---------------------------------------------------------------------------
// Elements -> state
// ---------------------------------------------------------------------------

/// Perifocal-to-reference rotation: Rz(node - pi/2) * Ry(pi - inc) * Rz(argp).
///
/// Composition order matters. The perifocal frame puts perihelion on +Y and the
/// velocity there on +X.
pub fn orbit_rotation(ascending_node: f64, inclination: f64, argp: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::z_axis(), ascending_node - FRAC_PI_2)
        * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI - inclination)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), argp)
}

/// Place a body at perihelion of the orbit described by `elements`.
///
/// Unchecked: hyperbolic eccentricity or a non-positive semi-major axis give
/// meaningless output. Use [`try_elements_to_state`] for untrusted input.
pub fn elements_to_state(elements: &OrbitalElements, gm: f64) -> CartesianState {
    let rot = elements.orbit_rotation();

    let position = rot * (Vector3::new(0.0, 1.0 - elements.eccentricity, 0.0) * elements.semimajor_axis);
    let speed = vis_viva_speed(position.norm(), elements.semimajor_axis, gm);
    let velocity = rot * (Vector3::x() * speed);

    CartesianState { position, velocity }
}

/// Checked variant of [`elements_to_state`].
pub fn try_elements_to_state(elements: &OrbitalElements, gm: f64) -> OrbitResult<CartesianState> {
    elements.validate()?;
    if !gm.is_finite() {
        return Err(InvalidOrbitError::NonFinite { field: "gravitational parameter", value: gm });
    }
    if gm <= 0.0 {
        return Err(InvalidOrbitError::NonPositiveGravitationalParameter(gm));
    }

    let state = elements_to_state(elements, gm);
    if state.position.norm_squared() == 0.0 {
        return Err(InvalidOrbitError::ZeroPosition);
    }
    Ok(state)
}

// ---------------------------------------------------------------------------
// State -> elements
// ---------------------------------------------------------------------------

/// Recover orbital elements from a Cartesian state. Never fails.
///
/// Angular momentum is taken as `velocity x position`, the reverse of the
/// textbook `r x v`; the inclination, node and perihelion signs below are
/// derived for that orientation and must change together.
pub fn state_to_elements(state: &CartesianState, gm: f64) -> OrbitalElements {
    let pos = &state.position;
    let vel = &state.velocity;

    let h = vel.cross(pos);
    let r = pos.norm();
    let v = vel.norm();

    // Node vector
    let n = Vector3::z().cross(&h);
    let n_sq = n.norm_squared();

    // Eccentricity vector
    let e_vec = pos * ((v * v - gm / r) / gm) - vel * (pos.dot(vel) / gm);
    let eccentricity = e_vec.norm();

    // Radial trajectories have no plane; call them equatorial
    let h_mag = h.norm();
    let inclination = if h_mag * h_mag > DEGENERACY_EPSILON {
        (-h.z / h_mag).clamp(-1.0, 1.0).acos()
    } else {
        0.0
    };

    let ascending_node = if n_sq <= DEGENERACY_EPSILON {
        0.0
    } else {
        let n_mag = n_sq.sqrt();
        let node = (n.x / n_mag).clamp(-1.0, 1.0).acos();
        if n.y < 0.0 { TAU - node } else { node }
    };

    let semimajor_axis = 1.0 / (2.0 / r - v * v / gm);

    // With no node line (equatorial) or no perihelion (circular), measure the
    // eccentricity vector against the reference axes directly.
    let argument_of_perihelion = if n_sq <= DEGENERACY_EPSILON || e_vec.norm_squared() <= DEGENERACY_EPSILON {
        wrap_angle((-e_vec.y).atan2(e_vec.x))
    } else {
        let cos_w = (n.dot(&e_vec) / (n_sq.sqrt() * eccentricity)).clamp(-1.0, 1.0);
        let w = cos_w.acos();
        if e_vec.z < 0.0 { TAU - w } else { w }
    };

    OrbitalElements {
        eccentricity,
        inclination,
        ascending_node,
        argument_of_perihelion,
        semimajor_axis,
    }
}
