use crate::error::OrbitResult;
use crate::orbital::OrbitalElements;
use crate::sim::SimulationClock;

// ---------------------------------------------------------------------------
// Per-body orbit configuration (angles in degrees)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitConfig {
    pub name: String,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub ascending_node_deg: f64,
    pub argument_of_perihelion_deg: f64,
    pub semimajor_axis: f64, // AU
}

impl OrbitConfig {
    /// Validated elements in radians.
    pub fn to_elements(&self) -> OrbitResult<OrbitalElements> {
        OrbitalElements::from_degrees(
            self.eccentricity,
            self.inclination_deg,
            self.ascending_node_deg,
            self.argument_of_perihelion_deg,
            self.semimajor_axis,
        )
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        presets::earth()
    }
}

// ---------------------------------------------------------------------------
// Frame loop configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub frame_dt: f64,   // real seconds per frame
    pub frames: usize,
    pub time_scale: f64, // simulated seconds per real second
}

impl SimConfig {
    /// Clock initialised with this config's time scale.
    pub fn clock(&self) -> SimulationClock {
        SimulationClock::new(self.time_scale)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_dt: 1.0 / 60.0, // 60 fps
            frames: 600,
            time_scale: 1e6,      // ~11.6 days per real second
        }
    }
}

// ---------------------------------------------------------------------------
// Preset orbits (heliocentric, ecliptic J2000)
// ---------------------------------------------------------------------------

pub mod presets {
    use super::OrbitConfig;

    pub const NAMES: [&str; 5] = ["earth", "venus", "mars", "halley", "circular"];

    pub fn by_name(name: &str) -> Option<OrbitConfig> {
        match name.to_ascii_lowercase().as_str() {
            "earth" => Some(earth()),
            "venus" => Some(venus()),
            "mars" => Some(mars()),
            "halley" => Some(halley()),
            "circular" => Some(circular()),
            _ => None,
        }
    }

    pub fn earth() -> OrbitConfig {
        OrbitConfig {
            name: "Earth".into(),
            eccentricity: 0.016_71,
            inclination_deg: 0.0,
            ascending_node_deg: 348.739,
            argument_of_perihelion_deg: 114.208,
            semimajor_axis: 1.000_000,
        }
    }

    pub fn venus() -> OrbitConfig {
        OrbitConfig {
            name: "Venus".into(),
            eccentricity: 0.006_77,
            inclination_deg: 3.394_7,
            ascending_node_deg: 76.680,
            argument_of_perihelion_deg: 54.884,
            semimajor_axis: 0.723_33,
        }
    }

    pub fn mars() -> OrbitConfig {
        OrbitConfig {
            name: "Mars".into(),
            eccentricity: 0.093_39,
            inclination_deg: 1.850,
            ascending_node_deg: 49.558,
            argument_of_perihelion_deg: 286.502,
            semimajor_axis: 1.523_71,
        }
    }

    /// 1P/Halley, retrograde.
    pub fn halley() -> OrbitConfig {
        OrbitConfig {
            name: "Halley".into(),
            eccentricity: 0.967_14,
            inclination_deg: 162.26,
            ascending_node_deg: 58.42,
            argument_of_perihelion_deg: 111.33,
            semimajor_axis: 17.834,
        }
    }

    /// Circular equatorial orbit at 1 AU.
    pub fn circular() -> OrbitConfig {
        OrbitConfig {
            name: "Circular 1 AU".into(),
            eccentricity: 0.0,
            inclination_deg: 0.0,
            ascending_node_deg: 0.0,
            argument_of_perihelion_deg: 0.0,
            semimajor_axis: 1.0,
        }
    }
}
