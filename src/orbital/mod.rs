pub mod elements;
pub mod state;

pub use elements::{
    elements_to_state, orbit_rotation, state_to_elements, try_elements_to_state, OrbitalElements,
};
pub use state::CartesianState;
