pub mod config;
pub mod error;
pub mod io;
pub mod orbital;
pub mod physics;
pub mod presentation;
pub mod sim;

pub use error::{InvalidOrbitError, OrbitResult};

