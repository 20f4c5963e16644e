pub mod gravity;

pub use gravity::{AU, DEGENERACY_EPSILON, GM_SUN};
