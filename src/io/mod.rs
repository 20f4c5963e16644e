pub mod csv;

pub use csv::{write_samples, write_samples_file};
