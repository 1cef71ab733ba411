pub mod config;
pub mod error;
pub mod format;
pub mod profile;
pub mod sample;
pub mod signal;

pub use config::{AuxiliaryFields, WindProfileConfig};
pub use error::WindProfileError;
pub use profile::{Samples, WindProfileGenerator};
pub use sample::Sample;
