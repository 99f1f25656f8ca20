pub mod config;
pub mod error;
pub mod types;

pub use config::{GenerationLimits, GenerationParams, GeneratorConfig, Preset};
pub use error::{Result, StarseedError};
pub use types::{Hsl, Position};
