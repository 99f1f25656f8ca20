//! Starseed - Deterministic Procedural Galaxy Generation
//!
//! ```
//! use starseed::{generate_galaxy, GenerationParams};
//!
//! let galaxy = generate_galaxy("abc", &GenerationParams::default());
//! assert_eq!(galaxy, generate_galaxy("abc", &GenerationParams::default()));
//! ```

pub mod core;
pub mod fractal;
pub mod galaxy;

pub use crate::core::config::{GenerationLimits, GenerationParams, GeneratorConfig, Preset};
pub use crate::core::error::{Result, StarseedError};
pub use crate::galaxy::{generate_galaxy, generate_galaxy_with_limits, Galaxy};
