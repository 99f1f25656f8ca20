//! Procedural galaxy generation
//!
//! A seed string is hashed into a deterministic pseudo-random sequence, which
//! drives shape selection, star placement, and the star > planet > moon
//! hierarchy. The same seed and parameters always rebuild the same galaxy.

pub mod assembly;
pub mod body;
pub mod constants;
pub mod generation;
pub mod output;
pub mod placement;
pub mod rng;
pub mod seed;
pub mod shape;
pub mod survey;

pub use assembly::Galaxy;
pub use body::{Atmosphere, BodyKind, BodyPath, CelestialBody, Resource};
pub use generation::{generate_galaxy, generate_galaxy_with_limits};
pub use output::GalaxyStats;
pub use placement::place;
pub use rng::Prs;
pub use seed::{hash_seed, random_seed};
pub use shape::GalaxyShape;
pub use survey::{survey, SurveyReport, SurveySample};
