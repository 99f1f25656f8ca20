//! Generation constants - attribute ranges and fixed probabilities in one place
//!
//! Ranges are half-open [min, max) PRS draws. Values are illustrative, not
//! physically derived.

use std::f64::consts::TAU;

pub type Range = (f64, f64);

// Placement
pub const SPIRAL_WINDING: f64 = 0.5; // radians of arm twist per unit of radius
pub const FULL_TURN: Range = (0.0, TAU);

// Stars
pub const STAR_SIZE: Range = (2.0, 8.0);
pub const STAR_HUE: Range = (0.0, 60.0); // red through yellow
pub const STAR_SATURATION: f64 = 100.0;
pub const STAR_LIGHTNESS: Range = (50.0, 80.0);
pub const STAR_TEMPERATURE: Range = (3000.0, 30000.0); // kelvin
pub const STAR_MASS: Range = (0.5, 50.0); // solar masses

// Planets
pub const PLANET_COUNT: Range = (1.0, 4.0); // floored, so 1..=3
pub const PLANET_DISTANCE_OFFSET: Range = (10.0, 30.0);
pub const PLANET_SIZE: Range = (1.0, 3.0);
pub const PLANET_HUE: Range = (180.0, 300.0); // cyan through violet
pub const PLANET_SATURATION: f64 = 70.0;
pub const PLANET_LIGHTNESS: Range = (30.0, 60.0);
pub const PLANET_TEMPERATURE: Range = (-200.0, 500.0); // celsius
pub const PLANET_MASS: Range = (0.1, 3.0); // earth masses
pub const PLANET_ORBITAL_PERIOD: Range = (50.0, 500.0); // days
pub const BIODIVERSITY: Range = (0.0, 100.0);

// Atmosphere: P(any) then P(oxygen | breathable), methane otherwise
pub const ATMOSPHERE_PROBABILITY: f64 = 0.7;
pub const OXYGEN_PROBABILITY: f64 = 0.5;

pub const RESOURCE_PROBABILITY: f64 = 0.4; // independent per resource

// Moons
pub const MOON_PROBABILITY: f64 = 0.2;
pub const MOON_COUNT: Range = (1.0, 2.0); // floored, so 1
pub const MOON_DISTANCE: Range = (5.0, 10.0); // from the parent planet
pub const MOON_SIZE: Range = (0.5, 1.5);
pub const MOON_HUE: Range = (0.0, 360.0);
pub const MOON_SATURATION: f64 = 50.0;
pub const MOON_LIGHTNESS: Range = (40.0, 70.0);
pub const MOON_TEMPERATURE: Range = (-250.0, 200.0);
pub const MOON_MASS: Range = (0.01, 0.3);
pub const MOON_ORBITAL_PERIOD: Range = (10.0, 50.0);

// Galaxy metadata
pub const GALAXY_AGE: Range = (1.0, 13.8); // billions of years
pub const METALLICITY: Range = (0.1, 2.0); // relative to solar

// Hit testing: a body is picked within size * factor of its centre
pub const PICK_RADIUS_FACTOR: f64 = 3.0;

// Galaxy names keep this many leading seed characters
pub const NAME_SEED_CHARS: usize = 8;
