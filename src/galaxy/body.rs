//! Celestial bodies and their attribute types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{Hsl, Position};

/// Kind of celestial body
///
/// Asteroids and nebulae are part of the model for hosts that add their own,
/// but the generator only produces stars, planets and moons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    Asteroid,
    Nebula,
}

impl BodyKind {
    pub const ALL: [BodyKind; 5] = [
        BodyKind::Star,
        BodyKind::Planet,
        BodyKind::Moon,
        BodyKind::Asteroid,
        BodyKind::Nebula,
    ];

    /// Kind a parent of this kind must have, if any
    pub fn parent_kind(&self) -> Option<BodyKind> {
        match self {
            BodyKind::Planet => Some(BodyKind::Star),
            BodyKind::Moon => Some(BodyKind::Planet),
            BodyKind::Star | BodyKind::Asteroid | BodyKind::Nebula => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BodyKind::Star => "star",
            BodyKind::Planet => "planet",
            BodyKind::Moon => "moon",
            BodyKind::Asteroid => "asteroid",
            BodyKind::Nebula => "nebula",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Atmosphere category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Atmosphere {
    #[default]
    None,
    Oxygen,
    Nitrogen,
    Methane,
}

impl Atmosphere {
    pub fn is_present(&self) -> bool {
        !matches!(self, Atmosphere::None)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Atmosphere::None => "",
            Atmosphere::Oxygen => "oxygen",
            Atmosphere::Nitrogen => "nitrogen",
            Atmosphere::Methane => "methane",
        }
    }
}

/// Extractable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Water,
    Minerals,
    Gases,
}

impl Resource {
    /// Draw order during planet generation
    pub const ALL: [Resource; 3] = [Resource::Water, Resource::Minerals, Resource::Gases];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Water => "water",
            Resource::Minerals => "minerals",
            Resource::Gases => "gases",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generation indices locating a body in the star > planet > moon hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyPath {
    pub star: usize,
    pub planet: Option<usize>,
    pub moon: Option<usize>,
}

impl BodyPath {
    pub fn star(star: usize) -> Self {
        Self {
            star,
            planet: None,
            moon: None,
        }
    }

    pub fn planet(star: usize, planet: usize) -> Self {
        Self {
            star,
            planet: Some(planet),
            moon: None,
        }
    }

    pub fn moon(star: usize, planet: usize, moon: usize) -> Self {
        Self {
            star,
            planet: Some(planet),
            moon: Some(moon),
        }
    }

    /// Path of the enclosing body, `None` for stars
    pub fn parent(&self) -> Option<BodyPath> {
        match (self.planet, self.moon) {
            (Some(planet), Some(_)) => Some(BodyPath::planet(self.star, planet)),
            (Some(_), None) => Some(BodyPath::star(self.star)),
            _ => None,
        }
    }

    pub fn kind(&self) -> BodyKind {
        match (self.planet, self.moon) {
            (Some(_), Some(_)) => BodyKind::Moon,
            (Some(_), None) => BodyKind::Planet,
            _ => BodyKind::Star,
        }
    }

    /// Stable identifier: `star-3`, `planet-3-0`, `moon-3-0-0`
    pub fn id(&self) -> String {
        match (self.planet, self.moon) {
            (Some(planet), Some(moon)) => format!("moon-{}-{}-{}", self.star, planet, moon),
            (Some(planet), None) => format!("planet-{}-{}", self.star, planet),
            _ => format!("star-{}", self.star),
        }
    }

    /// Display name: `Star-4`, `Star-4-1`, `Star-4-1-M1`
    pub fn display_name(&self) -> String {
        let star = format!("Star-{}", self.star + 1);
        match (self.planet, self.moon) {
            (Some(planet), Some(moon)) => format!("{}-{}-M{}", star, planet + 1, moon + 1),
            (Some(planet), None) => format!("{}-{}", star, planet + 1),
            _ => star,
        }
    }
}

/// A generated body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub id: String,
    pub name: String,
    pub kind: BodyKind,
    pub path: BodyPath,
    /// Index of the parent body in the galaxy's body list
    pub parent: Option<usize>,
    pub position: Position,
    pub size: f64,
    pub color: Hsl,
    pub temperature: f64,
    pub mass: f64,
    /// From the parent body for moons, from the galactic centre otherwise
    pub distance: f64,
    /// 0 for bodies with no orbit
    pub orbital_period: f64,
    pub has_life: bool,
    /// 0-100, zero unless `has_life`
    pub biodiversity: f64,
    pub atmosphere: Atmosphere,
    pub resources: Vec<Resource>,
}

impl CelestialBody {
    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    pub fn has_resource(&self, resource: Resource) -> bool {
        self.resources.contains(&resource)
    }
}
