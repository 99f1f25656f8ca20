//! Galaxy archetypes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::galaxy::rng::Prs;

/// Galaxy archetype. Affects spatial placement only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalaxyShape {
    Spiral,
    Elliptical,
    Irregular,
    Dwarf,
}

impl GalaxyShape {
    pub const ALL: [GalaxyShape; 4] = [
        GalaxyShape::Spiral,
        GalaxyShape::Elliptical,
        GalaxyShape::Irregular,
        GalaxyShape::Dwarf,
    ];

    /// Pick an archetype with exactly one PRS draw
    pub fn select(prs: &mut Prs) -> Self {
        Self::ALL[prs.index(Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            GalaxyShape::Spiral => "spiral",
            GalaxyShape::Elliptical => "elliptical",
            GalaxyShape::Irregular => "irregular",
            GalaxyShape::Dwarf => "dwarf",
        }
    }
}

impl fmt::Display for GalaxyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
