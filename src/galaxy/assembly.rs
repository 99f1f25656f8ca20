//! The immutable galaxy value and its assembly

use serde::{Deserialize, Serialize};

use crate::core::config::GenerationParams;
use crate::galaxy::body::{BodyKind, CelestialBody};
use crate::galaxy::constants::{GALAXY_AGE, METALLICITY, NAME_SEED_CHARS};
use crate::galaxy::rng::Prs;
use crate::galaxy::shape::GalaxyShape;

/// A generated galaxy
///
/// Bodies are stored flat in generation order (each star, then its planets,
/// each planet followed by its moons). Parent links are indices into that
/// list. Fields are read-only once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    id: String,
    name: String,
    seed: String,
    shape: GalaxyShape,
    size: f64,
    star_count: usize,
    bodies: Vec<CelestialBody>,
    /// Billions of years
    age: f64,
    metallicity: f64,
    params: GenerationParams,
}

impl Galaxy {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn shape(&self) -> GalaxyShape {
        self.shape
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn star_count(&self) -> usize {
        self.star_count
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn metallicity(&self) -> f64 {
        self.metallicity
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn body(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn parent_of(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)?.parent.and_then(|p| self.bodies.get(p))
    }

    /// Indices of the direct children of the body at `index`
    pub fn children_of(&self, index: usize) -> Vec<usize> {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.parent == Some(index))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn bodies_of_kind(&self, kind: BodyKind) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(move |b| b.kind == kind)
    }

    pub fn stars(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies_of_kind(BodyKind::Star)
    }
}

/// `galaxy-{seed}`
pub fn galaxy_id(seed: &str) -> String {
    format!("galaxy-{}", seed)
}

/// `Galaxy-` followed by the first characters of the seed, upper-cased
pub fn galaxy_name(seed: &str) -> String {
    let prefix: String = seed.chars().take(NAME_SEED_CHARS).collect();
    format!("Galaxy-{}", prefix.to_uppercase())
}

/// Package generated bodies with their metadata
///
/// Takes the age draw and then the metallicity draw; nothing else here
/// touches the PRS.
pub fn assemble(
    seed: &str,
    params: &GenerationParams,
    shape: GalaxyShape,
    star_count: usize,
    bodies: Vec<CelestialBody>,
    prs: &mut Prs,
) -> Galaxy {
    let age = prs.next(GALAXY_AGE.0, GALAXY_AGE.1);
    let metallicity = prs.next(METALLICITY.0, METALLICITY.1);

    Galaxy {
        id: galaxy_id(seed),
        name: galaxy_name(seed),
        seed: seed.to_string(),
        shape,
        size: params.galaxy_size,
        star_count,
        bodies,
        age,
        metallicity,
        params: *params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_seed() {
        assert_eq!(galaxy_id("abc"), "galaxy-abc");
        assert_eq!(galaxy_name("abc"), "Galaxy-ABC");
        assert_eq!(galaxy_name("andromeda-7"), "Galaxy-ANDROMED");
        assert_eq!(galaxy_name(""), "Galaxy-");
    }

    #[test]
    fn test_name_truncates_on_char_boundaries() {
        assert_eq!(galaxy_name("ééééééééé"), "Galaxy-ÉÉÉÉÉÉÉÉ");
    }

    #[test]
    fn test_assemble_takes_two_draws() {
        let mut prs = Prs::new(5);
        let galaxy = assemble(
            "x",
            &GenerationParams::default(),
            GalaxyShape::Dwarf,
            0,
            Vec::new(),
            &mut prs,
        );
        assert_eq!(prs.draws(), 2);
        assert!((1.0..13.8).contains(&galaxy.age()));
        assert!((0.1..2.0).contains(&galaxy.metallicity()));
        assert_eq!(galaxy.size(), 100.0);
        assert!(galaxy.bodies().is_empty());
    }
}
