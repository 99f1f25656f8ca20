//! Hierarchical body generation
//!
//! Stars, then each star's planets, then each planet's moons, accumulated
//! into one flat list with parent indices. Every attribute is its own PRS
//! draw taken in a fixed order, so the draw sequence (and therefore the whole
//! galaxy) is a pure function of seed, params and limits.

use crate::core::config::{GenerationLimits, GenerationParams};
use crate::core::types::{Hsl, Position};
use crate::galaxy::assembly::{assemble, Galaxy};
use crate::galaxy::body::{Atmosphere, BodyKind, BodyPath, CelestialBody, Resource};
use crate::galaxy::constants::*;
use crate::galaxy::placement::{place, place_relative};
use crate::galaxy::rng::Prs;
use crate::galaxy::seed::hash_seed;
use crate::galaxy::shape::GalaxyShape;

/// Generate a galaxy with the default limits
pub fn generate_galaxy(seed: &str, params: &GenerationParams) -> Galaxy {
    generate_galaxy_with_limits(seed, params, &GenerationLimits::default())
}

/// Generate a galaxy
///
/// Total: every seed and every parameter combination yields a galaxy.
/// `limits` are clamped to the absolute ceilings before use.
pub fn generate_galaxy_with_limits(
    seed: &str,
    params: &GenerationParams,
    limits: &GenerationLimits,
) -> Galaxy {
    let limits = limits.clamped();
    let mut prs = Prs::new(hash_seed(seed));

    let shape = GalaxyShape::select(&mut prs);
    let requested = params.star_density * params.galaxy_size;
    let planned = limits.star_count(requested);

    if (planned as f64) < requested.floor() {
        tracing::debug!(
            "Star count capped: requested {}, generating {}",
            requested.floor(),
            planned
        );
    }

    let mut generator = BodyGenerator::new(params, &limits, shape, &mut prs);
    generator.generate_stars(planned);
    let (star_count, bodies) = generator.finish();

    tracing::debug!(
        "Generated {} galaxy '{}': {} stars, {} bodies",
        shape,
        seed,
        star_count,
        bodies.len()
    );

    let galaxy = assemble(seed, params, shape, star_count, bodies, &mut prs);
    tracing::trace!("Galaxy '{}' used {} PRS draws", seed, prs.draws());
    galaxy
}

struct BodyGenerator<'a> {
    params: &'a GenerationParams,
    limits: &'a GenerationLimits,
    shape: GalaxyShape,
    prs: &'a mut Prs,
    bodies: Vec<CelestialBody>,
    star_count: usize,
}

impl<'a> BodyGenerator<'a> {
    fn new(
        params: &'a GenerationParams,
        limits: &'a GenerationLimits,
        shape: GalaxyShape,
        prs: &'a mut Prs,
    ) -> Self {
        Self {
            params,
            limits,
            shape,
            prs,
            bodies: Vec::with_capacity(limits.max_bodies.min(256)),
            star_count: 0,
        }
    }

    fn finish(self) -> (usize, Vec<CelestialBody>) {
        (self.star_count, self.bodies)
    }

    fn is_full(&self) -> bool {
        self.bodies.len() >= self.limits.max_bodies
    }

    fn draw(&mut self, (min, max): Range) -> f64 {
        self.prs.next(min, max)
    }

    fn push(&mut self, body: CelestialBody) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    fn generate_stars(&mut self, planned: usize) {
        let radius = (0.0, self.params.galaxy_size / 2.0);

        for i in 0..planned {
            if self.is_full() {
                tracing::debug!("Body cap {} reached at star {}", self.limits.max_bodies, i);
                break;
            }

            let angle = self.draw(FULL_TURN);
            let distance = self.draw(radius);
            let position = place(angle, distance, self.shape);

            let size = self.draw(STAR_SIZE);
            let hue = self.draw(STAR_HUE);
            let lightness = self.draw(STAR_LIGHTNESS);
            let temperature = self.draw(STAR_TEMPERATURE);
            let mass = self.draw(STAR_MASS);

            let path = BodyPath::star(i);
            let index = self.push(CelestialBody {
                id: path.id(),
                name: path.display_name(),
                kind: BodyKind::Star,
                path,
                parent: None,
                position,
                size,
                color: Hsl::new(hue, STAR_SATURATION, lightness),
                temperature,
                mass,
                distance,
                orbital_period: 0.0,
                has_life: false,
                biodiversity: 0.0,
                atmosphere: Atmosphere::None,
                resources: Vec::new(),
            });
            self.star_count += 1;

            tracing::trace!("{} at ({:.2}, {:.2})", path.id(), position.x, position.y);

            self.generate_planets(i, index, angle, distance);
        }
    }

    fn generate_planets(&mut self, star: usize, star_index: usize, star_angle: f64, star_distance: f64) {
        // The roll is always drawn, even when the gate is closed
        let hosts_planets = self.prs.chance(self.params.planet_probability);
        if !hosts_planets || self.bodies.len() >= self.limits.planet_gate {
            return;
        }

        let count = (self.draw(PLANET_COUNT).floor() as usize).min(self.limits.max_planets_per_star);

        for j in 0..count {
            if self.is_full() {
                break;
            }

            let distance = star_distance + self.draw(PLANET_DISTANCE_OFFSET);
            let angle = star_angle + self.draw(FULL_TURN);
            let position = Position::from_polar(angle, distance);

            let size = self.draw(PLANET_SIZE);
            let hue = self.draw(PLANET_HUE);
            let lightness = self.draw(PLANET_LIGHTNESS);
            let temperature = self.draw(PLANET_TEMPERATURE);
            let mass = self.draw(PLANET_MASS);
            let orbital_period = self.draw(PLANET_ORBITAL_PERIOD);

            let has_life = self.prs.chance(self.params.life_probability);
            let biodiversity = self.draw(BIODIVERSITY);
            let atmosphere = self.draw_atmosphere();
            let resources = self.draw_resources();

            let path = BodyPath::planet(star, j);
            let index = self.push(CelestialBody {
                id: path.id(),
                name: path.display_name(),
                kind: BodyKind::Planet,
                path,
                parent: Some(star_index),
                position,
                size,
                color: Hsl::new(hue, PLANET_SATURATION, lightness),
                temperature,
                mass,
                distance,
                orbital_period,
                has_life,
                biodiversity: if has_life { biodiversity } else { 0.0 },
                atmosphere,
                resources,
            });

            self.generate_moons(star, j, index, position, angle);
        }
    }

    /// Three-way categorical: oxygen or nitrogen when breathable, methane otherwise
    fn draw_atmosphere(&mut self) -> Atmosphere {
        if self.prs.chance(ATMOSPHERE_PROBABILITY) {
            if self.prs.chance(OXYGEN_PROBABILITY) {
                Atmosphere::Oxygen
            } else {
                Atmosphere::Nitrogen
            }
        } else {
            Atmosphere::Methane
        }
    }

    fn draw_resources(&mut self) -> Vec<Resource> {
        let mut resources = Vec::new();
        for resource in Resource::ALL {
            if self.prs.chance(RESOURCE_PROBABILITY) {
                resources.push(resource);
            }
        }
        resources
    }

    fn generate_moons(
        &mut self,
        star: usize,
        planet: usize,
        planet_index: usize,
        planet_position: Position,
        planet_angle: f64,
    ) {
        let hosts_moons = self.prs.chance(MOON_PROBABILITY);
        if !hosts_moons || self.bodies.len() >= self.limits.moon_gate {
            return;
        }

        let count = (self.draw(MOON_COUNT).floor() as usize).min(self.limits.max_moons_per_planet);

        for k in 0..count {
            if self.is_full() {
                break;
            }

            let distance = self.draw(MOON_DISTANCE);
            let angle = planet_angle + self.draw(FULL_TURN);
            let position = place_relative(planet_position, angle, distance);

            let size = self.draw(MOON_SIZE);
            let hue = self.draw(MOON_HUE);
            let lightness = self.draw(MOON_LIGHTNESS);
            let temperature = self.draw(MOON_TEMPERATURE);
            let mass = self.draw(MOON_MASS);
            let orbital_period = self.draw(MOON_ORBITAL_PERIOD);

            let path = BodyPath::moon(star, planet, k);
            self.push(CelestialBody {
                id: path.id(),
                name: path.display_name(),
                kind: BodyKind::Moon,
                path,
                parent: Some(planet_index),
                position,
                size,
                color: Hsl::new(hue, MOON_SATURATION, lightness),
                temperature,
                mass,
                distance,
                orbital_period,
                has_life: false,
                biodiversity: 0.0,
                atmosphere: Atmosphere::None,
                resources: Vec::new(),
            });
        }
    }
}
