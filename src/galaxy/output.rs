//! Galaxy analytics, hit testing and serialization

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::Position;
use crate::galaxy::assembly::Galaxy;
use crate::galaxy::body::{BodyKind, CelestialBody};
use crate::galaxy::constants::PICK_RADIUS_FACTOR;

/// Aggregate counts over a galaxy's bodies
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalaxyStats {
    pub total_bodies: usize,
    pub by_kind: BTreeMap<BodyKind, usize>,
    pub life_bearing: usize,
    /// Sum of resource entries across all bodies
    pub total_resources: usize,
    /// Mean over life-bearing planets; 0 when there are none
    pub mean_biodiversity: f64,
}

impl GalaxyStats {
    pub fn from_galaxy(galaxy: &Galaxy) -> Self {
        let bodies = galaxy.bodies();

        let mut by_kind = BTreeMap::new();
        for body in bodies {
            *by_kind.entry(body.kind).or_insert(0) += 1;
        }

        let living: Vec<&CelestialBody> = bodies.iter().filter(|b| b.has_life).collect();
        let mean_biodiversity = if living.is_empty() {
            0.0
        } else {
            living.iter().map(|b| b.biodiversity).sum::<f64>() / living.len() as f64
        };

        Self {
            total_bodies: bodies.len(),
            by_kind,
            life_bearing: living.len(),
            total_resources: bodies.iter().map(|b| b.resources.len()).sum(),
            mean_biodiversity,
        }
    }

    pub fn count(&self, kind: BodyKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

impl Galaxy {
    pub fn stats(&self) -> GalaxyStats {
        GalaxyStats::from_galaxy(self)
    }

    /// First body (in generation order) whose pick radius covers `point`
    pub fn body_at(&self, point: Position) -> Option<&CelestialBody> {
        self.bodies()
            .iter()
            .find(|b| b.position.distance(&point) <= b.size * PICK_RADIUS_FACTOR)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self)?;
        std::fs::write(path, json)?;
        tracing::info!("Galaxy '{}' written to {:?}", self.name(), path);
        Ok(())
    }

    pub fn summary(&self) -> String {
        let stats = self.stats();
        format!(
            "{} ({} galaxy, seed \"{}\")\n{} stars, {} planets, {} moons ({} bodies)\n\
             Age {:.1}B years, metallicity {:.2}\n{} life-bearing worlds, {} resource deposits",
            self.name(),
            self.shape(),
            self.seed(),
            stats.count(BodyKind::Star),
            stats.count(BodyKind::Planet),
            stats.count(BodyKind::Moon),
            stats.total_bodies,
            self.age(),
            self.metallicity(),
            stats.life_bearing,
            stats.total_resources,
        )
    }

    /// 64-bit FNV-1a digest of every body's identity and numeric fields
    pub fn fingerprint(&self) -> u64 {
        let mut hash = Fnv1a::new();
        hash.write_bytes(self.shape().name().as_bytes());
        for body in self.bodies() {
            hash.write_bytes(body.id.as_bytes());
            for value in [
                body.position.x,
                body.position.y,
                body.size,
                body.color.hue,
                body.color.lightness,
                body.temperature,
                body.mass,
                body.distance,
                body.orbital_period,
                body.biodiversity,
            ] {
                hash.write_bytes(&value.to_bits().to_le_bytes());
            }
            hash.write_bytes(&[body.has_life as u8, body.atmosphere as u8]);
            for resource in &body.resources {
                hash.write_bytes(&[*resource as u8]);
            }
        }
        hash.write_bytes(&self.age().to_bits().to_le_bytes());
        hash.write_bytes(&self.metallicity().to_bits().to_le_bytes());
        hash.finish()
    }
}

struct Fnv1a(u64);

impl Fnv1a {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    fn new() -> Self {
        Self(Self::OFFSET)
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 ^= u64::from(*byte);
            self.0 = self.0.wrapping_mul(Self::PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GenerationParams;
    use crate::galaxy::generation::generate_galaxy;

    fn rich_galaxy() -> Galaxy {
        let params = GenerationParams {
            planet_probability: 1.0,
            life_probability: 0.5,
            ..GenerationParams::default()
        };
        generate_galaxy("stats", &params)
    }

    #[test]
    fn test_stats_counts_add_up() {
        let galaxy = rich_galaxy();
        let stats = galaxy.stats();
        assert_eq!(stats.total_bodies, galaxy.bodies().len());
        assert_eq!(stats.by_kind.values().sum::<usize>(), stats.total_bodies);
        let per_kind: usize = BodyKind::ALL.iter().map(|&k| stats.count(k)).sum();
        assert_eq!(per_kind, stats.total_bodies);
        assert_eq!(stats.count(BodyKind::Star), galaxy.star_count());
        assert_eq!(stats.count(BodyKind::Nebula), 0);
        assert_eq!(
            stats.life_bearing,
            galaxy.bodies().iter().filter(|b| b.has_life).count()
        );
        assert!((0.0..=100.0).contains(&stats.mean_biodiversity));
    }

    #[test]
    fn test_empty_galaxy_stats() {
        let params = GenerationParams {
            star_density: 0.0,
            ..GenerationParams::default()
        };
        let stats = generate_galaxy("", &params).stats();
        assert_eq!(stats.total_bodies, 0);
        assert_eq!(stats.mean_biodiversity, 0.0);
        assert!(stats.by_kind.is_empty());
    }

    #[test]
    fn test_body_at_hits_centre_and_misses_void() {
        let galaxy = rich_galaxy();
        let star = &galaxy.bodies()[0];
        let hit = galaxy.body_at(star.position).unwrap();
        // An earlier body may overlap, but whatever is hit must cover the point
        assert!(hit.position.distance(&star.position) <= hit.size * PICK_RADIUS_FACTOR);

        assert!(galaxy.body_at(Position::new(1e6, 1e6)).is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let galaxy = rich_galaxy();
        let json = galaxy.to_json();
        assert!(json.contains("\"seed\": \"stats\""));
        let parsed = Galaxy::from_json(&json).unwrap();
        assert_eq!(parsed, galaxy);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Galaxy::from_json("{\"not\": \"a galaxy\"}").is_err());
    }

    #[test]
    fn test_summary_mentions_name_and_counts() {
        let galaxy = rich_galaxy();
        let summary = galaxy.summary();
        assert!(summary.contains(galaxy.name()));
        assert!(summary.contains(&format!("{} stars", galaxy.star_count())));
    }

    #[test]
    fn test_fingerprint_stable_and_sensitive() {
        let params = GenerationParams::default();
        let a = generate_galaxy("alpha", &params).fingerprint();
        assert_eq!(a, generate_galaxy("alpha", &params).fingerprint());
        assert_ne!(a, generate_galaxy("alphb", &params).fingerprint());
    }
}
