//! Generation configuration with documented constants
//!
//! Caller-facing parameters, the safety limits that bound generation, and the
//! TOML file format that bundles both with an optional seed.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, StarseedError};

/// Caller-supplied knobs for a single generation call
///
/// Any combination of values is accepted by the generator. Values outside the
/// recommended ranges (see [`GenerationParams::validate`]) produce degenerate
/// but valid galaxies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Outer diameter of the galaxy in galaxy units
    ///
    /// Stars are placed at a radial distance in [0, galaxy_size / 2).
    /// Together with `star_density` this sets the requested star count.
    pub galaxy_size: f64,

    /// Stars per unit of galaxy size
    ///
    /// Requested star count is `floor(star_density * galaxy_size)`, before
    /// the soft and hard star caps apply. At the default (0.2 × 100) a galaxy
    /// requests 20 stars.
    pub star_density: f64,

    /// Chance that a star hosts a planetary system
    pub planet_probability: f64,

    /// Chance that a generated planet hosts life
    pub life_probability: f64,

    /// Reserved detail knob, carried through to the output
    pub complexity: f64,

    /// Reserved fractal detail knob, carried through to the output
    pub fractal_iterations: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Preset::Lightweight.params()
    }
}

/// Named parameter sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Small, sparse galaxies that generate quickly
    #[default]
    Lightweight,
    /// Larger, denser galaxies with more planets and life
    Classic,
}

impl Preset {
    pub fn params(self) -> GenerationParams {
        match self {
            Preset::Lightweight => GenerationParams {
                galaxy_size: 100.0,
                star_density: 0.2,
                planet_probability: 0.5,
                life_probability: 0.05,
                complexity: 0.3,
                fractal_iterations: 3,
            },
            Preset::Classic => GenerationParams {
                galaxy_size: 200.0,
                star_density: 0.3,
                planet_probability: 0.7,
                life_probability: 0.1,
                complexity: 0.5,
                fractal_iterations: 5,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Lightweight => "lightweight",
            Preset::Classic => "classic",
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = StarseedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lightweight" => Ok(Preset::Lightweight),
            "classic" => Ok(Preset::Classic),
            other => Err(StarseedError::InvalidParams(format!(
                "unknown preset '{}' (expected lightweight or classic)",
                other
            ))),
        }
    }
}

// Recommended ranges for interactive use
pub const GALAXY_SIZE_RANGE: (f64, f64) = (50.0, 500.0);
pub const STAR_DENSITY_RANGE: (f64, f64) = (0.1, 1.0);
pub const PROBABILITY_RANGE: (f64, f64) = (0.0, 1.0);
pub const FRACTAL_ITERATIONS_RANGE: (u32, u32) = (1, 10);

impl GenerationParams {
    /// Check the parameters against the recommended ranges
    ///
    /// Generation never requires this to pass; it exists so configuration
    /// files and command-line input can be reported to the user.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        check_range(&mut problems, "galaxy_size", self.galaxy_size, GALAXY_SIZE_RANGE);
        check_range(&mut problems, "star_density", self.star_density, STAR_DENSITY_RANGE);
        check_range(
            &mut problems,
            "planet_probability",
            self.planet_probability,
            PROBABILITY_RANGE,
        );
        check_range(
            &mut problems,
            "life_probability",
            self.life_probability,
            PROBABILITY_RANGE,
        );
        check_range(&mut problems, "complexity", self.complexity, PROBABILITY_RANGE);

        let (lo, hi) = FRACTAL_ITERATIONS_RANGE;
        if !(lo..=hi).contains(&self.fractal_iterations) {
            problems.push(format!(
                "fractal_iterations ({}) should be within {}..={}",
                self.fractal_iterations, lo, hi
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(StarseedError::InvalidParams(problems.join("; ")))
        }
    }
}

fn check_range(problems: &mut Vec<String>, name: &str, value: f64, (lo, hi): (f64, f64)) {
    if !value.is_finite() {
        problems.push(format!("{} must be finite (got {})", name, value));
    } else if value < lo || value > hi {
        problems.push(format!(
            "{} ({}) should be within {}..={}",
            name, value, lo, hi
        ));
    }
}

// === ABSOLUTE CEILINGS ===
//
// Limits read from configuration are clamped to these, so no input can make
// generation time or memory unbounded.

pub const ABSOLUTE_MAX_BODIES: usize = 10_000;
pub const ABSOLUTE_MAX_STARS: usize = 2_000;
pub const ABSOLUTE_MAX_PLANETS_PER_STAR: usize = 16;
pub const ABSOLUTE_MAX_MOONS_PER_PLANET: usize = 8;

/// Safety valves on body counts
///
/// These bound memory and time; they carry no astrophysical meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationLimits {
    /// Upper bound on the requested star count before the hard cap
    pub star_soft_cap: usize,

    /// Final bound on stars per galaxy
    ///
    /// Deliberately below the soft cap: the soft cap keeps the density
    /// formula honest for small galaxies, the hard cap is the real ceiling.
    pub star_hard_cap: usize,

    /// A star only receives planets while the body count is below this
    pub planet_gate: usize,

    /// A planet only receives moons while the body count is below this
    pub moon_gate: usize,

    /// No body of any kind is added once the galaxy holds this many
    pub max_bodies: usize,

    /// Planets per star never exceed this
    pub max_planets_per_star: usize,

    /// Moons per planet never exceed this
    pub max_moons_per_planet: usize,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            star_soft_cap: 100,
            star_hard_cap: 50,
            planet_gate: 200,
            moon_gate: 250,
            max_bodies: 250,
            max_planets_per_star: 3,
            max_moons_per_planet: 1,
        }
    }
}

impl GenerationLimits {
    /// Copy of these limits pulled under the absolute ceilings
    pub fn clamped(&self) -> Self {
        Self {
            star_soft_cap: self.star_soft_cap.min(ABSOLUTE_MAX_STARS),
            star_hard_cap: self.star_hard_cap.min(ABSOLUTE_MAX_STARS),
            planet_gate: self.planet_gate.min(ABSOLUTE_MAX_BODIES),
            moon_gate: self.moon_gate.min(ABSOLUTE_MAX_BODIES),
            max_bodies: self.max_bodies.min(ABSOLUTE_MAX_BODIES),
            max_planets_per_star: self.max_planets_per_star.min(ABSOLUTE_MAX_PLANETS_PER_STAR),
            max_moons_per_planet: self.max_moons_per_planet.min(ABSOLUTE_MAX_MOONS_PER_PLANET),
        }
    }

    /// Star count for a requested (possibly negative or NaN) star budget
    pub fn star_count(&self, requested: f64) -> usize {
        // `as` saturates: negative and NaN become 0, huge values become usize::MAX
        let requested = requested.floor() as usize;
        let limits = self.clamped();
        limits.star_hard_cap.min(limits.star_soft_cap.min(requested))
    }

    /// Validate limits for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.star_hard_cap > self.max_bodies {
            return Err(StarseedError::InvalidLimits(format!(
                "star_hard_cap ({}) should be <= max_bodies ({})",
                self.star_hard_cap, self.max_bodies
            )));
        }

        if self.planet_gate > self.max_bodies || self.moon_gate > self.max_bodies {
            return Err(StarseedError::InvalidLimits(format!(
                "planet_gate ({}) and moon_gate ({}) should be <= max_bodies ({})",
                self.planet_gate, self.moon_gate, self.max_bodies
            )));
        }

        if self.max_planets_per_star == 0 {
            return Err(StarseedError::InvalidLimits(
                "max_planets_per_star must be at least 1".into(),
            ));
        }

        if *self != self.clamped() {
            return Err(StarseedError::InvalidLimits(format!(
                "limits exceed absolute ceilings (max {} bodies, {} stars)",
                ABSOLUTE_MAX_BODIES, ABSOLUTE_MAX_STARS
            )));
        }

        Ok(())
    }
}

/// Contents of a generator TOML file
///
/// ```toml
/// seed = "andromeda"
///
/// [params]
/// galaxy_size = 200.0
/// star_density = 0.3
///
/// [limits]
/// max_bodies = 250
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: Option<String>,
    pub preset: Option<Preset>,
    pub params: Option<GenerationParams>,
    pub limits: GenerationLimits,
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a generator config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded generator config from {:?}", path);
        Ok(config)
    }

    /// Effective params: explicit `[params]` table, else the preset, else defaults
    pub fn resolved_params(&self) -> GenerationParams {
        match (self.params, self.preset) {
            (Some(params), _) => params,
            (None, Some(preset)) => preset.params(),
            (None, None) => GenerationParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_validate() {
        assert!(GenerationParams::default().validate().is_ok());
        assert!(Preset::Classic.params().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let params = GenerationParams {
            galaxy_size: f64::NAN,
            star_density: 5.0,
            fractal_iterations: 0,
            ..GenerationParams::default()
        };
        let err = params.validate().unwrap_err().to_string();
        assert!(err.contains("galaxy_size"));
        assert!(err.contains("star_density"));
        assert!(err.contains("fractal_iterations"));
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("Classic".parse::<Preset>().unwrap(), Preset::Classic);
        assert_eq!("lightweight".parse::<Preset>().unwrap(), Preset::Lightweight);
        assert!("huge".parse::<Preset>().is_err());
        for preset in [Preset::Lightweight, Preset::Classic] {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_default_limits_validate() {
        assert!(GenerationLimits::default().validate().is_ok());
    }

    #[test]
    fn test_limits_clamped_to_ceilings() {
        let limits = GenerationLimits {
            star_soft_cap: usize::MAX,
            star_hard_cap: usize::MAX,
            planet_gate: usize::MAX,
            moon_gate: usize::MAX,
            max_bodies: usize::MAX,
            max_planets_per_star: usize::MAX,
            max_moons_per_planet: usize::MAX,
        };
        let clamped = limits.clamped();
        assert_eq!(clamped.max_bodies, ABSOLUTE_MAX_BODIES);
        assert_eq!(clamped.star_hard_cap, ABSOLUTE_MAX_STARS);
        assert_eq!(clamped.max_planets_per_star, ABSOLUTE_MAX_PLANETS_PER_STAR);
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_star_count_caps() {
        let limits = GenerationLimits::default();
        assert_eq!(limits.star_count(20.0), 20);
        assert_eq!(limits.star_count(20.9), 20);
        assert_eq!(limits.star_count(75.0), 50);
        assert_eq!(limits.star_count(1e18), 50);
        assert_eq!(limits.star_count(f64::INFINITY), 50);
        assert_eq!(limits.star_count(-3.0), 0);
        assert_eq!(limits.star_count(f64::NAN), 0);
    }

    #[test]
    fn test_config_from_toml() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            seed = "andromeda"

            [params]
            galaxy_size = 300.0
            star_density = 0.5

            [limits]
            max_bodies = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.seed.as_deref(), Some("andromeda"));
        let params = config.resolved_params();
        assert_eq!(params.galaxy_size, 300.0);
        assert_eq!(params.star_density, 0.5);
        // Unspecified fields fall back to defaults
        assert_eq!(params.life_probability, 0.05);
        assert_eq!(config.limits.max_bodies, 120);
        assert_eq!(config.limits.star_hard_cap, 50);
    }

    #[test]
    fn test_config_preset_only() {
        let config = GeneratorConfig::from_toml_str("preset = \"classic\"").unwrap();
        assert_eq!(config.resolved_params(), Preset::Classic.params());
        assert_eq!(config.limits, GenerationLimits::default());
    }

    #[test]
    fn test_load_sample_config() {
        let config = GeneratorConfig::load(Path::new("data/galaxy.toml"))
            .expect("Should load sample config");
        assert_eq!(config.seed.as_deref(), Some("andromeda"));
        assert_eq!(config.resolved_params(), Preset::Classic.params());
        assert!(config.limits.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorConfig::load(Path::new("data/does_not_exist.toml")).unwrap_err();
        assert!(matches!(err, StarseedError::Io(_)));
    }

    #[test]
    fn test_config_rejects_bad_toml() {
        let err = GeneratorConfig::from_toml_str("seed = [").unwrap_err();
        assert!(matches!(err, StarseedError::Toml(_)));
    }
}
