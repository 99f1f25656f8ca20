//! Polar placement of bodies, with spiral-arm winding

use crate::core::types::Position;
use crate::galaxy::constants::SPIRAL_WINDING;
use crate::galaxy::shape::GalaxyShape;

/// Map (angle, radius) to galaxy coordinates for the given archetype
///
/// Spiral galaxies wind the angle by `radius * SPIRAL_WINDING` so outer stars
/// trail into arms. Every other archetype is plain polar conversion.
pub fn place(angle: f64, radius: f64, shape: GalaxyShape) -> Position {
    let angle = match shape {
        GalaxyShape::Spiral => angle + radius * SPIRAL_WINDING,
        GalaxyShape::Elliptical | GalaxyShape::Irregular | GalaxyShape::Dwarf => angle,
    };
    Position::from_polar(angle, radius)
}

/// Plain polar offset from `origin`
pub fn place_relative(origin: Position, angle: f64, radius: f64) -> Position {
    let offset = Position::from_polar(angle, radius);
    origin.offset(offset.x, offset.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_non_spiral_is_plain_polar() {
        for shape in [GalaxyShape::Elliptical, GalaxyShape::Irregular, GalaxyShape::Dwarf] {
            let p = place(PI, 10.0, shape);
            assert!((p.x + 10.0).abs() < EPS);
            assert!(p.y.abs() < EPS);
        }
    }

    #[test]
    fn test_spiral_winds_with_radius() {
        let radius = 4.0;
        let p = place(0.0, radius, GalaxyShape::Spiral);
        let expected = Position::from_polar(radius * SPIRAL_WINDING, radius);
        assert!((p.x - expected.x).abs() < EPS);
        assert!((p.y - expected.y).abs() < EPS);
    }

    #[test]
    fn test_placement_preserves_radius() {
        for shape in GalaxyShape::ALL {
            let p = place(1.3, 27.5, shape);
            assert!((p.length() - 27.5).abs() < EPS);
        }
    }

    #[test]
    fn test_centre_is_fixed_point() {
        assert_eq!(place(2.0, 0.0, GalaxyShape::Spiral).distance(&Position::ORIGIN), 0.0);
    }

    #[test]
    fn test_place_relative() {
        let origin = Position::new(5.0, -2.0);
        let p = place_relative(origin, PI / 2.0, 3.0);
        assert!((p.x - 5.0).abs() < EPS);
        assert!((p.y - 1.0).abs() < EPS);
        assert!((p.distance(&origin) - 3.0).abs() < EPS);
    }
}
