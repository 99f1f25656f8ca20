//! Fractal and noise primitives
//!
//! Standalone samplers for surface and atmosphere detail. Galaxy generation
//! does not call into this module, so using it never perturbs the PRS draw
//! sequence.

pub mod mandelbrot;
pub mod perlin;

pub use mandelbrot::mandelbrot;
pub use perlin::perlin;
