//! Mandelbrot escape-time sampling

/// Normalized escape time of c = (x, y)
///
/// Returns `i / max_iterations` for the first iteration `i` at which the
/// orbit leaves the radius-2 disc, or 1.0 if it stays bounded. Zero
/// iterations yields 1.0.
pub fn mandelbrot(x: f64, y: f64, max_iterations: u32) -> f64 {
    let mut real = x;
    let mut imag = y;

    for i in 0..max_iterations {
        let next_real = real * real - imag * imag + x;
        imag = 2.0 * real * imag + y;
        real = next_real;

        if real * real + imag * imag > 4.0 {
            return f64::from(i) / f64::from(max_iterations);
        }
    }
    1.0
}
