use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConvergenceParams {
    pub bailout_radius: f64,
    pub max_iter_count: u32,
}

impl Default for ConvergenceParams {
    fn default() -> ConvergenceParams {
        ConvergenceParams {
            bailout_radius: 1e9,
            max_iter_count: 1000,
        }
    }
}

impl ConvergenceParams {
    pub fn bailout_radius_squared(&self) -> f64 {
        self.bailout_radius * self.bailout_radius
    }
}

/**
 * Data structure for storing the internal state of the escape-time
 * sequence calculation.
 */
struct EscapeTimeSequence {
    c_re: f64,
    c_im: f64,
    re: f64,
    im: f64,
}

impl EscapeTimeSequence {
    /// Starts the recurrence at Z = 0 for the constant term C.
    fn new(c_re: f64, c_im: f64) -> EscapeTimeSequence {
        EscapeTimeSequence {
            c_re,
            c_im,
            re: 0.0,
            im: 0.0,
        }
    }

    // Z = Z*Z + C
    // The imaginary channel reads a saved copy of the old real part; the
    // square must be taken from the previous Z before the constant is added.
    fn step(&mut self) {
        let re_prev = self.re;
        self.re = self.re * self.re - self.im * self.im;
        self.im = 2.0 * re_prev * self.im;
        self.re += self.c_re;
        self.im += self.c_im;
    }

    fn radius_squared(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

/// Evaluate the escape-time behavior of a single point in the complex plane.
///
/// @param point: the constant term "C" of the recurrence, i.e. the complex
///   coordinate of the pixel being evaluated.
/// @return: `step / max_iter_count` for the step at which the sequence first
///   left the bailout radius, or exactly 1.0 if it never escaped (the point
///   is treated as inside the set).
///
/// Total over all finite inputs: an overflow to infinity simply wins every
/// subsequent bailout comparison, so the loop still terminates by count.
pub fn normalized_escape_value(
    point: &nalgebra::Vector2<f64>,
    convergence_params: &ConvergenceParams,
) -> f64 {
    let mut sequence = EscapeTimeSequence::new(point[0], point[1]);
    let bailout_squared = convergence_params.bailout_radius_squared();

    for step in 0..convergence_params.max_iter_count {
        sequence.step();
        if sequence.radius_squared() > bailout_squared {
            return (step as f64) / (convergence_params.max_iter_count as f64);
        }
    }
    1.0
}
