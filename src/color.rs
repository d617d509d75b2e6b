//! Turns escape measurements into colors.
//!
//! Coloring by raw iteration count produces visible rings, because
//! the count is an integer and neighboring pixels snap to neighboring
//! integers.  The classic fix is to add a fractional correction
//! derived from how far past the bailout the orbit finally landed,
//! which turns the count into a continuous quantity.  The continuous
//! count then drives three phase-shifted sine waves, one per channel,
//! and a brightness ramp keeps the fast escapes near the exterior
//! suitably dim.

use crate::escape::EscapeResult;
use std::f32::consts::{LN_2, PI};

/// Map one escape measurement to an RGB triple.  Points that never
/// escaped are painted black; that is what the inside of the set
/// looks like.
pub fn shade(sample: &EscapeResult, limit: usize) -> [u8; 3] {
    if sample.iterations >= limit {
        return [0, 0, 0];
    }

    // The continuous-iteration correction.  |z|² is at least the
    // squared bailout here, so the inner log is safely positive.
    let smooth = sample.final_magnitude_sq.sqrt().ln().ln() / LN_2;
    let t = (sample.iterations as f32 + smooth) * 0.05;
    let brightness = 1.0 - (-0.1 * sample.iterations as f32).exp();

    [
        channel(t, 0.0, brightness),
        channel(t, 2.0 * PI / 3.0, brightness),
        channel(t, 4.0 * PI / 3.0, brightness),
    ]
}

/// One sine wave mapped from [-1, 1] to [0, 255] and dimmed.
fn channel(t: f32, phase: f32, brightness: f32) -> u8 {
    (((t + phase).sin() * 0.5 + 0.5) * brightness * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(iterations: usize, final_magnitude_sq: f32) -> EscapeResult {
        EscapeResult {
            iterations,
            final_magnitude_sq,
        }
    }

    #[test]
    fn interior_points_are_black() {
        assert_eq!(shade(&escaped(1000, 3.5), 1000), [0, 0, 0]);
    }

    #[test]
    fn an_instant_escape_is_fully_dimmed() {
        // Brightness is 1 - e^0 = 0 at zero iterations.
        assert_eq!(shade(&escaped(0, 20000.0), 1000), [0, 0, 0]);
    }

    #[test]
    fn adjacent_iteration_counts_shade_smoothly() {
        // The whole point of the continuous correction: one extra
        // iteration at the same escape magnitude may not jump a
        // channel by more than a sliver.
        for iterations in 1..200 {
            let a = shade(&escaped(iterations, 20.0), 1000);
            let b = shade(&escaped(iterations + 1, 20.0), 1000);
            for ch in 0..3 {
                let delta = (i32::from(a[ch]) - i32::from(b[ch])).abs();
                assert!(
                    delta < 40,
                    "channel {} jumped by {} between {} and {} iterations",
                    ch,
                    delta,
                    iterations,
                    iterations + 1
                );
            }
        }
    }

    #[test]
    fn early_escapes_are_dimmer_than_the_ramp_allows() {
        let rgb = shade(&escaped(3, 30.0), 1000);
        let ceiling = 255.0 * (1.0 - (-0.1_f32 * 3.0).exp());
        for ch in 0..3 {
            assert!(f32::from(rgb[ch]) <= ceiling);
        }
    }

    #[test]
    fn the_escape_magnitude_participates() {
        // Same iteration count, different overshoot past the bailout,
        // different color.
        let near = shade(&escaped(50, 16.0), 1000);
        let far = shade(&escaped(50, 10000.0), 1000);
        assert_ne!(near, far);
    }
}
