//! Canonical phase-domain wave functions.
//!
//! These take an angular argument `x = 2π·f·t` and return a sample in
//! `[-1, 1]`. The square and triangle functions match the classic
//! piecewise definitions (scipy's `square` and `sawtooth(x, 0.5)`).

use std::f64::consts::PI;

/// Two pi.
pub const TWO_PI: f64 = 2.0 * PI;

/// Sine wave at angular argument `x`.
pub fn sine(x: f64) -> f64 {
    x.sin()
}

/// Periodic ±1 square wave: +1 for the first `duty` fraction of each
/// period, -1 for the rest.
pub fn square(x: f64, duty: f64) -> f64 {
    let phase = (x / TWO_PI).rem_euclid(1.0);
    if phase < duty {
        1.0
    } else {
        -1.0
    }
}

/// Symmetric triangle wave in `[-1, 1]`: rises from -1 to +1 over the first
/// half period, falls back over the second.
pub fn triangle(x: f64) -> f64 {
    let phase = (x / TWO_PI).rem_euclid(1.0);
    if phase < 0.5 {
        4.0 * phase - 1.0
    } else {
        3.0 - 4.0 * phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_sine_quarter_points() {
        assert!((sine(0.0)).abs() < EPS);
        assert!((sine(PI / 2.0) - 1.0).abs() < EPS);
        assert!((sine(PI)).abs() < EPS);
        assert!((sine(3.0 * PI / 2.0) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_square_half_duty() {
        assert_eq!(square(0.0, 0.5), 1.0);
        assert_eq!(square(0.49 * TWO_PI, 0.5), 1.0);
        assert_eq!(square(0.5 * TWO_PI, 0.5), -1.0);
        assert_eq!(square(0.99 * TWO_PI, 0.5), -1.0);
        // Periodic
        assert_eq!(square(TWO_PI, 0.5), 1.0);
        // Negative arguments wrap into the same period
        assert_eq!(square(-0.25 * TWO_PI, 0.5), -1.0);
    }

    #[test]
    fn test_square_other_duty() {
        assert_eq!(square(0.2 * TWO_PI, 0.25), -1.0);
        assert_eq!(square(0.2 * TWO_PI, 0.3), 1.0);
    }

    #[test]
    fn test_triangle_key_points() {
        assert!((triangle(0.0) + 1.0).abs() < EPS);
        assert!((triangle(0.25 * TWO_PI)).abs() < EPS);
        assert!((triangle(0.5 * TWO_PI) - 1.0).abs() < EPS);
        assert!((triangle(0.75 * TWO_PI)).abs() < EPS);
        assert!((triangle(TWO_PI) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_triangle_stays_in_range() {
        for i in 0..1000 {
            let x = i as f64 * 0.037;
            let y = triangle(x);
            assert!((-1.0..=1.0).contains(&y));
        }
    }
}
