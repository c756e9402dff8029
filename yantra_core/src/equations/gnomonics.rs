//! # Gnomonic Formulas
//!
//! Closed-form relations between the sun's position, the observer's
//! latitude, and the marks engraved on a shadow-casting instrument.
//!
//! ## Notation
//!
//! - `φ` = Observer latitude
//! - `H` = Solar hour angle (15° per hour from local noon, west positive)
//! - `δ` = Declination
//! - `ε` = Obliquity of the ecliptic
//! - `a` = Altitude above the horizon
//! - `z` = Zenith distance (90° − a)
//! - `R` = Scale factor (radius of the reference arc)
//!
//! ## Sign Conventions
//!
//! - Hour angles: negative before noon, positive after
//! - Meridian zenith distance: positive south of the zenith
//!
//! ## References
//!
//! - Mayall & Mayall, Sundials: Their Construction and Use
//! - V. N. Sharma, Sawai Jai Singh and His Astronomy

use crate::units::{Degrees, Radians};

/// Hour angle swept per hour of solar time
pub const DEGREES_PER_HOUR: f64 = 15.0;

// =============================================================================
// HOUR SCALES
// =============================================================================

/// Hour angle for a whole number of hours from local noon.
///
/// H = 15°·h
#[inline]
pub fn hour_angle(hour: i32) -> Degrees {
    Degrees(DEGREES_PER_HOUR * hour as f64)
}

/// Angle of the hour line on the Samrat quadrant for hour angle H.
///
/// ```text
///   θ = atan(tan H · sin φ)
/// ```
///
/// The mapping is nonlinear: equal time steps land at unequal angular steps,
/// bunching near noon and spreading toward the horizon hours.
///
/// At |H| = 90° (6 a.m. / 6 p.m.) tan H is undefined and θ is exactly ±90°
/// for every latitude; that case is returned directly. Defined for |H| ≤ 90°.
/// Odd in H: θ(−H) = −θ(H).
#[inline]
pub fn quadrant_hour_graduation(hour_angle: Degrees, latitude: Degrees) -> Degrees {
    if (hour_angle.0.abs() - 90.0).abs() < 1e-12 {
        return Degrees(90.0_f64.copysign(hour_angle.0));
    }
    let h: Radians = hour_angle.into();
    let phi: Radians = latitude.into();
    Radians((h.tan() * phi.sin()).atan()).to_degrees()
}

// =============================================================================
// GNOMON TRIANGLE
// A right triangle in the meridian plane whose hypotenuse points at the pole
// =============================================================================

/// Length of the sloped gnomon edge rising `height` at angle φ.
///
/// L = height / sin φ
#[inline]
pub fn gnomon_hypotenuse(height: f64, latitude: Degrees) -> f64 {
    height / latitude.to_radians().sin()
}

/// Horizontal run of the gnomon triangle.
///
/// b = height / tan φ
#[inline]
pub fn gnomon_base_length(height: f64, latitude: Degrees) -> f64 {
    height / latitude.to_radians().tan()
}

// =============================================================================
// TANGENT AND ARC SCALES
// =============================================================================

/// Distance along a straight scale at right angles to the radius R for an
/// angle measured at the centre.
///
/// d = R·tan θ
///
/// Used for the Samrat declination scale, the Rama wall altitude scale, and
/// the pala-bha (equinox noon shadow).
#[inline]
pub fn tangent_distance(radius: f64, angle: Degrees) -> f64 {
    radius * angle.to_radians().tan()
}

/// Horizontal distance at which the shadow of a point `height` above the
/// floor lands when the sun is at altitude a.
///
/// d = height / tan a
#[inline]
pub fn shadow_floor_distance(height: f64, altitude: Degrees) -> f64 {
    height / altitude.to_radians().tan()
}

/// Arc length subtended by `angle` on a circle of `radius`.
#[inline]
pub fn arc_length(radius: f64, angle: Degrees) -> f64 {
    radius * angle.to_radians().0
}

// =============================================================================
// MERIDIAN POSITIONS
// =============================================================================

/// Zenith distance at which a body of declination δ crosses the meridian,
/// signed positive south of the zenith.
///
/// z = φ − δ
#[inline]
pub fn meridian_zenith_distance(latitude: Degrees, declination: Degrees) -> Degrees {
    latitude - declination
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-9
    }

    #[test]
    fn test_hour_angle() {
        assert_eq!(hour_angle(0), Degrees(0.0));
        assert_eq!(hour_angle(-6), Degrees(-90.0));
        assert_eq!(hour_angle(3), Degrees(45.0));
    }

    #[test]
    fn test_graduation_at_noon_is_zero() {
        let theta = quadrant_hour_graduation(Degrees(0.0), Degrees(28.6));
        assert!(approx_eq(theta.0, 0.0));
    }

    #[test]
    fn test_graduation_horizon_hours() {
        assert_eq!(quadrant_hour_graduation(Degrees(90.0), Degrees(28.6)), Degrees(90.0));
        assert_eq!(quadrant_hour_graduation(Degrees(-90.0), Degrees(0.0001)), Degrees(-90.0));
    }

    #[test]
    fn test_graduation_known_value() {
        // H = 45°, φ = 30°: atan(1 · 0.5) = 26.565°
        let theta = quadrant_hour_graduation(Degrees(45.0), Degrees(30.0));
        assert!((theta.0 - 26.565051177).abs() < 1e-6, "θ = {}", theta.0);
    }

    #[test]
    fn test_graduation_is_odd() {
        for h in 1..=5 {
            let plus = quadrant_hour_graduation(hour_angle(h), Degrees(40.0));
            let minus = quadrant_hour_graduation(hour_angle(-h), Degrees(40.0));
            assert!(approx_eq(plus.0, -minus.0), "h = {}: {} vs {}", h, plus.0, minus.0);
        }
    }

    #[test]
    fn test_graduation_is_not_linear() {
        // Uniform time must not map to uniform angle
        let one = quadrant_hour_graduation(hour_angle(1), Degrees(28.6)).0;
        let two = quadrant_hour_graduation(hour_angle(2), Degrees(28.6)).0;
        assert!((two - 2.0 * one).abs() > 0.1);
    }

    #[test]
    fn test_gnomon_triangle() {
        // 1 / sin(28.6°) ≈ 2.0890
        let l = gnomon_hypotenuse(1.0, Degrees(28.6));
        assert!((l - 2.0890).abs() < 1e-3, "L = {}", l);

        // Pythagoras: L² = height² + base²
        let b = gnomon_base_length(1.0, Degrees(28.6));
        assert!(approx_eq(l * l, 1.0 + b * b));
    }

    #[test]
    fn test_tangent_distance_45() {
        assert!(approx_eq(tangent_distance(3.0, Degrees(45.0)), 3.0));
    }

    #[test]
    fn test_shadow_floor_distance() {
        assert!(approx_eq(shadow_floor_distance(2.0, Degrees(45.0)), 2.0));
        assert!(shadow_floor_distance(2.0, Degrees(80.0)) < 0.36);
    }

    #[test]
    fn test_arc_length_quadrant() {
        assert!(approx_eq(arc_length(2.0, Degrees(90.0)), std::f64::consts::PI));
    }

    #[test]
    fn test_meridian_zenith_distance() {
        // Equator (δ = 0) crosses at z = φ; the summer solstice sun at φ − ε
        assert_eq!(meridian_zenith_distance(Degrees(26.9), Degrees(0.0)), Degrees(26.9));
        let z = meridian_zenith_distance(Degrees(10.0), Degrees(23.44));
        assert!(z.0 < 0.0);
    }
}
