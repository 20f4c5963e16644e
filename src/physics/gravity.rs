use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Physical constants (heliocentric, AU / s units)
// ---------------------------------------------------------------------------

pub const AU: f64 = 149_597_871.0; // astronomical unit, km
pub const GM_SUN_KM: f64 = 1.327_124_400e11; // km^3/s^2
pub const GM_SUN: f64 = GM_SUN_KM / AU / AU / AU; // AU^3/s^2

/// Threshold on squared magnitudes below which the node or eccentricity
/// vector counts as degenerate. Empirical, not machine epsilon.
pub const DEGENERACY_EPSILON: f64 = 1e-40;

// ---------------------------------------------------------------------------
// Point-mass gravity, pre-scaled by the step length
// ---------------------------------------------------------------------------

/// Velocity increment at `pos` over a step of `dt` seconds, using `gm / |pos|`
/// as the magnitude. This is the predictor term of the substep scheme.
pub fn predictor_increment(pos: &Vector3<f64>, dt: f64, gm: f64) -> Vector3<f64> {
    let r = pos.norm();
    -pos.normalize() * (gm / r * dt)
}

/// Velocity increment at `pos` over `dt` seconds with the inverse-square
/// magnitude `gm / |pos|^2`.
pub fn inverse_square_increment(pos: &Vector3<f64>, dt: f64, gm: f64) -> Vector3<f64> {
    let r2 = pos.norm_squared();
    -pos.normalize() * (dt * gm / r2)
}

/// Speed of a circular orbit of radius `r`.
pub fn circular_speed(r: f64, gm: f64) -> f64 {
    (gm / r).sqrt()
}

/// Orbital speed at radius `r` on an orbit of semi-major axis `sma` (vis-viva).
pub fn vis_viva_speed(r: f64, sma: f64, gm: f64) -> f64 {
    (gm * (2.0 / r - 1.0 / sma)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_circular_speed_in_km_per_s() {
        let v = circular_speed(1.0, GM_SUN) * AU;
        assert!((v - 29.78).abs() < 0.01, "Earth orbital speed ~29.78 km/s, got {:.3}", v);
    }

    #[test]
    fn increments_agree_at_one_au() {
        let pos = Vector3::new(0.6, 0.8, 0.0);
        let a = predictor_increment(&pos, 1000.0, GM_SUN);
        let b = inverse_square_increment(&pos, 1000.0, GM_SUN);
        assert!((a - b).norm() < 1e-20);
    }

    #[test]
    fn increment_points_at_origin() {
        let pos = Vector3::new(0.0, 0.0, 2.0);
        let dv = inverse_square_increment(&pos, 10.0, GM_SUN);
        assert!(dv.z < 0.0);
        assert!(dv.x.abs() < 1e-30 && dv.y.abs() < 1e-30);
        let expected = 10.0 * GM_SUN / 4.0;
        assert!((dv.norm() - expected).abs() < expected * 1e-12);
    }

    #[test]
    fn vis_viva_reduces_to_circular() {
        let r = 1.3;
        assert!((vis_viva_speed(r, r, GM_SUN) - circular_speed(r, GM_SUN)).abs() < 1e-20);
    }
}
