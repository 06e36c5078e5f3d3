// Raw pair functions. Callers are responsible for flooring the separation
// distance; every function assumes `r > 0`. Force magnitudes are positive
// for repulsion along the separation direction.

#[inline]
pub fn lennard_jones_force(r: f64, epsilon: f64, sigma: f64) -> f64 {
    let sr = sigma / r;
    let sr6 = sr.powi(6);
    let sr12 = sr6 * sr6;
    24.0 * epsilon / r * (2.0 * sr12 - sr6)
}

#[inline]
pub fn lennard_jones_energy(r: f64, epsilon: f64, sigma: f64) -> f64 {
    let sr = sigma / r;
    let sr6 = sr.powi(6);
    let sr12 = sr6 * sr6;
    4.0 * epsilon * (sr12 - sr6)
}

#[inline]
pub fn mie_prefactor(repulsive: f64, attractive: f64) -> f64 {
    let spread = repulsive - attractive;
    repulsive / spread * (repulsive / attractive).powf(attractive / spread)
}

#[inline]
pub fn mie_force(r: f64, epsilon: f64, sigma: f64, repulsive: f64, attractive: f64) -> f64 {
    let sr = sigma / r;
    let c = mie_prefactor(repulsive, attractive);
    c * epsilon / r * (repulsive * sr.powf(repulsive) - attractive * sr.powf(attractive))
}

#[inline]
pub fn mie_energy(r: f64, epsilon: f64, sigma: f64, repulsive: f64, attractive: f64) -> f64 {
    let sr = sigma / r;
    let c = mie_prefactor(repulsive, attractive);
    c * epsilon * (sr.powf(repulsive) - sr.powf(attractive))
}

#[inline]
pub fn soft_sphere_force(r: f64, epsilon: f64, sigma: f64, exponent: f64) -> f64 {
    if r >= sigma {
        return 0.0;
    }
    exponent * epsilon / r * (sigma / r).powf(exponent)
}

#[inline]
pub fn soft_sphere_energy(r: f64, epsilon: f64, sigma: f64, exponent: f64) -> f64 {
    if r >= sigma {
        return 0.0;
    }
    epsilon * ((sigma / r).powf(exponent) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn lennard_jones_energy_is_zero_at_sigma() {
        assert!(f64_approx_equal(lennard_jones_energy(1.0, 1.0, 1.0), 0.0));
    }

    #[test]
    fn lennard_jones_energy_is_minus_epsilon_at_the_minimum() {
        let r_min = 2.0f64.powf(1.0 / 6.0);
        assert!(f64_approx_equal(
            lennard_jones_energy(r_min, 1.5, 1.0),
            -1.5
        ));
    }

    #[test]
    fn lennard_jones_force_vanishes_at_the_minimum() {
        let r_min = 2.0f64.powf(1.0 / 6.0);
        assert!(lennard_jones_force(r_min, 1.0, 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn lennard_jones_force_is_repulsive_at_sigma() {
        assert!(f64_approx_equal(lennard_jones_force(1.0, 1.0, 1.0), 24.0));
    }

    #[test]
    fn lennard_jones_force_is_attractive_beyond_the_minimum() {
        assert!(lennard_jones_force(1.5, 1.0, 1.0) < 0.0);
    }

    #[test]
    fn mie_12_6_reduces_to_lennard_jones() {
        for &r in &[0.9, 1.0, 1.2, 2.0] {
            assert!(f64_approx_equal(
                mie_energy(r, 1.0, 1.0, 12.0, 6.0),
                lennard_jones_energy(r, 1.0, 1.0)
            ));
            assert!(f64_approx_equal(
                mie_force(r, 1.0, 1.0, 12.0, 6.0),
                lennard_jones_force(r, 1.0, 1.0)
            ));
        }
    }

    #[test]
    fn mie_energy_reaches_minus_epsilon_at_its_minimum() {
        // The Mie minimum sits at r = (m/n)^(1/(m-n)) * sigma.
        let (m, n): (f64, f64) = (8.0, 4.0);
        let r_min = (m / n).powf(1.0 / (m - n));
        assert!(f64_approx_equal(mie_energy(r_min, 2.0, 1.0, m, n), -2.0));
    }

    #[test]
    fn soft_sphere_is_dead_beyond_the_cutoff() {
        assert_eq!(soft_sphere_force(1.0, 1.0, 1.0, 12.0), 0.0);
        assert_eq!(soft_sphere_energy(1.5, 1.0, 1.0, 12.0), 0.0);
    }

    #[test]
    fn soft_sphere_is_purely_repulsive_inside_the_cutoff() {
        assert!(soft_sphere_force(0.8, 1.0, 1.0, 12.0) > 0.0);
        assert!(soft_sphere_energy(0.8, 1.0, 1.0, 12.0) > 0.0);
    }

    #[test]
    fn soft_sphere_energy_is_continuous_at_the_cutoff() {
        let just_inside = soft_sphere_energy(1.0 - 1e-9, 1.0, 1.0, 12.0);
        assert!(just_inside.abs() < 1e-6);
    }
}
