#[cfg(test)]
mod _tests_quaternion {
    use super::super::euler::EulerAngles;
    use super::super::quaternion::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Quaternion;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    fn sample_triples() -> Vec<EulerAngles> {
        vec![
            EulerAngles::new(0.3, 0.7, 1.1),
            EulerAngles::new(5.9, 2.8, 0.2),
            EulerAngles::new(1.0, 0.01, 4.0),
            EulerAngles::new(3.5, 1.5707, 6.1),
            EulerAngles::from_degrees(45.0, 54.7, 12.5),
        ]
    }

    #[test]
    fn test_identity_maps_to_zero_angles() {
        let euler = quaternion_to_euler(&Quaternion::identity());
        assert_eq!(euler, EulerAngles::zero());
    }

    #[test]
    fn test_zero_angles_map_to_identity() {
        let q = euler_to_quaternion(&EulerAngles::zero());
        assert_abs_diff_eq!(q.w, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(q.i, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(q.j, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(q.k, 0.0, epsilon = TOL);
    }

    #[test]
    fn test_euler_to_quaternion_is_unit() {
        for euler in sample_triples() {
            let q = euler_to_quaternion(&euler);
            assert_abs_diff_eq!(q.norm(), 1.0, epsilon = TOL);
        }
    }

    #[test]
    fn test_round_trip() {
        for euler in sample_triples() {
            let back = quaternion_to_euler(&euler_to_quaternion(&euler));
            assert_abs_diff_eq!(back.phi1, euler.phi1, epsilon = 1e-9);
            assert_abs_diff_eq!(back.phi, euler.phi, epsilon = 1e-9);
            assert_abs_diff_eq!(back.phi2, euler.phi2, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_round_trip_ignores_global_sign() {
        for euler in sample_triples() {
            let q = euler_to_quaternion(&euler);
            let back = quaternion_to_euler(&(-q));
            assert_abs_diff_eq!(back.phi1, euler.phi1, epsilon = 1e-9);
            assert_abs_diff_eq!(back.phi, euler.phi, epsilon = 1e-9);
            assert_abs_diff_eq!(back.phi2, euler.phi2, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_angles_are_wrapped() {
        // phi1 + 2pi describes the same rotation and must come back in [0, 2pi)
        let euler = EulerAngles::new(0.4 + 2.0 * PI, 1.2, 0.9);
        let back = quaternion_to_euler(&euler_to_quaternion(&euler));
        assert_abs_diff_eq!(back.phi1, 0.4, epsilon = 1e-9);
        assert!(back.phi1 >= 0.0 && back.phi1 < 2.0 * PI);
        assert!(back.phi2 >= 0.0 && back.phi2 < 2.0 * PI);
    }

    #[test]
    fn test_canonical_hemisphere() {
        let q = Quaternion::new(-0.5, 0.5, 0.5, 0.5);
        let c = canonical(q);
        assert!(c.w > 0.0);
        assert_eq!(c, -q);
        assert_eq!(canonical(c), c);
    }

    #[test]
    fn test_rotation_angle() {
        assert_abs_diff_eq!(rotation_angle(&Quaternion::identity()), 0.0, epsilon = TOL);
        let half_turn = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(rotation_angle(&half_turn), PI, epsilon = TOL);
        let quarter = euler_to_quaternion(&EulerAngles::new(PI / 2.0, 0.0, 0.0));
        assert_abs_diff_eq!(rotation_angle(&quarter), PI / 2.0, epsilon = TOL);
        assert_abs_diff_eq!(rotation_angle(&(-quarter)), PI / 2.0, epsilon = TOL);
    }

    #[test]
    fn test_normalize_or_identity() {
        let q = normalize_or_identity(&Quaternion::new(2.0, 0.0, 0.0, 0.0));
        assert_abs_diff_eq!(q.w, 1.0, epsilon = TOL);
        let zero = normalize_or_identity(&Quaternion::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(zero, Quaternion::identity());
    }

    #[test]
    fn test_degrees_helpers() {
        let euler = EulerAngles::from_degrees(90.0, 45.0, 180.0);
        let degrees = euler.to_degrees();
        assert_abs_diff_eq!(degrees[0], 90.0, epsilon = TOL);
        assert_abs_diff_eq!(degrees[1], 45.0, epsilon = TOL);
        assert_abs_diff_eq!(degrees[2], 180.0, epsilon = TOL);
    }
}
