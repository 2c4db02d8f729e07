#[cfg(test)]
mod _tests_symmetry_operations {
    use super::super::crystal_symmetry::CrystalSymmetry;
    use super::super::symmetry_operations::operator_quaternion;
    use crate::orientation::{euler_to_quaternion, EulerAngles};
    use approx::assert_abs_diff_eq;
    use nalgebra::Quaternion;

    const TOL: f64 = 1e-9;

    fn sample_orientations() -> Vec<Quaternion<f64>> {
        [
            EulerAngles::new(0.3, 0.7, 1.1),
            EulerAngles::new(5.9, 2.8, 0.2),
            EulerAngles::new(2.2, 1.3, 4.4),
            EulerAngles::new(4.1, 0.45, 2.9),
        ]
        .iter()
        .map(euler_to_quaternion)
        .collect()
    }

    fn assert_quat_eq(a: &Quaternion<f64>, b: &Quaternion<f64>) {
        assert_abs_diff_eq!(a.w, b.w, epsilon = TOL);
        assert_abs_diff_eq!(a.i, b.i, epsilon = TOL);
        assert_abs_diff_eq!(a.j, b.j, epsilon = TOL);
        assert_abs_diff_eq!(a.k, b.k, epsilon = TOL);
    }

    // ==================== Operator tables ====================

    #[test]
    fn test_tables_start_with_identity() {
        for sym in CrystalSymmetry::ALL {
            let first = operator_quaternion(&sym.ops().operators()[0]);
            assert_eq!(first, Quaternion::identity(), "{}", sym);
        }
    }

    #[test]
    fn test_operators_are_unit() {
        for sym in CrystalSymmetry::ALL {
            for op in sym.ops().operators() {
                assert_abs_diff_eq!(operator_quaternion(op).norm(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_tables_are_closed_groups() {
        for sym in CrystalSymmetry::ALL {
            let ops: Vec<Quaternion<f64>> =
                sym.ops().operators().iter().map(operator_quaternion).collect();
            for a in &ops {
                for b in &ops {
                    let product = a * b;
                    let found = ops.iter().any(|c| (product.dot(c).abs() - 1.0).abs() < 1e-12);
                    assert!(found, "{} table is not closed under composition", sym);
                }
            }
        }
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        for sym in CrystalSymmetry::ALL {
            let ops: Vec<Quaternion<f64>> =
                sym.ops().operators().iter().map(operator_quaternion).collect();
            for (i, a) in ops.iter().enumerate() {
                for b in ops.iter().skip(i + 1) {
                    assert!(a.dot(b).abs() < 1.0 - 1e-6, "{} has a repeated rotation", sym);
                }
            }
        }
    }

    // ==================== Fundamental zone ====================

    #[test]
    fn test_reduction_lands_in_fundamental_zone() {
        for sym in CrystalSymmetry::ALL {
            for q in sample_orientations() {
                let reduced = sym.reduce_to_fundamental_zone(&q);
                assert!(sym.in_fundamental_zone(&reduced), "{}", sym);
                assert!(reduced.w >= 0.0);
                assert_abs_diff_eq!(reduced.norm(), 1.0, epsilon = TOL);
            }
        }
    }

    #[test]
    fn test_reduction_is_idempotent_inside_zone() {
        let small = euler_to_quaternion(&EulerAngles::new(0.1, 0.15, 0.05));
        for sym in CrystalSymmetry::ALL {
            assert!(sym.in_fundamental_zone(&small), "{}", sym);
            assert_quat_eq(&sym.reduce_to_fundamental_zone(&small), &small);
        }
    }

    #[test]
    fn test_reduction_of_reduced_is_unchanged() {
        for sym in CrystalSymmetry::ALL {
            for q in sample_orientations() {
                let once = sym.reduce_to_fundamental_zone(&q);
                let twice = sym.reduce_to_fundamental_zone(&once);
                assert_quat_eq(&once, &twice);
            }
        }
    }

    #[test]
    fn test_reduction_is_symmetry_invariant() {
        for sym in CrystalSymmetry::ALL {
            for q in sample_orientations() {
                let expected = sym.reduce_to_fundamental_zone(&q);
                for op in sym.ops().operators() {
                    let equivalent = q * operator_quaternion(op);
                    assert_quat_eq(&sym.reduce_to_fundamental_zone(&equivalent), &expected);
                }
            }
        }
    }

    #[test]
    fn test_reduction_ignores_global_sign() {
        for sym in CrystalSymmetry::ALL {
            for q in sample_orientations() {
                assert_quat_eq(
                    &sym.reduce_to_fundamental_zone(&(-q)),
                    &sym.reduce_to_fundamental_zone(&q),
                );
            }
        }
    }

    #[test]
    fn test_half_turn_is_outside_cubic_zone() {
        let half_turn_x = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        assert!(!CrystalSymmetry::Cubic.in_fundamental_zone(&half_turn_x));
        let reduced = CrystalSymmetry::Cubic.reduce_to_fundamental_zone(&half_turn_x);
        assert_quat_eq(&reduced, &Quaternion::identity());
    }

    // ==================== Nearest equivalent ====================

    #[test]
    fn test_nearest_equivalent_of_itself() {
        for sym in CrystalSymmetry::ALL {
            for q in sample_orientations() {
                assert_quat_eq(&sym.nearest_equivalent(&q, &q), &q);
            }
        }
    }

    #[test]
    fn test_nearest_equivalent_resolves_antipode() {
        for sym in CrystalSymmetry::ALL {
            for q in sample_orientations() {
                assert_quat_eq(&sym.nearest_equivalent(&q, &(-q)), &q);
            }
        }
    }

    #[test]
    fn test_nearest_equivalent_undoes_symmetry_operator() {
        for sym in CrystalSymmetry::ALL {
            for q in sample_orientations() {
                for op in sym.ops().operators() {
                    let equivalent = -(q * operator_quaternion(op));
                    assert_quat_eq(&sym.nearest_equivalent(&q, &equivalent), &q);
                }
            }
        }
    }

    #[test]
    fn test_nearest_equivalent_scales_with_reference() {
        // An unnormalized running sum selects the same branch as its unit direction
        let q = sample_orientations()[2];
        let candidate = -(q * operator_quaternion(&super::super::CUBIC_OPERATORS[17]));
        let scaled = q * 7.5;
        assert_quat_eq(
            &CrystalSymmetry::Cubic.nearest_equivalent(&scaled, &candidate),
            &q,
        );
    }

    #[test]
    fn test_nearest_equivalent_with_zero_reference_keeps_candidate() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        for sym in CrystalSymmetry::ALL {
            for q in sample_orientations() {
                assert_eq!(sym.nearest_equivalent(&zero, &q), q);
            }
        }
    }

    // ==================== Misorientation ====================

    #[test]
    fn test_misorientation_of_equivalents_is_zero() {
        for sym in CrystalSymmetry::ALL {
            for q in sample_orientations() {
                for op in sym.ops().operators() {
                    let equivalent = q * operator_quaternion(op);
                    assert_abs_diff_eq!(sym.misorientation_angle(&q, &equivalent), 0.0, epsilon = 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_misorientation_of_small_rotation() {
        let q = sample_orientations()[0];
        let five_degrees = euler_to_quaternion(&EulerAngles::from_degrees(5.0, 0.0, 0.0));
        let rotated = q * five_degrees;
        for sym in CrystalSymmetry::ALL {
            assert_abs_diff_eq!(
                sym.misorientation_angle(&q, &rotated),
                5f64.to_radians(),
                epsilon = 1e-9
            );
        }
    }
}
