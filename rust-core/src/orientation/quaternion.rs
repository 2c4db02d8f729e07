use nalgebra::Quaternion;
use std::f64::consts::PI;

use crate::config::QUATERNION_TOLERANCE;
use crate::orientation::euler::EulerAngles;

/// Convert Bunge Euler angles into a unit quaternion.
///
/// Uses the half-angle form
/// x = sin(Phi/2) cos((phi1 - phi2)/2), y = sin(Phi/2) sin((phi1 - phi2)/2),
/// z = cos(Phi/2) sin((phi1 + phi2)/2), w = cos(Phi/2) cos((phi1 + phi2)/2).
pub fn euler_to_quaternion(euler: &EulerAngles) -> Quaternion<f64> {
    let (s, c) = (0.5 * euler.phi).sin_cos();
    let (s_diff, c_diff) = (0.5 * (euler.phi1 - euler.phi2)).sin_cos();
    let (s_sum, c_sum) = (0.5 * (euler.phi1 + euler.phi2)).sin_cos();

    Quaternion::new(c * c_sum, s * c_diff, s * s_diff, c * s_sum)
}

/// Convert a quaternion back into Bunge Euler angles.
///
/// phi1 and phi2 land in [0, 2pi), Phi in [0, pi]. The result does not depend on the
/// sign of `q`. Input is used as given, so a non-unit quaternion skews Phi.
pub fn quaternion_to_euler(q: &Quaternion<f64>) -> EulerAngles {
    let diff = q.j.atan2(q.i);
    let sum = q.k.atan2(q.w);
    let cos_half = (q.k * q.k + q.w * q.w).sqrt().clamp(0.0, 1.0);

    EulerAngles::new(
        wrap_two_pi(diff + sum),
        2.0 * cos_half.acos(),
        wrap_two_pi(sum - diff),
    )
}

/// Representative of `q` on the w >= 0 hemisphere.
pub fn canonical(q: Quaternion<f64>) -> Quaternion<f64> {
    if q.w < 0.0 {
        -q
    } else {
        q
    }
}

/// Rotation angle of a unit quaternion, in [0, pi].
pub fn rotation_angle(q: &Quaternion<f64>) -> f64 {
    2.0 * q.w.abs().min(1.0).acos()
}

/// Unit-length copy of `q`; the zero quaternion maps to the identity.
pub fn normalize_or_identity(q: &Quaternion<f64>) -> Quaternion<f64> {
    let norm = q.norm();
    if norm < QUATERNION_TOLERANCE {
        Quaternion::identity()
    } else {
        *q / norm
    }
}

fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    // rem_euclid can round up to exactly 2pi for tiny negative inputs
    if wrapped >= 2.0 * PI {
        0.0
    } else {
        wrapped
    }
}
