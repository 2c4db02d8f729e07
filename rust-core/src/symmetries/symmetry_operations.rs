use nalgebra::Quaternion;

use crate::orientation::quaternion::canonical;
use crate::symmetries::crystal_symmetry::CrystalSymmetry;

/// Turn an (x, y, z, w) table row into a quaternion.
pub fn operator_quaternion(op: &[f64; 4]) -> Quaternion<f64> {
    Quaternion::new(op[3], op[0], op[1], op[2])
}

/// Orientation math shared by every crystal class.
///
/// An implementor provides its operator table and its fundamental-zone predicate; the
/// reduction and alignment rules are the same for all classes. Symmetry operators are
/// composed on the right (`q * g`), i.e. in the crystal frame.
pub trait OrientationOps: Send + Sync {
    /// The crystal class this implementation belongs to.
    fn symmetry(&self) -> CrystalSymmetry;

    /// The rotation group as a constant table, identity first.
    fn operators(&self) -> &'static [[f64; 4]];

    /// Whether `q` lies in the canonical reduced region of this class.
    /// Must not depend on the sign of `q`.
    fn in_fundamental_zone(&self, q: &Quaternion<f64>) -> bool;

    fn num_operators(&self) -> usize {
        self.operators().len()
    }

    /// Canonical representative of the orientation `q`.
    ///
    /// All `q * g` are formed and put on the w >= 0 hemisphere. Among the candidates
    /// inside the fundamental zone the one with the smallest rotation angle wins, the
    /// lower operator index on exact ties. If rounding pushes every candidate off the
    /// zone boundary, the candidate with the smallest rotation angle is returned.
    fn reduce_to_fundamental_zone(&self, q: &Quaternion<f64>) -> Quaternion<f64> {
        let mut in_zone: Option<Quaternion<f64>> = None;
        let mut closest: Option<Quaternion<f64>> = None;

        for op in self.operators() {
            let candidate = canonical(*q * operator_quaternion(op));

            if closest.map_or(true, |best| candidate.w > best.w) {
                closest = Some(candidate);
            }
            if self.in_fundamental_zone(&candidate)
                && in_zone.map_or(true, |best| candidate.w > best.w)
            {
                in_zone = Some(candidate);
            }
        }

        in_zone.or(closest).unwrap_or_else(|| canonical(*q))
    }

    /// Equivalent of `candidate` closest to `reference`.
    ///
    /// Scans every `candidate * g` and its antipode and keeps the one with the largest
    /// dot product with `reference`. `reference` need not be unit length; a zero
    /// reference returns `candidate` unchanged.
    fn nearest_equivalent(
        &self,
        reference: &Quaternion<f64>,
        candidate: &Quaternion<f64>,
    ) -> Quaternion<f64> {
        let mut best = *candidate;
        let mut best_dot = f64::NEG_INFINITY;

        for op in self.operators() {
            let equivalent = *candidate * operator_quaternion(op);
            let dot = reference.dot(&equivalent);
            if dot.abs() > best_dot {
                best_dot = dot.abs();
                best = if dot < 0.0 { -equivalent } else { equivalent };
            }
        }

        best
    }

    /// Smallest rotation angle (radians) taking orientation `a` onto orientation `b`.
    fn misorientation_angle(&self, a: &Quaternion<f64>, b: &Quaternion<f64>) -> f64 {
        let norms = a.norm() * b.norm();
        if norms == 0.0 {
            return 0.0;
        }
        let aligned = self.nearest_equivalent(a, b);
        let cos_half = (a.dot(&aligned) / norms).abs().min(1.0);
        2.0 * cos_half.acos()
    }
}
