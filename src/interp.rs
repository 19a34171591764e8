//! Edge interpolation shared by both extraction paths.

/// Parametric fraction along an edge at which the surface crosses it.
///
/// `va` and `vb` are the scalar samples at the edge's two corners in
/// the edge's defined order. The reference formula
/// `(threshold - va) / (vb - va)` divides by zero when both samples are
/// equal; here equal samples fall back to the midpoint and the result
/// is clamped to [0, 1], so emitted vertices are always finite.
#[inline]
pub fn surface_fraction(va: f32, vb: f32, threshold: f32) -> f32 {
    let denom = vb - va;
    if libm::fabsf(denom) < 1e-10 {
        return 0.5;
    }
    let t = (threshold - va) / denom;
    t.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_fraction() {
        // va=0, vb=10, threshold=5 -> exactly halfway.
        assert_eq!(surface_fraction(0.0, 10.0, 5.0), 0.5);
    }

    #[test]
    fn fraction_at_endpoints() {
        assert_eq!(surface_fraction(5.0, 10.0, 5.0), 0.0);
        assert_eq!(surface_fraction(0.0, 5.0, 5.0), 1.0);
    }

    #[test]
    fn equal_samples_fall_back_to_midpoint() {
        let t = surface_fraction(3.0, 3.0, 5.0);
        assert_eq!(t, 0.5);
        assert!(t.is_finite());
    }

    #[test]
    fn fraction_is_clamped() {
        // Threshold outside the sample range can only happen for
        // corners the code bits disagree about after rounding; the
        // fraction must still stay on the edge.
        let t = surface_fraction(1.0, 2.0, 5.0);
        assert!((0.0..=1.0).contains(&t));
    }

    #[test]
    fn descending_edge_order() {
        // va above, vb below: fraction measured from va.
        let t = surface_fraction(10.0, 0.0, 5.0);
        assert_eq!(t, 0.5);
        let t = surface_fraction(10.0, 0.0, 2.5);
        assert_eq!(t, 0.75);
    }
}
