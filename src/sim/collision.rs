//! 1-D interval overlap for footprint tests
//!
//! Everything in this sim is an axis-aligned span: trooper footprints, the
//! base, and the critical zone are all `(left, width)` intervals on the x
//! axis, and collision resolution reduces to interval overlap.

/// Check whether two horizontal spans overlap
///
/// Spans that merely touch at an edge do not overlap; troopers standing
/// flush against the base are not inside it.
#[inline]
pub fn overlap_1d(a_x: f32, a_w: f32, b_x: f32, b_w: f32) -> bool {
    a_x < b_x + b_w && b_x < a_x + a_w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_partial() {
        assert!(overlap_1d(0.0, 10.0, 5.0, 10.0));
        assert!(overlap_1d(5.0, 10.0, 0.0, 10.0));
    }

    #[test]
    fn test_overlap_containment() {
        // One span fully inside the other, either way around
        assert!(overlap_1d(0.0, 100.0, 40.0, 10.0));
        assert!(overlap_1d(40.0, 10.0, 0.0, 100.0));
    }

    #[test]
    fn test_disjoint() {
        assert!(!overlap_1d(0.0, 10.0, 20.0, 10.0));
        assert!(!overlap_1d(20.0, 10.0, 0.0, 10.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        assert!(!overlap_1d(0.0, 10.0, 10.0, 10.0));
        assert!(!overlap_1d(10.0, 10.0, 0.0, 10.0));
    }
}
