//! Collision querying. Detection only, never resolution.

use crate::core::rect::Rect;

/// Return the first candidate whose extents overlap `rect` on both
/// axes, or `None` if nothing overlaps.
///
/// The scan runs in the caller-supplied order, so candidate order is a
/// priority (e.g. floor tiles before wall tiles). Overlap is
/// edge-exclusive, see [`Rect::intersects`]. This is a pure query with
/// no resolution side effect; the caller decides how to react.
pub fn collides_with_rects<'a>(rect: &Rect, candidates: &'a [Rect]) -> Option<&'a Rect> {
    candidates.iter().find(|candidate| rect.intersects(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidate_list_yields_none() {
        let probe = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(collides_with_rects(&probe, &[]), None);
    }

    #[test]
    fn returns_the_overlapping_candidate() {
        let probe = Rect::new(0.0, 0.0, 10.0, 10.0);
        let a = Rect::new(100.0, 100.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);

        let candidates = [a, b];
        let hit = collides_with_rects(&probe, &candidates).unwrap();
        assert_eq!(*hit, b);
    }

    #[test]
    fn first_overlap_in_caller_order_wins() {
        let probe = Rect::new(0.0, 0.0, 10.0, 10.0);
        let first = Rect::new(2.0, 2.0, 10.0, 10.0);
        let second = Rect::new(4.0, 4.0, 10.0, 10.0);

        let candidates = [first, second];
        let hit = collides_with_rects(&probe, &candidates).unwrap();
        assert_eq!(*hit, first);
    }

    #[test]
    fn no_overlap_yields_none() {
        let probe = Rect::new(0.0, 0.0, 10.0, 10.0);
        let far = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert_eq!(collides_with_rects(&probe, &[far]), None);
    }

    #[test]
    fn edge_contact_is_not_a_collision() {
        // An actor standing on a floor tile touches it without overlap
        let actor = Rect::new(0.0, 0.0, 16.0, 16.0);
        let floor = Rect::new(0.0, 16.0, 16.0, 16.0);
        assert_eq!(collides_with_rects(&actor, &[floor]), None);
    }
}
