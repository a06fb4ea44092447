//! Two-key classifiers.

use crate::geometry::{is_same_hand, is_same_pos, row_diff, Pos};

/// Same finger, repeats excluded.
pub fn is_same_finger(a: Pos, b: Pos) -> bool {
    a.finger() == b.finger() && !is_same_pos(a, b)
}

/// Same finger across the full 2u vertical span.
pub fn is_bad_same_finger(a: Pos, b: Pos) -> bool {
    is_same_finger(a, b) && row_diff(a, b) == 2
}

/// Same finger with a horizontal component, so pinkies and indexes only.
pub fn is_lateral_same_finger(a: Pos, b: Pos) -> bool {
    is_same_finger(a, b) && a.col != b.col
}

/// Two different fingers on one hand, excluding the index-pinky combos.
pub fn is_russor_fingers(a: Pos, b: Pos) -> bool {
    !is_same_finger(a, b)
        && !is_same_pos(a, b)
        && is_same_hand(&[a, b])
        && !(a.finger() == 0 && b.finger() == 3)
        && !(a.finger() == 3 && b.finger() == 0)
        && !(a.finger() == 4 && b.finger() == 7)
        && !(a.finger() == 7 && b.finger() == 4)
}

/// Russor fingers with a 2u row gap.
pub fn is_full_russor(a: Pos, b: Pos) -> bool {
    row_diff(a, b) == 2 && is_russor_fingers(a, b)
}

/// Russor fingers with a 1u row gap.
pub fn is_half_russor(a: Pos, b: Pos) -> bool {
    row_diff(a, b) == 1 && is_russor_fingers(a, b)
}

/// A middle finger paired with its hand's inner stretch column.
pub fn is_index_stretch(a: Pos, b: Pos) -> bool {
    (a.finger() == 2 && b.col == 5)
        || (b.finger() == 2 && a.col == 5)
        || (a.finger() == 5 && b.col == 6)
        || (b.finger() == 5 && a.col == 6)
}

/// A ring finger paired with its hand's outer stretch column.
pub fn is_pinky_stretch(a: Pos, b: Pos) -> bool {
    (a.finger() == 1 && b.col == 0)
        || (b.finger() == 1 && a.col == 0)
        || (a.finger() == 6 && b.col == 11)
        || (b.finger() == 6 && a.col == 11)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_are_not_same_finger() {
        let p = Pos::new(1, 2);
        assert!(!is_same_finger(p, p));
        assert!(is_same_finger(Pos::new(0, 2), Pos::new(1, 2)));
    }

    #[test]
    fn bad_same_finger_needs_the_full_span() {
        let top = Pos::new(0, 2);
        let home = Pos::new(1, 2);
        let bottom = Pos::new(2, 2);
        assert!(is_bad_same_finger(top, bottom));
        assert!(!is_bad_same_finger(top, home));
    }

    #[test]
    fn lateral_same_finger_needs_a_column_change() {
        assert!(is_lateral_same_finger(Pos::new(1, 4), Pos::new(1, 5)));
        assert!(!is_lateral_same_finger(Pos::new(0, 4), Pos::new(1, 4)));
    }

    #[test]
    fn russor_excludes_index_pinky_combos() {
        // pinky + index on the left hand
        assert!(!is_russor_fingers(Pos::new(1, 1), Pos::new(1, 4)));
        // pinky + ring is fine
        assert!(is_russor_fingers(Pos::new(0, 1), Pos::new(2, 2)));
        // and crossing hands never qualifies
        assert!(!is_russor_fingers(Pos::new(0, 2), Pos::new(2, 9)));
    }

    #[test]
    fn full_and_half_russor_split_on_row_gap() {
        let top = Pos::new(0, 2);
        let home = Pos::new(1, 3);
        let bottom = Pos::new(2, 3);
        assert!(is_half_russor(top, home));
        assert!(is_full_russor(top, bottom));
        assert!(!is_full_russor(top, home));
    }

    #[test]
    fn stretch_pairs() {
        assert!(is_index_stretch(Pos::new(1, 3), Pos::new(1, 5)));
        assert!(is_index_stretch(Pos::new(1, 6), Pos::new(1, 8)));
        assert!(is_pinky_stretch(Pos::new(1, 2), Pos::new(1, 0)));
        assert!(is_pinky_stretch(Pos::new(1, 11), Pos::new(1, 9)));
        assert!(!is_pinky_stretch(Pos::new(1, 1), Pos::new(1, 2)));
    }
}
