//! Three-key classifiers: redirects, alternation, one-handed runs and rolls.
//!
//! Direction semantics: "in" means the moving hand travels toward its middle
//! column, so ascending finger indices on the left hand and descending on the
//! right. "out" is always defined as the remainder of the base class, which
//! keeps every in/out pair an exact partition.

use crate::classify::bi::is_same_finger;
use crate::geometry::{
    is_adjacent_finger_bi, is_adjacent_finger_tri, is_same_hand, is_same_pos, is_same_row,
    is_same_row_mod, Hand, Pos,
};

/// A one-hand sequence that changes direction in finger order.
pub fn is_redirect(a: Pos, b: Pos, c: Pos) -> bool {
    is_same_hand(&[a, b, c])
        && !is_same_finger(a, c)
        && !is_same_pos(a, c)
        && ((a.finger() < b.finger() && b.finger() > c.finger())
            || (a.finger() > b.finger() && b.finger() < c.finger()))
}

/// A redirect with no index finger involved anywhere.
pub fn is_bad_redirect(a: Pos, b: Pos, c: Pos) -> bool {
    is_redirect(a, b, c)
        && a.finger() != 3
        && a.finger() != 4
        && b.finger() != 3
        && b.finger() != 4
        && c.finger() != 3
        && c.finger() != 4
}

/// Strict hand alternation with a non-same-finger end-to-end pair.
pub fn is_alt(a: Pos, b: Pos, c: Pos) -> bool {
    !is_same_hand(&[a, b])
        && !is_same_hand(&[b, c])
        && !is_same_finger(a, c)
        && !is_same_pos(a, c)
}

/// The outer pair of an alternation sits on one hand; its direction is the
/// roll direction of the reordered triple (first, third, second).
pub fn is_alt_in(a: Pos, b: Pos, c: Pos) -> bool {
    is_alt(a, b, c) && is_roll_in(a, c, b)
}

pub fn is_alt_out(a: Pos, b: Pos, c: Pos) -> bool {
    is_alt(a, b, c) && !is_alt_in(a, b, c)
}

/// Monotone finger progression on a single hand.
pub fn is_onehand(a: Pos, b: Pos, c: Pos) -> bool {
    is_same_hand(&[a, b, c])
        && ((a.finger() < b.finger() && b.finger() < c.finger())
            || (a.finger() > b.finger() && b.finger() > c.finger()))
}

pub fn is_onehand_in(a: Pos, b: Pos, c: Pos) -> bool {
    is_onehand(a, b, c)
        && ((a.hand() == Hand::Left && a.finger() < b.finger() && b.finger() < c.finger())
            || (a.hand() == Hand::Right && a.finger() > b.finger() && b.finger() > c.finger()))
}

pub fn is_onehand_out(a: Pos, b: Pos, c: Pos) -> bool {
    is_onehand(a, b, c) && !is_onehand_in(a, b, c)
}

/// Exactly one hand switch, with the same-hand pair on different fingers.
pub fn is_roll(a: Pos, b: Pos, c: Pos) -> bool {
    (is_same_hand(&[a, b])
        && !is_same_hand(&[b, c])
        && !is_same_finger(a, b)
        && !is_same_pos(a, b))
        || (!is_same_hand(&[a, b])
            && is_same_hand(&[b, c])
            && !is_same_finger(b, c)
            && !is_same_pos(b, c))
}

pub fn is_roll_in(a: Pos, b: Pos, c: Pos) -> bool {
    is_roll(a, b, c)
        && ((is_same_hand(&[a, b]) && b.hand() == Hand::Left && a.finger() < b.finger())
            || (is_same_hand(&[b, c]) && b.hand() == Hand::Left && b.finger() < c.finger())
            || (is_same_hand(&[a, b]) && b.hand() == Hand::Right && a.finger() > b.finger())
            || (is_same_hand(&[b, c]) && b.hand() == Hand::Right && b.finger() > c.finger()))
}

pub fn is_roll_out(a: Pos, b: Pos, c: Pos) -> bool {
    is_roll(a, b, c) && !is_roll_in(a, b, c)
}

/// The rolling pair sits on one row (stretch columns excluded).
pub fn is_same_row_roll(a: Pos, b: Pos, c: Pos) -> bool {
    is_roll(a, b, c)
        && ((is_same_hand(&[a, b]) && is_same_row_mod(&[a, b]))
            || (is_same_hand(&[b, c]) && is_same_row_mod(&[b, c])))
}

/// The rolling pair is on adjacent fingers.
pub fn is_adjacent_finger_roll(a: Pos, b: Pos, c: Pos) -> bool {
    is_roll(a, b, c)
        && ((is_same_hand(&[a, b]) && is_adjacent_finger_bi(a, b))
            || (is_same_hand(&[b, c]) && is_adjacent_finger_bi(b, c)))
}

/// How a trigram class is narrowed beyond its base predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refine {
    Any,
    SameRow,
    AdjacentFinger,
    SameRowAdjacentFinger,
}

/// Direction split. `Out` is the complement of `In` within the base class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Any,
    In,
    Out,
}

pub fn alt_matches(refine: Refine, flow: Flow, a: Pos, b: Pos, c: Pos) -> bool {
    let base = match refine {
        Refine::Any => is_alt(a, b, c),
        Refine::SameRow => is_alt(a, b, c) && is_same_row(&[a, c]),
        Refine::AdjacentFinger => is_alt(a, b, c) && is_adjacent_finger_bi(a, c),
        Refine::SameRowAdjacentFinger => {
            is_alt(a, b, c) && is_same_row(&[a, c]) && is_adjacent_finger_bi(a, c)
        }
    };
    match flow {
        Flow::Any => base,
        Flow::In => base && is_roll_in(a, c, b),
        Flow::Out => base && !is_roll_in(a, c, b),
    }
}

pub fn onehand_matches(refine: Refine, flow: Flow, a: Pos, b: Pos, c: Pos) -> bool {
    let dir = match flow {
        Flow::Any => is_onehand(a, b, c),
        Flow::In => is_onehand_in(a, b, c),
        Flow::Out => is_onehand_out(a, b, c),
    };
    match refine {
        Refine::Any => dir,
        Refine::SameRow => dir && is_same_row_mod(&[a, b, c]),
        Refine::AdjacentFinger => dir && is_adjacent_finger_tri(a, b, c),
        Refine::SameRowAdjacentFinger => {
            dir && is_same_row_mod(&[a, b, c]) && is_adjacent_finger_tri(a, b, c)
        }
    }
}

pub fn roll_matches(refine: Refine, flow: Flow, a: Pos, b: Pos, c: Pos) -> bool {
    let dir = match flow {
        Flow::Any => is_roll(a, b, c),
        Flow::In => is_roll_in(a, b, c),
        Flow::Out => is_roll_out(a, b, c),
    };
    match refine {
        Refine::Any => dir,
        Refine::SameRow => dir && is_same_row_roll(a, b, c),
        Refine::AdjacentFinger => dir && is_adjacent_finger_roll(a, b, c),
        Refine::SameRowAdjacentFinger => {
            dir && is_same_row_roll(a, b, c) && is_adjacent_finger_roll(a, b, c)
        }
    }
}
