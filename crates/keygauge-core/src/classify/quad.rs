//! Four-key classifiers. Almost everything here chains two overlapping
//! trigram tests or wraps a central bigram, so the heavy lifting stays in
//! the trigram module.

use crate::classify::bi::is_same_finger;
use crate::classify::tri::{
    alt_matches, is_bad_redirect, is_onehand, is_onehand_in, is_onehand_out, is_redirect,
    is_roll, is_roll_in, is_roll_out, Flow, Refine,
};
use crate::geometry::{
    is_adjacent_finger_bi, is_adjacent_finger_quad, is_adjacent_finger_tri, is_same_hand,
    is_same_pos, is_same_row_mod, Hand, Pos,
};

pub fn is_chained_redirect(a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    is_redirect(a, b, c) && is_redirect(b, c, d)
}

pub fn is_bad_chained_redirect(a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    is_bad_redirect(a, b, c) && is_bad_redirect(b, c, d)
}

/// Direction split for chained classes, which can also mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowMix {
    Any,
    In,
    Out,
    Mix,
}

/// Both overlapping trigrams alternate, each narrowed the same way.
pub fn chained_alt_matches(refine: Refine, flow: FlowMix, a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    let first = |f: Flow| alt_matches(refine, f, a, b, c);
    let second = |f: Flow| alt_matches(refine, f, b, c, d);
    match flow {
        FlowMix::Any => first(Flow::Any) && second(Flow::Any),
        FlowMix::In => first(Flow::In) && second(Flow::In),
        FlowMix::Out => first(Flow::Out) && second(Flow::Out),
        FlowMix::Mix => {
            (first(Flow::In) && second(Flow::Out)) || (first(Flow::Out) && second(Flow::In))
        }
    }
}

/// Monotone finger progression across all four keys of one hand.
pub fn is_onehand_quad(a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    is_same_hand(&[a, b, c, d])
        && ((a.finger() < b.finger() && b.finger() < c.finger() && c.finger() < d.finger())
            || (a.finger() > b.finger() && b.finger() > c.finger() && c.finger() > d.finger()))
}

pub fn is_onehand_quad_in(a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    is_onehand_quad(a, b, c, d)
        && ((a.hand() == Hand::Left
            && a.finger() < b.finger()
            && b.finger() < c.finger()
            && c.finger() < d.finger())
            || (a.hand() == Hand::Right
                && a.finger() > b.finger()
                && b.finger() > c.finger()
                && c.finger() > d.finger()))
}

pub fn is_onehand_quad_out(a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    is_onehand_quad(a, b, c, d) && !is_onehand_quad_in(a, b, c, d)
}

pub fn onehand_quad_matches(refine: Refine, flow: Flow, a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    let dir = match flow {
        Flow::Any => is_onehand_quad(a, b, c, d),
        Flow::In => is_onehand_quad_in(a, b, c, d),
        Flow::Out => is_onehand_quad_out(a, b, c, d),
    };
    match refine {
        Refine::Any => dir,
        Refine::SameRow => dir && is_same_row_mod(&[a, b, c, d]),
        Refine::AdjacentFinger => dir && is_adjacent_finger_quad(a, b, c, d),
        Refine::SameRowAdjacentFinger => {
            dir && is_same_row_mod(&[a, b, c, d]) && is_adjacent_finger_quad(a, b, c, d)
        }
    }
}

/// A one-handed trigram run entered from or exited to the other hand.
pub fn is_roll_quad(a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    (is_onehand(a, b, c) && !is_same_hand(&[c, d]))
        || (!is_same_hand(&[a, b]) && is_onehand(b, c, d))
}

pub fn is_roll_quad_in(a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    (is_onehand_in(a, b, c) && !is_same_hand(&[c, d]))
        || (!is_same_hand(&[a, b]) && is_onehand_in(b, c, d))
}

pub fn is_roll_quad_out(a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    (is_onehand_out(a, b, c) && !is_same_hand(&[c, d]))
        || (!is_same_hand(&[a, b]) && is_onehand_out(b, c, d))
}

pub fn roll_quad_matches(refine: Refine, flow: Flow, a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    // The refinement applies to whichever side holds the one-handed run.
    let run = |test: &dyn Fn(Pos, Pos, Pos) -> bool| -> bool {
        is_roll_quad(a, b, c, d) && (test(a, b, c) || test(b, c, d))
    };
    let refined = match refine {
        Refine::Any => is_roll_quad(a, b, c, d),
        Refine::SameRow => run(&|x, y, z| is_onehand(x, y, z) && is_same_row_mod(&[x, y, z])),
        Refine::AdjacentFinger => {
            run(&|x, y, z| is_onehand(x, y, z) && is_adjacent_finger_tri(x, y, z))
        }
        Refine::SameRowAdjacentFinger => run(&|x, y, z| {
            is_onehand(x, y, z) && is_same_row_mod(&[x, y, z]) && is_adjacent_finger_tri(x, y, z)
        }),
    };
    match flow {
        Flow::Any => refined,
        Flow::In => refined && is_roll_quad_in(a, b, c, d),
        Flow::Out => refined && is_roll_quad_out(a, b, c, d),
    }
}

/// Hand pattern LRRL or RLLR with the central bigram forming a roll.
pub fn is_true_roll(a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    !is_same_hand(&[a, b])
        && is_same_hand(&[b, c])
        && !is_same_hand(&[c, d])
        && !is_same_finger(b, c)
        && !is_same_pos(b, c)
}

pub fn true_roll_matches(refine: Refine, flow: Flow, a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    let dir = match flow {
        Flow::Any => is_true_roll(a, b, c, d),
        Flow::In => is_true_roll(a, b, c, d) && is_roll_in(a, b, c),
        Flow::Out => is_true_roll(a, b, c, d) && is_roll_out(a, b, c),
    };
    match refine {
        Refine::Any => dir,
        Refine::SameRow => dir && is_same_row_mod(&[b, c]),
        Refine::AdjacentFinger => dir && is_adjacent_finger_bi(b, c),
        Refine::SameRowAdjacentFinger => {
            dir && is_same_row_mod(&[b, c]) && is_adjacent_finger_bi(b, c)
        }
    }
}

/// Two disjoint rolls pivoting on a hand switch in the middle.
pub fn is_chained_roll(a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    is_roll(a, b, c) && is_roll(b, c, d) && !is_same_hand(&[b, c])
}

pub fn chained_roll_matches(refine: Refine, flow: FlowMix, a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    let base = match flow {
        FlowMix::Any => is_chained_roll(a, b, c, d),
        FlowMix::In => is_chained_roll(a, b, c, d) && is_roll_in(a, b, c) && is_roll_in(b, c, d),
        FlowMix::Out => is_chained_roll(a, b, c, d) && is_roll_out(a, b, c) && is_roll_out(b, c, d),
        FlowMix::Mix => {
            is_chained_roll(a, b, c, d)
                && ((is_roll_in(a, b, c) && is_roll_out(b, c, d))
                    || (is_roll_out(a, b, c) && is_roll_in(b, c, d)))
        }
    };
    match refine {
        Refine::Any => base,
        Refine::SameRow => base && is_same_row_mod(&[a, b]) && is_same_row_mod(&[c, d]),
        Refine::AdjacentFinger => {
            base && is_adjacent_finger_bi(a, b) && is_adjacent_finger_bi(c, d)
        }
        Refine::SameRowAdjacentFinger => {
            base && is_same_row_mod(&[a, b])
                && is_same_row_mod(&[c, d])
                && is_adjacent_finger_bi(a, b)
                && is_adjacent_finger_bi(c, d)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onehand_quad_needs_four_distinct_steps() {
        // left pinky -> ring -> middle -> index
        let seq = [
            Pos::new(1, 1),
            Pos::new(1, 2),
            Pos::new(1, 3),
            Pos::new(1, 4),
        ];
        assert!(is_onehand_quad(seq[0], seq[1], seq[2], seq[3]));
        assert!(is_onehand_quad_in(seq[0], seq[1], seq[2], seq[3]));
        assert!(is_onehand_quad_out(seq[3], seq[2], seq[1], seq[0]));
    }

    #[test]
    fn true_roll_hand_pattern() {
        let l = Pos::new(1, 2);
        let r1 = Pos::new(1, 8);
        let r2 = Pos::new(1, 9);
        let l2 = Pos::new(1, 3);
        assert!(is_true_roll(l, r1, r2, l2));
        // central pair on one finger disqualifies
        assert!(!is_true_roll(l, Pos::new(0, 8), Pos::new(1, 8), l2));
    }

    #[test]
    fn chained_roll_pivots_on_a_hand_switch() {
        // left pair rolls in, right pair rolls in
        let a = Pos::new(1, 2);
        let b = Pos::new(1, 3);
        let c = Pos::new(1, 9);
        let d = Pos::new(1, 8);
        assert!(is_chained_roll(a, b, c, d));
        assert!(chained_roll_matches(Refine::Any, FlowMix::In, a, b, c, d));
        assert!(!chained_roll_matches(Refine::Any, FlowMix::Mix, a, b, c, d));
        // flip the second pair outward for a mix
        assert!(chained_roll_matches(Refine::Any, FlowMix::Mix, a, b, Pos::new(1, 8), Pos::new(1, 9)));
    }

    #[test]
    fn roll_quad_wraps_a_onehand_run() {
        // run on the left, exit to the right
        let a = Pos::new(1, 1);
        let b = Pos::new(1, 2);
        let c = Pos::new(1, 3);
        let d = Pos::new(1, 8);
        assert!(is_roll_quad(a, b, c, d));
        assert!(is_roll_quad_in(a, b, c, d));
        assert!(!is_roll_quad(a, b, c, Pos::new(1, 4)));
    }

    #[test]
    fn chained_redirect_needs_both_halves() {
        let a = Pos::new(1, 1);
        let b = Pos::new(1, 3);
        let c = Pos::new(1, 2);
        let d = Pos::new(1, 4);
        assert!(is_redirect(a, b, c) && is_redirect(b, c, d));
        assert!(is_chained_redirect(a, b, c, d));
        assert!(!is_bad_chained_redirect(a, b, c, d));
    }
}
