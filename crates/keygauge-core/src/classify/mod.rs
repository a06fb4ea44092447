//! The classifier taxonomy. Predicates live in the per-arity submodules;
//! the enums here give every catalog entry a plain data identifier that the
//! builder can evaluate, so the whole catalog is declared as tables instead
//! of hand-written loops.

pub mod bi;
pub mod quad;
pub mod tri;

use crate::geometry::{Hand, Pos};

pub use self::quad::FlowMix;
pub use self::tri::{Flow, Refine};

/// Single-key classes: one cell, or an aggregate over a column, finger,
/// hand or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonoClass {
    Key(u8, u8),
    Column(u8),
    Finger(u8),
    Hand(Hand),
    Row(u8),
}

impl MonoClass {
    pub fn matches(self, p: Pos) -> bool {
        match self {
            MonoClass::Key(row, col) => p.row == row && p.col == col,
            MonoClass::Column(col) => p.col == col,
            MonoClass::Finger(f) => p.finger() == f,
            MonoClass::Hand(h) => p.hand() == h,
            MonoClass::Row(row) => p.row == row,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiClass {
    SameFinger,
    SameFingerOn(u8),
    BadSameFinger,
    BadSameFingerOn(u8),
    LateralSameFinger,
    LateralSameFingerOn(u8),
    FullRussor,
    HalfRussor,
    IndexStretch,
    PinkyStretch,
}

impl BiClass {
    pub fn matches(self, a: Pos, b: Pos) -> bool {
        match self {
            BiClass::SameFinger => bi::is_same_finger(a, b),
            BiClass::SameFingerOn(f) => bi::is_same_finger(a, b) && a.finger() == f,
            BiClass::BadSameFinger => bi::is_bad_same_finger(a, b),
            BiClass::BadSameFingerOn(f) => bi::is_bad_same_finger(a, b) && a.finger() == f,
            BiClass::LateralSameFinger => bi::is_lateral_same_finger(a, b),
            BiClass::LateralSameFingerOn(f) => {
                bi::is_lateral_same_finger(a, b) && a.finger() == f
            }
            BiClass::FullRussor => bi::is_full_russor(a, b),
            BiClass::HalfRussor => bi::is_half_russor(a, b),
            BiClass::IndexStretch => bi::is_index_stretch(a, b),
            BiClass::PinkyStretch => bi::is_pinky_stretch(a, b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriClass {
    SameFinger,
    Redirect,
    BadRedirect,
    Alt(Refine, Flow),
    OneHand(Refine, Flow),
    Roll(Refine, Flow),
}

impl TriClass {
    pub fn matches(self, a: Pos, b: Pos, c: Pos) -> bool {
        match self {
            TriClass::SameFinger => bi::is_same_finger(a, b) && bi::is_same_finger(b, c),
            TriClass::Redirect => tri::is_redirect(a, b, c),
            TriClass::BadRedirect => tri::is_bad_redirect(a, b, c),
            TriClass::Alt(refine, flow) => tri::alt_matches(refine, flow, a, b, c),
            TriClass::OneHand(refine, flow) => tri::onehand_matches(refine, flow, a, b, c),
            TriClass::Roll(refine, flow) => tri::roll_matches(refine, flow, a, b, c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadClass {
    SameFinger,
    ChainedRedirect,
    BadChainedRedirect,
    ChainedAlt(Refine, FlowMix),
    OneHand(Refine, Flow),
    Roll(Refine, Flow),
    TrueRoll(Refine, Flow),
    ChainedRoll(Refine, FlowMix),
}

impl QuadClass {
    pub fn matches(self, a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
        match self {
            QuadClass::SameFinger => {
                bi::is_same_finger(a, b) && bi::is_same_finger(b, c) && bi::is_same_finger(c, d)
            }
            QuadClass::ChainedRedirect => quad::is_chained_redirect(a, b, c, d),
            QuadClass::BadChainedRedirect => quad::is_bad_chained_redirect(a, b, c, d),
            QuadClass::ChainedAlt(refine, flow) => {
                quad::chained_alt_matches(refine, flow, a, b, c, d)
            }
            QuadClass::OneHand(refine, flow) => {
                quad::onehand_quad_matches(refine, flow, a, b, c, d)
            }
            QuadClass::Roll(refine, flow) => quad::roll_quad_matches(refine, flow, a, b, c, d),
            QuadClass::TrueRoll(refine, flow) => {
                quad::true_roll_matches(refine, flow, a, b, c, d)
            }
            QuadClass::ChainedRoll(refine, flow) => {
                quad::chained_roll_matches(refine, flow, a, b, c, d)
            }
        }
    }
}
