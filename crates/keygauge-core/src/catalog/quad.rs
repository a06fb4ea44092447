//! Quadgram stat declarations: the chained and wrapped versions of the
//! trigram families, plus the true-roll patterns that only exist at four
//! keys. Chained families add a Mix direction for runs that change
//! direction halfway.

use crate::classify::{Flow, FlowMix, QuadClass, Refine};

const REFINES: [(Refine, &str); 4] = [
    (Refine::Any, ""),
    (Refine::SameRow, "Same Row "),
    (Refine::AdjacentFinger, "Adjacent Finger "),
    (Refine::SameRowAdjacentFinger, "Same Row Adjacent Finger "),
];

const FLOWS: [(Flow, &str); 3] = [(Flow::Any, ""), (Flow::In, " In"), (Flow::Out, " Out")];

const FLOW_MIXES: [(FlowMix, &str); 4] = [
    (FlowMix::Any, ""),
    (FlowMix::In, " In"),
    (FlowMix::Out, " Out"),
    (FlowMix::Mix, " Mix"),
];

/// Families whose refinement reads as a prefix ("Same Row True Roll").
fn prefixed_family(
    defs: &mut Vec<(String, QuadClass)>,
    base: &str,
    make: impl Fn(Refine, Flow) -> QuadClass,
) {
    for (refine, prefix) in REFINES {
        for (flow, suffix) in FLOWS {
            defs.push((format!("{prefix}{base}{suffix}"), make(refine, flow)));
        }
    }
}

fn prefixed_mix_family(
    defs: &mut Vec<(String, QuadClass)>,
    base: &str,
    make: impl Fn(Refine, FlowMix) -> QuadClass,
) {
    for (refine, prefix) in REFINES {
        for (flow, suffix) in FLOW_MIXES {
            defs.push((format!("{prefix}{base}{suffix}"), make(refine, flow)));
        }
    }
}

/// Families carrying the "Quad" marker up front ("Quad Same Row One Hand").
fn quad_family(
    defs: &mut Vec<(String, QuadClass)>,
    base: &str,
    make: impl Fn(Refine, Flow) -> QuadClass,
) {
    for (refine, prefix) in REFINES {
        for (flow, suffix) in FLOWS {
            defs.push((format!("Quad {prefix}{base}{suffix}"), make(refine, flow)));
        }
    }
}

pub(super) fn entries() -> Vec<(String, QuadClass)> {
    let mut defs = Vec::new();

    defs.push(("Same Finger Quadgram".into(), QuadClass::SameFinger));
    defs.push(("Chained Redirect".into(), QuadClass::ChainedRedirect));
    defs.push(("Bad Chained Redirect".into(), QuadClass::BadChainedRedirect));

    prefixed_mix_family(&mut defs, "Chained Alternation", |r, f| {
        QuadClass::ChainedAlt(r, f)
    });
    quad_family(&mut defs, "One Hand", |r, f| QuadClass::OneHand(r, f));
    quad_family(&mut defs, "Roll", |r, f| QuadClass::Roll(r, f));
    prefixed_family(&mut defs, "True Roll", |r, f| QuadClass::TrueRoll(r, f));
    prefixed_mix_family(&mut defs, "Chained Roll", |r, f| QuadClass::ChainedRoll(r, f));

    defs
}
