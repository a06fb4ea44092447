//! Trigram stat declarations. The alternation, one-hand and roll families
//! are each crossed with the refinement set and the in/out direction split.

use crate::classify::{Flow, Refine, TriClass};

const REFINES: [(Refine, &str); 4] = [
    (Refine::Any, ""),
    (Refine::SameRow, "Same Row "),
    (Refine::AdjacentFinger, "Adjacent Finger "),
    (Refine::SameRowAdjacentFinger, "Same Row Adjacent Finger "),
];

const FLOWS: [(Flow, &str); 3] = [(Flow::Any, ""), (Flow::In, " In"), (Flow::Out, " Out")];

fn family(
    defs: &mut Vec<(String, TriClass)>,
    base: &str,
    make: impl Fn(Refine, Flow) -> TriClass,
) {
    for (refine, prefix) in REFINES {
        for (flow, suffix) in FLOWS {
            defs.push((format!("{prefix}{base}{suffix}"), make(refine, flow)));
        }
    }
}

pub(super) fn entries() -> Vec<(String, TriClass)> {
    let mut defs = Vec::new();

    defs.push(("Same Finger Trigram".into(), TriClass::SameFinger));
    defs.push(("Redirect".into(), TriClass::Redirect));
    defs.push(("Bad Redirect".into(), TriClass::BadRedirect));

    family(&mut defs, "Alternation", |r, f| TriClass::Alt(r, f));
    family(&mut defs, "One Hand", |r, f| TriClass::OneHand(r, f));
    family(&mut defs, "Roll", |r, f| TriClass::Roll(r, f));

    defs
}
