//! Skipgram stat declarations: the same-finger bigram set evaluated at
//! character distances 1..=9. One entry covers all nine distances.

use crate::classify::BiClass;
use crate::geometry::Finger;
use strum::IntoEnumIterator;

pub(super) fn entries() -> Vec<(String, BiClass)> {
    let mut defs = Vec::new();

    defs.push(("Same Finger Skipgram".into(), BiClass::SameFinger));
    for finger in Finger::iter() {
        defs.push((
            format!("{finger} Skipgram"),
            BiClass::SameFingerOn(finger.index()),
        ));
    }

    defs.push(("Bad Same Finger Skipgram".into(), BiClass::BadSameFinger));
    for finger in Finger::iter() {
        defs.push((
            format!("Bad {finger} Skipgram"),
            BiClass::BadSameFingerOn(finger.index()),
        ));
    }

    defs.push((
        "Lateral Same Finger Skipgram".into(),
        BiClass::LateralSameFinger,
    ));
    for finger in Finger::iter().filter(|f| f.has_lateral_stat()) {
        defs.push((
            format!("Lateral {finger} Skipgram"),
            BiClass::LateralSameFingerOn(finger.index()),
        ));
    }

    defs
}
