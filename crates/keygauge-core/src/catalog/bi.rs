//! Bigram stat declarations. Per-finger variants are generated from the
//! finger list; only pinkies and indexes get lateral entries.

use crate::classify::BiClass;
use crate::geometry::Finger;
use strum::IntoEnumIterator;

pub(super) fn entries() -> Vec<(String, BiClass)> {
    let mut defs = Vec::new();

    defs.push(("Same Finger Bigram".into(), BiClass::SameFinger));
    for finger in Finger::iter() {
        defs.push((
            format!("{finger} Bigram"),
            BiClass::SameFingerOn(finger.index()),
        ));
    }

    defs.push(("Bad Same Finger Bigram".into(), BiClass::BadSameFinger));
    for finger in Finger::iter() {
        defs.push((
            format!("Bad {finger} Bigram"),
            BiClass::BadSameFingerOn(finger.index()),
        ));
    }

    defs.push(("Lateral Same Finger Bigram".into(), BiClass::LateralSameFinger));
    for finger in Finger::iter().filter(|f| f.has_lateral_stat()) {
        defs.push((
            format!("Lateral {finger} Bigram"),
            BiClass::LateralSameFingerOn(finger.index()),
        ));
    }

    defs.push(("Full Russor Bigram".into(), BiClass::FullRussor));
    defs.push(("Half Russor Bigram".into(), BiClass::HalfRussor));
    defs.push(("Index Stretch Bigram".into(), BiClass::IndexStretch));
    defs.push(("Pinky Stretch Bigram".into(), BiClass::PinkyStretch));

    defs
}
