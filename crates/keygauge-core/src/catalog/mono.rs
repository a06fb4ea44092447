//! Monogram stat declarations: one heatmap cell per key, then column,
//! hand and row usage aggregates.

use crate::classify::MonoClass;
use crate::consts::{COL, ROW};
use crate::geometry::Hand;

pub(super) fn entries() -> Vec<(String, MonoClass)> {
    let mut defs = Vec::new();

    for row in 0..ROW {
        for col in 0..COL {
            defs.push((
                format!("Heatmap {row} {col:02}"),
                MonoClass::Key(row as u8, col as u8),
            ));
        }
    }

    // column usage, outer to outer; the four two-column fingers are tracked
    // per finger, the stretch columns on their own
    defs.push(("Left Outer Usage".into(), MonoClass::Column(0)));
    defs.push(("Left Pinky Usage".into(), MonoClass::Finger(0)));
    defs.push(("Left Ring Usage".into(), MonoClass::Finger(1)));
    defs.push(("Left Middle Usage".into(), MonoClass::Finger(2)));
    defs.push(("Left Index Usage".into(), MonoClass::Finger(3)));
    defs.push(("Left Inner Usage".into(), MonoClass::Column(5)));
    defs.push(("Right Inner Usage".into(), MonoClass::Column(6)));
    defs.push(("Right Index Usage".into(), MonoClass::Finger(4)));
    defs.push(("Right Middle Usage".into(), MonoClass::Finger(5)));
    defs.push(("Right Ring Usage".into(), MonoClass::Finger(6)));
    defs.push(("Right Pinky Usage".into(), MonoClass::Finger(7)));
    defs.push(("Right Outer Usage".into(), MonoClass::Column(11)));

    defs.push(("Left Hand Usage".into(), MonoClass::Hand(Hand::Left)));
    defs.push(("Right Hand Usage".into(), MonoClass::Hand(Hand::Right)));

    defs.push(("Top Row Usage".into(), MonoClass::Row(0)));
    defs.push(("Home Row Usage".into(), MonoClass::Row(1)));
    defs.push(("Bottom Row Usage".into(), MonoClass::Row(2)));

    defs
}
