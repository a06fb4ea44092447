//! Physical facts about the 3x12 grid: hands, fingers, stretch columns and
//! the row/column relations every classifier is built from. Everything here
//! is a pure function of row and column.

use crate::consts::COL;
use strum_macros::{Display, EnumIter, FromRepr};

/// One key position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Columns 0..=5 belong to the left hand, 6..=11 to the right.
    pub fn hand(self) -> Hand {
        if (self.col as usize) < COL / 2 {
            Hand::Left
        } else {
            Hand::Right
        }
    }

    /// Finger index 0..=7, pinky to pinky. Pinkies and indexes each cover
    /// two columns, ring and middle fingers one.
    pub fn finger(self) -> u8 {
        match self.col {
            0 | 1 => 0,
            2 => 1,
            3 => 2,
            4 | 5 => 3,
            6 | 7 => 4,
            8 => 5,
            9 => 6,
            _ => 7,
        }
    }

    /// Pinky and index lateral reaches.
    pub fn is_stretch(self) -> bool {
        matches!(self.col, 0 | 5 | 6 | 11)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

/// Named fingers, used wherever a display name or a stable iteration order
/// over all eight fingers is needed (per-finger stats, RuSpeed metas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Finger {
    #[strum(serialize = "Left Pinky")]
    LeftPinky = 0,
    #[strum(serialize = "Left Ring")]
    LeftRing = 1,
    #[strum(serialize = "Left Middle")]
    LeftMiddle = 2,
    #[strum(serialize = "Left Index")]
    LeftIndex = 3,
    #[strum(serialize = "Right Index")]
    RightIndex = 4,
    #[strum(serialize = "Right Middle")]
    RightMiddle = 5,
    #[strum(serialize = "Right Ring")]
    RightRing = 6,
    #[strum(serialize = "Right Pinky")]
    RightPinky = 7,
}

impl Finger {
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Only pinkies and indexes span two columns, so only they have lateral
    /// same-finger statistics.
    pub fn has_lateral_stat(self) -> bool {
        matches!(
            self,
            Finger::LeftPinky | Finger::LeftIndex | Finger::RightIndex | Finger::RightPinky
        )
    }
}

pub fn row_diff(a: Pos, b: Pos) -> u8 {
    a.row.abs_diff(b.row)
}

pub fn is_same_pos(a: Pos, b: Pos) -> bool {
    a.row == b.row && a.col == b.col
}

pub fn is_same_hand(keys: &[Pos]) -> bool {
    keys.windows(2).all(|w| w[0].hand() == w[1].hand())
}

/// Literal same row, stretch columns included.
pub fn is_same_row(keys: &[Pos]) -> bool {
    keys.windows(2).all(|w| w[0].row == w[1].row)
}

pub fn is_same_col(keys: &[Pos]) -> bool {
    keys.windows(2).all(|w| w[0].col == w[1].col)
}

/// Same row for statistics: stretch columns disqualify the sequence.
pub fn is_same_row_mod(keys: &[Pos]) -> bool {
    is_same_row(keys) && keys.iter().all(|k| !k.is_stretch())
}

/// Neighbouring fingers, stretch columns excluded.
pub fn is_adjacent_finger_bi(a: Pos, b: Pos) -> bool {
    !a.is_stretch() && !b.is_stretch() && a.finger().abs_diff(b.finger()) == 1
}

pub fn is_adjacent_finger_tri(a: Pos, b: Pos, c: Pos) -> bool {
    !a.is_stretch()
        && !b.is_stretch()
        && !c.is_stretch()
        && a.finger().abs_diff(b.finger()) == 1
        && b.finger().abs_diff(c.finger()) == 1
}

/// Like the trigram version, but a stepping pattern that returns to its
/// starting finger (e.g. middle-index-middle-index) does not count.
pub fn is_adjacent_finger_quad(a: Pos, b: Pos, c: Pos, d: Pos) -> bool {
    !a.is_stretch()
        && !b.is_stretch()
        && !c.is_stretch()
        && !d.is_stretch()
        && a.finger().abs_diff(b.finger()) == 1
        && b.finger().abs_diff(c.finger()) == 1
        && c.finger().abs_diff(d.finger()) == 1
        && a.finger() != c.finger()
}
