//! Layouts: a name and a 3x12 matrix of character ids, -1 for empty cells.
//! API clients send 30-character strings covering the inner 3x10 block.

use crate::consts::{API_LAYOUT_LEN, COL, EMPTY, NAME_MAX, ROW};
use crate::error::{KeygaugeError, KgResult};
use crate::language::Language;

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub name: String,
    pub matrix: [[i8; COL]; ROW],
}

impl Layout {
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.chars().take(NAME_MAX).collect(),
            matrix: [[EMPTY; COL]; ROW],
        }
    }

    /// Decodes the wire form: 30 characters, row-major over columns 1..=10.
    /// The outer columns stay empty. Every character must exist in the
    /// language.
    pub fn from_api_string(name: &str, s: &str, lang: &Language) -> KgResult<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != API_LAYOUT_LEN {
            return Err(KeygaugeError::Layout("Invalid layout string.".into()));
        }

        let mut layout = Self::empty(name);
        for (i, &c) in chars.iter().enumerate() {
            let id = lang
                .code_of(c)
                .ok_or_else(|| KeygaugeError::Layout("Invalid layout string.".into()))?;
            let row = i / 10;
            let col = i % 10 + 1;
            layout.matrix[row][col] = id as i8;
        }
        Ok(layout)
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> i8 {
        self.matrix[row][col]
    }
}
