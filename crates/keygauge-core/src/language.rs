//! Language definitions. A `.lang` file is a single line of up to 100 wide
//! characters: two leading spaces, then up to 49 shifted/unshifted pairs.
//! Both members of a pair map to one character id, so ids run 0..=50 with
//! id 0 reserved for space. `@` marks an unused slot and may not appear as
//! a payload character.

use crate::consts::{LANG_FILE_LENGTH, LANG_LENGTH};
use crate::error::{KeygaugeError, KgResult};
use fnv::FnvHashMap;
use std::fs;
use std::path::Path;

const HOLE: char = '@';

#[derive(Debug, Clone)]
pub struct Language {
    pub name: String,
    /// The 101-slot character line, `@`-padded past the end of the file.
    slots: Vec<char>,
    table: FnvHashMap<char, u8>,
}

impl Language {
    /// Loads `<root>/<name>/<name>.lang`.
    pub fn load(root: &Path, name: &str) -> KgResult<Self> {
        let path = root.join(name).join(format!("{name}.lang"));
        let content = fs::read_to_string(&path)
            .map_err(|_| KeygaugeError::Language("Lang file not found.".into()))?;
        let line = content.lines().next().unwrap_or("");
        Self::parse(name, line)
    }

    pub fn parse(name: &str, line: &str) -> KgResult<Self> {
        let mut slots: Vec<char> = Vec::with_capacity(LANG_FILE_LENGTH + 1);
        for c in line.chars() {
            if c == HOLE {
                return Err(KeygaugeError::Language(
                    "'@' found in lang, illegal character.".into(),
                ));
            }
            slots.push(c);
        }
        if slots.len() > LANG_FILE_LENGTH {
            return Err(KeygaugeError::Language(
                "Lang file too long (>100 characters)".into(),
            ));
        }
        slots.resize(LANG_FILE_LENGTH + 1, HOLE);

        if slots[0] != ' ' || slots[1] != ' ' {
            return Err(KeygaugeError::Language(
                "Lang file must begin with 2 spaces".into(),
            ));
        }
        if check_duplicates(&slots) != -1 {
            return Err(KeygaugeError::Language(
                "Lang file contains duplicate characters.".into(),
            ));
        }

        let mut table = FnvHashMap::default();
        for (i, &c) in slots.iter().enumerate() {
            if c != HOLE {
                table.insert(c, (i / 2) as u8);
            }
        }

        Ok(Self {
            name: name.to_string(),
            slots,
            table,
        })
    }

    /// The character id for `c`, or `None` if the language does not contain
    /// it. Id 0 (space) is also reported as absent, so space never counts
    /// toward the corpus.
    pub fn code_of(&self, c: char) -> Option<u8> {
        match self.table.get(&c) {
            Some(&id) if id != 0 => Some(id),
            _ => None,
        }
    }

    /// The unshifted character for a given id, `@` for anything out of range.
    pub fn char_of(&self, id: i8) -> char {
        if (0..LANG_LENGTH as i8 - 1).contains(&id) {
            self.slots[id as usize * 2]
        } else {
            HOLE
        }
    }
}

/// Duplicate scan that ignores adjacent pairs (a shifted/unshifted group is
/// allowed to repeat a character, as is the double space at the start).
/// Returns -1 when no duplicates exist, otherwise the pair count minus one.
pub fn check_duplicates(slots: &[char]) -> i32 {
    let mut dups = -1;
    for i in 0..slots.len() {
        for j in i + 2..slots.len() {
            if slots[i] == slots[j] && slots[i] != HOLE {
                dups += 1;
            }
        }
    }
    dups
}
