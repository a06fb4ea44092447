//! Index arithmetic. Two families live here:
//!
//! * flat n-gram indices: a sequence of n grid positions packed into one
//!   integer in base 36, most significant digit first;
//! * linear corpus indices: an n-tuple of character ids packed in base
//!   `LANG_LENGTH`, used to address the frequency tables.

use crate::consts::{COL, DIM1, DIM2, DIM3, LANG_LENGTH, SKIP_SLOTS};
use crate::geometry::Pos;

pub fn flat_mono(p: Pos) -> i32 {
    (p.row as i32) * COL as i32 + p.col as i32
}

pub fn unflat_mono(i: i32) -> Pos {
    let i = i as usize;
    Pos::new(i / COL, i % COL)
}

pub fn flat_bi(a: Pos, b: Pos) -> i32 {
    flat_mono(a) * DIM1 as i32 + flat_mono(b)
}

pub fn unflat_bi(i: i32) -> (Pos, Pos) {
    let i = i as usize;
    (unflat_mono((i / DIM1) as i32), unflat_mono((i % DIM1) as i32))
}

pub fn flat_tri(a: Pos, b: Pos, c: Pos) -> i32 {
    flat_mono(a) * DIM2 as i32 + flat_mono(b) * DIM1 as i32 + flat_mono(c)
}

pub fn unflat_tri(i: i32) -> (Pos, Pos, Pos) {
    let i = i as usize;
    (
        unflat_mono((i / DIM2) as i32),
        unflat_mono((i / DIM1 % DIM1) as i32),
        unflat_mono((i % DIM1) as i32),
    )
}

pub fn flat_quad(a: Pos, b: Pos, c: Pos, d: Pos) -> i32 {
    flat_mono(a) * DIM3 as i32
        + flat_mono(b) * DIM2 as i32
        + flat_mono(c) * DIM1 as i32
        + flat_mono(d)
}

pub fn unflat_quad(i: i32) -> (Pos, Pos, Pos, Pos) {
    let i = i as usize;
    (
        unflat_mono((i / DIM3) as i32),
        unflat_mono((i / DIM2 % DIM1) as i32),
        unflat_mono((i / DIM1 % DIM1) as i32),
        unflat_mono((i % DIM1) as i32),
    )
}

pub fn index_mono(i: usize) -> usize {
    i
}

pub fn index_bi(i: usize, j: usize) -> usize {
    i * LANG_LENGTH + j
}

pub fn index_tri(i: usize, j: usize, k: usize) -> usize {
    i * LANG_LENGTH * LANG_LENGTH + j * LANG_LENGTH + k
}

pub fn index_quad(i: usize, j: usize, k: usize, l: usize) -> usize {
    i * LANG_LENGTH * LANG_LENGTH * LANG_LENGTH
        + j * LANG_LENGTH * LANG_LENGTH
        + k * LANG_LENGTH
        + l
}

/// `skip` is the character distance, 1..=9.
pub fn index_skip(skip: usize, j: usize, k: usize) -> usize {
    debug_assert!(skip > 0 && skip < SKIP_SLOTS);
    skip * LANG_LENGTH * LANG_LENGTH + j * LANG_LENGTH + k
}
