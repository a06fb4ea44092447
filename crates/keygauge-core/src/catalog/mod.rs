//! The statistic catalog: every named stat, its classifier, and the
//! precomputed list of flat n-gram indices the classifier accepts.
//!
//! Construction walks all 36^n candidate indices per entry, marks the
//! misses with -1 in a full-size slot buffer, then compacts the buffer
//! with a two-pointer partition so the hits form a prefix. Scoring is
//! order-independent, so the shuffle the partition introduces is fine.
//! Tier sizes are fixed by declaration and verified after construction;
//! a mismatch means the stat tables themselves are broken.

mod audit;
mod bi;
mod meta;
mod mono;
mod quad;
mod skip;
mod tri;

use crate::classify::{BiClass, MonoClass, QuadClass, TriClass};
use crate::consts::{DIM1, DIM2, DIM3, DIM4, SKIP_SLOTS};
use crate::error::{KeygaugeError, KgResult};
use crate::index::{unflat_bi, unflat_mono, unflat_quad, unflat_tri};
use crate::weights::WeightSet;
use fnv::FnvHashMap;
use rayon::prelude::*;
use tracing::info;

pub use self::audit::AuditReport;
pub use self::meta::{MetaStat, MetaTerm, TierRef};

/// Declared tier sizes. Construction asserts these.
pub const MONO_STATS: usize = 53;
pub const BI_STATS: usize = 27;
pub const TRI_STATS: usize = 39;
pub const QUAD_STATS: usize = 71;
pub const SKIP_STATS: usize = 23;
pub const META_STATS: usize = 10;

/// One catalog entry: a display name, the classifier it was built from,
/// and the compacted list of matching flat n-gram indices.
#[derive(Debug, Clone)]
pub struct Stat<C> {
    pub name: String,
    pub class: C,
    pub ngrams: Vec<i32>,
    pub weight: f32,
    pub skip: bool,
}

pub type MonoStat = Stat<MonoClass>;
pub type BiStat = Stat<BiClass>;
pub type TriStat = Stat<TriClass>;
pub type QuadStat = Stat<QuadClass>;

/// Skipgram stats reuse the bigram classifiers but weight each of the nine
/// distances separately; slot 0 of the weight row is unused.
#[derive(Debug, Clone)]
pub struct SkipStat {
    pub name: String,
    pub class: BiClass,
    pub ngrams: Vec<i32>,
    pub weight: [f32; SKIP_SLOTS],
    pub skip: bool,
}

pub struct StatCatalog {
    pub mono: Vec<MonoStat>,
    pub bi: Vec<BiStat>,
    pub tri: Vec<TriStat>,
    pub quad: Vec<QuadStat>,
    pub skip: Vec<SkipStat>,
    pub meta: Vec<MetaStat>,

    mono_index: FnvHashMap<String, usize>,
    bi_index: FnvHashMap<String, usize>,
    tri_index: FnvHashMap<String, usize>,
    quad_index: FnvHashMap<String, usize>,
    skip_index: FnvHashMap<String, usize>,
    meta_index: FnvHashMap<String, usize>,
}

/// Moves every -1 hole to the tail of the slot buffer and returns how many
/// real indices remain at the front.
fn compact(ngrams: &mut [i32]) -> usize {
    let mut left = 0;
    let mut right = ngrams.len().saturating_sub(1);

    while left < right {
        while left < right && ngrams[left] != -1 {
            left += 1;
        }
        while left < right && ngrams[right] == -1 {
            right -= 1;
        }
        if left < right {
            ngrams.swap(left, right);
            left += 1;
            right -= 1;
        }
    }

    ngrams.iter().position(|&n| n == -1).unwrap_or(ngrams.len())
}

/// Fills the full slot buffer for one entry and compacts it down to the
/// matching prefix.
fn build_entry<F: Fn(i32) -> bool>(dim: usize, test: F) -> Vec<i32> {
    let mut slots: Vec<i32> = (0..dim as i32)
        .map(|i| if test(i) { i } else { -1 })
        .collect();
    let length = compact(&mut slots);
    slots.truncate(length);
    slots.shrink_to_fit();
    slots
}

fn build_tier<C: Copy + Send + Sync>(
    defs: Vec<(String, C)>,
    dim: usize,
    test: impl Fn(C, i32) -> bool + Send + Sync,
) -> Vec<Stat<C>> {
    defs.into_par_iter()
        .map(|(name, class)| Stat {
            name,
            class,
            ngrams: build_entry(dim, |i| test(class, i)),
            weight: 0.0,
            skip: false,
        })
        .collect()
}

fn name_index<S, F: Fn(&S) -> &str>(stats: &[S], name_of: F) -> FnvHashMap<String, usize> {
    stats
        .iter()
        .enumerate()
        .map(|(i, s)| (name_of(s).to_string(), i))
        .collect()
}

impl StatCatalog {
    /// Builds the full catalog, applies the weight set (when given), and
    /// resolves the meta definitions.
    pub fn build(weights: Option<&WeightSet>) -> KgResult<Self> {
        let mono = build_tier(mono::entries(), DIM1, |class: MonoClass, i| {
            class.matches(unflat_mono(i))
        });
        let bi = build_tier(bi::entries(), DIM2, |class: BiClass, i| {
            let (a, b) = unflat_bi(i);
            class.matches(a, b)
        });
        let tri = build_tier(tri::entries(), DIM3, |class: TriClass, i| {
            let (a, b, c) = unflat_tri(i);
            class.matches(a, b, c)
        });
        let quad = build_tier(quad::entries(), DIM4, |class: QuadClass, i| {
            let (a, b, c, d) = unflat_quad(i);
            class.matches(a, b, c, d)
        });
        let skip = skip::entries()
            .into_par_iter()
            .map(|(name, class)| SkipStat {
                name,
                class,
                ngrams: build_entry(DIM2, |i| {
                    let (a, b) = unflat_bi(i);
                    class.matches(a, b)
                }),
                weight: [0.0; SKIP_SLOTS],
                skip: false,
            })
            .collect::<Vec<_>>();

        check_length("mono", mono.len(), MONO_STATS)?;
        check_length("bi", bi.len(), BI_STATS)?;
        check_length("tri", tri.len(), TRI_STATS)?;
        check_length("quad", quad.len(), QUAD_STATS)?;
        check_length("skip", skip.len(), SKIP_STATS)?;

        let mut catalog = Self {
            mono_index: name_index(&mono, |s: &MonoStat| s.name.as_str()),
            bi_index: name_index(&bi, |s: &BiStat| s.name.as_str()),
            tri_index: name_index(&tri, |s: &TriStat| s.name.as_str()),
            quad_index: name_index(&quad, |s: &QuadStat| s.name.as_str()),
            skip_index: name_index(&skip, |s: &SkipStat| s.name.as_str()),
            meta_index: FnvHashMap::default(),
            mono,
            bi,
            tri,
            quad,
            skip,
            meta: Vec::new(),
        };

        if let Some(set) = weights {
            catalog.apply_weights(set);
        }

        let metas = meta::define(&mut catalog)?;
        catalog.meta = metas;
        check_length("meta", catalog.meta.len(), META_STATS)?;
        catalog.meta_index = name_index(&catalog.meta, |s: &MetaStat| s.name.as_str());
        if let Some(set) = weights {
            for stat in &mut catalog.meta {
                if let Some(&w) = set.meta.get(&stat.name) {
                    stat.weight = w;
                }
            }
        }

        info!(
            "Catalog ready: {} mono, {} bi, {} tri, {} quad, {} skip, {} meta stats",
            catalog.mono.len(),
            catalog.bi.len(),
            catalog.tri.len(),
            catalog.quad.len(),
            catalog.skip.len(),
            catalog.meta.len(),
        );
        Ok(catalog)
    }

    /// Copies weights out of a weight set. Stats the set does not mention
    /// get flagged skip; the meta definitions clear the flag again for
    /// every stat they depend on.
    fn apply_weights(&mut self, set: &WeightSet) {
        for stat in &mut self.mono {
            match set.mono.get(&stat.name) {
                Some(&w) => stat.weight = w,
                None => stat.skip = true,
            }
        }
        for stat in &mut self.bi {
            match set.bi.get(&stat.name) {
                Some(&w) => stat.weight = w,
                None => stat.skip = true,
            }
        }
        for stat in &mut self.tri {
            match set.tri.get(&stat.name) {
                Some(&w) => stat.weight = w,
                None => stat.skip = true,
            }
        }
        for stat in &mut self.quad {
            match set.quad.get(&stat.name) {
                Some(&w) => stat.weight = w,
                None => stat.skip = true,
            }
        }
        for stat in &mut self.skip {
            match set.skip_row(&stat.name) {
                Some(row) => stat.weight = row,
                None => stat.skip = true,
            }
        }
    }

    /// Looks a stat up by display name within one tier. All skip distances
    /// share the same entry set, so any skip tag resolves the same index.
    pub fn find(&self, tier: TierRef, name: &str) -> Option<usize> {
        let map = match tier {
            TierRef::Mono => &self.mono_index,
            TierRef::Bi => &self.bi_index,
            TierRef::Tri => &self.tri_index,
            TierRef::Quad => &self.quad_index,
            TierRef::Skip(_) => &self.skip_index,
        };
        map.get(name).copied()
    }

    pub fn find_meta(&self, name: &str) -> Option<usize> {
        self.meta_index.get(name).copied()
    }
}

fn check_length(tier: &str, constructed: usize, declared: usize) -> KgResult<()> {
    if constructed != declared {
        return Err(KeygaugeError::Catalog(format!(
            "{tier} stat count mismatch: declared {declared}, constructed {constructed}"
        )));
    }
    Ok(())
}
