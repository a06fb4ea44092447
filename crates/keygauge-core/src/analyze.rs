//! The scoring engine. For one layout it walks every non-skipped catalog
//! entry, sums corpus frequencies over the entry's precomputed n-gram list,
//! evaluates the meta stats from those results, and folds everything into
//! one weighted total. Reads shared tables only; safe to run from any
//! number of worker threads at once.

use crate::catalog::{Stat, StatCatalog, TierRef};
use crate::consts::SKIP_SLOTS;
use crate::corpus::CorpusTables;
use crate::index::{unflat_bi, unflat_mono, unflat_quad, unflat_tri};
use crate::layout::Layout;

/// Per-stat results for one layout, one row per catalog entry. Skip stats
/// hold a value per character distance, slot 0 unused.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub mono: Vec<f32>,
    pub bi: Vec<f32>,
    pub tri: Vec<f32>,
    pub quad: Vec<f32>,
    pub skip: Vec<[f32; SKIP_SLOTS]>,
    pub meta: Vec<f32>,
    pub score: f32,
}

impl Analysis {
    pub fn value(&self, tier: TierRef, index: usize) -> f32 {
        match tier {
            TierRef::Mono => self.mono[index],
            TierRef::Bi => self.bi[index],
            TierRef::Tri => self.tri[index],
            TierRef::Quad => self.quad[index],
            TierRef::Skip(d) => self.skip[index][d as usize],
        }
    }
}

pub fn analyze(layout: &Layout, tables: &CorpusTables, catalog: &StatCatalog) -> Analysis {
    let mut analysis = Analysis {
        mono: vec![0.0; catalog.mono.len()],
        bi: vec![0.0; catalog.bi.len()],
        tri: vec![0.0; catalog.tri.len()],
        quad: vec![0.0; catalog.quad.len()],
        skip: vec![[0.0; SKIP_SLOTS]; catalog.skip.len()],
        meta: vec![0.0; catalog.meta.len()],
        score: 0.0,
    };

    eval_tier(&catalog.mono, &mut analysis.mono, |ngram| {
        let p = unflat_mono(ngram);
        let a = layout.at(p.row as usize, p.col as usize);
        if a >= 0 {
            tables.mono(a as usize)
        } else {
            0.0
        }
    });

    eval_tier(&catalog.bi, &mut analysis.bi, |ngram| {
        let (p0, p1) = unflat_bi(ngram);
        let a = layout.at(p0.row as usize, p0.col as usize);
        let b = layout.at(p1.row as usize, p1.col as usize);
        if a >= 0 && b >= 0 {
            tables.bi(a as usize, b as usize)
        } else {
            0.0
        }
    });

    eval_tier(&catalog.tri, &mut analysis.tri, |ngram| {
        let (p0, p1, p2) = unflat_tri(ngram);
        let a = layout.at(p0.row as usize, p0.col as usize);
        let b = layout.at(p1.row as usize, p1.col as usize);
        let c = layout.at(p2.row as usize, p2.col as usize);
        if a >= 0 && b >= 0 && c >= 0 {
            tables.tri(a as usize, b as usize, c as usize)
        } else {
            0.0
        }
    });

    eval_tier(&catalog.quad, &mut analysis.quad, |ngram| {
        let (p0, p1, p2, p3) = unflat_quad(ngram);
        let a = layout.at(p0.row as usize, p0.col as usize);
        let b = layout.at(p1.row as usize, p1.col as usize);
        let c = layout.at(p2.row as usize, p2.col as usize);
        let d = layout.at(p3.row as usize, p3.col as usize);
        if a >= 0 && b >= 0 && c >= 0 && d >= 0 {
            tables.quad(a as usize, b as usize, c as usize, d as usize)
        } else {
            0.0
        }
    });

    // skip stats reuse one position list against each distance table
    for (stat, row) in catalog.skip.iter().zip(analysis.skip.iter_mut()) {
        if stat.skip {
            continue;
        }
        for &ngram in &stat.ngrams {
            let (p0, p1) = unflat_bi(ngram);
            let a = layout.at(p0.row as usize, p0.col as usize);
            let b = layout.at(p1.row as usize, p1.col as usize);
            if a >= 0 && b >= 0 {
                for d in 1..SKIP_SLOTS {
                    row[d] += tables.skip(d, a as usize, b as usize);
                }
            }
        }
    }

    // metas read the tier results computed above, in declaration order
    for (i, meta) in catalog.meta.iter().enumerate() {
        if meta.skip {
            continue;
        }
        let mut acc = 0.0;
        for term in &meta.terms {
            acc += analysis.value(term.tier, term.index) * term.weight;
        }
        if meta.absolute && acc < 0.0 {
            acc = -acc;
        }
        analysis.meta[i] = acc;
    }

    analysis.score = total_score(catalog, &analysis);
    analysis
}

fn eval_tier<C>(stats: &[Stat<C>], results: &mut [f32], freq_of: impl Fn(i32) -> f32) {
    for (stat, result) in stats.iter().zip(results.iter_mut()) {
        if stat.skip {
            continue;
        }
        *result = stat.ngrams.iter().map(|&ngram| freq_of(ngram)).sum();
    }
}

/// The weighted scalar total over every non-skipped stat.
fn total_score(catalog: &StatCatalog, analysis: &Analysis) -> f32 {
    let mut score = 0.0;
    score += weighted(&catalog.mono, &analysis.mono);
    score += weighted(&catalog.bi, &analysis.bi);
    score += weighted(&catalog.tri, &analysis.tri);
    score += weighted(&catalog.quad, &analysis.quad);
    for (stat, row) in catalog.skip.iter().zip(&analysis.skip) {
        if stat.skip {
            continue;
        }
        for d in 1..SKIP_SLOTS {
            score += row[d] * stat.weight[d];
        }
    }
    for (meta, &value) in catalog.meta.iter().zip(&analysis.meta) {
        if !meta.skip {
            score += value * meta.weight;
        }
    }
    score
}

fn weighted<C>(stats: &[Stat<C>], results: &[f32]) -> f32 {
    stats
        .iter()
        .zip(results)
        .filter(|(stat, _)| !stat.skip)
        .map(|(stat, &value)| value * stat.weight)
        .sum()
}
