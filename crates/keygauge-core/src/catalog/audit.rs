//! Catalog self-verification. Construction already asserts tier lengths;
//! this pass re-checks every compacted index list against its classifier
//! so a broken table or a bad compaction cannot reach the scoring engine
//! silently. Cheap relative to construction (it only walks the kept
//! prefixes, not all 36^n candidates).

use super::StatCatalog;
use crate::consts::{DIM1, DIM2, DIM3, DIM4};
use crate::error::{KeygaugeError, KgResult};
use crate::index::{unflat_bi, unflat_mono, unflat_quad, unflat_tri};
use fnv::FnvHashSet;
use tracing::info;

#[derive(Debug, Default, Clone, Copy)]
pub struct AuditReport {
    pub entries: usize,
    pub ngrams: usize,
}

fn check_list(
    name: &str,
    ngrams: &[i32],
    dim: usize,
    matches: impl Fn(i32) -> bool,
) -> KgResult<usize> {
    let mut seen = FnvHashSet::default();
    for &n in ngrams {
        if !(0..dim as i32).contains(&n) {
            return Err(KeygaugeError::Catalog(format!(
                "'{name}' holds out-of-range index {n}"
            )));
        }
        if !seen.insert(n) {
            return Err(KeygaugeError::Catalog(format!(
                "'{name}' holds duplicate index {n}"
            )));
        }
        if !matches(n) {
            return Err(KeygaugeError::Catalog(format!(
                "'{name}' holds index {n} its classifier rejects"
            )));
        }
    }
    Ok(ngrams.len())
}

impl StatCatalog {
    /// Re-validates every entry: indices in range, distinct, and accepted
    /// by the entry's own classifier; meta terms resolved in range.
    pub fn audit(&self) -> KgResult<AuditReport> {
        let mut report = AuditReport::default();

        for stat in &self.mono {
            report.ngrams += check_list(&stat.name, &stat.ngrams, DIM1, |n| {
                stat.class.matches(unflat_mono(n))
            })?;
            report.entries += 1;
        }
        for stat in &self.bi {
            report.ngrams += check_list(&stat.name, &stat.ngrams, DIM2, |n| {
                let (a, b) = unflat_bi(n);
                stat.class.matches(a, b)
            })?;
            report.entries += 1;
        }
        for stat in &self.tri {
            report.ngrams += check_list(&stat.name, &stat.ngrams, DIM3, |n| {
                let (a, b, c) = unflat_tri(n);
                stat.class.matches(a, b, c)
            })?;
            report.entries += 1;
        }
        for stat in &self.quad {
            report.ngrams += check_list(&stat.name, &stat.ngrams, DIM4, |n| {
                let (a, b, c, d) = unflat_quad(n);
                stat.class.matches(a, b, c, d)
            })?;
            report.entries += 1;
        }
        for stat in &self.skip {
            report.ngrams += check_list(&stat.name, &stat.ngrams, DIM2, |n| {
                let (a, b) = unflat_bi(n);
                stat.class.matches(a, b)
            })?;
            report.entries += 1;
        }

        for meta in &self.meta {
            for term in &meta.terms {
                let bound = match term.tier {
                    super::TierRef::Mono => self.mono.len(),
                    super::TierRef::Bi => self.bi.len(),
                    super::TierRef::Tri => self.tri.len(),
                    super::TierRef::Quad => self.quad.len(),
                    super::TierRef::Skip(_) => self.skip.len(),
                };
                if term.index >= bound {
                    return Err(KeygaugeError::Catalog(format!(
                        "meta '{}' references stat index {} past tier end {}",
                        meta.name, term.index, bound
                    )));
                }
            }
            report.entries += 1;
        }

        info!(
            "Catalog audit passed: {} entries, {} stored n-grams",
            report.entries, report.ngrams
        );
        Ok(report)
    }
}
