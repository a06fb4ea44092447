//! Meta stat definitions: weighted combinations of already-computed stats.
//! Defining a meta clears the skip flag of every stat it reads, so a weight
//! file cannot accidentally starve one of its inputs.

use super::StatCatalog;
use crate::consts::SKIP_SLOTS;
use crate::error::{KeygaugeError, KgResult};
use crate::geometry::Finger;
use strum::IntoEnumIterator;

/// Which per-stat value a meta term multiplies. Skip carries the character
/// distance 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierRef {
    Mono,
    Bi,
    Tri,
    Quad,
    Skip(u8),
}

#[derive(Debug, Clone)]
pub struct MetaTerm {
    pub tier: TierRef,
    pub index: usize,
    pub weight: f32,
}

#[derive(Debug, Clone)]
pub struct MetaStat {
    pub name: String,
    pub terms: Vec<MetaTerm>,
    /// Negative results are negated before weighting.
    pub absolute: bool,
    pub weight: f32,
    pub skip: bool,
}

/// RuSpeed discounts each additional character of distance by this factor.
const RUSPEED_DECAY: f32 = 0.25;

/// Resolves a stat name within a tier, un-skips it, and returns its index.
fn require(catalog: &mut StatCatalog, tier: TierRef, name: &str) -> KgResult<usize> {
    let index = catalog.find(tier, name).ok_or_else(|| {
        KeygaugeError::Catalog(format!("meta stat references unknown stat '{name}'"))
    })?;
    match tier {
        TierRef::Mono => catalog.mono[index].skip = false,
        TierRef::Bi => catalog.bi[index].skip = false,
        TierRef::Tri => catalog.tri[index].skip = false,
        TierRef::Quad => catalog.quad[index].skip = false,
        TierRef::Skip(_) => catalog.skip[index].skip = false,
    }
    Ok(index)
}

/// A same-finger speed estimate: the SFB family at the bigram tier, plus
/// every skip distance discounted by `RUSPEED_DECAY` per extra character.
/// `names` holds the bigram-tier stat names, `skip_names` their skipgram
/// twins.
fn ruspeed_terms(
    catalog: &mut StatCatalog,
    names: &[String],
    skip_names: &[String],
) -> KgResult<Vec<MetaTerm>> {
    let mut terms = Vec::new();
    let mut weight = 1.0;

    for name in names {
        let index = require(catalog, TierRef::Bi, name)?;
        terms.push(MetaTerm {
            tier: TierRef::Bi,
            index,
            weight,
        });
    }

    let skip_indices: Vec<usize> = skip_names
        .iter()
        .map(|name| require(catalog, TierRef::Skip(1), name))
        .collect::<KgResult<_>>()?;

    for d in 1..SKIP_SLOTS as u8 {
        weight *= RUSPEED_DECAY;
        for &index in &skip_indices {
            terms.push(MetaTerm {
                tier: TierRef::Skip(d),
                index,
                weight,
            });
        }
    }

    Ok(terms)
}

pub(super) fn define(catalog: &mut StatCatalog) -> KgResult<Vec<MetaStat>> {
    let mut metas = Vec::new();

    // hand balance: how lopsided the monogram load is
    let left = require(catalog, TierRef::Mono, "Left Hand Usage")?;
    let right = require(catalog, TierRef::Mono, "Right Hand Usage")?;
    metas.push(MetaStat {
        name: "Hand Balance".into(),
        terms: vec![
            MetaTerm {
                tier: TierRef::Mono,
                index: left,
                weight: 1.0,
            },
            MetaTerm {
                tier: TierRef::Mono,
                index: right,
                weight: -1.0,
            },
        ],
        absolute: true,
        weight: 0.0,
        skip: false,
    });

    metas.push(MetaStat {
        name: "RuSpeed".into(),
        terms: ruspeed_terms(
            catalog,
            &[
                "Same Finger Bigram".into(),
                "Bad Same Finger Bigram".into(),
                "Lateral Same Finger Bigram".into(),
            ],
            &[
                "Same Finger Skipgram".into(),
                "Bad Same Finger Skipgram".into(),
                "Lateral Same Finger Skipgram".into(),
            ],
        )?,
        absolute: false,
        weight: 0.0,
        skip: false,
    });

    // one RuSpeed per finger; ring and middle fingers have no lateral stat
    for finger in Finger::iter() {
        let mut names = vec![format!("{finger} Bigram"), format!("Bad {finger} Bigram")];
        let mut skip_names = vec![
            format!("{finger} Skipgram"),
            format!("Bad {finger} Skipgram"),
        ];
        if finger.has_lateral_stat() {
            names.push(format!("Lateral {finger} Bigram"));
            skip_names.push(format!("Lateral {finger} Skipgram"));
        }
        metas.push(MetaStat {
            name: format!("{finger} RuSpeed"),
            terms: ruspeed_terms(catalog, &names, &skip_names)?,
            absolute: false,
            weight: 0.0,
            skip: false,
        });
    }

    Ok(metas)
}
