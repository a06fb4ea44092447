//! The analysis API: everything a request handler needs, bundled behind one
//! read-only struct. Workers share an `Analyzer` and never mutate it.

use crate::analyze::{analyze, Analysis};
use crate::catalog::{StatCatalog, TierRef};
use crate::corpus::CorpusTables;
use crate::error::KgResult;
use crate::language::Language;
use crate::layout::Layout;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Client-supplied weights for the reduced five-stat score. Fields a client
/// leaves out count as zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomWeights {
    pub sfb: f32,
    pub sfs: f32,
    pub lsb: f32,
    pub alt: f32,
    pub rolls: f32,
}

/// The five raw stat values a response reports.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatValues {
    pub sfb: f32,
    pub sfs: f32,
    pub lsb: f32,
    pub alt: f32,
    pub rolls: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiReport {
    pub stat_values: StatValues,
    pub score: f32,
}

/// Shared, immutable analysis state: the language, the normalized corpus
/// tables and the statistic catalog.
pub struct Analyzer {
    pub language: Language,
    pub tables: CorpusTables,
    pub catalog: StatCatalog,
}

impl Analyzer {
    pub fn new(language: Language, tables: CorpusTables, catalog: StatCatalog) -> Self {
        Self {
            language,
            tables,
            catalog,
        }
    }

    pub fn analyze(&self, layout: &Layout) -> Analysis {
        analyze(layout, &self.tables, &self.catalog)
    }

    /// Full per-item pipeline: decode the layout string, run the engine,
    /// assemble the reduced-score report.
    pub fn evaluate(&self, layout_str: &str, weights: &CustomWeights) -> KgResult<ApiReport> {
        let layout = Layout::from_api_string("api_layout", layout_str, &self.language)?;
        let analysis = self.analyze(&layout);

        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(
                "\n{}",
                crate::report::render(
                    crate::config::OutputMode::Normal,
                    &layout,
                    &analysis,
                    &self.catalog,
                    &self.language,
                )
            );
        }

        Ok(self.report(&analysis, weights))
    }

    /// Builds the reduced score from five named stats. A stat missing from
    /// the catalog contributes zero.
    pub fn report(&self, analysis: &Analysis, weights: &CustomWeights) -> ApiReport {
        let bi_value = |name: &str| {
            self.catalog
                .find(TierRef::Bi, name)
                .map_or(0.0, |i| analysis.bi[i])
        };
        let tri_value = |name: &str| {
            self.catalog
                .find(TierRef::Tri, name)
                .map_or(0.0, |i| analysis.tri[i])
        };

        let stat_values = StatValues {
            sfb: bi_value("Same Finger Bigram"),
            sfs: self
                .catalog
                .find(TierRef::Skip(1), "Same Finger Skipgram")
                .map_or(0.0, |i| analysis.skip[i][1]),
            lsb: bi_value("Index Stretch Bigram"),
            alt: tri_value("Alternation"),
            rolls: tri_value("Roll"),
        };

        let score = stat_values.sfb * weights.sfb
            + stat_values.sfs * weights.sfs
            + stat_values.lsb * weights.lsb
            + stat_values.alt * weights.alt
            + stat_values.rolls * weights.rolls;

        debug!(
            "reduced score: sfb={:.4} sfs={:.4} lsb={:.4} alt={:.4} rolls={:.4} -> {:.4}",
            stat_values.sfb, stat_values.sfs, stat_values.lsb, stat_values.alt, stat_values.rolls, score
        );

        ApiReport { stat_values, score }
    }
}
