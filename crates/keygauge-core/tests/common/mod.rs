use keygauge_core::api::Analyzer;
use keygauge_core::catalog::StatCatalog;
use keygauge_core::corpus::CorpusCounts;
use keygauge_core::language::Language;
use keygauge_core::weights::WeightSet;
use std::sync::OnceLock;

/// 26 letters plus the four punctuation keys a 30-key layout needs.
pub const LANG_EXTRAS: &str = ";,./";

pub const QWERTY: &str = "qwertyuiopasdfghjkl;zxcvbnm,./";
pub const PANGRAM: &str = "the quick brown fox jumps over the lazy dog";

pub fn test_language() -> Language {
    let mut line = String::from("  ");
    for c in ('a'..='z').chain(LANG_EXTRAS.chars()) {
        line.push(c);
        line.push(c);
    }
    Language::parse("english", &line).unwrap()
}

/// One shared analyzer per test binary; the catalog walk over all quadgram
/// indices is too heavy to repeat per test.
pub fn analyzer() -> &'static Analyzer {
    static ANALYZER: OnceLock<Analyzer> = OnceLock::new();
    ANALYZER.get_or_init(|| {
        let language = test_language();
        let mut counts = CorpusCounts::new();
        counts.ingest(PANGRAM.chars(), &language);
        let tables = counts.normalize();
        let catalog = StatCatalog::build(None).unwrap();
        Analyzer::new(language, tables, catalog)
    })
}

/// A weight set that names only a handful of stats, for skip-flag tests.
pub fn sparse_weights() -> WeightSet {
    serde_json::from_str(
        r#"{
            "bi": { "Same Finger Bigram": -3.0 },
            "tri": { "Roll": 2.0 },
            "meta": { "Hand Balance": -1.0 }
        }"#,
    )
    .unwrap()
}
