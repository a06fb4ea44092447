use keygauge_core::analyze::analyze;
use keygauge_core::api::CustomWeights;
use keygauge_core::catalog::{StatCatalog, TierRef};
use keygauge_core::consts::SKIP_SLOTS;
use keygauge_core::corpus::CorpusCounts;
use keygauge_core::layout::Layout;

mod common;

#[test]
fn empty_layout_scores_zero_everywhere() {
    let analyzer = common::analyzer();
    let layout = Layout::empty("blank");
    let analysis = analyzer.analyze(&layout);

    assert!(analysis.mono.iter().all(|&v| v == 0.0));
    assert!(analysis.bi.iter().all(|&v| v == 0.0));
    assert!(analysis.tri.iter().all(|&v| v == 0.0));
    assert!(analysis.quad.iter().all(|&v| v == 0.0));
    assert!(analysis
        .skip
        .iter()
        .all(|row| row.iter().all(|&v| v == 0.0)));
    assert!(analysis.meta.iter().all(|&v| v == 0.0));
    assert_eq!(analysis.score, 0.0);

    let report = analyzer.report(
        &analysis,
        &CustomWeights {
            sfb: -5.0,
            sfs: -2.0,
            lsb: -1.0,
            alt: 1.0,
            rolls: 1.0,
        },
    );
    assert_eq!(report.stat_values.sfb, 0.0);
    assert_eq!(report.score, 0.0);
}

#[test]
fn scoring_is_deterministic() {
    let analyzer = common::analyzer();
    let layout = Layout::from_api_string("qwerty", common::QWERTY, &analyzer.language).unwrap();
    let first = analyzer.analyze(&layout);
    let second = analyzer.analyze(&layout);
    assert_eq!(first, second);
}

#[test]
fn identical_matrices_give_identical_results_regardless_of_name() {
    let analyzer = common::analyzer();
    let a = Layout::from_api_string("one", common::QWERTY, &analyzer.language).unwrap();
    let b = Layout::from_api_string("another name", common::QWERTY, &analyzer.language).unwrap();
    assert_eq!(analyzer.analyze(&a), analyzer.analyze(&b));
}

#[test]
fn a_full_layout_exercises_the_classifier_matched_ngrams() {
    let analyzer = common::analyzer();
    let layout = Layout::from_api_string("qwerty", common::QWERTY, &analyzer.language).unwrap();
    let analysis = analyzer.analyze(&layout);

    // qwerty's corpus-heavy home block produces nonzero usage everywhere
    let left = analyzer.catalog.find(TierRef::Mono, "Left Hand Usage").unwrap();
    let right = analyzer
        .catalog
        .find(TierRef::Mono, "Right Hand Usage")
        .unwrap();
    assert!(analysis.mono[left] > 0.0);
    assert!(analysis.mono[right] > 0.0);

    // "ju" in "jumps" is a right-index same-finger bigram on qwerty
    let sfb = analyzer.catalog.find(TierRef::Bi, "Same Finger Bigram").unwrap();
    assert!(analysis.bi[sfb] > 0.0);
}

#[test]
fn empty_cells_contribute_nothing() {
    let analyzer = common::analyzer();
    let full = Layout::from_api_string("qwerty", common::QWERTY, &analyzer.language).unwrap();

    // blank out one key and the difference must equal that key's share
    let mut partial = full.clone();
    partial.matrix[1][1] = -1; // 'a'

    let full_analysis = analyzer.analyze(&full);
    let partial_analysis = analyzer.analyze(&partial);

    let a_id = analyzer.language.code_of('a').unwrap() as usize;
    let heat = analyzer.catalog.find(TierRef::Mono, "Heatmap 1 01").unwrap();
    assert_eq!(full_analysis.mono[heat], analyzer.tables.mono(a_id));
    assert_eq!(partial_analysis.mono[heat], 0.0);

    let left = analyzer.catalog.find(TierRef::Mono, "Left Hand Usage").unwrap();
    let expected = full_analysis.mono[left] - analyzer.tables.mono(a_id);
    assert!((partial_analysis.mono[left] - expected).abs() < 1e-5);
}

#[test]
fn hand_balance_reports_the_absolute_usage_gap() {
    // reuse the shared catalog with a hand-crafted 55/45 corpus
    let catalog = &common::analyzer().catalog;
    let language = common::test_language();
    let mut counts = CorpusCounts::new();
    let a = language.code_of('a').unwrap() as usize;
    let b = language.code_of('b').unwrap() as usize;
    counts.mono[a] = 55;
    counts.mono[b] = 45;
    let tables = counts.normalize();

    // 'a' on the left hand, 'b' on the right
    let mut layout = Layout::empty("split");
    layout.matrix[1][2] = a as i8;
    layout.matrix[1][9] = b as i8;
    let analysis = analyze(&layout, &tables, catalog);

    let balance = catalog.find_meta("Hand Balance").unwrap();
    assert_eq!(analysis.meta[balance], 10.0);

    // flipping the hands flips the sign before the absolute value
    let mut mirrored = Layout::empty("split");
    mirrored.matrix[1][2] = b as i8;
    mirrored.matrix[1][9] = a as i8;
    let mirrored_analysis = analyze(&mirrored, &tables, catalog);
    assert_eq!(mirrored_analysis.meta[balance], 10.0);
}

#[test]
fn reduced_score_is_the_exact_weighted_sum() {
    let analyzer = common::analyzer();
    let weights = CustomWeights {
        sfb: -5.0,
        sfs: -2.0,
        lsb: -1.0,
        alt: 1.0,
        rolls: 1.0,
    };
    let report = analyzer.evaluate(common::QWERTY, &weights).unwrap();

    let v = &report.stat_values;
    let expected = v.sfb * weights.sfb
        + v.sfs * weights.sfs
        + v.lsb * weights.lsb
        + v.alt * weights.alt
        + v.rolls * weights.rolls;
    assert_eq!(report.score, expected);
    assert!(v.alt > 0.0);
    assert!(v.rolls > 0.0);
}

#[test]
fn skip_flagged_stats_are_not_evaluated() {
    let language = common::test_language();
    let mut counts = CorpusCounts::new();
    counts.ingest(common::PANGRAM.chars(), &language);
    let tables = counts.normalize();

    let catalog = StatCatalog::build(Some(&common::sparse_weights())).unwrap();
    let layout = Layout::from_api_string("qwerty", common::QWERTY, &language).unwrap();
    let analysis = analyze(&layout, &tables, &catalog);

    // russor stays skipped, so its slot never moves off zero
    let russor = catalog.find(TierRef::Bi, "Full Russor Bigram").unwrap();
    assert!(catalog.bi[russor].skip);
    assert_eq!(analysis.bi[russor], 0.0);

    // while the weighted stats do contribute
    let sfb = catalog.find(TierRef::Bi, "Same Finger Bigram").unwrap();
    assert!(analysis.bi[sfb] > 0.0);
    assert!(analysis.score != 0.0);
}

#[test]
fn skip_distances_are_independent() {
    let analyzer = common::analyzer();
    let layout = Layout::from_api_string("qwerty", common::QWERTY, &analyzer.language).unwrap();
    let analysis = analyzer.analyze(&layout);

    let sfs = analyzer
        .catalog
        .find(TierRef::Skip(1), "Same Finger Skipgram")
        .unwrap();
    let row = &analysis.skip[sfs];
    assert_eq!(row[0], 0.0, "slot 0 must stay unused");
    // the pangram is long enough to populate every distance
    assert!((1..SKIP_SLOTS).any(|d| row[d] > 0.0));
}
