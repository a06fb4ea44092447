use keygauge_core::consts::{DIM1, DIM2, DIM3, DIM4, LANG_LENGTH};
use keygauge_core::corpus::CorpusCounts;
use keygauge_core::index::{
    flat_bi, flat_mono, flat_quad, flat_tri, unflat_bi, unflat_mono, unflat_quad, unflat_tri,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn mono_normalization_sums_to_one_hundred_or_zero(
        counts in proptest::collection::vec(0u32..10_000, LANG_LENGTH)
    ) {
        let mut corpus = CorpusCounts::new();
        corpus.mono.copy_from_slice(&counts);
        let tables = corpus.normalize();

        let sum: f32 = (0..LANG_LENGTH).map(|i| tables.mono(i)).sum();
        let total: u64 = counts.iter().map(|&c| c as u64).sum();
        if total == 0 {
            prop_assert_eq!(sum, 0.0);
        } else {
            prop_assert!((sum - 100.0).abs() < 1e-3, "sum was {}", sum);
        }
    }

    #[test]
    fn skip_distances_normalize_independently(
        d in 1usize..10,
        count in 1u32..1_000
    ) {
        let mut corpus = CorpusCounts::new();
        // a single record at one distance must not leak into the others
        corpus.skip[d * LANG_LENGTH * LANG_LENGTH + 3] = count;
        let tables = corpus.normalize();

        prop_assert_eq!(tables.skip(d, 0, 3), 100.0);
        for other in 1..10 {
            if other != d {
                prop_assert_eq!(tables.skip(other, 0, 3), 0.0);
            }
        }
    }

    #[test]
    fn mono_index_roundtrip(i in 0..DIM1 as i32) {
        prop_assert_eq!(flat_mono(unflat_mono(i)), i);
    }

    #[test]
    fn bi_index_roundtrip(i in 0..DIM2 as i32) {
        let (a, b) = unflat_bi(i);
        prop_assert_eq!(flat_bi(a, b), i);
    }

    #[test]
    fn tri_index_roundtrip(i in 0..DIM3 as i32) {
        let (a, b, c) = unflat_tri(i);
        prop_assert_eq!(flat_tri(a, b, c), i);
    }

    #[test]
    fn quad_index_roundtrip(i in 0..DIM4 as i32) {
        let (a, b, c, d) = unflat_quad(i);
        prop_assert_eq!(flat_quad(a, b, c, d), i);
    }
}
