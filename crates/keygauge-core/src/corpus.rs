//! Corpus frequency tables. Raw counts are collected once (from a cache
//! file when available, otherwise by scanning the corpus text), normalized
//! into percentage tables, and never touched again.

use crate::consts::{LANG_LENGTH, SKIP_SLOTS};
use crate::error::{KeygaugeError, KgResult};
use crate::index::{index_bi, index_mono, index_quad, index_skip, index_tri};
use crate::language::Language;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const L: usize = LANG_LENGTH;

/// How many recent character ids the ingest loop remembers: the current one,
/// three for bi/tri/quadgrams, and nine for the skip distances.
const MEMORY: usize = 11;

/// Raw integer counts, one flat buffer per tier.
pub struct CorpusCounts {
    pub mono: Vec<u32>,
    pub bi: Vec<u32>,
    pub tri: Vec<u32>,
    pub quad: Vec<u32>,
    pub skip: Vec<u32>,
}

impl Default for CorpusCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusCounts {
    pub fn new() -> Self {
        Self {
            mono: vec![0; L],
            bi: vec![0; L * L],
            tri: vec![0; L * L * L],
            quad: vec![0; L * L * L * L],
            skip: vec![0; SKIP_SLOTS * L * L],
        }
    }

    /// Scans a character stream, counting every n-gram tier in one pass.
    /// An id is only valid when it is 1..=50; anything else (including
    /// space, id 0) breaks the chains that run through it.
    pub fn ingest<I: IntoIterator<Item = char>>(&mut self, chars: I, lang: &Language) {
        let mut mem: [i16; MEMORY] = [-1; MEMORY];

        for c in chars {
            mem[0] = match lang.code_of(c) {
                Some(id) => id as i16,
                None => -1,
            };

            if valid(mem[0]) {
                let cur = mem[0] as usize;
                self.mono[index_mono(cur)] += 1;

                if valid(mem[1]) {
                    self.bi[index_bi(mem[1] as usize, cur)] += 1;
                    if valid(mem[2]) {
                        self.tri[index_tri(mem[2] as usize, mem[1] as usize, cur)] += 1;
                        if valid(mem[3]) {
                            self.quad[index_quad(
                                mem[3] as usize,
                                mem[2] as usize,
                                mem[1] as usize,
                                cur,
                            )] += 1;
                        }
                    }
                }

                for d in 2..MEMORY {
                    if valid(mem[d]) {
                        self.skip[index_skip(d - 1, mem[d] as usize, cur)] += 1;
                    }
                }
            }

            // shift the memory over one slot, dropping the oldest id
            for i in (1..MEMORY).rev() {
                mem[i] = mem[i - 1];
            }
        }
    }

    /// Reads a cache file. Each line is one record with a single-token tag:
    /// `m`, `b`, `t`, `q`, or a skip distance digit `1`..`9`. Records with
    /// unknown tags or out-of-range ids are dropped.
    pub fn read_cache(path: &Path) -> KgResult<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => {
                debug!("Cache not found at {:?}", path);
                return Ok(None);
            }
        };

        let mut counts = Self::new();
        for line in content.lines() {
            let mut tokens = line.split_whitespace();
            let tag = match tokens.next() {
                Some(t) => t,
                None => continue,
            };
            let mut ints = tokens.flat_map(|t| t.parse::<usize>().ok());
            match tag {
                "m" => {
                    if let (Some(i), Some(n)) = (ints.next(), ints.next()) {
                        if i < L {
                            counts.mono[index_mono(i)] = n as u32;
                        }
                    }
                }
                "b" => {
                    if let (Some(i), Some(j), Some(n)) = (ints.next(), ints.next(), ints.next()) {
                        if i < L && j < L {
                            counts.bi[index_bi(i, j)] = n as u32;
                        }
                    }
                }
                "t" => {
                    if let (Some(i), Some(j), Some(k), Some(n)) =
                        (ints.next(), ints.next(), ints.next(), ints.next())
                    {
                        if i < L && j < L && k < L {
                            counts.tri[index_tri(i, j, k)] = n as u32;
                        }
                    }
                }
                "q" => {
                    if let (Some(i), Some(j), Some(k), Some(l), Some(n)) = (
                        ints.next(),
                        ints.next(),
                        ints.next(),
                        ints.next(),
                        ints.next(),
                    ) {
                        if i < L && j < L && k < L && l < L {
                            counts.quad[index_quad(i, j, k, l)] = n as u32;
                        }
                    }
                }
                "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
                    let d = tag.as_bytes()[0] as usize - b'0' as usize;
                    if let (Some(i), Some(j), Some(n)) = (ints.next(), ints.next(), ints.next()) {
                        if i < L && j < L {
                            counts.skip[index_skip(d, i, j)] = n as u32;
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(Some(counts))
    }

    /// Writes the cache. Only non-zero counts are emitted. Skipgram records
    /// keep their digit prefix rather than a letter tag.
    pub fn write_cache(&self, path: &Path) -> KgResult<()> {
        let mut out = String::new();
        for i in 0..L {
            for j in 0..L {
                for k in 0..L {
                    for l in 0..L {
                        let q = self.quad[index_quad(i, j, k, l)];
                        if q > 0 {
                            out.push_str(&format!("q {i} {j} {k} {l} {q}\n"));
                        }
                    }
                    let t = self.tri[index_tri(i, j, k)];
                    if t > 0 {
                        out.push_str(&format!("t {i} {j} {k} {t}\n"));
                    }
                }
                let b = self.bi[index_bi(i, j)];
                if b > 0 {
                    out.push_str(&format!("b {i} {j} {b}\n"));
                }
                for d in 1..SKIP_SLOTS {
                    let s = self.skip[index_skip(d, i, j)];
                    if s > 0 {
                        out.push_str(&format!("{d} {i} {j} {s}\n"));
                    }
                }
            }
            let m = self.mono[index_mono(i)];
            if m > 0 {
                out.push_str(&format!("m {i} {m}\n"));
            }
        }

        let mut file = fs::File::create(path)
            .map_err(|_| KeygaugeError::Corpus("Corpus cache file failed to be created.".into()))?;
        file.write_all(out.as_bytes())?;
        Ok(())
    }

    /// Divides each tier by its own total and scales to percentages.
    /// A tier with no occurrences keeps all-zero frequencies.
    pub fn normalize(&self) -> CorpusTables {
        let mut tables = CorpusTables {
            mono: vec![0.0; L],
            bi: vec![0.0; L * L],
            tri: vec![0.0; L * L * L],
            quad: vec![0.0; L * L * L * L],
            skip: vec![0.0; SKIP_SLOTS * L * L],
        };

        normalize_tier(&self.mono, &mut tables.mono);
        normalize_tier(&self.bi, &mut tables.bi);
        normalize_tier(&self.tri, &mut tables.tri);
        normalize_tier(&self.quad, &mut tables.quad);

        // skip distances normalize independently of each other
        for d in 1..SKIP_SLOTS {
            let lo = d * L * L;
            let hi = lo + L * L;
            normalize_tier(&self.skip[lo..hi], &mut tables.skip[lo..hi]);
        }

        tables
    }
}

fn valid(id: i16) -> bool {
    id > 0 && (id as usize) < L
}

fn normalize_tier(counts: &[u32], freqs: &mut [f32]) {
    let total: u64 = counts.iter().map(|&c| c as u64).sum();
    if total == 0 {
        return;
    }
    for (freq, &count) in freqs.iter_mut().zip(counts) {
        *freq = count as f32 * 100.0 / total as f32;
    }
}

/// Normalized percentage tables, immutable once built.
#[derive(Debug)]
pub struct CorpusTables {
    mono: Vec<f32>,
    bi: Vec<f32>,
    tri: Vec<f32>,
    quad: Vec<f32>,
    skip: Vec<f32>,
}

impl CorpusTables {
    #[inline]
    pub fn mono(&self, i: usize) -> f32 {
        self.mono[index_mono(i)]
    }

    #[inline]
    pub fn bi(&self, i: usize, j: usize) -> f32 {
        self.bi[index_bi(i, j)]
    }

    #[inline]
    pub fn tri(&self, i: usize, j: usize, k: usize) -> f32 {
        self.tri[index_tri(i, j, k)]
    }

    #[inline]
    pub fn quad(&self, i: usize, j: usize, k: usize, l: usize) -> f32 {
        self.quad[index_quad(i, j, k, l)]
    }

    #[inline]
    pub fn skip(&self, d: usize, i: usize, j: usize) -> f32 {
        self.skip[index_skip(d, i, j)]
    }
}

fn cache_path(root: &Path, lang: &str, corpus: &str) -> PathBuf {
    root.join(lang).join("corpora").join(format!("{corpus}.cache"))
}

fn text_path(root: &Path, lang: &str, corpus: &str) -> PathBuf {
    root.join(lang).join("corpora").join(format!("{corpus}.txt"))
}

/// Loads corpus tables for a language: cache when present, otherwise a full
/// scan of the corpus text followed by a cache write.
pub fn load(root: &Path, lang: &Language, corpus: &str) -> KgResult<CorpusTables> {
    let cache = cache_path(root, &lang.name, corpus);
    let counts = match CorpusCounts::read_cache(&cache)? {
        Some(counts) => {
            info!("Corpus cache loaded from {:?}", cache);
            counts
        }
        None => {
            let text = text_path(root, &lang.name, corpus);
            let content = fs::read_to_string(&text).map_err(|_| {
                KeygaugeError::Corpus(
                    "Corpus file not found, make sure the file ends in .txt, \
                     but the name in config/parameters does not"
                        .into(),
                )
            })?;
            info!("Scanning corpus text {:?} ({} bytes)", text, content.len());
            let mut counts = CorpusCounts::new();
            counts.ingest(content.chars(), lang);
            counts.write_cache(&cache)?;
            counts
        }
    };
    Ok(counts.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn lang() -> Language {
        let mut line = String::from("  ");
        for c in "abcdefghijklmnopqrstuvwxyz".chars() {
            line.push(c);
            line.push(c);
        }
        Language::parse("test", &line).unwrap()
    }

    #[test]
    fn ingest_counts_every_tier() {
        let lang = lang();
        let mut counts = CorpusCounts::new();
        counts.ingest("abcd".chars(), &lang);

        let (a, b, c, d) = (1, 2, 3, 4);
        assert_eq!(counts.mono[index_mono(a)], 1);
        assert_eq!(counts.bi[index_bi(a, b)], 1);
        assert_eq!(counts.bi[index_bi(b, a)], 0);
        assert_eq!(counts.tri[index_tri(a, b, c)], 1);
        assert_eq!(counts.quad[index_quad(a, b, c, d)], 1);
        // "abcd": c follows a at distance 1, d follows a at distance 2
        assert_eq!(counts.skip[index_skip(1, a, c)], 1);
        assert_eq!(counts.skip[index_skip(2, a, d)], 1);
    }

    #[test]
    fn invalid_characters_break_chains() {
        let lang = lang();
        let mut counts = CorpusCounts::new();
        counts.ingest("ab!cd".chars(), &lang);

        assert_eq!(counts.bi[index_bi(1, 2)], 1);
        assert_eq!(counts.bi[index_bi(2, 3)], 0);
        assert_eq!(counts.bi[index_bi(3, 4)], 1);
        assert_eq!(counts.tri.iter().sum::<u32>(), 0);
        // the skip-1 slot still sees b..c across the invalid character
        assert_eq!(counts.skip[index_skip(1, 2, 3)], 1);
    }

    #[test]
    fn space_never_counts() {
        let lang = lang();
        let mut counts = CorpusCounts::new();
        counts.ingest("a a".chars(), &lang);
        assert_eq!(counts.mono[index_mono(0)], 0);
        assert_eq!(counts.mono[index_mono(1)], 2);
        assert_eq!(counts.bi.iter().sum::<u32>(), 0);
        assert_eq!(counts.skip[index_skip(1, 1, 1)], 1);
    }

    #[test]
    fn normalization_sums_to_one_hundred() {
        let lang = lang();
        let mut counts = CorpusCounts::new();
        counts.ingest("the quick brown fox jumps over the lazy dog".chars(), &lang);
        let tables = counts.normalize();

        let sum: f32 = (0..L).map(|i| tables.mono(i)).sum();
        assert!((sum - 100.0).abs() < 1e-4, "mono sum {sum}");
        let sum: f32 = (0..L)
            .flat_map(|i| (0..L).map(move |j| (i, j)))
            .map(|(i, j)| tables.bi(i, j))
            .sum();
        assert!((sum - 100.0).abs() < 1e-4, "bi sum {sum}");
    }

    #[test]
    fn empty_tier_stays_zero() {
        let counts = CorpusCounts::new();
        let tables = counts.normalize();
        assert_eq!(tables.mono(1), 0.0);
        assert_eq!(tables.quad(1, 2, 3, 4), 0.0);
    }

    #[test]
    fn cache_roundtrip_preserves_counts() {
        let lang = lang();
        let mut counts = CorpusCounts::new();
        counts.ingest("hello world, the quick brown fox".chars(), &lang);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.cache");
        counts.write_cache(&path).unwrap();

        let reread = CorpusCounts::read_cache(&path).unwrap().unwrap();
        assert_eq!(counts.mono, reread.mono);
        assert_eq!(counts.bi, reread.bi);
        assert_eq!(counts.tri, reread.tri);
        assert_eq!(counts.quad, reread.quad);
        assert_eq!(counts.skip, reread.skip);
    }

    #[test]
    fn cache_skipgram_lines_keep_their_digit_prefix() {
        let lang = lang();
        let mut counts = CorpusCounts::new();
        counts.ingest("abc".chars(), &lang);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.cache");
        counts.write_cache(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.lines().any(|l| l.starts_with("1 1 3 ")));
    }

    #[test]
    fn cache_reader_ignores_unknown_tags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.cache");
        fs::write(&path, "x 1 2 3\nm 1 7\nwhatever\nb 1 2 4\n").unwrap();

        let counts = CorpusCounts::read_cache(&path).unwrap().unwrap();
        assert_eq!(counts.mono[index_mono(1)], 7);
        assert_eq!(counts.bi[index_bi(1, 2)], 4);
    }
}
