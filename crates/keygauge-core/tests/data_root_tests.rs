// End-to-end loading from a data root: language file, corpus text, cache
// creation and reuse, weight file discovery, config reading.

use keygauge_core::config::{Config, OutputMode};
use keygauge_core::corpus;
use keygauge_core::language::Language;
use keygauge_core::weights::WeightSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn lang_line() -> String {
    let mut line = String::from("  ");
    for c in "abcdefghijklmnopqrstuvwxyz".chars() {
        line.push(c);
        line.push(c);
    }
    line
}

fn write_data_root(dir: &Path, corpus_text: &str) {
    let lang_dir = dir.join("english");
    fs::create_dir_all(lang_dir.join("corpora")).unwrap();
    fs::write(lang_dir.join("english.lang"), lang_line()).unwrap();
    fs::write(lang_dir.join("corpora").join("novel.txt"), corpus_text).unwrap();
}

#[test]
fn first_load_scans_the_text_and_writes_a_cache() {
    let dir = TempDir::new().unwrap();
    write_data_root(dir.path(), "hello keyboard world");

    let language = Language::load(dir.path(), "english").unwrap();
    let tables = corpus::load(dir.path(), &language, "novel").unwrap();

    let cache = dir.path().join("english").join("corpora").join("novel.cache");
    assert!(cache.exists(), "cache should be written after a text scan");

    let e = language.code_of('e').unwrap() as usize;
    assert!(tables.mono(e) > 0.0);
}

#[test]
fn second_load_prefers_the_cache() {
    let dir = TempDir::new().unwrap();
    write_data_root(dir.path(), "hello keyboard world");

    let language = Language::load(dir.path(), "english").unwrap();
    let first = corpus::load(dir.path(), &language, "novel").unwrap();

    // replace the text; cached counts must still win
    fs::write(
        dir.path().join("english").join("corpora").join("novel.txt"),
        "completely different words now",
    )
    .unwrap();
    let second = corpus::load(dir.path(), &language, "novel").unwrap();

    let h = language.code_of('h').unwrap() as usize;
    let w = language.code_of('w').unwrap() as usize;
    assert_eq!(first.mono(h), second.mono(h));
    assert_eq!(first.mono(w), second.mono(w));
}

#[test]
fn missing_corpus_text_is_fatal() {
    let dir = TempDir::new().unwrap();
    let lang_dir = dir.path().join("english");
    fs::create_dir_all(lang_dir.join("corpora")).unwrap();
    fs::write(lang_dir.join("english.lang"), lang_line()).unwrap();

    let language = Language::load(dir.path(), "english").unwrap();
    let err = corpus::load(dir.path(), &language, "novel").unwrap_err();
    assert!(err.to_string().contains("Corpus file not found"));
}

#[test]
fn missing_language_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = Language::load(dir.path(), "english").unwrap_err();
    assert!(err.to_string().contains("Lang file not found"));
}

#[test]
fn weight_files_are_found_per_language() {
    let dir = TempDir::new().unwrap();
    let weights_dir = dir.path().join("english").join("weights");
    fs::create_dir_all(&weights_dir).unwrap();
    fs::write(
        weights_dir.join("default.json"),
        r#"{ "bi": { "Same Finger Bigram": -1.5 } }"#,
    )
    .unwrap();

    let found = WeightSet::find(dir.path(), "english", "default").unwrap();
    assert_eq!(found.unwrap().bi["Same Finger Bigram"], -1.5);

    let absent = WeightSet::find(dir.path(), "english", "other").unwrap();
    assert!(absent.is_none());
}

#[test]
fn config_files_read_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.conf");
    fs::write(&path, "lang english\ncorpus novel\noutput q\n").unwrap();

    let config = Config::read(&path).unwrap();
    assert_eq!(config.language, "english");
    assert_eq!(config.corpus, "novel");
    assert_eq!(config.output, OutputMode::Quiet);

    let missing = Config::read(&dir.path().join("nope.conf")).unwrap_err();
    assert!(missing.to_string().contains("config.conf not found"));
}
