//! Startup configuration: a small `key value` file in the working
//! directory, overridable from the command line.

use crate::error::{KeygaugeError, KgResult};
use clap::Args;
use std::fs;
use std::path::Path;

/// How much the process prints. Maps onto the tracing level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl OutputMode {
    pub fn parse(s: &str) -> KgResult<Self> {
        match s {
            "q" | "quiet" | "SHUTUP" => Ok(Self::Quiet),
            "n" | "norm" | "normal" => Ok(Self::Normal),
            "v" | "loud" | "verbose" => Ok(Self::Verbose),
            _ => Err(KeygaugeError::Config(
                "invalid output mode selected".into(),
            )),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Quiet => 'q',
            Self::Normal => 'n',
            Self::Verbose => 'v',
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub language: String,
    pub corpus: String,
    pub output: OutputMode,
}

impl Config {
    /// Reads `config.conf`: at least three whitespace-separated `key value`
    /// pairs, in order the language name, the corpus name and the output
    /// mode. Keys are only there for the reader.
    pub fn read(path: &Path) -> KgResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|_| KeygaugeError::Config("Required file config.conf not found.".into()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> KgResult<Self> {
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let value = |pair: usize, what: &str| -> KgResult<&str> {
            tokens.get(pair * 2 + 1).copied().ok_or_else(|| {
                KeygaugeError::Config(format!("Failed to read {what} from config file."))
            })
        };

        Ok(Self {
            language: value(0, "language name")?.to_string(),
            corpus: value(1, "corpus name")?.to_string(),
            output: OutputMode::parse(value(2, "output mode")?)?,
        })
    }

    /// Command line flags win over the file.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> KgResult<()> {
        if let Some(lang) = overrides.lang.as_deref() {
            self.language = lang.to_string();
        }
        if let Some(corpus) = overrides.corpus.as_deref() {
            self.corpus = corpus.to_string();
        }
        if let Some(mode) = overrides.output.as_deref() {
            self.output = OutputMode::parse(mode)?;
        }
        Ok(())
    }
}

/// The command line surface, flattened into the server's argument parser.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Language name, overrides the config file
    #[arg(short = 'l')]
    pub lang: Option<String>,

    /// Corpus name, overrides the config file
    #[arg(short = 'c')]
    pub corpus: Option<String>,

    /// Output mode (q, n, v), overrides the config file
    #[arg(short = 'o')]
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_pairs() {
        let config = Config::parse("lang english\ncorpus shai\noutput n\n").unwrap();
        assert_eq!(config.language, "english");
        assert_eq!(config.corpus, "shai");
        assert_eq!(config.output, OutputMode::Normal);
    }

    #[test]
    fn pairs_may_share_a_line() {
        let config = Config::parse("lang english corpus shai output v").unwrap();
        assert_eq!(config.output, OutputMode::Verbose);
    }

    #[test]
    fn missing_pairs_fail() {
        assert!(Config::parse("lang english corpus shai").is_err());
        assert!(Config::parse("").is_err());
    }

    #[test]
    fn output_mode_synonyms() {
        assert_eq!(OutputMode::parse("SHUTUP").unwrap(), OutputMode::Quiet);
        assert_eq!(OutputMode::parse("loud").unwrap(), OutputMode::Verbose);
        assert_eq!(OutputMode::parse("norm").unwrap(), OutputMode::Normal);
        assert!(OutputMode::parse("yes").is_err());
    }

    #[test]
    fn overrides_win() {
        let mut config = Config::parse("lang english corpus shai output q").unwrap();
        let overrides = ConfigOverrides {
            lang: Some("dutch".into()),
            corpus: None,
            output: Some("v".into()),
        };
        config.apply_overrides(&overrides).unwrap();
        assert_eq!(config.language, "dutch");
        assert_eq!(config.corpus, "shai");
        assert_eq!(config.output, OutputMode::Verbose);
    }
}
