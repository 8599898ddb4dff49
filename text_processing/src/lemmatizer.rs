//Copyright 2024 Felix Engl
//
//Licensed under the Apache License, Version 2.0 (the "License");
//you may not use this file except in compliance with the License.
//You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
//Unless required by applicable law or agreed to in writing, software
//distributed under the License is distributed on an "AS IS" BASIS,
//WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//See the License for the specific language governing permissions and
//limitations under the License.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::io;
use std::sync::Arc;
use camino::{Utf8Path, Utf8PathBuf};
use compact_str::CompactString;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maps an inflected word to its canonical root, e.g. "rocks" to "rock".
pub trait Lemmatizer: Send + Sync {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// Leaves every word untouched.
#[derive(Debug, Copy, Clone, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    #[inline]
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(word)
    }
}

/// Approximates lemmatization with a snowball stemmer.
/// The stems are always lowercase.
pub struct StemmingLemmatizer {
    algorithm: Algorithm,
    stemmer: Stemmer,
}

impl StemmingLemmatizer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            stemmer: Stemmer::create(algorithm)
        }
    }
}

impl Debug for StemmingLemmatizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemmingLemmatizer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Lemmatizer for StemmingLemmatizer {
    #[inline]
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if word.chars().any(char::is_uppercase) {
            Cow::Owned(self.stemmer.stem(&word.to_lowercase()).into_owned())
        } else {
            self.stemmer.stem(word)
        }
    }
}

/// Looks up the root in an explicit table, unknown words are returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLemmatizer {
    roots: HashMap<CompactString, CompactString>
}

impl DictionaryLemmatizer {
    pub fn new(mut roots: HashMap<CompactString, CompactString>) -> Self {
        roots.shrink_to_fit();
        Self { roots }
    }

    /// Parses lines of `inflected<TAB>root` or `inflected,root`.
    /// Empty lines and lines starting with `#` are skipped.
    pub fn parse(content: &str) -> Result<Self, usize> {
        let mut roots = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue
            }
            let (inflected, root) = line
                .split_once('\t')
                .or_else(|| line.split_once(','))
                .ok_or(idx + 1)?;
            let (inflected, root) = (inflected.trim(), root.trim());
            if inflected.is_empty() || root.is_empty() {
                return Err(idx + 1)
            }
            roots.insert(
                CompactString::from(inflected.to_lowercase()),
                CompactString::from(root.to_lowercase())
            );
        }
        Ok(Self::new(roots))
    }

    pub fn load_file<P: AsRef<Utf8Path>>(path: P) -> Result<Self, LemmatizerLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LemmatizerLoadError::Io {
            path: path.to_path_buf(),
            source
        })?;
        let result = Self::parse(&content).map_err(|line| LemmatizerLoadError::MalformedLine {
            path: path.to_path_buf(),
            line
        })?;
        log::debug!("Loaded {} lemmata from {}.", result.len(), path);
        Ok(result)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match self.roots.get(word) {
            None => Cow::Borrowed(word),
            Some(root) => Cow::Owned(root.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum LemmatizerLoadError {
    #[error("Failed to read the lemma dictionary '{path}' with:\n{source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("The line {line} of the lemma dictionary '{path}' is not a pair of words!")]
    MalformedLine {
        path: Utf8PathBuf,
        line: usize
    }
}


/// Selects the lemmatizer used by the tokenizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LemmatizerConfig {
    Identity,
    Stemmer {
        #[serde(default = "_default_algorithm")]
        algorithm: Algorithm
    },
    Dictionary {
        file: Utf8PathBuf
    },
}

const fn _default_algorithm() -> Algorithm {
    Algorithm::English
}

impl Default for LemmatizerConfig {
    fn default() -> Self {
        Self::Stemmer { algorithm: _default_algorithm() }
    }
}

impl LemmatizerConfig {
    pub fn build(&self) -> Result<Arc<dyn Lemmatizer>, LemmatizerLoadError> {
        Ok(
            match self {
                LemmatizerConfig::Identity => Arc::new(IdentityLemmatizer),
                LemmatizerConfig::Stemmer { algorithm } => Arc::new(StemmingLemmatizer::new(*algorithm)),
                LemmatizerConfig::Dictionary { file } => Arc::new(DictionaryLemmatizer::load_file(file)?),
            }
        )
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;
    use camino_tempfile::NamedUtf8TempFile;
    use rust_stemmers::Algorithm;
    use crate::lemmatizer::{DictionaryLemmatizer, IdentityLemmatizer, Lemmatizer, LemmatizerConfig, LemmatizerLoadError, StemmingLemmatizer};

    #[test]
    fn identity_keeps_words(){
        assert_eq!("rocks", IdentityLemmatizer.lemmatize("rocks"));
    }

    #[test]
    fn stemmer_maps_plurals_to_root(){
        let lemmatizer = StemmingLemmatizer::new(Algorithm::English);
        assert_eq!("rock", lemmatizer.lemmatize("rocks"));
        assert_eq!("bat", lemmatizer.lemmatize("bats"));
        assert_eq!("room", lemmatizer.lemmatize("rooms"));
    }

    #[test]
    fn stemmer_lowercases_the_stem(){
        let lemmatizer = StemmingLemmatizer::new(Algorithm::English);
        assert_eq!("rock", lemmatizer.lemmatize("Rocks"));
        assert_eq!("room", lemmatizer.lemmatize("ROOMS"));
    }

    #[test]
    fn dictionary_falls_back_to_the_word(){
        let lemmatizer = DictionaryLemmatizer::parse("# comment\nrocks\trock\nwomen, woman\n\n").unwrap();
        assert_eq!(2, lemmatizer.len());
        assert_eq!("rock", lemmatizer.lemmatize("rocks"));
        assert_eq!("woman", lemmatizer.lemmatize("women"));
        assert_eq!("hotel", lemmatizer.lemmatize("hotel"));
    }

    #[test]
    fn dictionary_reports_bad_lines(){
        assert_eq!(Err(2), DictionaryLemmatizer::parse("rocks\trock\nbroken\n").map(|_| ()));

        let mut file = NamedUtf8TempFile::new().unwrap();
        writeln!(file, "rocks\trock").unwrap();
        writeln!(file, "nope").unwrap();
        file.flush().unwrap();
        match DictionaryLemmatizer::load_file(file.path()) {
            Err(LemmatizerLoadError::MalformedLine { line, .. }) => assert_eq!(2, line),
            other => panic!("Expected a malformed line but got {other:?}")
        }
    }

    #[test]
    fn config_builds_lemmatizers(){
        let identity: LemmatizerConfig = serde_json::from_str(r#"{"kind": "identity"}"#).unwrap();
        assert_eq!("rocks", identity.build().unwrap().lemmatize("rocks"));

        let stemmer: LemmatizerConfig = serde_json::from_str(r#"{"kind": "stemmer"}"#).unwrap();
        assert_eq!("rock", stemmer.build().unwrap().lemmatize("rocks"));

        assert!(LemmatizerConfig::Dictionary { file: "./missing.tsv".into() }.build().is_err());
    }
}
