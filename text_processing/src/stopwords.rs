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

use std::borrow::Borrow;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::hash::Hash;
use std::io;
use camino::{Utf8Path, Utf8PathBuf};
use compact_str::{CompactString, ToCompactString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decides if a word is excluded from the analysis.
/// Implementations are loaded once and shared read-only between all workers.
pub trait StopWordFilter: Send + Sync {
    fn is_stop_word(&self, word: &str) -> bool;
}

/// A set of case-normalized stopwords.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(transparent)]
pub struct StopWordList {
    words: HashSet<CompactString>
}

impl StopWordList {
    /// Creates a list from arbitrary words, trims and lowercases them.
    /// Empty entries are ignored.
    pub fn from_words<I, Q>(words: I) -> Self
    where
        I: IntoIterator<Item=Q>,
        Q: AsRef<str>
    {
        let mut new = Self::default();
        new.extend(words.into_iter().filter_map(|value| normalize(value.as_ref())));
        new
    }

    /// Parses the content of a stopword file.
    /// Words can be separated by commas, line breaks or both.
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.split(|c| c == ',' || c == '\n' || c == '\r'))
    }

    /// Loads a stopword file. Bytes that are not valid utf-8 are replaced.
    pub fn load_file<P: AsRef<Utf8Path>>(path: P) -> Result<Self, StopWordLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| StopWordLoadError {
            path: path.to_path_buf(),
            source
        })?;
        let list = Self::parse(&String::from_utf8_lossy(&raw));
        log::debug!("Loaded {} stopwords from {}.", list.len(), path);
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        CompactString: Borrow<Q>,
        Q: Hash + Eq, {
        self.words.contains(value)
    }
}

fn normalize(word: &str) -> Option<CompactString> {
    let word = word.trim();
    (!word.is_empty()).then(|| word.to_lowercase().to_compact_string())
}

impl<Q> Extend<Q> for StopWordList where Q: ToCompactString {
    fn extend<T: IntoIterator<Item=Q>>(&mut self, iter: T) {
        self.words.extend(iter.into_iter().map(|value| value.to_compact_string()));
        self.words.shrink_to_fit();
    }
}

impl StopWordFilter for StopWordList {
    #[inline]
    fn is_stop_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Failed to read a stopword file.
#[derive(Debug, Error)]
#[error("Failed to read the stopwords from '{path}' with:\n{source}")]
pub struct StopWordLoadError {
    path: Utf8PathBuf,
    #[source]
    source: io::Error,
}

impl StopWordLoadError {
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}


/// Where the stopwords come from.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq, Default)]
#[serde(try_from = "StopWordRepositoryDev", into = "StopWordRepositoryDev")]
pub enum StopWordRepository {
    /// No stopwords at all.
    #[default]
    Empty,
    File { file: Utf8PathBuf },
    Inline { words: Vec<String> },
}

impl StopWordRepository {
    pub fn load(&self) -> Result<StopWordList, StopWordLoadError> {
        match self {
            StopWordRepository::Empty => {
                Ok(StopWordList::default())
            }
            StopWordRepository::File { file } => {
                StopWordList::load_file(file)
            }
            StopWordRepository::Inline { words } => {
                Ok(StopWordList::from_words(words))
            }
        }
    }
}

#[derive(Debug, Error)]
#[error("Was not able to properly convert the definition to a recognized StopWordRepository definition: {0:?}")]
#[repr(transparent)]
pub struct StopWordRepositoryConversionError(StopWordRepositoryDev);

impl TryFrom<StopWordRepositoryDev> for StopWordRepository {
    type Error = StopWordRepositoryConversionError;

    fn try_from(value: StopWordRepositoryDev) -> Result<Self, Self::Error> {
        match value {
            StopWordRepositoryDev { file: None, words: None } => {
                Ok(Self::Empty)
            }
            StopWordRepositoryDev { file: Some(file), words: None } => {
                Ok(Self::File { file })
            }
            StopWordRepositoryDev { file: None, words: Some(words) } => {
                Ok(Self::Inline { words })
            }
            err => Err(StopWordRepositoryConversionError(err))
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
struct StopWordRepositoryDev {
    #[serde(skip_serializing_if = "Option::is_none", alias = "path")]
    file: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<Vec<String>>,
}

impl From<StopWordRepository> for StopWordRepositoryDev {
    fn from(value: StopWordRepository) -> Self {
        match value {
            StopWordRepository::Empty => {
                StopWordRepositoryDev::default()
            }
            StopWordRepository::File { file } => {
                StopWordRepositoryDev {
                    file: Some(file),
                    ..Default::default()
                }
            }
            StopWordRepository::Inline { words } => {
                StopWordRepositoryDev {
                    words: Some(words),
                    ..Default::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;
    use camino_tempfile::NamedUtf8TempFile;
    use crate::stopwords::{StopWordFilter, StopWordList, StopWordRepository};

    #[test]
    fn parses_comma_separated_and_line_based_lists(){
        let list = StopWordList::parse("the,a, And\nof\r\nto,,\n");
        assert_eq!(5, list.len());
        for word in ["the", "a", "and", "of", "to"] {
            assert!(list.is_stop_word(word), "Missing {word}");
        }
        assert!(!list.is_stop_word("And"));
        assert!(!list.is_stop_word(""));
    }

    #[test]
    fn loads_from_file(){
        let mut file = NamedUtf8TempFile::new().unwrap();
        write!(file, "i,me,my,myself,we").unwrap();
        file.flush().unwrap();

        let repository = StopWordRepository::File { file: file.path().to_path_buf() };
        let list = repository.load().unwrap();
        assert_eq!(5, list.len());
        assert!(list.is_stop_word("myself"));
    }

    #[test]
    fn missing_file_names_the_path(){
        let repository = StopWordRepository::File { file: "./does/not/exist.txt".into() };
        let err = repository.load().unwrap_err();
        assert_eq!("./does/not/exist.txt", err.path().as_str());
    }

    #[test]
    fn repository_definitions_deserialize(){
        let empty: StopWordRepository = serde_json::from_str("{}").unwrap();
        assert_eq!(StopWordRepository::Empty, empty);

        let file: StopWordRepository = serde_json::from_str(r#"{"file": "stopwords-long.txt"}"#).unwrap();
        assert_eq!(StopWordRepository::File { file: "stopwords-long.txt".into() }, file);

        let inline: StopWordRepository = serde_json::from_str(r#"{"words": ["the", "a"]}"#).unwrap();
        assert_eq!(2, inline.load().unwrap().len());

        assert!(serde_json::from_str::<StopWordRepository>(r#"{"file": "x.txt", "words": []}"#).is_err());
    }
}
